//! Drives one reconciliation and writes the human-readable status report.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use paramsync_core::{ParameterStore, StoreError};
use paramsync_sync::{fingerprint, ReconcileConfig, ReconcileError, ReconcileOutcome, Reconciler};

const RATE_LIMIT_DOCS: &str = "https://docs.aws.amazon.com/general/latest/gr/ssm.html";
const PUT_PARAMETER_DOCS: &str = "https://docs.aws.amazon.com/systems-manager/latest/APIReference/API_PutParameter.html#API_PutParameter_RequestSyntax";

/// How the run ended, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Reconcile `config.desired` against `store`, reporting each step to `out`.
///
/// Known store failures are reported and yield [`Status::Failure`]; anything
/// else is returned as an error.
pub fn reconcile<S, W>(store: S, config: &ReconcileConfig, out: &mut W) -> Result<Status>
where
    S: ParameterStore,
    W: Write,
{
    let reconciler = Reconciler::new(store);
    let desired = &config.desired;
    let prefix = if config.dry_run { "[dry-run] " } else { "" };

    let plan = match reconciler.plan(desired) {
        Ok(plan) => plan,
        Err(err) => return report_failure(err, out),
    };

    match &plan.observed {
        Some(observed) => {
            writeln!(out, "Parameter exists, checking parameter details....")?;
            writeln!(out, " - Parameter value: {}", fingerprint(&observed.value))?;
            if plan.is_current() {
                writeln!(
                    out,
                    " - {}",
                    "Verified parameter details are current.".green()
                )?;
                return Ok(Status::Success);
            }
            writeln!(
                out,
                " - Parameter details need to be updated due to: {}.",
                plan.drift
            )?;
        }
        None => writeln!(out, "Parameter does not exist and needs to be created.")?,
    }

    match reconciler.execute(&plan, desired, config.dry_run) {
        Ok(outcome) => {
            let line = match outcome {
                ReconcileOutcome::Unchanged => "Verified parameter details are current.",
                ReconcileOutcome::Created | ReconcileOutcome::Updated { .. } => {
                    "Parameter successfully created/updated."
                }
                ReconcileOutcome::WouldCreate => "Parameter would be created.",
                ReconcileOutcome::WouldUpdate { .. } => "Parameter would be updated.",
            };
            writeln!(out, " - {prefix}{}", line.green())?;
            Ok(Status::Success)
        }
        Err(err) => report_failure(err, out),
    }
}

fn report_failure<W: Write>(err: ReconcileError, out: &mut W) -> Result<Status> {
    let Some(lines) = failure_lines(&err) else {
        return Err(err.into());
    };
    tracing::debug!(error = %err, "store rejected the request");

    let mut lines = lines.into_iter();
    if let Some(first) = lines.next() {
        writeln!(out, "{} {}", "✗".red().bold(), first.red())?;
    }
    for line in lines {
        writeln!(out, "  {line}")?;
    }
    Ok(Status::Failure)
}

/// Status lines for failures the user can act on; `None` means propagate.
fn failure_lines(err: &ReconcileError) -> Option<Vec<&'static str>> {
    let lines = match (err, err.store_error()) {
        (ReconcileError::Fetch { .. }, StoreError::RateLimited { .. }) => vec![
            "Parameter Store request rate exceeded",
            "Parameter Store API calls can't exceed the maximum allowed API request rate per account and per Region.",
            RATE_LIMIT_DOCS,
        ],
        (ReconcileError::Apply { .. }, StoreError::RateLimited { .. }) => vec![
            "Parameter Limit Exceeded",
            "Parameter Store API calls can't exceed the maximum allowed API request rate per account and per Region.",
            RATE_LIMIT_DOCS,
        ],
        (_, StoreError::InvalidPattern { .. }) => {
            vec!["Invalid Allowed Pattern", PUT_PARAMETER_DOCS]
        }
        (_, StoreError::ConcurrentUpdateConflict { .. }) => vec![
            "There are concurrent updates for a resource that supports one update at a time.",
        ],
        (_, StoreError::NotFound { .. } | StoreError::Unknown { .. }) => return None,
    };
    Some(lines)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
