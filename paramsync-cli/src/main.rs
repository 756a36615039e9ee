//! paramsync — make an SSM Parameter Store entry match a desired state.
//!
//! # Usage
//!
//! ```text
//! paramsync --name <name> --value <value> [--description <text>]
//!           [--tier Standard|Advanced|Intelligent-Tiering] [--dry-run]
//!           [--region <region>] [--profile <profile>] [--endpoint-url <url>]
//! ```
//!
//! Creates the parameter if absent, overwrites it if any field drifted, and
//! leaves it alone otherwise. Exits non-zero on any failure.

mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use paramsync_aws::{ClientOptions, SsmStore};
use paramsync_core::{ParameterRecord, Tier};
use paramsync_sync::ReconcileConfig;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "paramsync",
    version,
    about = "Create or update an AWS SSM parameter only when it differs from the desired state",
    long_about = None,
)]
struct Cli {
    /// AWS SSM parameter name.
    #[arg(long)]
    name: String,

    /// AWS SSM parameter value (stored as a SecureString).
    #[arg(long)]
    value: String,

    /// AWS SSM parameter description.
    #[arg(long)]
    description: Option<String>,

    /// The parameter tier to assign: Standard, Advanced or Intelligent-Tiering.
    #[arg(long)]
    tier: Option<Tier>,

    /// Show what would change without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// AWS region; defaults to the SDK's region discovery.
    #[arg(long)]
    region: Option<String>,

    /// Named profile from the shared AWS config.
    #[arg(long)]
    profile: Option<String>,

    /// Override the SSM endpoint, e.g. for a local emulator.
    #[arg(long)]
    endpoint_url: Option<String>,
}

impl Cli {
    fn reconcile_config(&self) -> ReconcileConfig {
        let desired = ParameterRecord::new(self.name.as_str(), self.value.as_str())
            .with_description(self.description.clone().unwrap_or_default())
            .with_tier(self.tier);
        ReconcileConfig::new(desired).dry_run(self.dry_run)
    }

    fn client_options(&self) -> ClientOptions {
        ClientOptions {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.reconcile_config();
    let store = SsmStore::connect(&cli.client_options()).context("could not create SSM client")?;

    let mut stdout = std::io::stdout().lock();
    let status = report::reconcile(&store, &config, &mut stdout)
        .with_context(|| format!("reconcile failed for '{}'", cli.name))?;
    Ok(status.into())
}

/// Diagnostics go to stderr so stdout carries only the status report.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_build_desired_record() {
        let cli = Cli::try_parse_from([
            "paramsync",
            "--name",
            "/app/token",
            "--value",
            "a",
            "--tier",
            "Intelligent-Tiering",
            "--dry-run",
        ])
        .expect("parse");

        let config = cli.reconcile_config();
        assert!(config.dry_run);
        assert_eq!(config.desired.name.as_str(), "/app/token");
        assert_eq!(config.desired.value, "a");
        assert_eq!(config.desired.description, "");
        assert_eq!(config.desired.tier, Some(Tier::IntelligentTiering));
        assert_eq!(cli.client_options(), ClientOptions::default());
    }

    #[test]
    fn client_overrides_are_passed_through() {
        let cli = Cli::try_parse_from([
            "paramsync",
            "--name",
            "x",
            "--value",
            "y",
            "--region",
            "eu-west-1",
            "--profile",
            "ops",
            "--endpoint-url",
            "http://localhost:4566",
        ])
        .expect("parse");

        let options = cli.client_options();
        assert_eq!(options.region.as_deref(), Some("eu-west-1"));
        assert_eq!(options.profile.as_deref(), Some("ops"));
        assert_eq!(options.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = Cli::try_parse_from(["paramsync", "--name", "x", "--value", "y", "--tier", "Gold"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown tier"));
    }
}
