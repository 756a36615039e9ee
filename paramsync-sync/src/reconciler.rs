//! Fetch → diff → apply for a single parameter.
//!
//! The reconciler holds nothing but the injected store. Each call reads the
//! current state fresh, so two runs with the same desired state write at
//! most once.

use paramsync_core::{ParameterName, ParameterRecord, ParameterStore, StoreError};

use crate::diff::{self, Drift};
use crate::error::{apply_err, fetch_err, ReconcileError};

// ---------------------------------------------------------------------------
// Plan and outcome
// ---------------------------------------------------------------------------

/// What a run found before deciding whether to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Current record, `None` if the key does not exist.
    pub observed: Option<ParameterRecord>,
    pub drift: Drift,
}

impl Plan {
    pub fn exists(&self) -> bool {
        self.observed.is_some()
    }

    pub fn is_current(&self) -> bool {
        self.drift.is_empty()
    }
}

/// Result of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Store already matched; nothing written.
    Unchanged,
    /// Key was absent and has been created.
    Created,
    /// Key existed with drift and has been overwritten.
    Updated { drift: Drift },
    /// Dry run: the key would have been created.
    WouldCreate,
    /// Dry run: the key would have been overwritten.
    WouldUpdate { drift: Drift },
}

impl ReconcileOutcome {
    pub fn wrote(&self) -> bool {
        matches!(
            self,
            ReconcileOutcome::Created | ReconcileOutcome::Updated { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

pub struct Reconciler<S> {
    store: S,
}

impl<S: ParameterStore> Reconciler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the current record for `name`. Absence is `Ok(None)`.
    pub fn fetch(&self, name: &ParameterName) -> Result<Option<ParameterRecord>, ReconcileError> {
        match self.store.get(name) {
            Ok(record) => {
                tracing::debug!(parameter = %name, tier = ?record.tier, "parameter exists");
                Ok(Some(record))
            }
            Err(StoreError::NotFound { .. }) => {
                tracing::debug!(parameter = %name, "parameter not found");
                Ok(None)
            }
            Err(err) => Err(fetch_err(name, err)),
        }
    }

    /// Fields in which `observed` differs from `desired`.
    pub fn diff(observed: Option<&ParameterRecord>, desired: &ParameterRecord) -> Drift {
        diff::diff(observed, desired)
    }

    /// Upsert `desired` with a single store write.
    pub fn apply(&self, desired: &ParameterRecord) -> Result<(), ReconcileError> {
        self.store
            .put(desired)
            .map_err(|err| apply_err(&desired.name, err))?;
        tracing::info!(parameter = %desired.name, "wrote parameter");
        Ok(())
    }

    /// Fetch and diff without writing.
    pub fn plan(&self, desired: &ParameterRecord) -> Result<Plan, ReconcileError> {
        let observed = self.fetch(&desired.name)?;
        let drift = Self::diff(observed.as_ref(), desired);
        tracing::debug!(parameter = %desired.name, drift = %drift, "computed drift");
        Ok(Plan { observed, drift })
    }

    /// Write `desired` if `plan` shows drift. `dry_run` suppresses the write.
    pub fn execute(
        &self,
        plan: &Plan,
        desired: &ParameterRecord,
        dry_run: bool,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        if plan.is_current() {
            return Ok(ReconcileOutcome::Unchanged);
        }

        if dry_run {
            tracing::info!(parameter = %desired.name, "[dry-run] would write parameter");
            return Ok(if plan.exists() {
                ReconcileOutcome::WouldUpdate {
                    drift: plan.drift.clone(),
                }
            } else {
                ReconcileOutcome::WouldCreate
            });
        }

        self.apply(desired)?;
        Ok(if plan.exists() {
            ReconcileOutcome::Updated {
                drift: plan.drift.clone(),
            }
        } else {
            ReconcileOutcome::Created
        })
    }

    /// Full run: [`plan`](Self::plan) then [`execute`](Self::execute).
    pub fn run(
        &self,
        desired: &ParameterRecord,
        dry_run: bool,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        let plan = self.plan(desired)?;
        self.execute(&plan, desired, dry_run)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use paramsync_core::Tier;

    use crate::diff::Field;
    use crate::memory::InMemoryStore;

    use super::*;

    fn desired() -> ParameterRecord {
        ParameterRecord::new("X", "a")
    }

    #[test]
    fn absent_key_is_created_with_full_desired_state() {
        let store = InMemoryStore::new();
        let want = ParameterRecord::new("X", "a")
            .with_description("api token")
            .with_tier(Some(Tier::Advanced));

        let outcome = Reconciler::new(&store).run(&want, false).expect("run");

        assert_eq!(outcome, ReconcileOutcome::Created);
        assert_eq!(store.puts(), vec![want]);
    }

    #[test]
    fn drifted_value_is_updated() {
        let store = InMemoryStore::with_records([ParameterRecord::new("X", "b")
            .with_tier(Some(Tier::Standard))]);
        let reconciler = Reconciler::new(&store);

        let plan = reconciler.plan(&desired()).expect("plan");
        assert_eq!(plan.drift, [Field::Value].into_iter().collect::<Drift>());

        let outcome = reconciler.execute(&plan, &desired(), false).expect("execute");
        assert_eq!(
            outcome,
            ReconcileOutcome::Updated {
                drift: [Field::Value].into_iter().collect()
            }
        );
        assert_eq!(store.record("X").expect("record").value, "a");
        assert_eq!(store.puts().len(), 1);
    }

    #[test]
    fn matching_state_writes_nothing() {
        let store = InMemoryStore::with_records([ParameterRecord::new("X", "a")
            .with_tier(Some(Tier::Standard))]);

        let outcome = Reconciler::new(&store).run(&desired(), false).expect("run");

        assert_eq!(outcome, ReconcileOutcome::Unchanged);
        assert!(store.puts().is_empty());
    }

    #[test]
    fn second_run_is_a_no_op() {
        let store = InMemoryStore::new();
        let reconciler = Reconciler::new(&store);
        let want = desired().with_description("d").with_tier(Some(Tier::Advanced));

        assert!(reconciler.run(&want, false).expect("first").wrote());
        assert_eq!(
            reconciler.run(&want, false).expect("second"),
            ReconcileOutcome::Unchanged
        );
        assert_eq!(store.puts().len(), 1);
    }

    #[test]
    fn dry_run_never_writes() {
        let store = InMemoryStore::with_records([ParameterRecord::new("Y", "b")]);
        let reconciler = Reconciler::new(&store);

        assert_eq!(
            reconciler.run(&desired(), true).expect("create"),
            ReconcileOutcome::WouldCreate
        );
        assert_eq!(
            reconciler
                .run(&ParameterRecord::new("Y", "c"), true)
                .expect("update"),
            ReconcileOutcome::WouldUpdate {
                drift: [Field::Value].into_iter().collect()
            }
        );
        assert!(store.puts().is_empty());
        assert!(store.record("X").is_none());
    }

    #[test]
    fn rate_limited_apply_leaves_store_unchanged() {
        let store = InMemoryStore::with_records([ParameterRecord::new("X", "b")]);
        store.fail_next_put(StoreError::RateLimited {
            message: "limit".into(),
        });

        let err = Reconciler::new(&store).run(&desired(), false).unwrap_err();

        assert!(matches!(
            err,
            ReconcileError::Apply {
                source: StoreError::RateLimited { .. },
                ..
            }
        ));
        assert_eq!(store.record("X").expect("record").value, "b");
    }

    #[test]
    fn fetch_failure_other_than_not_found_aborts_before_write() {
        let store = InMemoryStore::new();
        store.fail_next_get(StoreError::Unknown {
            code: Some("AccessDeniedException".into()),
            message: "denied".into(),
        });

        let err = Reconciler::new(&store).run(&desired(), false).unwrap_err();

        assert!(matches!(err, ReconcileError::Fetch { .. }));
        assert!(store.puts().is_empty());
    }
}
