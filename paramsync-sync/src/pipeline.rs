//! Shared reconciliation entrypoint used by the CLI.

use paramsync_core::{ParameterRecord, ParameterStore};

use crate::{ReconcileError, ReconcileOutcome, Reconciler};

/// Everything one run needs to know, assembled by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    pub desired: ParameterRecord,
    /// Report what would change without writing.
    pub dry_run: bool,
}

impl ReconcileConfig {
    pub fn new(desired: ParameterRecord) -> Self {
        Self {
            desired,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Reconcile `config.desired` against `store`.
pub fn run<S: ParameterStore>(
    store: S,
    config: &ReconcileConfig,
) -> Result<ReconcileOutcome, ReconcileError> {
    Reconciler::new(store).run(&config.desired, config.dry_run)
}

#[cfg(test)]
mod tests {
    use paramsync_core::StoreError;

    use crate::memory::InMemoryStore;

    use super::*;

    #[test]
    fn creates_then_reports_unchanged() {
        let store = InMemoryStore::new();
        let config = ReconcileConfig::new(ParameterRecord::new("X", "a"));

        assert_eq!(run(&store, &config).expect("first"), ReconcileOutcome::Created);
        assert_eq!(store.puts()[0].value, "a");
        assert_eq!(run(&store, &config).expect("second"), ReconcileOutcome::Unchanged);
        assert_eq!(store.puts().len(), 1);
    }

    #[test]
    fn dry_run_flag_is_honoured() {
        let store = InMemoryStore::new();
        let config = ReconcileConfig::new(ParameterRecord::new("X", "a")).dry_run(true);

        assert_eq!(run(&store, &config).expect("run"), ReconcileOutcome::WouldCreate);
        assert!(store.record("X").is_none());
    }

    #[test]
    fn conflict_is_returned_as_apply_error() {
        let store = InMemoryStore::new();
        store.fail_next_put(StoreError::ConcurrentUpdateConflict {
            message: "busy".into(),
        });
        let config = ReconcileConfig::new(ParameterRecord::new("X", "a"));

        let err = run(&store, &config).unwrap_err();
        assert!(matches!(
            err.store_error(),
            StoreError::ConcurrentUpdateConflict { .. }
        ));
    }
}
