//! Error types for paramsync-sync.

use thiserror::Error;

use paramsync_core::{ParameterName, StoreError};

/// A reconciliation failure, tagged with the phase that failed.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Reading the current state failed for a reason other than absence.
    #[error("failed to read parameter {name}: {source}")]
    Fetch {
        name: ParameterName,
        #[source]
        source: StoreError,
    },

    /// Writing the desired state failed.
    #[error("failed to write parameter {name}: {source}")]
    Apply {
        name: ParameterName,
        #[source]
        source: StoreError,
    },
}

impl ReconcileError {
    /// The underlying store failure.
    pub fn store_error(&self) -> &StoreError {
        match self {
            ReconcileError::Fetch { source, .. } | ReconcileError::Apply { source, .. } => source,
        }
    }
}

pub(crate) fn fetch_err(name: &ParameterName, source: StoreError) -> ReconcileError {
    ReconcileError::Fetch {
        name: name.clone(),
        source,
    }
}

pub(crate) fn apply_err(name: &ParameterName, source: StoreError) -> ReconcileError {
    ReconcileError::Apply {
        name: name.clone(),
        source,
    }
}
