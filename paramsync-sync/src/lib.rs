//! # paramsync-sync
//!
//! Idempotent reconciliation of a single parameter against a
//! [`ParameterStore`](paramsync_core::ParameterStore).
//!
//! Call [`pipeline::run`] with a [`ReconcileConfig`], or drive a
//! [`Reconciler`] step by step with [`Reconciler::plan`] and
//! [`Reconciler::execute`].

pub mod diff;
pub mod error;
pub mod fingerprint;
pub mod memory;
pub mod pipeline;
pub mod reconciler;

pub use diff::{Drift, Field};
pub use error::ReconcileError;
pub use fingerprint::fingerprint;
pub use pipeline::ReconcileConfig;
pub use reconciler::{Plan, ReconcileOutcome, Reconciler};
