//! paramsync core library — domain types, the store capability, errors.
//!
//! - [`types`] — [`ParameterName`], [`Tier`], [`ParameterRecord`]
//! - [`store`] — the [`ParameterStore`] trait
//! - [`error`] — [`StoreError`]

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::ParameterStore;
pub use types::{ParameterName, ParameterRecord, Tier, UnknownTier};
