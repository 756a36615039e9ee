//! The store capability the reconciler is built on.

use crate::error::StoreError;
use crate::types::{ParameterName, ParameterRecord};

/// Read/write access to a remote parameter store.
///
/// Calls are blocking. Implementations translate their native failures into
/// [`StoreError`] and must return [`StoreError::NotFound`] from `get` when the
/// key is absent.
pub trait ParameterStore {
    /// Read the current value, description and tier of `name`.
    fn get(&self, name: &ParameterName) -> Result<ParameterRecord, StoreError>;

    /// Upsert `record`: create it if absent, overwrite it if present.
    fn put(&self, record: &ParameterRecord) -> Result<(), StoreError>;
}

impl<S: ParameterStore + ?Sized> ParameterStore for &S {
    fn get(&self, name: &ParameterName) -> Result<ParameterRecord, StoreError> {
        (**self).get(name)
    }

    fn put(&self, record: &ParameterRecord) -> Result<(), StoreError> {
        (**self).put(record)
    }
}

impl<S: ParameterStore + ?Sized> ParameterStore for Box<S> {
    fn get(&self, name: &ParameterName) -> Result<ParameterRecord, StoreError> {
        (**self).get(name)
    }

    fn put(&self, record: &ParameterRecord) -> Result<(), StoreError> {
        (**self).put(record)
    }
}
