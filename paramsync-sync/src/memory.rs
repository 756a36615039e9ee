//! In-process [`ParameterStore`] used by tests and local experiments.
//!
//! Keeps records in a map, logs every successful `put`, and can be primed to
//! fail the next read or write with a given [`StoreError`].

use std::cell::RefCell;
use std::collections::HashMap;

use paramsync_core::{ParameterName, ParameterRecord, ParameterStore, StoreError, Tier};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RefCell<HashMap<ParameterName, ParameterRecord>>,
    puts: RefCell<Vec<ParameterRecord>>,
    next_get_error: RefCell<Option<StoreError>>,
    next_put_error: RefCell<Option<StoreError>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `records`. Seeding does not count as a `put`.
    pub fn with_records(records: impl IntoIterator<Item = ParameterRecord>) -> Self {
        let store = Self::new();
        store
            .records
            .borrow_mut()
            .extend(records.into_iter().map(|r| (r.name.clone(), r)));
        store
    }

    /// Make the next `get` fail with `err`.
    pub fn fail_next_get(&self, err: StoreError) {
        *self.next_get_error.borrow_mut() = Some(err);
    }

    /// Make the next `put` fail with `err`. The stored record is left as is.
    pub fn fail_next_put(&self, err: StoreError) {
        *self.next_put_error.borrow_mut() = Some(err);
    }

    /// Current record for `name`, if any.
    pub fn record(&self, name: &str) -> Option<ParameterRecord> {
        self.records
            .borrow()
            .get(&ParameterName::from(name))
            .cloned()
    }

    /// Every record passed to a successful `put`, in call order.
    pub fn puts(&self) -> Vec<ParameterRecord> {
        self.puts.borrow().clone()
    }
}

impl ParameterStore for InMemoryStore {
    fn get(&self, name: &ParameterName) -> Result<ParameterRecord, StoreError> {
        if let Some(err) = self.next_get_error.borrow_mut().take() {
            return Err(err);
        }
        self.records
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { name: name.clone() })
    }

    fn put(&self, record: &ParameterRecord) -> Result<(), StoreError> {
        if let Some(err) = self.next_put_error.borrow_mut().take() {
            return Err(err);
        }
        let existing = self.records.borrow().get(&record.name).and_then(|r| r.tier);
        let mut stored = record.clone();
        stored.tier = Some(resolve_tier(record.tier, existing, &record.value));
        self.records
            .borrow_mut()
            .insert(record.name.clone(), stored);
        self.puts.borrow_mut().push(record.clone());
        Ok(())
    }
}

/// Largest value a Standard parameter can hold.
const STANDARD_VALUE_LIMIT: usize = 4 * 1024;

/// The concrete tier a write ends up in.
///
/// Like SSM, Intelligent-Tiering (and an omitted tier) never reports back as
/// such: it lands in Advanced when the value or an existing Advanced
/// parameter needs it, Standard otherwise.
fn resolve_tier(requested: Option<Tier>, existing: Option<Tier>, value: &str) -> Tier {
    let needs_advanced =
        existing == Some(Tier::Advanced) || value.len() > STANDARD_VALUE_LIMIT;
    match requested {
        Some(Tier::Standard) => Tier::Standard,
        Some(Tier::Advanced) => Tier::Advanced,
        Some(Tier::IntelligentTiering) | None if needs_advanced => Tier::Advanced,
        Some(Tier::IntelligentTiering) | None => Tier::Standard,
    }
}
