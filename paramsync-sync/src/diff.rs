//! Field-level drift between observed and desired state.

use std::collections::BTreeSet;
use std::fmt;

use paramsync_core::ParameterRecord;

/// A comparable field of a [`ParameterRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Value,
    Description,
    Tier,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Value, Field::Description, Field::Tier]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value => write!(f, "value"),
            Field::Description => write!(f, "description"),
            Field::Tier => write!(f, "tier"),
        }
    }
}

/// The set of fields that differ. Empty means the store is already correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drift(BTreeSet<Field>);

impl Drift {
    /// Every field differs; used when the record does not exist.
    pub fn all() -> Self {
        Self(Field::all().iter().copied().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    fn insert(&mut self, field: Field) {
        self.0.insert(field);
    }
}

impl FromIterator<Field> for Drift {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders as `value mismatch, tier mismatch`.
impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field} mismatch")?;
        }
        Ok(())
    }
}

/// Compare `observed` against `desired` field by field.
///
/// A missing observed record differs in every field. A desired record
/// without a tier never reports tier drift, and a requested tier is checked
/// with [`Tier::is_satisfied_by`](paramsync_core::Tier::is_satisfied_by).
pub fn diff(observed: Option<&ParameterRecord>, desired: &ParameterRecord) -> Drift {
    let Some(observed) = observed else {
        return Drift::all();
    };

    let mut drift = Drift::default();
    if observed.value != desired.value {
        drift.insert(Field::Value);
    }
    if observed.description != desired.description {
        drift.insert(Field::Description);
    }
    if let Some(tier) = desired.tier {
        if !tier.is_satisfied_by(observed.tier) {
            drift.insert(Field::Tier);
        }
    }
    drift
}
