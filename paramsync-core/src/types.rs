//! Domain types for a Parameter Store entry.
//!
//! A [`ParameterRecord`] is used both for the desired state supplied by the
//! caller and for the observed state read back from the store.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed parameter name (the unique key in the store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterName(pub String);

impl ParameterName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ParameterName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ParameterName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Storage tier of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Standard,
    Advanced,
    IntelligentTiering,
}

impl Tier {
    /// Every tier, in the order the store documents them.
    pub fn all() -> &'static [Tier] {
        &[Tier::Standard, Tier::Advanced, Tier::IntelligentTiering]
    }

    /// Wire name used by the store API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Standard => "Standard",
            Tier::Advanced => "Advanced",
            Tier::IntelligentTiering => "Intelligent-Tiering",
        }
    }

    /// Whether a stored tier of `observed` fulfils a request for `self`.
    ///
    /// Intelligent-Tiering is a write-time policy: the store resolves it to
    /// Standard or Advanced and reports that, so any stored tier fulfils it.
    pub fn is_satisfied_by(self, observed: Option<Tier>) -> bool {
        match self {
            Tier::IntelligentTiering => true,
            concrete => observed == Some(concrete),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Tier`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier '{0}'; expected: Standard, Advanced, Intelligent-Tiering")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::all()
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownTier(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single Parameter Store entry.
///
/// `value` may hold a secret, so the `Debug` impl redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    pub name: ParameterName,
    pub value: String,
    /// Empty when the entry carries no description.
    pub description: String,
    /// `None` on a desired record means "any tier is acceptable".
    pub tier: Option<Tier>,
}

impl ParameterRecord {
    pub fn new(name: impl Into<ParameterName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: String::new(),
            tier: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tier(mut self, tier: Option<Tier>) -> Self {
        self.tier = tier;
        self
    }
}

impl fmt::Debug for ParameterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterRecord")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .field("description", &self.description)
            .field("tier", &self.tier)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
