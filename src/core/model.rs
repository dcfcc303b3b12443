use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entropy source used for the leading data symbols of a key id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Every data symbol is drawn uniformly at random.
    Random,
    /// The first seven data symbols come from the clock.
    Unique,
}

impl KeyMode {
    pub fn is_unique(self) -> bool {
        self == Self::Unique
    }
}

impl From<bool> for KeyMode {
    fn from(unique: bool) -> Self {
        if unique {
            Self::Unique
        } else {
            Self::Random
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Unique => write!(f, "unique"),
        }
    }
}

/// One generated key id, as reported by `keyid generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedKey {
    pub id: String,
    pub mode: KeyMode,
    /// Configured length at generation time, check symbol included.
    pub length: usize,
    pub generated_at: DateTime<Utc>,
}

/// Outcome of validating one candidate, as reported by `keyid validate --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub id: String,
    pub valid: bool,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.valid { "valid" } else { "invalid" };
        write!(f, "{}\t{verdict}", self.id)
    }
}
