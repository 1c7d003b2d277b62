use std::fmt;

use serde::{Deserialize, Serialize};

/// A value read from a form document that should belong to a closed enumeration.
///
/// Documents come from outside the engine, so a category or question type may
/// carry text that matches no known variant. Keeping the raw text lets the
/// schema validator report it against the offending field instead of the whole
/// document failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Declared<T> {
    /// A recognised value.
    Known(T),
    /// Text that did not match any variant.
    Unknown(String),
}

impl<T> Declared<T> {
    /// Get the recognised value, if any.
    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown(_) => None,
        }
    }

    /// Check if this holds a recognised value.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl<T: Copy> Declared<T> {
    /// Copy out the recognised value, if any.
    pub fn get(&self) -> Option<T> {
        self.known().copied()
    }
}

impl<T> From<T> for Declared<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: fmt::Display> fmt::Display for Declared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => value.fmt(f),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}
