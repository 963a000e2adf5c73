//! Coerced cell values
//!
//! ORDER MATTERS: the null set is checked before either boolean set, so an
//! empty cell can never read as `false`.

use serde::{Serialize, Serializer};
use std::fmt;

pub const NULL_LITERALS: &[&str] = &["nil", "null", "na", "n/a"];
pub const TRUE_LITERALS: &[&str] = &["t", "1", "true", "yes", "y"];
pub const FALSE_LITERALS: &[&str] = &["f", "0", "false", "no", "n"];

/// A resolved configuration value. Numeric-looking cells stay strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Bool(bool),
    Null,
    String(String),
}

/// Coerce a raw cell into a [`Value`].
///
/// Comparison is ASCII case-insensitive against the literal sets above; the
/// original text is kept verbatim when no literal matches.
pub fn coerce(raw: Option<&str>) -> Value {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Value::Null;
    };
    let lower = raw.to_ascii_lowercase();

    if NULL_LITERALS.contains(&lower.as_str()) {
        Value::Null
    } else if TRUE_LITERALS.contains(&lower.as_str()) {
        Value::Bool(true)
    } else if FALSE_LITERALS.contains(&lower.as_str()) {
        Value::Bool(false)
    } else {
        Value::String(raw.to_string())
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Canonical text form; feeding it back through [`coerce`] is stable for
    /// booleans and null.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_unit(),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}
