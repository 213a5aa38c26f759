// UserSleuth - core/model.rs
//
// Core data model types. Pure data definitions with no I/O or CLI
// dependencies. These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// User Record
// =============================================================================

/// A single user record loaded from the backing store.
///
/// Records are open-ended JSON objects: any fields beyond the recognised
/// ones (`name`, `email`, `age`) are carried through loading and display
/// untouched. All field reads are partial — a missing or wrongly-typed
/// field reads as absent rather than faulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(pub Map<String, Value>);

impl UserRecord {
    /// The `name` field, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The `email` field, if present and a string.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// The `age` field, if present and an integer.
    ///
    /// A fractional or string-typed age reads as absent: age filtering is
    /// defined over integer equality only.
    pub fn age(&self) -> Option<i64> {
        self.0.get("age").and_then(Value::as_i64)
    }
}

impl fmt::Display for UserRecord {
    /// Compact single-line JSON with sorted keys, one record per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

// =============================================================================
// Filter kind
// =============================================================================

/// The field a query filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Name,
    Email,
    Age,
}

impl FilterKind {
    /// Returns all variants in display order.
    pub fn all() -> &'static [FilterKind] {
        &[FilterKind::Name, FilterKind::Email, FilterKind::Age]
    }

    /// Human-readable label, as accepted at the interactive prompt.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Name => "name",
            FilterKind::Email => "email",
            FilterKind::Age => "age",
        }
    }

    /// Prompt text asking the user for this kind's query value.
    pub fn value_prompt(&self) -> &'static str {
        match self {
            FilterKind::Name => "Enter a name to filter users: ",
            FilterKind::Email => "Enter an email to filter users: ",
            FilterKind::Age => "Enter an age to filter users: ",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when user input names a filter kind this tool does not support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFilterKind {
    pub input: String,
}

impl fmt::Display for UnsupportedFilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported filter kind '{}'", self.input)
    }
}

impl std::error::Error for UnsupportedFilterKind {}

impl FromStr for FilterKind {
    type Err = UnsupportedFilterKind;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(FilterKind::Name),
            "email" => Ok(FilterKind::Email),
            "age" => Ok(FilterKind::Age),
            _ => Err(UnsupportedFilterKind {
                input: s.trim().to_string(),
            }),
        }
    }
}
