use serde::{Deserialize, Serialize};

/// Broad classification of attribute types as seen by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataKind {
    Numeric,
    String,
    Boolean,
    DateTime,
    Binary,
}

/// Rendering intent threaded through display-string calls.
///
/// `Edit` asks for text a user can modify and submit back, `Ui` is read-only
/// presentation, `Native` matches the wire/SQL literal shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayFormat {
    #[default]
    Ui,
    Native,
    Edit,
}

/// A single cell value as it moves between fetch, display, and edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DbValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl DbValue {
    /// Returns `true` for SQL NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the numeric variants.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// The 64-bit signed magnitude of a numeric value.
    ///
    /// Floats truncate toward zero, saturating at the `i64` range. Returns
    /// `None` for every non-numeric variant.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) => Some(*value as i64),
            _ => None,
        }
    }
}

impl From<i64> for DbValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DbValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for DbValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for DbValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DbValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
