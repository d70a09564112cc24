//! Generic value formatting and parsing, used whenever no transformer
//! overrides an attribute's representation.

use crate::attribute::AttributeType;
use crate::error::ModelError;
use crate::value::{DataKind, DbValue, DisplayFormat};

/// Text shown for SQL NULL outside of edit mode.
pub const NULL_LABEL: &str = "[NULL]";

/// Renders any cell value with the client's default rules.
///
/// `Edit` format yields text that round-trips through
/// [`default_value_from_string`]; NULL becomes the empty string there so an
/// editor starts blank.
#[must_use]
pub fn default_value_display_string(value: &DbValue, format: DisplayFormat) -> String {
    match value {
        DbValue::Null => match format {
            DisplayFormat::Edit => String::new(),
            DisplayFormat::Ui | DisplayFormat::Native => NULL_LABEL.to_owned(),
        },
        DbValue::Int(value) => value.to_string(),
        DbValue::Float(value) => value.to_string(),
        DbValue::Bool(value) => value.to_string(),
        DbValue::Text(text) => text.clone(),
    }
}

/// Parses user text into a value of the attribute's kind.
///
/// Empty numeric text means "no value" and parses to NULL; string-kind
/// attributes accept any text verbatim.
///
/// # Errors
/// Returns [`ModelError::ValueConversion`] for text that does not fit the
/// attribute's kind: non-numeric text on a numeric column, unrecognized
/// boolean literals.
pub fn default_value_from_string(
    attribute_type: &AttributeType,
    text: &str,
) -> Result<DbValue, ModelError> {
    match attribute_type.data_kind() {
        DataKind::Numeric => parse_numeric(attribute_type, text),
        DataKind::Boolean => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(DbValue::Bool(true)),
            "false" | "0" => Ok(DbValue::Bool(false)),
            _ => Err(ModelError::ValueConversion {
                message: format!("{text:?} is not a boolean literal").into(),
            }),
        },
        DataKind::String | DataKind::DateTime | DataKind::Binary => {
            Ok(DbValue::Text(text.to_owned()))
        }
    }
}

fn parse_numeric(attribute_type: &AttributeType, text: &str) -> Result<DbValue, ModelError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(DbValue::Null);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(DbValue::Int(value));
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(DbValue::Float(value));
    }
    Err(ModelError::ValueConversion {
        message: format!("{text:?} is not a number for attribute '{}'", attribute_type.name())
            .into(),
    })
}
