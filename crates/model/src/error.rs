use std::borrow::Cow;
use thiserror::Error;

/// Errors surfaced by value-model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A raw object could not be converted into a typed cell value.
    #[error("Value conversion failed: {message}")]
    ValueConversion { message: Cow<'static, str> },

    /// An attribute transform could not be installed.
    #[error("Attribute transform failed: {message}")]
    Transform { message: Cow<'static, str> },
}
