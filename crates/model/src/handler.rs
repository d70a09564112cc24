use crate::attribute::AttributeType;
use crate::error::ModelError;
use crate::formatting;
use crate::value::{DataKind, DbValue, DisplayFormat};
use std::borrow::Cow;
use std::fmt;

/// Call context for value operations.
///
/// Stands in for the execution session: carries the purpose label a call
/// site runs under. Cheap to construct and clone.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    purpose: Cow<'static, str>,
}

impl DataContext {
    #[must_use]
    pub fn new(purpose: impl Into<Cow<'static, str>>) -> Self {
        Self { purpose: purpose.into() }
    }

    #[must_use]
    pub fn purpose(&self) -> &str {
        &self.purpose
    }
}

/// Capability implemented by anything that renders and parses cell values
/// for an attribute.
///
/// Handlers are shared across rows and threads; implementations hold only
/// immutable state.
pub trait ValueHandler: fmt::Debug + Send + Sync {
    /// Kind of values this handler produces for the given attribute type.
    fn value_kind(&self, attribute_type: &AttributeType) -> DataKind;

    /// Renders a cell value for the requested display format.
    fn value_display_string(
        &self,
        attribute_type: &AttributeType,
        value: &DbValue,
        format: DisplayFormat,
    ) -> String;

    /// Converts a raw object, typically user-entered text, into a typed
    /// cell value.
    ///
    /// # Errors
    /// Returns [`ModelError::ValueConversion`] when the object cannot be
    /// interpreted as a value of the attribute's kind.
    fn value_from_object(
        &self,
        ctx: &DataContext,
        attribute_type: &AttributeType,
        object: &DbValue,
        copy: bool,
        validate: bool,
    ) -> Result<DbValue, ModelError>;

    /// Produces the initial value for a freshly created cell.
    fn create_new_value(&self, ctx: &DataContext, attribute_type: &AttributeType) -> DbValue;
}

/// Generic handler used when no type-specific handler is registered.
///
/// Display and parse go through the default formatting rules; non-text
/// objects pass through by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueHandler;

impl ValueHandler for DefaultValueHandler {
    fn value_kind(&self, attribute_type: &AttributeType) -> DataKind {
        attribute_type.data_kind()
    }

    fn value_display_string(
        &self,
        _attribute_type: &AttributeType,
        value: &DbValue,
        format: DisplayFormat,
    ) -> String {
        formatting::default_value_display_string(value, format)
    }

    fn value_from_object(
        &self,
        _ctx: &DataContext,
        attribute_type: &AttributeType,
        object: &DbValue,
        _copy: bool,
        _validate: bool,
    ) -> Result<DbValue, ModelError> {
        match object {
            DbValue::Text(text) => formatting::default_value_from_string(attribute_type, text),
            other => Ok(other.clone()),
        }
    }

    fn create_new_value(&self, _ctx: &DataContext, _attribute_type: &AttributeType) -> DbValue {
        DbValue::Null
    }
}
