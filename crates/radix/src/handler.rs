use crate::codec;
use crate::settings::RadixDisplaySettings;
use qdeck_model::{
    AttributeType, DataContext, DataKind, DbValue, DisplayFormat, ModelError, ValueHandler,
    default_value_display_string,
};
use std::sync::Arc;
use tracing::debug;

/// Decorator that renders and parses numeric cells in the configured radix.
///
/// Implements the full [`ValueHandler`] capability: display rendering and
/// text parsing are intercepted, every other operation forwards to the
/// wrapped delegate. Holds only immutable state and is safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct RadixValueHandler {
    delegate: Arc<dyn ValueHandler>,
    settings: RadixDisplaySettings,
}

impl RadixValueHandler {
    /// Wraps `delegate`, capturing the resolved settings for the lifetime
    /// of this handler.
    #[must_use]
    pub fn new(delegate: Arc<dyn ValueHandler>, settings: RadixDisplaySettings) -> Self {
        Self { delegate, settings }
    }

    /// The settings this handler was installed with.
    #[must_use]
    pub const fn settings(&self) -> &RadixDisplaySettings {
        &self.settings
    }
}

impl ValueHandler for RadixValueHandler {
    fn value_kind(&self, attribute_type: &AttributeType) -> DataKind {
        self.delegate.value_kind(attribute_type)
    }

    fn value_display_string(
        &self,
        _attribute_type: &AttributeType,
        value: &DbValue,
        format: DisplayFormat,
    ) -> String {
        match value.as_i64() {
            Some(numeric) => codec::encode(&self.settings, numeric),
            None => default_value_display_string(value, format),
        }
    }

    fn value_from_object(
        &self,
        ctx: &DataContext,
        attribute_type: &AttributeType,
        object: &DbValue,
        copy: bool,
        validate: bool,
    ) -> Result<DbValue, ModelError> {
        if let DbValue::Text(text) = object {
            match codec::decode(&self.settings, text) {
                Ok(value) => return Ok(DbValue::Int(value)),
                Err(error) => {
                    debug!(
                        text = text.as_str(),
                        radix = self.settings.radix,
                        bits = self.settings.bits,
                        prefix = self.settings.show_prefix,
                        unsigned = self.settings.unsigned,
                        %error,
                        "Radix text did not parse, deferring to delegate"
                    );
                },
            }
        }
        self.delegate.value_from_object(ctx, attribute_type, object, copy, validate)
    }

    fn create_new_value(&self, ctx: &DataContext, attribute_type: &AttributeType) -> DbValue {
        self.delegate.create_new_value(ctx, attribute_type)
    }
}
