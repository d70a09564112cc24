use crate::handler::ValueHandler;
use crate::value::DataKind;
use std::sync::Arc;

/// Typed-object descriptor for an attribute: its declared name and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeType {
    name: String,
    data_kind: DataKind,
}

impl AttributeType {
    #[must_use]
    pub fn new(name: impl Into<String>, data_kind: DataKind) -> Self {
        Self { name: name.into(), data_kind }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn data_kind(&self) -> DataKind {
        self.data_kind
    }
}

/// Synthetic column descriptor registered by transformers to expose an
/// alternate presentation of an attribute's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationAttribute {
    name: String,
    ordinal: i32,
    data_kind: DataKind,
    read_only: bool,
}

impl PresentationAttribute {
    /// A read-only synthetic column. An `ordinal` of `-1` places the column
    /// after the attribute's real columns.
    #[must_use]
    pub fn synthetic(name: impl Into<String>, ordinal: i32, data_kind: DataKind) -> Self {
        Self { name: name.into(), ordinal, data_kind, read_only: true }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn ordinal(&self) -> i32 {
        self.ordinal
    }

    #[must_use]
    pub const fn data_kind(&self) -> DataKind {
        self.data_kind
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }
}

/// Binding of a result-set attribute to the handler stack that renders and
/// edits its values.
///
/// The binding starts with the base handler registered for the attribute's
/// type. Installing a transform replaces the *active* handler while keeping
/// the base handler reachable, so decorators can delegate to it.
#[derive(Debug)]
pub struct AttributeBinding {
    attribute_type: AttributeType,
    value_handler: Arc<dyn ValueHandler>,
    transform_handler: Option<Arc<dyn ValueHandler>>,
    presentation: Option<PresentationAttribute>,
}

impl AttributeBinding {
    #[must_use]
    pub fn new(attribute_type: AttributeType, value_handler: Arc<dyn ValueHandler>) -> Self {
        Self { attribute_type, value_handler, transform_handler: None, presentation: None }
    }

    #[must_use]
    pub const fn attribute_type(&self) -> &AttributeType {
        &self.attribute_type
    }

    /// The handler currently serving this attribute: the installed transform
    /// handler if any, the base handler otherwise.
    #[must_use]
    pub const fn value_handler(&self) -> &Arc<dyn ValueHandler> {
        match &self.transform_handler {
            Some(handler) => handler,
            None => &self.value_handler,
        }
    }

    /// The handler the attribute was created with, ignoring transforms.
    #[must_use]
    pub const fn base_value_handler(&self) -> &Arc<dyn ValueHandler> {
        &self.value_handler
    }

    /// Replaces the active handler with a transform decorator.
    pub fn set_transform_handler(&mut self, handler: Arc<dyn ValueHandler>) {
        self.transform_handler = Some(handler);
    }

    /// Registers the synthetic presentation column for transformed text.
    pub fn set_presentation_attribute(&mut self, presentation: PresentationAttribute) {
        self.presentation = Some(presentation);
    }

    #[must_use]
    pub const fn presentation_attribute(&self) -> Option<&PresentationAttribute> {
        self.presentation.as_ref()
    }
}
