//! # Radix Display Transform
//!
//! Renders integral grid values in an alternate numeral system (binary,
//! octal, hexadecimal, or any radix 2–36) and parses user-entered text of
//! the same shape back into a numeric value.
//!
//! The transformer is a non-invasive decorator: [`RadixAttributeTransformer`]
//! wraps an attribute's existing value handler in a [`RadixValueHandler`]
//! that intercepts only display-string rendering and text parsing; every
//! other operation forwards to the wrapped handler unchanged. Malformed
//! radix text never blocks an edit: decoding falls back to the delegate's
//! own parsing of the original input.
//!
//! ```rust
//! use qdeck_model::{
//!     AttributeBinding, AttributeTransformer, AttributeType, DataKind, DbValue,
//!     DefaultValueHandler, DisplayFormat, TransformOptions,
//! };
//! use qdeck_radix::RadixAttributeTransformer;
//! use std::sync::Arc;
//!
//! let mut attribute = AttributeBinding::new(
//!     AttributeType::new("flags", DataKind::Numeric),
//!     Arc::new(DefaultValueHandler),
//! );
//! let options: TransformOptions =
//!     [("radix".to_owned(), serde_json::json!(16))].into_iter().collect();
//! RadixAttributeTransformer.transform_attribute(&mut attribute, &options).unwrap();
//!
//! let text = attribute.value_handler().value_display_string(
//!     attribute.attribute_type(),
//!     &DbValue::Int(255),
//!     DisplayFormat::Ui,
//! );
//! assert_eq!(text, "FF");
//! ```

pub mod codec;
mod error;
mod handler;
mod options;
mod settings;

pub use crate::error::RadixParseError;
pub use crate::handler::RadixValueHandler;
pub use crate::settings::{OPT_BITS, OPT_PREFIX, OPT_RADIX, OPT_UNSIGNED, RadixDisplaySettings};

use qdeck_model::{
    AttributeBinding, AttributeTransformer, DataKind, ModelError, PresentationAttribute,
    TransformOptions,
};
use std::sync::Arc;
use tracing::trace;

/// Name of the synthetic presentation column exposing the transformed text.
pub const PRESENTATION_COLUMN: &str = "StringNumber";

/// Installs the radix display transform onto numeric attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixAttributeTransformer;

impl AttributeTransformer for RadixAttributeTransformer {
    fn transform_attribute(
        &self,
        attribute: &mut AttributeBinding,
        options: &TransformOptions,
    ) -> Result<(), ModelError> {
        let settings = RadixDisplaySettings::resolve(options);
        let handler = RadixValueHandler::new(Arc::clone(attribute.value_handler()), settings);

        attribute.set_transform_handler(Arc::new(handler));
        attribute.set_presentation_attribute(PresentationAttribute::synthetic(
            PRESENTATION_COLUMN,
            -1,
            DataKind::String,
        ));

        trace!(
            attribute = attribute.attribute_type().name(),
            radix = settings.radix,
            bits = settings.bits,
            prefix = settings.show_prefix,
            unsigned = settings.unsigned,
            "Installed radix display transform"
        );
        Ok(())
    }
}
