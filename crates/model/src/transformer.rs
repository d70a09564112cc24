use crate::attribute::AttributeBinding;
use crate::error::ModelError;
use fxhash::FxHashMap;
use std::fmt;

/// String-keyed, loosely-typed transformer options configured per attribute.
///
/// Values are arbitrary JSON scalars; transformers coerce the keys they
/// recognize and ignore the rest.
pub type TransformOptions = FxHashMap<String, serde_json::Value>;

/// Capability for installing a value transform onto an attribute during
/// metadata setup.
pub trait AttributeTransformer: fmt::Debug + Send + Sync {
    /// Installs this transform onto `attribute`, replacing its active value
    /// handler and optionally registering presentation columns.
    ///
    /// # Errors
    /// Returns [`ModelError::Transform`] when the transform cannot be
    /// applied to the attribute.
    fn transform_attribute(
        &self,
        attribute: &mut AttributeBinding,
        options: &TransformOptions,
    ) -> Result<(), ModelError>;
}
