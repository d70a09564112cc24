use crate::options::{coerce_bool, coerce_i64};
use qdeck_model::TransformOptions;

/// Option key selecting the numeral base (2–36).
pub const OPT_RADIX: &str = "radix";
/// Option key bounding binary rendering width.
pub const OPT_BITS: &str = "bits";
/// Option key enabling the canonical prefix.
pub const OPT_PREFIX: &str = "prefix";
/// Option key switching to raw bit-pattern rendering.
pub const OPT_UNSIGNED: &str = "unsigned";

const DEFAULT_RADIX: u32 = 16;
const DEFAULT_BITS: u32 = 32;

/// Resolved, immutable configuration of one radix transform installation.
///
/// Built once per attribute by [`RadixDisplaySettings::resolve`] and owned
/// by the installed handler for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixDisplaySettings {
    /// Numeral base used for display and parse, always within `[2, 36]`.
    pub radix: u32,
    /// Maximum digit count of binary renditions, always at least 1.
    pub bits: u32,
    /// Render and expect the canonical prefix (`0x`, `0`, `0b`).
    pub show_prefix: bool,
    /// Render the raw 64-bit pattern as unsigned instead of signed magnitude.
    pub unsigned: bool,
}

impl Default for RadixDisplaySettings {
    fn default() -> Self {
        Self { radix: DEFAULT_RADIX, bits: DEFAULT_BITS, show_prefix: false, unsigned: false }
    }
}

impl RadixDisplaySettings {
    /// Resolves settings from a loosely-typed options mapping.
    ///
    /// Resolution is total: unknown keys are ignored, and malformed or
    /// out-of-range values fall back to their defaults.
    ///
    /// ```rust
    /// use qdeck_model::TransformOptions;
    /// use qdeck_radix::RadixDisplaySettings;
    ///
    /// let options: TransformOptions = [
    ///     ("radix".to_owned(), serde_json::json!("2")),
    ///     ("bits".to_owned(), serde_json::json!(8)),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let settings = RadixDisplaySettings::resolve(&options);
    /// assert_eq!((settings.radix, settings.bits), (2, 8));
    /// assert!(!settings.show_prefix);
    /// ```
    #[must_use]
    pub fn resolve(options: &TransformOptions) -> Self {
        let radix = options
            .get(OPT_RADIX)
            .map_or(i64::from(DEFAULT_RADIX), |value| coerce_i64(value, i64::from(DEFAULT_RADIX)));
        let bits = options
            .get(OPT_BITS)
            .map_or(i64::from(DEFAULT_BITS), |value| coerce_i64(value, i64::from(DEFAULT_BITS)));
        let show_prefix =
            options.get(OPT_PREFIX).is_some_and(|value| coerce_bool(value, false));
        let unsigned =
            options.get(OPT_UNSIGNED).is_some_and(|value| coerce_bool(value, false));

        Self {
            radix: match u32::try_from(radix) {
                Ok(radix) if (2..=36).contains(&radix) => radix,
                _ => DEFAULT_RADIX,
            },
            bits: match u32::try_from(bits) {
                Ok(bits) if bits >= 1 => bits,
                _ => DEFAULT_BITS,
            },
            show_prefix,
            unsigned,
        }
    }
}
