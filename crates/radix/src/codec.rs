//! Pure radix encode/decode over resolved settings.
//!
//! Both operations are stateless request/response transforms; the only
//! configuration is the immutable [`RadixDisplaySettings`] passed in.

use crate::error::RadixParseError;
use crate::settings::RadixDisplaySettings;

/// Canonical hexadecimal prefix.
pub const PREFIX_HEX: &str = "0x";
/// Canonical octal prefix.
pub const PREFIX_OCT: &str = "0";
/// Canonical binary prefix.
pub const PREFIX_BIN: &str = "0b";

/// Uppercase digit alphabet covering radixes up to 36.
const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The canonical prefix for `radix`, or `None` for radixes without one.
#[must_use]
pub const fn canonical_prefix(radix: u32) -> Option<&'static str> {
    match radix {
        16 => Some(PREFIX_HEX),
        8 => Some(PREFIX_OCT),
        2 => Some(PREFIX_BIN),
        _ => None,
    }
}

/// Renders `value` as radix text. Total; never fails.
///
/// Zero always renders as `"0"`, with no sign and no prefix. Negative
/// values render their absolute magnitude behind a `-`, unless `unsigned`
/// is set, in which case the raw 64-bit pattern renders unsigned. Binary
/// output keeps at most the `bits` least-significant digits; shorter
/// renditions are never zero-padded.
///
/// ```rust
/// use qdeck_radix::{RadixDisplaySettings, codec};
///
/// let hex = RadixDisplaySettings { show_prefix: true, ..RadixDisplaySettings::default() };
/// assert_eq!(codec::encode(&hex, 255), "0xFF");
/// assert_eq!(codec::encode(&hex, -255), "-0xFF");
/// assert_eq!(codec::encode(&hex, 0), "0");
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn encode(settings: &RadixDisplaySettings, value: i64) -> String {
    if value == 0 {
        return "0".to_owned();
    }

    let mut out = String::new();
    let magnitude = if settings.unsigned || value >= 0 {
        // Raw two's-complement pattern; in unsigned mode -1 becomes all-F.
        value as u64
    } else {
        out.push('-');
        value.unsigned_abs()
    };

    if settings.show_prefix
        && let Some(prefix) = canonical_prefix(settings.radix)
    {
        out.push_str(prefix);
    }

    let digits = to_digits(magnitude, settings.radix);
    if settings.radix == 2 {
        let keep = digits.len().min(settings.bits as usize).max(1);
        out.push_str(&digits[digits.len() - keep..]);
    } else {
        out.push_str(&digits);
    }
    out
}

/// Parses radix text back into a 64-bit signed value.
///
/// The empty string decodes to zero. A leading `-` is honored, and with
/// `show_prefix` set the canonical prefix is stripped after the sign.
/// Parsing is always signed, also in unsigned display mode: 64-bit patterns
/// above `i64::MAX` are reported as overflow.
///
/// # Errors
/// Returns [`RadixParseError::InvalidDigits`] for characters outside the
/// radix (or an empty digit sequence after stripping), and
/// [`RadixParseError::Overflow`] when the digits exceed the 64-bit signed
/// range.
pub fn decode(settings: &RadixDisplaySettings, text: &str) -> Result<i64, RadixParseError> {
    if text.is_empty() {
        return Ok(0);
    }

    let (negative, unsigned_part) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let digits = if settings.show_prefix
        && let Some(prefix) = canonical_prefix(settings.radix)
        && let Some(stripped) = unsigned_part.strip_prefix(prefix)
    {
        stripped
    } else {
        unsigned_part
    };

    let mut normalized = String::with_capacity(digits.len() + 1);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(digits);

    i64::from_str_radix(&normalized, settings.radix)
        .map_err(|source| RadixParseError::classify(text, settings.radix, source))
}

/// Unsigned digit expansion, most-significant first, uppercase.
#[allow(clippy::cast_possible_truncation)]
fn to_digits(mut value: u64, radix: u32) -> String {
    let radix = u64::from(radix);
    // 64 digits covers the binary worst case.
    let mut buf = [0_u8; 64];
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(value % radix) as usize];
        value /= radix;
        if value == 0 {
            break;
        }
    }
    buf[pos..].iter().map(|&digit| char::from(digit)).collect()
}
