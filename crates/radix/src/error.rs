use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// Failure of one codec decode attempt.
///
/// Never surfaces to editing callers: [`RadixValueHandler`] logs the event
/// and falls back to its delegate's parsing of the original text.
///
/// [`RadixValueHandler`]: crate::RadixValueHandler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadixParseError {
    /// The digit sequence contains characters invalid for the radix, or is
    /// empty after sign and prefix stripping.
    #[error("{text:?} is not a valid radix-{radix} number")]
    InvalidDigits {
        text: String,
        radix: u32,
        #[source]
        source: ParseIntError,
    },

    /// The digits parse but do not fit a 64-bit signed value.
    #[error("{text:?} overflows 64 bits in radix {radix}")]
    Overflow { text: String, radix: u32 },
}

impl RadixParseError {
    /// Classifies a std parse failure, keeping the original (unstripped)
    /// input text for diagnostics.
    pub(crate) fn classify(text: &str, radix: u32, source: ParseIntError) -> Self {
        match source.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Self::Overflow { text: text.to_owned(), radix }
            },
            _ => Self::InvalidDigits { text: text.to_owned(), radix, source },
        }
    }
}
