//! Keystroke-level sanitisation for the two amount text fields.
//!
//! The form stores raw text, not numbers, so that partially typed values
//! like `"12."` survive between keystrokes. Sanitisation runs on every
//! change event and the field is replaced with the sanitised result;
//! parsing happens later, when a total is derived.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Strips a raw keystroke string down to a well-formed amount.
///
/// Only ASCII digits survive. When `allow_decimal` is set, the first `.`
/// survives as well; any later `.` is dropped. Under per-keystroke use the
/// dropped character is always the one just typed, so the field simply
/// refuses a second decimal point.
///
/// Never fails; the result is stable under re-application.
pub fn sanitize_numeric_input(raw: &str, allow_decimal: bool) -> String {
    let mut seen_decimal = false;
    raw.chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                return true;
            }
            if allow_decimal && *c == '.' && !seen_decimal {
                seen_decimal = true;
                return true;
            }
            false
        })
        .collect()
}

/// Parses a sanitised amount string, treating empty or unparsable text as
/// zero. Fallback-to-zero is the contract here, not an error path: an empty
/// bill field simply contributes nothing to the total.
///
/// A trailing `.` (the mid-typing state `"12."`) parses as the integer part.
pub fn parse_amount(text: &str) -> Decimal {
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    Decimal::from_str(trimmed).unwrap_or(Decimal::ZERO)
}
