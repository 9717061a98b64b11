//! Digit-only number parsing
//!
//! Serial numbers and ages are typed as plain decimal digits. Signs, spaces
//! inside the number and other characters are rejected.

/// Parse a string made only of ASCII digits
///
/// Surrounding whitespace is ignored. Values beyond `u64::MAX` saturate, so an
/// absurdly long number still reads as "too large" rather than "not a number".
/// Returns `None` for empty input or any non-digit character.
pub fn parse_digits(raw: &str) -> Option<u64> {
    let value = raw.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(value.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    }))
}
