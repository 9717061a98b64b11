//! Raw input validation
//!
//! The roster assumes pre-validated values; these checks run at the console
//! boundary before anything reaches it.

use crate::error::{RosterError, RosterResult};
use crate::models::{self, Gender};

/// Oldest accepted age
pub const MAX_AGE: u32 = 150;

/// A non-empty string, stored trimmed
pub fn parse_text(field: &str, raw: &str) -> RosterResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(RosterError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}

/// An all-digit age in 1..=150
pub fn parse_age(raw: &str) -> RosterResult<u8> {
    let age = parse_number("Age", raw)?;
    if age == 0 || age > MAX_AGE {
        return Err(RosterError::Validation(format!(
            "Age must be between 1 and {}",
            MAX_AGE
        )));
    }
    Ok(age as u8)
}

/// One of M/F/O, case-insensitive
pub fn parse_gender(raw: &str) -> RosterResult<Gender> {
    raw.trim().to_uppercase().parse()
}

/// An all-digit serial number
pub fn parse_serial(raw: &str) -> RosterResult<u32> {
    parse_number("SRNO", raw)
}

fn parse_number(field: &str, raw: &str) -> RosterResult<u32> {
    let value = models::parse_digits(raw)
        .ok_or_else(|| RosterError::Validation(format!("{} must be a number", field)))?;
    u32::try_from(value)
        .map_err(|_| RosterError::Validation(format!("{} is out of range", field)))
}
