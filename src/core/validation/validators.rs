//! Field rules for the order form
//!
//! Each rule checks one raw (already trimmed) field and returns the
//! user-facing message on failure. Rules never short-circuit each other.

use crate::core::order::DATE_FORMAT;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_ERROR: &str = "El nombre no puede contener números ni caracteres especiales.";
pub const PHONE_ERROR: &str = "El número debe contener exactamente 9 dígitos.";
pub const DATE_FORMAT_ERROR: &str = "El formato de la fecha es inválido.";
pub const DATE_PAST_ERROR: &str = "La fecha no puede ser anterior al día actual.";
pub const QUANTITY_ERROR: &str = "La cantidad debe ser un número entero positivo.";

/// Required length of a phone number
pub const PHONE_DIGITS: usize = 9;

fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap())
}

fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Rule: one or more letters or whitespace, nothing else
pub fn name(value: &str) -> Result<(), String> {
    if name_regex().is_match(value) {
        Ok(())
    } else {
        Err(NAME_ERROR.to_string())
    }
}

/// Rule: exactly nine decimal digits
pub fn phone(value: &str) -> Result<(), String> {
    if is_ascii_digits(value) && value.len() == PHONE_DIGITS {
        Ok(())
    } else {
        Err(PHONE_ERROR.to_string())
    }
}

/// Rule: `YYYY-MM-DD` and not before `today`
///
/// A value that does not parse only reports the format error.
pub fn date(value: &str, today: NaiveDate) -> Result<(), String> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) if date < today => Err(DATE_PAST_ERROR.to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err(DATE_FORMAT_ERROR.to_string()),
    }
}

/// Rule: digits only, and the integer value is greater than zero
pub fn quantity(value: &str) -> Result<(), String> {
    if !is_ascii_digits(value) {
        return Err(QUANTITY_ERROR.to_string());
    }
    // digit strings too large for the column cannot be stored either
    match value.parse::<i64>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(QUANTITY_ERROR.to_string()),
    }
}
