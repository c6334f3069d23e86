//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Digits with optional leading `+`, spaces and dashes, 7 to 15 digits total.
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 \-]{5,18}[0-9]$").unwrap();
}

/// Validates that a required text field is not empty or whitespace only.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Field must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a monetary amount is strictly positive.
pub fn validate_positive_amount(amount: i64) -> Result<(), ValidationError> {
    if amount > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must be greater than zero".into());
        Err(err)
    }
}

/// Validates a phone number. Empty strings are accepted since phone is optional on forms.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Ok(());
    }

    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if PHONE_RE.is_match(phone) && (7..=15).contains(&digits) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone number format is invalid".into());
        Err(err)
    }
}
