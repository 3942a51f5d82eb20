//! Field validation rules
//!
//! Pure, stateless predicates over raw string input. The UI re-evaluates
//! these on every keystroke, so they must be cheap and must never panic.
//! Each predicate has a companion `*_error` returning the localization key
//! of the inline error message when the field is invalid.

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum password length, applied identically at the form and the store
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum description length before the wizard can leave the description step
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Hard cap on description length, enforced at the point of mutation
pub const MAX_DESCRIPTION_LEN: usize = 250;

lazy_static! {
    /// Aadhaar-style national id: exactly 12 decimal digits
    /// - Valid: "123456789012"
    /// - Invalid: "12345", "1234567890123", "12345678901a"
    static ref NATIONAL_ID_REGEX: Regex = Regex::new(r"^\d{12}$").unwrap();

    /// Email of the `local@domain.tld` shape; "a@b" is rejected
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").unwrap();

    /// Mobile number: exactly 10 decimal digits
    static ref MOBILE_REGEX: Regex = Regex::new(r"^\d{10}$").unwrap();
}

pub fn is_valid_national_id(s: &str) -> bool {
    NATIONAL_ID_REGEX.is_match(s)
}

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

pub fn is_valid_mobile(s: &str) -> bool {
    MOBILE_REGEX.is_match(s)
}

pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LEN
}

pub fn is_valid_name(s: &str) -> bool {
    s.trim().chars().count() >= 2
}

pub fn is_valid_address(s: &str) -> bool {
    s.trim().chars().count() >= 10
}

pub fn is_valid_description(s: &str) -> bool {
    s.chars().count() >= MIN_DESCRIPTION_LEN
}

pub fn national_id_error(s: &str) -> Option<&'static str> {
    (!is_valid_national_id(s)).then_some("error_national_id")
}

pub fn email_error(s: &str) -> Option<&'static str> {
    (!is_valid_email(s)).then_some("error_email")
}

pub fn mobile_error(s: &str) -> Option<&'static str> {
    (!is_valid_mobile(s)).then_some("error_mobile")
}

pub fn password_error(s: &str) -> Option<&'static str> {
    (!is_valid_password(s)).then_some("error_password")
}

pub fn name_error(s: &str) -> Option<&'static str> {
    (!is_valid_name(s)).then_some("error_name")
}

pub fn address_error(s: &str) -> Option<&'static str> {
    (!is_valid_address(s)).then_some("error_address")
}

pub fn description_error(s: &str) -> Option<&'static str> {
    (!is_valid_description(s)).then_some("error_description")
}
