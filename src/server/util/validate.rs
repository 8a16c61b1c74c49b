//! Request validation.
//!
//! Payloads derive [`Validate`] and reference the custom rules below. Services first
//! normalize a payload (trim, lowercase, pad) and then run [`check`] on the normalized
//! value, so stored values always match what was validated.

use std::borrow::Cow;

use validator::Validate;

use crate::server::error::validation::ValidationError;

/// Message of every rule failing on an empty value
pub const REQUIRED: &str = "is required";

/// Runs the derived rules of `request`, reporting the first failing field
pub fn check<T: Validate>(request: &T) -> Result<(), ValidationError> {
    request.validate()?;

    Ok(())
}

/// Trimmed optional string; blank values become `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Lowercased, trimmed e-mail address
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Left-pads a numeric ID number to 9 digits; anything else is only trimmed
pub fn normalize_id_number(value: &str) -> String {
    let value = value.trim();

    if !value.is_empty() && value.len() < 9 && value.chars().all(|c| c.is_ascii_digit()) {
        format!("{:0>9}", value)
    } else {
        value.to_string()
    }
}

/// Strips spaces and dashes and rewrites a leading `+972` to the local `0` prefix
pub fn normalize_phone_number(value: &str) -> String {
    let value = value.trim();
    let digits: String = value
        .trim_start_matches("+972")
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if value.starts_with("+972") && !digits.is_empty() {
        format!("0{}", digits)
    } else {
        digits
    }
}

/// Card number without the spaces it is usually typed with
pub fn normalize_card_number(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn rule(code: &'static str, message: &'static str) -> validator::ValidationError {
    let mut error = validator::ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn luhn_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Israeli ID number of 9 digits
///
/// Digits are weighted 1, 2, 1, 2, ... from the left; two-digit products are reduced by 9
/// and the sum must be a multiple of 10. The all-zero number is never issued.
pub fn israeli_id(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        return Err(rule("required", REQUIRED));
    }
    if value.len() != 9 || !is_digits(value) {
        return Err(rule("israeli_id", "must be up to 9 digits"));
    }
    if value.chars().all(|c| c == '0') {
        return Err(rule("israeli_id", "is not a valid ID number"));
    }

    let sum: u32 = value
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            let product = d * (1 + (i as u32 % 2));
            if product > 9 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    if sum % 10 != 0 {
        return Err(rule("israeli_id", "has an invalid check digit"));
    }

    Ok(())
}

/// Phone number of 9 or 10 digits
pub fn phone_number(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        return Err(rule("required", REQUIRED));
    }
    if !(9..=10).contains(&value.len()) || !is_digits(value) {
        return Err(rule("phone_number", "must contain 9 or 10 digits"));
    }

    Ok(())
}

/// 15 digit IMEI whose last digit is a Luhn check digit
pub fn imei(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        return Err(rule("required", REQUIRED));
    }
    if value.len() != 15 || !is_digits(value) {
        return Err(rule("imei", "must be exactly 15 digits"));
    }
    if !luhn_valid(value) {
        return Err(rule("imei", "has an invalid check digit"));
    }

    Ok(())
}

/// SIM card ICCID of 18 to 22 digits
pub fn sim_number(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        return Err(rule("required", REQUIRED));
    }
    if !(18..=22).contains(&value.len()) || !is_digits(value) {
        return Err(rule("sim_number", "must be 18 to 22 digits"));
    }

    Ok(())
}

/// Payment card number of 12 to 19 digits passing the Luhn check
pub fn card_number(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        return Err(rule("required", REQUIRED));
    }
    if !(12..=19).contains(&value.len()) || !is_digits(value) || !luhn_valid(value) {
        return Err(rule("card_number", "is not a valid card number"));
    }

    Ok(())
}

pub fn last_4_digits(value: &str) -> Result<(), validator::ValidationError> {
    if value.len() != 4 || !is_digits(value) {
        return Err(rule("last_4_digits", "must be exactly 4 digits"));
    }

    Ok(())
}

pub fn cvv(value: &str) -> Result<(), validator::ValidationError> {
    if !(3..=4).contains(&value.len()) || !is_digits(value) {
        return Err(rule("cvv", "must be 3 or 4 digits"));
    }

    Ok(())
}

/// Parses a stored string value such as a status or role, naming `field` on failure.
pub fn parse_kind<T>(field: &'static str, value: &str) -> Result<T, ValidationError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|reason| ValidationError::invalid(field, reason))
}
