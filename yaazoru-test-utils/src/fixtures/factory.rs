//! Factory functions for deterministic, valid test values.
//!
//! Every function takes a small integer seed so tests can create several distinct rows
//! without clashing on unique columns.

use chrono::{NaiveDate, Utc};

use crate::model::CustomerModel;

/// Israeli ID number (9 digits) whose check digit is valid for the given seed.
pub fn id_number(seed: u32) -> String {
    let base = format!("{:08}", seed);
    let sum: u32 = base
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let digit = c.to_digit(10).unwrap_or(0);
            let product = digit * if i % 2 == 0 { 1 } else { 2 };
            if product > 9 {
                product - 9
            } else {
                product
            }
        })
        .sum();
    let check = (10 - sum % 10) % 10;

    format!("{}{}", base, check)
}

/// Luhn check digit for a string of decimal digits.
fn luhn_check_digit(base: &str) -> u32 {
    let sum: u32 = base
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            let digit = c.to_digit(10).unwrap_or(0);
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    (10 - sum % 10) % 10
}

/// 15 digit IMEI that passes the Luhn check.
pub fn imei(seed: u32) -> String {
    let base = format!("35{:012}", seed);
    format!("{}{}", base, luhn_check_digit(&base))
}

/// 16 digit card number that passes the Luhn check.
pub fn card_number(seed: u32) -> String {
    let base = format!("4580{:011}", seed);
    format!("{}{}", base, luhn_check_digit(&base))
}

/// 19 digit ICCID SIM number.
pub fn sim_number(seed: u32) -> String {
    format!("89972{:014}", seed)
}

pub fn device_number(seed: u32) -> String {
    format!("DEV-{:05}", seed)
}

pub fn phone_number(seed: u32) -> String {
    format!("050{:07}", seed)
}

pub fn email(prefix: &str, seed: u32) -> String {
    format!("{}{}@example.com", prefix, seed)
}

pub fn card_token(seed: u32) -> String {
    format!("tok_{:08}", seed)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a mock customer model without touching the database.
pub fn mock_customer_model(seed: u32) -> CustomerModel {
    let now = Utc::now().naive_utc();
    CustomerModel {
        id: seed as i32,
        first_name: "Test".to_string(),
        last_name: format!("Customer {}", seed),
        id_number: id_number(seed),
        email: email("customer", seed),
        phone_number: phone_number(seed),
        additional_phone: None,
        address: "1 Herzl St".to_string(),
        city: "Tel Aviv".to_string(),
        status: "active".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_number_has_valid_check_digit() {
        assert_eq!(id_number(1), "000000018");
        assert_eq!(id_number(12345678), "123456782");
    }

    #[test]
    fn imei_is_fifteen_digits() {
        let value = imei(7);
        assert_eq!(value.len(), 15);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }
}
