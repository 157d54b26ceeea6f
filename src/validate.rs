//! Field validation for the payment form.
//!
//! Every validator is a pure function over its input text; wherever the
//! calendar matters the current instant is an explicit parameter, so results
//! are deterministic under test.

use crate::transaction::{Field, PaymentFormData, ValidationErrors};
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Valid iff exactly 16 decimal digits remain after removing spaces.
pub fn validate_card_number(card_number: &str) -> bool {
    let cleaned: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.len() == 16 && cleaned.chars().all(|c| c.is_ascii_digit())
}

/// Valid iff the text is `MM/YY` with month in [1,12] and the month is not
/// strictly in the past relative to `now` (UTC).
///
/// The year comparison is done mod 100, exactly as the form presents it.
/// Known limitation: across a century boundary the two-digit comparison
/// misorders (e.g. `01/99` reads as far-future in 2099-adjacent years).
pub fn validate_expiry_date(expiry_date: &str, now: DateTime<Utc>) -> bool {
    let bytes = expiry_date.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    if !bytes[..2].iter().all(u8::is_ascii_digit) || !bytes[3..].iter().all(u8::is_ascii_digit) {
        return false;
    }

    // Safety: both halves were just checked to be two ASCII digits
    let month: u32 = expiry_date[..2].parse().expect("two ASCII digits");
    let year: i32 = expiry_date[3..].parse().expect("two ASCII digits");

    if !(1..=12).contains(&month) {
        return false;
    }

    let current_year = now.year().rem_euclid(100);
    let current_month = now.month();

    if year < current_year {
        return false;
    }
    if year == current_year && month < current_month {
        return false;
    }

    true
}

/// Valid iff exactly 3 decimal digits.
pub fn validate_cvv(cvv: &str) -> bool {
    cvv.len() == 3 && cvv.chars().all(|c| c.is_ascii_digit())
}

/// Valid iff the text parses as a decimal number, is strictly greater than
/// zero, and carries at most 2 fractional digits.
///
/// Deliberately stricter than a lenient float parse: trailing garbage
/// (`10abc`) and exponent notation (`1e2`) are rejected rather than
/// best-effort accepted, so nothing unrenderable gets past the form.
pub fn validate_amount(amount: &str) -> bool {
    let trimmed = amount.trim();
    let parsed = match Decimal::from_str(trimmed) {
        Ok(d) => d,
        Err(_) => return false,
    };

    let decimals = trimmed.split('.').nth(1).map_or(0, str::len);
    parsed > Decimal::ZERO && decimals <= 2
}

/// Validates the whole form, accumulating one message per failing field.
///
/// Returns an empty map iff the form is valid. Messages are fixed strings
/// consumed verbatim by the view layer and the batch driver's logs.
pub fn validate_form(data: &PaymentFormData, now: DateTime<Utc>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if data.cardholder_name.trim().is_empty() {
        errors.insert(Field::CardholderName, "Cardholder name is required");
    } else if data.cardholder_name.chars().any(|c| c.is_ascii_digit()) {
        errors.insert(Field::CardholderName, "Cardholder name cannot contain numbers");
    }

    if !validate_card_number(&data.card_number) {
        errors.insert(Field::CardNumber, "Invalid card number (16 digits required)");
    }

    if !validate_expiry_date(&data.expiry_date, now) {
        errors.insert(
            Field::ExpiryDate,
            "Invalid expiry date (MM/YY format, must be future date)",
        );
    }

    if !validate_cvv(&data.cvv) {
        errors.insert(Field::Cvv, "Invalid CVV (3 digits required)");
    }

    if !validate_amount(&data.amount) {
        errors.insert(Field::Amount, "Invalid amount (must be greater than 0)");
    }

    errors
}
