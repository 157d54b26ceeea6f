//! Payment form and transaction models.

use crate::amount::Amount;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// The five fields of the payment form.
///
/// Used as the key of [`ValidationErrors`] and in per-row log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    CardholderName,
    CardNumber,
    ExpiryDate,
    Cvv,
    Amount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::CardholderName => "cardholder name",
            Field::CardNumber => "card number",
            Field::ExpiryDate => "expiry date",
            Field::Cvv => "cvv",
            Field::Amount => "amount",
        };
        write!(f, "{}", name)
    }
}

/// The payment form's field values as the user has entered them.
///
/// Card number is held display-formatted (space-grouped), expiry as `MM/YY`.
/// The struct lives only for the duration of input on the form screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFormData {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub amount: String,
}

/// Per-field validation messages.
///
/// A field with no entry is currently valid. The map is recomputed wholesale
/// on every submit attempt; editing a field clears that field's entry eagerly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Creates an empty (all-valid) error map.
    pub fn new() -> Self {
        ValidationErrors(BTreeMap::new())
    }

    /// Records a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns the message for a field, if it is currently invalid.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Removes the message for a field.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Returns `true` if every field is valid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over failing fields in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Outcome of a simulated payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Failed,
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxStatus::Success => write!(f, "success"),
            TxStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A completed transaction as reconstructed on the receipt side.
///
/// Only built from a full set of decoded navigation parameters; the CVV is
/// always the redacted literal `"***"` since it never crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionData {
    pub cardholder_name: String,
    /// Display-formatted card number; masked before any rendering.
    pub card_number: String,
    pub expiry_date: String,
    /// Redacted, never the value the user typed.
    pub cvv: String,
    pub amount: Amount,
    pub transaction_id: String,
    pub status: TxStatus,
    pub timestamp: DateTime<Utc>,
}

/// Raw form submission as read from the batch CSV.
///
/// Fields are kept as entered; the engine replays them through the form
/// screen so live formatting and caps apply exactly as they would in the UI.
#[derive(Debug, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub card: String,
    pub expiry: String,
    pub cvv: String,
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_insert_get_clear() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.insert(Field::Cvv, "Invalid CVV (3 digits required)");
        assert!(!errors.is_empty());
        assert_eq!(errors.get(Field::Cvv), Some("Invalid CVV (3 digits required)"));
        assert_eq!(errors.get(Field::Amount), None);

        errors.clear(Field::Cvv);
        assert!(errors.is_empty());
        assert_eq!(errors.get(Field::Cvv), None);
    }

    #[test]
    fn test_errors_iterate_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Amount, "a");
        errors.insert(Field::CardholderName, "b");
        errors.insert(Field::Cvv, "c");

        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::CardholderName, Field::Cvv, Field::Amount]);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TxStatus::Success.to_string(), "success");
        assert_eq!(TxStatus::Failed.to_string(), "failed");
    }
}
