//! The payment form screen as an explicit state machine.
//!
//! State is an immutable snapshot; [`FormScreen::update`] consumes the
//! current snapshot plus one event and returns the next snapshot along with
//! any action the caller must perform (start the processing delay, navigate
//! away). The view is a pure projection of the snapshot, so nothing here
//! touches timers or navigation directly.

use crate::format::{format_card_number, format_expiry_date, generate_transaction_id};
use crate::query::ReceiptParams;
use crate::transaction::{Field, PaymentFormData, ValidationErrors};
use crate::validate;
use chrono::{DateTime, SecondsFormat, Utc};

/// Maximum digits accepted in the card number field.
pub const CARD_DIGIT_CAP: usize = 16;

/// Maximum characters accepted in the CVV field.
pub const CVV_CAP: usize = 3;

/// Where the screen is in its lifecycle.
///
/// `Editing` is the only recoverable state; `Processing` ends in navigation
/// and never returns to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Processing,
}

/// One user- or timer-originated event.
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// The user changed a field's raw input.
    Edit(Field, String),
    /// The user pressed submit at the given instant.
    Submit(DateTime<Utc>),
    /// The simulated processing delay elapsed at the given instant.
    ProcessingComplete(DateTime<Utc>),
}

/// A side effect the caller owns after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Run the fixed processing delay, then feed back `ProcessingComplete`.
    StartProcessing,
    /// Hand the transaction off to the receipt screen. Terminal.
    Navigate(ReceiptParams),
}

/// Immutable snapshot of the form screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormScreen {
    data: PaymentFormData,
    errors: ValidationErrors,
    phase: Phase,
}

impl FormScreen {
    /// Fresh screen with empty fields, no errors, in `Editing`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn data(&self) -> &PaymentFormData {
        &self.data
    }

    /// Current per-field validation messages.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances the state machine by one event.
    ///
    /// Events that are meaningless in the current phase (submitting while
    /// processing, a stray completion while editing) leave the snapshot
    /// unchanged and produce no action.
    pub fn update(self, event: FormEvent) -> (Self, Option<FormAction>) {
        match (self.phase, event) {
            (Phase::Editing, FormEvent::Edit(field, raw)) => (self.apply_edit(field, &raw), None),
            (Phase::Editing, FormEvent::Submit(now)) => self.submit(now),
            (Phase::Processing, FormEvent::ProcessingComplete(now)) => self.complete(now),
            // Submit is disabled while processing; edits after submit are
            // dropped; a completion can only follow a submit.
            (_, _) => (self, None),
        }
    }

    /// Applies live formatting and caps for one field, clearing its error.
    fn apply_edit(mut self, field: Field, raw: &str) -> Self {
        let value = match field {
            Field::CardholderName => raw.to_string(),
            Field::CardNumber => {
                let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
                digits.truncate(CARD_DIGIT_CAP);
                format_card_number(&digits)
            }
            Field::ExpiryDate => format_expiry_date(raw),
            Field::Cvv => {
                let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
                digits.truncate(CVV_CAP);
                digits
            }
            Field::Amount => raw.to_string(),
        };

        match field {
            Field::CardholderName => self.data.cardholder_name = value,
            Field::CardNumber => self.data.card_number = value,
            Field::ExpiryDate => self.data.expiry_date = value,
            Field::Cvv => self.data.cvv = value,
            Field::Amount => self.data.amount = value,
        }
        self.errors.clear(field);
        self
    }

    fn submit(mut self, now: DateTime<Utc>) -> (Self, Option<FormAction>) {
        let errors = validate::validate_form(&self.data, now);
        if !errors.is_empty() {
            self.errors = errors;
            return (self, None);
        }

        self.errors = ValidationErrors::new();
        self.phase = Phase::Processing;
        (self, Some(FormAction::StartProcessing))
    }

    /// Generates the transaction id and timestamp, then hands off.
    ///
    /// One-way: the snapshot stays in `Processing`; the screen instance is
    /// done once the caller navigates.
    fn complete(self, now: DateTime<Utc>) -> (Self, Option<FormAction>) {
        let params = ReceiptParams {
            name: self.data.cardholder_name.clone(),
            card: self.data.card_number.clone(),
            expiry: self.data.expiry_date.clone(),
            amount: self.data.amount.clone(),
            txn_id: generate_transaction_id(now),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        (self, Some(FormAction::Navigate(params)))
    }
}
