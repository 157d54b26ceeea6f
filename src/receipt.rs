//! The receipt screen: decoding the navigation handoff and rendering.
//!
//! Loading is a pure function from the query string to a typed outcome; the
//! caller decides what a `Missing` or `Malformed` outcome means (the original
//! UI redirects to the start screen), so no navigation happens as a side
//! effect here.

use crate::amount::Amount;
use crate::format::mask_card_number;
use crate::query::ReceiptParams;
use crate::transaction::{TransactionData, TxStatus};
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// What the receipt screen found in the navigation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptOutcome {
    /// All six parameters present and parseable; ready to render.
    Loaded(TransactionData),
    /// At least one required parameter is absent. Recoverable by restarting
    /// the flow; not an error surfaced to the user.
    Missing,
    /// All parameters present but the amount or timestamp does not parse.
    /// Fails closed instead of rendering a garbage value.
    Malformed,
}

/// Reconstructs a transaction from the receipt URL's query string.
///
/// The status is always `Success` (the simulation has no decline path) and
/// the CVV is the redacted literal, since the real value never crosses the
/// navigation boundary.
pub fn load(query: &str) -> ReceiptOutcome {
    let params = match ReceiptParams::from_query(query) {
        Some(p) => p,
        None => return ReceiptOutcome::Missing,
    };

    let amount = match Amount::from_str(&params.amount) {
        Ok(a) => a,
        Err(_) => return ReceiptOutcome::Malformed,
    };
    let timestamp = match DateTime::parse_from_rfc3339(&params.timestamp) {
        Ok(t) => t.with_timezone(&Utc),
        Err(_) => return ReceiptOutcome::Malformed,
    };

    ReceiptOutcome::Loaded(TransactionData {
        cardholder_name: params.name,
        card_number: params.card,
        expiry_date: params.expiry,
        cvv: "***".to_string(),
        amount,
        transaction_id: params.txn_id,
        status: TxStatus::Success,
        timestamp,
    })
}

/// Long-form en-US date for display, e.g. `August 27, 2026, 12:00 PM`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// Renders the downloadable plain-text receipt.
pub fn render_text(txn: &TransactionData) -> String {
    format!(
        "PAYMENT RECEIPT\n\
         =====================================\n\
         \n\
         Transaction ID: {id}\n\
         Status: {status}\n\
         Date: {date}\n\
         \n\
         PAYMENT DETAILS\n\
         -------------------------------------\n\
         Cardholder: {name}\n\
         Card Number: {card}\n\
         Expiry Date: {expiry}\n\
         Amount: ${amount}\n\
         \n\
         Thank you for your payment!\n\
         =====================================",
        id = txn.transaction_id,
        status = txn.status.to_string().to_uppercase(),
        date = format_date(txn.timestamp),
        name = txn.cardholder_name,
        card = mask_card_number(&txn.card_number),
        expiry = txn.expiry_date,
        amount = txn.amount,
    )
}

/// File name of the receipt artifact: `receipt-<transactionId>.txt`.
pub fn file_name(txn: &TransactionData) -> String {
    format!("receipt-{}.txt", txn.transaction_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_query() -> String {
        ReceiptParams {
            name: "Jane Roe".to_string(),
            card: "4111 1111 1111 1111".to_string(),
            expiry: "12/30".to_string(),
            amount: "25.00".to_string(),
            txn_id: "TXN-ABC123-DEF456G".to_string(),
            timestamp: "2026-08-27T12:00:00.000Z".to_string(),
        }
        .to_query()
    }

    fn load_ok(query: &str) -> TransactionData {
        match load(query) {
            ReceiptOutcome::Loaded(txn) => txn,
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reconstructs_transaction() {
        let txn = load_ok(&sample_query());

        assert_eq!(txn.cardholder_name, "Jane Roe");
        assert_eq!(txn.card_number, "4111 1111 1111 1111");
        assert_eq!(txn.expiry_date, "12/30");
        assert_eq!(txn.cvv, "***");
        assert_eq!(txn.amount.to_string(), "25.00");
        assert_eq!(txn.transaction_id, "TXN-ABC123-DEF456G");
        assert_eq!(txn.status, TxStatus::Success);
        assert_eq!(
            txn.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_load_empty_query_is_missing() {
        assert_eq!(load(""), ReceiptOutcome::Missing);
    }

    #[test]
    fn test_load_partial_query_is_missing() {
        assert_eq!(load("name=Jane+Roe&card=4111"), ReceiptOutcome::Missing);
    }

    #[test]
    fn test_load_unparseable_amount_fails_closed() {
        let query = sample_query().replace("amount=25.00", "amount=not-a-number");
        assert_eq!(load(&query), ReceiptOutcome::Malformed);
    }

    #[test]
    fn test_load_unparseable_timestamp_fails_closed() {
        let query = sample_query().replace("2026-08-27T12%3A00%3A00.000Z", "yesterday");
        assert_eq!(load(&query), ReceiptOutcome::Malformed);
    }

    #[test]
    fn test_format_date_long_form() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 27, 14, 5, 0).unwrap();
        assert_eq!(format_date(ts), "August 27, 2026, 02:05 PM");

        let ts = Utc.with_ymd_and_hms(2026, 1, 3, 0, 30, 0).unwrap();
        assert_eq!(format_date(ts), "January 3, 2026, 12:30 AM");
    }

    #[test]
    fn test_render_text_template() {
        let txn = load_ok(&sample_query());
        let text = render_text(&txn);

        assert!(text.starts_with("PAYMENT RECEIPT"));
        assert!(text.contains("Transaction ID: TXN-ABC123-DEF456G"));
        assert!(text.contains("Status: SUCCESS"));
        assert!(text.contains("Cardholder: Jane Roe"));
        assert!(text.contains("Card Number: **** **** **** 1111"));
        assert!(text.contains("Expiry Date: 12/30"));
        assert!(text.contains("Amount: $25.00"));
        assert!(text.contains("Thank you for your payment!"));
        assert!(!text.contains("4111 1111 1111 1111"));
    }

    #[test]
    fn test_render_text_with_non_ascii_card_param() {
        // The boundary only parse-checks amount and timestamp; the card
        // parameter is arbitrary text and must still render masked.
        let query = sample_query().replace(
            "card=4111+1111+1111+1111",
            "card=%E2%82%AC%E2%82%AC",
        );
        let txn = load_ok(&query);
        assert_eq!(txn.card_number, "€€");

        let text = render_text(&txn);
        assert!(text.contains("Card Number: **** **** **** €€"));
    }

    #[test]
    fn test_file_name() {
        let txn = load_ok(&sample_query());
        assert_eq!(file_name(&txn), "receipt-TXN-ABC123-DEF456G.txt");
    }
}
