//! Batch driver for the checkout flow.
//!
//! Replays each CSV row of raw form input through the form screen exactly as
//! a user session would: per-field edit events (so live formatting and caps
//! apply), a submit, the fixed processing delay, the navigation handoff, and
//! the receipt screen's load. Invalid submissions are logged at warn level
//! and skipped; the flow itself has no failure path beyond that.

use crate::error::Result;
use crate::form::{FormAction, FormEvent, FormScreen};
use crate::format::mask_card_number;
use crate::receipt::{self, ReceiptOutcome};
use crate::transaction::{Field, SubmissionRecord, TransactionData};
use chrono::Utc;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// The two fixed timers of the simulation.
///
/// Neither is cancellable or concurrent with the other; they simply stand in
/// for network latency and a data fetch.
#[derive(Debug, Clone, Copy)]
pub struct Delays {
    /// Simulated payment processing after a valid submit.
    pub processing: Duration,
    /// Simulated fetch before the receipt renders.
    pub receipt_load: Duration,
}

impl Delays {
    /// Zero delays, for tests and `--no-delay`.
    pub fn none() -> Self {
        Delays {
            processing: Duration::ZERO,
            receipt_load: Duration::ZERO,
        }
    }
}

impl Default for Delays {
    fn default() -> Self {
        Delays {
            processing: Duration::from_millis(1500),
            receipt_load: Duration::from_millis(500),
        }
    }
}

/// Drives form submissions through the full two-screen flow.
///
/// Completed transactions accumulate in submission order; output is a
/// deterministic CSV summary plus optional per-transaction receipt files.
pub struct CheckoutEngine {
    delays: Delays,

    /// Transactions that made it through both screens, in input order.
    transactions: Vec<TransactionData>,

    /// Rows rejected by validation (or an impossible handoff).
    rejected: usize,
}

impl CheckoutEngine {
    /// Creates an engine with the default simulated delays.
    pub fn new() -> Self {
        Self::with_delays(Delays::default())
    }

    /// Creates an engine with explicit delays.
    pub fn with_delays(delays: Delays) -> Self {
        CheckoutEngine {
            delays,
            transactions: Vec::new(),
            rejected: 0,
        }
    }

    /// Processes form submissions from a CSV reader in streaming fashion.
    ///
    /// Expects the header `name,card,expiry,cvv,amount`. Rows that fail to
    /// parse as CSV are logged at warn level and skipped, like rows that
    /// fail form validation.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<SubmissionRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Some(txn) = self.run_submission(record, row_num) {
                        self.transactions.push(txn);
                    } else {
                        self.rejected += 1;
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    self.rejected += 1;
                }
            }
        }

        Ok(())
    }

    /// Runs one submission through form screen, handoff, and receipt screen.
    fn run_submission(&self, record: SubmissionRecord, row: usize) -> Option<TransactionData> {
        // Replay the raw fields as edits so caps and formatting apply the
        // same way they do during live typing.
        let mut screen = FormScreen::new();
        let edits = [
            (Field::CardholderName, record.name),
            (Field::CardNumber, record.card),
            (Field::ExpiryDate, record.expiry),
            (Field::Cvv, record.cvv),
            (Field::Amount, record.amount),
        ];
        for (field, raw) in edits {
            let (next, _) = screen.update(FormEvent::Edit(field, raw));
            screen = next;
        }

        let (screen, action) = screen.update(FormEvent::Submit(Utc::now()));
        match action {
            Some(FormAction::StartProcessing) => {}
            _ => {
                for (field, message) in screen.errors().iter() {
                    warn!("Row {}: {}: {}", row, field, message);
                }
                return None;
            }
        }

        thread::sleep(self.delays.processing);

        let (_, action) = screen.update(FormEvent::ProcessingComplete(Utc::now()));
        let params = match action {
            Some(FormAction::Navigate(params)) => params,
            other => {
                warn!("Row {}: processing produced no handoff: {:?}", row, other);
                return None;
            }
        };

        let url = params.receipt_url();
        debug!("Row {}: navigating to {}", row, url);

        // Receipt side: fixed load delay, then decode the same URL.
        thread::sleep(self.delays.receipt_load);
        let query = url.split_once('?').map_or("", |(_, q)| q);
        match receipt::load(query) {
            ReceiptOutcome::Loaded(txn) => {
                debug!(
                    "Row {}: transaction {} completed for {}",
                    row, txn.transaction_id, txn.cardholder_name
                );
                Some(txn)
            }
            outcome => {
                // Our own handoff always carries all six keys; reaching this
                // means the boundary and the receipt screen disagree.
                warn!("Row {}: receipt could not load handoff: {:?}", row, outcome);
                None
            }
        }
    }

    /// Writes the transaction summary as CSV, masked and 2-dp formatted.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["txn_id", "status", "cardholder", "card_number", "expiry", "amount"])?;

        for txn in &self.transactions {
            csv_writer.write_record([
                txn.transaction_id.clone(),
                txn.status.to_string(),
                txn.cardholder_name.clone(),
                mask_card_number(&txn.card_number),
                txn.expiry_date.clone(),
                txn.amount.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes one `receipt-<id>.txt` per completed transaction.
    ///
    /// Returns the number of files written.
    pub fn write_receipts(&self, dir: &Path) -> Result<usize> {
        for txn in &self.transactions {
            let path = dir.join(receipt::file_name(txn));
            fs::write(path, receipt::render_text(txn))?;
        }
        Ok(self.transactions.len())
    }

    /// Completed transactions in submission order.
    pub fn transactions(&self) -> &[TransactionData] {
        &self.transactions
    }

    /// Number of submissions rejected by validation.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl Default for CheckoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
