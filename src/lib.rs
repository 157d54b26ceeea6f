//! # Checkout Simulator
//!
//! A simulated card checkout pipeline: a payment form screen that validates,
//! formats, and masks input; a navigation boundary that carries the finished
//! transaction as URL query parameters; and a receipt screen that decodes
//! them back into a renderable record.
//!
//! ## Design Principles
//!
//! - **Immutable state snapshots**: the form screen is a unidirectional
//!   state machine; views project snapshots, effects are returned to the
//!   caller
//! - **Injected clock**: validators and id generation take the current
//!   instant as a parameter
//! - **Typed outcomes**: a missing or malformed handoff is a
//!   [`ReceiptOutcome`](receipt::ReceiptOutcome) variant, never a hidden
//!   redirect
//! - **Demo-grade transport**: transaction data rides in a plaintext query
//!   string by design; any real deployment must replace this boundary with a
//!   server-side record keyed by an opaque id
//!
//! ## Example
//!
//! ```no_run
//! use checkout_sim::{CheckoutEngine, Delays};
//! use std::io::Cursor;
//!
//! let csv = "name,card,expiry,cvv,amount\nJane Roe,4111111111111111,12/30,123,25.00\n";
//! let mut engine = CheckoutEngine::with_delays(Delays::none());
//! engine.process_csv(Cursor::new(csv)).unwrap();
//! engine.write_output(std::io::stdout()).unwrap();
//! ```

pub mod amount;
pub mod engine;
pub mod error;
pub mod form;
pub mod format;
pub mod query;
pub mod receipt;
pub mod transaction;
pub mod validate;

pub use amount::Amount;
pub use engine::{CheckoutEngine, Delays};
pub use error::{CheckoutError, Result};
pub use form::{FormAction, FormEvent, FormScreen, Phase};
pub use query::ReceiptParams;
pub use receipt::ReceiptOutcome;
pub use transaction::{Field, PaymentFormData, TransactionData, TxStatus, ValidationErrors};
