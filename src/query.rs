//! The navigation boundary between the form and receipt screens.
//!
//! On success the form screen hands the transaction off as percent-encoded
//! query parameters on `/receipt`; the receipt screen decodes the same six
//! keys back out. This plaintext, user-visible transport is the original
//! system's entire "API" and is suitable for a demo only — a real deployment
//! must carry an opaque server-issued reference instead of card data.

/// The six parameters a renderable receipt requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptParams {
    pub name: String,
    /// Display-formatted card number (space-grouped).
    pub card: String,
    pub expiry: String,
    /// Amount exactly as entered on the form.
    pub amount: String,
    pub txn_id: String,
    /// RFC 3339 timestamp of the simulated payment.
    pub timestamp: String,
}

/// The path the form screen navigates to on success.
pub const RECEIPT_PATH: &str = "/receipt";

impl ReceiptParams {
    /// Encodes the six parameters as a query string.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.name)
            .append_pair("card", &self.card)
            .append_pair("expiry", &self.expiry)
            .append_pair("amount", &self.amount)
            .append_pair("txnId", &self.txn_id)
            .append_pair("timestamp", &self.timestamp)
            .finish()
    }

    /// Full navigation target, e.g. `/receipt?name=...&card=...`.
    pub fn receipt_url(&self) -> String {
        format!("{}?{}", RECEIPT_PATH, self.to_query())
    }

    /// Decodes the six parameters from a query string.
    ///
    /// Returns `None` if any key is absent; unknown keys are ignored.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut name = None;
        let mut card = None;
        let mut expiry = None;
        let mut amount = None;
        let mut txn_id = None;
        let mut timestamp = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "name" => name = Some(value),
                "card" => card = Some(value),
                "expiry" => expiry = Some(value),
                "amount" => amount = Some(value),
                "txnId" => txn_id = Some(value),
                "timestamp" => timestamp = Some(value),
                _ => {}
            }
        }

        Some(ReceiptParams {
            name: name?,
            card: card?,
            expiry: expiry?,
            amount: amount?,
            txn_id: txn_id?,
            timestamp: timestamp?,
        })
    }
}
