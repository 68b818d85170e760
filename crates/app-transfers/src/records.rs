use serde::Serialize;
use transfer_finder_db::{Action, Row};

/// A receipt with its own actions nested in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptRecord {
    #[serde(flatten)]
    pub row: Row,
    pub actions: Vec<Action>,
}

impl ReceiptRecord {
    pub fn receipt_id(&self) -> Option<&str> {
        self.row.get_str("receipt_id")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    #[serde(flatten)]
    pub row: Row,
    pub actions: Vec<Action>,
    pub receipts: Vec<ReceiptRecord>,
}

impl TransactionRecord {
    pub fn transaction_hash(&self) -> Option<&str> {
        self.row.get_str("transaction_hash")
    }
}

/// One entry of the printed result: `{ "transaction": { .. } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferEnvelope {
    pub transaction: TransactionRecord,
}
