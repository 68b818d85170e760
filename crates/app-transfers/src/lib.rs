mod fetch;
mod records;

pub use fetch::fetch_transfers;
pub use records::{ReceiptRecord, TransactionRecord, TransferEnvelope};
