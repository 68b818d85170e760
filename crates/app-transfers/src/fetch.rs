use crate::{ReceiptRecord, TransactionRecord, TransferEnvelope};
use transfer_finder_db::{Error, IndexerStore, Result, Row};

/// Finds the transactions behind the `TRANSFER` receipts of a block.
///
/// Each matching transaction is completed with its own actions and with its
/// receipts, every receipt carrying its actions ordered by `index`. Queries
/// run one after another; the first failure aborts the whole fetch.
pub fn fetch_transfers<S>(store: &mut S, block_height: i64) -> Result<Vec<TransferEnvelope>>
where
    S: IndexerStore + ?Sized,
{
    let rows = store.transfer_transactions(block_height)?;
    log::debug!(
        "Block {}: {} transfer receipt action(s) found",
        block_height,
        rows.len()
    );

    let mut transfers = Vec::with_capacity(rows.len());
    for row in rows {
        let transaction = fetch_transaction(store, row)?;
        transfers.push(TransferEnvelope { transaction });
    }

    log::info!(
        "Block {}: assembled {} transaction(s)",
        block_height,
        transfers.len()
    );
    Ok(transfers)
}

fn fetch_transaction<S>(store: &mut S, row: Row) -> Result<TransactionRecord>
where
    S: IndexerStore + ?Sized,
{
    let hash = required_str(&row, "transactions", "transaction_hash")?;

    let actions = store.transaction_actions(&hash)?;

    let receipt_rows = store.transaction_receipts(&hash)?;
    let mut receipts = Vec::with_capacity(receipt_rows.len());
    for receipt_row in receipt_rows {
        let receipt_id = required_str(&receipt_row, "receipts", "receipt_id")?;
        let mut receipt_actions = store.receipt_actions(&receipt_id)?;
        receipt_actions.sort_by_key(|action| action.index());
        receipts.push(ReceiptRecord {
            row: receipt_row,
            actions: receipt_actions,
        });
    }

    log::debug!(
        "Transaction {}: {} action(s), {} receipt(s)",
        hash,
        actions.len(),
        receipts.len()
    );
    Ok(TransactionRecord {
        row,
        actions,
        receipts,
    })
}

fn required_str(row: &Row, table: &'static str, column: &str) -> Result<String> {
    row.get_str(column)
        .map(str::to_owned)
        .ok_or_else(|| Error::MalformedRow {
            table,
            reason: format!("missing string column `{}`", column),
        })
}
