//! In-memory stand-in for the indexer tables.
//!
//! Applies the same joins and filters as the SQL in `transfer-finder-db`, but
//! returns receipt actions in insertion order so callers have to sort.

#![allow(dead_code)]

use serde_json::{json, Map, Value};
use transfer_finder_db::{Action, ActionKind, Error, IndexerStore, Result, Row, SYSTEM_ACCOUNT};

#[derive(Default)]
pub struct Fixture {
    pub transactions: Vec<Map<String, Value>>,
    pub transaction_actions: Vec<Map<String, Value>>,
    pub receipts: Vec<Map<String, Value>>,
    pub receipt_actions: Vec<Map<String, Value>>,
    pub receipt_action_actions: Vec<Map<String, Value>>,
    pub execution_outcomes: Vec<Map<String, Value>>,
    /// Query names in the order they ran.
    pub log: Vec<String>,
    /// Make the n-th query (0-based) fail.
    pub fail_at: Option<usize>,
}

/// numeric(45,0) yoctoNEAR amount, wider than u64.
pub const TOKENS_BURNT: &str = "242491061660000000001";

/// A `numeric` value the way Postgres renders it inside jsonb.
fn numeric(digits: &str) -> Value {
    serde_json::from_str(digits).expect("fixture numerics are valid json numbers")
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture rows must be objects"),
    }
}

fn str_col<'a>(row: &'a Map<String, Value>, column: &str) -> &'a str {
    row.get(column).and_then(Value::as_str).unwrap_or_default()
}

impl Fixture {
    pub fn transaction(&mut self, hash: &str, signer: &str) -> &mut Self {
        self.transactions.push(object(json!({
            "transaction_hash": hash,
            "signer_id": signer,
            "receiver_id": "bob.near",
            "nonce": "7",
            "status": "SUCCESS_RECEIPT_ID",
        })));
        self
    }

    pub fn transaction_action(&mut self, hash: &str, index: i64, kind: ActionKind) -> &mut Self {
        self.transaction_actions.push(object(json!({
            "transaction_hash": hash,
            "index": index,
            "action_kind": kind.to_string(),
            "args": {},
        })));
        self
    }

    /// A receipt together with its receipt_actions and execution_outcomes rows.
    pub fn receipt(
        &mut self,
        receipt_id: &str,
        hash: &str,
        predecessor: &str,
        block_height: i64,
    ) -> &mut Self {
        self.receipts.push(object(json!({
            "receipt_id": receipt_id,
            "transaction_hash": hash,
            "predecessor_id": predecessor,
            "receiver_id": "bob.near",
            "block_height": block_height,
        })));
        self.receipt_actions.push(object(json!({
            "receipt_id": receipt_id,
            "signer_id": predecessor,
            "gas_price": 100000000,
        })));
        self.execution_outcomes.push(object(json!({
            "receipt_id": receipt_id,
            "executor_id": "bob.near",
            "status": "SUCCESS_VALUE",
            "tokens_burnt": numeric(TOKENS_BURNT),
        })));
        self
    }

    pub fn receipt_action(&mut self, receipt_id: &str, index: i64, kind: ActionKind) -> &mut Self {
        self.receipt_action_actions.push(object(json!({
            "receipt_id": receipt_id,
            "index": index,
            "action_kind": kind.to_string(),
            "args": { "deposit": "1000000000000000000000000" },
        })));
        self
    }

    fn record(&mut self, query: String) -> Result<()> {
        let position = self.log.len();
        self.log.push(query);
        if self.fail_at == Some(position) {
            return Err(Error::Query(diesel::result::Error::NotFound));
        }
        Ok(())
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.log.iter().filter(|q| q.starts_with(prefix)).count()
    }
}

impl IndexerStore for Fixture {
    fn transfer_transactions(&mut self, block_height: i64) -> Result<Vec<Row>> {
        self.record(format!("transfer_transactions {}", block_height))?;

        let transfer = ActionKind::Transfer.to_string();
        let mut rows = vec![];
        for action in &self.receipt_action_actions {
            if str_col(action, "action_kind") != transfer {
                continue;
            }
            let receipt_id = str_col(action, "receipt_id");
            for receipt in &self.receipts {
                if str_col(receipt, "receipt_id") != receipt_id
                    || str_col(receipt, "predecessor_id") == SYSTEM_ACCOUNT
                    || receipt.get("block_height").and_then(Value::as_i64) != Some(block_height)
                {
                    continue;
                }
                let outcomes = self
                    .execution_outcomes
                    .iter()
                    .filter(|o| str_col(o, "receipt_id") == receipt_id)
                    .count();
                let hash = str_col(receipt, "transaction_hash");
                for transaction in &self.transactions {
                    if str_col(transaction, "transaction_hash") == hash {
                        for _ in 0..outcomes {
                            rows.push(Row::new(transaction.clone()));
                        }
                    }
                }
            }
        }
        Ok(rows)
    }

    fn transaction_actions(&mut self, transaction_hash: &str) -> Result<Vec<Action>> {
        self.record(format!("transaction_actions {}", transaction_hash))?;
        Ok(self
            .transaction_actions
            .iter()
            .filter(|a| str_col(a, "transaction_hash") == transaction_hash)
            .map(|a| Action::new(Row::new(a.clone())))
            .collect())
    }

    fn transaction_receipts(&mut self, transaction_hash: &str) -> Result<Vec<Row>> {
        self.record(format!("transaction_receipts {}", transaction_hash))?;

        let mut rows = vec![];
        for receipt in &self.receipts {
            if str_col(receipt, "transaction_hash") != transaction_hash {
                continue;
            }
            let receipt_id = str_col(receipt, "receipt_id");
            for receipt_action in &self.receipt_actions {
                if str_col(receipt_action, "receipt_id") != receipt_id {
                    continue;
                }
                for outcome in &self.execution_outcomes {
                    if str_col(outcome, "receipt_id") != receipt_id {
                        continue;
                    }
                    let mut merged = receipt.clone();
                    merged.extend(receipt_action.clone());
                    merged.extend(outcome.clone());
                    rows.push(Row::new(merged));
                }
            }
        }
        Ok(rows)
    }

    fn receipt_actions(&mut self, receipt_id: &str) -> Result<Vec<Action>> {
        self.record(format!("receipt_actions {}", receipt_id))?;
        Ok(self
            .receipt_action_actions
            .iter()
            .filter(|a| str_col(a, "receipt_id") == receipt_id)
            .map(|a| Action::new(Row::new(a.clone())))
            .collect())
    }
}
