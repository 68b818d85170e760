//! Hand-written queries against the Indexer for Explorer schema.
//!
//! Every row is selected as a single `jsonb` column named `row`. Joined rows
//! are merged with `||`, so on a column name clash the right-hand table wins.

use crate::{ActionKind, SYSTEM_ACCOUNT};
use diesel::{
    pg::Pg,
    query_builder::{BoxedSqlQuery, SqlQuery},
    sql_types::{BigInt, Jsonb, Text},
    QueryableByName,
};
use indoc::indoc;

#[derive(QueryableByName)]
pub(crate) struct JsonRow {
    #[diesel(sql_type = Jsonb)]
    pub row: serde_json::Value,
}

#[derive(QueryableByName)]
pub(crate) struct TableName {
    #[diesel(sql_type = Text)]
    pub table_name: String,
}

/// `$1` action kind, `$2` excluded predecessor, `$3` block height.
pub(crate) const TRANSFER_TRANSACTIONS: &str = indoc! {r#"
    SELECT to_jsonb(transactions.*) AS row
    FROM receipt_action_actions
    INNER JOIN receipts ON receipt_action_actions.receipt_id = receipts.receipt_id
    INNER JOIN execution_outcomes ON execution_outcomes.receipt_id = receipts.receipt_id
    INNER JOIN transactions ON transactions.transaction_hash = receipts.transaction_hash
    WHERE receipt_action_actions.action_kind::text = $1
        AND receipts.predecessor_id != $2
        AND receipts.block_height = $3
"#};

pub(crate) fn transfer_transactions(block_height: i64) -> BoxedSqlQuery<'static, Pg, SqlQuery> {
    diesel::sql_query(TRANSFER_TRANSACTIONS)
        .into_boxed()
        .bind::<Text, _>(ActionKind::Transfer.to_string())
        .bind::<Text, _>(SYSTEM_ACCOUNT)
        .bind::<BigInt, _>(block_height)
}

/// `$1` transaction hash.
pub(crate) const TRANSACTION_ACTIONS: &str = indoc! {r#"
    SELECT to_jsonb(transaction_actions.*) AS row
    FROM transaction_actions
    WHERE transaction_actions.transaction_hash = $1
"#};

/// `$1` transaction hash.
pub(crate) const TRANSACTION_RECEIPTS: &str = indoc! {r#"
    SELECT to_jsonb(receipts.*)
        || to_jsonb(receipt_actions.*)
        || to_jsonb(execution_outcomes.*) AS row
    FROM receipts
    JOIN receipt_actions ON receipt_actions.receipt_id = receipts.receipt_id
    JOIN execution_outcomes ON execution_outcomes.receipt_id = receipts.receipt_id
    WHERE receipts.transaction_hash = $1
"#};

/// `$1` receipt id.
pub(crate) const RECEIPT_ACTIONS: &str = indoc! {r#"
    SELECT to_jsonb(receipt_action_actions.*) AS row
    FROM receipt_action_actions
    WHERE receipt_action_actions.receipt_id = $1
    ORDER BY receipt_action_actions."index" ASC
"#};

/// `$1` table names to look for.
pub(crate) const EXISTING_TABLES: &str = indoc! {r#"
    SELECT table_name::text AS table_name
    FROM information_schema.tables
    WHERE table_schema = ANY(current_schemas(false))
        AND table_name = ANY($1)
"#};
