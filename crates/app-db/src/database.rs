use crate::{
    sql::{self, JsonRow, TableName},
    Action, Result, Row,
};
use diesel::{
    pg::PgConnection,
    sql_types::{Array, Text},
    Connection, RunQueryDsl,
};

/// Tables the transfer lookup reads. They belong to the indexer, this crate
/// never creates or alters them.
const CONSUMED_TABLES: [&str; 6] = [
    "transactions",
    "transaction_actions",
    "receipts",
    "receipt_actions",
    "receipt_action_actions",
    "execution_outcomes",
];

/// Read access to the indexer tables, one method per query.
pub trait IndexerStore {
    /// Transactions owning a non-system `TRANSFER` receipt action at `block_height`.
    /// A transaction shows up once per matching receipt action.
    fn transfer_transactions(&mut self, block_height: i64) -> Result<Vec<Row>>;

    fn transaction_actions(&mut self, transaction_hash: &str) -> Result<Vec<Action>>;

    /// Receipts of a transaction merged with their receipt_actions and
    /// execution_outcomes rows.
    fn transaction_receipts(&mut self, transaction_hash: &str) -> Result<Vec<Row>>;

    /// Ordered by `index` ascending.
    fn receipt_actions(&mut self, receipt_id: &str) -> Result<Vec<Action>>;
}

/// The single connection a run works with. Dropping it closes the connection.
pub struct Database {
    conn: PgConnection,
}

impl Database {
    pub fn connect(url: &str) -> Result<Self> {
        let conn = PgConnection::establish(url)?;
        log::debug!("Connected to database");

        let mut database = Self { conn };
        match database.check_schema() {
            Ok(missing) => {
                for table in missing {
                    log::warn!("Table `{}` not found, queries against it will fail", table);
                }
            }
            Err(err) => log::warn!("Skipping schema check: {}", err),
        }
        Ok(database)
    }

    /// Returns the consumed tables that are not visible on this connection.
    /// Read-only, so it is safe to run on every start.
    pub fn check_schema(&mut self) -> Result<Vec<&'static str>> {
        let names: Vec<String> = CONSUMED_TABLES.iter().map(|t| t.to_string()).collect();
        let found: Vec<TableName> = diesel::sql_query(sql::EXISTING_TABLES)
            .bind::<Array<Text>, _>(names)
            .load(&mut self.conn)?;

        Ok(CONSUMED_TABLES
            .into_iter()
            .filter(|table| !found.iter().any(|f| f.table_name == *table))
            .collect())
    }
}

fn decode_rows(table: &'static str, rows: Vec<JsonRow>) -> Result<Vec<Row>> {
    rows.into_iter().map(|r| Row::decode(table, r.row)).collect()
}

fn decode_actions(table: &'static str, rows: Vec<JsonRow>) -> Result<Vec<Action>> {
    Ok(decode_rows(table, rows)?
        .into_iter()
        .map(Action::new)
        .collect())
}

impl IndexerStore for Database {
    fn transfer_transactions(&mut self, block_height: i64) -> Result<Vec<Row>> {
        let rows: Vec<JsonRow> = sql::transfer_transactions(block_height).load(&mut self.conn)?;
        decode_rows("transactions", rows)
    }

    fn transaction_actions(&mut self, transaction_hash: &str) -> Result<Vec<Action>> {
        let rows: Vec<JsonRow> = diesel::sql_query(sql::TRANSACTION_ACTIONS)
            .bind::<Text, _>(transaction_hash)
            .load(&mut self.conn)?;
        decode_actions("transaction_actions", rows)
    }

    fn transaction_receipts(&mut self, transaction_hash: &str) -> Result<Vec<Row>> {
        let rows: Vec<JsonRow> = diesel::sql_query(sql::TRANSACTION_RECEIPTS)
            .bind::<Text, _>(transaction_hash)
            .load(&mut self.conn)?;
        decode_rows("receipts", rows)
    }

    fn receipt_actions(&mut self, receipt_id: &str) -> Result<Vec<Action>> {
        let rows: Vec<JsonRow> = diesel::sql_query(sql::RECEIPT_ACTIONS)
            .bind::<Text, _>(receipt_id)
            .load(&mut self.conn)?;
        decode_actions("receipt_action_actions", rows)
    }
}
