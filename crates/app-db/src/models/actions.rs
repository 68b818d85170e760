use crate::Row;
use serde::Serialize;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Predecessor of receipts the protocol creates on its own, such as gas refunds.
pub const SYSTEM_ACCOUNT: &str = "system";

/// A transaction-level or receipt-level action row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Action(Row);

impl Action {
    pub fn new(row: Row) -> Self {
        Self(row)
    }

    pub fn action_kind(&self) -> Option<&str> {
        self.0.get_str("action_kind")
    }

    /// `None` for kinds this crate does not know about.
    pub fn kind(&self) -> Option<ActionKind> {
        self.action_kind().and_then(|kind| ActionKind::from_str(kind).ok())
    }

    pub fn index(&self) -> Option<i64> {
        self.0.get_i64("index")
    }

    pub fn row(&self) -> &Row {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    CreateAccount,
    DeployContract,
    FunctionCall,
    Transfer,
    Stake,
    AddKey,
    DeleteKey,
    DeleteAccount,
}
