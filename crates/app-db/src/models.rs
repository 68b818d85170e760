mod actions;
mod row;

pub use actions::{Action, ActionKind, SYSTEM_ACCOUNT};
pub use row::Row;
