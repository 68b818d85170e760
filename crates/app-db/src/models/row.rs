use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single database row, column name to value.
///
/// Rows are selected as `jsonb` so the full column set of the indexer schema
/// is carried through without this crate having to mirror it. `numeric`
/// columns such as yoctoNEAR amounts keep their exact digits.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new(columns: Map<String, Value>) -> Self {
        Self(columns)
    }

    pub(crate) fn decode(table: &'static str, value: Value) -> Result<Self> {
        match value {
            Value::Object(columns) => Ok(Self(columns)),
            other => Err(Error::MalformedRow {
                table,
                reason: format!("expected a json object, got {}", other),
            }),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    /// Integer column, accepting the string form Postgres `numeric` values
    /// sometimes take.
    pub fn get_i64(&self, column: &str) -> Option<i64> {
        match self.get(column)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}
