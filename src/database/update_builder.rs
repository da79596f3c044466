use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

use super::manager::DatabaseError;
use super::MutationOutcome;

/// Marks whether a field was present in a request at all.
///
/// `Missing` leaves the column untouched; `Value` sets it, including setting
/// it to NULL when `T` is an `Option` and the caller sent an explicit null.
/// This is what lets a partial update clear a field to empty/zero instead of
/// silently skipping every falsy value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Missing => None,
            Patch::Value(v) => Some(v),
        }
    }
}

// Absent fields fall back to `Missing` via #[serde(default)]; anything that
// deserializes, null included, is a present value.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Value)
    }
}

/// Builds a conditional UPDATE from a sparse field set.
///
/// Only fields present in the patch become assignments; if at least one is
/// present, the configured touch column is set to the current timestamp in
/// the same statement. An entirely empty field set issues no statement at
/// all and reports [`MutationOutcome::Noop`] instead of attempting a
/// malformed `UPDATE t SET WHERE ...`.
pub struct UpdateBuilder {
    table: String,
    assignments: Vec<String>,
    params: Vec<Value>,
    touch_column: Option<String>,
}

impl UpdateBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            assignments: vec![],
            params: vec![],
            touch_column: None,
        }
    }

    /// Add `column = ?` when the field is present in the patch.
    pub fn set<T: Serialize>(mut self, column: &str, field: &Patch<T>) -> Self {
        if let Patch::Value(value) = field {
            self.assignments.push(format!("\"{}\" = ?", column));
            self.params
                .push(serde_json::to_value(value).unwrap_or(Value::Null));
        }
        self
    }

    /// Column stamped with the current time whenever any field was set.
    pub fn touch(mut self, column: &str) -> Self {
        self.touch_column = Some(column.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    fn sql(&self, key_column: &str) -> String {
        let mut assignments = self.assignments.join(", ");
        if let Some(touch) = &self.touch_column {
            assignments.push_str(&format!(", \"{}\" = datetime('now')", touch));
        }
        format!(
            "UPDATE \"{}\" SET {} WHERE \"{}\" = ?",
            self.table, assignments, key_column
        )
    }

    /// Run the statement, scoped to `key_column = id`.
    pub async fn apply<'e, E>(
        self,
        executor: E,
        key_column: &str,
        id: i64,
    ) -> Result<MutationOutcome, DatabaseError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        if self.assignments.is_empty() {
            return Ok(MutationOutcome::Noop);
        }

        let sql = self.sql(key_column);
        let mut query = sqlx::query(&sql);
        for value in self.params.iter() {
            query = bind_value(query, value);
        }
        let result = query.bind(id).execute(executor).await?;
        Ok(MutationOutcome::from_keyed(result.rows_affected()))
    }
}

fn bind_value<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q Value,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        Value::Null => {
            let none: Option<String> = None;
            query.bind(none)
        }
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(n.to_string())
            }
        }
        Value::String(s) => query.bind(s.as_str()),
        // Arrays/objects never come out of a Patch; store as JSON text
        other => query.bind(other.to_string()),
    }
}
