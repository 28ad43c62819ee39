//! Record shapes for the list screens.
//!
//! Every screen in listpad is the same single-table CRUD form over a different
//! field list, so the shape itself is data: a [`RecordSchema`] names the
//! backing table and its non-id columns, and the store and controller are
//! written once against it. The `id` column is implicit in every shape:
//! `INTEGER PRIMARY KEY AUTOINCREMENT`, store-assigned, monotonic, never
//! reused.

use rusqlite::Row;
use rusqlite::types::{ToSql, ToSqlOutput};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::core::error::ListpadError;

/// Stored when a numeric field's draft text fails integer parsing.
///
/// Form inputs are always text and the form layer does not validate before
/// submission, so "abc" in a price field is accepted and coerced to this
/// sentinel rather than rejected.
pub const NOT_A_NUMBER: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    fn sql_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "TEXT",
            FieldKind::Integer => "INTEGER",
        }
    }

    /// Coerce raw draft text into a typed value. Integer parsing failure is
    /// not an error; it yields [`NOT_A_NUMBER`].
    pub fn coerce(&self, raw: &str) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(raw.to_string()),
            FieldKind::Integer => {
                FieldValue::Integer(raw.trim().parse::<i64>().unwrap_or(NOT_A_NUMBER))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Static descriptor of one table shape: the collection name plus its
/// ordered non-id fields.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn create_table_sql(&self) -> String {
        let cols = self
            .fields
            .iter()
            .map(|f| format!("{} {} NOT NULL", f.name, f.kind.sql_type()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY AUTOINCREMENT, {})",
            self.collection, cols
        )
    }

    pub fn insert_sql(&self) -> String {
        let names = self
            .fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=self.fields.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {}({}) VALUES({})",
            self.collection, names, placeholders
        )
    }

    pub fn update_sql(&self) -> String {
        let assignments = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{} = ?{}", f.name, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            self.collection,
            assignments,
            self.fields.len() + 1
        )
    }

    /// Newest first: rows come back in descending id order.
    pub fn select_all_sql(&self) -> String {
        let names = self
            .fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "SELECT id, {} FROM {} ORDER BY id DESC",
            names, self.collection
        )
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE id = ?1", self.collection)
    }

    /// Coerce a full draft (one text entry per field, schema order) into
    /// typed values ready for binding.
    pub fn coerce_fields(&self, raw: &[String]) -> Result<Vec<FieldValue>, ListpadError> {
        if raw.len() != self.fields.len() {
            return Err(ListpadError::ValidationError(format!(
                "{} expects {} fields, got {}",
                self.collection,
                self.fields.len(),
                raw.len()
            )));
        }
        Ok(self
            .fields
            .iter()
            .zip(raw)
            .map(|(spec, text)| spec.kind.coerce(text))
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    /// Draft-side rendering: every field edits as text.
    pub fn to_draft_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.to_string(),
        }
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FieldValue::Text(s) => s.to_sql(),
            FieldValue::Integer(n) => n.to_sql(),
        }
    }
}

/// One persisted row: the store-assigned id plus the non-id values in schema
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub values: Vec<FieldValue>,
}

impl Record {
    pub fn from_row(schema: &RecordSchema, row: &Row) -> rusqlite::Result<Self> {
        let id: i64 = row.get(0)?;
        let mut values = Vec::with_capacity(schema.fields.len());
        for (i, spec) in schema.fields.iter().enumerate() {
            let value = match spec.kind {
                FieldKind::Text => FieldValue::Text(row.get(i + 1)?),
                FieldKind::Integer => FieldValue::Integer(row.get(i + 1)?),
            };
            values.push(value);
        }
        Ok(Record { id, values })
    }

    pub fn field(&self, schema: &RecordSchema, name: &str) -> Option<&FieldValue> {
        schema.field_index(name).and_then(|i| self.values.get(i))
    }

    pub fn to_json(&self, schema: &RecordSchema) -> JsonValue {
        let mut map = Map::new();
        map.insert("id".to_string(), JsonValue::from(self.id));
        for (spec, value) in schema.fields.iter().zip(&self.values) {
            map.insert(
                spec.name.to_string(),
                serde_json::to_value(value).unwrap_or(JsonValue::Null),
            );
        }
        JsonValue::Object(map)
    }
}
