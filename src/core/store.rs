//! Record Store: durable persistence of one record shape in one table.
//!
//! A store owns its connection for the life of the owning screen and releases
//! it when dropped; there is no shared handle and no reinitialization path.

use rusqlite::Connection;
use std::path::Path;

use crate::core::db;
use crate::core::error::ListpadError;
use crate::core::record::{FieldValue, Record, RecordSchema};

pub struct RecordStore {
    conn: Connection,
    schema: &'static RecordSchema,
}

impl RecordStore {
    pub fn open(db_path: &Path, schema: &'static RecordSchema) -> Result<Self, ListpadError> {
        let conn = db::db_connect(&db_path.to_string_lossy())?;
        Ok(RecordStore { conn, schema })
    }

    pub fn open_in_memory(schema: &'static RecordSchema) -> Result<Self, ListpadError> {
        let conn = Connection::open_in_memory()?;
        Ok(RecordStore { conn, schema })
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// Idempotently create the backing table. Safe to call on every startup;
    /// failure is a startup fault for the caller, never silently swallowed.
    pub fn ensure_schema(&self) -> Result<(), ListpadError> {
        self.conn
            .execute(&self.schema.create_table_sql(), [])
            .map_err(|e| {
                ListpadError::DatabaseInitializationError(format!(
                    "{}: {}",
                    self.schema.collection, e
                ))
            })?;
        Ok(())
    }

    /// All records, most-recently-created first (descending id).
    pub fn load_all(&self) -> Result<Vec<Record>, ListpadError> {
        let mut stmt = self.conn.prepare(&self.schema.select_all_sql())?;
        let rows = stmt.query_map([], |row| Record::from_row(self.schema, row))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Persist a new record and return it with the store-assigned id.
    pub fn insert(&self, values: &[FieldValue]) -> Result<Record, ListpadError> {
        self.check_arity(values)?;
        let params: Vec<&dyn rusqlite::types::ToSql> =
            values.iter().map(|v| v as &dyn rusqlite::types::ToSql).collect();
        self.conn.execute(&self.schema.insert_sql(), params.as_slice())?;
        Ok(Record {
            id: self.conn.last_insert_rowid(),
            values: values.to_vec(),
        })
    }

    /// Overwrite all non-id fields of an existing record. A missing id is the
    /// defined failure [`ListpadError::NotFound`].
    pub fn update(&self, id: i64, values: &[FieldValue]) -> Result<(), ListpadError> {
        self.check_arity(values)?;
        let mut params: Vec<&dyn rusqlite::types::ToSql> =
            values.iter().map(|v| v as &dyn rusqlite::types::ToSql).collect();
        params.push(&id);
        let changed = self
            .conn
            .execute(&self.schema.update_sql(), params.as_slice())?;
        if changed == 0 {
            return Err(ListpadError::NotFound(format!(
                "{} id {}",
                self.schema.collection, id
            )));
        }
        Ok(())
    }

    /// Remove a record. Absent ids are a no-op.
    pub fn delete(&self, id: i64) -> Result<(), ListpadError> {
        self.conn.execute(&self.schema.delete_sql(), [id])?;
        Ok(())
    }

    fn check_arity(&self, values: &[FieldValue]) -> Result<(), ListpadError> {
        if values.len() != self.schema.fields.len() {
            return Err(ListpadError::ValidationError(format!(
                "{} expects {} fields, got {}",
                self.schema.collection,
                self.schema.fields.len(),
                values.len()
            )));
        }
        Ok(())
    }
}
