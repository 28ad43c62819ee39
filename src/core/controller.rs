//! List Controller: the bridge between draft submission and the Record Store.
//!
//! The controller keeps an in-memory mirror of the store's row set so the
//! presentation layer never re-queries on render. The mirror is updated with
//! a CONFIRMED policy: a store mutation must return Ok before the mirror is
//! touched, so a failed mutation can never leave the mirror diverged from
//! durable state. Callers wanting a full reconciliation use [`ListController::refresh`].
//!
//! Ordering is consistent end to end: `load_all` reports descending id and a
//! freshly inserted record enters the mirror at the front, so the mirror and
//! a fresh load always agree on where the newest record sits.

use crate::core::error::ListpadError;
use crate::core::record::{Record, RecordSchema};
use crate::core::store::RecordStore;

/// Transient staging copy of a record's fields, all represented as text
/// (form inputs are textual). `editing_target` is the id being modified, or
/// `None` when the draft will become a new record on submit.
#[derive(Debug, Clone)]
pub struct Draft {
    fields: Vec<String>,
    editing_target: Option<i64>,
}

impl Draft {
    fn blank(schema: &RecordSchema) -> Self {
        Draft {
            fields: vec![String::new(); schema.fields.len()],
            editing_target: None,
        }
    }

    fn from_record(schema: &RecordSchema, record: &Record) -> Self {
        Draft {
            fields: record.values.iter().map(|v| v.to_draft_text()).collect(),
            editing_target: Some(record.id),
        }
    }

    pub fn field(&self, schema: &RecordSchema, name: &str) -> Option<&str> {
        schema
            .field_index(name)
            .and_then(|i| self.fields.get(i))
            .map(|s| s.as_str())
    }

    pub fn editing_target(&self) -> Option<i64> {
        self.editing_target
    }
}

/// Draft/dialog state machine: `Closed`, or `Open` with the draft's editing
/// target marking create-vs-edit.
#[derive(Debug, Clone)]
enum Dialog {
    Closed,
    Open(Draft),
}

pub struct ListController {
    store: RecordStore,
    mirror: Vec<Record>,
    dialog: Dialog,
}

impl ListController {
    /// Ensure the schema exists and load the initial mirror. Both steps
    /// propagate failure as a startup fault; after startup only [`Self::refresh`]
    /// re-reads the store.
    pub fn open(store: RecordStore) -> Result<Self, ListpadError> {
        store.ensure_schema()?;
        let mut controller = ListController {
            store,
            mirror: Vec::new(),
            dialog: Dialog::Closed,
        };
        controller.refresh()?;
        Ok(controller)
    }

    /// Rebuild the mirror from the store. This is the reconciliation path;
    /// on failure the mirror keeps its previous value.
    pub fn refresh(&mut self) -> Result<(), ListpadError> {
        let records = self.store.load_all()?;
        self.mirror = records;
        Ok(())
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.store.schema()
    }

    /// Current mirror sequence, newest first.
    pub fn records(&self) -> &[Record] {
        &self.mirror
    }

    pub fn dialog_open(&self) -> bool {
        matches!(self.dialog, Dialog::Open(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.dialog {
            Dialog::Open(draft) => Some(draft),
            Dialog::Closed => None,
        }
    }

    /// Open a blank draft for a new record.
    pub fn begin_create(&mut self) {
        self.dialog = Dialog::Open(Draft::blank(self.store.schema()));
    }

    /// Open a draft seeded from an existing record's fields, rendered as text.
    pub fn begin_edit(&mut self, id: i64) -> Result<(), ListpadError> {
        let record = self
            .mirror
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| {
                ListpadError::NotFound(format!("{} id {}", self.store.schema().collection, id))
            })?;
        self.dialog = Dialog::Open(Draft::from_record(self.store.schema(), record));
        Ok(())
    }

    /// Field-by-field replacement, one call per keystroke or per flag.
    pub fn set_field(&mut self, name: &str, text: &str) -> Result<(), ListpadError> {
        let index = self.store.schema().field_index(name).ok_or_else(|| {
            ListpadError::ValidationError(format!(
                "unknown field '{}' for {}",
                name,
                self.store.schema().collection
            ))
        })?;
        match &mut self.dialog {
            Dialog::Open(draft) => {
                draft.fields[index] = text.to_string();
                Ok(())
            }
            Dialog::Closed => Err(ListpadError::ValidationError(
                "no draft open; call begin_create or begin_edit first".to_string(),
            )),
        }
    }

    /// Discard the draft and close the dialog.
    pub fn cancel(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Coerce the draft and commit it: update in place when an editing target
    /// is set, insert a new record otherwise. The dialog closes as soon as the
    /// draft is taken, so a second submit finds it closed and is rejected —
    /// that is the duplicate-submission guard. The mirror is only mutated
    /// after the store call succeeds.
    pub fn submit(&mut self) -> Result<Record, ListpadError> {
        let draft = match std::mem::replace(&mut self.dialog, Dialog::Closed) {
            Dialog::Open(draft) => draft,
            Dialog::Closed => {
                return Err(ListpadError::ValidationError(
                    "no draft open; call begin_create or begin_edit first".to_string(),
                ));
            }
        };
        let values = self.store.schema().coerce_fields(&draft.fields)?;

        match draft.editing_target {
            Some(id) => {
                self.store.update(id, &values)?;
                let record = Record { id, values };
                if let Some(entry) = self.mirror.iter_mut().find(|r| r.id == id) {
                    *entry = record.clone();
                }
                Ok(record)
            }
            None => {
                let record = self.store.insert(&values)?;
                // Front of the mirror matches load_all's descending-id order.
                self.mirror.insert(0, record.clone());
                Ok(record)
            }
        }
    }

    /// Delete by id, then drop the matching mirror entry. Absent ids are a
    /// no-op in both places.
    pub fn remove(&mut self, id: i64) -> Result<(), ListpadError> {
        self.store.delete(id)?;
        self.mirror.retain(|r| r.id != id);
        Ok(())
    }
}
