//! listpad: local-first list screens over a shared CRUD core.
//!
//! Three list screens — shopping items, books, food items — are each one
//! SQLite table and the same four operations: initialize schema, load all
//! rows, upsert a row, delete a row. The pattern is implemented once:
//!
//! - [`core::store::RecordStore`]: durable persistence of one record shape in
//!   one table, parameterized by a [`core::record::RecordSchema`].
//! - [`core::controller::ListController`]: in-memory mirror of the row set
//!   plus the draft/dialog state machine the edit form follows.
//! - [`screens`]: the three schema instantiations and one shared CLI runner.
//!
//! # State and consistency
//!
//! `load_all` reports rows newest first (descending id), and the mirror keeps
//! that order for its whole life: new records enter at the front, edits
//! replace in place, deletes drop the matching entry. Mirror updates are
//! confirmed — a store mutation must succeed before the mirror changes — and
//! `refresh` re-reads the store for callers that want to reconcile.
//!
//! # Example
//!
//! ```no_run
//! use listpad::core::store::RecordStore;
//! use listpad::core::controller::ListController;
//! use listpad::screens::market;
//!
//! # fn main() -> Result<(), listpad::core::error::ListpadError> {
//! let store = RecordStore::open("market.db".as_ref(), &market::SCHEMA)?;
//! let mut screen = ListController::open(store)?;
//! screen.begin_create();
//! screen.set_field("title", "Milk")?;
//! screen.set_field("category", "Dairy")?;
//! screen.set_field("price", "25000")?;
//! let record = screen.submit()?;
//! assert_eq!(screen.records()[0].id, record.id);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod screens;
