//! The three list screens and the single CLI runner they share.
//!
//! Each screen is one [`ScreenSpec`]: a name, a database file, and a record
//! shape. The store, controller, and command surface exist once; every
//! screen is a schema instantiation.

pub mod books;
pub mod food;
pub mod market;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::controller::ListController;
use crate::core::db;
use crate::core::error::ListpadError;
use crate::core::record::{FieldValue, RecordSchema};
use crate::core::store::RecordStore;

/// One screen: name, backing database file, record shape.
#[derive(Debug, Clone, Copy)]
pub struct ScreenSpec {
    pub name: &'static str,
    pub db_name: &'static str,
    pub schema: &'static RecordSchema,
}

impl ScreenSpec {
    pub fn db_path(&self, root: &Path) -> PathBuf {
        db::data_dir(root).join(self.db_name)
    }

    /// Open this screen's store and controller. Schema initialization failure
    /// is a startup fault and propagates.
    pub fn open(&self, root: &Path) -> Result<ListController, ListpadError> {
        fs::create_dir_all(db::data_dir(root)).map_err(ListpadError::IoError)?;
        let store = RecordStore::open(&self.db_path(root), self.schema)?;
        ListController::open(store)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct ScreenCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: ScreenCommand,
}

#[derive(Subcommand, Debug)]
pub enum ScreenCommand {
    /// List all records, newest first.
    List,
    /// Create a record from field values.
    Add {
        /// Field value as NAME=VALUE; repeat per field. Unnamed fields stay
        /// empty, and empty or non-numeric values are stored as-is after
        /// coercion (no validation happens before submit).
        #[clap(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },
    /// Edit an existing record; unnamed fields keep their current value.
    Edit {
        #[clap(long)]
        id: i64,
        #[clap(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },
    /// Delete a record by id.
    Remove {
        #[clap(long)]
        id: i64,
    },
}

fn now_iso() -> String {
    // Epoch seconds with a 'Z' suffix; stable ordering and human readable.
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}Z", secs)
}

fn split_field_pair(raw: &str) -> Result<(&str, &str), ListpadError> {
    raw.split_once('=').ok_or_else(|| {
        ListpadError::ValidationError(format!("expected NAME=VALUE, got '{}'", raw))
    })
}

pub fn run_screen_cli(
    root: &Path,
    screen: &ScreenSpec,
    cli: ScreenCli,
) -> Result<(), ListpadError> {
    let mut controller = screen.open(root)?;

    let out = match &cli.command {
        ScreenCommand::List => {
            let items = controller
                .records()
                .iter()
                .map(|r| r.to_json(screen.schema))
                .collect::<Vec<_>>();
            serde_json::json!({
                "ts": now_iso(),
                "cmd": format!("{}.list", screen.name),
                "status": "ok",
                "root": root.to_string_lossy(),
                "items": items,
            })
        }
        ScreenCommand::Add { fields } => {
            controller.begin_create();
            for pair in fields {
                let (name, value) = split_field_pair(pair)?;
                controller.set_field(name, value)?;
            }
            let record = controller.submit()?;
            serde_json::json!({
                "ts": now_iso(),
                "cmd": format!("{}.add", screen.name),
                "status": "ok",
                "root": root.to_string_lossy(),
                "item": record.to_json(screen.schema),
            })
        }
        ScreenCommand::Edit { id, fields } => {
            controller.begin_edit(*id)?;
            for pair in fields {
                let (name, value) = split_field_pair(pair)?;
                controller.set_field(name, value)?;
            }
            let record = controller.submit()?;
            serde_json::json!({
                "ts": now_iso(),
                "cmd": format!("{}.edit", screen.name),
                "status": "ok",
                "root": root.to_string_lossy(),
                "item": record.to_json(screen.schema),
            })
        }
        ScreenCommand::Remove { id } => {
            controller.remove(*id)?;
            serde_json::json!({
                "ts": now_iso(),
                "cmd": format!("{}.remove", screen.name),
                "status": "ok",
                "root": root.to_string_lossy(),
                "id": id,
            })
        }
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out).unwrap());
        }
        OutputFormat::Text => match &cli.command {
            ScreenCommand::List => {
                let items = out.get("items").cloned().unwrap_or(JsonValue::Null);
                match items.as_array() {
                    Some(arr) if !arr.is_empty() => {
                        println!("{} ({} items):", screen.name.bold(), arr.len());
                        for v in arr {
                            println!("- {}", render_item_line(screen.schema, v));
                        }
                    }
                    _ => println!("No {} records.", screen.name),
                }
            }
            ScreenCommand::Add { .. } | ScreenCommand::Edit { .. } => {
                if let Some(item) = out.get("item") {
                    println!("{} {}", "saved".green(), render_item_line(screen.schema, item));
                }
            }
            ScreenCommand::Remove { id } => {
                println!("{} {} id {}", "removed".red(), screen.name, id);
            }
        },
    }

    Ok(())
}

fn render_item_line(schema: &RecordSchema, item: &JsonValue) -> String {
    let id = item.get("id").and_then(|v| v.as_i64()).unwrap_or(0);
    let rest = schema
        .fields
        .iter()
        .map(|f| {
            let value = item.get(f.name).cloned().unwrap_or(JsonValue::Null);
            let shown = match value {
                JsonValue::String(s) => s,
                other => other.to_string(),
            };
            format!("{}: {}", f.name, shown)
        })
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{} [{}]", id.to_string().bold(), rest)
}

/// Convenience for tests and embedding callers: coerce loose (name, value)
/// pairs for a schema, leaving unnamed fields empty.
pub fn coerce_named_fields(
    schema: &RecordSchema,
    pairs: &[(&str, &str)],
) -> Result<Vec<FieldValue>, ListpadError> {
    let mut raw = vec![String::new(); schema.fields.len()];
    for (name, value) in pairs {
        let index = schema.field_index(name).ok_or_else(|| {
            ListpadError::ValidationError(format!(
                "unknown field '{}' for {}",
                name, schema.collection
            ))
        })?;
        raw[index] = (*value).to_string();
    }
    schema.coerce_fields(&raw)
}
