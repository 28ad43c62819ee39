//! CLI struct definitions and dispatch for the listpad binary.
//!
//! All clap-derived top-level types live here; the per-screen command surface
//! lives with the screens themselves in `screens::ScreenCli`.

use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

use crate::core::error::ListpadError;
use crate::screens::{self, ScreenCli};

#[derive(Parser, Debug)]
#[clap(
    name = "listpad",
    version = env!("CARGO_PKG_VERSION"),
    about = "Local-first list screens (shopping, books, food) over a shared CRUD core backed by SQLite."
)]
pub struct Cli {
    /// Data root holding the .listpad directory (defaults to the current
    /// working directory).
    #[clap(long, global = true)]
    pub root: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shopping list (title, category, price)
    Market(ScreenCli),
    /// Book list (title, author, category, year, description)
    Books(ScreenCli),
    /// Food list (title, author, category, year, description)
    Food(ScreenCli),
}

pub fn run(cli: Cli) -> Result<(), ListpadError> {
    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().map_err(ListpadError::IoError)?,
    };

    match cli.command {
        Command::Market(screen_cli) => {
            screens::run_screen_cli(&root, &screens::market::SCREEN, screen_cli)
        }
        Command::Books(screen_cli) => {
            screens::run_screen_cli(&root, &screens::books::SCREEN, screen_cli)
        }
        Command::Food(screen_cli) => {
            screens::run_screen_cli(&root, &screens::food::SCREEN, screen_cli)
        }
    }
}
