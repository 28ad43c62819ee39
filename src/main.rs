use anyhow::Result;
use clap::Parser;

use listpad::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)?;
    Ok(())
}
