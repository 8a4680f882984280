//! CLI entry point for the starfield background generator

use clap::Parser;
use spacetiles::io::cli::GenerateCli;

fn main() -> spacetiles::Result<()> {
    let cli = GenerateCli::parse();
    cli.run()?;
    Ok(())
}
