//! CLI entry point for splitting an image into 128×128 PNG tiles

use spacetiles::io::cli::SplitCli;
use spacetiles::io::configuration::{SPLIT_USAGE, USAGE_EXIT_STATUS};
use std::process::ExitCode;

// Allow print for the usage message, which goes to stdout
#[allow(clippy::print_stdout)]
fn main() -> spacetiles::Result<ExitCode> {
    let Ok(cli) = SplitCli::try_parse_args(std::env::args_os()) else {
        println!("{SPLIT_USAGE}");
        return Ok(ExitCode::from(USAGE_EXIT_STATUS));
    };

    cli.run()?;
    Ok(ExitCode::SUCCESS)
}
