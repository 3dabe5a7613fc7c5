//! coffee-assets - Command-line generator for the coffee shop game's sprites

use std::process::ExitCode;

use coffee_assets::cli;

fn main() -> ExitCode {
    cli::run()
}
