//! Anim command implementation

use std::process::ExitCode;

use crate::config::{AnimConfig, ConfigError};
use crate::output::{load_png, save_png, OutputError};
use crate::spritesheet::compose_bob_spritesheet;

use super::EXIT_SUCCESS;

/// Execute the anim command.
///
/// Failures are reported on stdout and never change the exit code, so build
/// scripts that chain asset steps keep going when the source sprite is missing.
pub fn run_anim(config: &AnimConfig, verbose: bool) -> ExitCode {
    match build_spritesheet(config, verbose) {
        Ok(()) => println!("Created {}", config.output.display()),
        Err(e) => println!("Error: {}", e),
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Report an unusable `coffee-assets.toml` the same way as any other composer failure.
pub fn report_config_error(e: &ConfigError) -> ExitCode {
    // Validation errors span several lines; keep the report on one
    let message = e.to_string().lines().map(str::trim).collect::<Vec<_>>().join(" ");
    println!("Error: {}", message);
    ExitCode::from(EXIT_SUCCESS)
}

fn build_spritesheet(config: &AnimConfig, verbose: bool) -> Result<(), OutputError> {
    let source = load_png(&config.input)?;
    if verbose {
        eprintln!(
            "Loaded {} ({}x{}), bob {}px",
            config.input.display(),
            source.width(),
            source.height(),
            config.bob
        );
    }

    let sheet = compose_bob_spritesheet(&source, config.bob);
    save_png(&sheet, &config.output)
}
