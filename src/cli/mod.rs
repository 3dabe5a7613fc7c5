//! Command-line interface implementation
//!
//! Parses arguments, loads `coffee-assets.toml` and dispatches to the
//! generator behind each subcommand.

mod anim;
mod street;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, MAX_SEED};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Generate sprite assets for the coffee shop game
#[derive(Parser)]
#[command(name = "coffee-assets")]
#[command(about = "Generate sprite assets for the coffee shop game")]
#[command(version)]
pub struct Cli {
    /// Config file (default: nearest coffee-assets.toml above the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print resolved settings and drawing statistics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the two-frame customer spritesheet from a single sprite
    Anim {
        /// Source sprite [default: src/assets/sprites/customer.png]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Spritesheet destination [default: src/assets/sprites/customer_spritesheet.png]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixels the second frame is pushed down [default: 1]
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=4096))]
        bob: Option<u32>,
    },

    /// Rasterize the isometric street tile
    Street {
        /// Tile destination [default: src/assets/sprites/street_tile.png]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the asphalt noise (random if omitted)
        #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_SEED))]
        seed: Option<u64>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let overrides = match &cli.command {
        Commands::Anim { input, output, bob } => CliOverrides {
            anim_input: input.clone(),
            anim_output: output.clone(),
            bob: *bob,
            ..Default::default()
        },
        Commands::Street { output, seed } => {
            CliOverrides { street_output: output.clone(), seed: *seed, ..Default::default() }
        }
    };

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        // The composer never fails the process, config errors included
        Err(e) if matches!(cli.command, Commands::Anim { .. }) => {
            return anim::report_config_error(&e);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    merge_cli_overrides(&mut config, &overrides);

    match cli.command {
        Commands::Anim { .. } => anim::run_anim(&config.anim, cli.verbose),
        Commands::Street { .. } => street::run_street(&config.street, cli.verbose),
    }
}
