//! Street command implementation

use std::process::ExitCode;

use crate::color::to_hex;
use crate::config::StreetConfig;
use crate::output::save_png;
use crate::rng::{clock_seed, Rng};
use crate::tile::render_street_tile_counted;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the street command
pub fn run_street(config: &StreetConfig, verbose: bool) -> ExitCode {
    let style = config.tile_style();
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut rng = Rng::new(seed);

    let (tile, hits) = render_street_tile_counted(&style, &mut rng);
    if verbose {
        eprintln!(
            "Street tile {}x{}: base {}, noise {}, seed {}, {}/{} noise trials landed",
            tile.width(),
            tile.height(),
            to_hex(style.base_color),
            to_hex(style.noise_color),
            seed,
            hits,
            style.noise_trials
        );
    }

    if let Err(e) = save_png(&tile, &config.output) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Created {}", config.output.display());
    ExitCode::from(EXIT_SUCCESS)
}
