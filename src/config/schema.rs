//! Configuration schema types for `coffee-assets.toml`

use image::Rgba;
use serde::Deserialize;
use std::path::PathBuf;

use crate::color::{parse_color, to_hex};
use crate::spritesheet::DEFAULT_BOB;
use crate::tile::{TileStyle, BASE_COLOR, NOISE_COLOR, NOISE_TRIALS};

/// Upper bound for `street.noise_trials`
pub const MAX_NOISE_TRIALS: u32 = 100_000;
/// Upper bound for `anim.bob`
pub const MAX_BOB: u32 = 4096;
/// Largest seed a TOML integer can hold; `--seed` is capped to match
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Spritesheet composer settings (`[anim]`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimConfig {
    /// Source sprite
    #[serde(default = "default_anim_input")]
    pub input: PathBuf,
    /// Two-frame spritesheet destination
    #[serde(default = "default_anim_output")]
    pub output: PathBuf,
    /// Vertical offset of the second frame
    #[serde(default = "default_bob")]
    pub bob: u32,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self { input: default_anim_input(), output: default_anim_output(), bob: default_bob() }
    }
}

fn default_anim_input() -> PathBuf {
    PathBuf::from("src/assets/sprites/customer.png")
}

fn default_anim_output() -> PathBuf {
    PathBuf::from("src/assets/sprites/customer_spritesheet.png")
}

fn default_bob() -> u32 {
    DEFAULT_BOB
}

/// Street tile settings (`[street]`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreetConfig {
    /// Tile destination
    #[serde(default = "default_street_output")]
    pub output: PathBuf,
    /// Asphalt color, any CSS color string
    #[serde(default = "default_base_color")]
    pub base_color: String,
    /// Speck color, any CSS color string
    #[serde(default = "default_noise_color")]
    pub noise_color: String,
    /// Random samples thrown at the tile
    #[serde(default = "default_noise_trials")]
    pub noise_trials: u32,
    /// Fixed seed for reproducible tiles, 0..=MAX_SEED; clock-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for StreetConfig {
    fn default() -> Self {
        Self {
            output: default_street_output(),
            base_color: default_base_color(),
            noise_color: default_noise_color(),
            noise_trials: default_noise_trials(),
            seed: None,
        }
    }
}

fn default_street_output() -> PathBuf {
    PathBuf::from("src/assets/sprites/street_tile.png")
}

fn default_base_color() -> String {
    to_hex(BASE_COLOR)
}

fn default_noise_color() -> String {
    to_hex(NOISE_COLOR)
}

fn default_noise_trials() -> u32 {
    NOISE_TRIALS
}

impl StreetConfig {
    /// Resolve the configured colors into a [`TileStyle`].
    ///
    /// Unparseable colors fall back to the built-in palette; `validate` reports them.
    pub fn tile_style(&self) -> TileStyle {
        TileStyle {
            base_color: parse_or(&self.base_color, BASE_COLOR),
            noise_color: parse_or(&self.noise_color, NOISE_COLOR),
            noise_trials: self.noise_trials,
        }
    }
}

fn parse_or(s: &str, fallback: Rgba<u8>) -> Rgba<u8> {
    parse_color(s).unwrap_or(fallback)
}

/// Complete `coffee-assets.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    #[serde(default)]
    pub anim: AnimConfig,
    #[serde(default)]
    pub street: StreetConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "street.base_color")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "coffee-assets.toml: '{}' {}", self.field, self.message)
    }
}

impl AssetsConfig {
    /// Validate the configuration and return every problem found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.anim.bob > MAX_BOB {
            errors.push(ConfigValidationError {
                field: "anim.bob".to_string(),
                message: format!("must be at most {}", MAX_BOB),
            });
        }

        let colors = [
            ("street.base_color", &self.street.base_color),
            ("street.noise_color", &self.street.noise_color),
        ];
        for (field, value) in colors {
            if let Err(e) = parse_color(value) {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: format!("is not a valid color ({})", e),
                });
            }
        }

        if self.street.noise_trials > MAX_NOISE_TRIALS {
            errors.push(ConfigValidationError {
                field: "street.noise_trials".to_string(),
                message: format!("must be at most {}", MAX_NOISE_TRIALS),
            });
        }

        errors
    }
}
