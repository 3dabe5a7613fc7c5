//! Configuration loading and discovery for `coffee-assets.toml`

use super::schema::AssetsConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up from the working directory
pub const CONFIG_FILE_NAME: &str = "coffee-assets.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse coffee-assets.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Values given on the command line. These win over the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub anim_input: Option<PathBuf>,
    pub anim_output: Option<PathBuf>,
    pub bob: Option<u32>,
    pub street_output: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Find `coffee-assets.toml` by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find `coffee-assets.toml` by walking up from `start`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the config is discovered with
/// [`find_config`]; if none is found the built-in defaults are returned.
///
/// Relative paths in a loaded file (defaults included) are resolved against the
/// directory holding that file, so the result does not depend on where in the
/// project the command was started.
pub fn load_config(path: Option<&Path>) -> Result<AssetsConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(AssetsConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<AssetsConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: AssetsConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(root) = project_root(path) {
        config.anim.input = resolve_path(root, &config.anim.input);
        config.anim.output = resolve_path(root, &config.anim.output);
        config.street.output = resolve_path(root, &config.street.output);
    }

    Ok(config)
}

/// Get the project root directory from a config file path.
///
/// Returns the parent directory of the `coffee-assets.toml` file.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// Merge CLI overrides into a configuration.
///
/// Paths given on the command line stay relative to the working directory.
pub fn merge_cli_overrides(config: &mut AssetsConfig, overrides: &CliOverrides) {
    if let Some(ref input) = overrides.anim_input {
        config.anim.input = input.clone();
    }
    if let Some(ref output) = overrides.anim_output {
        config.anim.output = output.clone();
    }
    if let Some(bob) = overrides.bob {
        config.anim.bob = bob;
    }
    if let Some(ref output) = overrides.street_output {
        config.street.output = output.clone();
    }
    if let Some(seed) = overrides.seed {
        config.street.seed = Some(seed);
    }
}
