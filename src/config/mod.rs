//! Configuration for the asset generators
//!
//! Provides types and loading for the optional `coffee-assets.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, merge_cli_overrides, project_root, resolve_path, CliOverrides, ConfigError,
    CONFIG_FILE_NAME,
};
pub use schema::*;
