//! coffee-assets - procedural sprite generation for the coffee shop game
//!
//! This library provides:
//! - A spritesheet composer that turns one character sprite into a two-frame idle bob
//! - An isometric street tile rasterizer with seeded asphalt noise
//! - PNG loading/saving and the optional `coffee-assets.toml` configuration

pub mod cli;
pub mod color;
pub mod config;
pub mod output;
pub mod rng;
pub mod spritesheet;
pub mod tile;
