//! Isometric street tile rasterization
//!
//! A tile is a diamond inscribed in a 64x32 canvas: a flat asphalt fill with
//! lighter specks scattered over it. Everything outside the diamond stays
//! transparent so tiles can be laid edge to edge on an isometric grid.

use image::{Rgba, RgbaImage};

use crate::rng::Rng;
use crate::spritesheet::TRANSPARENT;

/// Tile canvas width in pixels
pub const TILE_WIDTH: u32 = 64;
/// Tile canvas height in pixels
pub const TILE_HEIGHT: u32 = 32;

/// Asphalt, dark grey
pub const BASE_COLOR: Rgba<u8> = Rgba([80, 80, 80, 255]);
/// Specks, lighter grey
pub const NOISE_COLOR: Rgba<u8> = Rgba([100, 100, 100, 255]);
/// Number of noise samples drawn per tile
pub const NOISE_TRIALS: u32 = 300;
/// Noise keeps inside this fraction of the diamond so the edge stays clean
pub const NOISE_SCALE: f64 = 0.95;

/// Colors and noise density for a street tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    pub base_color: Rgba<u8>,
    pub noise_color: Rgba<u8>,
    pub noise_trials: u32,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self { base_color: BASE_COLOR, noise_color: NOISE_COLOR, noise_trials: NOISE_TRIALS }
    }
}

/// Diamond membership test for a `width` x `height` canvas.
///
/// True when `|x - cx|/cx + |y - cy|/cy <= scale`, with the center at
/// `(width/2, height/2)`. A scale of 1.0 touches the middle of every canvas edge.
///
/// # Examples
///
/// ```
/// use coffee_assets::tile::in_diamond;
///
/// assert!(in_diamond(32, 16, 64, 32, 1.0));
/// assert!(in_diamond(0, 16, 64, 32, 1.0));
/// assert!(!in_diamond(0, 0, 64, 32, 1.0));
/// assert!(!in_diamond(0, 16, 64, 32, 0.95));
/// ```
pub fn in_diamond(x: u32, y: u32, width: u32, height: u32, scale: f64) -> bool {
    let cx = (width / 2) as f64;
    let cy = (height / 2) as f64;
    if cx == 0.0 || cy == 0.0 {
        return false;
    }
    (x as f64 - cx).abs() / cx + (y as f64 - cy).abs() / cy <= scale
}

/// Paint every pixel inside the full diamond with `color`.
pub fn fill_diamond(canvas: &mut RgbaImage, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        for x in 0..width {
            if in_diamond(x, y, width, height, 1.0) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Throw `trials` random points at the canvas and paint the ones that land
/// inside the shrunken diamond.
///
/// Points that miss are dropped and repeated hits simply repaint the same
/// pixel, so the number of distinct specks is at most `trials`.
///
/// Returns the number of trials that landed (hits, not distinct pixels).
pub fn scatter_noise(canvas: &mut RgbaImage, color: Rgba<u8>, trials: u32, rng: &mut Rng) -> u32 {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    let mut hits = 0;
    for _ in 0..trials {
        let x = rng.range_u32(0, width - 1);
        let y = rng.range_u32(0, height - 1);
        if in_diamond(x, y, width, height, NOISE_SCALE) {
            canvas.put_pixel(x, y, color);
            hits += 1;
        }
    }
    hits
}

/// Render a complete street tile.
///
/// # Examples
///
/// ```
/// use coffee_assets::rng::Rng;
/// use coffee_assets::tile::{render_street_tile, TileStyle, BASE_COLOR};
///
/// let tile = render_street_tile(&TileStyle::default(), &mut Rng::new(7));
/// assert_eq!(tile.dimensions(), (64, 32));
/// assert_eq!(tile.get_pixel(0, 0)[3], 0);
/// assert_eq!(*tile.get_pixel(0, 16), BASE_COLOR);
/// ```
pub fn render_street_tile(style: &TileStyle, rng: &mut Rng) -> RgbaImage {
    render_street_tile_counted(style, rng).0
}

/// Same as [`render_street_tile`], also returning how many noise trials landed.
pub fn render_street_tile_counted(style: &TileStyle, rng: &mut Rng) -> (RgbaImage, u32) {
    let mut canvas = RgbaImage::from_pixel(TILE_WIDTH, TILE_HEIGHT, TRANSPARENT);
    fill_diamond(&mut canvas, style.base_color);
    let hits = scatter_noise(&mut canvas, style.noise_color, style.noise_trials, rng);
    // TODO: curb highlight along the two top edges once the strip width and color are agreed on
    (canvas, hits)
}
