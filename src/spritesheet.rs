//! Spritesheet composition - lays out animation frames built from a single sprite

use image::{Rgba, RgbaImage};

/// Transparent color for freshly allocated canvases
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Default vertical offset of the second frame, in pixels.
pub const DEFAULT_BOB: u32 = 1;

/// Copy `src` into `dest` with its top-left corner at `(x, y)`.
///
/// Destination pixels are replaced outright, alpha included; nothing is blended.
/// Any part of `src` that falls outside `dest` is clipped.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use coffee_assets::spritesheet::paste;
///
/// let mut dest = RgbaImage::new(4, 4);
/// let src = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 128]));
/// paste(&mut dest, &src, 3, 3);
///
/// assert_eq!(*dest.get_pixel(3, 3), Rgba([255, 0, 0, 128]));
/// assert_eq!(*dest.get_pixel(2, 2), Rgba([0, 0, 0, 0]));
/// ```
pub fn paste(dest: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dest_w, dest_h) = (dest.width() as i64, dest.height() as i64);

    for sy in 0..src.height() {
        let dy = y + sy as i64;
        if dy < 0 || dy >= dest_h {
            continue;
        }
        for sx in 0..src.width() {
            let dx = x + sx as i64;
            if dx < 0 || dx >= dest_w {
                continue;
            }
            dest.put_pixel(dx as u32, dy as u32, *src.get_pixel(sx, sy));
        }
    }
}

/// Build a two-frame idle animation from one sprite.
///
/// The sheet is twice as wide as `source`. Frame 1 is the sprite unchanged;
/// frame 2 is the sprite pushed down by `bob` pixels, losing its bottom `bob`
/// rows to the canvas edge.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use coffee_assets::spritesheet::compose_bob_spritesheet;
///
/// let sprite = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));
/// let sheet = compose_bob_spritesheet(&sprite, 1);
///
/// assert_eq!(sheet.dimensions(), (6, 3));
/// assert_eq!(sheet.get_pixel(3, 0)[3], 0); // frame 2 starts one row lower
/// assert_eq!(*sheet.get_pixel(3, 1), Rgba([255, 0, 0, 255]));
/// ```
pub fn compose_bob_spritesheet(source: &RgbaImage, bob: u32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let mut sheet = RgbaImage::from_pixel(width * 2, height, TRANSPARENT);

    paste(&mut sheet, source, 0, 0);
    paste(&mut sheet, source, width as i64, bob as i64);

    sheet
}
