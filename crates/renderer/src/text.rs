//! Bitmap text drawing for titles, tick values, and colorbar labels.
//!
//! Uses the compiled-in 8x8 glyph tables from `font8x8` with integer
//! scaling, drawn directly onto the RGBA canvas. Characters outside the
//! basic set are skipped.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Unscaled glyph cell edge in pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Pixel width of `text` at the given integer scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Pixel height of one text line at the given integer scale.
pub fn text_height(scale: u32) -> u32 {
    GLYPH_SIZE * scale
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw_text(img: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let step = (GLYPH_SIZE * scale) as i32;
    for (ci, ch) in text.chars().enumerate() {
        let glyph = match BASIC_FONTS.get(ch) {
            Some(g) => g,
            None => continue,
        };
        let origin_x = x + ci as i32 * step;
        for (gy, row) in glyph.iter().enumerate() {
            for gx in 0..8 {
                if row & (1 << gx) != 0 {
                    fill_block(
                        img,
                        color,
                        origin_x + gx as i32 * scale as i32,
                        y + gy as i32 * scale as i32,
                        scale,
                    );
                }
            }
        }
    }
}

/// Draw `text` rotated 90° counter-clockwise, reading bottom to top.
/// `(x, y)` is the bottom-left corner of the first character.
pub fn draw_text_vertical(
    img: &mut RgbaImage,
    color: Rgba<u8>,
    x: i32,
    y: i32,
    scale: u32,
    text: &str,
) {
    let step = (GLYPH_SIZE * scale) as i32;
    for (ci, ch) in text.chars().enumerate() {
        let glyph = match BASIC_FONTS.get(ch) {
            Some(g) => g,
            None => continue,
        };
        let origin_y = y - ci as i32 * step;
        for (gy, row) in glyph.iter().enumerate() {
            for gx in 0..8 {
                if row & (1 << gx) != 0 {
                    // Rotated: glyph x runs upward, glyph y runs rightward
                    fill_block(
                        img,
                        color,
                        x + gy as i32 * scale as i32,
                        origin_y - (gx as i32 + 1) * scale as i32,
                        scale,
                    );
                }
            }
        }
    }
}

fn fill_block(img: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, scale: u32) {
    for dy in 0..scale as i32 {
        for dx in 0..scale as i32 {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
