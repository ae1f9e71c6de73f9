//! Procedural salmon-kirimi (sliced fish) sprite.
//!
//! The sprite is drawn at 2x resolution and Lanczos-downsampled to the
//! requested size. Proportions are tuned against the hand-drawn
//! `sakana_normal.png` (1155x1155), so everything scales off that base.

use image::{Rgba, RgbaImage};

use crate::raster;

pub const DEFAULT_SIZE: u32 = 1155;

const SALMON: Rgba<u8> = Rgba([255, 140, 105, 255]);
const FAT_WHITE: Rgba<u8> = Rgba([255, 245, 238, 255]);
const SKIN_GREY: Rgba<u8> = Rgba([180, 180, 180, 255]);

/// Render the kirimi sprite at `size` x `size`.
pub fn generate(size: u32) -> RgbaImage {
    let scale = size as f32 / DEFAULT_SIZE as f32;
    let scale2 = scale * 2.0;

    let large = size * 2;
    let mut img = RgbaImage::from_pixel(large, large, Rgba([0, 0, 0, 0]));

    let cx = size as f32;
    let cy = size as f32;
    // Half-axes of the body ellipse, already doubled for the 2x canvas.
    let body_width = 800.0 * scale;
    let body_height = 500.0 * scale;

    draw_body(&mut img, cx, cy, body_width, body_height, scale);
    draw_fat_stripes(&mut img, cx, cy, body_width, body_height, scale, scale2);
    draw_skin(&mut img, cx, cy, body_width, body_height, scale2);

    raster::downsample(&img, size, size)
}

/// Main flesh: an ellipse with the upper half stretched so the outline is
/// asymmetric like an actual cut, not a perfect oval.
fn draw_body(img: &mut RgbaImage, cx: f32, cy: f32, bw: f32, bh: f32, scale: f32) {
    let mut points = Vec::with_capacity(360);
    for deg in 0..360 {
        let angle = (deg as f32).to_radians();
        let x = cx + bw * angle.cos();
        let mut y = cy + bh * angle.sin();
        if angle.sin() < 0.0 {
            y += 60.0 * scale * angle.sin();
        }
        points.push((x, y));
    }
    raster::fill_polygon(img, &points, SALMON);
}

/// Seven wavy fat lines, widest in the middle of the cut.
fn draw_fat_stripes(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    bw: f32,
    bh: f32,
    scale: f32,
    scale2: f32,
) {
    for i in 0..7 {
        let stripe_y = cy - bh * 0.35 + i as f32 * (bh * 0.12);
        let stripe_width = bw * (0.8 - (i as f32 - 3.0).abs() * 0.08);
        let x1 = cx - stripe_width * 0.45;
        let x2 = cx + stripe_width * 0.45;

        let mut wave = Vec::new();
        let mut x = x1 as i32;
        while x < x2 as i32 {
            let wave_y = stripe_y + ((x as f32 - x1) * 0.03).sin() * 15.0 * scale;
            wave.push((x as f32, wave_y));
            x += 8;
        }

        if wave.len() > 1 {
            raster::stroke_polyline(img, &wave, (20.0 * scale2) as u32, FAT_WHITE);
        }
    }
}

/// Skin arc along the belly, slightly past the half circle on both ends.
fn draw_skin(img: &mut RgbaImage, cx: f32, cy: f32, bw: f32, bh: f32, scale2: f32) {
    let mut points = Vec::with_capacity(200);
    for deg in 170..370 {
        let angle = (deg as f32).to_radians();
        let x = cx + bw * angle.cos();
        let y = cy + bh * angle.sin() + 35.0 * scale2;
        points.push((x, y));
    }
    if points.len() > 1 {
        raster::stroke_polyline(img, &points, (40.0 * scale2) as u32, SKIN_GREY);
    }
}
