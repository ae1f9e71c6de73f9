//! Rounded-corner UI panel sprites for Unity 9-slice use.
//!
//! Panels are drawn at 4x resolution and Lanczos-downsampled. A bordered
//! panel is two stacked rounded rects: the outer one in the border color,
//! the inner one inset by the border width with a correspondingly smaller
//! radius.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::raster;

const SUPERSAMPLE: u32 = 4;

/// The four 9-slice corner crops plus the full panel they came from.
pub struct NineSlice {
    pub full: RgbaImage,
    pub corners: [(String, RgbaImage); 4],
}

/// Slice insets for the Unity sprite importer, written as a YAML sidecar
/// next to the generated sprites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceBorder {
    pub sprite: String,
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl SliceBorder {
    pub fn uniform(sprite: &str, inset: u32) -> Self {
        Self {
            sprite: sprite.to_string(),
            left: inset,
            right: inset,
            top: inset,
            bottom: inset,
        }
    }
}

/// Render a `size` x `size` rounded panel.
pub fn generate_panel(
    size: u32,
    radius: u32,
    fill: Rgba<u8>,
    border: Rgba<u8>,
    border_width: u32,
) -> RgbaImage {
    let img = draw_hires(size, radius, fill, border, border_width);
    raster::downsample(&img, size, size)
}

/// Render the 9-slice sheet: a 3x`corner_size` panel plus its four corner
/// crops, named for where they land in the slice grid.
pub fn generate_nine_slice(
    corner_size: u32,
    radius: u32,
    fill: Rgba<u8>,
    border: Rgba<u8>,
    border_width: u32,
) -> NineSlice {
    let full_size = corner_size * 3;
    let hires = draw_hires(full_size, radius, fill, border, border_width);
    let full = raster::downsample(&hires, full_size, full_size);

    let c = corner_size;
    let far = full_size - c;
    let corners = [
        ("top_left", 0, 0),
        ("top_right", far, 0),
        ("bottom_left", 0, far),
        ("bottom_right", far, far),
    ]
    .map(|(name, x, y)| {
        let crop = image::imageops::crop_imm(&full, x, y, c, c).to_image();
        (name.to_string(), crop)
    });

    NineSlice { full, corners }
}

fn draw_hires(
    size: u32,
    radius: u32,
    fill: Rgba<u8>,
    border: Rgba<u8>,
    border_width: u32,
) -> RgbaImage {
    let large = size * SUPERSAMPLE;
    let large_radius = radius * SUPERSAMPLE;
    let large_border = border_width * SUPERSAMPLE;

    let mut img = RgbaImage::from_pixel(large, large, Rgba([0, 0, 0, 0]));

    if border_width > 0 {
        raster::fill_rounded_rect(&mut img, (0, 0, large - 1, large - 1), large_radius, border);
    }

    let inner_radius = large_radius.saturating_sub(large_border);
    raster::fill_rounded_rect(
        &mut img,
        (
            large_border,
            large_border,
            large - 1 - large_border,
            large - 1 - large_border,
        ),
        inner_radius,
        fill,
    );

    img
}
