//! Luminance-preserving recoloring for the knife sprite variants.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Fraction of the target color added back on top of the luminance-scaled
/// value so dark shading never collapses to near-black.
const BRIGHTNESS_BOOST: f32 = 0.3;

/// One named tint in the rainbow palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub rgb: [u8; 3],
}

/// The six rainbow knife tints.
pub fn rainbow_palette() -> Vec<PaletteEntry> {
    [
        ("red", [230, 50, 50]),
        ("blue", [50, 130, 230]),
        ("yellow", [230, 200, 50]),
        ("green", [50, 200, 80]),
        ("purple", [150, 50, 200]),
        ("pink", [230, 100, 180]),
    ]
    .into_iter()
    .map(|(name, rgb)| PaletteEntry {
        name: name.to_string(),
        rgb,
    })
    .collect()
}

/// Recolor `img` toward `target`, keeping the original shading.
///
/// Each pixel's Rec.601 luminance scales the target channels, then a fixed
/// brightness floor is added so shadows keep the hue instead of going
/// black. Fully transparent pixels are left untouched and alpha is always
/// preserved.
pub fn colorize(img: &mut RgbaImage, target: [u8; 3]) {
    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }

        let luminance =
            (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114) / 255.0;

        for c in 0..3 {
            let scaled = (target[c] as f32 * luminance).trunc();
            let boosted = (scaled + target[c] as f32 * BRIGHTNESS_BOOST) as u32;
            pixel.0[c] = boosted.min(255) as u8;
        }
    }
}
