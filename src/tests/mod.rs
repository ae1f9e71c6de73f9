pub mod kirimi_tests;
pub mod palette_tests;
pub mod raster_tests;
pub mod spec_doc_tests;

use std::path::PathBuf;

use image::{Rgba, RgbaImage};

// Test utilities
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

pub fn transparent_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Per-test scratch directory under the system temp dir.
pub fn test_output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sabake_tools_{}", name));
    std::fs::create_dir_all(&dir).expect("Failed to create test output dir");
    dir
}

/// Channel-wise comparison with a small tolerance for resampling rounding.
pub fn assert_color_close(actual: Rgba<u8>, expected: [u8; 4], tolerance: u8, context: &str) {
    for c in 0..4 {
        let diff = (actual.0[c] as i32 - expected[c] as i32).unsigned_abs();
        assert!(
            diff <= tolerance as u32,
            "{}: channel {} was {} but expected {} (tolerance {})",
            context,
            c,
            actual.0[c],
            expected[c],
            tolerance
        );
    }
}
