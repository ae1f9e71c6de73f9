use crate::palette::{colorize, rainbow_palette};
use crate::tests::{solid_image, transparent_image};

#[cfg(test)]
mod tests {
    use super::*;

    const RED_TARGET: [u8; 3] = [230, 50, 50];

    #[test]
    fn test_rainbow_palette_has_six_colors() {
        let palette = rainbow_palette();
        assert_eq!(palette.len(), 6);

        let names: Vec<&str> = palette.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["red", "blue", "yellow", "green", "purple", "pink"]);
        assert_eq!(palette[0].rgb, RED_TARGET);
    }

    #[test]
    fn test_transparent_pixels_are_skipped() {
        let mut img = transparent_image(4, 4);
        colorize(&mut img, RED_TARGET);

        assert!(
            img.pixels().all(|p| p.0 == [0, 0, 0, 0]),
            "Fully transparent pixels must not be recolored"
        );
    }

    #[test]
    fn test_black_pixels_keep_brightness_floor() {
        let mut img = solid_image(2, 2, [0, 0, 0, 255]);
        colorize(&mut img, RED_TARGET);

        // Zero luminance leaves only the 0.3 boost: 230*0.3 = 69, 50*0.3 = 15.
        assert_eq!(img.get_pixel(0, 0).0, [69, 15, 15, 255]);
    }

    #[test]
    fn test_mid_grey_scales_target_channels() {
        let mut img = solid_image(1, 1, [128, 128, 128, 255]);
        colorize(&mut img, RED_TARGET);

        // luminance ~0.502: 230*0.502 = 115 plus the 69 boost, 50*0.502 = 25
        // plus the 15 boost.
        assert_eq!(img.get_pixel(0, 0).0, [184, 40, 40, 255]);
    }

    #[test]
    fn test_bright_pixels_saturate() {
        let mut img = solid_image(1, 1, [255, 255, 255, 255]);
        colorize(&mut img, RED_TARGET);

        assert_eq!(
            img.get_pixel(0, 0).0[0],
            255,
            "Boosted white should clamp at 255 on the dominant channel"
        );
    }

    #[test]
    fn test_shading_order_is_preserved() {
        let mut dark = solid_image(1, 1, [60, 60, 60, 255]);
        let mut light = solid_image(1, 1, [180, 180, 180, 255]);
        colorize(&mut dark, RED_TARGET);
        colorize(&mut light, RED_TARGET);

        assert!(
            dark.get_pixel(0, 0).0[0] < light.get_pixel(0, 0).0[0],
            "Darker input must stay darker after recoloring"
        );
    }

    #[test]
    fn test_alpha_is_preserved() {
        let mut img = solid_image(1, 1, [100, 100, 100, 137]);
        colorize(&mut img, RED_TARGET);

        assert_eq!(img.get_pixel(0, 0).0[3], 137);
    }
}
