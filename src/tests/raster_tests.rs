use image::Rgba;

use crate::raster;
use crate::tests::transparent_image;

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_polygon_fill_covers_interior() {
        let mut img = transparent_image(16, 16);
        let triangle = [(2.0, 2.0), (13.0, 2.0), (2.0, 13.0)];

        raster::fill_polygon(&mut img, &triangle, RED);

        assert_eq!(*img.get_pixel(4, 4), RED, "Interior point should be filled");
        assert_eq!(
            img.get_pixel(14, 14).0[3],
            0,
            "Point outside the triangle should stay transparent"
        );
    }

    #[test]
    fn test_polygon_with_too_few_points_is_noop() {
        let mut img = transparent_image(8, 8);
        raster::fill_polygon(&mut img, &[(1.0, 1.0), (6.0, 6.0)], RED);

        assert!(
            img.pixels().all(|p| p.0[3] == 0),
            "A two-point polygon should not draw anything"
        );
    }

    #[test]
    fn test_polygon_clips_to_image_bounds() {
        let mut img = transparent_image(8, 8);
        // Square much larger than the canvas.
        let square = [(-10.0, -10.0), (20.0, -10.0), (20.0, 20.0), (-10.0, 20.0)];

        raster::fill_polygon(&mut img, &square, RED);

        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(7, 7), RED);
    }

    #[test]
    fn test_polyline_stroke_has_thickness() {
        let mut img = transparent_image(16, 16);
        raster::stroke_polyline(&mut img, &[(2.0, 8.0), (14.0, 8.0)], 4, RED);

        assert_eq!(*img.get_pixel(8, 8), RED, "Line center should be drawn");
        assert_eq!(*img.get_pixel(8, 7), RED, "Stroke should extend above the path");
        assert_eq!(*img.get_pixel(8, 9), RED, "Stroke should extend below the path");
        assert_eq!(
            img.get_pixel(8, 14).0[3],
            0,
            "Pixels far from the path should stay transparent"
        );
    }

    #[test]
    fn test_polyline_with_single_point_is_noop() {
        let mut img = transparent_image(8, 8);
        raster::stroke_polyline(&mut img, &[(4.0, 4.0)], 4, RED);

        assert!(img.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_rounded_rect_with_zero_radius_fills_corners() {
        let mut img = transparent_image(16, 16);
        raster::fill_rounded_rect(&mut img, (0, 0, 15, 15), 0, RED);

        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(15, 15), RED);
        assert_eq!(*img.get_pixel(8, 8), RED);
    }

    #[test]
    fn test_rounded_rect_leaves_corners_empty() {
        let mut img = transparent_image(16, 16);
        raster::fill_rounded_rect(&mut img, (0, 0, 15, 15), 8, RED);

        assert_eq!(img.get_pixel(0, 0).0[3], 0, "Corner should be rounded away");
        assert_eq!(img.get_pixel(15, 0).0[3], 0);
        assert_eq!(*img.get_pixel(8, 8), RED, "Center should be filled");
        assert_eq!(*img.get_pixel(8, 0), RED, "Edge midpoints should be filled");
    }

    #[test]
    fn test_downsample_dimensions() {
        let img = transparent_image(64, 64);
        let small = raster::downsample(&img, 16, 16);

        assert_eq!(small.width(), 16);
        assert_eq!(small.height(), 16);
    }

    #[test]
    fn test_downsample_preserves_uniform_color() {
        let img = crate::tests::solid_image(32, 32, [10, 200, 30, 255]);
        let small = raster::downsample(&img, 8, 8);

        crate::tests::assert_color_close(
            *small.get_pixel(4, 4),
            [10, 200, 30, 255],
            2,
            "Uniform color should survive resampling",
        );
    }
}
