use crate::kirimi;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_size() {
        let img = kirimi::generate(231);

        assert_eq!(img.width(), 231);
        assert_eq!(img.height(), 231);
    }

    #[test]
    fn test_center_is_flesh_colored() {
        let img = kirimi::generate(231);
        let center = img.get_pixel(115, 115);

        assert_eq!(center.0[3], 255, "Center of the cut should be opaque");
        assert!(
            center.0[0] >= 200,
            "Center should be salmon or fat-white, both with a hot red channel (was {})",
            center.0[0]
        );
    }

    #[test]
    fn test_corners_are_transparent() {
        let img = kirimi::generate(231);

        for (x, y) in [(0, 0), (230, 0), (0, 230), (230, 230)] {
            assert_eq!(
                img.get_pixel(x, y).0[3],
                0,
                "Corner ({}, {}) should be outside the fillet",
                x,
                y
            );
        }
    }

    #[test]
    fn test_body_is_wider_than_tall() {
        let img = kirimi::generate(231);
        let cx = 115;
        let cy = 115;

        // The body ellipse spans 800 wide vs 500 tall, so a point past the
        // vertical extent must be empty while the same offset horizontally
        // is still flesh.
        let offset = 70;
        assert!(img.get_pixel(cx + offset, cy).0[3] > 0, "Horizontal extent too small");
        assert_eq!(img.get_pixel(cx, cy + offset + 20).0[3], 0, "Vertical extent too large");
    }

    #[test]
    fn test_default_size_matches_base_sprite() {
        assert_eq!(kirimi::DEFAULT_SIZE, 1155);
    }
}
