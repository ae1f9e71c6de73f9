//! 2D raster primitives shared by the sprite generators.
//!
//! Everything here draws at whatever resolution the caller supplies; the
//! generators render at 2x or 4x and then call `downsample` for Lanczos
//! antialiasing.

use image::{Rgba, RgbaImage};

/// Fill a closed polygon using even-odd scanline crossing.
/// Fewer than 3 vertices is a no-op.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
    let y_start = (min_y.floor().max(0.0)) as u32;
    let y_end = (max_y.ceil().min(img.height() as f32 - 1.0)).max(0.0) as u32;

    let mut crossings: Vec<f32> = Vec::new();
    for y in y_start..=y_end {
        let scan_y = y as f32 + 0.5;
        crossings.clear();

        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            if (y0 <= scan_y) == (y1 <= scan_y) {
                continue; // edge does not cross this scanline
            }
            let t = (scan_y - y0) / (y1 - y0);
            crossings.push(x0 + t * (x1 - x0));
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in crossings.chunks(2) {
            if let [xa, xb] = pair {
                let px_start = xa.round().max(0.0) as u32;
                let px_end = xb.round().min(img.width() as f32) as i64;
                for x in px_start as i64..px_end {
                    img.put_pixel(x as u32, y, color);
                }
            }
        }
    }
}

/// Stroke an open polyline with round caps and joins, `width` pixels thick.
/// Fewer than 2 points is a no-op.
pub fn stroke_polyline(img: &mut RgbaImage, points: &[(f32, f32)], width: u32, color: Rgba<u8>) {
    if points.len() < 2 || width == 0 {
        return;
    }

    let radius = width as f32 / 2.0;
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt();
        // Stamp discs densely enough that adjacent stamps overlap.
        let steps = (len / (radius * 0.5).max(1.0)).ceil().max(1.0) as u32;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            fill_disc(img, x0 + dx * t, y0 + dy * t, radius, color);
        }
    }
}

fn fill_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let x_min = ((cx - radius).floor().max(0.0)) as u32;
    let y_min = ((cy - radius).floor().max(0.0)) as u32;
    let x_max = ((cx + radius).ceil().min(img.width() as f32 - 1.0)).max(0.0) as u32;
    let y_max = ((cy + radius).ceil().min(img.height() as f32 - 1.0)).max(0.0) as u32;

    let r2 = radius * radius;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Filled axis-aligned rounded rectangle over the inclusive pixel bounds
/// `(x0, y0)..=(x1, y1)`. A radius of 0 gives a plain rectangle.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    bounds: (u32, u32, u32, u32),
    radius: u32,
    color: Rgba<u8>,
) {
    let (x0, y0, x1, y1) = bounds;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let r = radius.min((x1 - x0) / 2).min((y1 - y0) / 2) as f32;
    let r2 = r * r;

    let x_end = x1.min(img.width().saturating_sub(1));
    let y_end = y1.min(img.height().saturating_sub(1));

    for y in y0..=y_end {
        for x in x0..=x_end {
            let fx = x as f32;
            let fy = y as f32;
            // Distance test only applies inside the four corner squares.
            let cdx = if fx < x0 as f32 + r {
                x0 as f32 + r - fx
            } else if fx > x1 as f32 - r {
                fx - (x1 as f32 - r)
            } else {
                0.0
            };
            let cdy = if fy < y0 as f32 + r {
                y0 as f32 + r - fy
            } else if fy > y1 as f32 - r {
                fy - (y1 as f32 - r)
            } else {
                0.0
            };
            if cdx * cdx + cdy * cdy <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Lanczos3 resize, the downscale half of the supersample antialiasing.
pub fn downsample(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    image::imageops::resize(img, width, height, image::imageops::FilterType::Lanczos3)
}
