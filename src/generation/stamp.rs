//! Filled-disk stamping with per-pixel bounds clipping

use image::{Rgb, RgbImage};

/// Stamp a filled grey disk centred at `(cx, cy)`
///
/// Every offset inside the bounding square of `radius` whose Euclidean
/// distance from the centre is at most `radius` is painted `(c, c, c)`.
/// Offsets falling outside the canvas are skipped, so the canvas is never
/// written out of bounds. Returns the number of pixels written.
pub fn stamp_disk(canvas: &mut RgbImage, cx: i64, cy: i64, radius: i64, intensity: u8) -> usize {
    let width = i64::from(canvas.width());
    let height = i64::from(canvas.height());
    let radius_squared = radius * radius;
    let color = Rgb([intensity, intensity, intensity]);
    let mut written = 0;

    for dx in -radius..=radius {
        for dy in -radius..=radius {
            let px = cx + dx;
            let py = cy + dy;
            if !(0..width).contains(&px) || !(0..height).contains(&py) {
                continue;
            }
            // Integer form of sqrt(dx² + dy²) <= radius
            if dx * dx + dy * dy <= radius_squared {
                canvas.put_pixel(px as u32, py as u32, color);
                written += 1;
            }
        }
    }

    written
}
