//! Twist: a center-anchored swirl whose angle grows with radius.

use std::f64::consts::PI;

use crate::raster::Raster;

/// Twist `raster` by `amount`.
///
/// Inverse mapping: for each output pixel at offset `(dx, dy)` from the
/// center, rotate the offset by `(distance / width) * amount * pi` and read
/// the source pixel there. Sources outside the raster leave the output pixel
/// at the zero background; they are neither clamped nor wrapped. `amount == 0`
/// is the identity.
pub fn twist(raster: &Raster, amount: f64) -> Raster {
    if amount == 0.0 || raster.width == 0 || raster.height == 0 {
        return raster.clone();
    }

    let width = raster.width as f64;
    let height = raster.height as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    Raster::from_rows(raster.width, raster.height, |y, row| {
        let dy = y as f64 - center_y;
        for (x, px) in row.iter_mut().enumerate() {
            let dx = x as f64 - center_x;
            let distance = (dx * dx + dy * dy).sqrt();
            let angle = (distance / width) * amount * PI;
            let (sin_a, cos_a) = angle.sin_cos();

            // Truncation toward zero.
            let src_x = (center_x + dx * cos_a - dy * sin_a) as i64;
            let src_y = (center_y + dx * sin_a + dy * cos_a) as i64;

            if src_x >= 0 && src_x < raster.width as i64 && src_y >= 0 && src_y < raster.height as i64 {
                *px = raster.get(src_x as u32, src_y as u32);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn gradient(size: u32) -> Raster {
        let mut raster = Raster::new_empty(size, size);
        for y in 0..size {
            for x in 0..size {
                raster.set(x, y, Rgb::new(x as u8, y as u8, 255));
            }
        }
        raster
    }

    #[test]
    fn test_zero_twist_is_identity() {
        let raster = gradient(16);
        assert_eq!(twist(&raster, 0.0), raster);
    }

    #[test]
    fn test_center_pixel_is_fixed() {
        let raster = gradient(16);
        let out = twist(&raster, 5.0);
        assert_eq!(out.get(8, 8), raster.get(8, 8));
    }

    #[test]
    fn test_out_of_bounds_sources_leave_background() {
        // A half-turn at the corner radius maps corner pixels well outside.
        let raster = Raster::new(64, 64, Rgb::WHITE);
        let out = twist(&raster, 10.0);
        assert!(out.data.iter().any(|p| *p == Rgb::BACKGROUND));
        assert!(out.data.iter().all(|p| *p == Rgb::BACKGROUND || *p == Rgb::WHITE));
    }

    #[test]
    fn test_twist_is_deterministic() {
        let raster = gradient(32);
        assert_eq!(twist(&raster, 2.5), twist(&raster, 2.5));
    }
}
