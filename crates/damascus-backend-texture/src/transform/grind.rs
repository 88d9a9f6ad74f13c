//! Grind: expose a deeper slice by circularly shifting rows.

use crate::raster::Raster;

/// Fraction of the raster height reached at 100% grind depth.
pub const GRIND_REACH: f64 = 0.3;

/// Rows shifted for a grind depth on a raster of `height` rows.
pub fn grind_shift(depth_percent: f64, height: u32) -> u32 {
    let shift = ((depth_percent / 100.0) * height as f64 * GRIND_REACH).floor();
    if shift.is_finite() && shift > 0.0 {
        shift as u32
    } else {
        0
    }
}

/// Shift all rows down by `grind_shift(depth_percent, height)`, wrapping rows
/// that fall off the bottom back to the top. `depth_percent == 0` is the
/// identity.
pub fn grind(raster: &Raster, depth_percent: f64) -> Raster {
    let shift = grind_shift(depth_percent, raster.height);
    if shift == 0 || raster.height == 0 {
        return raster.clone();
    }
    let shift = (shift % raster.height) as usize;

    let mut result = raster.clone();
    result.data.rotate_right(shift * raster.width as usize);
    result
}
