//! Warped layer patterns: chevron ("W") and parabolic curve ("C").
//!
//! Both shift each column's depth by an x-dependent offset and then sample
//! the effective stack. Adjusted depths can be negative or run past the
//! stack; the periodic lookup resolves them, which keeps bands continuous.

use super::Pattern2D;
use crate::color::Rgb;
use crate::lookup::EffectiveStack;

/// Peak height of the chevron zigzag in pixels.
pub const CHEVRON_AMPLITUDE: f64 = 60.0;

/// Parabolic bend strength of the curve warp.
pub const CURVE_STRENGTH: f64 = 0.3;

/// Layers bent into a repeating V/zigzag.
#[derive(Debug, Clone)]
pub struct ChevronWarp {
    stack: EffectiveStack,
    /// Width of one rising (or falling) edge in pixels.
    pub wavelength: u32,
    /// Peak offset in pixels.
    pub amplitude: f64,
}

impl ChevronWarp {
    /// Chevron with wavelength `size / 4` and the default amplitude.
    pub fn new(stack: EffectiveStack, size: u32) -> Self {
        Self {
            stack,
            wavelength: size / 4,
            amplitude: CHEVRON_AMPLITUDE,
        }
    }

    /// Vertical offset for column `x`.
    pub fn offset(&self, x: u32) -> i64 {
        if self.wavelength == 0 {
            return 0;
        }
        let wavelength = self.wavelength as f64;
        let wave_pos = (x % (2 * self.wavelength)) as f64;
        let t = if wave_pos < wavelength {
            wave_pos / wavelength
        } else {
            (2.0 * wavelength - wave_pos) / wavelength
        };
        (t * self.amplitude).floor() as i64
    }
}

impl Pattern2D for ChevronWarp {
    fn sample(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(self.stack.color_at(y as i64 - self.offset(x)))
    }
}

/// Layers bent into a parabola centered on the raster.
#[derive(Debug, Clone)]
pub struct CurveWarp {
    stack: EffectiveStack,
    size: u32,
    /// Bend strength.
    pub strength: f64,
}

impl CurveWarp {
    /// Curve over a `size`-wide raster with the default strength.
    pub fn new(stack: EffectiveStack, size: u32) -> Self {
        Self {
            stack,
            size,
            strength: CURVE_STRENGTH,
        }
    }

    /// Vertical offset for column `x`.
    pub fn offset(&self, x: u32) -> i64 {
        if self.size == 0 {
            return 0;
        }
        let dx = x as i64 - (self.size / 2) as i64;
        ((dx * dx) as f64 * self.strength / self.size as f64).floor() as i64
    }
}

impl Pattern2D for CurveWarp {
    fn sample(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(self.stack.color_at(y as i64 + self.offset(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RasterConfig;
    use damascus_spec::BandThickness;

    fn default_stack() -> EffectiveStack {
        EffectiveStack::two_band(&BandThickness::default(), &RasterConfig::default())
    }

    #[test]
    fn test_chevron_offsets() {
        let warp = ChevronWarp::new(default_stack(), 400);
        assert_eq!(warp.wavelength, 100);
        assert_eq!(warp.offset(0), 0);
        assert_eq!(warp.offset(50), 30);
        assert_eq!(warp.offset(100), 60);
        assert_eq!(warp.offset(150), 30);
        assert_eq!(warp.offset(199), 0);
        assert_eq!(warp.offset(200), 0);
        assert_eq!(warp.offset(33), 19);
    }

    #[test]
    fn test_chevron_samples_shifted_depth() {
        let stack = default_stack();
        let warp = ChevronWarp::new(stack.clone(), 400);
        // Column 100 is shifted up by 60 rows: y=0 samples depth -60.
        assert_eq!(warp.sample(100, 0), Rgb::from(stack.color_at(-60)));
        assert_eq!(warp.sample(100, 65), Rgb::from(stack.color_at(5)));
    }

    #[test]
    fn test_curve_offsets() {
        let warp = CurveWarp::new(default_stack(), 400);
        assert_eq!(warp.offset(200), 0);
        assert_eq!(warp.offset(0), 30);
        assert_eq!(warp.offset(399), 29);
        assert_eq!(warp.offset(100), 7);
        assert_eq!(warp.offset(300), 7);
    }

    #[test]
    fn test_curve_is_symmetric_about_center() {
        let warp = CurveWarp::new(default_stack(), 400);
        for d in 0..200 {
            assert_eq!(warp.offset(200 - d), warp.offset(200 + d));
        }
    }

    #[test]
    fn test_warps_never_leave_gaps_near_edges() {
        let stack = default_stack();
        let chevron = ChevronWarp::new(stack.clone(), 400).render(400, 400);
        let curve = CurveWarp::new(stack, 400).render(400, 400);
        for raster in [chevron, curve] {
            assert!(raster.data.iter().all(|p| *p == Rgb::WHITE || *p == Rgb::BLACK));
        }
    }
}
