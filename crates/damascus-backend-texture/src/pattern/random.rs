//! Random gray banding.

use std::ops::Range;

use crate::color::Rgb;
use crate::raster::Raster;
use crate::rng::DeterministicRng;

/// Number of stripes drawn.
pub const STRIPE_COUNT: u32 = 30;

/// Stripe height range in pixels (half-open).
pub const STRIPE_HEIGHT: Range<u32> = 5..30;

/// Stripe gray intensity range (half-open).
pub const STRIPE_INTENSITY: Range<u8> = 30..220;

/// Full-width gray stripes at random depths over a zero background.
///
/// Later stripes overwrite earlier ones where they overlap.
#[derive(Debug, Clone)]
pub struct RandomStripes {
    pub count: u32,
    pub height: Range<u32>,
    pub intensity: Range<u8>,
}

impl Default for RandomStripes {
    fn default() -> Self {
        Self {
            count: STRIPE_COUNT,
            height: STRIPE_HEIGHT,
            intensity: STRIPE_INTENSITY,
        }
    }
}

impl RandomStripes {
    /// Render a `size x size` raster.
    pub fn render(&self, size: u32, rng: &mut DeterministicRng) -> Raster {
        let mut raster = Raster::new_empty(size, size);
        if size == 0 {
            return raster;
        }
        for _ in 0..self.count {
            let y_start = rng.gen_range(0..size);
            let height = rng.gen_range(self.height.clone());
            let gray = rng.gen_range(self.intensity.clone());
            raster.fill_rows(y_start, y_start.saturating_add(height), Rgb::gray(gray));
        }
        raster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_stripes_are_reproducible() {
        let stripes = RandomStripes::default();
        let a = stripes.render(100, &mut DeterministicRng::new(9));
        let b = stripes.render(100, &mut DeterministicRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rows_are_uniform_gray_in_range() {
        let raster = RandomStripes::default().render(120, &mut DeterministicRng::new(3));
        for row in raster.rows() {
            let first = row[0];
            assert!(row.iter().all(|p| *p == first), "stripes span full width");
            assert_eq!(first.r, first.g);
            assert_eq!(first.g, first.b);
            assert!(first == Rgb::BACKGROUND || (30..220).contains(&first.r));
        }
    }

    #[test]
    fn test_single_row_raster_is_always_striped() {
        let stripes = RandomStripes {
            count: 2,
            height: 29..30,
            intensity: 100..101,
        };
        let raster = stripes.render(1, &mut DeterministicRng::new(0));
        assert_eq!(raster.get(0, 0), Rgb::gray(100));
    }
}
