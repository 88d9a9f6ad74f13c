//! Flat band fills: simple alternating layers and custom stacks.

use damascus_spec::{BandThickness, LayerColor};

use crate::color::Rgb;
use crate::config::RasterConfig;
use crate::lookup::EffectiveStack;
use crate::raster::Raster;

/// Paints an effective stack as horizontal bands, top to bottom, repeating
/// the stack until the raster is full.
#[derive(Debug, Clone)]
pub struct BandFill {
    stack: EffectiveStack,
}

impl BandFill {
    /// Fill from any effective stack.
    pub fn new(stack: EffectiveStack) -> Self {
        Self { stack }
    }

    /// Fill from the scalar white/black thicknesses.
    pub fn two_band(bands: &BandThickness, config: &RasterConfig) -> Self {
        Self::new(EffectiveStack::two_band(bands, config))
    }

    /// Render a `width x height` raster.
    pub fn render(&self, width: u32, height: u32) -> Raster {
        fill_bands(width, height, &self.stack.bands())
    }
}

/// Paint `bands` (row count, color) top to bottom, cycling until `height`
/// rows are filled. The last band is truncated at the bottom edge.
pub fn fill_bands(width: u32, height: u32, bands: &[(u32, LayerColor)]) -> Raster {
    let mut raster = Raster::new(width, height, Rgb::BLACK);
    if bands.iter().all(|&(rows, _)| rows == 0) {
        return raster;
    }

    let mut y = 0u32;
    for &(rows, color) in bands.iter().cycle() {
        if y >= height {
            break;
        }
        let end = y.saturating_add(rows);
        raster.fill_rows(y, end, Rgb::from(color));
        y = end;
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_band_fill_bands() {
        let config = RasterConfig::with_size(30);
        let bands = BandThickness::new(2.0, 1.0).unwrap();
        let raster = BandFill::two_band(&bands, &config).render(30, 30);

        assert_eq!(raster.get(0, 0), Rgb::WHITE);
        assert_eq!(raster.get(0, 5), Rgb::WHITE);
        assert_eq!(raster.get(0, 19), Rgb::WHITE);
        assert_eq!(raster.get(0, 20), Rgb::BLACK);
        assert_eq!(raster.get(29, 15), Rgb::WHITE);
        assert_eq!(raster.get(29, 29), Rgb::BLACK);
    }

    #[test]
    fn test_fill_truncates_last_band() {
        let raster = fill_bands(2, 5, &[(3, LayerColor::White), (3, LayerColor::Black)]);
        assert_eq!(raster.get(0, 2), Rgb::WHITE);
        assert_eq!(raster.get(0, 3), Rgb::BLACK);
        assert_eq!(raster.get(1, 4), Rgb::BLACK);
    }

    #[test]
    fn test_zero_rows_do_not_loop_forever() {
        let raster = fill_bands(2, 2, &[(0, LayerColor::White)]);
        assert_eq!(raster.get(0, 0), Rgb::BLACK);
        let raster = fill_bands(2, 2, &[]);
        assert_eq!(raster.get(1, 1), Rgb::BLACK);
    }
}
