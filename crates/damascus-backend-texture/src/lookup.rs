//! Depth-to-color lookup over the effective layer stack.
//!
//! Every generator that asks "which steel lies at depth `y`" goes through
//! [`EffectiveStack`]. It is resolved once per generation: the explicit stack
//! when one is active and non-empty, otherwise the implicit two-band stack
//! built from the scalar thicknesses. The stack is periodic, so any `y`,
//! including negative or overflowing values, maps to a color.

use damascus_spec::{BandThickness, Layer, LayerColor, LayerStack};

use crate::config::RasterConfig;

/// A layer stack rasterized to pixel bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectiveStack {
    /// Bands from an explicit stack, bottom to top.
    Explicit {
        /// Band colors in stacking order.
        colors: Vec<LayerColor>,
        /// Exclusive cumulative end row of each band within one period.
        ends: Vec<u64>,
    },
    /// Implicit white-then-black stack from the scalar thicknesses.
    TwoBand {
        white_px: u32,
        black_px: u32,
    },
}

impl EffectiveStack {
    /// Pick the explicit stack if present and non-empty, else the scalar
    /// two-band stack.
    pub fn resolve(stack: Option<&LayerStack>, bands: &BandThickness, config: &RasterConfig) -> Self {
        match stack {
            Some(stack) if !stack.is_empty() => Self::from_layers(stack.layers(), config),
            Some(_) => {
                tracing::warn!("empty layer stack, falling back to scalar band thickness");
                Self::two_band(bands, config)
            }
            None => Self::two_band(bands, config),
        }
    }

    /// Implicit two-band stack.
    pub fn two_band(bands: &BandThickness, config: &RasterConfig) -> Self {
        EffectiveStack::TwoBand {
            white_px: config.thickness_px(bands.white_mm()),
            black_px: config.thickness_px(bands.black_mm()),
        }
    }

    /// Rasterize an explicit list of layers.
    pub fn from_layers(layers: &[Layer], config: &RasterConfig) -> Self {
        let mut colors = Vec::with_capacity(layers.len());
        let mut ends = Vec::with_capacity(layers.len());
        let mut total: u64 = 0;
        for layer in layers {
            total = total.saturating_add(config.thickness_px(layer.thickness_mm()) as u64);
            colors.push(layer.color());
            ends.push(total);
        }
        EffectiveStack::Explicit { colors, ends }
    }

    /// Rows in one repeat of the stack.
    ///
    /// Computed in `u64`: two bands of up to `u32::MAX` rows each always fit.
    pub fn period_px(&self) -> u64 {
        match self {
            EffectiveStack::Explicit { ends, .. } => ends.last().copied().unwrap_or(0),
            EffectiveStack::TwoBand { white_px, black_px } => *white_px as u64 + *black_px as u64,
        }
    }

    /// Color at depth `y` in pixel rows.
    ///
    /// `y` is reduced with a floor-style modulo, so the result is periodic in
    /// `period_px()` for negative `y` too. A zero-period stack is black.
    pub fn color_at(&self, y: i64) -> LayerColor {
        let period = i64::try_from(self.period_px()).unwrap_or(i64::MAX);
        if period == 0 {
            return LayerColor::Black;
        }
        let pos = y.rem_euclid(period) as u64;
        match self {
            EffectiveStack::Explicit { colors, ends } => {
                let idx = ends.partition_point(|&end| end <= pos);
                colors[idx]
            }
            EffectiveStack::TwoBand { white_px, .. } => {
                if pos < *white_px as u64 {
                    LayerColor::White
                } else {
                    LayerColor::Black
                }
            }
        }
    }

    /// One period of `(rows, color)` bands in stacking order.
    pub fn bands(&self) -> Vec<(u32, LayerColor)> {
        match self {
            EffectiveStack::Explicit { colors, ends } => {
                let mut start = 0;
                colors
                    .iter()
                    .zip(ends)
                    .map(|(&color, &end)| {
                        let rows = u32::try_from(end - start).unwrap_or(u32::MAX);
                        start = end;
                        (rows, color)
                    })
                    .collect()
            }
            EffectiveStack::TwoBand { white_px, black_px } => {
                vec![(*white_px, LayerColor::White), (*black_px, LayerColor::Black)]
            }
        }
    }
}
