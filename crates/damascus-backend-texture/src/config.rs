//! Raster size and physical scale.

use crate::pattern::GenerateError;

/// Default raster edge length in pixels.
pub const DEFAULT_RASTER_SIZE: u32 = 400;

/// Default pixels per millimeter of billet thickness.
pub const DEFAULT_PIXELS_PER_MM: f64 = 10.0;

/// Largest accepted raster edge. Generators allocate several `size * size`
/// buffers, so this stays bounded.
pub const MAX_RASTER_SIZE: u32 = 4096;

/// Raster geometry shared by every generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    /// Edge length of the square raster in pixels.
    pub size: u32,
    /// Pixels per millimeter of layer thickness.
    pub pixels_per_mm: f64,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_RASTER_SIZE,
            pixels_per_mm: DEFAULT_PIXELS_PER_MM,
        }
    }
}

impl RasterConfig {
    /// Create a config with the default scale.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Row count for a physical thickness: `max(1, round(mm * pixels_per_mm))`.
    ///
    /// Never zero, so band traversal always advances.
    pub fn thickness_px(&self, thickness_mm: f64) -> u32 {
        let px = (thickness_mm * self.pixels_per_mm).round();
        if px.is_finite() && px >= 1.0 {
            px.min(u32::MAX as f64) as u32
        } else {
            1
        }
    }

    /// Check the size and scale are usable.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.size == 0 || self.size > MAX_RASTER_SIZE {
            return Err(GenerateError::InvalidParameter(format!(
                "raster size must be in 1..={}, got {}",
                MAX_RASTER_SIZE, self.size
            )));
        }
        if !(self.pixels_per_mm.is_finite() && self.pixels_per_mm > 0.0) {
            return Err(GenerateError::InvalidParameter(format!(
                "pixels_per_mm must be positive, got {}",
                self.pixels_per_mm
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_px_rounds_and_never_zero() {
        let config = RasterConfig::default();
        assert_eq!(config.thickness_px(1.0), 10);
        assert_eq!(config.thickness_px(0.8), 8);
        assert_eq!(config.thickness_px(1.46), 15);
        assert_eq!(config.thickness_px(0.01), 1);
        assert_eq!(config.thickness_px(0.0), 1);
    }

    #[test]
    fn test_validate() {
        assert!(RasterConfig::default().validate().is_ok());
        assert!(RasterConfig::with_size(0).validate().is_err());
        assert!(RasterConfig::with_size(MAX_RASTER_SIZE + 1).validate().is_err());
        let bad_scale = RasterConfig {
            pixels_per_mm: 0.0,
            ..RasterConfig::default()
        };
        assert!(bad_scale.validate().is_err());
    }
}
