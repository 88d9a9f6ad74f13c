//! Generator choice, scalar band thickness, and shaping controls.

use serde::{Deserialize, Serialize};

use crate::error::{ParamsError, StackError};
use crate::validation::{validate_range, validate_thickness};

/// Default thickness of each scalar band in millimeters.
pub const DEFAULT_BAND_THICKNESS_MM: f64 = 1.0;

/// Valid twist range (inclusive).
pub const TWIST_RANGE: (f64, f64) = (0.0, 10.0);

/// Valid grind depth range in percent (inclusive).
pub const GRIND_RANGE: (f64, f64) = (0.0, 100.0);

/// Supported mosaic grid sizes.
pub const MOSAIC_SIZES: [u32; 3] = [1, 2, 3];

/// Base pattern generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Alternating white/black bands from the scalar thicknesses.
    SimpleLayers,
    /// Fixed 10x10 checkerboard.
    Checkerboard,
    /// Random gray stripes.
    Random,
    /// Zigzag ("W") warp of the effective stack.
    Chevron,
    /// Parabolic ("C") warp of the effective stack.
    Curve,
    /// Bands painted from an explicit layer stack.
    Custom,
}

impl PatternKind {
    /// Every kind, in preset order.
    pub const ALL: [PatternKind; 6] = [
        PatternKind::SimpleLayers,
        PatternKind::Checkerboard,
        PatternKind::Random,
        PatternKind::Chevron,
        PatternKind::Curve,
        PatternKind::Custom,
    ];

    /// Snake-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            PatternKind::SimpleLayers => "simple_layers",
            PatternKind::Checkerboard => "checkerboard",
            PatternKind::Random => "random",
            PatternKind::Chevron => "chevron",
            PatternKind::Curve => "curve",
            PatternKind::Custom => "custom",
        }
    }

    /// Parse a snake-case name. `"w"` and `"c"` alias chevron and curve.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" => return Some(PatternKind::Chevron),
            "c" => return Some(PatternKind::Curve),
            _ => {}
        }
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Whether a scalar thickness change should regenerate this pattern.
    pub const fn follows_band_thickness(self) -> bool {
        matches!(
            self,
            PatternKind::SimpleLayers | PatternKind::Chevron | PatternKind::Curve
        )
    }

    /// Whether this kind samples the effective stack.
    pub const fn uses_stack(self) -> bool {
        matches!(
            self,
            PatternKind::Chevron | PatternKind::Curve | PatternKind::Custom
        )
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two scalar thicknesses that define the implicit two-layer stack.
///
/// Both values are always finite and positive; deserialization runs the same
/// check as [`BandThickness::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBandThickness")]
pub struct BandThickness {
    white_mm: f64,
    black_mm: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBandThickness {
    #[serde(default = "default_band")]
    white_mm: f64,
    #[serde(default = "default_band")]
    black_mm: f64,
}

impl TryFrom<RawBandThickness> for BandThickness {
    type Error = StackError;

    fn try_from(raw: RawBandThickness) -> Result<Self, Self::Error> {
        Self::new(raw.white_mm, raw.black_mm)
    }
}

fn default_band() -> f64 {
    DEFAULT_BAND_THICKNESS_MM
}

impl Default for BandThickness {
    fn default() -> Self {
        Self {
            white_mm: DEFAULT_BAND_THICKNESS_MM,
            black_mm: DEFAULT_BAND_THICKNESS_MM,
        }
    }
}

impl BandThickness {
    /// Create validated band thicknesses.
    pub fn new(white_mm: f64, black_mm: f64) -> Result<Self, StackError> {
        Ok(Self {
            white_mm: validate_thickness(white_mm)?,
            black_mm: validate_thickness(black_mm)?,
        })
    }

    /// White band thickness in millimeters.
    pub fn white_mm(&self) -> f64 {
        self.white_mm
    }

    /// Black band thickness in millimeters.
    pub fn black_mm(&self) -> f64 {
        self.black_mm
    }
}

/// Shaping controls applied after generation.
///
/// The controls are independent; any in-range combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformParams {
    /// Twist strength in `[0, 10]`.
    #[serde(default)]
    pub twist_amount: f64,
    /// Grind depth percentage in `[0, 100]`.
    #[serde(default)]
    pub grind_depth: f64,
    /// Mosaic grid size, one of 1, 2, 3.
    #[serde(default = "default_mosaic")]
    pub mosaic_size: u32,
}

fn default_mosaic() -> u32 {
    1
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            twist_amount: 0.0,
            grind_depth: 0.0,
            mosaic_size: 1,
        }
    }
}

impl TransformParams {
    /// Set the twist strength.
    pub fn with_twist(mut self, twist_amount: f64) -> Self {
        self.twist_amount = twist_amount;
        self
    }

    /// Set the grind depth.
    pub fn with_grind(mut self, grind_depth: f64) -> Self {
        self.grind_depth = grind_depth;
        self
    }

    /// Set the mosaic size.
    pub fn with_mosaic(mut self, mosaic_size: u32) -> Self {
        self.mosaic_size = mosaic_size;
        self
    }

    /// True if every transform is the identity.
    pub fn is_identity(&self) -> bool {
        self.twist_amount == 0.0 && self.grind_depth == 0.0 && self.mosaic_size == 1
    }

    /// Check every control against its documented range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_range(
            "twist_amount",
            self.twist_amount,
            TWIST_RANGE.0,
            TWIST_RANGE.1,
            "0..=10",
        )?;
        validate_range(
            "grind_depth",
            self.grind_depth,
            GRIND_RANGE.0,
            GRIND_RANGE.1,
            "0..=100",
        )?;
        if !MOSAIC_SIZES.contains(&self.mosaic_size) {
            return Err(ParamsError::new(
                "mosaic_size",
                self.mosaic_size as f64,
                "one of 1, 2, 3",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TransformParams::default();
        assert!(params.is_identity());
        assert!(params.validate().is_ok());

        let bands = BandThickness::default();
        assert_eq!(bands.white_mm(), 1.0);
        assert_eq!(bands.black_mm(), 1.0);
    }

    #[test]
    fn test_validate_ranges() {
        let base = TransformParams::default();
        assert!(base.with_twist(10.0).with_grind(100.0).with_mosaic(3).validate().is_ok());

        let err = base.with_twist(10.5).validate().unwrap_err();
        assert_eq!(err.field, "twist_amount");
        assert_eq!(base.with_grind(-1.0).validate().unwrap_err().field, "grind_depth");
        assert_eq!(base.with_mosaic(4).validate().unwrap_err().field, "mosaic_size");
        assert_eq!(base.with_mosaic(0).validate().unwrap_err().field, "mosaic_size");
    }

    #[test]
    fn test_band_thickness_rejects_zero() {
        assert!(BandThickness::new(2.0, 1.0).is_ok());
        assert!(BandThickness::new(0.0, 1.0).is_err());
        assert!(BandThickness::new(1.0, -3.0).is_err());
    }

    #[test]
    fn test_band_thickness_deserialize_validates() {
        let bands: BandThickness = serde_json::from_str(r#"{"white_mm": 2.5}"#).unwrap();
        assert_eq!(bands, BandThickness::new(2.5, 1.0).unwrap());

        assert!(serde_json::from_str::<BandThickness>(r#"{"white_mm": -1.0, "black_mm": 1.0}"#).is_err());
        assert!(serde_json::from_str::<BandThickness>(r#"{"white_mm": 1.0, "black_mm": 0}"#).is_err());
        assert!(serde_json::from_str::<BandThickness>(r#"{"white": 1.0}"#).is_err());
    }

    #[test]
    fn test_pattern_kind_names() {
        for kind in PatternKind::ALL {
            assert_eq!(PatternKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(PatternKind::from_name("w"), Some(PatternKind::Chevron));
        assert_eq!(PatternKind::from_name("c"), Some(PatternKind::Curve));
        assert_eq!(PatternKind::from_name("spiral"), None);
    }

    #[test]
    fn test_live_update_kinds() {
        assert!(PatternKind::SimpleLayers.follows_band_thickness());
        assert!(PatternKind::Chevron.follows_band_thickness());
        assert!(PatternKind::Curve.follows_band_thickness());
        assert!(!PatternKind::Checkerboard.follows_band_thickness());
        assert!(!PatternKind::Random.follows_band_thickness());
        assert!(!PatternKind::Custom.follows_band_thickness());
    }

    #[test]
    fn test_params_serde_defaults() {
        let params: TransformParams = serde_json::from_str(r#"{"twist_amount": 2.5}"#).unwrap();
        assert_eq!(params, TransformParams::default().with_twist(2.5));
        assert!(serde_json::from_str::<TransformParams>(r#"{"spin": 1}"#).is_err());
    }
}
