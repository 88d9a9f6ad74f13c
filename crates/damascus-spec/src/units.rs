//! Display-only unit conversion.
//!
//! The model is always denominated in millimeters; imperial values exist only
//! for presentation.

use serde::{Deserialize, Serialize};

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Convert millimeters to inches.
#[inline]
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Convert inches to millimeters.
#[inline]
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Unit system used when presenting thicknesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Millimeters.
    #[default]
    Metric,
    /// Inches.
    Imperial,
}

impl UnitSystem {
    /// Short unit suffix.
    pub const fn suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "mm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Convert a millimeter value into this unit system.
    pub fn from_mm(self, mm: f64) -> f64 {
        match self {
            UnitSystem::Metric => mm,
            UnitSystem::Imperial => mm_to_inches(mm),
        }
    }

    /// Format a millimeter thickness for display, e.g. `"1.00 mm"` or
    /// `"0.039 in"`.
    pub fn format_thickness(self, mm: f64) -> String {
        match self {
            UnitSystem::Metric => format!("{:.2} mm", mm),
            UnitSystem::Imperial => format!("{:.3} in", mm_to_inches(mm)),
        }
    }

    /// Parse `"mm"`/`"metric"` or `"in"`/`"inches"`/`"imperial"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mm" | "metric" => Some(UnitSystem::Metric),
            "in" | "inches" | "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}
