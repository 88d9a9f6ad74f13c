//! The two steels of a billet.

use serde::{Deserialize, Serialize};

/// Color of a forge-welded layer.
///
/// Serialized as `"white"` / `"black"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerColor {
    /// Bright, nickel-rich steel.
    White,
    /// Dark, carbon-rich steel.
    Black,
}

impl LayerColor {
    /// Canonical RGB triple used when rasterizing this layer.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            LayerColor::White => [200, 200, 200],
            LayerColor::Black => [50, 50, 50],
        }
    }

    /// Hex color string for external viewers (e.g. `"#c8c8c8"`).
    pub fn hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// The other steel.
    pub const fn opposite(self) -> Self {
        match self {
            LayerColor::White => LayerColor::Black,
            LayerColor::Black => LayerColor::White,
        }
    }

    /// Lowercase persisted name.
    pub const fn as_str(self) -> &'static str {
        match self {
            LayerColor::White => "white",
            LayerColor::Black => "black",
        }
    }

    /// Parse a persisted name. Only the exact lowercase names are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "white" => Some(LayerColor::White),
            "black" => Some(LayerColor::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for LayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rgb() {
        assert_eq!(LayerColor::White.rgb(), [200, 200, 200]);
        assert_eq!(LayerColor::Black.rgb(), [50, 50, 50]);
    }

    #[test]
    fn test_hex() {
        assert_eq!(LayerColor::White.hex(), "#c8c8c8");
        assert_eq!(LayerColor::Black.hex(), "#323232");
    }

    #[test]
    fn test_names_round_trip() {
        for color in [LayerColor::White, LayerColor::Black] {
            assert_eq!(LayerColor::from_name(color.as_str()), Some(color));
        }
        assert_eq!(LayerColor::from_name("White"), None);
        assert_eq!(LayerColor::from_name("red"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LayerColor::Black).unwrap();
        assert_eq!(json, "\"black\"");
    }
}
