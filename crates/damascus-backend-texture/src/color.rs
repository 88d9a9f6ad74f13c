//! 8-bit RGB pixels.

use damascus_spec::LayerColor;

/// An 8-bit RGB pixel.
///
/// `Rgb::default()` is the zero background that transforms leave behind
/// where they have no source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Canonical white steel.
    pub const WHITE: Rgb = Rgb::from_layer(LayerColor::White);
    /// Canonical black steel.
    pub const BLACK: Rgb = Rgb::from_layer(LayerColor::Black);
    /// Zero background.
    pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

    /// Create a pixel from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray pixel.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Canonical pixel for a steel color.
    pub const fn from_layer(color: LayerColor) -> Self {
        let [r, g, b] = color.rgb();
        Self::new(r, g, b)
    }

    /// Components as an array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<LayerColor> for Rgb {
    fn from(color: LayerColor) -> Self {
        Rgb::from_layer(color)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}
