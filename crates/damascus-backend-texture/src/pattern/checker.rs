//! Checkerboard pattern generator.

use super::Pattern2D;
use crate::color::Rgb;

/// Number of cells along each edge.
pub const CHECKER_CELLS: u32 = 10;

/// Checkerboard of white and black steel cells.
#[derive(Debug, Clone)]
pub struct CheckerPattern {
    /// Cell size in pixels.
    pub cell_size: u32,
    /// Color of cells where `(row + col)` is even.
    pub even: Rgb,
    /// Color of cells where `(row + col)` is odd.
    pub odd: Rgb,
}

impl CheckerPattern {
    /// A `CHECKER_CELLS x CHECKER_CELLS` board covering a `size` raster.
    pub fn new(size: u32) -> Self {
        Self::with_cell_size((size / CHECKER_CELLS).max(1))
    }

    /// A board with explicit cell size.
    pub fn with_cell_size(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
            even: Rgb::WHITE,
            odd: Rgb::BLACK,
        }
    }
}

impl Pattern2D for CheckerPattern {
    fn sample(&self, x: u32, y: u32) -> Rgb {
        let col = x / self.cell_size;
        let row = y / self.cell_size;

        if (col + row) % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_alternates() {
        let pattern = CheckerPattern::new(400);
        assert_eq!(pattern.cell_size, 40);

        assert_eq!(pattern.sample(0, 0), Rgb::WHITE);
        assert_eq!(pattern.sample(39, 39), Rgb::WHITE);
        assert_eq!(pattern.sample(40, 0), Rgb::BLACK);
        assert_eq!(pattern.sample(0, 40), Rgb::BLACK);
        assert_eq!(pattern.sample(40, 40), Rgb::WHITE);
        assert_eq!(pattern.sample(399, 0), Rgb::BLACK);
    }

    #[test]
    fn test_render_has_ten_cells_per_edge() {
        let raster = CheckerPattern::new(100).render(100, 100);
        let transitions = raster
            .row(0)
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count();
        assert_eq!(transitions, 9);
    }

    #[test]
    fn test_tiny_raster_uses_unit_cells() {
        let pattern = CheckerPattern::new(5);
        assert_eq!(pattern.cell_size, 1);
        assert_eq!(pattern.sample(1, 0), Rgb::BLACK);
    }
}
