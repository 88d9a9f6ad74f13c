//! Mosaic stacking: tile a shrunken copy of the pattern into an n x n grid.

use crate::raster::Raster;

/// Tile `raster` into an `n x n` mosaic.
///
/// The pattern is area-resampled to `(w / n) x (h / n)` and tiled; cells where
/// `(row + col)` is odd get the tile rotated by 180 degrees. Any remainder
/// strip on the right or bottom edge stays at the zero background. `n <= 1`
/// is the identity.
pub fn mosaic(raster: &Raster, n: u32) -> Raster {
    if n <= 1 {
        return raster.clone();
    }
    let tile_w = raster.width / n;
    let tile_h = raster.height / n;
    if tile_w == 0 || tile_h == 0 {
        tracing::debug!(n, width = raster.width, "raster smaller than mosaic grid, skipping");
        return raster.clone();
    }

    let tile = raster.resample_area(tile_w, tile_h);
    let rotated = tile.rotated_180();

    let mut result = Raster::new_empty(raster.width, raster.height);
    for row in 0..n {
        for col in 0..n {
            let src = if (row + col) % 2 == 1 { &rotated } else { &tile };
            result.blit(src, col * tile_w, row * tile_h);
        }
    }
    result
}
