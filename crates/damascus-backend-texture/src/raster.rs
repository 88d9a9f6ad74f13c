//! Raster buffers.

use rayon::prelude::*;

use crate::color::Rgb;

/// A 2D RGB raster, row-major.
///
/// Every pipeline stage takes a raster by reference and returns a new one;
/// buffers are never shared between stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data, row-major.
    pub data: Vec<Rgb>,
}

impl Raster {
    /// Create a raster filled with a color.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a raster filled with the zero background.
    pub fn new_empty(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgb::BACKGROUND)
    }

    /// Build a raster from 8-bit RGB bytes.
    ///
    /// Returns `None` if `bytes` is not exactly `width * height * 3` long.
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width as usize * height as usize * 3 {
            return None;
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster by computing each row in parallel.
    ///
    /// `fill_row` receives the row index and that row's pixels, initialized to
    /// the zero background. Rows are disjoint, so no synchronization is needed.
    pub fn from_rows<F>(width: u32, height: u32, fill_row: F) -> Self
    where
        F: Fn(u32, &mut [Rgb]) + Sync,
    {
        let mut raster = Self::new_empty(width, height);
        if width == 0 {
            return raster;
        }
        raster
            .data
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| fill_row(y as u32, row));
        raster
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Borrow one row.
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    /// Paint rows `[y0, y1)` with a color. The range is clipped to the raster.
    pub fn fill_rows(&mut self, y0: u32, y1: u32, color: Rgb) {
        let y1 = y1.min(self.height);
        if y0 >= y1 {
            return;
        }
        let start = self.index(0, y0);
        let end = self.index(0, y1);
        self.data[start..end].fill(color);
    }

    /// Copy `src` into this raster with its top-left corner at `(x0, y0)`,
    /// cropping whatever falls outside.
    pub fn blit(&mut self, src: &Raster, x0: u32, y0: u32) {
        if x0 >= self.width || y0 >= self.height {
            return;
        }
        let w = src.width.min(self.width - x0) as usize;
        let h = src.height.min(self.height - y0);
        for sy in 0..h {
            let dst_start = self.index(x0, y0 + sy);
            self.data[dst_start..dst_start + w].copy_from_slice(&src.row(sy)[..w]);
        }
    }

    /// The raster rotated by 180 degrees.
    pub fn rotated_180(&self) -> Raster {
        let mut data = self.data.clone();
        data.reverse();
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Resample to a new size by area averaging (box filter with fractional
    /// coverage).
    pub fn resample_area(&self, new_width: u32, new_height: u32) -> Raster {
        if new_width == self.width && new_height == self.height {
            return self.clone();
        }
        if new_width == 0 || new_height == 0 || self.width == 0 || self.height == 0 {
            return Raster::new_empty(new_width, new_height);
        }

        let x_weights = area_weights(self.width, new_width);
        let y_weights = area_weights(self.height, new_height);

        // Horizontal pass into f64 accumulators.
        let src_w = self.width as usize;
        let dst_w = new_width as usize;
        let mut horizontal = vec![[0.0f64; 3]; dst_w * self.height as usize];
        horizontal
            .par_chunks_mut(dst_w)
            .enumerate()
            .for_each(|(y, out_row)| {
                let src_row = &self.data[y * src_w..(y + 1) * src_w];
                for (out, weights) in out_row.iter_mut().zip(&x_weights) {
                    for &(sx, w) in weights {
                        let p = src_row[sx];
                        out[0] += p.r as f64 * w;
                        out[1] += p.g as f64 * w;
                        out[2] += p.b as f64 * w;
                    }
                }
            });

        // Vertical pass.
        Raster::from_rows(new_width, new_height, |y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let mut acc = [0.0f64; 3];
                for &(sy, w) in &y_weights[y as usize] {
                    let h = horizontal[sy * dst_w + x];
                    acc[0] += h[0] * w;
                    acc[1] += h[1] * w;
                    acc[2] += h[2] * w;
                }
                *px = Rgb::new(to_u8(acc[0]), to_u8(acc[1]), to_u8(acc[2]));
            }
        })
    }

    /// Downscale to fit within `max_width x max_height`, keeping the aspect
    /// ratio. Never enlarges.
    pub fn thumbnail(&self, max_width: u32, max_height: u32) -> Raster {
        if self.width <= max_width && self.height <= max_height {
            return self.clone();
        }
        let scale = (max_width as f64 / self.width as f64).min(max_height as f64 / self.height as f64);
        let w = ((self.width as f64 * scale).round() as u32).max(1);
        let h = ((self.height as f64 * scale).round() as u32).max(1);
        self.resample_area(w, h)
    }

    /// Convert to 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            bytes.extend_from_slice(&px.to_array());
        }
        bytes
    }
}

#[inline]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// For each destination index, the source indices it covers and their
/// normalized coverage weights.
fn area_weights(src_len: u32, dst_len: u32) -> Vec<Vec<(usize, f64)>> {
    let ratio = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| {
            let start = i as f64 * ratio;
            let end = (i + 1) as f64 * ratio;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len as usize);
            (first..last)
                .filter_map(|j| {
                    let overlap = end.min((j + 1) as f64) - start.max(j as f64);
                    (overlap > 1e-12).then_some((j, overlap / ratio))
                })
                .collect()
        })
        .collect()
}
