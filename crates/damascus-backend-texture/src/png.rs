//! Deterministic PNG reader and writer.
//!
//! Uses fixed compression settings so the same raster always encodes to the
//! same bytes. Exports carry a pHYs chunk so they print at a known size.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use damascus_spec::{BackendError, MM_PER_INCH};
use png::{BitDepth, ColorType, Compression, Decoder, Encoder, FilterType, PixelDimensions, Transformations, Unit};
use thiserror::Error;

use crate::raster::Raster;

/// Default print resolution for exported images.
pub const DEFAULT_DPI: u32 = 300;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl BackendError for PngError {
    fn code(&self) -> &'static str {
        match self {
            PngError::Io(_) => "EXPORT_001",
            PngError::Encoding(_) => "EXPORT_002",
            PngError::Decoding(_) => "EXPORT_003",
            PngError::InvalidDimensions(_) => "EXPORT_004",
        }
    }

    fn category(&self) -> &'static str {
        "export"
    }
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
    /// Print resolution recorded in the pHYs chunk, if any.
    pub dpi: Option<u32>,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
            dpi: Some(DEFAULT_DPI),
        }
    }
}

impl PngConfig {
    /// Same settings without physical dimensions.
    pub fn without_dpi(mut self) -> Self {
        self.dpi = None;
        self
    }
}

/// Pixels per metre for a resolution in dots per inch.
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 * 1000.0 / MM_PER_INCH).round() as u32
}

/// Write a raster to a PNG file.
pub fn write_rgb(raster: &Raster, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    write_rgb_to_writer(raster, writer, config)
}

/// Write a raster as 8-bit RGB PNG to any writer.
pub fn write_rgb_to_writer<W: Write>(raster: &Raster, writer: W, config: &PngConfig) -> Result<(), PngError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "cannot encode a {}x{} image",
            raster.width, raster.height
        )));
    }

    let mut encoder = Encoder::new(writer, raster.width, raster.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);
    if let Some(dpi) = config.dpi {
        let ppm = dpi_to_pixels_per_meter(dpi);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: Unit::Meter,
        }));
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&raster.to_rgb8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write to a `Vec<u8>` and return the bytes with their hash.
pub fn write_rgb_to_vec_with_hash(raster: &Raster, config: &PngConfig) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(raster, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Read a PNG file into a raster, discarding alpha.
pub fn read_png(path: &Path) -> Result<Raster, PngError> {
    let file = File::open(path)?;
    read_png_from_reader(BufReader::new(file))
}

/// Decode a PNG stream into a raster.
///
/// Palette and low bit-depth images are expanded, 16-bit samples are
/// stripped to 8 bits, grayscale is replicated to RGB, and alpha is dropped.
pub fn read_png_from_reader<R: Read>(reader: R) -> Result<Raster, PngError> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let pixels = &buf[..info.buffer_size()];

    let rgb: Vec<u8> = match info.color_type {
        ColorType::Rgb => pixels.to_vec(),
        ColorType::Rgba => pixels.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect(),
        ColorType::Grayscale => pixels.iter().flat_map(|&v| [v, v, v]).collect(),
        ColorType::GrayscaleAlpha => pixels.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0]]).collect(),
        ColorType::Indexed => {
            return Err(PngError::InvalidDimensions("indexed color was not expanded".into()));
        }
    };

    tracing::debug!(width = info.width, height = info.height, color = ?info.color_type, "decoded png");

    Raster::from_rgb8(info.width, info.height, &rgb).ok_or_else(|| {
        PngError::InvalidDimensions(format!(
            "expected {} bytes for {}x{} RGB, got {}",
            info.width as usize * info.height as usize * 3,
            info.width,
            info.height,
            rgb.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn striped() -> Raster {
        let mut raster = Raster::new(32, 32, Rgb::BLACK);
        for y in (0..32).step_by(8) {
            raster.fill_rows(y, y + 4, Rgb::WHITE);
        }
        raster
    }

    #[test]
    fn test_rgb_deterministic() {
        let raster = striped();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgb_to_vec_with_hash(&raster, &config).unwrap();
        let (data2, hash2) = write_rgb_to_vec_with_hash(&raster, &config).unwrap();

        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_png_magic_bytes() {
        let (data, _) = write_rgb_to_vec_with_hash(&striped(), &PngConfig::default()).unwrap();
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_dpi_is_recorded() {
        assert_eq!(dpi_to_pixels_per_meter(300), 11811);

        let (data, _) = write_rgb_to_vec_with_hash(&striped(), &PngConfig::default()).unwrap();
        let decoder = Decoder::new(data.as_slice());
        let reader = decoder.read_info().unwrap();
        let dims = reader.info().pixel_dims.unwrap();
        assert_eq!(dims.xppu, 11811);
        assert_eq!(dims.yppu, 11811);
        assert_eq!(dims.unit, Unit::Meter);

        let (plain, _) = write_rgb_to_vec_with_hash(&striped(), &PngConfig::default().without_dpi()).unwrap();
        let reader = Decoder::new(plain.as_slice()).read_info().unwrap();
        assert!(reader.info().pixel_dims.is_none());
    }

    #[test]
    fn test_read_back_matches() {
        let raster = striped();
        let (data, _) = write_rgb_to_vec_with_hash(&raster, &PngConfig::default()).unwrap();
        let decoded = read_png_from_reader(data.as_slice()).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_read_grayscale_alpha_drops_alpha() {
        let mut data = Vec::new();
        {
            let mut encoder = Encoder::new(&mut data, 2, 1);
            encoder.set_color(ColorType::GrayscaleAlpha);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[10, 255, 200, 0]).unwrap();
        }
        let decoded = read_png_from_reader(data.as_slice()).unwrap();
        assert_eq!(decoded.get(0, 0), Rgb::gray(10));
        assert_eq!(decoded.get(1, 0), Rgb::gray(200));
    }

    #[test]
    fn test_empty_raster_rejected() {
        let raster = Raster::new_empty(0, 0);
        let err = write_rgb_to_vec_with_hash(&raster, &PngConfig::default()).unwrap_err();
        assert_eq!(err.code(), "EXPORT_004");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bar.png");
        write_rgb(&striped(), &path, &PngConfig::default()).unwrap();
        assert_eq!(read_png(&path).unwrap(), striped());
    }
}
