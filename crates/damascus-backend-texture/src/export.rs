//! Export a finished raster as PNG or as a print document.

use std::path::Path;

use damascus_spec::BackendError;
use thiserror::Error;

use crate::pdf::{write_pdf, PrintConfig};
use crate::png::{write_rgb, PngConfig, PngError};
use crate::raster::Raster;

/// Errors from export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Cannot export an empty image")]
    EmptyImage,

    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),
}

impl BackendError for ExportError {
    fn code(&self) -> &'static str {
        match self {
            ExportError::Png(e) => e.code(),
            ExportError::Io(_) => "EXPORT_001",
            ExportError::UnsupportedFormat(_) => "EXPORT_005",
            ExportError::EmptyImage => "EXPORT_006",
            ExportError::InvalidLayout(_) => "EXPORT_007",
        }
    }

    fn category(&self) -> &'static str {
        "export"
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(ExportFormat::Png),
            Some("pdf") => Ok(ExportFormat::Pdf),
            Some(other) => Err(ExportError::UnsupportedFormat(format!(".{other}"))),
            None => Err(ExportError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Write `raster` to `path`, choosing the format from the extension.
pub fn export(raster: &Raster, path: &Path) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path)?;
    export_as(raster, path, format)?;
    Ok(format)
}

/// Write `raster` to `path` in an explicit format with default settings.
pub fn export_as(raster: &Raster, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(ExportError::EmptyImage);
    }
    match format {
        ExportFormat::Png => write_rgb(raster, path, &PngConfig::default())?,
        ExportFormat::Pdf => {
            write_pdf(raster, path, &PrintConfig::default())?;
        }
    }
    tracing::info!(
        path = %path.display(),
        format = format.as_str(),
        width = raster.width,
        height = raster.height,
        "exported pattern"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.png")).unwrap(), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("dir/B.PDF")).unwrap(), ExportFormat::Pdf);

        let err = ExportFormat::from_path(Path::new("a.jpg")).unwrap_err();
        assert_eq!(err.code(), "EXPORT_005");
        assert!(err.to_string().contains(".jpg"));
        assert!(ExportFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_empty_raster_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = export(&Raster::new_empty(0, 5), &dir.path().join("x.png")).unwrap_err();
        assert!(matches!(err, ExportError::EmptyImage));
    }

    #[test]
    fn test_io_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        let err = export(&Raster::new(4, 4, Rgb::WHITE), &path).unwrap_err();
        assert_eq!(err.category(), "export");
        assert_eq!(err.code(), "EXPORT_001");
    }
}
