//! Single-page PDF print document.
//!
//! The document holds one uncompressed DeviceRGB image XObject, scaled to
//! fit inside the page margins with its aspect ratio kept, and centred.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::export::ExportError;
use crate::raster::Raster;

/// Paper size, in PostScript points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// `(width, height)` in points.
    pub fn dimensions_pt(self) -> (f64, f64) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
        }
    }
}

/// Print settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintConfig {
    pub page: PageSize,
    /// Blank border on every side, in points.
    pub margin_pt: f64,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            page: PageSize::Letter,
            margin_pt: 36.0,
        }
    }
}

/// Placement of the image on the page, in points from the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PrintLayout {
    /// Fit a `width x height` image inside the margins and centre it.
    pub fn fit(width: u32, height: u32, config: &PrintConfig) -> Result<Self, ExportError> {
        let (page_width, page_height) = config.page.dimensions_pt();
        let avail_w = page_width - 2.0 * config.margin_pt;
        let avail_h = page_height - 2.0 * config.margin_pt;
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyImage);
        }
        if !(avail_w > 0.0 && avail_h > 0.0) {
            return Err(ExportError::InvalidLayout(format!(
                "margin {} pt leaves no printable area",
                config.margin_pt
            )));
        }

        let scale = (avail_w / width as f64).min(avail_h / height as f64);
        let draw_w = width as f64 * scale;
        let draw_h = height as f64 * scale;

        Ok(Self {
            page_width,
            page_height,
            x: (page_width - draw_w) / 2.0,
            y: (page_height - draw_h) / 2.0,
            width: draw_w,
            height: draw_h,
        })
    }
}

/// Write `raster` as a one-page PDF file.
///
/// The layout is checked before the file is created, so a layout error
/// leaves nothing on disk.
pub fn write_pdf(raster: &Raster, path: &Path, config: &PrintConfig) -> Result<PrintLayout, ExportError> {
    let layout = PrintLayout::fit(raster.width, raster.height, config)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_document(raster, &layout, &mut writer)?;
    writer.flush()?;
    Ok(layout)
}

/// Write `raster` as a one-page PDF to any writer.
pub fn write_pdf_to_writer<W: Write>(
    raster: &Raster,
    writer: W,
    config: &PrintConfig,
) -> Result<PrintLayout, ExportError> {
    let layout = PrintLayout::fit(raster.width, raster.height, config)?;
    write_document(raster, &layout, writer)?;
    Ok(layout)
}

fn write_document<W: Write>(raster: &Raster, layout: &PrintLayout, mut writer: W) -> Result<(), ExportError> {
    let pixels = raster.to_rgb8();
    let content = format!(
        "q\n{:.2} 0 0 {:.2} {:.2} {:.2} cm\n/Im0 Do\nQ\n",
        layout.width, layout.height, layout.x, layout.y
    );

    let mut doc = PdfBuffer::default();
    doc.raw(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
    doc.object(1, b"<< /Type /Catalog /Pages 2 0 R >>");
    doc.object(2, b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    doc.object(
        3,
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>",
            layout.page_width, layout.page_height
        )
        .as_bytes(),
    );
    doc.stream(
        4,
        &format!(
            "/Type /XObject /Subtype /Image /Width {} /Height {} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8",
            raster.width, raster.height
        ),
        &pixels,
    );
    doc.stream(5, "", content.as_bytes());
    doc.finish(1);

    writer.write_all(&doc.bytes)?;
    Ok(())
}

/// Accumulates objects and remembers their byte offsets for the xref table.
#[derive(Default)]
struct PdfBuffer {
    bytes: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfBuffer {
    fn raw(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.begin(id);
        self.raw(body);
        self.raw(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, dict: &str, data: &[u8]) {
        self.begin(id);
        let sep = if dict.is_empty() { "" } else { " " };
        self.raw(format!("<< {dict}{sep}/Length {} >>\nstream\n", data.len()).as_bytes());
        self.raw(data);
        self.raw(b"\nendstream\nendobj\n");
    }

    fn begin(&mut self, id: usize) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.bytes.len());
        self.raw(format!("{id} 0 obj\n").as_bytes());
    }

    fn finish(&mut self, root: usize) {
        let xref_offset = self.bytes.len();
        let count = self.offsets.len() + 1;
        let mut table = format!("xref\n0 {count}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            table.push_str(&format!("{offset:010} 00000 n \n"));
        }
        table.push_str(&format!(
            "trailer\n<< /Size {count} /Root {root} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        ));
        self.raw(table.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).rposition(|w| w == needle)
    }

    #[test]
    fn test_square_image_fits_letter_width() {
        let layout = PrintLayout::fit(400, 400, &PrintConfig::default()).unwrap();
        assert_eq!(layout.width, 540.0);
        assert_eq!(layout.height, 540.0);
        assert_eq!(layout.x, 36.0);
        assert_eq!(layout.y, 126.0);
    }

    #[test]
    fn test_wide_image_keeps_aspect() {
        let layout = PrintLayout::fit(800, 200, &PrintConfig::default()).unwrap();
        assert_eq!(layout.width, 540.0);
        assert_eq!(layout.height, 135.0);
        assert_eq!(layout.x, 36.0);
        assert_eq!(layout.y, (792.0 - 135.0) / 2.0);
    }

    #[test]
    fn test_layout_errors() {
        assert!(matches!(
            PrintLayout::fit(0, 10, &PrintConfig::default()),
            Err(ExportError::EmptyImage)
        ));
        let config = PrintConfig {
            page: PageSize::A4,
            margin_pt: 400.0,
        };
        assert!(matches!(
            PrintLayout::fit(10, 10, &config),
            Err(ExportError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_layout_error_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = PrintConfig {
            page: PageSize::A4,
            margin_pt: 400.0,
        };

        let path = dir.path().join("bad-margin.pdf");
        let err = write_pdf(&Raster::new(10, 10, Rgb::WHITE), &path, &config).unwrap_err();
        assert!(matches!(err, ExportError::InvalidLayout(_)));
        assert!(!path.exists());

        let path = dir.path().join("empty.pdf");
        let err = write_pdf(&Raster::new_empty(0, 0), &path, &PrintConfig::default()).unwrap_err();
        assert!(matches!(err, ExportError::EmptyImage));
        assert!(!path.exists());

        let path = dir.path().join("ok.pdf");
        write_pdf(&Raster::new(10, 10, Rgb::WHITE), &path, &PrintConfig::default()).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn test_document_structure() {
        let raster = Raster::new(40, 20, Rgb::WHITE);
        let mut data = Vec::new();
        write_pdf_to_writer(&raster, &mut data, &PrintConfig::default()).unwrap();

        assert!(data.starts_with(b"%PDF-1.4\n"));
        assert!(data.ends_with(b"%%EOF\n"));
        assert!(contains(&data, b"/Width 40 /Height 20"));
        assert!(contains(&data, b"/Length 2400 >>"));
        assert!(contains(&data, b"/Im0 Do"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let raster = Raster::new(8, 8, Rgb::BLACK);
        let mut data = Vec::new();
        write_pdf_to_writer(&raster, &mut data, &PrintConfig::default()).unwrap();

        let startxref = find(&data, b"startxref\n").unwrap();
        let tail = std::str::from_utf8(&data[startxref + 10..]).unwrap();
        let xref_offset: usize = tail.lines().next().unwrap().parse().unwrap();
        assert!(data[xref_offset..].starts_with(b"xref\n0 6\n"));

        let table = std::str::from_utf8(&data[xref_offset..startxref]).unwrap();
        let entries: Vec<&str> = table.lines().skip(3).take(5).collect();
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let header = format!("{} 0 obj\n", i + 1);
            assert!(data[offset..].starts_with(header.as_bytes()), "object {}", i + 1);
        }
    }

    #[test]
    fn test_output_is_deterministic() {
        let raster = Raster::new(16, 16, Rgb::gray(120));
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_pdf_to_writer(&raster, &mut a, &PrintConfig::default()).unwrap();
        write_pdf_to_writer(&raster, &mut b, &PrintConfig::default()).unwrap();
        assert_eq!(a, b);
    }
}
