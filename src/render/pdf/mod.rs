//! PDF backend built on `printpdf`.
//!
//! [`PdfSurface`] buffers drawing instructions and builds the document when
//! it is saved, converting the layout's top-left millimetre coordinates to
//! PDF's bottom-left origin.

mod metrics;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Component, Path, PathBuf};

use printpdf::path::PaintMode;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use crate::error::{StatementError, StatementResult};

use super::surface::{
    DocumentInfo, DrawOp, DrawingSurface, FontWeight, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PaintStyle,
    Rect, Rgb, SurfaceProvider, TextAlign,
};

pub use metrics::text_width_mm;

/// Outline thickness in points (0.2 mm).
const OUTLINE_THICKNESS_PT: f32 = 0.57;

/// A drawing surface that writes a single-page PDF into a directory.
#[derive(Debug)]
pub struct PdfSurface {
    output_dir: PathBuf,
    info: DocumentInfo,
    ops: Vec<DrawOp>,
}

impl PdfSurface {
    /// Creates an empty surface whose artifact will land in `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            info: DocumentInfo::default(),
            ops: Vec::new(),
        }
    }

    fn write_to(&self, path: &Path) -> StatementResult<()> {
        let path_str = path.display().to_string();

        let (doc, page, layer) = PdfDocument::new(
            self.info.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Statement",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| StatementError::Font {
                message: e.to_string(),
            })?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| StatementError::Font {
                message: e.to_string(),
            })?;

        let layer = doc.get_page(page).get_layer(layer);
        layer.set_outline_thickness(OUTLINE_THICKNESS_PT);
        replay(&self.ops, &layer, &regular, &bold);

        let file = File::create(path).map_err(|e| StatementError::Persist {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| StatementError::Persist {
                path: path_str,
                message: e.to_string(),
            })
    }
}

fn pdf_color(color: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}

/// Rejects artifact names that would leave the output directory.
fn check_file_name(file_name: &str) -> StatementResult<()> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(StatementError::Persist {
            path: file_name.to_string(),
            message: "file name must be a single path component".to_string(),
        }),
    }
}

/// Converts a top-origin y coordinate to PDF's bottom origin.
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y)
}

fn replay(
    ops: &[DrawOp],
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let mut weight = FontWeight::Normal;
    let mut size = 16.0;

    for op in ops {
        match op {
            DrawOp::SetFont {
                weight: new_weight,
                size: new_size,
            } => {
                weight = *new_weight;
                size = *new_size;
            }
            DrawOp::SetFillColor { color } => layer.set_fill_color(pdf_color(*color)),
            DrawOp::SetDrawColor { color } => layer.set_outline_color(pdf_color(*color)),
            DrawOp::Rect { rect, style } => {
                let mode = match style {
                    PaintStyle::Fill => PaintMode::Fill,
                    PaintStyle::Stroke => PaintMode::Stroke,
                };
                layer.add_rect(
                    printpdf::Rect::new(
                        Mm(rect.x),
                        flip(rect.bottom()),
                        Mm(rect.x + rect.width),
                        flip(rect.y),
                    )
                    .with_mode(mode),
                );
            }
            DrawOp::Line { x1, y1, x2, y2 } => layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), flip(*y1)), false),
                    (Point::new(Mm(*x2), flip(*y2)), false),
                ],
                is_closed: false,
            }),
            DrawOp::Text { text, x, y, align } => {
                let width = text_width_mm(text, weight, size);
                let left = match align {
                    TextAlign::Left => *x,
                    TextAlign::Center => *x - width / 2.0,
                    TextAlign::Right => *x - width,
                };
                let font = match weight {
                    FontWeight::Normal => regular,
                    FontWeight::Bold => bold,
                };
                layer.use_text(text.as_str(), size, Mm(left), flip(*y), font);
            }
        }
    }
}

impl DrawingSurface for PdfSurface {
    fn set_properties(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) -> StatementResult<()> {
        if !(size.is_finite() && size > 0.0) {
            return Err(StatementError::Font {
                message: format!("invalid font size {}", size),
            });
        }
        self.ops.push(DrawOp::SetFont { weight, size });
        Ok(())
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::SetFillColor { color });
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::SetDrawColor { color });
    }

    fn draw_rect(&mut self, rect: Rect, style: PaintStyle) {
        self.ops.push(DrawOp::Rect { rect, style });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            align,
        });
    }

    fn save(&mut self, file_name: &str) -> StatementResult<String> {
        check_file_name(file_name)?;
        let path = self.output_dir.join(file_name);
        self.write_to(&path)?;
        Ok(path.display().to_string())
    }
}

/// Provides [`PdfSurface`]s writing into one output directory.
#[derive(Debug, Clone)]
pub struct PdfSurfaceProvider {
    output_dir: PathBuf,
}

impl PdfSurfaceProvider {
    /// Creates a provider for `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the directory artifacts are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl SurfaceProvider for PdfSurfaceProvider {
    type Surface = PdfSurface;

    fn create_surface(&self) -> StatementResult<PdfSurface> {
        fs::create_dir_all(&self.output_dir).map_err(|e| StatementError::Persist {
            path: self.output_dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(PdfSurface::new(self.output_dir.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_converts_to_bottom_origin() {
        assert_eq!(flip(0.0).0, PAGE_HEIGHT_MM);
        assert_eq!(flip(PAGE_HEIGHT_MM).0, 0.0);
        assert_eq!(flip(15.0).0, 282.0);
    }

    #[test]
    fn test_rejects_non_positive_font_size() {
        let mut surface = PdfSurface::new(".");
        assert!(matches!(
            surface.set_font(FontWeight::Normal, 0.0),
            Err(StatementError::Font { .. })
        ));
        assert!(surface.set_font(FontWeight::Bold, 8.0).is_ok());
    }

    #[test]
    fn test_save_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = PdfSurface::new(dir.path());
        surface.set_properties(DocumentInfo {
            title: "Test".to_string(),
            ..DocumentInfo::default()
        });
        surface.set_font(FontWeight::Bold, 12.0).unwrap();
        surface.draw_text("Hello", 105.0, 20.0, TextAlign::Center);
        surface.draw_rect(Rect::new(15.0, 30.0, 150.0, 10.0), PaintStyle::Stroke);
        surface.draw_line(15.0, 40.0, 165.0, 40.0);

        let saved = surface.save("hello.pdf").unwrap();

        let bytes = fs::read(&saved).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(saved.ends_with("hello.pdf"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = PdfSurface::new(dir.path().join("does/not/exist"));

        let result = surface.save("x.pdf");
        assert!(matches!(result, Err(StatementError::Persist { .. })));
    }

    #[test]
    fn test_file_name_with_separator_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = PdfSurface::new(dir.path());

        let result = surface.save("2024-3-Sales/Ops_Jane.pdf");

        match result {
            Err(StatementError::Persist { path, .. }) => {
                assert_eq!(path, "2024-3-Sales/Ops_Jane.pdf")
            }
            other => panic!("expected Persist error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_name_cannot_escape_output_directory() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("out");
        fs::create_dir_all(out.join("2024-3-x")).unwrap();
        let mut surface = PdfSurface::new(&out);

        assert!(surface.save("2024-3-x/../../y.pdf").is_err());
        assert!(surface.save("..").is_err());
        assert!(surface.save("/tmp/abs.pdf").is_err());
        assert!(surface.save("").is_err());
        assert!(!root.path().join("y.pdf").exists());
    }

    #[test]
    fn test_provider_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("statements/2024-03");
        let provider = PdfSurfaceProvider::new(&nested);

        provider.create_surface().unwrap();
        assert!(nested.is_dir());
    }
}
