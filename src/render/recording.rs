//! In-memory drawing surface.
//!
//! [`RecordingSurface`] keeps every instruction it receives and, on save,
//! files the finished page with its [`RecordingProvider`]. It backs dry
//! runs and lets layouts be inspected without producing a PDF.

use std::sync::{Arc, Mutex};

use crate::error::{StatementError, StatementResult};

use super::surface::{
    DocumentInfo, DrawOp, DrawingSurface, FontWeight, PaintStyle, Rect, Rgb, SurfaceProvider,
    TextAlign,
};

/// A page captured by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordedDocument {
    /// File name passed to `save`, if saved.
    pub file_name: Option<String>,
    /// Document metadata.
    pub info: DocumentInfo,
    /// Instructions in the order they were issued.
    pub ops: Vec<DrawOp>,
}

impl RecordedDocument {
    /// Returns every text run in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns the first text op whose text contains `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text.contains(needle)))
    }

    /// Returns every rectangle in drawing order.
    pub fn rects(&self) -> Vec<(Rect, PaintStyle)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, style } => Some((*rect, *style)),
                _ => None,
            })
            .collect()
    }
}

/// A surface that records instructions instead of painting them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    document: RecordedDocument,
    sink: Option<Arc<Mutex<Vec<RecordedDocument>>>>,
}

impl RecordingSurface {
    /// Creates a standalone surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns what has been recorded so far.
    pub fn document(&self) -> &RecordedDocument {
        &self.document
    }

    /// Consumes the surface and returns the recording.
    pub fn into_document(self) -> RecordedDocument {
        self.document
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_properties(&mut self, info: DocumentInfo) {
        self.document.info = info;
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) -> StatementResult<()> {
        self.document.ops.push(DrawOp::SetFont { weight, size });
        Ok(())
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.document.ops.push(DrawOp::SetFillColor { color });
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.document.ops.push(DrawOp::SetDrawColor { color });
    }

    fn draw_rect(&mut self, rect: Rect, style: PaintStyle) {
        self.document.ops.push(DrawOp::Rect { rect, style });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.document.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.document.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            align,
        });
    }

    fn save(&mut self, file_name: &str) -> StatementResult<String> {
        self.document.file_name = Some(file_name.to_string());
        if let Some(sink) = &self.sink {
            sink.lock()
                .map_err(|_| StatementError::Persist {
                    path: file_name.to_string(),
                    message: "recording sink poisoned".to_string(),
                })?
                .push(self.document.clone());
        }
        Ok(file_name.to_string())
    }
}

/// Provides [`RecordingSurface`]s that file their pages in a shared list.
#[derive(Debug, Clone, Default)]
pub struct RecordingProvider {
    saved: Arc<Mutex<Vec<RecordedDocument>>>,
}

impl RecordingProvider {
    /// Creates a provider with no saved documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the documents saved so far, in save order.
    pub fn saved(&self) -> Vec<RecordedDocument> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }
}

impl SurfaceProvider for RecordingProvider {
    type Surface = RecordingSurface;

    fn create_surface(&self) -> StatementResult<RecordingSurface> {
        Ok(RecordingSurface {
            document: RecordedDocument::default(),
            sink: Some(Arc::clone(&self.saved)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_ops_in_order() {
        let mut surface = RecordingSurface::new();
        surface.set_fill_color(Rgb::grey(220));
        surface.draw_rect(Rect::new(0.0, 0.0, 10.0, 5.0), PaintStyle::Fill);
        surface.draw_text("hello", 1.0, 2.0, TextAlign::Left);

        let doc = surface.document();
        assert_eq!(doc.ops.len(), 3);
        assert_eq!(doc.texts(), vec!["hello"]);
        assert_eq!(doc.rects().len(), 1);
        assert!(doc.file_name.is_none());
    }

    #[test]
    fn test_standalone_save_keeps_file_name() {
        let mut surface = RecordingSurface::new();
        let saved = surface.save("a.pdf").unwrap();
        assert_eq!(saved, "a.pdf");
        assert_eq!(surface.into_document().file_name.as_deref(), Some("a.pdf"));
    }

    #[test]
    fn test_provider_collects_saved_documents() {
        let provider = RecordingProvider::new();

        let mut first = provider.create_surface().unwrap();
        first.draw_text("one", 0.0, 0.0, TextAlign::Left);
        first.save("one.pdf").unwrap();

        // Created but never saved
        let mut second = provider.create_surface().unwrap();
        second.draw_text("two", 0.0, 0.0, TextAlign::Left);

        let saved = provider.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].file_name.as_deref(), Some("one.pdf"));
        assert_eq!(saved[0].texts(), vec!["one"]);
    }
}
