//! Statement rendering.
//!
//! The layout engine draws through the [`DrawingSurface`] capability so its
//! arithmetic and ordering can be exercised without a PDF backend. Two
//! backends are provided: [`PdfSurface`] writes real PDF files with
//! `printpdf`, [`RecordingSurface`] keeps the instructions in memory.

mod layout;
pub mod pdf;
pub mod recording;
mod surface;

pub use layout::{StatementLayout, draw_table};
pub use pdf::{PdfSurface, PdfSurfaceProvider};
pub use recording::{RecordedDocument, RecordingProvider, RecordingSurface};
pub use surface::{
    DocumentInfo, DrawOp, DrawingSurface, FontWeight, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PaintStyle,
    Rect, Rgb, SurfaceProvider, TextAlign,
};
