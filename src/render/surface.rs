//! The drawing capability the layout engine renders through.
//!
//! Coordinates are millimetres on an A4 page with the origin at the top-left
//! corner and y growing downwards. Text coordinates are the baseline of the
//! anchor point selected by [`TextAlign`].

use serde::{Deserialize, Serialize};

use crate::error::StatementResult;

/// Page width in millimetres (A4).
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// Page height in millimetres (A4).
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// An RGB colour with 0-255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a neutral grey.
    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Black.
    pub const BLACK: Rgb = Rgb::grey(0);
    /// White.
    pub const WHITE: Rgb = Rgb::grey(255);
}

/// Weight of the font used for subsequent text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular Helvetica.
    Normal,
    /// Bold Helvetica.
    Bold,
}

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// x is the left edge.
    Left,
    /// x is the horizontal centre.
    Center,
    /// x is the right edge.
    Right,
}

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintStyle {
    /// Filled with the current fill colour, no outline.
    Fill,
    /// Outlined with the current draw colour, no fill.
    Stroke,
}

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Document title.
    pub title: String,
    /// Document subject.
    pub subject: String,
    /// Document author.
    pub author: String,
}

/// A single drawing instruction.
///
/// Surfaces that defer painting until [`DrawingSurface::save`] buffer these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Set the font for subsequent text.
    SetFont {
        /// Font weight.
        weight: FontWeight,
        /// Size in points.
        size: f32,
    },
    /// Set the fill colour.
    SetFillColor {
        /// The colour.
        color: Rgb,
    },
    /// Set the outline colour.
    SetDrawColor {
        /// The colour.
        color: Rgb,
    },
    /// Paint a rectangle.
    Rect {
        /// The rectangle.
        rect: Rect,
        /// Fill or stroke.
        style: PaintStyle,
    },
    /// Stroke a straight line.
    Line {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
    },
    /// Draw a text run.
    Text {
        /// The text.
        text: String,
        /// Anchor x.
        x: f32,
        /// Baseline y.
        y: f32,
        /// Anchoring.
        align: TextAlign,
    },
}

/// A paginated drawing surface that persists one artifact.
///
/// Drawing calls are infallible; a backend reports problems from
/// [`set_font`](Self::set_font) or [`save`](Self::save).
pub trait DrawingSurface {
    /// Sets document-level metadata.
    fn set_properties(&mut self, info: DocumentInfo);

    /// Selects the font for subsequent text.
    fn set_font(&mut self, weight: FontWeight, size: f32) -> StatementResult<()>;

    /// Sets the colour used by filled rectangles.
    fn set_fill_color(&mut self, color: Rgb);

    /// Sets the colour used by outlines and lines.
    fn set_draw_color(&mut self, color: Rgb);

    /// Paints a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: PaintStyle);

    /// Strokes a straight line.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Draws a text run anchored at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);

    /// Persists the artifact under `file_name` and returns where it went.
    fn save(&mut self, file_name: &str) -> StatementResult<String>;
}

/// Hands out a fresh surface for every statement.
pub trait SurfaceProvider {
    /// The surface type produced.
    type Surface: DrawingSurface;

    /// Creates an empty surface.
    fn create_surface(&self) -> StatementResult<Self::Surface>;
}
