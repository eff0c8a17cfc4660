//! Drawing primitives for sketch rendering.
//!
//! Sketch rendering is immediate-mode: the renderer issues draw calls in
//! order against a [`Surface`], and later calls paint over earlier ones.
//! Backends (an SVG document, a recording surface in tests) implement the
//! trait; the styling types here describe how each call is painted.

mod stroke;
mod text;

pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{FontWeight, Text, TextDefinition};

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// A 2D drawing surface in device coordinates.
///
/// Device space has its origin at the top-left with Y growing downward.
/// Text positions follow canvas conventions: `position` is the left end of
/// the text's baseline.
pub trait Surface {
    /// Width the surface is displayed at, which fixes the size it is resized to.
    fn display_width(&self) -> f32;

    /// Returns the current drawing size.
    fn size(&self) -> Size;

    /// Changes the drawing size. Content drawn before a resize is discarded.
    fn resize(&mut self, size: Size);

    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Strokes a straight line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition);

    /// Fills a closed polygon without stroking it.
    fn fill_polygon(&mut self, points: &[Point], fill: Color);

    /// Fills a circle and strokes its outline.
    fn draw_circle(&mut self, center: Point, radius: f32, fill: Color, stroke: &StrokeDefinition);

    /// Paints a single line of text.
    fn draw_text(&mut self, position: Point, content: &str, definition: &TextDefinition);

    /// Measures a single line of text as it would be painted by [`Surface::draw_text`].
    fn measure_text(&self, content: &str, definition: &TextDefinition) -> Size;
}
