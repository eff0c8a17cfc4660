//! SVG backend for the drawing [`Surface`].

use log::debug;
use svg::{Document, Node, node::element as svg_element};

use coversketch_core::{
    apply_stroke,
    color::Color,
    draw::{StrokeDefinition, Surface, Text, TextDefinition},
    geometry::{Point, Size},
};

/// A [`Surface`] that collects SVG elements in draw order.
///
/// Later elements paint over earlier ones, the same as successive canvas
/// calls.
#[derive(Debug)]
pub struct SvgSurface {
    display_width: f32,
    size: Size,
    background: Option<Color>,
    elements: Vec<Box<dyn Node>>,
}

impl SvgSurface {
    /// Creates an empty surface shown at `display_width` pixels.
    ///
    /// A `background` color, when given, is painted over the whole surface
    /// every time it is cleared; otherwise the document stays transparent.
    pub fn new(display_width: f32, background: Option<Color>) -> Self {
        Self {
            display_width,
            size: Size::default(),
            background,
            elements: Vec::new(),
        }
    }

    /// Wraps the drawn elements in a document sized to the surface.
    pub fn into_document(self) -> Document {
        debug!(
            width = self.size.width(),
            height = self.size.height(),
            elements_count = self.elements.len();
            "Building SVG document"
        );

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        self.elements
            .into_iter()
            .fold(doc, |doc, element| doc.add(element))
    }

    /// Serializes the surface as an SVG document string.
    pub fn into_svg_string(self) -> String {
        self.into_document().to_string()
    }

    fn push(&mut self, element: impl Node + 'static) {
        self.elements.push(Box::new(element));
    }
}

impl Surface for SvgSurface {
    fn display_width(&self) -> f32 {
        self.display_width
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.elements.clear();
    }

    fn clear(&mut self) {
        self.elements.clear();

        if let Some(background) = self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", self.size.width())
                .set("height", self.size.height())
                .set("fill", &background)
                .set("fill-opacity", background.alpha());
            self.push(rect);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        self.push(apply_stroke!(line, stroke));
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color) {
        let points = points
            .iter()
            .map(|point| format!("{},{}", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ");

        let polygon = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", &fill)
            .set("fill-opacity", fill.alpha());
        self.push(polygon);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, fill: Color, stroke: &StrokeDefinition) {
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", &fill)
            .set("fill-opacity", fill.alpha());
        self.push(apply_stroke!(circle, stroke));
    }

    fn draw_text(&mut self, position: Point, content: &str, definition: &TextDefinition) {
        let text = Text::new(definition, content).render_to_svg(position);
        self.push(text);
    }

    fn measure_text(&self, content: &str, definition: &TextDefinition) -> Size {
        Text::new(definition, content).calculate_size()
    }
}
