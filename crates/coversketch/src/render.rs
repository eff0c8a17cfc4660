//! Drawing of an annotated cover sketch onto a [`Surface`].
//!
//! The renderer owns no state between calls: every [`SketchRenderer::render`]
//! resizes and clears the surface, recomputes the [`ScaleTransform`] from the
//! surface's current size and draws the whole sketch again.

use std::sync::OnceLock;

use log::{debug, info, trace};

use coversketch_core::{
    arrowhead::{ArrowHeads, DEFAULT_HEAD_LENGTH},
    color::Color,
    draw::{FontWeight, StrokeCap, StrokeDefinition, Surface, TextDefinition},
    geometry::{Point, Size},
    sketch::{HolePlacement, ResolvedHole, SketchLayout},
};

use crate::transform::{SKETCH_MARGINS, ScaleTransform};

/// Ratio of surface height to surface width, whatever the panel's shape.
pub const SURFACE_ASPECT_RATIO: f32 = 1.5;

/// Baseline of the title text.
const TITLE_BASELINE: f32 = 30.0;

/// Distance between the panel edge and a dimension arrow.
const DIMENSION_GAP: f32 = 50.0;

/// Colors, strokes and fonts used for each part of a sketch.
#[derive(Debug, Clone)]
pub struct SketchStyle {
    title: TextDefinition,
    label: TextDefinition,
    dimension: TextDefinition,
    note: TextDefinition,
    callout: TextDefinition,
    offset_note: TextDefinition,
    outline: StrokeDefinition,
    dimension_arrow: StrokeDefinition,
    hole_outline: StrokeDefinition,
    hole_fill: Color,
}

impl SketchStyle {
    /// Creates the standard sketch style using the given font family.
    pub fn new(font_family: &str) -> Self {
        let Palette {
            black,
            red,
            blue,
            outline,
            hole_fill,
        } = *palette();

        let text = |size: u16, color: Color| {
            let mut definition = TextDefinition::new();
            definition.set_font_family(font_family);
            definition.set_font_size(size);
            definition.set_color(Some(color));
            definition
        };

        let mut title = text(20, black);
        title.set_font_weight(FontWeight::Bold);

        let mut outline = StrokeDefinition::new(outline, 2.0);
        outline.set_cap(StrokeCap::Square);

        Self {
            title,
            label: text(12, black),
            dimension: text(12, red),
            note: text(12, blue),
            callout: text(10, red),
            offset_note: text(10, blue),
            outline,
            dimension_arrow: StrokeDefinition::new(red, 2.0),
            hole_outline: StrokeDefinition::new(black, 2.0),
            hole_fill,
        }
    }
}

impl Default for SketchStyle {
    fn default() -> Self {
        Self::new(TextDefinition::default().font_family())
    }
}

/// Fixed colors of the sketch, parsed once per process.
#[derive(Debug, Clone, Copy)]
struct Palette {
    black: Color,
    red: Color,
    blue: Color,
    outline: Color,
    hole_fill: Color,
}

static PALETTE: OnceLock<Palette> = OnceLock::new();

fn palette() -> &'static Palette {
    PALETTE.get_or_init(|| {
        let named = |name: &str| {
            Color::new(name).expect("built-in sketch colors are valid CSS colors")
        };
        Palette {
            black: Color::default(),
            red: named("red"),
            blue: named("blue"),
            outline: named("#333"),
            hole_fill: named("#fff"),
        }
    })
}

/// Draws sketches in a fixed style.
#[derive(Debug, Clone, Default)]
pub struct SketchRenderer {
    style: SketchStyle,
}

impl SketchRenderer {
    pub fn new(style: SketchStyle) -> Self {
        Self { style }
    }

    /// Redraws `layout` onto `surface` from scratch.
    ///
    /// The surface is resized to its display width by
    /// [`SURFACE_ASPECT_RATIO`] times that width, then cleared.
    pub fn render(&self, surface: &mut impl Surface, layout: &SketchLayout) {
        let width = surface.display_width();
        surface.resize(Size::new(width, width * SURFACE_ASPECT_RATIO));
        surface.clear();

        let transform = ScaleTransform::compute(surface.size(), layout.panel_size(), SKETCH_MARGINS);
        info!(
            title = layout.title(),
            scale = transform.scale(),
            holes_count = layout.holes().len();
            "Rendering sketch"
        );

        self.draw_title(surface, layout);

        let panel = transform.panel_bounds(layout.panel_size());
        for (from, to) in panel
            .corners()
            .into_iter()
            .zip(panel.corners().into_iter().cycle().skip(1))
        {
            surface.draw_line(from, to, &self.style.outline);
        }

        let (left, top) = (panel.min_x(), panel.min_y());
        let (right, bottom) = (panel.max_x(), panel.max_y());
        let middle = panel.center();

        let label = &self.style.label;
        surface.draw_text(Point::new(left - 40.0, middle.y()), "Left", label);
        surface.draw_text(Point::new(right + 10.0, middle.y()), "Right", label);
        surface.draw_text(Point::new(middle.x() - 15.0, top - 10.0), "Back", label);
        surface.draw_text(
            Point::new(middle.x() - 60.0, bottom + 40.0),
            "Front (cricket/high side)",
            label,
        );

        let width_line = bottom + DIMENSION_GAP;
        self.draw_dimension_arrow(
            surface,
            Point::new(left, width_line),
            Point::new(right, width_line),
        );
        surface.draw_text(
            Point::new(middle.x() - 20.0, bottom + 65.0),
            &format!("Width: {} in", layout.panel_width()),
            &self.style.dimension,
        );

        let length_line = right + DIMENSION_GAP;
        self.draw_dimension_arrow(
            surface,
            Point::new(length_line, top),
            Point::new(length_line, bottom),
        );
        surface.draw_text(
            Point::new(right + 55.0, middle.y()),
            &format!("Length: {} in", layout.panel_length()),
            &self.style.dimension,
        );

        surface.draw_text(
            Point::new(left + 5.0, bottom - 5.0),
            &turn_down_note(layout),
            &self.style.note,
        );

        for hole in layout.holes() {
            self.draw_hole(surface, &transform, layout.panel_length(), hole);
        }

        debug!("Sketch rendered");
    }

    fn draw_title(&self, surface: &mut impl Surface, layout: &SketchLayout) {
        let title = format!("Job: {}", layout.title());
        let title_width = surface.measure_text(&title, &self.style.title).width();
        let x = surface.size().width() / 2.0 - title_width / 2.0;
        surface.draw_text(Point::new(x, TITLE_BASELINE), &title, &self.style.title);
    }

    fn draw_dimension_arrow(&self, surface: &mut impl Surface, start: Point, end: Point) {
        let stroke = &self.style.dimension_arrow;
        surface.draw_line(start, end, stroke);

        let heads = ArrowHeads::new(start, end, DEFAULT_HEAD_LENGTH);
        surface.fill_polygon(&heads.end().triangle(), stroke.color());
        surface.fill_polygon(&heads.start().triangle(), stroke.color());
    }

    fn draw_hole(
        &self,
        surface: &mut impl Surface,
        transform: &ScaleTransform,
        panel_length: f32,
        hole: &ResolvedHole,
    ) {
        let center = transform.to_device(hole.center(), panel_length);
        let radius = transform.scale_length(hole.diameter() / 2.0);
        trace!(x = center.x(), y = center.y(), radius; "Drawing hole");

        surface.draw_circle(center, radius, self.style.hole_fill, &self.style.hole_outline);
        surface.draw_text(
            Point::new(center.x() + 5.0, center.y() - 5.0),
            &format!(
                "Ø {}\" x {}\" collar",
                hole.diameter(),
                hole.collar_height()
            ),
            &self.style.callout,
        );

        if let HolePlacement::Offset {
            x_direction,
            x_offset,
            y_direction,
            y_offset,
        } = hole.placement()
        {
            surface.draw_text(
                Point::new(center.x() + 10.0, center.y() + 10.0),
                &format!("{x_direction}: {x_offset}\""),
                &self.style.offset_note,
            );
            surface.draw_text(
                Point::new(center.x() + 10.0, center.y() + 20.0),
                &format!("{y_direction}: {y_offset}\""),
                &self.style.offset_note,
            );
        }
    }
}

fn turn_down_note(layout: &SketchLayout) -> String {
    let drip_note = if layout.drip_edge() {
        "w/ Drip-edge"
    } else {
        "NO Drip-edge"
    };
    format!("Turn-down: {}\" {drip_note}", layout.turn_down())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use coversketch_core::sketch::{HoleSpec, SketchRequest, XDirection, YDirection};

    use super::*;
    use crate::layout::build_layout;

    /// One recorded draw call.
    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear,
        Line { from: Point, to: Point, color: Color },
        Polygon { points: Vec<Point>, fill: Color },
        Circle { center: Point, radius: f32, fill: Color },
        Text { position: Point, content: String, color: Option<Color> },
    }

    /// Surface that records draw calls and measures text at a fixed advance.
    #[derive(Debug)]
    struct RecordingSurface {
        display_width: f32,
        size: Size,
        calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        fn new(display_width: f32) -> Self {
            Self {
                display_width,
                size: Size::default(),
                calls: Vec::new(),
            }
        }

        fn texts(&self) -> Vec<(Point, &str)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text {
                        position, content, ..
                    } => Some((*position, content.as_str())),
                    _ => None,
                })
                .collect()
        }

        fn text_at(&self, content: &str) -> Point {
            self.texts()
                .into_iter()
                .find(|(_, text)| *text == content)
                .map(|(position, _)| position)
                .unwrap_or_else(|| panic!("no text {content:?} drawn"))
        }

        fn circles(&self) -> Vec<(Point, f32)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Circle { center, radius, .. } => Some((*center, *radius)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn display_width(&self) -> f32 {
            self.display_width
        }

        fn size(&self) -> Size {
            self.size
        }

        fn resize(&mut self, size: Size) {
            self.size = size;
            self.calls.clear();
        }

        fn clear(&mut self) {
            self.calls.clear();
            self.calls.push(DrawCall::Clear);
        }

        fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
            self.calls.push(DrawCall::Line {
                from,
                to,
                color: stroke.color(),
            });
        }

        fn fill_polygon(&mut self, points: &[Point], fill: Color) {
            self.calls.push(DrawCall::Polygon {
                points: points.to_vec(),
                fill,
            });
        }

        fn draw_circle(
            &mut self,
            center: Point,
            radius: f32,
            fill: Color,
            _stroke: &StrokeDefinition,
        ) {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                fill,
            });
        }

        fn draw_text(&mut self, position: Point, content: &str, definition: &TextDefinition) {
            self.calls.push(DrawCall::Text {
                position,
                content: content.to_string(),
                color: definition.color().copied(),
            });
        }

        fn measure_text(&self, content: &str, definition: &TextDefinition) -> Size {
            Size::new(
                content.chars().count() as f32 * 10.0,
                definition.font_size() as f32,
            )
        }
    }

    fn square_request(holes: Vec<HoleSpec>) -> SketchRequest {
        SketchRequest::new("Smith Residence", 32.0, 32.0, 2.5, true, holes)
    }

    fn offset_hole() -> HoleSpec {
        HoleSpec::new(
            6.0,
            3.0,
            HolePlacement::Offset {
                x_direction: XDirection::FromRight,
                x_offset: 5.0,
                y_direction: YDirection::FromFront,
                y_offset: 4.0,
            },
        )
    }

    fn render(request: &SketchRequest) -> RecordingSurface {
        let mut surface = RecordingSurface::new(700.0);
        SketchRenderer::default().render(&mut surface, &build_layout(request));
        surface
    }

    #[test]
    fn test_palette_is_shared() {
        assert!(std::ptr::eq(palette(), palette()));

        let first = SketchStyle::default();
        let second = SketchStyle::new("serif");
        assert_eq!(first.hole_fill, second.hole_fill);
        assert_eq!(first.outline.color(), palette().outline);
        assert_eq!(second.dimension_arrow.color(), palette().red);
    }

    #[test]
    fn test_surface_resized_to_fixed_aspect() {
        let surface = render(&square_request(Vec::new()));
        assert_eq!(surface.size(), Size::new(700.0, 1050.0));
        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
    }

    #[test]
    fn test_title_is_centered() {
        let surface = render(&square_request(Vec::new()));
        let title = "Job: Smith Residence";
        let position = surface.text_at(title);

        let width = title.chars().count() as f32 * 10.0;
        assert_approx_eq!(f32, position.x(), 350.0 - width / 2.0);
        assert_approx_eq!(f32, position.y(), 30.0);
    }

    #[test]
    fn test_outline_is_closed_rectangle() {
        let surface = render(&square_request(Vec::new()));
        let outline: Vec<(Point, Point)> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { from, to, color } if *color == palette().outline => {
                    Some((*from, *to))
                }
                _ => None,
            })
            .collect();

        assert_eq!(
            outline,
            vec![
                (Point::new(50.0, 90.0), Point::new(570.0, 90.0)),
                (Point::new(570.0, 90.0), Point::new(570.0, 610.0)),
                (Point::new(570.0, 610.0), Point::new(50.0, 610.0)),
                (Point::new(50.0, 610.0), Point::new(50.0, 90.0)),
            ]
        );
    }

    #[test]
    fn test_orientation_labels() {
        let surface = render(&square_request(Vec::new()));

        assert_eq!(surface.text_at("Left"), Point::new(10.0, 350.0));
        assert_eq!(surface.text_at("Right"), Point::new(580.0, 350.0));
        assert_eq!(surface.text_at("Back"), Point::new(295.0, 80.0));
        assert_eq!(
            surface.text_at("Front (cricket/high side)"),
            Point::new(250.0, 650.0)
        );
    }

    #[test]
    fn test_dimension_arrows_and_labels() {
        let surface = render(&square_request(Vec::new()));

        let red = palette().red;
        let arrow_lines: Vec<(Point, Point)> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { from, to, color } if *color == red => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(
            arrow_lines,
            vec![
                (Point::new(50.0, 660.0), Point::new(570.0, 660.0)),
                (Point::new(620.0, 90.0), Point::new(620.0, 610.0)),
            ]
        );

        let heads = surface
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Polygon { fill, points } if *fill == red && points.len() == 3))
            .count();
        assert_eq!(heads, 4);

        assert_eq!(surface.text_at("Width: 32 in"), Point::new(290.0, 675.0));
        assert_eq!(surface.text_at("Length: 32 in"), Point::new(625.0, 350.0));
    }

    #[test]
    fn test_turn_down_note() {
        let surface = render(&square_request(Vec::new()));
        assert_eq!(
            surface.text_at("Turn-down: 2.5\" w/ Drip-edge"),
            Point::new(55.0, 605.0)
        );

        let no_drip = SketchRequest::new("Smith", 32.0, 32.0, 3.0, false, Vec::new());
        let surface = render(&no_drip);
        surface.text_at("Turn-down: 3\" NO Drip-edge");
    }

    #[test]
    fn test_no_holes_draws_no_circles() {
        let surface = render(&square_request(Vec::new()));
        assert!(surface.circles().is_empty());
    }

    #[test]
    fn test_centered_hole_has_callout_only() {
        let surface = render(&square_request(vec![HoleSpec::centered(4.0, 1.0)]));

        let circles = surface.circles();
        assert_eq!(circles.len(), 1);
        assert_approx_eq!(f32, circles[0].0.x(), 310.0);
        assert_approx_eq!(f32, circles[0].0.y(), 350.0);
        assert_approx_eq!(f32, circles[0].1, 32.5);

        assert_eq!(
            surface.text_at("Ø 4\" x 1\" collar"),
            Point::new(315.0, 345.0)
        );
        assert!(
            !surface
                .texts()
                .iter()
                .any(|(_, text)| text.starts_with("From "))
        );
    }

    #[test]
    fn test_offset_hole_has_direction_notes() {
        let surface = render(&square_request(vec![offset_hole()]));

        // Center (24, 7) in panel space
        let (center, radius) = surface.circles()[0];
        assert_approx_eq!(f32, center.x(), 50.0 + 24.0 * 16.25);
        assert_approx_eq!(f32, center.y(), 90.0 + 25.0 * 16.25);
        assert_approx_eq!(f32, radius, 3.0 * 16.25);

        let x_note = surface.text_at("From Right: 5\"");
        assert_approx_eq!(f32, x_note.x(), center.x() + 10.0);
        assert_approx_eq!(f32, x_note.y(), center.y() + 10.0);

        let y_note = surface.text_at("From Front: 4\"");
        assert_approx_eq!(f32, y_note.x(), center.x() + 10.0);
        assert_approx_eq!(f32, y_note.y(), center.y() + 20.0);
    }

    #[test]
    fn test_holes_drawn_in_order_after_panel() {
        let surface = render(&square_request(vec![
            HoleSpec::centered(4.0, 1.0),
            offset_hole(),
        ]));

        let circles = surface.circles();
        assert_eq!(circles.len(), 2);
        assert_approx_eq!(f32, circles[0].1, 2.0 * 16.25);
        assert_approx_eq!(f32, circles[1].1, 3.0 * 16.25);

        let first_circle = surface
            .calls
            .iter()
            .position(|call| matches!(call, DrawCall::Circle { .. }))
            .unwrap();
        let turn_down = surface
            .calls
            .iter()
            .position(|call| matches!(call, DrawCall::Text { content, .. } if content.starts_with("Turn-down")))
            .unwrap();
        assert!(turn_down < first_circle);
    }

    #[test]
    fn test_rerender_replaces_previous_drawing() {
        let mut surface = RecordingSurface::new(700.0);
        let renderer = SketchRenderer::default();

        renderer.render(
            &mut surface,
            &build_layout(&square_request(vec![HoleSpec::centered(4.0, 1.0)])),
        );
        renderer.render(&mut surface, &build_layout(&square_request(Vec::new())));

        assert!(surface.circles().is_empty());
        assert_eq!(
            surface
                .calls
                .iter()
                .filter(|call| **call == DrawCall::Clear)
                .count(),
            1
        );
    }
}
