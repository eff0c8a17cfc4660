//! Text styling and measurement for sketch labels.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A measurable, renderable text element combining content with a [`TextDefinition`]
//!
//! # Quick Start
//!
//! ```
//! # use coversketch_core::draw::{FontWeight, Text, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(20);
//! style.set_font_weight(FontWeight::Bold);
//!
//! let text = Text::new(&style, "Job: Smith Residence");
//! assert!(text.calculate_size().width() > 0.0);
//! ```
//!
//! Font sizes are in device pixels, matching the surface they are drawn on.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Font weight of a text definition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG font-weight value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }

    fn to_cosmic(self) -> Weight {
        match self {
            Self::Normal => Weight::NORMAL,
            Self::Bold => Weight::BOLD,
        }
    }
}

/// Defines the visual style for text elements in sketches.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `12` |
/// | Font weight | Normal |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_weight: FontWeight,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name (e.g., "Arial", "Helvetica")
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font weight.
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    /// Sets the text color.
    ///
    /// When set to `None`, the default text color (usually black) will be used.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns a reference to the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 12,
            font_weight: FontWeight::default(),
            color: None,
        }
    }
}

/// A single line of text paired with its style.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Calculate the size required to display this text.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }

    /// Builds an SVG `<text>` element whose baseline starts at `position`.
    ///
    /// The font family falls back to the generic `sans-serif` so rasterizers
    /// without the named font still draw the label.
    pub fn render_to_svg(&self, position: Point) -> svg_element::Text {
        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set(
                "font-family",
                format!("{}, sans-serif", self.definition.font_family()),
            )
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.font_weight().to_svg_value());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        rendered_text.add(SvgText::new(self.content))
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    /// Create a new TextManager with a default FontSystem
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the size of one line of text in pixels using cosmic-text shaping.
    ///
    /// Falls back to an average glyph width estimate when shaping yields no
    /// layout runs (for example when no fonts are installed).
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = text_def.font_size() as f32;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(text_def.font_weight().to_cosmic());

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|last| last.x + last.w))
            .fold(None, |acc: Option<f32>, run_width| {
                Some(acc.map_or(run_width, |w| w.max(run_width)))
            })
            .unwrap_or_else(|| text.chars().count() as f32 * (font_size_px * 0.55));

        Size::new(width, metrics.line_height)
    }
}

// Create a global instance for use throughout the application
static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
