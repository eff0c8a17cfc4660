//! Coversketch - annotated top-down sketches of chimney cover panels.
//!
//! A [`SketchRequest`] describes a rectangular panel with one or two round
//! flue holes. [`SketchBuilder`] resolves the holes into a [`SketchLayout`]
//! and renders it as an SVG document or a PNG image. [`SketchSession`] keeps
//! the most recently created layout for repeated exports.
//!
//! [`SketchRequest`]: sketch::SketchRequest
//! [`SketchLayout`]: sketch::SketchLayout

pub mod config;
pub mod export;
pub mod layout;
pub mod render;
pub mod transform;

mod error;
mod session;

pub use coversketch_core::{arrowhead, color, draw, geometry, sketch};

pub use error::SketchError;
pub use session::SketchSession;

use log::{debug, info};

use config::AppConfig;
use export::svg::SvgSurface;
use render::{SketchRenderer, SketchStyle};
use sketch::{SketchLayout, SketchRequest};

/// Builder for laying out and rendering cover sketches.
///
/// # Examples
///
/// ```rust,no_run
/// use coversketch::{SketchBuilder, config::AppConfig, sketch::{HoleSpec, SketchRequest}};
///
/// let request = SketchRequest::new(
///     "Smith Residence",
///     32.0,
///     32.0,
///     2.5,
///     true,
///     vec![HoleSpec::centered(6.0, 3.0)],
/// );
///
/// let builder = SketchBuilder::new(AppConfig::default());
/// let layout = builder.layout(&request);
///
/// let svg = builder.render_svg(&layout).expect("Failed to render");
/// let png = builder.render_png(&layout).expect("Failed to rasterize");
/// ```
#[derive(Debug, Default)]
pub struct SketchBuilder {
    config: AppConfig,
}

impl SketchBuilder {
    /// Create a new sketch builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Resolve every hole of `request` into panel coordinates.
    pub fn layout(&self, request: &SketchRequest) -> SketchLayout {
        info!(
            title = request.title(),
            holes_count = request.holes().len();
            "Laying out sketch"
        );
        layout::build_layout(request)
    }

    /// Render a layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Config`] if the configured background color is
    /// not a valid color.
    pub fn render_svg(&self, layout: &SketchLayout) -> Result<String, SketchError> {
        let style = self.config.style();
        let background = style.background_color().map_err(SketchError::Config)?;

        let sketch_style = match style.font_family() {
            Some(family) => SketchStyle::new(family),
            None => SketchStyle::default(),
        };

        let mut surface = SvgSurface::new(self.config.canvas().display_width(), background);
        SketchRenderer::new(sketch_style).render(&mut surface, layout);

        let svg = surface.into_svg_string();
        debug!(bytes = svg.len(); "SVG rendered");
        Ok(svg)
    }

    /// Render a layout to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Config`] for an invalid configuration and
    /// [`SketchError::Export`] if rasterization fails.
    pub fn render_png(&self, layout: &SketchLayout) -> Result<Vec<u8>, SketchError> {
        let svg = self.render_svg(layout)?;
        let png = export::png::render_png(&svg)?;
        info!(bytes = png.len(); "PNG rendered");
        Ok(png)
    }
}
