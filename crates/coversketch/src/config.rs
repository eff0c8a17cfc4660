//! Configuration types for sketch rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional and falls back to a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Size of the drawing surface.
//! - [`StyleConfig`] - Background color and font family.
//!
//! # Example
//!
//! ```
//! # use coversketch::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().display_width(), 700.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use coversketch_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Drawing surface configuration.
///
/// The surface height is always one and a half times its width.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    /// Surface width in device pixels.
    #[serde(default = "default_display_width")]
    display_width: f32,
}

fn default_display_width() -> f32 {
    700.0
}

impl CanvasConfig {
    pub fn new(display_width: f32) -> Self {
        Self { display_width }
    }

    pub fn display_width(&self) -> f32 {
        self.display_width
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            display_width: default_display_width(),
        }
    }
}

/// Visual styling configuration for rendered sketches.
///
/// Fields that are not set fall back to renderer defaults: a transparent
/// background and the default label font.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used for every label.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>, font_family: Option<String>) -> Self {
        Self {
            background_color,
            font_family,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }
}
