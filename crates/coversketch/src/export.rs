//! Export of rendered sketches.
//!
//! # Available Backends
//!
//! - [`svg`] - An SVG document built through the [`Surface`] trait
//! - [`png`] - Rasterization of that document into PNG bytes
//!
//! Export failures are reported as [`Error`], which converts into
//! [`SketchError::Export`](crate::SketchError::Export) at the crate boundary.
//!
//! [`Surface`]: coversketch_core::draw::Surface

pub mod png;
pub mod svg;

use thiserror::Error;

/// Suffix appended to the slugged job title in export file names.
const FILE_NAME_SUFFIX: &str = "-chimney_sketch.png";

/// Errors that can occur while exporting a sketch.
#[derive(Debug, Error)]
pub enum Error {
    /// The SVG document could not be parsed for rasterization.
    #[error("invalid SVG document: {0}")]
    Svg(String),

    /// The sketch has no area to rasterize into.
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Returns the download file name for a sketch titled `title`.
///
/// The title is lowercased and every run of whitespace becomes a single
/// underscore. Path separators become underscores too, so the result is
/// always a single path component.
///
/// ```
/// # use coversketch::export::export_file_name;
/// assert_eq!(
///     export_file_name("Smith  Residence"),
///     "smith_residence-chimney_sketch.png"
/// );
/// ```
pub fn export_file_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len() + FILE_NAME_SUFFIX.len());
    let mut in_whitespace = false;

    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else if matches!(ch, '/' | '\\') {
            slug.push('_');
            in_whitespace = false;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    slug.push_str(FILE_NAME_SUFFIX);
    slug
}
