//! PNG rasterization of SVG sketches.

use std::sync::{Arc, OnceLock};

use log::{debug, info};
use usvg::fontdb;

use super::Error;

static FONT_DATABASE: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

fn font_database() -> Arc<fontdb::Database> {
    FONT_DATABASE
        .get_or_init(|| {
            let mut database = fontdb::Database::new();
            database.load_system_fonts();
            info!(faces_count = database.len(); "Loaded system fonts");
            Arc::new(database)
        })
        .clone()
}

/// Rasterizes an SVG document at its own size and encodes it as PNG.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the document cannot be parsed,
/// [`Error::Pixmap`] if it has no area, and [`Error::Encode`] if PNG
/// encoding fails.
pub fn render_png(svg: &str) -> Result<Vec<u8>, Error> {
    let options = usvg::Options {
        fontdb: font_database(),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| Error::Svg(err.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(Error::Pixmap { width, height })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    debug!(width, height; "Rasterized sketch");

    pixmap
        .encode_png()
        .map_err(|err| Error::Encode(err.to_string()))
}
