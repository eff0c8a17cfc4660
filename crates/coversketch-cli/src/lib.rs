//! CLI logic for the chimney cover sketch tool.
//!
//! Reads a job file, renders the sketch it describes and writes it as a PNG
//! or SVG image.

pub mod error_adapter;
pub mod job;

mod args;
mod config;
mod error;

pub use args::{Args, OutputFormat};
pub use config::ConfigError;
pub use error::CliError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use coversketch::{SketchBuilder, SketchSession, export::export_file_name};

/// Run the coversketch CLI application
///
/// Processes the job file through validation, layout and rendering, and
/// writes the image to the output path. Returns the path written.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Job file parse and validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<PathBuf, CliError> {
    info!(input_path = args.input; "Processing job");

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let request = job::parse_job(&source)?;

    let mut session = SketchSession::new(SketchBuilder::new(app_config));
    let layout = session.create(&request);

    let (output, format) = resolve_output(args, layout.title());
    let bytes = match format {
        OutputFormat::Png => session.export_png()?,
        OutputFormat::Svg => session.export_svg()?.into_bytes(),
    };

    fs::write(&output, bytes)?;

    info!(output_file:? = output, format:?; "Sketch exported successfully");

    Ok(output)
}

/// Picks the output path and format for a sketch titled `title`.
///
/// An explicit `--format` wins; otherwise the output extension decides, and
/// anything but `.svg` means PNG. Without `--output` the file is named after
/// the title in the working directory.
fn resolve_output(args: &Args, title: &str) -> (PathBuf, OutputFormat) {
    let format = args.format.unwrap_or_else(|| {
        let is_svg = args
            .output
            .as_deref()
            .and_then(|output| Path::new(output).extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            OutputFormat::Svg
        } else {
            OutputFormat::Png
        }
    });

    let output = match &args.output {
        Some(output) => PathBuf::from(output),
        None => PathBuf::from(export_file_name(title)).with_extension(format.extension()),
    };

    (output, format)
}
