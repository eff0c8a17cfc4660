//! Job file parsing and validation.
//!
//! A job file is a TOML document describing one cover sketch:
//!
//! ```toml
//! title = "Smith Residence"
//! width = 32
//! length = 32
//! turn_down = 2.5
//! drip_edge = true
//!
//! [[holes]]
//! diameter = 6
//! collar = 3
//! x_direction = "from-right"
//! x_offset = 5
//! y_direction = "from-front"
//! y_offset = 4
//! ```
//!
//! Validation does not stop at the first problem: every violation is
//! collected with the field it belongs to and, when the field is present,
//! its location in the source.

use std::{fmt, ops::Range};

use log::debug;
use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

use coversketch::sketch::{HolePlacement, HoleSpec, SketchRequest, XDirection, YDirection};

const MAX_HOLES: usize = 2;

const TITLE_MESSAGE: &str = "Please enter a Job Name.";
const DIMENSIONS_MESSAGE: &str = "Length and Width must be positive numbers.";
const TURN_DOWN_MESSAGE: &str = "Turn-down must be a positive number.";
const HOLE_COUNT_MESSAGE: &str = "A job must have one or two holes.";

/// One problem found while validating a job file.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    field: String,
    message: String,
    span: Option<Range<usize>>,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>, span: Option<Range<usize>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            span,
        }
    }

    /// Returns the offending field, e.g. `width` or `holes[2].diameter`.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the byte range of the offending value, if it was present.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors produced while reading a job file.
#[derive(Debug, Error)]
pub enum JobError {
    /// The file is not valid TOML or does not match the job layout.
    #[error("Failed to parse job file: {message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    /// The file parsed but some values are out of range.
    #[error("Invalid job file: {} problem(s) found", .errors.len())]
    Invalid {
        errors: Vec<ValidationError>,
        src: String,
    },
}

fn default_drip_edge() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JobFile {
    title: Option<Spanned<String>>,
    width: Option<Spanned<f32>>,
    length: Option<Spanned<f32>>,
    turn_down: Option<Spanned<f32>>,
    #[serde(default = "default_drip_edge")]
    drip_edge: bool,
    holes: Option<Spanned<Vec<HoleEntry>>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HoleEntry {
    diameter: Option<Spanned<f32>>,
    collar: Option<Spanned<f32>>,
    #[serde(default)]
    centered: bool,
    x_direction: Option<XDirection>,
    x_offset: Option<Spanned<f32>>,
    y_direction: Option<YDirection>,
    y_offset: Option<Spanned<f32>>,
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

#[derive(Debug, Default)]
struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    fn report(&mut self, field: impl Into<String>, message: impl Into<String>, span: Option<Range<usize>>) {
        self.errors.push(ValidationError::new(field, message, span));
    }

    fn number(
        &mut self,
        field: String,
        value: Option<&Spanned<f32>>,
        accept: fn(f32) -> bool,
        message: &str,
    ) -> Option<f32> {
        match value {
            Some(value) if accept(*value.get_ref()) => Some(*value.get_ref()),
            Some(value) => {
                self.report(field, message, Some(value.span()));
                None
            }
            None => {
                self.report(field, message, None);
                None
            }
        }
    }

    fn title(&mut self, title: Option<&Spanned<String>>) -> Option<String> {
        let trimmed = title.map(|title| title.get_ref().trim());
        match trimmed {
            Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
            _ => {
                self.report("title", TITLE_MESSAGE, title.map(Spanned::span));
                None
            }
        }
    }

    fn holes(&mut self, holes: Option<&Spanned<Vec<HoleEntry>>>) -> Vec<HoleSpec> {
        let Some(holes) = holes else {
            self.report("holes", HOLE_COUNT_MESSAGE, None);
            return Vec::new();
        };

        let count = holes.get_ref().len();
        if count == 0 || count > MAX_HOLES {
            self.report("holes", HOLE_COUNT_MESSAGE, Some(holes.span()));
        }

        holes
            .get_ref()
            .iter()
            .enumerate()
            .filter_map(|(index, hole)| self.hole(index + 1, hole))
            .collect()
    }

    fn hole(&mut self, number: usize, hole: &HoleEntry) -> Option<HoleSpec> {
        let field = |name: &str| format!("holes[{number}].{name}");

        let diameter = self.number(
            field("diameter"),
            hole.diameter.as_ref(),
            is_positive,
            &format!("Hole {number} diameter must be a positive number."),
        );
        let collar = self.number(
            field("collar"),
            hole.collar.as_ref(),
            is_positive,
            &format!("Hole {number} collar height must be a positive number."),
        );

        let placement = if hole.centered {
            Some(HolePlacement::Centered)
        } else {
            let offsets_message = format!("Offsets for Hole {number} must be zero or positive.");
            let x_offset = self.number(
                field("x_offset"),
                hole.x_offset.as_ref(),
                is_non_negative,
                &offsets_message,
            );
            let y_offset = self.number(
                field("y_offset"),
                hole.y_offset.as_ref(),
                is_non_negative,
                &offsets_message,
            );

            if hole.x_direction.is_none() {
                self.report(
                    field("x_direction"),
                    format!("Hole {number} needs an x_direction unless it is centered."),
                    None,
                );
            }
            if hole.y_direction.is_none() {
                self.report(
                    field("y_direction"),
                    format!("Hole {number} needs a y_direction unless it is centered."),
                    None,
                );
            }

            match (hole.x_direction, x_offset, hole.y_direction, y_offset) {
                (Some(x_direction), Some(x_offset), Some(y_direction), Some(y_offset)) => {
                    Some(HolePlacement::Offset {
                        x_direction,
                        x_offset,
                        y_direction,
                        y_offset,
                    })
                }
                _ => None,
            }
        };

        Some(HoleSpec::new(diameter?, collar?, placement?))
    }
}

/// Parses and validates a job file into a [`SketchRequest`].
///
/// # Errors
///
/// Returns [`JobError::Parse`] for malformed TOML, unknown keys or
/// unrecognized directions, and [`JobError::Invalid`] carrying every
/// validation problem otherwise.
pub fn parse_job(source: &str) -> Result<SketchRequest, JobError> {
    let job: JobFile = toml::from_str(source).map_err(|err| JobError::Parse {
        message: err.message().to_string(),
        span: err.span(),
        src: source.to_string(),
    })?;

    let mut validator = Validator::default();

    let title = validator.title(job.title.as_ref());
    let width = validator.number(
        "width".to_string(),
        job.width.as_ref(),
        is_positive,
        DIMENSIONS_MESSAGE,
    );
    let length = validator.number(
        "length".to_string(),
        job.length.as_ref(),
        is_positive,
        DIMENSIONS_MESSAGE,
    );
    let turn_down = validator.number(
        "turn_down".to_string(),
        job.turn_down.as_ref(),
        is_positive,
        TURN_DOWN_MESSAGE,
    );
    let holes = validator.holes(job.holes.as_ref());

    match (title, width, length, turn_down) {
        (Some(title), Some(width), Some(length), Some(turn_down)) if validator.errors.is_empty() => {
            debug!(title, width, length, holes_count = holes.len(); "Job file validated");
            Ok(SketchRequest::new(
                title,
                width,
                length,
                turn_down,
                job.drip_edge,
                holes,
            ))
        }
        _ => Err(JobError::Invalid {
            errors: validator.errors,
            src: source.to_string(),
        }),
    }
}
