//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the CLI's error types and
//! miette's rich diagnostic formatting.
//!
//! # Multi-Error Support
//!
//! A [`JobError::Invalid`] carries every validation problem of a job file;
//! each one is rendered independently, labelled at its value in the source.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use coversketch::SketchError;

use crate::{
    error::CliError,
    job::{JobError, ValidationError},
};

/// Adapter for a single problem located in a job file.
pub struct DiagnosticAdapter<'a> {
    message: &'a str,
    label: Option<&'a str>,
    span: Option<Range<usize>>,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(
        message: &'a str,
        label: Option<&'a str>,
        span: Option<Range<usize>>,
        src: &'a str,
    ) -> Self {
        Self {
            message,
            label,
            span,
            src,
        }
    }

    fn from_validation(error: &'a ValidationError, src: &'a str) -> Self {
        Self::new(error.message(), Some(error.field()), error.span(), src)
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("coversketch::job"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.span.is_none() {
            self.label
                .map(|field| Box::new(format!("add `{field}` to the job file")) as Box<dyn fmt::Display>)
        } else {
            None
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span.clone()?;
        let label = LabeledSpan::new_primary_with_span(
            self.label.map(str::to_string),
            SourceSpan::from(span),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for errors without a location in the job file.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "coversketch::io",
            CliError::Config(_) => "coversketch::config",
            CliError::Job(_) => "coversketch::job",
            CliError::Sketch(SketchError::Io(_)) => "coversketch::io",
            CliError::Sketch(SketchError::Config(_)) => "coversketch::config",
            CliError::Sketch(SketchError::Export(_)) => "coversketch::export",
            CliError::Sketch(SketchError::NoSketch) => "coversketch::session",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A problem with a location in the job file.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// A job file with validation problems yields one [`Reportable`] per
/// problem; every other error yields a single [`Reportable`].
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Job(JobError::Invalid { errors, src }) => errors
            .iter()
            .map(|error| Reportable::Diagnostic(DiagnosticAdapter::from_validation(error, src)))
            .collect(),
        CliError::Job(JobError::Parse { message, span, src }) => {
            vec![Reportable::Diagnostic(DiagnosticAdapter::new(
                message,
                None,
                span.clone(),
                src,
            ))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
