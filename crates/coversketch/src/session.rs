//! Holder for the most recently created sketch.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    SketchBuilder, SketchError,
    export::export_file_name,
    sketch::{SketchLayout, SketchRequest},
};

/// Keeps the latest layout so it can be exported any number of times.
///
/// Every export fails with [`SketchError::NoSketch`] until
/// [`create`](Self::create) has been called once.
#[derive(Debug, Default)]
pub struct SketchSession {
    builder: SketchBuilder,
    layout: Option<SketchLayout>,
}

impl SketchSession {
    pub fn new(builder: SketchBuilder) -> Self {
        Self {
            builder,
            layout: None,
        }
    }

    /// Lays out `request`, replacing any previously held sketch.
    pub fn create(&mut self, request: &SketchRequest) -> &SketchLayout {
        let layout = self.builder.layout(request);
        self.layout.insert(layout)
    }

    /// Returns the held layout, if a sketch has been created.
    pub fn layout(&self) -> Option<&SketchLayout> {
        self.layout.as_ref()
    }

    pub fn export_svg(&self) -> Result<String, SketchError> {
        self.builder.render_svg(self.current()?)
    }

    pub fn export_png(&self) -> Result<Vec<u8>, SketchError> {
        self.builder.render_png(self.current()?)
    }

    /// Returns the file name an exported PNG is saved under.
    pub fn file_name(&self) -> Result<String, SketchError> {
        Ok(export_file_name(self.current()?.title()))
    }

    /// Writes the PNG export into `dir` under [`file_name`](Self::file_name).
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Io`] if the file cannot be written, in addition
    /// to the errors of [`export_png`](Self::export_png).
    pub fn save_png(&self, dir: &Path) -> Result<PathBuf, SketchError> {
        let path = dir.join(self.file_name()?);
        let png = self.export_png()?;
        fs::write(&path, png)?;

        info!(path:? = path; "Sketch saved");
        Ok(path)
    }

    fn current(&self) -> Result<&SketchLayout, SketchError> {
        self.layout.as_ref().ok_or(SketchError::NoSketch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::HoleSpec;

    fn request(title: &str) -> SketchRequest {
        SketchRequest::new(
            title,
            32.0,
            32.0,
            2.5,
            true,
            vec![HoleSpec::centered(4.0, 1.0)],
        )
    }

    #[test]
    fn test_exports_fail_before_create() {
        let session = SketchSession::default();

        assert!(session.layout().is_none());
        assert!(matches!(session.export_svg(), Err(SketchError::NoSketch)));
        assert!(matches!(session.export_png(), Err(SketchError::NoSketch)));
        assert!(matches!(session.file_name(), Err(SketchError::NoSketch)));
        assert_eq!(
            session.file_name().unwrap_err().to_string(),
            "Create a sketch first."
        );
    }

    #[test]
    fn test_create_holds_layout() {
        let mut session = SketchSession::default();
        let layout = session.create(&request("Smith Residence"));
        assert_eq!(layout.holes()[0].center_x(), 16.0);

        assert_eq!(
            session.file_name().unwrap(),
            "smith_residence-chimney_sketch.png"
        );
        let svg = session.export_svg().unwrap();
        assert!(svg.contains("Job: Smith Residence"));
    }

    #[test]
    fn test_save_png_before_create() {
        let dir = tempfile::tempdir().unwrap();
        let session = SketchSession::default();

        assert!(matches!(
            session.save_png(dir.path()),
            Err(SketchError::NoSketch)
        ));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_png_writes_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = SketchSession::default();
        session.create(&request("Smith Residence"));

        let path = session.save_png(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("smith_residence-chimney_sketch.png"));
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_save_png_with_separator_in_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = SketchSession::default();
        session.create(&request("Unit 4/5"));

        let path = session.save_png(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("unit_4_5-chimney_sketch.png"));
        assert!(path.is_file());
    }

    #[test]
    fn test_create_replaces_previous_sketch() {
        let mut session = SketchSession::default();
        session.create(&request("First"));
        session.create(&request("Second"));

        assert_eq!(session.layout().unwrap().title(), "Second");
        assert_eq!(session.file_name().unwrap(), "second-chimney_sketch.png");
    }
}
