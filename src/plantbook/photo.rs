//! Photo acquisition.
//!
//! Getting a picture (camera, gallery, file dialog) belongs to the device, not to the
//! catalog. A [`PhotoSource`] yields an opaque photo reference string or nothing; the
//! record view only stores and forwards what it gets. "Nothing" covers cancellation,
//! denied permissions and unreadable input alike and is never an error.

use crate::config::PhotoMode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};

pub trait PhotoSource {
    /// Ask for a photo. `None` means the user got no photo this time.
    fn acquire(&mut self) -> Option<String>;
}

/// Picks an image file from disk.
#[derive(Debug, Clone)]
pub struct FilePicker {
    path: PathBuf,
    mode: PhotoMode,
}

impl FilePicker {
    pub fn new(path: impl Into<PathBuf>, mode: PhotoMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    fn file_uri(path: &Path) -> Option<String> {
        let canonical = fs::canonicalize(path).ok()?;
        Some(format!("file://{}", canonical.display()))
    }

    fn data_uri(path: &Path, mime: &str) -> Option<String> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(
                    target: "plantbook",
                    event = "photo_unreadable",
                    path = %path.display(),
                    error = %err
                );
                return None;
            }
        };
        Some(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }
}

impl PhotoSource for FilePicker {
    fn acquire(&mut self) -> Option<String> {
        if !self.path.is_file() {
            tracing::warn!(
                target: "plantbook",
                event = "photo_unavailable",
                reason = "missing",
                path = %self.path.display()
            );
            return None;
        }

        let mime = mime_guess::from_path(&self.path).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            tracing::warn!(
                target: "plantbook",
                event = "photo_unavailable",
                reason = "not_an_image",
                path = %self.path.display(),
                mime = %mime
            );
            return None;
        }

        match self.mode {
            PhotoMode::Uri => Self::file_uri(&self.path),
            PhotoMode::Embed => Self::data_uri(&self.path, mime.essence_str()),
        }
    }
}

/// A source that always comes back empty, like a picker the user dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dismissed;

impl PhotoSource for Dismissed {
    fn acquire(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_mode_points_at_canonical_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ficus.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let reference = FilePicker::new(&path, PhotoMode::Uri).acquire().unwrap();
        let canonical = fs::canonicalize(&path).unwrap();
        assert_eq!(reference, format!("file://{}", canonical.display()));
    }

    #[test]
    fn embed_mode_builds_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aloe.jpg");
        fs::write(&path, b"abc").unwrap();

        let reference = FilePicker::new(&path, PhotoMode::Embed).acquire().unwrap();
        assert_eq!(reference, "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn missing_file_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut picker = FilePicker::new(dir.path().join("nope.png"), PhotoMode::Uri);
        assert_eq!(picker.acquire(), None);
    }

    #[test]
    fn non_image_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "not a picture").unwrap();
        assert_eq!(FilePicker::new(&path, PhotoMode::Embed).acquire(), None);
    }

    #[test]
    fn dismissed_yields_nothing() {
        assert_eq!(Dismissed.acquire(), None);
    }
}
