use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::recording::domain::detection_log::{format_line, DetectionLog};

/// Appends detection lines to a plain text file.
///
/// The file is opened lazily in append mode and kept open for the life of
/// the log; each line is flushed as it is written.
pub struct FileDetectionLog {
    path: PathBuf,
    file: Option<File>,
}

impl FileDetectionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn file(&mut self) -> std::io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.file = Some(file);
        }
        self.file
            .as_mut()
            .ok_or_else(|| std::io::Error::other("detection log unavailable"))
    }
}

impl DetectionLog for FileDetectionLog {
    fn face_event(
        &mut self,
        at: DateTime<Local>,
        clip: Option<&Path>,
        faces: usize,
    ) -> std::io::Result<()> {
        let line = format_line(&at, clip, faces);
        let file = self.file()?;
        writeln!(file, "{line}")?;
        file.flush()
    }
}
