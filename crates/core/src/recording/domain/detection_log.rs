use std::path::Path;

use chrono::{DateTime, Local};

use crate::shared::constants::DETECTION_LOG_TIMESTAMP_FORMAT;

/// Append-only record of frames in which faces were seen.
///
/// Write-only: nothing in the application reads it back.
pub trait DetectionLog: Send {
    fn face_event(
        &mut self,
        at: DateTime<Local>,
        clip: Option<&Path>,
        faces: usize,
    ) -> std::io::Result<()>;
}

/// Discards every event. Used by tests and headless callers that opt out.
pub struct NullDetectionLog;

impl DetectionLog for NullDetectionLog {
    fn face_event(
        &mut self,
        _at: DateTime<Local>,
        _clip: Option<&Path>,
        _faces: usize,
    ) -> std::io::Result<()> {
        Ok(())
    }
}

/// One log line, without the trailing newline:
/// `<timestamp> | File: <path> | Faces: <count>`.
pub fn format_line(at: &DateTime<Local>, clip: Option<&Path>, faces: usize) -> String {
    let clip = clip
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "{} | File: {clip} | Faces: {faces}",
        at.format(DETECTION_LOG_TIMESTAMP_FORMAT)
    )
}
