use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::shared::constants::{CLIP_EXTENSION, CLIP_PREFIX, CLIP_TIMESTAMP_FORMAT};

/// Path of a clip started at `started_at`:
/// `<dir>/output_<YYYY-MM-DD-HH-MM-SS>.avi`.
///
/// Two clips started within the same second share a name.
pub fn clip_path<Tz>(dir: &Path, started_at: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!(
        "{CLIP_PREFIX}{}.{CLIP_EXTENSION}",
        started_at.format(CLIP_TIMESTAMP_FORMAT)
    ))
}
