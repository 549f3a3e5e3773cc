use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timing and destination of the clip currently being recorded.
///
/// Times are offsets on the session's monotonic clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Recording {
    start_time: Duration,
    last_detect_time: Duration,
    file_path: PathBuf,
}

impl Recording {
    pub fn start(file_path: PathBuf, now: Duration) -> Self {
        Self {
            start_time: now,
            last_detect_time: now,
            file_path,
        }
    }

    pub fn start_time(&self) -> Duration {
        self.start_time
    }

    pub fn last_detect_time(&self) -> Duration {
        self.last_detect_time
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn mark_detection(&mut self, now: Duration) {
        self.last_detect_time = self.last_detect_time.max(now);
    }

    /// Time since a face was last seen.
    pub fn detection_gap(&self, now: Duration) -> Duration {
        now.saturating_sub(self.last_detect_time)
    }

    /// Span from the first to the most recent detection.
    pub fn active_duration(&self) -> Duration {
        self.last_detect_time.saturating_sub(self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_start_sets_both_times() {
        let r = Recording::start(PathBuf::from("a.avi"), secs(4));
        assert_eq!(r.start_time(), secs(4));
        assert_eq!(r.last_detect_time(), secs(4));
        assert_eq!(r.active_duration(), Duration::ZERO);
        assert_eq!(r.file_path(), Path::new("a.avi"));
    }

    #[test]
    fn test_mark_detection_extends_active_duration() {
        let mut r = Recording::start(PathBuf::from("a.avi"), secs(1));
        r.mark_detection(secs(6));
        assert_eq!(r.active_duration(), secs(5));
        assert_eq!(r.detection_gap(secs(9)), secs(3));
    }

    #[test]
    fn test_mark_detection_never_moves_backwards() {
        let mut r = Recording::start(PathBuf::from("a.avi"), secs(5));
        r.mark_detection(secs(3));
        assert_eq!(r.last_detect_time(), secs(5));
    }

    #[test]
    fn test_gap_saturates_for_earlier_readings() {
        let r = Recording::start(PathBuf::from("a.avi"), secs(5));
        assert_eq!(r.detection_gap(secs(2)), Duration::ZERO);
    }
}
