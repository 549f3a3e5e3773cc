use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// The two readings taken for every evaluated frame.
///
/// `elapsed` drives all recording decisions and never goes backwards;
/// `wall` is only used for file names and log lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    pub elapsed: Duration,
    pub wall: DateTime<Local>,
}

pub trait Clock: Send {
    fn now(&self) -> FrameTime;
}

/// Monotonic clock anchored at construction.
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> FrameTime {
        FrameTime {
            elapsed: self.started.elapsed(),
            wall: Local::now(),
        }
    }
}
