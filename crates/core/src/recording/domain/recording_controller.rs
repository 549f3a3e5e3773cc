//! The record/discard state machine.
//!
//! ```text
//!            faces                       faces, or gap <= stop delay
//!   Idle ───────────▶ Recording ◀──────────────────────────┐
//!    ▲                    │ └──────────────────────────────┘
//!    └────────────────────┘
//!      gap > stop delay: close sink, then keep or discard
//! ```
//!
//! [`evaluate_frame`] is pure: it looks at the settings, the open recording
//! (if any), the presence signal and the clock, and names the transition.
//! Opening, writing, closing and deleting clips is left to the caller.

use std::time::Duration;

use crate::recording::domain::recording::Recording;
use crate::recording::domain::recording_settings::RecordingSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderStatus {
    Idle,
    Recording,
}

impl RecorderStatus {
    pub fn of(recording: Option<&Recording>) -> Self {
        if recording.is_some() {
            RecorderStatus::Recording
        } else {
            RecorderStatus::Idle
        }
    }
}

impl std::fmt::Display for RecorderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecorderStatus::Idle => write!(f, "Idle"),
            RecorderStatus::Recording => write!(f, "Recording"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
    RemainIdle,
    /// Open a new clip; this frame is its first.
    StartRecording,
    /// Append this frame. Also used while riding out a short detection gap.
    ContinueRecording,
    /// Gap exceeded the stop delay and the clip is long enough to keep.
    StopAndKeep,
    /// Gap exceeded the stop delay and the clip is shorter than the minimum.
    StopAndDiscard,
}

/// Decides what happens to the recording for one frame.
///
/// A recording stops once the time since the last detection is strictly
/// greater than the stop delay. It is kept when its face-activity span
/// (first to last detection) is at least the minimum record time.
pub fn evaluate_frame(
    settings: &RecordingSettings,
    recording: Option<&Recording>,
    faces_detected: bool,
    now: Duration,
) -> FrameAction {
    match (recording, faces_detected) {
        (None, false) => FrameAction::RemainIdle,
        (None, true) => FrameAction::StartRecording,
        (Some(_), true) => FrameAction::ContinueRecording,
        (Some(r), false) if r.detection_gap(now) <= settings.stop_delay() => {
            FrameAction::ContinueRecording
        }
        (Some(r), false) if r.active_duration() < settings.min_record() => {
            FrameAction::StopAndDiscard
        }
        (Some(_), false) => FrameAction::StopAndKeep,
    }
}
