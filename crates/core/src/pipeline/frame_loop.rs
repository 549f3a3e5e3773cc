use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::Receiver;
use thiserror::Error;

use crate::pipeline::monitor_faces_use_case::{ClipEvent, FrameReport, MonitorFacesUseCase};
use crate::recording::domain::recording_settings::RecordingSettings;
use crate::shared::clock::Clock;
use crate::video::domain::video_source::VideoSource;

/// Requests applied between frames.
#[derive(Clone, Debug, PartialEq)]
pub enum MonitorCommand {
    UpdateSettings(RecordingSettings),
}

#[derive(Clone, Debug, PartialEq)]
pub enum StopReason {
    Cancelled,
    /// The source produced no more frames.
    SourceEnded,
    SourceFailed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonitorOutcome {
    pub reason: StopReason,
    pub frames: usize,
    /// Clip left open when the loop ended, closed and kept.
    pub final_event: Option<ClipEvent>,
}

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("face detection failed on frame {frame}: {message}")]
    Detection { frame: usize, message: String },
}

/// Pulls frames from an opened `source` and feeds them to `session` one at
/// a time until cancelled or the source runs dry.
///
/// Before every frame the cancellation flag is checked; pending commands
/// are applied after the frame is read and before it is evaluated. On every
/// exit path the open clip is closed and kept and the source is closed.
pub fn run(
    source: &mut dyn VideoSource,
    session: &mut MonitorFacesUseCase,
    clock: &dyn Clock,
    commands: &Receiver<MonitorCommand>,
    cancelled: &AtomicBool,
    on_report: &mut dyn FnMut(FrameReport),
) -> Result<MonitorOutcome, MonitorError> {
    let mut frames = 0usize;

    let result = {
        let mut iter = source.frames();
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break Ok(StopReason::Cancelled);
            }

            let frame = match iter.next() {
                None => break Ok(StopReason::SourceEnded),
                Some(Err(e)) => {
                    log::warn!("Frame read failed: {e}");
                    break Ok(StopReason::SourceFailed(e.to_string()));
                }
                Some(Ok(frame)) => frame,
            };

            for command in commands.try_iter() {
                match command {
                    MonitorCommand::UpdateSettings(settings) => session.update_settings(settings),
                }
            }

            let index = frame.index();
            match session.process_frame(frame, clock.now()) {
                Ok(report) => {
                    frames += 1;
                    on_report(report);
                }
                Err(e) => {
                    break Err(MonitorError::Detection {
                        frame: index,
                        message: e.to_string(),
                    })
                }
            }
        }
    };

    let final_event = session.stop();
    source.close();

    let reason = result?;
    log::info!("Monitoring stopped after {frames} frames: {reason:?}");
    Ok(MonitorOutcome {
        reason,
        frames,
        final_event,
    })
}
