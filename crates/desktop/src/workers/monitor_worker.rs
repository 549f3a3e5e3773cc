use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use facewatch_core::annotation::infrastructure::overlay_annotator::OverlayAnnotator;
use facewatch_core::detection::infrastructure::cascade_face_detector::CascadeFaceDetector;
use facewatch_core::pipeline::frame_loop::{self, MonitorCommand, StopReason};
use facewatch_core::pipeline::monitor_faces_use_case::{ClipEvent, FrameReport, MonitorFacesUseCase};
use facewatch_core::pipeline::monitor_logger::LogMonitorLogger;
use facewatch_core::recording::domain::recording_controller::RecorderStatus;
use facewatch_core::recording::domain::recording_settings::RecordingSettings;
use facewatch_core::recording::infrastructure::file_detection_log::FileDetectionLog;
use facewatch_core::shared::clock::SystemClock;
use facewatch_core::shared::frame::Frame;
use facewatch_core::video::domain::video_source::{CaptureDevice, VideoSource};
use facewatch_core::video::domain::video_writer::{VideoWriter, WriterFactory};
use facewatch_core::video::infrastructure::ffmpeg_capture::FfmpegCapture;
use facewatch_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;

use super::model_cache::ModelCache;

/// Annotated frame ready for display.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub status: RecorderStatus,
    pub faces: usize,
}

/// Messages sent from the monitor thread to the UI.
#[derive(Debug, Clone)]
pub enum MonitorMessage {
    ModelProgress(u64, u64),
    Started { device: String, fps: f64 },
    Frame(PreviewFrame),
    Clip(ClipEvent),
    Error(String),
    Stopped(StopReason),
}

pub struct MonitorParams {
    pub device: CaptureDevice,
    pub settings: RecordingSettings,
    pub clip_dir: PathBuf,
    pub log_path: PathBuf,
    pub model_cache: Arc<ModelCache>,
}

/// UI-side end of a running monitor.
pub struct MonitorHandle {
    messages: Receiver<MonitorMessage>,
    commands: Sender<MonitorCommand>,
    cancelled: Arc<AtomicBool>,
}

impl MonitorHandle {
    /// Asks the worker to stop before its next frame.
    pub fn stop(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn update_settings(&self, settings: RecordingSettings) {
        if self.commands.send(MonitorCommand::UpdateSettings(settings)).is_err() {
            log::debug!("Monitor already finished; settings kept for next start");
        }
    }

    /// Drains pending messages. The flag is true once the worker thread
    /// has gone away.
    pub fn drain(&self) -> (Vec<MonitorMessage>, bool) {
        let mut messages = Vec::new();
        loop {
            match self.messages.try_recv() {
                Ok(message) => messages.push(message),
                Err(TryRecvError::Empty) => return (messages, false),
                Err(TryRecvError::Disconnected) => return (messages, true),
            }
        }
    }
}

/// Spawns a monitor thread that owns the capture device and the session
/// until it is stopped or the device fails.
pub fn spawn(params: MonitorParams) -> MonitorHandle {
    let (tx, rx) = crossbeam_channel::unbounded::<MonitorMessage>();
    let (command_tx, command_rx) = crossbeam_channel::unbounded::<MonitorCommand>();
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_clone = cancelled.clone();

    thread::spawn(move || {
        match run_monitor(&tx, &command_rx, &cancelled_clone, params) {
            Ok(reason) => {
                let _ = tx.send(MonitorMessage::Stopped(reason));
            }
            Err(_) if cancelled_clone.load(Ordering::Relaxed) => {
                let _ = tx.send(MonitorMessage::Stopped(StopReason::Cancelled));
            }
            Err(e) => {
                log::error!("Monitor failed: {e}");
                let _ = tx.send(MonitorMessage::Error(e.to_string()));
            }
        }
    });

    MonitorHandle {
        messages: rx,
        commands: command_tx,
        cancelled,
    }
}

fn run_monitor(
    tx: &Sender<MonitorMessage>,
    commands: &Receiver<MonitorCommand>,
    cancelled: &Arc<AtomicBool>,
    params: MonitorParams,
) -> Result<StopReason, Box<dyn std::error::Error>> {
    let tx_dl = tx.clone();
    let model_path = params
        .model_cache
        .wait_for_cascade(
            &|downloaded, total| {
                let _ = tx_dl.send(MonitorMessage::ModelProgress(downloaded, total));
            },
            cancelled,
        )
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    if cancelled.load(Ordering::Relaxed) {
        return Ok(StopReason::Cancelled);
    }

    let detector = CascadeFaceDetector::new(&model_path)?;

    let mut capture = FfmpegCapture::new();
    let metadata = capture.open(&params.device)?;
    log::info!(
        "Capturing from {} ({}x{} @ {:.1} fps)",
        params.device,
        metadata.width,
        metadata.height,
        metadata.fps
    );
    let _ = tx.send(MonitorMessage::Started {
        device: params.device.to_string(),
        fps: metadata.fps,
    });

    let writer_factory: WriterFactory =
        Box::new(|| Box::new(FfmpegWriter::new()) as Box<dyn VideoWriter>);
    let mut session = MonitorFacesUseCase::new(
        Box::new(detector),
        writer_factory,
        Box::new(OverlayAnnotator::default()),
        Box::new(FileDetectionLog::new(&params.log_path)),
        Box::new(LogMonitorLogger::default()),
        params.settings,
        &params.clip_dir,
        metadata,
    );

    let clock = SystemClock::new();
    let outcome = frame_loop::run(
        &mut capture,
        &mut session,
        &clock,
        commands,
        cancelled,
        &mut |report: FrameReport| forward_report(tx, report),
    )?;

    if let Some(event) = outcome.final_event {
        let _ = tx.send(MonitorMessage::Clip(event));
    }
    Ok(outcome.reason)
}

fn forward_report(tx: &Sender<MonitorMessage>, report: FrameReport) {
    if let Some(event) = report.event {
        let _ = tx.send(MonitorMessage::Clip(event));
    }
    if let Some(frame) = preview_frame(&report.preview, report.status, report.face_count) {
        let _ = tx.send(MonitorMessage::Frame(frame));
    }
}

/// Converts an RGB frame into the RGBA layout the image widget expects.
fn preview_frame(frame: &Frame, status: RecorderStatus, faces: usize) -> Option<PreviewFrame> {
    let rgb = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())?;
    let rgba = image::DynamicImage::ImageRgb8(rgb).into_rgba8();
    Some(PreviewFrame {
        width: frame.width(),
        height: frame.height(),
        rgba: rgba.into_raw(),
        status,
        faces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_frame_adds_opaque_alpha() {
        let frame = Frame::new(vec![10, 20, 30, 40, 50, 60], 2, 1, 3, 0);
        let preview = preview_frame(&frame, RecorderStatus::Recording, 2).unwrap();
        assert_eq!(preview.rgba, vec![10, 20, 30, 255, 40, 50, 60, 255]);
        assert_eq!((preview.width, preview.height), (2, 1));
        assert_eq!(preview.faces, 2);
    }

    #[test]
    fn test_handle_reports_disconnect_after_worker_exit() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let (command_tx, _command_rx) = crossbeam_channel::unbounded();
        let handle = MonitorHandle {
            messages: rx,
            commands: command_tx,
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        tx.send(MonitorMessage::Stopped(StopReason::Cancelled)).unwrap();
        drop(tx);

        let (messages, finished) = handle.drain();
        assert_eq!(messages.len(), 1);
        assert!(finished);
    }

    #[test]
    fn test_stop_sets_flag() {
        let (_tx, rx) = crossbeam_channel::unbounded();
        let (command_tx, _command_rx) = crossbeam_channel::unbounded();
        let handle = MonitorHandle {
            messages: rx,
            commands: command_tx,
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        assert!(!handle.cancelled.load(Ordering::Relaxed));
        handle.stop();
        assert!(handle.cancelled.load(Ordering::Relaxed));
    }
}
