use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::face_presence::FacePresence;
use crate::pipeline::monitor_logger::MonitorLogger;
use crate::recording::domain::clip_path::clip_path;
use crate::recording::domain::detection_log::DetectionLog;
use crate::recording::domain::recording::Recording;
use crate::recording::domain::recording_controller::{evaluate_frame, FrameAction, RecorderStatus};
use crate::recording::domain::recording_settings::RecordingSettings;
use crate::shared::clock::FrameTime;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_writer::{VideoWriter, WriterFactory};

/// Something that happened to a clip while a frame was processed.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipEvent {
    Started {
        path: PathBuf,
    },
    /// The sink could not be opened; the controller stayed idle.
    StartFailed {
        path: PathBuf,
        reason: String,
    },
    Kept {
        path: PathBuf,
        duration: Duration,
    },
    /// Shorter than the minimum record time. `removed` is false when the
    /// file could not be deleted.
    Discarded {
        path: PathBuf,
        duration: Duration,
        removed: bool,
    },
    /// Closed by a session stop; always kept.
    Interrupted {
        path: PathBuf,
        duration: Duration,
    },
}

impl ClipEvent {
    pub fn path(&self) -> &Path {
        match self {
            ClipEvent::Started { path }
            | ClipEvent::StartFailed { path, .. }
            | ClipEvent::Kept { path, .. }
            | ClipEvent::Discarded { path, .. }
            | ClipEvent::Interrupted { path, .. } => path,
        }
    }
}

impl std::fmt::Display for ClipEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipEvent::Started { path } => write!(f, "Recording {}", path.display()),
            ClipEvent::StartFailed { path, reason } => {
                write!(f, "Could not start {}: {reason}", path.display())
            }
            ClipEvent::Kept { path, duration } => {
                write!(f, "Saved {} ({}s)", path.display(), duration.as_secs())
            }
            ClipEvent::Discarded { path, duration, removed: true } => write!(
                f,
                "Discarded {} ({}s, too short)",
                path.display(),
                duration.as_secs()
            ),
            ClipEvent::Discarded { path, removed: false, .. } => {
                write!(f, "Could not delete short clip {}", path.display())
            }
            ClipEvent::Interrupted { path, duration } => write!(
                f,
                "Stopped; kept {} ({}s)",
                path.display(),
                duration.as_secs()
            ),
        }
    }
}

/// Outcome of one processed frame.
#[derive(Clone, Debug)]
pub struct FrameReport {
    /// Controller state after this frame was evaluated.
    pub status: RecorderStatus,
    pub face_count: usize,
    pub event: Option<ClipEvent>,
    /// The frame with its status mark and, while recording, face outlines.
    pub preview: Frame,
}

struct ActiveRecording {
    recording: Recording,
    writer: Box<dyn VideoWriter>,
}

/// One monitoring session: detection, the record/discard controller, and
/// the clip sink it drives.
///
/// Frames must be fed in capture order with non-decreasing `elapsed` times.
/// At most one clip is open at any time.
pub struct MonitorFacesUseCase {
    detector: Box<dyn FaceDetector>,
    writer_factory: WriterFactory,
    annotator: Box<dyn FrameAnnotator>,
    detection_log: Box<dyn DetectionLog>,
    logger: Box<dyn MonitorLogger>,
    settings: RecordingSettings,
    clip_dir: PathBuf,
    stream: VideoMetadata,
    active: Option<ActiveRecording>,
}

impl MonitorFacesUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        detector: Box<dyn FaceDetector>,
        writer_factory: WriterFactory,
        annotator: Box<dyn FrameAnnotator>,
        detection_log: Box<dyn DetectionLog>,
        logger: Box<dyn MonitorLogger>,
        settings: RecordingSettings,
        clip_dir: impl Into<PathBuf>,
        stream: VideoMetadata,
    ) -> Self {
        Self {
            detector,
            writer_factory,
            annotator,
            detection_log,
            logger,
            settings,
            clip_dir: clip_dir.into(),
            stream,
            active: None,
        }
    }

    pub fn settings(&self) -> RecordingSettings {
        self.settings
    }

    /// Installs new thresholds. Only later frames see them.
    pub fn update_settings(&mut self, settings: RecordingSettings) {
        if settings != self.settings {
            log::info!(
                "Recording settings changed: min record {}s, stop delay {}s",
                settings.min_record_secs(),
                settings.stop_delay_secs()
            );
        }
        self.settings = settings;
    }

    pub fn status(&self) -> RecorderStatus {
        RecorderStatus::of(self.active.as_ref().map(|a| &a.recording))
    }

    pub fn current_clip(&self) -> Option<&Path> {
        self.active.as_ref().map(|a| a.recording.file_path())
    }

    /// Runs detection on `frame`, advances the controller, and writes the
    /// frame to the open clip.
    ///
    /// Sink failures are logged and reported as events; only a detector
    /// error is returned.
    pub fn process_frame(
        &mut self,
        mut frame: Frame,
        time: FrameTime,
    ) -> Result<FrameReport, Box<dyn std::error::Error>> {
        self.logger.frame(frame.index());

        let t = Instant::now();
        let presence = FacePresence::from_regions(self.detector.detect(&frame)?);
        self.logger.timing("detect", elapsed_ms(t));
        self.logger.metric("faces", presence.count() as f64);

        let action = evaluate_frame(
            &self.settings,
            self.active.as_ref().map(|a| &a.recording),
            presence.is_present(),
            time.elapsed,
        );
        let event = self.apply(action, &presence, &frame, time);

        if presence.is_present() {
            let clip = self.active.as_ref().map(|a| a.recording.file_path());
            if let Err(e) = self
                .detection_log
                .face_event(time.wall, clip, presence.count())
            {
                log::warn!("Failed to append to detection log: {e}");
            }
        }

        let status = self.status();
        self.annotator.mark_status(&mut frame, status);

        if let Some(active) = self.active.as_mut() {
            let t = Instant::now();
            if let Err(e) = active.writer.write(&frame) {
                log::warn!(
                    "Failed to write frame {} to {}: {e}",
                    frame.index(),
                    active.recording.file_path().display()
                );
            }
            self.logger.timing("encode", elapsed_ms(t));
            self.annotator.outline_faces(&mut frame, presence.regions());
        }

        Ok(FrameReport {
            status,
            face_count: presence.count(),
            event,
            preview: frame,
        })
    }

    /// Ends the session. An open clip is closed and kept regardless of
    /// its length.
    pub fn stop(&mut self) -> Option<ClipEvent> {
        let event = self.active.take().map(|mut active| {
            close_writer(&mut active);
            let path = active.recording.file_path().to_path_buf();
            let duration = active.recording.active_duration();
            log::info!("Session stopped, keeping {}", path.display());
            ClipEvent::Interrupted { path, duration }
        });
        self.logger.summary();
        event
    }

    fn apply(
        &mut self,
        action: FrameAction,
        presence: &FacePresence,
        frame: &Frame,
        time: FrameTime,
    ) -> Option<ClipEvent> {
        match action {
            FrameAction::RemainIdle => None,
            FrameAction::StartRecording => Some(self.start_clip(frame, time)),
            FrameAction::ContinueRecording => {
                if let (Some(active), true) = (self.active.as_mut(), presence.is_present()) {
                    active.recording.mark_detection(time.elapsed);
                }
                None
            }
            FrameAction::StopAndKeep => self.finish_clip(true),
            FrameAction::StopAndDiscard => self.finish_clip(false),
        }
    }

    fn start_clip(&mut self, frame: &Frame, time: FrameTime) -> ClipEvent {
        let path = clip_path(&self.clip_dir, &time.wall);

        if let Err(e) = std::fs::create_dir_all(&self.clip_dir) {
            log::warn!(
                "Cannot create clip directory {}: {e}",
                self.clip_dir.display()
            );
            return ClipEvent::StartFailed {
                path,
                reason: e.to_string(),
            };
        }

        let metadata = self.stream.with_size(frame.width(), frame.height());
        let mut writer = (self.writer_factory)();
        match writer.open(&path, &metadata) {
            Ok(()) => {
                log::info!("Face detected, recording to {}", path.display());
                self.active = Some(ActiveRecording {
                    recording: Recording::start(path.clone(), time.elapsed),
                    writer,
                });
                ClipEvent::Started { path }
            }
            Err(e) => {
                log::warn!("Failed to open clip {}: {e}", path.display());
                // The container may already be on disk before the encoder fails.
                match std::fs::remove_file(&path) {
                    Ok(()) => log::debug!("Removed partial clip {}", path.display()),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => log::warn!("Failed to remove partial clip {}: {e}", path.display()),
                }
                ClipEvent::StartFailed {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }

    fn finish_clip(&mut self, keep: bool) -> Option<ClipEvent> {
        let mut active = self.active.take()?;
        close_writer(&mut active);

        let path = active.recording.file_path().to_path_buf();
        let duration = active.recording.active_duration();

        if keep {
            log::info!("Saved {} ({:.1}s)", path.display(), duration.as_secs_f64());
            return Some(ClipEvent::Kept { path, duration });
        }

        let removed = match std::fs::remove_file(&path) {
            Ok(()) => {
                log::info!(
                    "Discarded {} ({:.1}s < {}s)",
                    path.display(),
                    duration.as_secs_f64(),
                    self.settings.min_record_secs()
                );
                true
            }
            Err(e) => {
                log::warn!("Failed to delete short clip {}: {e}", path.display());
                false
            }
        };
        Some(ClipEvent::Discarded {
            path,
            duration,
            removed,
        })
    }
}

fn close_writer(active: &mut ActiveRecording) {
    if let Err(e) = active.writer.close() {
        log::warn!(
            "Failed to finalize {}: {e}",
            active.recording.file_path().display()
        );
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::infrastructure::overlay_annotator::OverlayAnnotator;
    use crate::pipeline::monitor_logger::NullMonitorLogger;
    use crate::recording::domain::detection_log::NullDetectionLog;
    use crate::shared::region::Region;
    use chrono::{DateTime, Local, TimeZone};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const WIDTH: u32 = 64;
    const HEIGHT: u32 = 48;

    // --- Stubs ---

    /// Reports one face on every frame whose index satisfies `faces_at`.
    struct ScriptedDetector {
        faces_at: Box<dyn Fn(usize) -> bool + Send>,
    }

    impl FaceDetector for ScriptedDetector {
        fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            if (self.faces_at)(frame.index()) {
                Ok(vec![Region::new(40, 10, 20, 20, 5.0)])
            } else {
                Ok(vec![])
            }
        }
    }

    #[derive(Default)]
    struct SinkLog {
        opened: Vec<PathBuf>,
        written: Vec<Frame>,
        closed: usize,
    }

    struct StubWriter {
        log: Arc<Mutex<SinkLog>>,
        fail_open: bool,
        create_file: bool,
    }

    impl VideoWriter for StubWriter {
        fn open(
            &mut self,
            path: &Path,
            _metadata: &VideoMetadata,
        ) -> Result<(), Box<dyn std::error::Error>> {
            if self.create_file {
                std::fs::write(path, b"clip")?;
            }
            if self.fail_open {
                return Err("codec unavailable".into());
            }
            self.log.lock().unwrap().opened.push(path.to_path_buf());
            Ok(())
        }

        fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.log.lock().unwrap().written.push(frame.clone());
            Ok(())
        }

        fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            self.log.lock().unwrap().closed += 1;
            Ok(())
        }
    }

    struct CapturingDetectionLog {
        lines: Arc<Mutex<Vec<(Option<PathBuf>, usize)>>>,
    }

    impl DetectionLog for CapturingDetectionLog {
        fn face_event(
            &mut self,
            _at: DateTime<Local>,
            clip: Option<&Path>,
            faces: usize,
        ) -> std::io::Result<()> {
            self.lines
                .lock()
                .unwrap()
                .push((clip.map(Path::to_path_buf), faces));
            Ok(())
        }
    }

    // --- Harness ---

    struct Harness {
        session: MonitorFacesUseCase,
        sink: Arc<Mutex<SinkLog>>,
        dir: TempDir,
    }

    struct WriterOptions {
        failing_opens: usize,
        create_file: bool,
    }

    impl Default for WriterOptions {
        fn default() -> Self {
            Self {
                failing_opens: 0,
                create_file: true,
            }
        }
    }

    fn harness(
        min: u32,
        delay: u32,
        faces_at: impl Fn(usize) -> bool + Send + 'static,
        options: WriterOptions,
        detection_log: Box<dyn DetectionLog>,
    ) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(Mutex::new(SinkLog::default()));
        let factory_sink = sink.clone();
        let remaining_failures = Arc::new(Mutex::new(options.failing_opens));
        let create_file = options.create_file;

        let factory: WriterFactory = Box::new(move || {
            let mut failures = remaining_failures.lock().unwrap();
            let fail_open = *failures > 0;
            if fail_open {
                *failures -= 1;
            }
            Box::new(StubWriter {
                log: factory_sink.clone(),
                fail_open,
                create_file,
            }) as Box<dyn VideoWriter>
        });

        let session = MonitorFacesUseCase::new(
            Box::new(ScriptedDetector {
                faces_at: Box::new(faces_at),
            }),
            factory,
            Box::new(OverlayAnnotator::default()),
            detection_log,
            Box::new(NullMonitorLogger),
            RecordingSettings::new(min, delay).unwrap(),
            dir.path().join("recordings"),
            VideoMetadata {
                width: WIDTH,
                height: HEIGHT,
                fps: 1.0,
                codec: "rawvideo".into(),
                source: "stub".into(),
            },
        );

        Harness { session, sink, dir }
    }

    fn frame(index: usize) -> Frame {
        Frame::new(vec![0u8; (WIDTH * HEIGHT * 3) as usize], WIDTH, HEIGHT, 3, index)
    }

    /// Frame `n` is captured at `n` seconds.
    fn at(secs: usize) -> FrameTime {
        let base = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        FrameTime {
            elapsed: Duration::from_secs(secs as u64),
            wall: base + chrono::Duration::seconds(secs as i64),
        }
    }

    fn run_seconds(session: &mut MonitorFacesUseCase, range: std::ops::Range<usize>) -> Vec<ClipEvent> {
        range
            .filter_map(|s| session.process_frame(frame(s), at(s)).unwrap().event)
            .collect()
    }

    fn pixel(frame: &Frame, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * frame.width() + x) * 3) as usize;
        let d = frame.data();
        [d[i], d[i + 1], d[i + 2]]
    }

    fn null_log() -> Box<dyn DetectionLog> {
        Box::new(NullDetectionLog)
    }

    // --- Scenarios ---

    #[test]
    fn test_continuous_presence_keeps_one_clip() {
        let mut h = harness(10, 10, |i| i <= 15, WriterOptions::default(), null_log());

        let events = run_seconds(&mut h.session, 0..40);

        assert_eq!(events.len(), 2);
        let ClipEvent::Started { path } = &events[0] else {
            panic!("expected start, got {:?}", events[0]);
        };
        assert_eq!(
            events[1],
            ClipEvent::Kept {
                path: path.clone(),
                duration: Duration::from_secs(15),
            }
        );
        assert!(path.exists());
        assert_eq!(h.session.status(), RecorderStatus::Idle);
    }

    #[test]
    fn test_short_burst_is_deleted_after_stop_delay() {
        let mut h = harness(10, 10, |i| i <= 3, WriterOptions::default(), null_log());

        let events = run_seconds(&mut h.session, 0..13);
        assert_eq!(events.len(), 1);
        assert_eq!(h.session.status(), RecorderStatus::Recording);

        let events = run_seconds(&mut h.session, 13..20);
        assert_eq!(events.len(), 1);
        let ClipEvent::Discarded {
            path,
            duration,
            removed,
        } = &events[0]
        else {
            panic!("expected discard, got {:?}", events[0]);
        };
        assert_eq!(*duration, Duration::from_secs(3));
        assert!(removed);
        assert!(!path.exists());
        assert_eq!(h.sink.lock().unwrap().closed, 1);
    }

    #[test]
    fn test_gap_within_delay_continues_same_clip() {
        let mut h = harness(
            10,
            10,
            |i| i <= 2 || (7..=12).contains(&i),
            WriterOptions::default(),
            null_log(),
        );

        let events = run_seconds(&mut h.session, 0..30);

        assert_eq!(h.sink.lock().unwrap().opened.len(), 1);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[1],
            ClipEvent::Kept { duration, .. } if *duration == Duration::from_secs(12)
        ));
    }

    #[test]
    fn test_gap_exactly_at_delay_does_not_stop() {
        let mut h = harness(1, 5, |i| i == 0, WriterOptions::default(), null_log());

        let events = run_seconds(&mut h.session, 0..6);
        assert_eq!(events.len(), 1);
        assert_eq!(h.session.status(), RecorderStatus::Recording);

        let events = run_seconds(&mut h.session, 6..7);
        assert!(matches!(events[0], ClipEvent::Discarded { .. }));
    }

    #[test]
    fn test_next_detection_after_stop_starts_new_file() {
        let mut h = harness(
            10,
            10,
            |i| i <= 12 || (30..=45).contains(&i),
            WriterOptions::default(),
            null_log(),
        );

        let events = run_seconds(&mut h.session, 0..60);

        let started: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, ClipEvent::Started { .. }))
            .map(|e| e.path().to_path_buf())
            .collect();
        let kept = events
            .iter()
            .filter(|e| matches!(e, ClipEvent::Kept { .. }))
            .count();
        assert_eq!(started.len(), 2);
        assert_ne!(started[0], started[1]);
        assert_eq!(kept, 2);
    }

    #[test]
    fn test_every_frame_of_a_clip_is_written() {
        let mut h = harness(1, 2, |i| i <= 3, WriterOptions::default(), null_log());

        run_seconds(&mut h.session, 0..10);

        // Frames 0..=5 are recorded; frame 6 ends the clip before writing.
        let sink = h.sink.lock().unwrap();
        let indices: Vec<_> = sink.written.iter().map(Frame::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_settings_change_applies_to_next_frame() {
        let mut h = harness(10, 10, |i| i <= 3, WriterOptions::default(), null_log());

        run_seconds(&mut h.session, 0..5);
        h.session
            .update_settings(RecordingSettings::new(2, 2).unwrap());

        let events = run_seconds(&mut h.session, 5..6);
        assert!(events.is_empty());
        let events = run_seconds(&mut h.session, 6..7);
        assert!(matches!(
            &events[0],
            ClipEvent::Kept { duration, .. } if *duration == Duration::from_secs(3)
        ));
    }

    #[test]
    fn test_sink_open_failure_stays_idle_and_retries() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let mut h = harness(
            10,
            10,
            |_| true,
            WriterOptions {
                failing_opens: 1,
                create_file: true,
            },
            Box::new(CapturingDetectionLog {
                lines: lines.clone(),
            }),
        );

        let first = h.session.process_frame(frame(0), at(0)).unwrap();
        assert_eq!(first.status, RecorderStatus::Idle);
        assert!(matches!(first.event, Some(ClipEvent::StartFailed { .. })));

        let second = h.session.process_frame(frame(1), at(1)).unwrap();
        assert_eq!(second.status, RecorderStatus::Recording);
        assert!(matches!(second.event, Some(ClipEvent::Started { .. })));

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (None, 1));
        assert_eq!(lines[1].0.as_deref(), h.session.current_clip());
    }

    #[test]
    fn test_failed_open_leaves_no_file_behind() {
        let mut h = harness(
            10,
            10,
            |_| true,
            WriterOptions {
                failing_opens: 3,
                create_file: true,
            },
            null_log(),
        );

        let events = run_seconds(&mut h.session, 0..3);

        assert_eq!(events.len(), 3);
        for event in &events {
            assert!(matches!(event, ClipEvent::StartFailed { .. }));
            assert!(!event.path().exists());
        }
        let leftovers = std::fs::read_dir(h.dir.path().join("recordings"))
            .unwrap()
            .count();
        assert_eq!(leftovers, 0);
        assert_eq!(h.session.status(), RecorderStatus::Idle);
    }

    #[test]
    fn test_failed_delete_still_reports_discard() {
        let mut h = harness(
            10,
            1,
            |i| i == 0,
            WriterOptions {
                failing_opens: 0,
                create_file: false,
            },
            null_log(),
        );

        let events = run_seconds(&mut h.session, 0..3);

        assert!(matches!(
            events.last(),
            Some(ClipEvent::Discarded { removed: false, .. })
        ));
        assert_eq!(h.session.status(), RecorderStatus::Idle);
    }

    #[test]
    fn test_stop_keeps_partial_clip() {
        let mut h = harness(10, 10, |i| i <= 3, WriterOptions::default(), null_log());
        run_seconds(&mut h.session, 0..4);

        let event = h.session.stop();

        let Some(ClipEvent::Interrupted { path, duration }) = event else {
            panic!("expected interrupted clip, got {event:?}");
        };
        assert_eq!(duration, Duration::from_secs(3));
        assert!(path.exists());
        assert_eq!(h.sink.lock().unwrap().closed, 1);
        assert_eq!(h.session.status(), RecorderStatus::Idle);
    }

    #[test]
    fn test_stop_while_idle_is_quiet() {
        let mut h = harness(10, 10, |_| false, WriterOptions::default(), null_log());
        run_seconds(&mut h.session, 0..3);
        assert!(h.session.stop().is_none());
        assert!(!h.dir.path().join("recordings").exists());
    }

    #[test]
    fn test_recorded_frames_carry_status_but_not_outlines() {
        let mut h = harness(10, 10, |_| true, WriterOptions::default(), null_log());

        let report = h.session.process_frame(frame(0), at(0)).unwrap();

        let sink = h.sink.lock().unwrap();
        let written = &sink.written[0];
        assert_eq!(pixel(written, 20, 20), [0, 255, 0]);
        assert_eq!(pixel(written, 40, 10), [0, 0, 0]);

        assert_eq!(pixel(&report.preview, 20, 20), [0, 255, 0]);
        assert_eq!(pixel(&report.preview, 40, 10), [0, 255, 0]);
        assert_eq!(report.face_count, 1);
    }

    #[test]
    fn test_idle_preview_has_red_mark_and_no_outlines() {
        let mut h = harness(10, 10, |_| false, WriterOptions::default(), null_log());

        let report = h.session.process_frame(frame(0), at(0)).unwrap();

        assert_eq!(report.status, RecorderStatus::Idle);
        assert_eq!(pixel(&report.preview, 20, 20), [255, 0, 0]);
        assert!(h.sink.lock().unwrap().written.is_empty());
    }

    #[test]
    fn test_clip_named_after_wall_clock_start() {
        let mut h = harness(10, 10, |_| true, WriterOptions::default(), null_log());
        let report = h.session.process_frame(frame(0), at(0)).unwrap();
        let path = report.event.unwrap().path().to_path_buf();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "output_2024-06-01-12-00-00.avi"
        );
    }

    #[test]
    fn test_event_display() {
        let event = ClipEvent::Kept {
            path: PathBuf::from("a.avi"),
            duration: Duration::from_secs(12),
        };
        assert_eq!(event.to_string(), "Saved a.avi (12s)");
    }
}
