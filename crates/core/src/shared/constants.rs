use std::time::Duration;

pub const CASCADE_MODEL_NAME: &str = "seeta_fd_frontal_v1.0.bin";
pub const CASCADE_MODEL_URL: &str =
    "https://github.com/atomashpolskiy/rustface/raw/master/model/seeta_fd_frontal_v1.0.bin";

/// Smallest face edge, in pixels, the cascade searches for.
pub const DETECTOR_MIN_FACE_SIZE: u32 = 40;
pub const DETECTOR_SCORE_THRESHOLD: f64 = 2.0;
/// Image pyramid downscale step between cascade passes.
pub const DETECTOR_PYRAMID_SCALE: f32 = 0.8;
pub const DETECTOR_WINDOW_STEP: u32 = 4;

pub const DEFAULT_MIN_RECORD_SECS: u32 = 10;
pub const DEFAULT_STOP_DELAY_SECS: u32 = 10;

pub const RECORDINGS_DIR: &str = "recordings";
pub const CLIP_PREFIX: &str = "output_";
pub const CLIP_EXTENSION: &str = "avi";
/// Clip file-name timestamp; one-second granularity.
pub const CLIP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

pub const DETECTION_LOG_FILE: &str = "logs.txt";
pub const DETECTION_LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Encode rate used when the capture device does not report one.
pub const FALLBACK_RECORDING_FPS: f64 = 20.0;

/// How often the UI drains worker messages.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(10);
