use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Environment variable overriding the default capture device address.
pub const CAMERA_ENV: &str = "FACEWATCH_CAMERA";

#[cfg(target_os = "linux")]
const PLATFORM_DEFAULT: &str = "/dev/video0";
#[cfg(target_os = "windows")]
const PLATFORM_DEFAULT: &str = "video=Integrated Camera";
#[cfg(not(any(target_os = "linux", target_os = "windows")))]
const PLATFORM_DEFAULT: &str = "0";

/// Identifies a capture device for the platform's capture backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureDevice {
    /// Backend-specific device address, e.g. `/dev/video0` or `0`.
    pub address: String,
}

impl CaptureDevice {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// The camera named by `FACEWATCH_CAMERA`, or the platform default.
    ///
    /// DirectShow addresses cameras by friendly name, so the Windows
    /// default only matches laptops whose webcam reports
    /// `Integrated Camera`. Elsewhere set `FACEWATCH_CAMERA=video=<name>`
    /// using a name from `ffmpeg -list_devices true -f dshow -i dummy`.
    pub fn default_camera() -> Self {
        Self::with_override(std::env::var(CAMERA_ENV).ok())
    }

    fn with_override(address: Option<String>) -> Self {
        match address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => Self::new(address),
            _ => Self::new(PLATFORM_DEFAULT),
        }
    }
}

impl std::fmt::Display for CaptureDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// A live frame source such as a webcam.
///
/// The frame sequence is lazy and unbounded; it ends only when the device
/// stops delivering data. A source is not restartable: open a new one to
/// capture again.
pub trait VideoSource: Send {
    /// Opens the device and returns its stream properties.
    fn open(&mut self, device: &CaptureDevice) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over captured frames in arrival order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases the device. Safe to call more than once.
    fn close(&mut self);
}
