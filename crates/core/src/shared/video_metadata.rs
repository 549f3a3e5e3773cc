/// Properties of an opened capture stream, also used to configure clip sinks.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    /// Nominal frame rate reported by the device; 0.0 when unknown.
    pub fps: f64,
    pub codec: String,
    /// Human-readable device identifier, e.g. `/dev/video0`.
    pub source: String,
}

impl VideoMetadata {
    /// Frame rate to encode clips at: the device rate when known,
    /// otherwise `fallback`.
    pub fn recording_fps(&self, fallback: f64) -> f64 {
        if self.fps.is_finite() && self.fps > 0.0 {
            self.fps
        } else {
            fallback
        }
    }

    /// Same stream description with dimensions taken from an actual frame.
    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }
}
