use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// A clip sink: frames are appended in order and the file is only
/// complete after [`VideoWriter::close`] returns.
pub trait VideoWriter: Send {
    fn open(
        &mut self,
        path: &Path,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>>;

    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Flushes and finalizes the file. Calling it again is a no-op.
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}

/// Produces a fresh, unopened sink for each new clip.
pub type WriterFactory = Box<dyn Fn() -> Box<dyn VideoWriter> + Send>;
