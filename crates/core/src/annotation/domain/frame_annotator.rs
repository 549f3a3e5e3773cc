use crate::recording::domain::recording_controller::RecorderStatus;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Draws monitoring overlays onto frames in place.
///
/// The status mark is burned into recorded clips; face outlines are only
/// drawn on the preview copy.
pub trait FrameAnnotator: Send {
    fn mark_status(&self, frame: &mut Frame, status: RecorderStatus);

    fn outline_faces(&self, frame: &mut Frame, regions: &[Region]);
}
