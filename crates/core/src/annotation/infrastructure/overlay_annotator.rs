use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::recording::domain::recording_controller::RecorderStatus;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

const RECORDING_COLOR: [u8; 3] = [0, 255, 0];
const IDLE_COLOR: [u8; 3] = [255, 0, 0];
const FACE_BOX_COLOR: [u8; 3] = [0, 255, 0];

/// Plain pixel-writing annotator for RGB frames.
///
/// Draws a filled status dot near the top-left corner and hollow
/// rectangles around faces.
pub struct OverlayAnnotator {
    dot_center: (i32, i32),
    dot_radius: i32,
    box_thickness: i32,
}

impl OverlayAnnotator {
    pub fn new(dot_center: (i32, i32), dot_radius: i32, box_thickness: i32) -> Self {
        Self {
            dot_center,
            dot_radius: dot_radius.max(0),
            box_thickness: box_thickness.max(1),
        }
    }

    fn fill_circle(&self, frame: &mut Frame, color: [u8; 3]) {
        let (cx, cy) = self.dot_center;
        let r = self.dot_radius;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    frame.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn stroke_rect(&self, frame: &mut Frame, region: &Region, color: [u8; 3]) {
        let x2 = region.x + region.width - 1;
        let y2 = region.y + region.height - 1;
        let t = self.box_thickness.min(region.width).min(region.height);

        for i in 0..t {
            for x in region.x..=x2 {
                frame.put_pixel(x, region.y + i, color);
                frame.put_pixel(x, y2 - i, color);
            }
            for y in region.y..=y2 {
                frame.put_pixel(region.x + i, y, color);
                frame.put_pixel(x2 - i, y, color);
            }
        }
    }
}

impl Default for OverlayAnnotator {
    fn default() -> Self {
        Self::new((20, 20), 10, 2)
    }
}

impl FrameAnnotator for OverlayAnnotator {
    fn mark_status(&self, frame: &mut Frame, status: RecorderStatus) {
        let color = match status {
            RecorderStatus::Recording => RECORDING_COLOR,
            RecorderStatus::Idle => IDLE_COLOR,
        };
        self.fill_circle(frame, color);
    }

    fn outline_faces(&self, frame: &mut Frame, regions: &[Region]) {
        let (w, h) = (frame.width(), frame.height());
        for region in regions.iter().filter_map(|r| r.clamped(w, h)) {
            self.stroke_rect(frame, &region, FACE_BOX_COLOR);
        }
    }
}
