/// A rectangular area of a frame believed to contain a face.
///
/// Coordinates are in pixels relative to the top-left corner and may
/// extend past the frame edges; use [`Region::clamped`] before drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Classifier confidence; higher is more certain. Scale is detector-specific.
    pub score: f64,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32, score: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            score,
        }
    }

    pub fn area(&self) -> i64 {
        self.width.max(0) as i64 * self.height.max(0) as i64
    }

    /// Intersects the region with a `frame_width` x `frame_height` frame.
    ///
    /// Returns `None` when nothing of the region is visible.
    pub fn clamped(&self, frame_width: u32, frame_height: u32) -> Option<Region> {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = (self.x + self.width).min(frame_width as i32);
        let y2 = (self.y + self.height).min(frame_height as i32);
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Region {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
            score: self.score,
        })
    }
}
