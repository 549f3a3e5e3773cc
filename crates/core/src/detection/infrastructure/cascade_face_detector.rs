use std::path::Path;

use rustface::{Detector, ImageData};

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::constants::{
    DETECTOR_MIN_FACE_SIZE, DETECTOR_PYRAMID_SCALE, DETECTOR_SCORE_THRESHOLD,
    DETECTOR_WINDOW_STEP,
};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Frontal face detection with the SeetaFace funnel-structured cascade.
///
/// Each frame is reduced to a luma plane and scanned with a sliding window
/// over an image pyramid; every cascade stage rejects windows early, so
/// only face-like windows reach the final classifiers.
pub struct CascadeFaceDetector {
    detector: Box<dyn Detector>,
}

// Safety: the rustface detector is owned exclusively by this struct and is
// only driven from one thread at a time; it is never shared.
unsafe impl Send for CascadeFaceDetector {}

impl CascadeFaceDetector {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path = model_path
            .to_str()
            .ok_or_else(|| format!("model path is not valid UTF-8: {}", model_path.display()))?;
        let mut detector = rustface::create_detector(path)
            .map_err(|e| format!("failed to load cascade model {path}: {e}"))?;

        detector.set_min_face_size(DETECTOR_MIN_FACE_SIZE);
        detector.set_score_thresh(DETECTOR_SCORE_THRESHOLD);
        detector.set_pyramid_scale_factor(DETECTOR_PYRAMID_SCALE);
        detector.set_slide_window_step(DETECTOR_WINDOW_STEP, DETECTOR_WINDOW_STEP);

        log::info!("Loaded cascade face model from {}", model_path.display());
        Ok(Self { detector })
    }
}

impl FaceDetector for CascadeFaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        // The cascade cannot build a pyramid for anything smaller than its window.
        if frame.is_empty()
            || frame.width() < DETECTOR_MIN_FACE_SIZE
            || frame.height() < DETECTOR_MIN_FACE_SIZE
        {
            return Ok(Vec::new());
        }

        let luma = frame.to_luma();
        let mut image = ImageData::new(&luma, frame.width(), frame.height());
        let faces = self.detector.detect(&mut image);

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                Region::new(
                    bbox.x(),
                    bbox.y(),
                    bbox.width() as i32,
                    bbox.height() as i32,
                    face.score(),
                )
            })
            .collect())
    }
}
