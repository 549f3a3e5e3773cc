//! Face-triggered webcam recording.
//!
//! Frames flow through [`pipeline::frame_loop`]: capture, cascade face
//! detection, the record/discard decision in
//! [`recording::domain::recording_controller`], clip encoding and preview
//! annotation.

pub mod annotation;
pub mod detection;
pub mod pipeline;
pub mod recording;
pub mod shared;
pub mod video;
