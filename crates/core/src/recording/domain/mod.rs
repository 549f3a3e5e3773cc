pub mod clip_path;
pub mod detection_log;
pub mod recording;
pub mod recording_controller;
pub mod recording_settings;
