pub mod video_source;
pub mod video_writer;
