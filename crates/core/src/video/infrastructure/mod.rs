pub mod ffmpeg_capture;
pub mod ffmpeg_writer;
