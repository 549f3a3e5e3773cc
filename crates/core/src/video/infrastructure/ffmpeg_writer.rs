use std::path::{Path, PathBuf};

use crate::shared::constants::FALLBACK_RECORDING_FPS;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_writer::VideoWriter;

/// Encodes clips with the MPEG-4 Part 2 encoder via ffmpeg-next.
///
/// The container is chosen from the output extension (`.avi` for clips).
/// Frames are stamped with consecutive presentation timestamps at the
/// configured rate.
pub struct FfmpegWriter {
    output_path: Option<PathBuf>,
    octx: Option<ffmpeg_next::format::context::Output>,
    encoder: Option<ffmpeg_next::codec::encoder::video::Encoder>,
    scaler: Option<ffmpeg_next::software::scaling::Context>,
    width: u32,
    height: u32,
    fps: i32,
    frame_count: usize,
}

// Safety: FfmpegWriter is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegWriter {}

impl FfmpegWriter {
    pub fn new() -> Self {
        Self {
            output_path: None,
            octx: None,
            encoder: None,
            scaler: None,
            width: 0,
            height: 0,
            fps: 0,
            frame_count: 0,
        }
    }

    /// Number of frames written since the last `open`.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn drain_packets(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (Some(encoder), Some(octx)) = (self.encoder.as_mut(), self.octx.as_mut()) else {
            return Err("FfmpegWriter: not opened".into());
        };
        let ost_time_base = octx
            .stream(0)
            .ok_or("FfmpegWriter: output stream missing")?
            .time_base();

        let mut encoded = ffmpeg_next::Packet::empty();
        while encoder.receive_packet(&mut encoded).is_ok() {
            encoded.set_stream(0);
            encoded.rescale_ts(ffmpeg_next::Rational(1, self.fps), ost_time_base);
            encoded.write_interleaved(octx)?;
        }
        Ok(())
    }
}

impl Default for FfmpegWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoWriter for FfmpegWriter {
    fn open(
        &mut self,
        path: &Path,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        if metadata.width == 0 || metadata.height == 0 {
            return Err(format!(
                "cannot record a {}x{} stream",
                metadata.width, metadata.height
            )
            .into());
        }

        let mut octx = ffmpeg_next::format::output(path)?;

        let global_header = octx
            .format()
            .flags()
            .contains(ffmpeg_next::format::Flags::GLOBAL_HEADER);

        let codec = ffmpeg_next::encoder::find(ffmpeg_next::codec::Id::MPEG4)
            .ok_or("MPEG4 encoder not found")?;

        let mut ost = octx.add_stream(Some(codec))?;

        let mut encoder_ctx = ffmpeg_next::codec::context::Context::new_with_codec(codec)
            .encoder()
            .video()?;

        // MPEG-4 Part 2 needs even dimensions for 4:2:0 chroma.
        let width = metadata.width & !1;
        let height = metadata.height & !1;
        let fps = metadata.recording_fps(FALLBACK_RECORDING_FPS).round().max(1.0) as i32;

        encoder_ctx.set_width(width);
        encoder_ctx.set_height(height);
        encoder_ctx.set_format(ffmpeg_next::format::Pixel::YUV420P);
        encoder_ctx.set_time_base(ffmpeg_next::Rational(1, fps));
        encoder_ctx.set_frame_rate(Some(ffmpeg_next::Rational(fps, 1)));

        if global_header {
            encoder_ctx.set_flags(ffmpeg_next::codec::Flags::GLOBAL_HEADER);
        }

        let encoder = encoder_ctx.open_with(ffmpeg_next::Dictionary::new())?;
        ost.set_parameters(&encoder);

        octx.write_header()?;

        let scaler = ffmpeg_next::software::scaling::Context::get(
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::format::Pixel::YUV420P,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )?;

        self.output_path = Some(path.to_path_buf());
        self.octx = Some(octx);
        self.encoder = Some(encoder);
        self.scaler = Some(scaler);
        self.width = width;
        self.height = height;
        self.fps = fps;
        self.frame_count = 0;

        log::debug!("Encoding {width}x{height} @ {fps} fps to {}", path.display());
        Ok(())
    }

    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if self.encoder.is_none() {
            return Err("FfmpegWriter: not opened".into());
        }
        if frame.width() < self.width || frame.height() < self.height || frame.channels() != 3 {
            return Err(format!(
                "frame {}x{}x{} does not match clip {}x{}",
                frame.width(),
                frame.height(),
                frame.channels(),
                self.width,
                self.height
            )
            .into());
        }

        let mut rgb_frame = ffmpeg_next::util::frame::video::Video::new(
            ffmpeg_next::format::Pixel::RGB24,
            self.width,
            self.height,
        );

        let stride = rgb_frame.stride(0);
        let dst = rgb_frame.data_mut(0);
        let src = frame.data();
        let src_row_bytes = frame.width() as usize * 3;
        let row_bytes = self.width as usize * 3;

        for row in 0..self.height as usize {
            let src_start = row * src_row_bytes;
            let dst_start = row * stride;
            dst[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src[src_start..src_start + row_bytes]);
        }

        let scaler = self.scaler.as_mut().ok_or("FfmpegWriter: not opened")?;
        let mut yuv_frame = ffmpeg_next::util::frame::video::Video::empty();
        scaler.run(&rgb_frame, &mut yuv_frame)?;
        yuv_frame.set_pts(Some(self.frame_count as i64));

        self.encoder
            .as_mut()
            .ok_or("FfmpegWriter: not opened")?
            .send_frame(&yuv_frame)?;
        self.drain_packets()?;

        self.frame_count += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(encoder) = self.encoder.as_mut() {
            encoder.send_eof()?;
            self.drain_packets()?;
            if let Some(octx) = self.octx.as_mut() {
                octx.write_trailer()?;
            }
            if let Some(path) = self.output_path.as_ref() {
                log::debug!("Finalized {} ({} frames)", path.display(), self.frame_count);
            }
        }

        self.octx = None;
        self.encoder = None;
        self.scaler = None;
        self.output_path = None;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(w: u32, h: u32, fps: f64) -> VideoMetadata {
        VideoMetadata {
            width: w,
            height: h,
            fps,
            codec: String::new(),
            source: "test".to_string(),
        }
    }

    fn solid_frame(index: usize, w: u32, h: u32, value: u8) -> Frame {
        Frame::new(vec![value; (w * h * 3) as usize], w, h, 3, index)
    }

    #[test]
    fn test_write_creates_avi_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.avi");

        let mut writer = FfmpegWriter::new();
        writer.open(&path, &metadata(160, 120, 20.0)).unwrap();
        for i in 0..5 {
            writer.write(&solid_frame(i, 160, 120, 128)).unwrap();
        }
        assert_eq!(writer.frame_count(), 5);
        writer.close().unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_written_clip_has_stream_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.avi");

        let mut writer = FfmpegWriter::new();
        writer.open(&path, &metadata(160, 120, 0.0)).unwrap();
        writer.write(&solid_frame(0, 160, 120, 64)).unwrap();
        writer.close().unwrap();

        let ictx = ffmpeg_next::format::input(&path).unwrap();
        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .unwrap();
        let codec_ctx =
            ffmpeg_next::codec::context::Context::from_parameters(stream.parameters()).unwrap();
        let decoder = codec_ctx.decoder().video().unwrap();
        assert_eq!(decoder.width(), 160);
        assert_eq!(decoder.height(), 120);
    }

    #[test]
    fn test_odd_dimensions_are_cropped_to_even() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.avi");

        let mut writer = FfmpegWriter::new();
        writer.open(&path, &metadata(161, 121, 20.0)).unwrap();
        writer.write(&solid_frame(0, 161, 121, 200)).unwrap();
        writer.close().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_without_open_returns_error() {
        let mut writer = FfmpegWriter::new();
        assert!(writer.write(&solid_frame(0, 160, 120, 128)).is_err());
    }

    #[test]
    fn test_write_rejects_smaller_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.avi");

        let mut writer = FfmpegWriter::new();
        writer.open(&path, &metadata(160, 120, 20.0)).unwrap();
        assert!(writer.write(&solid_frame(0, 80, 60, 128)).is_err());
        writer.close().unwrap();
    }

    #[test]
    fn test_close_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.avi");

        let mut writer = FfmpegWriter::new();
        writer.open(&path, &metadata(160, 120, 20.0)).unwrap();
        writer.write(&solid_frame(0, 160, 120, 128)).unwrap();
        writer.close().unwrap();
        assert!(writer.close().is_ok());
    }
}
