use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_source::{CaptureDevice, VideoSource};

#[cfg(target_os = "linux")]
const CAPTURE_BACKEND: &str = "video4linux2";
#[cfg(target_os = "macos")]
const CAPTURE_BACKEND: &str = "avfoundation";
#[cfg(target_os = "windows")]
const CAPTURE_BACKEND: &str = "dshow";
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const CAPTURE_BACKEND: &str = "video4linux2";

/// Requested device frame rate; backends that cannot honour it pick the nearest.
const REQUESTED_FRAMERATE: &str = "30";

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("capture backend '{0}' is not available in this ffmpeg build")]
    BackendUnavailable(&'static str),
    #[error("could not open camera {device}: {source}")]
    Open {
        device: String,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("camera {0} has no video stream")]
    NoVideoStream(String),
    #[error("camera is not open")]
    NotOpen,
}

/// Webcam capture through libavdevice, decoding every frame to RGB24.
pub struct FfmpegCapture {
    state: Option<CaptureState>,
}

struct CaptureState {
    ictx: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    video_stream_index: usize,
    width: u32,
    height: u32,
    next_index: usize,
}

// Safety: FfmpegCapture is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegCapture {}

impl FfmpegCapture {
    pub fn new() -> Self {
        Self { state: None }
    }
}

impl Default for FfmpegCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoSource for FfmpegCapture {
    fn open(&mut self, device: &CaptureDevice) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;
        self.close();

        let backend = ffmpeg_next::device::input::video()
            .find(|f| f.name().split(',').any(|n| n == CAPTURE_BACKEND))
            .ok_or(CaptureError::BackendUnavailable(CAPTURE_BACKEND))?;

        let mut options = ffmpeg_next::Dictionary::new();
        options.set("framerate", REQUESTED_FRAMERATE);

        let open_err = |source| CaptureError::Open {
            device: device.to_string(),
            source,
        };
        let ctx = ffmpeg_next::format::open_with(
            &device.address,
            &ffmpeg_next::format::format::Format::Input(backend),
            options,
        )
        .map_err(open_err)?;
        let ictx = match ctx {
            ffmpeg_next::format::context::Context::Input(ictx) => ictx,
            ffmpeg_next::format::context::Context::Output(_) => {
                return Err(CaptureError::NoVideoStream(device.to_string()).into())
            }
        };

        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| CaptureError::NoVideoStream(device.to_string()))?;
        let video_stream_index = stream.index();

        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?;
        let decoder = codec_ctx.decoder().video()?;

        let rate = stream.avg_frame_rate();
        let fps = if rate.denominator() != 0 {
            rate.numerator() as f64 / rate.denominator() as f64
        } else {
            0.0
        };

        let width = decoder.width();
        let height = decoder.height();
        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )?;

        let metadata = VideoMetadata {
            width,
            height,
            fps,
            codec: decoder
                .codec()
                .map(|c| c.name().to_string())
                .unwrap_or_default(),
            source: device.to_string(),
        };
        log::info!(
            "Opened camera {} via {CAPTURE_BACKEND}: {width}x{height} @ {fps:.1} fps ({})",
            device,
            metadata.codec
        );

        self.state = Some(CaptureState {
            ictx,
            decoder,
            scaler,
            video_stream_index,
            width,
            height,
            next_index: 0,
        });

        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        match self.state.as_mut() {
            Some(state) => Box::new(CaptureFrameIter { state, done: false }),
            None => Box::new(std::iter::once(Err(CaptureError::NotOpen.into()))),
        }
    }

    fn close(&mut self) {
        if self.state.take().is_some() {
            log::debug!("Camera released");
        }
    }
}

/// Pulls packets from the device until the decoder yields the next frame.
struct CaptureFrameIter<'a> {
    state: &'a mut CaptureState,
    done: bool,
}

impl CaptureFrameIter<'_> {
    fn try_receive(&mut self) -> Option<Result<Frame, Box<dyn std::error::Error>>> {
        let state = &mut *self.state;
        let mut decoded = ffmpeg_next::util::frame::video::Video::empty();
        if state.decoder.receive_frame(&mut decoded).is_err() {
            return None;
        }

        let mut rgb_frame = ffmpeg_next::util::frame::video::Video::empty();
        if let Err(e) = state.scaler.run(&decoded, &mut rgb_frame) {
            return Some(Err(Box::new(e)));
        }

        let pixels = extract_rgb_pixels(&rgb_frame, state.width, state.height);
        let frame = Frame::new(pixels, state.width, state.height, 3, state.next_index);
        state.next_index += 1;
        Some(Ok(frame))
    }
}

impl Iterator for CaptureFrameIter<'_> {
    type Item = Result<Frame, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(result) = self.try_receive() {
            return Some(result);
        }

        loop {
            let next_packet = self.state.ictx.packets().next();
            let Some((stream, packet)) = next_packet else {
                // Device stopped delivering: drain whatever the decoder holds.
                let _ = self.state.decoder.send_eof();
                let tail = self.try_receive();
                if tail.is_none() {
                    self.done = true;
                }
                return tail;
            };

            if stream.index() != self.state.video_stream_index {
                continue;
            }

            if let Err(e) = self.state.decoder.send_packet(&packet) {
                log::debug!("Dropping undecodable camera packet: {e}");
                continue;
            }

            if let Some(result) = self.try_receive() {
                return Some(result);
            }
        }
    }
}

/// Copies pixel data from an ffmpeg frame into a tightly packed RGB buffer,
/// stripping per-row stride padding.
fn extract_rgb_pixels(
    rgb_frame: &ffmpeg_next::util::frame::video::Video,
    width: u32,
    height: u32,
) -> Vec<u8> {
    let stride = rgb_frame.stride(0);
    let data = rgb_frame.data(0);
    let row_bytes = width as usize * 3;

    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let row_start = row * stride;
        pixels.extend_from_slice(&data[row_start..row_start + row_bytes]);
    }
    pixels
}
