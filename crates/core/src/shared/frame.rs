use ndarray::{ArrayView3, ArrayViewMut3};

/// One captured webcam frame: contiguous RGB bytes in row-major order.
///
/// `index` is the capture sequence number, starting at 0 for the first
/// frame a source yields after being opened.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// 8-bit luma plane (ITU-R BT.601 weights), one byte per pixel.
    ///
    /// Single-channel frames are returned as-is.
    pub fn to_luma(&self) -> Vec<u8> {
        if self.channels == 1 {
            return self.data.clone();
        }
        let step = self.channels as usize;
        self.data
            .chunks_exact(step)
            .map(|px| {
                let y = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
                y.round().min(255.0) as u8
            })
            .collect()
    }

    /// Sets the pixel at (`x`, `y`) to `rgb`. Out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, rgb: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let mut view = self.as_ndarray_mut();
        let channels = view.shape()[2].min(3);
        for (c, value) in rgb.iter().enumerate().take(channels) {
            view[[y as usize, x as usize, c]] = *value;
        }
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
