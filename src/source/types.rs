//! Frame types and the frame source abstraction.

/// A decoded video frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw pixel data in packed RGB format (row-major)
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Frame {
    /// Number of bytes per pixel (packed RGB).
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Build a frame from packed RGB data.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` pixels.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != Self::byte_len(width, height) {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Number of bytes a packed RGB frame of the given size occupies.
    pub fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * Self::BYTES_PER_PIXEL
    }

    /// A frame with no pixels (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGB triple at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        let px = self.data.get(i..i + Self::BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2]])
    }
}

/// A stream of decoded frames in presentation order.
///
/// Implementations collapse decode errors into end of stream: once
/// `next_frame` returns `None` playback is over.
pub trait FrameSource {
    /// Pull the next decoded frame.
    fn next_frame(&mut self) -> Option<Frame>;

    /// Nominal frame rate of the stream in frames per second.
    fn frame_rate(&self) -> f64;
}
