//! Frame resampling to the output geometry.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb};

use super::geometry::Geometry;
use crate::source::Frame;

/// Resize a frame to `geometry` with linear (triangle) interpolation.
///
/// Returns `None` if the frame's data does not match its dimensions.
pub fn resize_frame(frame: &Frame, geometry: Geometry) -> Option<Frame> {
    let src: ImageBuffer<Rgb<u8>, &[u8]> =
        ImageBuffer::from_raw(frame.width, frame.height, frame.data.as_slice())?;

    let resized = imageops::resize(&src, geometry.width, geometry.height, FilterType::Triangle);

    Frame::from_rgb(geometry.width, geometry.height, resized.into_raw())
}
