//! Frame source module for pulling decoded video frames.
//!
//! This module provides:
//! - The [`FrameSource`] trait consumed by the render loop
//! - [`FfmpegSource`], which decodes a file through an `ffmpeg` child process
//! - Stream probing via `ffprobe` ([`probe`])

mod ffmpeg;
mod probe;
mod types;

pub use ffmpeg::FfmpegSource;
pub use probe::{parse_frame_rate, probe, StreamInfo};
pub use types::{Frame, FrameSource};
