//! Playback module: the render loop and its frame pacing.
//!
//! The loop pulls frames from a [`FrameSource`](crate::source::FrameSource),
//! drops frames to catch up when rendering runs slower than real time, and
//! writes each rendered frame to the terminal in one go.

mod render_loop;
pub mod timing;

pub use render_loop::{play, EndReason, Playback, PlaybackStats, PlayerState, RenderLoop};
pub use timing::{FrameClock, Tick, DEFAULT_FRAME_RATE};
