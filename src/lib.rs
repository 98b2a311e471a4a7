//! termvid library crate.
//!
//! Plays a video file in the terminal as true-color text. The binary wires
//! these pieces together; they are exposed for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod player;
pub mod render;
pub mod source;
pub mod terminal;

pub use config::{PlayerConfig, PlayerOptions};
pub use error::PlayerError;
pub use player::{play, EndReason, Playback, PlaybackStats};
pub use source::{FfmpegSource, Frame, FrameSource};
pub use terminal::TerminalSize;
