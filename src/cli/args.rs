//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Play a video in the terminal as true-color text
#[derive(Parser, Debug)]
#[command(name = "termvid")]
#[command(version, about = "Play a video in the terminal as true-color text", long_about = None)]
#[command(after_help = "EXAMPLES:
    termvid movie.mp4

Requires ffmpeg and ffprobe on PATH and a terminal with 24-bit color support.
Press Ctrl+C to stop playback.")]
pub struct Args {
    /// Video file to play
    pub path: PathBuf,
}
