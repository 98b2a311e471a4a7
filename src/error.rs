//! Error types for playback.

use std::path::PathBuf;

/// Errors that abort a playback run.
///
/// Mid-stream decode failures are not represented here: the frame source
/// reports them as end of stream.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// The video could not be opened or probed.
    #[error("Open file failed: {}: {}", .path.display(), .reason)]
    FileOpen { path: PathBuf, reason: String },

    /// The video opened but yielded no first frame.
    #[error("Empty frame: the video has no decodable frames")]
    EmptyStream,

    /// ffmpeg or ffprobe is missing from PATH.
    #[error("FFmpeg not found. Please install ffmpeg (which provides ffprobe) and make sure it is on PATH")]
    FfmpegNotFound,

    /// The terminal size could not be queried (not attached to a tty).
    #[error("No terminal: could not query the terminal size ({0})")]
    NoTerminal(#[source] std::io::Error),

    /// Writing to the terminal failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlayerError {
    /// Whether this error ends the run with a clean exit status.
    ///
    /// A missing file and an empty stream are reported to the user but are
    /// not treated as process failures.
    pub fn is_clean_exit(&self) -> bool {
        matches!(
            self,
            PlayerError::FileOpen { .. } | PlayerError::EmptyStream
        )
    }
}
