//! Command handler for playing a file.

use std::io;
use std::path::Path;

use crate::config::PlayerOptions;
use crate::error::PlayerError;
use crate::interrupt;
use crate::player::{Playback, PlaybackStats};
use crate::source::FfmpegSource;
use crate::terminal::{ScreenGuard, TerminalSize};

/// Play `path` on the controlling terminal.
///
/// Opens the source and decodes the first frame before touching the
/// screen, so every failure before playback leaves the terminal untouched.
///
/// # Errors
/// * `PlayerError::FileOpen` / `PlayerError::FfmpegNotFound` - If the video can't be opened
/// * `PlayerError::NoTerminal` - If there is no terminal to draw on
/// * `PlayerError::EmptyStream` - If the video has no frames
/// * `PlayerError::Io` - If writing to the terminal fails
pub fn play_file(path: &Path, options: PlayerOptions) -> Result<PlaybackStats, PlayerError> {
    let mut source = FfmpegSource::open(path)?;
    let terminal = TerminalSize::query().map_err(PlayerError::NoTerminal)?;
    log::debug!("Terminal size: {}x{}", terminal.cols, terminal.rows);

    let playback = Playback::prepare(&mut source, terminal, options)?;

    let mut guard = ScreenGuard::enter()?;
    let mut stdout = io::stdout().lock();
    let stats = playback.run(&mut source, &mut stdout, interrupt::stop_flag());
    drop(stdout);
    guard.exit()?;

    stats
}
