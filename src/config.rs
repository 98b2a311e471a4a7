//! Playback configuration.
//!
//! Everything the render loop needs is computed once before playback and
//! passed in explicitly through [`PlayerConfig`].

use crate::error::PlayerError;
use crate::player::timing::frame_interval_micros;
use crate::render::{Geometry, GlyphPolicy};
use crate::source::Frame;
use crate::terminal::TerminalSize;

/// Caller-chosen playback policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerOptions {
    /// How cell glyphs are picked
    pub glyphs: GlyphPolicy,
}

/// Fixed parameters for one playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Output size in cells
    pub geometry: Geometry,
    /// Ideal time between frames in microseconds
    pub interval_us: u64,
    /// How cell glyphs are picked
    pub glyphs: GlyphPolicy,
}

impl PlayerConfig {
    /// Build the run configuration from the first frame, the terminal size,
    /// and the source frame rate.
    ///
    /// # Errors
    /// * `PlayerError::EmptyStream` - If the first frame has no pixels
    /// * `PlayerError::NoTerminal` - If the terminal reports a zero size
    pub fn new(
        first: &Frame,
        terminal: TerminalSize,
        frame_rate: f64,
        options: PlayerOptions,
    ) -> Result<Self, PlayerError> {
        if first.is_empty() {
            return Err(PlayerError::EmptyStream);
        }

        let (cols, rows) = terminal.cell_bounds();
        let geometry = Geometry::fit(first.width, first.height, cols, rows).ok_or_else(|| {
            PlayerError::NoTerminal(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("terminal size {}x{} is unusable", terminal.cols, terminal.rows),
            ))
        })?;

        Ok(Self {
            geometry,
            interval_us: frame_interval_micros(frame_rate),
            glyphs: options.glyphs,
        })
    }
}
