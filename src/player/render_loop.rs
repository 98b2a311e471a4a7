//! The playback state machine.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use super::timing::FrameClock;
use crate::config::{PlayerConfig, PlayerOptions};
use crate::error::PlayerError;
use crate::render::{encode_frame, frame_capacity, resize_frame, GlyphPicker};
use crate::source::{Frame, FrameSource};
use crate::terminal::escape::{CLEAR_SCREEN, CURSOR_HOME};
use crate::terminal::TerminalSize;

/// Render loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Running,
    Done,
}

/// Why playback stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The source ran out of frames or failed to decode one
    EndOfStream,
    /// The stop flag was raised (Ctrl+C)
    Interrupted,
}

/// Counters reported when playback ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStats {
    pub frames_rendered: u64,
    pub frames_skipped: u64,
    pub end_reason: EndReason,
}

/// What the loop did with one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameOutcome {
    /// Dropped to catch up with the clock
    Skipped,
    /// Encoded and written to the terminal
    Rendered,
    /// Pixel data did not match the frame dimensions
    Malformed,
}

/// Renders frames from a source to a terminal writer at the source frame rate.
pub struct RenderLoop {
    config: PlayerConfig,
    glyphs: GlyphPicker,
    /// Encoded frame, reused every iteration
    buffer: Vec<u8>,
    /// Frames still to drop before the next render
    skip: u32,
    state: PlayerState,
    frames_rendered: u64,
    frames_skipped: u64,
}

impl RenderLoop {
    /// Create a loop for `config` with a clock-seeded glyph picker.
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_glyphs(config, GlyphPicker::new(config.glyphs))
    }

    /// Create a loop with an explicit glyph picker.
    pub fn with_glyphs(config: PlayerConfig, glyphs: GlyphPicker) -> Self {
        let capacity = CURSOR_HOME.len() + frame_capacity(config.geometry);
        Self {
            config,
            glyphs,
            buffer: Vec::with_capacity(capacity),
            skip: 0,
            state: PlayerState::Running,
            frames_rendered: 0,
            frames_skipped: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Run until the source is exhausted or `stop` is raised.
    ///
    /// `first` is rendered before anything is pulled from `source`.
    ///
    /// # Errors
    /// Returns `PlayerError::Io` if writing to `out` fails.
    pub fn run<S, W>(
        &mut self,
        first: Frame,
        source: &mut S,
        out: &mut W,
        stop: &AtomicBool,
    ) -> Result<PlaybackStats, PlayerError>
    where
        S: FrameSource + ?Sized,
        W: Write + ?Sized,
    {
        let mut clock = FrameClock::start(self.config.interval_us);
        let mut pending = Some(first);
        let mut end_reason = EndReason::EndOfStream;

        while self.state == PlayerState::Running {
            if stop.load(Ordering::SeqCst) {
                end_reason = EndReason::Interrupted;
                self.state = PlayerState::Done;
                continue;
            }

            let Some(frame) = pending.take().or_else(|| source.next_frame()) else {
                // SIGINT also reaches the decoder, so its pipe can close first
                if stop.load(Ordering::SeqCst) {
                    end_reason = EndReason::Interrupted;
                }
                self.state = PlayerState::Done;
                continue;
            };

            match self.feed(frame, out)? {
                FrameOutcome::Skipped => {}
                FrameOutcome::Malformed => self.state = PlayerState::Done,
                FrameOutcome::Rendered => {
                    let tick = clock.settle();
                    self.skip = tick.skip;
                    if tick.skip > 0 {
                        log::debug!(
                            "Frame took {:?} (interval {}us), skipping {} frame(s)",
                            tick.elapsed,
                            clock.interval_micros(),
                            tick.skip
                        );
                    }
                }
            }
        }

        Ok(PlaybackStats {
            frames_rendered: self.frames_rendered,
            frames_skipped: self.frames_skipped,
            end_reason,
        })
    }

    /// Handle one frame: drop it while the skip counter is non-zero,
    /// otherwise resize, encode and write it as a single buffer.
    pub(crate) fn feed<W>(
        &mut self,
        frame: Frame,
        out: &mut W,
    ) -> Result<FrameOutcome, PlayerError>
    where
        W: Write + ?Sized,
    {
        if self.skip > 0 {
            self.skip -= 1;
            self.frames_skipped += 1;
            return Ok(FrameOutcome::Skipped);
        }

        let Some(resized) = resize_frame(&frame, self.config.geometry) else {
            log::warn!(
                "Frame {}x{} has {} bytes of pixel data, stopping",
                frame.width,
                frame.height,
                frame.data.len()
            );
            return Ok(FrameOutcome::Malformed);
        };
        drop(frame);

        self.buffer.clear();
        self.buffer.extend_from_slice(CURSOR_HOME);
        encode_frame(&resized, &mut self.glyphs, &mut self.buffer);
        out.write_all(&self.buffer)?;
        out.flush()?;
        self.frames_rendered += 1;

        Ok(FrameOutcome::Rendered)
    }
}

/// A validated first frame and the configuration derived from it.
///
/// Nothing is written to the terminal until [`Playback::run`].
#[derive(Debug)]
pub struct Playback {
    first: Frame,
    config: PlayerConfig,
}

impl Playback {
    /// Pull and validate the first frame and fit the output into `terminal`.
    ///
    /// # Errors
    /// * `PlayerError::EmptyStream` - If the source has no first frame
    /// * `PlayerError::NoTerminal` - If `terminal` has a zero dimension
    pub fn prepare<S>(
        source: &mut S,
        terminal: TerminalSize,
        options: PlayerOptions,
    ) -> Result<Self, PlayerError>
    where
        S: FrameSource + ?Sized,
    {
        let first = source.next_frame().ok_or(PlayerError::EmptyStream)?;
        let config = PlayerConfig::new(&first, terminal, source.frame_rate(), options)?;
        log::info!(
            "Rendering {}x{} source as {}x{} cells, frame interval {}us",
            first.width,
            first.height,
            config.geometry.width,
            config.geometry.height,
            config.interval_us
        );
        Ok(Self { first, config })
    }

    /// Clear the screen once and run the render loop, starting with the
    /// first frame.
    ///
    /// # Errors
    /// Returns `PlayerError::Io` if writing to `out` fails.
    pub fn run<S, W>(
        self,
        source: &mut S,
        out: &mut W,
        stop: &AtomicBool,
    ) -> Result<PlaybackStats, PlayerError>
    where
        S: FrameSource + ?Sized,
        W: Write + ?Sized,
    {
        out.write_all(CLEAR_SCREEN)?;
        out.flush()?;

        let stats = RenderLoop::new(self.config).run(self.first, source, out, stop)?;
        log::info!(
            "Playback finished ({:?}): {} rendered, {} skipped",
            stats.end_reason,
            stats.frames_rendered,
            stats.frames_skipped
        );
        Ok(stats)
    }
}

/// Play a frame source to `out`.
///
/// Shorthand for [`Playback::prepare`] followed by [`Playback::run`].
///
/// # Errors
/// * `PlayerError::EmptyStream` - If the source has no first frame
/// * `PlayerError::NoTerminal` - If `terminal` has a zero dimension
/// * `PlayerError::Io` - If writing to `out` fails
pub fn play<S, W>(
    source: &mut S,
    terminal: TerminalSize,
    options: PlayerOptions,
    out: &mut W,
    stop: &AtomicBool,
) -> Result<PlaybackStats, PlayerError>
where
    S: FrameSource + ?Sized,
    W: Write + ?Sized,
{
    Playback::prepare(source, terminal, options)?.run(source, out, stop)
}
