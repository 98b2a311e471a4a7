//! FFmpeg-backed frame source.
//!
//! Spawns `ffmpeg` to decode the first video stream to raw `rgb24` frames
//! on stdout and reads them back one frame at a time.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};
use std::thread::{self, JoinHandle};

use super::probe::{probe, StreamInfo};
use super::types::{Frame, FrameSource};
use crate::error::PlayerError;

/// Frame source that decodes a video file through an `ffmpeg` child process.
pub struct FfmpegSource {
    /// The ffmpeg child process
    child: Child,
    /// Raw frame stream (ffmpeg stdout)
    stdout: ChildStdout,
    /// Handle for the stderr reader thread
    stderr_thread: Option<JoinHandle<()>>,
    /// Probed stream dimensions and frame rate
    info: StreamInfo,
    /// Set once a read fails; no further reads are attempted
    exhausted: bool,
}

impl std::fmt::Debug for FfmpegSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegSource")
            .field("info", &self.info)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl FfmpegSource {
    /// Open a video file for decoding.
    ///
    /// Probes the stream with `ffprobe`, then spawns the `ffmpeg` decoder.
    ///
    /// # Errors
    /// * `PlayerError::FileOpen` - If the file is missing or holds no video stream
    /// * `PlayerError::FfmpegNotFound` - If ffmpeg/ffprobe are not installed
    pub fn open(path: &Path) -> Result<Self, PlayerError> {
        if let Err(e) = std::fs::metadata(path) {
            return Err(PlayerError::FileOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }

        let info = probe(path)?;
        log::info!(
            "Opened {}: {}x{} @ {:.3} fps",
            path.display(),
            info.width,
            info.height,
            info.frame_rate
        );

        let mut child = Command::new("ffmpeg")
            .args(["-hide_banner", "-loglevel", "error", "-nostdin", "-noautorotate"])
            .arg("-i")
            .arg(path)
            .args(["-map", "0:v:0", "-f", "rawvideo", "-pix_fmt", "rgb24", "-"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlayerError::FfmpegNotFound
                } else {
                    PlayerError::FileOpen {
                        path: path.to_path_buf(),
                        reason: format!("failed to spawn ffmpeg: {}", e),
                    }
                }
            })?;

        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(PlayerError::FileOpen {
                path: path.to_path_buf(),
                reason: "failed to capture ffmpeg stdout".to_string(),
            });
        };

        // Drain stderr so a chatty decoder can never block on a full pipe
        let stderr_thread = child.stderr.take().map(|stderr| {
            thread::spawn(move || {
                let reader = BufReader::new(stderr);
                for line in reader.lines() {
                    match line {
                        Ok(l) => log::debug!("[ffmpeg] {}", l),
                        Err(_) => break,
                    }
                }
            })
        });

        Ok(Self {
            child,
            stdout,
            stderr_thread,
            info,
            exhausted: false,
        })
    }
}

impl FrameSource for FfmpegSource {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.exhausted {
            return None;
        }

        let mut data = vec![0u8; Frame::byte_len(self.info.width, self.info.height)];
        match self.stdout.read_exact(&mut data) {
            Ok(()) => Frame::from_rgb(self.info.width, self.info.height, data),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::UnexpectedEof {
                    log::debug!("Frame read failed, treating as end of stream: {}", e);
                }
                self.exhausted = true;
                None
            }
        }
    }

    fn frame_rate(&self) -> f64 {
        self.info.frame_rate
    }
}

impl Drop for FfmpegSource {
    fn drop(&mut self) {
        // Best-effort cleanup; the decoder may already have exited
        let _ = self.child.kill();
        let _ = self.child.wait();
        if let Some(handle) = self.stderr_thread.take() {
            let _ = handle.join();
        }
    }
}
