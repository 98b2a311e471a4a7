//! Stream probing via `ffprobe`.
//!
//! Reads the first video stream's dimensions and frame rate from
//! `ffprobe -of json` output.

use serde::Deserialize;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::PlayerError;

/// Dimensions and nominal frame rate of a video stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
    /// Frames per second; `0.0` if ffprobe reported nothing usable
    pub frame_rate: f64,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    width: Option<u32>,
    height: Option<u32>,
    avg_frame_rate: Option<String>,
    r_frame_rate: Option<String>,
}

/// Probe the first video stream of `path`.
///
/// # Errors
/// * `PlayerError::FfmpegNotFound` - If `ffprobe` is not on PATH
/// * `PlayerError::FileOpen` - If ffprobe fails or finds no video stream
pub fn probe(path: &Path) -> Result<StreamInfo, PlayerError> {
    let output = Command::new("ffprobe")
        .args(["-v", "error", "-select_streams", "v:0", "-show_entries"])
        .arg("stream=width,height,avg_frame_rate,r_frame_rate")
        .args(["-of", "json"])
        .arg(path)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlayerError::FfmpegNotFound
            } else {
                PlayerError::FileOpen {
                    path: path.to_path_buf(),
                    reason: format!("failed to run ffprobe: {}", e),
                }
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PlayerError::FileOpen {
            path: path.to_path_buf(),
            reason: stderr.trim().to_string(),
        });
    }

    parse_probe_output(&output.stdout).map_err(|reason| PlayerError::FileOpen {
        path: path.to_path_buf(),
        reason,
    })
}

/// Parse ffprobe's JSON output into a [`StreamInfo`].
fn parse_probe_output(json: &[u8]) -> Result<StreamInfo, String> {
    let parsed: ProbeOutput =
        serde_json::from_slice(json).map_err(|e| format!("unreadable ffprobe output: {}", e))?;

    let stream = parsed
        .streams
        .into_iter()
        .next()
        .ok_or_else(|| "no video stream found".to_string())?;

    let (Some(width), Some(height)) = (stream.width, stream.height) else {
        return Err("video stream has no dimensions".to_string());
    };

    // avg_frame_rate is "0/0" for some containers; fall back to r_frame_rate
    let frame_rate = stream
        .avg_frame_rate
        .as_deref()
        .and_then(parse_frame_rate)
        .or_else(|| stream.r_frame_rate.as_deref().and_then(parse_frame_rate))
        .unwrap_or(0.0);

    Ok(StreamInfo {
        width,
        height,
        frame_rate,
    })
}

/// Parse an ffprobe rational (`"30000/1001"`) or plain number (`"25"`).
///
/// Returns `None` for zero, negative, or malformed rates.
pub fn parse_frame_rate(s: &str) -> Option<f64> {
    let rate = match s.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => s.trim().parse().ok()?,
    };
    (rate.is_finite() && rate > 0.0).then_some(rate)
}
