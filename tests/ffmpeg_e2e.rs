//! End-to-end tests for the ffmpeg-backed frame source.
//!
//! A short test clip is generated with ffmpeg's `testsrc` into a temp dir.
//! Tests print SKIP and return when ffmpeg/ffprobe are not installed.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::AtomicBool;

use termvid::render::GlyphPolicy;
use termvid::source::probe;
use termvid::{play, EndReason, FfmpegSource, FrameSource, PlayerOptions, TerminalSize};

fn ffmpeg_available() -> bool {
    let ok = |bin: &str| {
        Command::new(bin)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    };
    ok("ffmpeg") && ok("ffprobe")
}

/// Encode a `frames`-long 32x24 clip at 25 fps.
fn make_clip(dir: &Path, frames: u32) -> PathBuf {
    let path = dir.join("clip.avi");
    let status = Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error", "-y", "-f", "lavfi", "-i"])
        .arg("testsrc=size=32x24:rate=25")
        .args(["-frames:v", &frames.to_string(), "-c:v", "mjpeg"])
        .arg(&path)
        .status()
        .expect("ffmpeg should run");
    assert!(status.success(), "failed to generate test clip");
    path
}

#[test]
fn test_probe_reports_dimensions_and_rate() {
    if !ffmpeg_available() {
        println!("SKIP: ffmpeg not installed");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let clip = make_clip(dir.path(), 5);

    let info = probe(&clip).expect("probe should succeed");
    assert_eq!(info.width, 32);
    assert_eq!(info.height, 24);
    assert!((info.frame_rate - 25.0).abs() < 0.01, "rate {}", info.frame_rate);
}

#[test]
fn test_source_yields_all_frames_then_ends() {
    if !ffmpeg_available() {
        println!("SKIP: ffmpeg not installed");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let clip = make_clip(dir.path(), 5);

    let mut source = FfmpegSource::open(&clip).expect("clip should open");
    let mut count = 0;
    while let Some(frame) = source.next_frame() {
        assert_eq!(frame.width, 32);
        assert_eq!(frame.height, 24);
        assert_eq!(frame.data.len(), 32 * 24 * 3);
        count += 1;
    }
    assert_eq!(count, 5);
    // Stays exhausted
    assert!(source.next_frame().is_none());
}

#[test]
fn test_play_clip_to_buffer() {
    if !ffmpeg_available() {
        println!("SKIP: ffmpeg not installed");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let clip = make_clip(dir.path(), 3);

    let mut source = FfmpegSource::open(&clip).unwrap();
    let mut out = Vec::new();
    let stats = play(
        &mut source,
        TerminalSize { cols: 32, rows: 12 },
        PlayerOptions {
            glyphs: GlyphPolicy::Fixed(b'o'),
        },
        &mut out,
        &AtomicBool::new(false),
    )
    .unwrap();

    assert_eq!(stats.end_reason, EndReason::EndOfStream);
    assert_eq!(stats.frames_rendered + stats.frames_skipped, 3);
    assert!(stats.frames_rendered >= 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\x1b[2J"));
    assert!(text.contains("\x1b[38;2;"));
}
