//! Frame pacing and catch-up (frame skip) computation.
//!
//! All arithmetic is in whole microseconds so the interval matches
//! `1_000_000 / fps` with integer truncation.

use std::thread;
use std::time::{Duration, Instant};

/// Frame rate used when the source reports an unusable rate.
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Ideal time between frames in microseconds for a given frame rate.
///
/// Rates that are not finite or not positive fall back to
/// [`DEFAULT_FRAME_RATE`]. The result is at least 1.
pub fn frame_interval_micros(fps: f64) -> u64 {
    let fps = if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        log::warn!(
            "Unusable frame rate {}, falling back to {} fps",
            fps,
            DEFAULT_FRAME_RATE
        );
        DEFAULT_FRAME_RATE
    };
    ((1_000_000.0 / fps) as u64).max(1)
}

/// Number of upcoming frames to drop after a frame that took `elapsed_us`.
///
/// Zero when the frame fit in its interval, otherwise the smallest `n`
/// with `interval_us * (n + 1) >= elapsed_us`.
pub fn skip_count(interval_us: u64, elapsed_us: u64) -> u32 {
    if interval_us == 0 || elapsed_us <= interval_us {
        return 0;
    }
    let n = (elapsed_us - 1) / interval_us;
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Time left to sleep so that `skip + 1` intervals pass in total.
///
/// Saturates at zero instead of going negative.
pub fn sleep_micros(interval_us: u64, skip: u32, elapsed_us: u64) -> u64 {
    interval_us
        .saturating_mul(skip as u64 + 1)
        .saturating_sub(elapsed_us)
}

/// Outcome of pacing one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Wall-clock time since the previous reference point
    pub elapsed: Duration,
    /// Frames to drop before rendering again
    pub skip: u32,
    /// Time slept to hold the frame rate
    pub slept: Duration,
}

/// Wall-clock pacing for rendered frames.
///
/// The reference point starts at construction and is reset after every
/// [`settle`](FrameClock::settle). Skipped frames never settle, so their
/// decode time counts toward the next rendered frame.
#[derive(Debug)]
pub struct FrameClock {
    interval_us: u64,
    reference: Instant,
}

impl FrameClock {
    /// Start a clock for the given frame interval.
    pub fn start(interval_us: u64) -> Self {
        Self {
            interval_us,
            reference: Instant::now(),
        }
    }

    /// Frame interval in microseconds.
    pub fn interval_micros(&self) -> u64 {
        self.interval_us
    }

    /// Measure the frame just rendered, sleep off any slack, and reset.
    pub fn settle(&mut self) -> Tick {
        let elapsed = self.reference.elapsed();
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

        let skip = skip_count(self.interval_us, elapsed_us);
        let slept = Duration::from_micros(sleep_micros(self.interval_us, skip, elapsed_us));
        if !slept.is_zero() {
            thread::sleep(slept);
        }

        self.reference = Instant::now();
        Tick {
            elapsed,
            skip,
            slept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval_common_rates() {
        assert_eq!(frame_interval_micros(30.0), 33_333);
        assert_eq!(frame_interval_micros(25.0), 40_000);
        assert_eq!(frame_interval_micros(60.0), 16_666);
        assert_eq!(frame_interval_micros(30000.0 / 1001.0), 33_366);
    }

    #[test]
    fn test_frame_interval_invalid_rates_fall_back() {
        let fallback = frame_interval_micros(DEFAULT_FRAME_RATE);
        assert_eq!(frame_interval_micros(0.0), fallback);
        assert_eq!(frame_interval_micros(-24.0), fallback);
        assert_eq!(frame_interval_micros(f64::NAN), fallback);
        assert_eq!(frame_interval_micros(f64::INFINITY), fallback);
    }

    #[test]
    fn test_frame_interval_never_zero() {
        assert_eq!(frame_interval_micros(10_000_000.0), 1);
    }

    #[test]
    fn test_skip_count_on_time() {
        assert_eq!(skip_count(33_333, 0), 0);
        assert_eq!(skip_count(33_333, 20_000), 0);
        assert_eq!(skip_count(33_333, 33_333), 0);
    }

    #[test]
    fn test_skip_count_30fps_80ms() {
        assert_eq!(skip_count(33_333, 80_000), 2);
        // Same inputs, same answer
        assert_eq!(skip_count(33_333, 80_000), 2);
    }

    #[test]
    fn test_skip_count_is_smallest() {
        let interval = 33_333;
        for elapsed in (interval + 1..interval * 12).step_by(997) {
            let n = skip_count(interval, elapsed) as u64;
            assert!(interval * (n + 1) >= elapsed, "n={} too small for {}", n, elapsed);
            assert!(n == 0 || interval * n < elapsed, "n={} not minimal for {}", n, elapsed);
        }
    }

    #[test]
    fn test_skip_count_boundaries() {
        // Just over one interval needs one skip
        assert_eq!(skip_count(33_333, 33_334), 1);
        // Exactly two intervals fits with one skip
        assert_eq!(skip_count(33_333, 66_666), 1);
        assert_eq!(skip_count(33_333, 66_667), 2);
    }

    #[test]
    fn test_skip_count_zero_interval() {
        assert_eq!(skip_count(0, 1_000), 0);
    }

    #[test]
    fn test_sleep_micros() {
        assert_eq!(sleep_micros(33_333, 0, 10_000), 23_333);
        assert_eq!(sleep_micros(33_333, 2, 80_000), 19_999);
    }

    #[test]
    fn test_sleep_micros_never_negative() {
        assert_eq!(sleep_micros(33_333, 0, 50_000), 0);
        assert_eq!(sleep_micros(33_333, 1, u64::MAX), 0);
    }

    #[test]
    fn test_clock_sleeps_out_the_interval() {
        let mut clock = FrameClock::start(5_000);
        let before = Instant::now();
        let tick = clock.settle();
        assert_eq!(tick.skip, 0);
        assert!(before.elapsed() >= Duration::from_micros(4_000));
        assert_eq!(clock.interval_micros(), 5_000);
    }

    #[test]
    fn test_clock_requests_skip_when_late() {
        let mut clock = FrameClock::start(1_000);
        thread::sleep(Duration::from_millis(5));
        let tick = clock.settle();
        assert!(tick.skip >= 4, "expected catch-up skip, got {:?}", tick);
        assert!(tick.elapsed >= Duration::from_millis(5));
    }
}
