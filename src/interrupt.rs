//! Ctrl+C handling.
//!
//! The handler only raises a flag; the render loop checks it once per
//! iteration and stops cleanly so the screen guard can restore the terminal.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for handling Ctrl+C across the application
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// The flag raised by the Ctrl+C handler.
pub fn stop_flag() -> &'static AtomicBool {
    &CTRLC_RECEIVED
}

/// Set up the Ctrl+C handler.
///
/// This should be called once at program startup.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_flag_is_the_ctrlc_flag() {
        assert!(std::ptr::eq(stop_flag(), &CTRLC_RECEIVED));
        assert_eq!(
            stop_flag().load(Ordering::SeqCst),
            CTRLC_RECEIVED.load(Ordering::SeqCst)
        );
    }
}
