//! Screen state management with panic-safe cleanup.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use super::escape::HIDE_CURSOR;

/// Set while playback owns the screen (checked by the panic hook)
pub(crate) static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Bytes that hand the terminal back to the shell: default colors,
/// visible cursor, and a fresh line below the last frame.
pub const RESTORE_SEQUENCE: &[u8] = b"\x1b[0m\x1b[?25h\n";

/// Guard that restores colors and the cursor when playback ends.
///
/// Covers normal exits, early returns and panics. Without it a run that
/// stops mid-frame leaves the shell printing in the last pixel's color.
pub struct ScreenGuard {
    /// Whether this guard is responsible for cleanup
    active: bool,
}

impl ScreenGuard {
    /// Hide the cursor on stdout and return a guard that restores it on drop.
    ///
    /// # Errors
    /// Returns an error if stdout cannot be written.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        let mut stdout = io::stdout();
        stdout.write_all(HIDE_CURSOR)?;
        stdout.flush()?;
        SCREEN_ACTIVE.store(true, Ordering::SeqCst);

        Ok(Self { active: true })
    }

    /// Restore the screen now instead of on drop.
    /// After calling this, the guard's drop will be a no-op.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            SCREEN_ACTIVE.store(false, Ordering::SeqCst);
            restore(&mut io::stdout())?;
        }
        Ok(())
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if self.active {
            SCREEN_ACTIVE.store(false, Ordering::SeqCst);
            // Best-effort cleanup - ignore errors during drop
            let _ = restore(&mut io::stdout());
        }
    }
}

/// Write [`RESTORE_SEQUENCE`] and flush.
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(RESTORE_SEQUENCE)?;
    out.flush()
}

/// Install a panic hook that restores the screen before the panic message
/// is printed.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = restore(&mut io::stdout());
        }
        original_hook(panic_info);
    }));
}
