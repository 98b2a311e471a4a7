//! Terminal management module - size query, escape sequences, and cleanup.

pub mod escape;
mod screen;
mod size;

pub use screen::{restore, ScreenGuard, RESTORE_SEQUENCE};
pub use size::TerminalSize;
