//! ANSI/VT escape sequences written by the player.

/// Clear the whole screen (`ED 2`).
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// Move the cursor to the top-left cell.
pub const CURSOR_HOME: &[u8] = b"\x1b[0;0H";

/// Reset colors and other SGR attributes.
pub const RESET_ATTRIBUTES: &[u8] = b"\x1b[0m";

/// Hide the text cursor (DECTCEM).
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

/// Show the text cursor (DECTCEM).
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
