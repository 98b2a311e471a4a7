//! Terminal size query.

use std::io;

use crate::render::GLYPHS_PER_CELL;

/// Terminal dimensions in character columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

impl TerminalSize {
    /// Query the size of the controlling terminal.
    ///
    /// # Errors
    /// Returns an error if there is no terminal or it reports a zero size.
    pub fn query() -> io::Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        if cols == 0 || rows == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "terminal reported zero size",
            ));
        }
        Ok(Self { cols, rows })
    }

    /// Available area in render cells as `(cols, rows)`.
    ///
    /// Each cell prints [`GLYPHS_PER_CELL`] glyphs, so it spans that many
    /// terminal columns.
    pub fn cell_bounds(&self) -> (u16, u16) {
        let cols = (self.cols as usize / GLYPHS_PER_CELL).max(1) as u16;
        (cols, self.rows)
    }
}
