//! Output geometry calculation (letterboxing into the terminal).

/// Target size of the rendered image in character cells.
///
/// Computed once from the first frame and the terminal size, then fixed
/// for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Width in cells
    pub width: u32,
    /// Height in cells (terminal rows)
    pub height: u32,
}

impl Geometry {
    /// Fit a source image into a cell grid, preserving its aspect ratio.
    ///
    /// If the bounds are at least as wide (in aspect ratio) as the source,
    /// height is the binding dimension: the result uses every row and the
    /// width is derived from it. Otherwise every column is used and the
    /// height is derived.
    ///
    /// # Arguments
    /// * `src_width` - Width of the source image in pixels
    /// * `src_height` - Height of the source image in pixels
    /// * `max_cols` - Available width in cells
    /// * `max_rows` - Available height in cells
    ///
    /// # Returns
    /// `None` if any input is zero.
    ///
    /// # Example
    /// ```
    /// use termvid::render::Geometry;
    ///
    /// // 16:9 video in a 100x30 cell grid: height binds
    /// let g = Geometry::fit(1920, 1080, 100, 30).unwrap();
    /// assert_eq!((g.width, g.height), (53, 30));
    /// ```
    pub fn fit(src_width: u32, src_height: u32, max_cols: u16, max_rows: u16) -> Option<Self> {
        if src_width == 0 || src_height == 0 || max_cols == 0 || max_rows == 0 {
            return None;
        }

        let (src_w, src_h) = (src_width as u64, src_height as u64);
        let (cols, rows) = (max_cols as u64, max_rows as u64);

        // cols / rows >= src_w / src_h, cross-multiplied to stay exact
        let geometry = if cols * src_h >= rows * src_w {
            let width = rows * src_w / src_h;
            Self {
                width: width.clamp(1, cols) as u32,
                height: rows as u32,
            }
        } else {
            let height = cols * src_h / src_w;
            Self {
                width: cols as u32,
                height: height.clamp(1, rows) as u32,
            }
        };

        Some(geometry)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
