//! Pixel-to-escape-sequence encoding.

use super::geometry::Geometry;
use super::glyph::GlyphPicker;
use crate::source::Frame;

/// Glyphs printed per cell. Two glyphs make a roughly square cell.
pub const GLYPHS_PER_CELL: usize = 2;

/// Worst-case encoded length of one cell in bytes.
///
/// `ESC[38;2;` (7) + three 3-digit channels (9) + two `;` (2) + `m` (1)
/// + the glyphs (2).
pub const MAX_CELL_LEN: usize = 7 + 9 + 2 + 1 + GLYPHS_PER_CELL;

const FG_PREFIX: &[u8] = b"\x1b[38;2;";

/// Worst-case encoded size of a frame of `geometry` in bytes.
pub fn frame_capacity(geometry: Geometry) -> usize {
    let newlines = (geometry.height as usize).saturating_sub(1);
    geometry.cell_count() * MAX_CELL_LEN + newlines
}

/// Append a frame as true-color terminal text to `buf`.
///
/// Every cell gets its own `ESC[38;2;R;G;Bm` sequence followed by the same
/// glyph twice; rows are separated by `\n` with no trailing newline after
/// the last row.
pub fn encode_frame(frame: &Frame, glyphs: &mut GlyphPicker, buf: &mut Vec<u8>) {
    let width = frame.width as usize;
    let height = frame.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    for (y, row) in frame
        .data
        .chunks_exact(width * Frame::BYTES_PER_PIXEL)
        .take(height)
        .enumerate()
    {
        for px in row.chunks_exact(Frame::BYTES_PER_PIXEL) {
            buf.extend_from_slice(FG_PREFIX);
            push_decimal(buf, px[0]);
            buf.push(b';');
            push_decimal(buf, px[1]);
            buf.push(b';');
            push_decimal(buf, px[2]);
            buf.push(b'm');

            let glyph = glyphs.next_glyph();
            for _ in 0..GLYPHS_PER_CELL {
                buf.push(glyph);
            }
        }
        if y + 1 < height {
            buf.push(b'\n');
        }
    }
}

/// Append `value` in decimal without leading zeros.
fn push_decimal(buf: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        buf.push(b'0' + value / 100);
    }
    if value >= 10 {
        buf.push(b'0' + (value / 10) % 10);
    }
    buf.push(b'0' + value % 10);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GlyphPolicy;

    fn fixed_picker() -> GlyphPicker {
        GlyphPicker::with_seed(GlyphPolicy::Fixed(b'o'), 0)
    }

    fn make_frame(width: u32, height: u32, data: Vec<u8>) -> Frame {
        Frame::from_rgb(width, height, data).unwrap()
    }

    #[test]
    fn test_push_decimal() {
        for (value, expected) in [(0u8, "0"), (7, "7"), (10, "10"), (99, "99"), (100, "100"), (255, "255")] {
            let mut buf = Vec::new();
            push_decimal(&mut buf, value);
            assert_eq!(String::from_utf8(buf).unwrap(), expected);
        }
    }

    #[test]
    fn test_single_cell_exact_bytes() {
        let frame = make_frame(1, 1, vec![12, 200, 3]);
        let mut buf = Vec::new();
        encode_frame(&frame, &mut fixed_picker(), &mut buf);
        assert_eq!(buf, b"\x1b[38;2;12;200;3moo");
    }

    #[test]
    fn test_rows_separated_without_trailing_newline() {
        let frame = make_frame(2, 2, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let mut buf = Vec::new();
        encode_frame(&frame, &mut fixed_picker(), &mut buf);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\x1b[38;2;1;2;3moo\x1b[38;2;4;5;6moo\n\x1b[38;2;7;8;9moo\x1b[38;2;10;11;12moo"
        );
    }

    #[test]
    fn test_identical_neighbours_each_get_a_sequence() {
        let frame = make_frame(3, 1, vec![50, 60, 70, 50, 60, 70, 50, 60, 70]);
        let mut buf = Vec::new();
        encode_frame(&frame, &mut fixed_picker(), &mut buf);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("\x1b[38;2;50;60;70m").count(), 3);
    }

    #[test]
    fn test_random_glyphs_are_doubled() {
        let frame = make_frame(4, 1, vec![0; 12]);
        let mut picker = GlyphPicker::with_seed(GlyphPolicy::RandomLowercase, 99);
        let mut buf = Vec::new();
        encode_frame(&frame, &mut picker, &mut buf);
        let text = String::from_utf8(buf).unwrap();
        let cells: Vec<&str> = text.split("\x1b[38;2;0;0;0m").skip(1).collect();
        assert_eq!(cells.len(), 4);
        for cell in cells {
            let bytes = cell.as_bytes();
            assert_eq!(bytes.len(), 2);
            assert_eq!(bytes[0], bytes[1]);
            assert!(bytes[0].is_ascii_lowercase());
        }
    }

    #[test]
    fn test_buffer_reused_without_growth() {
        let geometry = Geometry {
            width: 3,
            height: 2,
        };
        let mut buf = Vec::with_capacity(frame_capacity(geometry));
        let capacity = buf.capacity();

        // Worst case: every channel three digits
        let frame = make_frame(3, 2, vec![255; 18]);
        for _ in 0..5 {
            buf.clear();
            encode_frame(&frame, &mut fixed_picker(), &mut buf);
            assert!(buf.len() <= capacity);
            assert_eq!(buf.capacity(), capacity);
        }
        assert_eq!(buf.len(), 6 * MAX_CELL_LEN + 1);
    }

    #[test]
    fn test_appends_after_existing_bytes() {
        let mut buf = b"\x1b[0;0H".to_vec();
        let frame = make_frame(1, 1, vec![0, 0, 0]);
        encode_frame(&frame, &mut fixed_picker(), &mut buf);
        assert_eq!(buf, b"\x1b[0;0H\x1b[38;2;0;0;0moo");
    }

    #[test]
    fn test_empty_frame_appends_nothing() {
        let mut buf = b"keep".to_vec();
        let frame = make_frame(0, 0, Vec::new());
        encode_frame(&frame, &mut fixed_picker(), &mut buf);
        assert_eq!(buf, b"keep");
    }
}
