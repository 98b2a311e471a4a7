//! Cell glyph selection.

use std::time::{SystemTime, UNIX_EPOCH};

/// How the filler glyphs of each cell are chosen.
///
/// Every cell prints the same glyph twice, so the glyph must be a single
/// printable ASCII byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphPolicy {
    /// A random lowercase letter per cell
    #[default]
    RandomLowercase,
    /// The same glyph for every cell
    Fixed(u8),
}

/// Produces the glyph for each cell according to a [`GlyphPolicy`].
#[derive(Debug, Clone)]
pub struct GlyphPicker {
    policy: GlyphPolicy,
    /// xorshift64* state; never zero
    state: u64,
}

impl GlyphPicker {
    /// Create a picker seeded from the system clock.
    pub fn new(policy: GlyphPolicy) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(policy, seed)
    }

    /// Create a picker with a fixed seed (deterministic output).
    pub fn with_seed(policy: GlyphPolicy, seed: u64) -> Self {
        Self {
            policy,
            state: seed | 1,
        }
    }

    /// Glyph for the next cell.
    pub fn next_glyph(&mut self) -> u8 {
        match self.policy {
            GlyphPolicy::Fixed(glyph) => glyph,
            GlyphPolicy::RandomLowercase => b'a' + (self.next_u64() % 26) as u8,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 32
    }
}
