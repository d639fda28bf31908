//! Palette - maps cell values onto the colour table
//!
//! Cell values 1..=3 name palette slots rather than colours. On every level up
//! the palette is resampled, so every block on the board changes colour at
//! once.

use crate::rng::SimpleRng;
use crate::types::{Cell, COLOURS, EMPTY, PALETTE_DRAWS, PALETTE_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Colour-table indices. Four are sampled, only the first three are
    /// reachable from a cell value.
    slots: [usize; PALETTE_DRAWS],
}

impl Palette {
    pub fn new() -> Self {
        Self { slots: [0, 1, 2, 3] }
    }

    /// Resample without replacement from the colour table.
    pub fn regenerate(&mut self, rng: &mut SimpleRng) {
        self.slots = rng.sample_distinct::<PALETTE_DRAWS>(COLOURS.len());
    }

    /// Colour-table indices backing the three cell values.
    pub fn slots(&self) -> [usize; PALETTE_SLOTS] {
        [self.slots[0], self.slots[1], self.slots[2]]
    }

    /// ARGB colour for a cell value, or None for empty/unknown values.
    pub fn colour(&self, cell: Cell) -> Option<u32> {
        if cell == EMPTY || cell as usize > PALETTE_SLOTS {
            return None;
        }
        Some(COLOURS[self.slots[cell as usize - 1]])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
