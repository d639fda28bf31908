//! RNG module - deterministic randomness for the engine
//!
//! Piece draws are independent and uniform over the 7 kinds (no bag). The
//! same generator also samples palettes and feeds the attract-mode demo, so a
//! whole session replays exactly from its seed.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle with
    /// short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform piece kind
    pub fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Draw `N` distinct indices from `0..len` without replacement.
    ///
    /// `len` must be at least `N`.
    pub fn sample_distinct<const N: usize>(&mut self, len: usize) -> [usize; N] {
        debug_assert!(len >= N);
        let mut out = [0usize; N];
        // Partial Fisher-Yates over an implicit 0..len identity; `swapped`
        // records the few displaced entries.
        let mut swapped: ArrayVec<(usize, usize), N> = ArrayVec::new();
        let lookup = |swapped: &ArrayVec<(usize, usize), N>, i: usize| {
            swapped
                .iter()
                .rev()
                .find(|(k, _)| *k == i)
                .map_or(i, |(_, v)| *v)
        };
        for (n, slot) in out.iter_mut().enumerate() {
            let j = n + self.next_range((len - n) as u32) as usize;
            let picked = lookup(&swapped, j);
            let displaced = lookup(&swapped, n);
            *slot = picked;
            // position j now holds whatever was at n; at most N pushes
            swapped.push((j, displaced));
        }
        out
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
