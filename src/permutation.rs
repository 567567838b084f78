//! Deterministic permutation of pixel block indices.
//!
//! Spreading payload bits over the carrier in permuted order avoids the
//! top-left clustering that makes sequential LSB embedding easy to spot.

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MASK: u32 = 0x7fff_ffff;

/// Pseudo-random ordering of pixel block indices.
///
/// Generation is fully deterministic: the same `(block_count, seed)` pair
/// yields the same sequence in every process and on every platform, which is
/// what lets the decoder rebuild the exact ordering the encoder used.
///
/// # Note
///
/// The seed only controls placement of the payload bits. It is never derived
/// from the password, which travels inside the payload itself.
#[derive(Debug, Clone)]
pub struct Permutation {
    /// Block indices in visiting order, a bijection over `0..block_count`.
    indices: Vec<u32>,
}

impl Permutation {
    /// Creates the permutation of `0..block_count` for the given seed.
    ///
    /// Starts from the identity ordering and runs a Fisher-Yates shuffle from
    /// the top index down to 1, drawing swap targets from the LCG.
    pub fn with_seed(block_count: u32, seed: u32) -> Self {
        let mut rng = Lcg31::new(seed);

        let mut indices: Vec<u32> = (0..block_count).collect();
        for i in (1..indices.len()).rev() {
            let j = (rng.advance() % (i as u32 + 1)) as usize;
            indices.swap(i, j);
        }

        Permutation { indices }
    }

    /// Iterates the block indices in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// Number of blocks covered by the permutation.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the permutation covers no blocks at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Linear congruential generator reduced to 31 bits.
///
/// Wrapping `u32` arithmetic plus the 31-bit mask keeps every step inside the
/// signed-safe range, so sequences match bit-for-bit across platforms.
struct Lcg31 {
    state: u32,
}

impl Lcg31 {
    fn new(seed: u32) -> Self {
        Lcg31 { state: seed }
    }

    /// Advances the state and returns it.
    fn advance(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state
    }
}
