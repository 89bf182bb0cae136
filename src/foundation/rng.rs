/// Source of uniformly distributed palette indices.
///
/// Implementations must return a value in `0..len` for any `len > 0`.
pub trait ColorSource {
    fn next_index(&mut self, len: usize) -> usize;
}

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded SplitMix64 stream. Equal seeds replay equal colour sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        finalize(self.state)
    }

    /// Uniform in `[0, 1)` from the top 53 bits.
    pub fn next_f64_01(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 * SCALE
    }
}

fn finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl ColorSource for Rng64 {
    /// `floor(u * len)` for `u` drawn from [`Rng64::next_f64_01`].
    fn next_index(&mut self, len: usize) -> usize {
        match len {
            0 => 0,
            n => ((self.next_f64_01() * n as f64) as usize).min(n - 1),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
