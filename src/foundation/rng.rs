/// Source of uniform random draws used for glitch injection.
///
/// Engines are generic over this so tests and traces can pin the sequence.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64_01(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be > 0.
    fn next_index(&mut self, len: usize) -> usize {
        let i = (self.next_f64_01() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

/// Seeded SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Derive an independent stream for `index` from a shared seed.
    pub fn for_stream(seed: u64, index: u64) -> Self {
        Self::new(seed ^ index.wrapping_add(1).wrapping_mul(0xD6E8_FEB8_6659_FD93))
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for Rng64 {
    fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
