//! Deterministic pseudo-random number generator.
//!
//! A SplitMix64 stream generator: small, fast, and good enough for
//! animation randomness. Platforms seed it once from a hardware source;
//! tests seed it with a constant for reproducible frames.

#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64-bit value in the stream
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// Uniform index in `0..bound`
    ///
    /// Returns 0 for a zero bound so callers never divide by zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        // Multiply-shift mapping keeps the distribution close to uniform
        // without rejection sampling.
        let r = u128::from(self.next_u64());
        ((r * bound as u128) >> 64) as usize
    }

    /// Bernoulli trial with probability `num / den`
    pub fn chance(&mut self, num: u32, den: u32) -> bool {
        if den == 0 {
            return false;
        }
        self.next_u32() % den < num
    }
}
