//! RNG module - seedable randomness for particle attributes.
//!
//! A simple LCG keeps the simulation deterministic under a fixed seed, so
//! tests can assert exact particle trajectories without stubbing anything.

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random value in the inclusive range [lo, hi]
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.next_range(hi - lo + 1)
    }

    /// Generate a random f32 in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits give an exact dyadic fraction in [0, 1).
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Generate a random f32 uniformly in [lo, hi)
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }
}
