//! RNG module - deterministic tile spawning
//!
//! A simple LCG drives every random choice in the engine (spawn cell and
//! spawn value), so a session seed reproduces the whole game.

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
        // LCG low bits cycle with short periods, so reduce through the high
        // bits with a widening multiply instead of a modulo.
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Get the current RNG state (for restarting a game with a fresh sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}
