//! RNG module - secret code generation
//!
//! Every position of the secret is an independent uniform draw from
//! `0..=max_digit`, so digits may repeat.
//!
//! Uses a small seeded LCG so a play-through can be reproduced from its seed.

use tracing::trace;

use crate::types::{Code, GameConfig, SecretCode};

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
    /// Maps through the high bits: the low bits of a power-of-two LCG cycle
    /// with very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws secret codes for new play-throughs.
#[derive(Debug, Clone)]
pub struct SecretGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl SecretGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Draw a fresh secret for `config`.
    ///
    /// Each digit lies in `0..=config.max_digit()`, the same range guesses
    /// are validated against.
    pub fn generate(&mut self, config: &GameConfig) -> SecretCode {
        let span = config.max_digit() as u32 + 1;
        let mut code = Code::default();
        for _ in 0..config.code_length() {
            // code_length <= CODE_LENGTH_MAX, so the push cannot overflow.
            code.push(self.rng.next_range(span) as u8);
        }
        trace!(state = self.rng.state(), "secret drawn");
        code
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
