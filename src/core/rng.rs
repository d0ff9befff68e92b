//! Deterministic random number generation.
//!
//! Only one decision in a game of Kalah is random: who moves first when the
//! configuration asks for a seeded draw. The same seed always yields the same
//! sequence of starting sides, so hosts can replay a session exactly.
//!
//! ```
//! use kalah_engine::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.choose_side(), rng2.choose_side());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::Side;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a side with equal probability.
    pub fn choose_side(&mut self) -> Side {
        if self.inner.gen_bool(0.5) {
            Side::A
        } else {
            Side::B
        }
    }
}
