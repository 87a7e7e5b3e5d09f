//! Randomness for tile spawning.
//!
//! The engine never reaches for ambient randomness. It draws through the
//! [`TileSource`] trait, so callers can seed it ([`GameRng`]) or script it
//! outright in tests.
//!
//! ```
//! use rust_2048::core::{GameRng, TileSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick_index(16), b.pick_index(16));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the two random choices a spawn needs.
pub trait TileSource {
    /// Choose an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Return true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<T: TileSource + ?Sized> TileSource for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Seedable RNG for tile spawning.
///
/// Uses ChaCha8: fast, and its stream position can be saved and restored.
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

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl TileSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }
}

/// Serializable RNG state.
///
/// The ChaCha8 word position makes capture O(1) no matter how many
/// numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
