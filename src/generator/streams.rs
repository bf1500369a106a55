//! Seed Splitter
//!
//! Derives the five independent random streams of a generator from a single
//! seed. The derivation order is part of the reproducibility contract.
//!
//! Streams are ChaCha12 generators from `rand_chacha`, so output for a seed
//! does not depend on which algorithm `rand` picks for `StdRng`.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// The five random streams owned by one generator instance
#[derive(Debug, Clone)]
pub struct RandomStreams {
    /// Initializes the hyperplane weights
    pub weight: ChaCha12Rng,
    /// Draws the example points
    pub example: ChaCha12Rng,
    /// Decides which labels are flipped
    pub noise: ChaCha12Rng,
    /// Initializes and reverses the drift directions
    pub direction: ChaCha12Rng,
    /// Picks the dimensions updated each round
    pub update_index: ChaCha12Rng,
}

impl RandomStreams {
    /// Seed one generator with `seed` and draw five successive seeds from it,
    /// in the order weight, example, noise, direction, update index.
    pub fn derive(seed: i64) -> Self {
        let mut seeder = ChaCha12Rng::seed_from_u64(seed as u64);
        let mut next = || ChaCha12Rng::seed_from_u64(seeder.next_u64());

        let weight = next();
        let example = next();
        let noise = next();
        let direction = next();
        let update_index = next();

        Self {
            weight,
            example,
            noise,
            direction,
            update_index,
        }
    }
}
