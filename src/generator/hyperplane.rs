//! Hyperplane State
//!
//! The decision boundary is `sum_i w_i * x_i = threshold`, where the
//! threshold is always half the sum of the weights. Each weight drifts in
//! its own direction.

use rand::Rng;

/// Below this draw a freshly initialized direction points down
const DOWNWARD_PROBABILITY: f64 = 0.5;

/// Direction in which a weight moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// -1
    Down,
    /// +1
    Up,
}

impl Direction {
    /// Draw a direction: down if the uniform draw is below one half
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f64>() < DOWNWARD_PROBABILITY {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// -1.0 or +1.0
    pub fn sign(self) -> f64 {
        match self {
            Direction::Down => -1.0,
            Direction::Up => 1.0,
        }
    }

    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }
}

/// Current hyperplane of a generator.
///
/// Only the owning generator mutates it; everyone else gets `&HyperplaneState`.
/// Every constructor goes through [`HyperplaneState::from_parts`], which
/// checks the lengths and derives the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct HyperplaneState {
    weights: Vec<f64>,
    directions: Vec<Direction>,
    threshold: f64,
}

impl HyperplaneState {
    /// Initialize directions from the direction stream and weights from the
    /// weight stream.
    pub fn initialize<D, W>(dimensions: usize, direction_rng: &mut D, weight_rng: &mut W) -> Self
    where
        D: Rng + ?Sized,
        W: Rng + ?Sized,
    {
        let directions = init_directions(dimensions, direction_rng);
        let weights = init_weights(dimensions, weight_rng);
        Self::from_parts(weights, directions)
    }

    /// Build a state from explicit weights and directions.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors differ in length.
    pub fn from_parts(weights: Vec<f64>, directions: Vec<Direction>) -> Self {
        assert_eq!(
            weights.len(),
            directions.len(),
            "weights and directions must have the same length"
        );
        let threshold = compute_threshold(&weights);
        Self {
            weights,
            directions,
            threshold,
        }
    }

    /// Number of weights
    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    /// Current weights, one per dimension
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Current drift direction of each weight
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Half the sum of the current weights
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Weighted sum of a point
    pub fn score(&self, point: &[f64]) -> f64 {
        point
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum()
    }

    /// True if the point lies on or above the hyperplane
    pub fn classify(&self, point: &[f64]) -> bool {
        self.score(point) >= self.threshold
    }

    /// Move weight `index` one step along its direction.
    ///
    /// The threshold is left for [`HyperplaneState::refresh_threshold`] so a
    /// round of updates recomputes it once.
    pub(crate) fn shift_weight(&mut self, index: usize, step: f64) {
        self.weights[index] += self.directions[index].sign() * step;
    }

    /// Flip the drift direction of weight `index`
    pub(crate) fn reverse_direction(&mut self, index: usize) {
        self.directions[index] = self.directions[index].reversed();
    }

    /// Recompute the threshold from the current weights
    pub(crate) fn refresh_threshold(&mut self) {
        self.threshold = compute_threshold(&self.weights);
    }
}

/// One direction per dimension
pub fn init_directions<R: Rng + ?Sized>(dimensions: usize, rng: &mut R) -> Vec<Direction> {
    (0..dimensions).map(|_| Direction::sample(rng)).collect()
}

/// One uniform weight in [0, 1) per dimension
pub fn init_weights<R: Rng + ?Sized>(dimensions: usize, rng: &mut R) -> Vec<f64> {
    (0..dimensions).map(|_| rng.gen::<f64>()).collect()
}

/// Half the sum of the weights
pub fn compute_threshold(weights: &[f64]) -> f64 {
    weights.iter().sum::<f64>() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_threshold_is_half_sum() {
        assert!((compute_threshold(&[0.2, 0.4, 0.6]) - 0.6).abs() < 1e-12);
        assert_eq!(compute_threshold(&[1.0, 3.0]), 2.0);
        assert_eq!(compute_threshold(&[]), 0.0);
    }

    #[test]
    fn test_initialize_shapes() {
        let mut d = StdRng::seed_from_u64(1);
        let mut w = StdRng::seed_from_u64(2);
        let state = HyperplaneState::initialize(6, &mut d, &mut w);

        assert_eq!(state.dimensions(), 6);
        assert_eq!(state.directions().len(), 6);
        assert!(state.weights().iter().all(|w| (0.0..1.0).contains(w)));
        assert!((state.threshold() - state.weights().iter().sum::<f64>() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_classify_on_boundary_is_positive() {
        let state = HyperplaneState::from_parts(vec![1.0, 1.0], vec![Direction::Up; 2]);
        // threshold = 1.0
        assert!(state.classify(&[0.5, 0.5]));
        assert!(state.classify(&[0.9, 0.2]));
        assert!(!state.classify(&[0.1, 0.2]));
    }

    #[test]
    fn test_shift_follows_direction() {
        let mut state =
            HyperplaneState::from_parts(vec![0.5, 0.5], vec![Direction::Up, Direction::Down]);
        state.shift_weight(0, 0.1);
        state.shift_weight(1, 0.1);
        state.refresh_threshold();

        assert!((state.weights()[0] - 0.6).abs() < 1e-12);
        assert!((state.weights()[1] - 0.4).abs() < 1e-12);
        assert!((state.threshold() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_parts_derives_threshold() {
        let state = HyperplaneState::from_parts(vec![0.2, 0.4, 0.6], vec![Direction::Up; 3]);
        assert_eq!(state.dimensions(), 3);
        assert!((state.threshold() - 0.6).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "weights and directions must have the same length")]
    fn test_from_parts_rejects_length_mismatch() {
        HyperplaneState::from_parts(vec![0.2, 0.4, 0.6], vec![Direction::Up]);
    }

    #[test]
    fn test_reverse_direction() {
        let mut state = HyperplaneState::from_parts(vec![0.5], vec![Direction::Down]);
        state.reverse_direction(0);
        assert_eq!(state.directions()[0], Direction::Up);
        assert_eq!(Direction::Up.sign(), 1.0);
        assert_eq!(Direction::Down.sign(), -1.0);
    }
}
