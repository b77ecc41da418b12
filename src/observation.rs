//! Observation models: what the observer perceives about each adversary.
//!
//! A model produces one distribution per adversary, aligned by index with
//! the adversary list. The noisy-range building block is
//! [`distance_kernel`], which spreads mass over candidate positions whose
//! distance from the observer is within 2 of the true observed distance.

use crate::agent::Agent;
use crate::common::rng::Rng;
use crate::distribution::Distribution;
use crate::errors::ModelError;
use crate::grid::{Grid, Position};

/// Raw kernel weight for an exact distance match
const KERNEL_WEIGHT_EXACT: f64 = 0.4;
/// Raw kernel weight for an off-by-one candidate
const KERNEL_WEIGHT_NEAR: f64 = 0.2;
/// Raw kernel weight for an off-by-two candidate
const KERNEL_WEIGHT_FAR: f64 = 0.1;

/// Per-tick observation: one distribution per adversary, aligned by index.
pub trait ObservationModel {
    /// What the observer might perceive about each adversary this tick.
    ///
    /// # Errors
    /// Returns [`ModelError::NoAgents`] from models that must single out an
    /// adversary when called with an empty adversary list.
    fn observe(
        &self,
        rng: &mut dyn Rng,
        grid: &Grid,
        adversaries: &[Agent],
        observer: &Agent,
    ) -> Result<Vec<Distribution>, ModelError>;
}

/// No information: every adversary's distribution is uniform over the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformObservation;

impl ObservationModel for UniformObservation {
    fn observe(
        &self,
        _rng: &mut dyn Rng,
        grid: &Grid,
        adversaries: &[Agent],
        _observer: &Agent,
    ) -> Result<Vec<Distribution>, ModelError> {
        Ok(adversaries
            .iter()
            .map(|_| Distribution::uniform(grid))
            .collect())
    }
}

/// Noisy-range kernel centered on a true observed distance.
///
/// Every grid position whose distance from `observer_position` is within 2
/// of `true_distance` gets a raw weight: 0.4 for an exact match, 0.2 off by
/// one, 0.1 off by two. The result is normalized by the summed raw weight
/// actually present.
///
/// # Errors
/// Returns [`ModelError::EmptyKernel`] if no grid position falls within
/// range of `true_distance` (cannot happen when the true distance was
/// measured to a position on the same grid).
pub fn distance_kernel(
    grid: &Grid,
    observer_position: Position,
    true_distance: usize,
) -> Result<Distribution, ModelError> {
    let mut weighted = Vec::new();
    for &candidate in grid.positions() {
        let candidate_distance = Grid::distance(candidate, observer_position);
        let weight = match candidate_distance.abs_diff(true_distance) {
            0 => KERNEL_WEIGHT_EXACT,
            1 => KERNEL_WEIGHT_NEAR,
            2 => KERNEL_WEIGHT_FAR,
            _ => continue,
        };
        weighted.push((candidate, weight));
    }
    Distribution::from_weighted(weighted).map_err(|_| ModelError::EmptyKernel { true_distance })
}

/// How a single distinguished adversary is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdversarySelector {
    /// Minimum true distance from the observer (first wins ties)
    Nearest,
    /// Maximum true distance from the observer (first wins ties)
    Farthest,
    /// Uniformly random adversary
    Random,
}

/// Range observation of one distinguished adversary.
///
/// The selected adversary gets the distance kernel centered on its true
/// distance from the observer; every other adversary's distribution is
/// uniform (no information).
#[derive(Debug, Clone, Copy)]
pub struct SingleAdversaryObservation {
    /// Which adversary is singled out each tick
    pub selector: AdversarySelector,
}

impl SingleAdversaryObservation {
    /// Create a model with the given selector
    pub fn new(selector: AdversarySelector) -> Self {
        Self { selector }
    }

    fn select(&self, rng: &mut dyn Rng, distances: &[usize]) -> usize {
        match self.selector {
            AdversarySelector::Nearest => {
                let mut best = 0;
                for (i, &d) in distances.iter().enumerate() {
                    if d < distances[best] {
                        best = i;
                    }
                }
                best
            }
            AdversarySelector::Farthest => {
                let mut best = 0;
                for (i, &d) in distances.iter().enumerate() {
                    if d > distances[best] {
                        best = i;
                    }
                }
                best
            }
            AdversarySelector::Random => rng.index(distances.len()),
        }
    }
}

impl ObservationModel for SingleAdversaryObservation {
    fn observe(
        &self,
        rng: &mut dyn Rng,
        grid: &Grid,
        adversaries: &[Agent],
        observer: &Agent,
    ) -> Result<Vec<Distribution>, ModelError> {
        if adversaries.is_empty() {
            return Err(ModelError::NoAgents);
        }
        let distances: Vec<usize> = adversaries
            .iter()
            .map(|a| Grid::distance(observer.location, a.location))
            .collect();
        let selected = self.select(rng, &distances);

        let mut observations = Vec::with_capacity(adversaries.len());
        for i in 0..adversaries.len() {
            if i == selected {
                observations.push(distance_kernel(grid, observer.location, distances[i])?);
            } else {
                observations.push(Distribution::uniform(grid));
            }
        }
        Ok(observations)
    }
}

/// Direct range observation of every adversary.
///
/// Each adversary independently gets the distance kernel centered on its
/// own true distance from the observer. This is the default model for the
/// running simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiAgentObservation;

impl ObservationModel for MultiAgentObservation {
    fn observe(
        &self,
        _rng: &mut dyn Rng,
        grid: &Grid,
        adversaries: &[Agent],
        observer: &Agent,
    ) -> Result<Vec<Distribution>, ModelError> {
        adversaries
            .iter()
            .map(|a| {
                let d = Grid::distance(observer.location, a.location);
                distance_kernel(grid, observer.location, d)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Agent, DEFAULT_ADVERSARY_COLOR, OBSERVER_COLOR};
    use crate::common::rng::SimpleRng;
    use crate::distribution::NORMALIZATION_TOLERANCE;
    use crate::grid::GridConfig;
    use crate::motion::RandomAdjacentMotion;

    fn agent_at(x: usize, y: usize) -> Agent {
        Agent::new(
            Position::new(x, y),
            Box::new(RandomAdjacentMotion),
            DEFAULT_ADVERSARY_COLOR,
        )
    }

    fn observer_at(x: usize, y: usize) -> Agent {
        Agent::new(
            Position::new(x, y),
            Box::new(RandomAdjacentMotion),
            OBSERVER_COLOR,
        )
    }

    #[test]
    fn test_uniform_observation_is_exactly_uniform() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let mut rng = SimpleRng::new(42);
        let adversaries = vec![agent_at(3, 3), agent_at(7, 7)];
        let observer = observer_at(0, 0);

        let obs = UniformObservation
            .observe(&mut rng, &grid, &adversaries, &observer)
            .unwrap();
        assert_eq!(obs.len(), 2);
        for dist in &obs {
            for &p in grid.positions() {
                assert_eq!(dist.probability_of(p), 1.0 / 100.0);
            }
        }
    }

    #[test]
    fn test_distance_kernel_weights_at_three() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let center = Position::new(5, 5);
        let dist = distance_kernel(&grid, center, 3).unwrap();
        assert!(dist.is_normalized(NORMALIZATION_TOLERANCE));

        // Raw weights 0.4 / 0.2 / 0.1 by distance mismatch, over the
        // candidates actually on the grid.
        let mut total = 0.0;
        for &p in grid.positions() {
            total += match Grid::distance(p, center).abs_diff(3) {
                0 => 0.4,
                1 => 0.2,
                2 => 0.1,
                _ => 0.0,
            };
        }
        for &p in grid.positions() {
            let expected = match Grid::distance(p, center).abs_diff(3) {
                0 => 0.4 / total,
                1 => 0.2 / total,
                2 => 0.1 / total,
                _ => 0.0,
            };
            assert!(
                (dist.probability_of(p) - expected).abs() < NORMALIZATION_TOLERANCE,
                "position {} expected {} got {}",
                p,
                expected,
                dist.probability_of(p)
            );
        }
    }

    #[test]
    fn test_kernel_centered_on_true_distance_not_candidate_distance() {
        // A kernel at distance 6 must assign zero mass to the observer's
        // own cell (distance 0 is more than 2 away from 6).
        let grid = Grid::new(GridConfig::default()).unwrap();
        let center = Position::new(5, 5);
        let dist = distance_kernel(&grid, center, 6).unwrap();
        assert_eq!(dist.probability_of(center), 0.0);
        assert!(dist.probability_of(Position::new(9, 7)) > 0.0); // distance 6
    }

    #[test]
    fn test_nearest_selector_gets_the_kernel() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let mut rng = SimpleRng::new(42);
        let adversaries = vec![agent_at(9, 9), agent_at(1, 0)];
        let observer = observer_at(0, 0);

        let obs = SingleAdversaryObservation::new(AdversarySelector::Nearest)
            .observe(&mut rng, &grid, &adversaries, &observer)
            .unwrap();
        // Adversary 1 is nearest (distance 1): its distribution is the
        // kernel, adversary 0's is uniform.
        assert_eq!(obs[0].probability_of(Position::new(0, 0)), 1.0 / 100.0);
        assert!(obs[1].probability_of(Position::new(1, 0)) > 1.0 / 100.0);
        assert_eq!(obs[1].probability_of(Position::new(9, 9)), 0.0);
    }

    #[test]
    fn test_farthest_selector_gets_the_kernel() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let mut rng = SimpleRng::new(42);
        let adversaries = vec![agent_at(9, 9), agent_at(1, 0)];
        let observer = observer_at(0, 0);

        let obs = SingleAdversaryObservation::new(AdversarySelector::Farthest)
            .observe(&mut rng, &grid, &adversaries, &observer)
            .unwrap();
        // Adversary 0 at distance 18 is farthest.
        assert!(obs[0].probability_of(Position::new(9, 9)) > 0.0);
        assert_eq!(obs[0].probability_of(Position::new(0, 0)), 0.0);
        assert_eq!(obs[1].probability_of(Position::new(5, 5)), 1.0 / 100.0);
    }

    #[test]
    fn test_single_adversary_with_no_agents_is_an_error() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let mut rng = SimpleRng::new(42);
        let observer = observer_at(0, 0);
        let result = SingleAdversaryObservation::new(AdversarySelector::Random).observe(
            &mut rng,
            &grid,
            &[],
            &observer,
        );
        assert_eq!(result.unwrap_err(), ModelError::NoAgents);
    }

    #[test]
    fn test_multi_agent_observation_kernels_every_adversary() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let mut rng = SimpleRng::new(42);
        let adversaries = vec![agent_at(2, 0), agent_at(0, 7)];
        let observer = observer_at(0, 0);

        let obs = MultiAgentObservation
            .observe(&mut rng, &grid, &adversaries, &observer)
            .unwrap();
        assert_eq!(obs.len(), 2);
        for dist in &obs {
            assert!(dist.is_normalized(NORMALIZATION_TOLERANCE));
        }
        // Each kernel is centered on that adversary's own distance.
        assert!(obs[0].probability_of(Position::new(2, 0)) > 0.0);
        assert_eq!(obs[0].probability_of(Position::new(0, 7)), 0.0);
        assert!(obs[1].probability_of(Position::new(0, 7)) > 0.0);
        assert_eq!(obs[1].probability_of(Position::new(0, 0)), 0.0);
    }

    #[test]
    fn test_uniform_with_zero_agents_is_a_noop() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let mut rng = SimpleRng::new(42);
        let observer = observer_at(0, 0);
        let obs = UniformObservation
            .observe(&mut rng, &grid, &[], &observer)
            .unwrap();
        assert!(obs.is_empty());
    }
}
