//! Particle-filter belief tracking.

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::common::rng::Rng;
use crate::distribution::{sample_weighted, Distribution};
use crate::errors::TrackerError;
use crate::grid::{Grid, Position};
use crate::observation::ObservationModel;

use super::{BeliefTracker, DegeneratePolicy};

/// Default number of particles per tracked adversary
pub const DEFAULT_NUM_PARTICLES: usize = 1000;

/// Particle filter parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleFilterConfig {
    /// Particles per tracked adversary (constant across ticks)
    pub num_particles: usize,
}

impl Default for ParticleFilterConfig {
    fn default() -> Self {
        Self {
            num_particles: DEFAULT_NUM_PARTICLES,
        }
    }
}

/// Belief tracking over a fixed-size particle multiset.
///
/// Each tracked adversary's belief is `num_particles` sampled positions
/// with implicit uniform weight. Priors are always resampled into
/// `num_particles` independent draws (never taken verbatim), and
/// [`BeliefTracker::as_distributions`] assigns every particle weight
/// `1 / num_particles`. The particle count is fixed at construction and
/// constant across ticks.
pub struct ParticleFilter {
    beliefs: Vec<Vec<Position>>,
    observation_model: Box<dyn ObservationModel>,
    num_particles: usize,
    policy: DegeneratePolicy,
}

impl ParticleFilter {
    /// Create a filter from optional prior distributions, with the default
    /// particle count. Each prior is resampled into `num_particles` draws,
    /// consuming the random source.
    ///
    /// With `None` priors, the filter starts with zero tracked agents.
    pub fn new(
        rng: &mut dyn Rng,
        priors: Option<&[Distribution]>,
        observation_model: Box<dyn ObservationModel>,
    ) -> Self {
        Self::with_config(
            rng,
            priors,
            observation_model,
            ParticleFilterConfig::default(),
            DegeneratePolicy::default(),
        )
    }

    /// Create a filter with explicit particle count and degenerate policy.
    pub fn with_config(
        rng: &mut dyn Rng,
        priors: Option<&[Distribution]>,
        observation_model: Box<dyn ObservationModel>,
        config: ParticleFilterConfig,
        policy: DegeneratePolicy,
    ) -> Self {
        let num_particles = config.num_particles;
        let beliefs = priors
            .map(|ds| {
                ds.iter()
                    .map(|d| (0..num_particles).map(|_| d.sample(rng)).collect())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            beliefs,
            observation_model,
            num_particles,
            policy,
        }
    }

    /// Particles per tracked adversary
    pub fn num_particles(&self) -> usize {
        self.num_particles
    }

    fn uniform_particles(rng: &mut dyn Rng, grid: &Grid, n: usize) -> Vec<Position> {
        (0..n).map(|_| grid.random_position(rng)).collect()
    }
}

impl BeliefTracker for ParticleFilter {
    fn observe(
        &mut self,
        rng: &mut dyn Rng,
        grid: &Grid,
        adversaries: &[Agent],
        observer: &Agent,
    ) -> Result<(), TrackerError> {
        if self.beliefs.is_empty() {
            return Ok(());
        }
        let observations = self
            .observation_model
            .observe(rng, grid, adversaries, observer)?;

        for (index, (belief, observation)) in
            self.beliefs.iter_mut().zip(&observations).enumerate()
        {
            let mut weighted: Vec<(Position, f64)> = belief
                .iter()
                .map(|&p| (p, observation.probability_of(p)))
                .collect();
            let total: f64 = weighted.iter().map(|(_, w)| w).sum();

            if !(total > 0.0) {
                match self.policy {
                    DegeneratePolicy::ReseedUniform => {
                        log::warn!(
                            "belief {} inconsistent with observation, reseeding to uniform",
                            index
                        );
                        *belief = Self::uniform_particles(rng, grid, self.num_particles);
                        continue;
                    }
                    DegeneratePolicy::Fail => {
                        return Err(TrackerError::DegenerateBelief { agent_index: index });
                    }
                }
            }

            for (_, weight) in weighted.iter_mut() {
                *weight /= total;
            }

            *belief = (0..self.num_particles)
                .map(|_| sample_weighted(&weighted, rng))
                .collect();
        }
        Ok(())
    }

    fn elapse_time(&mut self, rng: &mut dyn Rng, grid: &Grid, adversaries: &[Agent]) {
        for (belief, adversary) in self.beliefs.iter_mut().zip(adversaries) {
            for particle in belief.iter_mut() {
                let successors = adversary.motion_model.next(grid, *particle);
                *particle = successors.sample(rng);
            }
        }
    }

    fn add_agent(&mut self, rng: &mut dyn Rng, grid: &Grid) {
        self.beliefs
            .push(Self::uniform_particles(rng, grid, self.num_particles));
    }

    fn remove_agent(&mut self, index: usize) {
        self.beliefs.remove(index);
    }

    fn as_distributions(&self) -> Vec<Distribution> {
        self.beliefs
            .iter()
            .map(|belief| {
                let w = 1.0 / belief.len() as f64;
                Distribution::from_normalized(belief.iter().map(|&p| (p, w)).collect())
            })
            .collect()
    }

    fn set_observation_model(&mut self, model: Box<dyn ObservationModel>) {
        self.observation_model = model;
    }

    fn num_tracked(&self) -> usize {
        self.beliefs.len()
    }
}
