//! Explicit-distribution belief tracking.

use crate::agent::Agent;
use crate::common::rng::Rng;
use crate::distribution::{sample_weighted, Distribution};
use crate::errors::TrackerError;
use crate::grid::{Grid, Position};
use crate::observation::ObservationModel;

use super::{BeliefTracker, DegeneratePolicy};

/// Belief tracking over an explicit weighted candidate set.
///
/// Each tracked adversary's belief is a weighted set of candidate
/// positions. `observe` multiplies each candidate's weight by its
/// observation probability, renormalizes, then resamples a same-size
/// candidate set - so despite the name this is a resampling
/// approximation, not a full-support exact posterior: candidates that are
/// not redrawn are discarded. The name is kept for continuity with the
/// strategy it reimplements.
///
/// Unlike [`super::ParticleFilter`], a supplied prior is taken verbatim
/// (the belief size is whatever the prior produced), and
/// [`BeliefTracker::as_distributions`] carries the current weights
/// forward instead of flattening them to uniform.
pub struct ExactInference {
    beliefs: Vec<Vec<(Position, f64)>>,
    observation_model: Box<dyn ObservationModel>,
    policy: DegeneratePolicy,
}

impl ExactInference {
    /// Create a tracker from optional prior distributions.
    ///
    /// With `None`, the tracker starts with zero tracked agents; call
    /// [`BeliefTracker::add_agent`] before `observe`/`elapse_time` do
    /// anything.
    pub fn new(priors: Option<&[Distribution]>, observation_model: Box<dyn ObservationModel>) -> Self {
        Self::with_policy(priors, observation_model, DegeneratePolicy::default())
    }

    /// Create a tracker with an explicit degenerate-belief policy.
    pub fn with_policy(
        priors: Option<&[Distribution]>,
        observation_model: Box<dyn ObservationModel>,
        policy: DegeneratePolicy,
    ) -> Self {
        let beliefs = priors
            .map(|ds| ds.iter().map(|d| d.entries().to_vec()).collect())
            .unwrap_or_default();
        Self {
            beliefs,
            observation_model,
            policy,
        }
    }

    fn uniform_candidates(grid: &Grid) -> Vec<(Position, f64)> {
        let w = 1.0 / grid.len() as f64;
        grid.positions().iter().map(|&p| (p, w)).collect()
    }
}

impl BeliefTracker for ExactInference {
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
            let mut total = 0.0;
            for (position, weight) in belief.iter_mut() {
                *weight *= observation.probability_of(*position);
                total += *weight;
            }

            if !(total > 0.0) {
                match self.policy {
                    DegeneratePolicy::ReseedUniform => {
                        log::warn!(
                            "belief {} inconsistent with observation, reseeding to uniform",
                            index
                        );
                        *belief = Self::uniform_candidates(grid);
                        continue;
                    }
                    DegeneratePolicy::Fail => {
                        return Err(TrackerError::DegenerateBelief { agent_index: index });
                    }
                }
            }

            for (_, weight) in belief.iter_mut() {
                *weight /= total;
            }

            // Resample a same-size candidate set from the posterior
            let n = belief.len();
            let resampled: Vec<(Position, f64)> = (0..n)
                .map(|_| (sample_weighted(belief, rng), 1.0 / n as f64))
                .collect();
            *belief = resampled;
        }
        Ok(())
    }

    fn elapse_time(&mut self, rng: &mut dyn Rng, grid: &Grid, adversaries: &[Agent]) {
        for (belief, adversary) in self.beliefs.iter_mut().zip(adversaries) {
            for (position, _) in belief.iter_mut() {
                let successors = adversary.motion_model.next(grid, *position);
                *position = successors.sample(rng);
            }
        }
    }

    fn add_agent(&mut self, _rng: &mut dyn Rng, grid: &Grid) {
        self.beliefs.push(Self::uniform_candidates(grid));
    }

    fn remove_agent(&mut self, index: usize) {
        self.beliefs.remove(index);
    }

    fn as_distributions(&self) -> Vec<Distribution> {
        self.beliefs
            .iter()
            .map(|b| Distribution::from_normalized(b.clone()))
            .collect()
    }

    fn set_observation_model(&mut self, model: Box<dyn ObservationModel>) {
        self.observation_model = model;
    }

    fn num_tracked(&self) -> usize {
        self.beliefs.len()
    }
}
