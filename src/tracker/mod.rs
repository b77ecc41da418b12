//! Belief trackers: per-adversary posterior maintenance.
//!
//! Two interchangeable strategies implement the same [`BeliefTracker`]
//! contract:
//!
//! - [`ExactInference`] - a weighted candidate set, resampled every observe
//! - [`ParticleFilter`] - a fixed-size particle multiset
//!
//! Observation is tracker-wide (one model for all adversaries); motion is
//! per-agent (time elapse defers to each adversary's own motion model).
//! Beliefs are associated with adversaries by index, and stay in lock-step
//! with the caller's adversary list: it is the caller's responsibility to
//! mirror every `add_agent`/`remove_agent` on its own side. [`crate::simulation::World`]
//! owns both sequences and does this for you.

mod exact;
mod particle;

pub use exact::ExactInference;
pub use particle::{ParticleFilter, ParticleFilterConfig, DEFAULT_NUM_PARTICLES};

use crate::agent::Agent;
use crate::common::rng::Rng;
use crate::distribution::Distribution;
use crate::errors::TrackerError;
use crate::grid::Grid;
use crate::observation::ObservationModel;

/// What to do when an observation is inconsistent with every belief
/// candidate (reweighting yields zero total probability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Reseed that agent's belief to the uniform distribution and log a
    /// warning (default)
    #[default]
    ReseedUniform,
    /// Return [`TrackerError::DegenerateBelief`]
    Fail,
}

/// Common contract of the belief-tracking strategies.
///
/// With zero tracked agents, `observe` and `elapse_time` are no-ops, not
/// errors.
pub trait BeliefTracker {
    /// Bayesian update: query the observation model, reweight every belief
    /// item by its observation probability, renormalize, and resample a
    /// fresh same-size belief per adversary.
    ///
    /// # Errors
    /// Propagates observation-model failures; returns
    /// [`TrackerError::DegenerateBelief`] under [`DegeneratePolicy::Fail`]
    /// when a reweighted belief has zero total probability.
    fn observe(
        &mut self,
        rng: &mut dyn Rng,
        grid: &Grid,
        adversaries: &[Agent],
        observer: &Agent,
    ) -> Result<(), TrackerError>;

    /// Propagate each belief forward one tick: every belief item is
    /// replaced by one successor sampled from that adversary's own motion
    /// model centered at the item.
    fn elapse_time(&mut self, rng: &mut dyn Rng, grid: &Grid, adversaries: &[Agent]);

    /// Append a belief for a newly tracked adversary, initialized to the
    /// uniform distribution in this tracker's native representation.
    fn add_agent(&mut self, rng: &mut dyn Rng, grid: &Grid);

    /// Drop the belief at `index`; subsequent beliefs shift down by one.
    fn remove_agent(&mut self, index: usize);

    /// Read-only snapshot of every belief as a normalized distribution.
    /// Calling this twice without an intervening `observe`/`elapse_time`
    /// yields identical output.
    fn as_distributions(&self) -> Vec<Distribution>;

    /// Replace the observation model used by subsequent `observe` calls.
    /// Does not retroactively reweight existing beliefs.
    fn set_observation_model(&mut self, model: Box<dyn ObservationModel>);

    /// Number of beliefs currently tracked
    fn num_tracked(&self) -> usize;
}
