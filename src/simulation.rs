//! World driver: the tick loop tying agents, models, and tracker together.
//!
//! A [`World`] owns the grid, the adversary list, the observer, and the
//! observer's belief tracker, and keeps the adversary and belief sequences
//! in lock-step by index. One [`World::step`] is one simulation tick:
//! observe, snapshot beliefs, move every agent by its own motion model,
//! elapse time, snapshot again. Rendering is an external concern; a
//! renderer consumes the returned [`TickSnapshot`] plus the agents'
//! color/location list however it likes.

use crate::agent::{Agent, Color, ADVERSARY_PALETTE, DEFAULT_ADVERSARY_COLOR, OBSERVER_COLOR};
use crate::common::rng::Rng;
use crate::distribution::Distribution;
use crate::errors::{ModelError, TrackerError};
use crate::grid::{Grid, GridConfig};
use crate::motion::{MotionModel, RandomAdjacentMotion};
use crate::observation::ObservationModel;
use crate::tracker::BeliefTracker;

/// Belief snapshots taken during one tick, for an external renderer.
#[derive(Debug, Clone)]
pub struct TickSnapshot {
    /// Per-adversary beliefs right after the Bayesian update
    pub post_observe: Vec<Distribution>,
    /// Per-adversary beliefs after motion propagation
    pub post_elapse: Vec<Distribution>,
}

/// The simulation world: grid, adversaries, observer, and belief tracker.
pub struct World {
    grid: Grid,
    adversaries: Vec<Agent>,
    observer: Agent,
    tracker: Box<dyn BeliefTracker>,
}

impl World {
    /// Create a world with a randomly placed observer and no adversaries.
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyGrid`] if the configuration enumerates
    /// no positions.
    pub fn new(
        rng: &mut dyn Rng,
        config: GridConfig,
        tracker: Box<dyn BeliefTracker>,
    ) -> Result<Self, ModelError> {
        let grid = Grid::new(config)?;
        let observer = Agent::new(
            grid.random_position(rng),
            Box::new(RandomAdjacentMotion),
            OBSERVER_COLOR,
        );
        Ok(Self {
            grid,
            adversaries: Vec::new(),
            observer,
            tracker,
        })
    }

    /// Add a randomly placed adversary and register it with the tracker.
    /// Returns the new adversary's index.
    ///
    /// The first adversary gets the default color; later ones cycle the
    /// palette.
    pub fn add_adversary(&mut self, rng: &mut dyn Rng, motion_model: Box<dyn MotionModel>) -> usize {
        let color = self.next_color();
        let adversary = Agent::new(self.grid.random_position(rng), motion_model, color);
        log::debug!(
            "adding {} adversary at {}",
            color.name,
            adversary.location
        );
        self.adversaries.push(adversary);
        self.tracker.add_agent(rng, &self.grid);
        self.adversaries.len() - 1
    }

    /// Remove the adversary at `index` and its belief.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_adversary(&mut self, index: usize) {
        self.adversaries.remove(index);
        self.tracker.remove_agent(index);
    }

    /// Run one simulation tick.
    ///
    /// # Errors
    /// Propagates tracker failures (observation-model errors, or a
    /// degenerate belief under a fail-fast policy).
    pub fn step(&mut self, rng: &mut dyn Rng) -> Result<TickSnapshot, TrackerError> {
        self.tracker
            .observe(rng, &self.grid, &self.adversaries, &self.observer)?;
        let post_observe = self.tracker.as_distributions();
        log::debug!("observe complete: {} beliefs", post_observe.len());

        advance(&self.grid, &mut self.observer, rng);
        for adversary in &mut self.adversaries {
            advance(&self.grid, adversary, rng);
        }
        log::trace!("agents moved, observer at {}", self.observer.location);

        self.tracker.elapse_time(rng, &self.grid, &self.adversaries);
        let post_elapse = self.tracker.as_distributions();
        log::debug!("elapse complete: {} beliefs", post_elapse.len());

        Ok(TickSnapshot {
            post_observe,
            post_elapse,
        })
    }

    /// Swap the tracker's observation model for subsequent ticks.
    pub fn set_observation_model(&mut self, model: Box<dyn ObservationModel>) {
        self.tracker.set_observation_model(model);
    }

    /// The grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The adversaries, in tracker index order
    pub fn adversaries(&self) -> &[Agent] {
        &self.adversaries
    }

    /// The observer agent
    pub fn observer(&self) -> &Agent {
        &self.observer
    }

    /// Current beliefs, one distribution per adversary
    pub fn beliefs(&self) -> Vec<Distribution> {
        self.tracker.as_distributions()
    }

    fn next_color(&self) -> Color {
        if self.adversaries.is_empty() {
            DEFAULT_ADVERSARY_COLOR
        } else {
            ADVERSARY_PALETTE[(self.adversaries.len() - 1) % ADVERSARY_PALETTE.len()]
        }
    }
}

/// Move an agent by sampling its own motion model at its current location.
fn advance(grid: &Grid, agent: &mut Agent, rng: &mut dyn Rng) {
    let successors = agent.motion_model.next(grid, agent.location);
    agent.location = successors.sample(rng);
}
