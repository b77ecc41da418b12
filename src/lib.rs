/*!
# Gridtrack - grid-world adversary belief tracking

Bayesian filtering of hidden adversary positions on a discrete grid from
noisy distance observations.

An observer repeatedly receives noisy observations about each adversary,
updates a per-adversary belief distribution, and propagates the belief
forward through each adversary's motion model as time passes.

## Features

- Explicit-distribution and particle-filter belief trackers behind one trait
- Pluggable motion models (per agent) and observation models (tracker-wide)
- Noisy-range distance kernel, nearest/farthest/random distinguished-agent
  and all-agents observation variants
- Deterministic seeded sampling for reproducible runs

## Modules

- [`grid`] - position enumeration and Manhattan distance
- [`distribution`] - the weighted-sampling primitive
- [`motion`] / [`observation`] - pluggable model strategies
- [`tracker`] - the two belief-tracking strategies
- [`simulation`] - world state and the per-tick driver
- [`common`] - low-level utilities (deterministic RNG)

## Example

```rust,no_run
use gridtrack::{
    GridConfig, MultiAgentObservation, ParticleFilter, RandomAdjacentMotion, SimpleRng, World,
};

let mut rng = SimpleRng::new(42);

// Particle-filter tracker observing every adversary's noisy range
let tracker = ParticleFilter::new(&mut rng, None, Box::new(MultiAgentObservation));

// 10x10 world with one randomly moving adversary
let mut world = World::new(&mut rng, GridConfig::default(), Box::new(tracker)).unwrap();
world.add_adversary(&mut rng, Box::new(RandomAdjacentMotion));

// One tick: observe, move everyone, elapse time
let snapshot = world.step(&mut rng).unwrap();
for belief in &snapshot.post_elapse {
    // hand to a renderer
    let _ = belief.probability_of(gridtrack::Position::new(5, 5));
}
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Low-level utilities (deterministic RNG)
pub mod common;

/// Error types for models and trackers
pub mod errors;

/// Grid space: positions, enumeration, Manhattan distance
pub mod grid;

/// The weighted-distribution primitive
pub mod distribution;

/// Agents and display colors
pub mod agent;

/// Motion model strategies
pub mod motion;

/// Observation model strategies
pub mod observation;

/// Belief-tracking strategies
pub mod tracker;

/// World state and the per-tick simulation driver
pub mod simulation;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use agent::{Agent, Color, ADVERSARY_PALETTE, DEFAULT_ADVERSARY_COLOR, OBSERVER_COLOR};
pub use distribution::{Distribution, NORMALIZATION_TOLERANCE};
pub use grid::{Grid, GridConfig, Position};

// Errors
pub use errors::{ModelError, TrackerError};

// Traits
pub use motion::MotionModel;
pub use observation::ObservationModel;
pub use tracker::BeliefTracker;

// Motion models
pub use motion::{RandomAdjacentMotion, StationaryMotion};

// Observation models
pub use observation::{
    distance_kernel, AdversarySelector, MultiAgentObservation, SingleAdversaryObservation,
    UniformObservation,
};

// Belief trackers
pub use tracker::{
    DegeneratePolicy, ExactInference, ParticleFilter, ParticleFilterConfig,
};

// Simulation driver
pub use simulation::{TickSnapshot, World};

// RNG
pub use common::rng::{Rng, SimpleRng};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
