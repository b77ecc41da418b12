//! Shared fixtures for integration tests.
#![allow(dead_code)]

use gridtrack::{
    Agent, Grid, GridConfig, Position, RandomAdjacentMotion, StationaryMotion,
    DEFAULT_ADVERSARY_COLOR, OBSERVER_COLOR,
};

/// Initialize logging for a test run (no-op when already initialized);
/// run with `RUST_LOG=debug` to see per-tick tracker output.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The standard 10x10 test grid
pub fn grid10() -> Grid {
    Grid::new(GridConfig::default()).unwrap()
}

/// A randomly moving adversary at a fixed starting position
pub fn adversary_at(x: usize, y: usize) -> Agent {
    Agent::new(
        Position::new(x, y),
        Box::new(RandomAdjacentMotion),
        DEFAULT_ADVERSARY_COLOR,
    )
}

/// An adversary that never moves
pub fn stationary_adversary_at(x: usize, y: usize) -> Agent {
    Agent::new(
        Position::new(x, y),
        Box::new(StationaryMotion),
        DEFAULT_ADVERSARY_COLOR,
    )
}

/// An observer at a fixed position
pub fn observer_at(x: usize, y: usize) -> Agent {
    Agent::new(
        Position::new(x, y),
        Box::new(RandomAdjacentMotion),
        OBSERVER_COLOR,
    )
}
