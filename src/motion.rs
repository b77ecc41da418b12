//! Motion models: where an agent at a given position moves next.
//!
//! Models are small one-method strategy objects; each agent owns its own
//! boxed model and the trackers defer to it during time-elapse
//! propagation.

use crate::distribution::Distribution;
use crate::grid::{Grid, Position};

/// Transition distribution for an agent's next position.
pub trait MotionModel {
    /// The distribution over where an agent currently at `position` moves
    /// on the next tick. Always normalized.
    fn next(&self, grid: &Grid, position: Position) -> Distribution;
}

/// Uniform random move to an adjacent cell.
///
/// The support is the 4-neighborhood clipped to the grid, so corner and
/// edge cells have fewer successors and their masses still sum to 1 by
/// construction. Requires a grid of at least 2x2 (a 1x1 grid has
/// zero-neighbor cells).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAdjacentMotion;

impl MotionModel for RandomAdjacentMotion {
    fn next(&self, grid: &Grid, position: Position) -> Distribution {
        let neighbors = grid.neighbors(position);
        debug_assert!(
            !neighbors.is_empty(),
            "random adjacent motion requires a grid of at least 2x2"
        );
        let p = 1.0 / neighbors.len() as f64;
        Distribution::from_normalized(neighbors.into_iter().map(|n| (n, p)).collect())
    }
}

/// Agent that never moves: all mass stays on the current position.
#[derive(Debug, Clone, Copy, Default)]
pub struct StationaryMotion;

impl MotionModel for StationaryMotion {
    fn next(&self, _grid: &Grid, position: Position) -> Distribution {
        Distribution::point_mass(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::NORMALIZATION_TOLERANCE;
    use crate::grid::GridConfig;

    #[test]
    fn test_interior_cell_has_four_uniform_successors() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let dist = RandomAdjacentMotion.next(&grid, Position::new(5, 5));
        assert_eq!(dist.len(), 4);
        assert!(dist.is_normalized(NORMALIZATION_TOLERANCE));
        assert_eq!(dist.probability_of(Position::new(4, 5)), 0.25);
        assert_eq!(dist.probability_of(Position::new(5, 6)), 0.25);
        assert_eq!(dist.probability_of(Position::new(5, 5)), 0.0);
    }

    #[test]
    fn test_corner_cell_has_two_successors() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let dist = RandomAdjacentMotion.next(&grid, Position::new(0, 0));
        assert_eq!(dist.len(), 2);
        assert!(dist.is_normalized(NORMALIZATION_TOLERANCE));
        assert_eq!(dist.probability_of(Position::new(1, 0)), 0.5);
        assert_eq!(dist.probability_of(Position::new(0, 1)), 0.5);
    }

    #[test]
    fn test_stationary_is_point_mass() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let p = Position::new(3, 7);
        let dist = StationaryMotion.next(&grid, p);
        assert_eq!(dist.probability_of(p), 1.0);
    }
}
