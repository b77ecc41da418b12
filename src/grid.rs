//! Grid space: the enumerated set of discrete positions agents can occupy.
//!
//! The grid is constructed once from a [`GridConfig`] and enumerates every
//! position up front. Enumeration order is fixed (x-major, matching the
//! original world setup) so closest-neighbor tie-breaks are reproducible.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::common::rng::Rng;
use crate::errors::ModelError;

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridConfig {
    /// Create a new grid configuration
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Serialize the configuration to a JSON string (for run logs)
    pub fn summary(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

/// A discrete grid cell. Immutable value type; equality by coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index, in `[0, width)`
    pub x: usize,
    /// Row index, in `[0, height)`
    pub y: usize,
}

impl Position {
    /// Create a new position
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The full enumerated position set of a finite `width x height` grid.
///
/// Invariant: non-empty, every enumerated coordinate lies in
/// `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    positions: Vec<Position>,
}

impl Grid {
    /// Enumerate a grid from its configuration.
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyGrid`] if either dimension is zero.
    pub fn new(config: GridConfig) -> Result<Self, ModelError> {
        if config.width == 0 || config.height == 0 {
            return Err(ModelError::EmptyGrid {
                width: config.width,
                height: config.height,
            });
        }
        let mut positions = Vec::with_capacity(config.width * config.height);
        for x in 0..config.width {
            for y in 0..config.height {
                positions.push(Position::new(x, y));
            }
        }
        Ok(Self { config, positions })
    }

    /// Grid dimensions
    #[inline]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// The full enumerated sequence of positions, in fixed order
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions (`width * height`, never zero)
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; kept for iterator-style call sites
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether a position lies on this grid
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x < self.config.width && p.y < self.config.height
    }

    /// Manhattan distance between two positions. Pure and total.
    #[inline]
    pub fn distance(a: Position, b: Position) -> usize {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }

    /// A uniformly chosen position from the enumerated set.
    /// Consumes one draw from the random source.
    pub fn random_position(&self, rng: &mut dyn Rng) -> Position {
        self.positions[rng.index(self.positions.len())]
    }

    /// The positions at Manhattan distance exactly 1 from `p`, clipped to
    /// the grid. Corner cells have 2, edge cells 3, interior cells 4.
    pub fn neighbors(&self, p: Position) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if p.x > 0 {
            out.push(Position::new(p.x - 1, p.y));
        }
        if p.x + 1 < self.config.width {
            out.push(Position::new(p.x + 1, p.y));
        }
        if p.y > 0 {
            out.push(Position::new(p.x, p.y - 1));
        }
        if p.y + 1 < self.config.height {
            out.push(Position::new(p.x, p.y + 1));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::rng::SimpleRng;

    #[test]
    fn test_enumeration_covers_grid() {
        let grid = Grid::new(GridConfig::new(3, 4)).unwrap();
        assert_eq!(grid.len(), 12);
        for p in grid.positions() {
            assert!(p.x < 3 && p.y < 4);
        }
        // Fixed enumeration order: x-major
        assert_eq!(grid.positions()[0], Position::new(0, 0));
        assert_eq!(grid.positions()[1], Position::new(0, 1));
        assert_eq!(grid.positions()[4], Position::new(1, 0));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(
            Grid::new(GridConfig::new(0, 10)),
            Err(ModelError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Grid::new(GridConfig::new(10, 0)),
            Err(ModelError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(1, 2);
        let b = Position::new(4, 0);
        assert_eq!(Grid::distance(a, b), 5);
        assert_eq!(Grid::distance(b, a), 5);
        assert_eq!(Grid::distance(a, a), 0);
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Grid::new(GridConfig::new(10, 10)).unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(Position::new(5, 0)).len(), 3);
        assert_eq!(grid.neighbors(Position::new(5, 5)).len(), 4);
        for n in grid.neighbors(Position::new(9, 9)) {
            assert!(grid.contains(n));
            assert_eq!(Grid::distance(n, Position::new(9, 9)), 1);
        }
    }

    #[test]
    fn test_random_position_on_grid() {
        let grid = Grid::new(GridConfig::default()).unwrap();
        let mut rng = SimpleRng::new(42);
        for _ in 0..1000 {
            assert!(grid.contains(grid.random_position(&mut rng)));
        }
    }

    #[test]
    fn test_config_summary_roundtrips() {
        let config = GridConfig::new(7, 3);
        let parsed: GridConfig = serde_json::from_str(&config.summary()).unwrap();
        assert_eq!(parsed, config);
    }
}
