//! The weighted-distribution primitive used across models and trackers.
//!
//! A [`Distribution`] is an ordered sequence of `(position, probability)`
//! pairs. Duplicate positions are permitted; [`Distribution::probability_of`]
//! is additive over them. Motion and observation models produce
//! distributions already normalized; trackers renormalize after
//! reweighting.

use crate::common::rng::Rng;
use crate::errors::ModelError;
use crate::grid::{Grid, Position};

/// Tolerance for normalization checks
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// A probability mass function over grid positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    entries: Vec<(Position, f64)>,
}

impl Distribution {
    /// The uniform distribution over the whole grid.
    pub fn uniform(grid: &Grid) -> Self {
        let p = 1.0 / grid.len() as f64;
        Self {
            entries: grid.positions().iter().map(|&pos| (pos, p)).collect(),
        }
    }

    /// All mass on a single position.
    pub fn point_mass(position: Position) -> Self {
        Self {
            entries: vec![(position, 1.0)],
        }
    }

    /// Build a normalized distribution from raw non-negative weights.
    ///
    /// # Errors
    /// Returns [`ModelError::ZeroMass`] if the pairs are empty or their
    /// weights do not sum to a positive value.
    pub fn from_weighted(mut pairs: Vec<(Position, f64)>) -> Result<Self, ModelError> {
        let total: f64 = pairs.iter().map(|(_, w)| w).sum();
        if !(total > 0.0) {
            return Err(ModelError::ZeroMass {
                context: format!("{} weighted entries", pairs.len()),
            });
        }
        for (_, w) in pairs.iter_mut() {
            *w /= total;
        }
        Ok(Self { entries: pairs })
    }

    /// Wrap entries that are already normalized (tracker snapshots).
    pub(crate) fn from_normalized(entries: Vec<(Position, f64)>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    /// Draw one position by cumulative-weight inversion.
    ///
    /// The walk subtracts each probability from a uniform draw until it goes
    /// negative. If floating-point rounding leaves the weights summing to
    /// slightly less than 1, the walk clamps to the last entry instead of
    /// running past the end.
    ///
    /// # Panics
    /// Panics if the distribution is empty, which the public constructors
    /// make unrepresentable.
    pub fn sample(&self, rng: &mut dyn Rng) -> Position {
        sample_weighted(&self.entries, rng)
    }

    /// Total probability assigned to `position`, summed over duplicates.
    /// Returns 0 for positions absent from the distribution.
    pub fn probability_of(&self, position: Position) -> f64 {
        self.entries
            .iter()
            .filter(|(p, _)| *p == position)
            .map(|(_, w)| w)
            .sum()
    }

    /// Sum of all probabilities (≈1 when normalized)
    pub fn total_mass(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Whether the total mass is within `tolerance` of 1
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_mass() - 1.0).abs() <= tolerance
    }

    /// Number of `(position, probability)` entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the distribution holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the `(position, probability)` entries in order
    pub fn iter(&self) -> impl Iterator<Item = &(Position, f64)> {
        self.entries.iter()
    }

    /// The entries as a slice, in order
    pub fn entries(&self) -> &[(Position, f64)] {
        &self.entries
    }
}

/// Cumulative-weight inversion over a raw weighted slice.
///
/// Shared by [`Distribution::sample`] and the trackers' resampling step,
/// which operates on beliefs before they are wrapped as distributions.
/// Clamps to the last entry on floating-point shortfall.
pub(crate) fn sample_weighted(entries: &[(Position, f64)], rng: &mut dyn Rng) -> Position {
    assert!(!entries.is_empty(), "cannot sample an empty distribution");
    let mut remaining = rng.rand();
    for &(position, probability) in entries {
        remaining -= probability;
        if remaining < 0.0 {
            return position;
        }
    }
    entries[entries.len() - 1].0
}
