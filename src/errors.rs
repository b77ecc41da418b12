//! Error types for models and belief trackers
//!
//! This module provides proper error handling instead of panics.

use std::fmt;

/// Errors that can occur when constructing or evaluating a model
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A distinguished-adversary observation was requested with zero agents
    NoAgents,

    /// Grid dimensions enumerate no positions
    EmptyGrid {
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
    },

    /// Distance kernel has no candidate positions within range of the true distance
    EmptyKernel {
        /// The observed distance the kernel was centered on
        true_distance: usize,
    },

    /// A weighted distribution was built with zero (or negative) total mass
    ZeroMass {
        /// Description of where the mass vanished
        context: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::NoAgents => {
                write!(f, "observation model requires at least one adversary")
            }
            ModelError::EmptyGrid { width, height } => {
                write!(f, "grid {}x{} enumerates no positions", width, height)
            }
            ModelError::EmptyKernel { true_distance } => {
                write!(
                    f,
                    "distance kernel at distance {} has no candidate positions",
                    true_distance
                )
            }
            ModelError::ZeroMass { context } => {
                write!(f, "distribution has zero total mass: {}", context)
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Errors that can occur during belief tracking
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// Reweighting a belief produced zero total probability and the tracker
    /// is configured to fail rather than reseed
    DegenerateBelief {
        /// Index of the agent whose belief degenerated
        agent_index: usize,
    },

    /// The observation model failed
    Model(ModelError),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::DegenerateBelief { agent_index } => {
                write!(
                    f,
                    "belief for agent {} is inconsistent with every candidate position",
                    agent_index
                )
            }
            TrackerError::Model(e) => write!(f, "observation model failed: {}", e),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for TrackerError {
    fn from(e: ModelError) -> Self {
        TrackerError::Model(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ModelError::EmptyGrid {
            width: 0,
            height: 10,
        };
        assert!(e.to_string().contains("0x10"));

        let e = TrackerError::DegenerateBelief { agent_index: 2 };
        assert!(e.to_string().contains("agent 2"));
    }

    #[test]
    fn test_model_error_converts() {
        let e: TrackerError = ModelError::NoAgents.into();
        assert_eq!(e, TrackerError::Model(ModelError::NoAgents));
    }
}
