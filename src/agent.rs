//! Agents: the moving actors on the grid.
//!
//! An adversary is an agent whose true position is hidden from the
//! observer; the observer is itself an agent (it moves too) plus an owned
//! belief tracker, wired together in [`crate::simulation`].

use std::fmt;

use crate::grid::Position;
use crate::motion::MotionModel;

/// Display color for an agent, consumed by an external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Human-readable name
    pub name: &'static str,
    /// Hex value, `#RRGGBB`
    pub hex: &'static str,
}

/// Color of the first adversary
pub const DEFAULT_ADVERSARY_COLOR: Color = Color {
    name: "cyan",
    hex: "#00FFFF",
};

/// Color of the observer
pub const OBSERVER_COLOR: Color = Color {
    name: "white",
    hex: "#FFFFFF",
};

/// Palette cycled through as further adversaries are added
pub const ADVERSARY_PALETTE: [Color; 4] = [
    Color {
        name: "red",
        hex: "#FF0000",
    },
    Color {
        name: "green",
        hex: "#00FF00",
    },
    Color {
        name: "blue",
        hex: "#0000FF",
    },
    Color {
        name: "yellow",
        hex: "#FFFF00",
    },
];

/// A moving actor: current location, its own motion model, and a display
/// color. Mutated in place each tick (location reassigned); destroyed only
/// by explicit removal from the world.
pub struct Agent {
    /// Current true position
    pub location: Position,
    /// Transition model governing this agent's movement
    pub motion_model: Box<dyn MotionModel>,
    /// Renderer color
    pub color: Color,
}

impl Agent {
    /// Create a new agent
    pub fn new(location: Position, motion_model: Box<dyn MotionModel>, color: Color) -> Self {
        Self {
            location,
            motion_model,
            color,
        }
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("location", &self.location)
            .field("color", &self.color.name)
            .finish()
    }
}
