//! Effector goals attached to skeleton nodes.

use nalgebra::Isometry3;
use serde::{Deserialize, Serialize};

/// A positional/rotational goal attached to a node.
///
/// The solver for the chain containing this node tries to move the node to
/// [`target`](Self::target). `chain_length` bounds how many ancestors
/// participate in that chain: `0` means the chain extends all the way to the
/// skeleton root, `N > 0` means exactly `N` ancestors (or fewer if the root
/// is reached first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effector {
    /// Target pose in the skeleton's base frame.
    pub target: Isometry3<f32>,
    /// How strongly this effector pulls its chain, in `0.0..=1.0`.
    pub weight: f32,
    /// How strongly the target orientation is weighted, in `0.0..=1.0`.
    /// Only consulted by solvers that support target rotations.
    pub rotation_weight: f32,
    /// Number of ancestors participating in this effector's chain.
    /// `0` = unbounded (walk to the root).
    pub chain_length: u32,
}

impl Default for Effector {
    fn default() -> Self {
        Self {
            target: Isometry3::identity(),
            weight: 1.0,
            rotation_weight: 1.0,
            chain_length: 0,
        }
    }
}

impl Effector {
    /// Create an effector targeting the given pose, with default weights and
    /// an unbounded chain.
    pub fn new(target: Isometry3<f32>) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Set the chain length (`0` = unbounded).
    #[must_use]
    pub const fn with_chain_length(mut self, chain_length: u32) -> Self {
        self.chain_length = chain_length;
        self
    }

    /// Set the positional weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the rotational weight.
    #[must_use]
    pub const fn with_rotation_weight(mut self, rotation_weight: f32) -> Self {
        self.rotation_weight = rotation_weight;
        self
    }

    /// Whether this effector's chain extends all the way to the root.
    pub const fn is_unbounded(&self) -> bool {
        self.chain_length == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
