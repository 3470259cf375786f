//! Algorithm descriptors selecting a solving method for a subtree.
//!
//! An [`Algorithm`] attached to a node applies to every subtree whose root
//! resolves to that node (nearest ancestor-or-self wins). The descriptor is
//! pure configuration; the solving methods themselves live outside this
//! workspace.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SolverKind
// ---------------------------------------------------------------------------

/// Which solving method a subtree uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Closed-form solution for a single-segment chain.
    OneBone,
    /// Closed-form solution for a two-segment chain.
    TwoBone,
    /// Forward And Backward Reaching IK, for chains of any length.
    Fabrik,
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// Configuration for the solver bound to a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Algorithm {
    /// Solving method.
    pub kind: SolverKind,
    /// Iteration cap for iterative methods.
    pub max_iterations: u16,
    /// Convergence tolerance (meters).
    pub tolerance: f32,
    /// Whether joint constraints are enforced during solving.
    pub constraints: bool,
    /// Whether effector target rotations are solved for.
    pub target_rotations: bool,
}

impl Algorithm {
    /// Create a descriptor for the given method with default settings.
    pub const fn new(kind: SolverKind) -> Self {
        Self {
            kind,
            max_iterations: 20,
            tolerance: 1e-3,
            constraints: false,
            target_rotations: false,
        }
    }

    /// Set the iteration cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u16) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable joint constraint enforcement.
    #[must_use]
    pub const fn with_constraints(mut self) -> Self {
        self.constraints = true;
        self
    }

    /// Enable target rotation solving.
    #[must_use]
    pub const fn with_target_rotations(mut self) -> Self {
        self.target_rotations = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
