//! Jointed-node skeleton hierarchy for IK solving.
//!
//! A [`Skeleton`] is a tree of nodes addressed by stable [`NodeId`]s. Nodes
//! optionally carry an [`Effector`] (a goal the solver should reach) and an
//! [`Algorithm`] descriptor (which solving method applies to subtrees rooted
//! at or below that node).
//!
//! This crate only represents the hierarchy and its attachments. Deciding
//! which chains must be solved, and in what order, is the job of
//! `rigsolve-plan`; the numerical solvers live outside this workspace.

pub mod algorithm;
pub mod effector;
pub mod error;
pub mod node;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use algorithm::{Algorithm, SolverKind};
pub use effector::Effector;
pub use error::SkeletonError;
pub use node::{NodeId, Skeleton};
