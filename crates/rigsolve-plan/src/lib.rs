//! Partitions a skeleton into the minimal set of independently solvable
//! chain segments and binds each to an algorithm.
//!
//! # Architecture
//!
//! ```text
//! Skeleton ──► collect ──► mark_chains ──► partition ──► JobList
//!              (effector    (per-node       (subtrees +   (dependency-
//!               nodes)       Marking)        algorithms)   ordered jobs)
//! ```
//!
//! Effector chain-length limits can isolate parts of the skeleton, so a
//! single rig may need several solver instances executed in order: a
//! segment lower in the tree must be solved before any segment that
//! contains its root as a leaf. [`JobList`] produces exactly that order;
//! consumers execute jobs front to back, constructing one solver per
//! [`SolverJob`] from its subtree and resolved algorithm.
//!
//! This crate decides *which* chains are solved and *in what order*; it
//! computes no joint transforms itself.
//!
//! # Quick start
//!
//! ```
//! use rigsolve_plan::JobList;
//! use rigsolve_skeleton::{Algorithm, Effector, Skeleton, SolverKind};
//!
//! let mut skeleton = Skeleton::new();
//! let hip = skeleton.add_child(skeleton.root())?;
//! let knee = skeleton.add_child(hip)?;
//! let foot = skeleton.add_child(knee)?;
//! skeleton.attach_effector(foot, Effector::default())?;
//! skeleton.attach_algorithm(skeleton.root(), Algorithm::new(SolverKind::Fabrik))?;
//!
//! let jobs = JobList::build(&skeleton)?;
//! assert_eq!(jobs.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod collect;
pub mod error;
pub mod joblist;
pub mod marking;
pub mod partition;
pub mod subtree;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use collect::collect_effector_nodes;
pub use error::PlanError;
pub use joblist::{JobList, SolverJob};
pub use marking::{mark_chains, Marking};
pub use partition::partition;
pub use subtree::Subtree;
