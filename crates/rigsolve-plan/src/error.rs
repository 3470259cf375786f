//! Error types for job-list construction.

use rigsolve_skeleton::NodeId;

/// Errors surfaced by [`JobList::build`](crate::JobList::build) and
/// [`JobList::update`](crate::JobList::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// No node in the skeleton carries an effector. The job list has no
    /// work; reported explicitly rather than silently accepted so callers
    /// can detect the empty state.
    #[error("no effectors attached anywhere in the skeleton")]
    NoEffectors,

    /// The subtree rooted at `root` has no algorithm descriptor on itself
    /// or any ancestor. The rebuild is aborted; a partial solver set is
    /// not usable.
    #[error("no algorithm assigned to the subtree rooted at node {root}")]
    NoAlgorithm {
        /// Root of the subtree that failed to resolve.
        root: NodeId,
    },

    /// A childless node carries no effector. Every skeleton leaf must be a
    /// chain terminus; this indicates the marking pass and the tree
    /// topology disagree and is not recoverable.
    #[error("leaf node {node} has no effector attached")]
    UnmarkedLeaf {
        /// The offending leaf.
        node: NodeId,
    },

    /// A node was marked as a chain terminal but no subtree was open at
    /// that point of the descent. Indicates a defective marking map.
    #[error("node {node} is marked as a chain terminal outside any subtree")]
    TerminalOutsideSubtree {
        /// The offending node.
        node: NodeId,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
