//! Error types for skeleton construction and attachment.

use crate::node::NodeId;

/// Errors that can occur while building or mutating a skeleton.
#[derive(Debug, thiserror::Error)]
pub enum SkeletonError {
    /// The referenced node does not exist in this skeleton.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// The node already carries an effector.
    #[error("node {0} already has an effector attached")]
    EffectorAlreadyAttached(NodeId),

    /// The node carries no effector to detach.
    #[error("node {0} has no effector attached")]
    NoEffectorAttached(NodeId),

    /// The node already carries an algorithm descriptor.
    #[error("node {0} already has an algorithm attached")]
    AlgorithmAlreadyAttached(NodeId),

    /// The node carries no algorithm descriptor to detach.
    #[error("node {0} has no algorithm attached")]
    NoAlgorithmAttached(NodeId),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
