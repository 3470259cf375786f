//! Arena-backed skeleton hierarchy.
//!
//! A [`Skeleton`] owns all of its nodes in a flat arena; nodes are addressed
//! by copyable [`NodeId`] handles. The tree is acyclic by construction:
//! children can only be added under an existing node and parent links are
//! never re-wired.

use std::fmt;

use crate::algorithm::Algorithm;
use crate::effector::Effector;
use crate::error::SkeletonError;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Stable identifier of a node within a [`Skeleton`].
///
/// Ids are arena indices: cheap to copy, hash, and order. They are only
/// meaningful for the skeleton that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node every skeleton is created with.
    pub const ROOT: Self = Self(0);

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Per-node storage: hierarchy links plus optional attachments.
#[derive(Debug, Clone, Default)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    effector: Option<Effector>,
    algorithm: Option<Algorithm>,
}

// ---------------------------------------------------------------------------
// Skeleton
// ---------------------------------------------------------------------------

/// A tree of jointed nodes with optional per-node effector and algorithm
/// attachments.
///
/// Read accessors take a [`NodeId`] and return data for that node; they
/// panic if handed an id from a different skeleton, since ids cannot
/// dangle within the skeleton that issued them.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    nodes: Vec<Node>,
}

impl Skeleton {
    /// Create a skeleton containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` refers to a node in this skeleton.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Add a new childless node under `parent`.
    ///
    /// Sibling order is insertion order and is stable thereafter.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::UnknownNode`] if `parent` is not in this
    /// skeleton.
    pub fn add_child(&mut self, parent: NodeId) -> Result<NodeId, SkeletonError> {
        if !self.contains(parent) {
            return Err(SkeletonError::UnknownNode(parent));
        }
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            ..Node::default()
        });
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// The node's parent, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The node's children, in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Number of direct children.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// The effector attached to this node, if any.
    pub fn effector(&self, id: NodeId) -> Option<&Effector> {
        self.node(id).effector.as_ref()
    }

    /// The algorithm descriptor attached to this node, if any.
    pub fn algorithm(&self, id: NodeId) -> Option<&Algorithm> {
        self.node(id).algorithm.as_ref()
    }

    /// Attach an effector to a node.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::UnknownNode`] for a foreign id and
    /// [`SkeletonError::EffectorAlreadyAttached`] if the node already
    /// carries an effector.
    pub fn attach_effector(&mut self, id: NodeId, effector: Effector) -> Result<(), SkeletonError> {
        if !self.contains(id) {
            return Err(SkeletonError::UnknownNode(id));
        }
        let slot = &mut self.nodes[id.index()].effector;
        if slot.is_some() {
            return Err(SkeletonError::EffectorAlreadyAttached(id));
        }
        *slot = Some(effector);
        Ok(())
    }

    /// Detach and return the node's effector.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::UnknownNode`] for a foreign id and
    /// [`SkeletonError::NoEffectorAttached`] if none is attached.
    pub fn detach_effector(&mut self, id: NodeId) -> Result<Effector, SkeletonError> {
        if !self.contains(id) {
            return Err(SkeletonError::UnknownNode(id));
        }
        self.nodes[id.index()]
            .effector
            .take()
            .ok_or(SkeletonError::NoEffectorAttached(id))
    }

    /// Attach an algorithm descriptor to a node.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::UnknownNode`] for a foreign id and
    /// [`SkeletonError::AlgorithmAlreadyAttached`] if the node already
    /// carries a descriptor.
    pub fn attach_algorithm(
        &mut self,
        id: NodeId,
        algorithm: Algorithm,
    ) -> Result<(), SkeletonError> {
        if !self.contains(id) {
            return Err(SkeletonError::UnknownNode(id));
        }
        let slot = &mut self.nodes[id.index()].algorithm;
        if slot.is_some() {
            return Err(SkeletonError::AlgorithmAlreadyAttached(id));
        }
        *slot = Some(algorithm);
        Ok(())
    }

    /// Detach and return the node's algorithm descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::UnknownNode`] for a foreign id and
    /// [`SkeletonError::NoAlgorithmAttached`] if none is attached.
    pub fn detach_algorithm(&mut self, id: NodeId) -> Result<Algorithm, SkeletonError> {
        if !self.contains(id) {
            return Err(SkeletonError::UnknownNode(id));
        }
        self.nodes[id.index()]
            .algorithm
            .take()
            .ok_or(SkeletonError::NoAlgorithmAttached(id))
    }

    /// Iterate over all node ids in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::SolverKind;

    #[test]
    fn new_skeleton_has_only_root() {
        let s = Skeleton::new();
        assert_eq!(s.node_count(), 1);
        assert_eq!(s.root(), NodeId::ROOT);
        assert!(s.parent(s.root()).is_none());
        assert!(s.children(s.root()).is_empty());
    }

    #[test]
    fn add_child_links_both_ways() {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();
        let b = s.add_child(a).unwrap();

        assert_eq!(s.parent(a), Some(s.root()));
        assert_eq!(s.parent(b), Some(a));
        assert_eq!(s.children(s.root()), &[a]);
        assert_eq!(s.children(a), &[b]);
        assert_eq!(s.node_count(), 3);
    }

    #[test]
    fn sibling_order_is_insertion_order() {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();
        let b = s.add_child(s.root()).unwrap();
        let c = s.add_child(s.root()).unwrap();
        assert_eq!(s.children(s.root()), &[a, b, c]);
    }

    #[test]
    fn add_child_unknown_parent() {
        let mut s = Skeleton::new();
        let foreign = NodeId::from_index(42);
        assert!(matches!(
            s.add_child(foreign),
            Err(SkeletonError::UnknownNode(_))
        ));
    }

    #[test]
    fn effector_attach_detach() {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();

        assert!(s.effector(a).is_none());
        s.attach_effector(a, Effector::default().with_chain_length(2))
            .unwrap();
        assert_eq!(s.effector(a).unwrap().chain_length, 2);

        // Double attach is rejected, existing effector untouched.
        assert!(matches!(
            s.attach_effector(a, Effector::default()),
            Err(SkeletonError::EffectorAlreadyAttached(_))
        ));
        assert_eq!(s.effector(a).unwrap().chain_length, 2);

        let detached = s.detach_effector(a).unwrap();
        assert_eq!(detached.chain_length, 2);
        assert!(s.effector(a).is_none());
        assert!(matches!(
            s.detach_effector(a),
            Err(SkeletonError::NoEffectorAttached(_))
        ));
    }

    #[test]
    fn algorithm_attach_detach() {
        let mut s = Skeleton::new();
        s.attach_algorithm(s.root(), Algorithm::new(SolverKind::Fabrik))
            .unwrap();
        assert_eq!(s.algorithm(s.root()).unwrap().kind, SolverKind::Fabrik);

        assert!(matches!(
            s.attach_algorithm(s.root(), Algorithm::new(SolverKind::OneBone)),
            Err(SkeletonError::AlgorithmAlreadyAttached(_))
        ));

        let detached = s.detach_algorithm(s.root()).unwrap();
        assert_eq!(detached.kind, SolverKind::Fabrik);
        assert!(s.algorithm(s.root()).is_none());
    }

    #[test]
    fn node_ids_cover_all_nodes() {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();
        let b = s.add_child(a).unwrap();
        let ids: Vec<NodeId> = s.node_ids().collect();
        assert_eq!(ids, vec![s.root(), a, b]);
    }

    #[test]
    fn node_id_display() {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();
        assert_eq!(s.root().to_string(), "#0");
        assert_eq!(a.to_string(), "#1");
    }
}
