//! A disjoint, independently solvable segment of the skeleton.

use rigsolve_skeleton::NodeId;

/// One solvable segment: a root node plus the chain terminals beneath it.
///
/// A subtree's root is the node closest to the skeleton root; its leaves
/// are the terminal nodes where the segment's chains end, in the order the
/// partitioner discovered them. A leaf of one subtree may simultaneously
/// be the root of another: that node is the hand-off point where the child
/// segment's result feeds into the parent segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtree {
    root: NodeId,
    leaves: Vec<NodeId>,
}

impl Subtree {
    /// Create a subtree rooted at `root` with no leaves yet.
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            leaves: Vec::new(),
        }
    }

    /// The segment's root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The segment's chain terminals, in discovery order.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Number of chain terminals.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Whether `node` is one of this segment's chain terminals.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.leaves.contains(&node)
    }

    pub(crate) fn push_leaf(&mut self, node: NodeId) {
        self.leaves.push(node);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rigsolve_skeleton::Skeleton;

    #[test]
    fn new_subtree_has_no_leaves() {
        let s = Skeleton::new();
        let subtree = Subtree::new(s.root());
        assert_eq!(subtree.root(), s.root());
        assert!(subtree.leaves().is_empty());
        assert_eq!(subtree.leaf_count(), 0);
    }

    #[test]
    fn leaves_keep_push_order() {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();
        let b = s.add_child(s.root()).unwrap();

        let mut subtree = Subtree::new(s.root());
        subtree.push_leaf(b);
        subtree.push_leaf(a);

        assert_eq!(subtree.leaves(), &[b, a]);
        assert!(subtree.is_leaf(a));
        assert!(subtree.is_leaf(b));
        assert!(!subtree.is_leaf(s.root()));
    }
}
