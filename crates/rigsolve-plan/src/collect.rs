//! Effector collection: find every node carrying an effector.

use rigsolve_skeleton::{NodeId, Skeleton};

/// Collect the ids of all nodes carrying an effector, depth-first.
///
/// Children are visited before their parent, siblings in skeleton insertion
/// order, so the result is deterministic for a given skeleton.
pub fn collect_effector_nodes(skeleton: &Skeleton) -> Vec<NodeId> {
    let mut result = Vec::new();
    visit(skeleton, skeleton.root(), &mut result);
    result
}

fn visit(skeleton: &Skeleton, node: NodeId, result: &mut Vec<NodeId>) {
    for &child in skeleton.children(node) {
        visit(skeleton, child, result);
    }
    if skeleton.effector(node).is_some() {
        result.push(node);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
