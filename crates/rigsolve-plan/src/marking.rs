//! Chain marking: classify every node reachable from an effector chain.
//!
//! For each effector node, the marker walks toward the root for at most
//! `chain_length` steps (unbounded when zero) and assigns each visited node
//! a [`Marking`]. The partitioner later uses these marks to split the
//! skeleton into independently solvable subtrees.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{error, warn};

use rigsolve_skeleton::{NodeId, Skeleton};

use crate::error::PlanError;

// ---------------------------------------------------------------------------
// Marking
// ---------------------------------------------------------------------------

/// A node's role in subtree partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marking {
    /// Mid-chain node; the chain continues above. Section is the strongest
    /// mark: merging never downgrades it.
    Section,
    /// Topmost node of a chain; roots a new subtree covering its
    /// descendants.
    Begin,
    /// Chain terminus; a leaf of the subtree containing it.
    End,
    /// Terminus of the enclosing subtree and simultaneously the root of a
    /// new one for its descendants.
    BeginAndEnd,
}

impl Marking {
    /// Whether this mark roots a subtree (and therefore resolves an
    /// algorithm).
    pub const fn is_boundary(self) -> bool {
        matches!(self, Self::Begin | Self::BeginAndEnd)
    }
}

// ---------------------------------------------------------------------------
// Chain walk
// ---------------------------------------------------------------------------

/// Walk every effector chain and produce the map from node id to
/// [`Marking`].
///
/// The map covers exactly the union of all chains; nodes outside any chain
/// receive no mark. When chains overlap, [`Marking::Section`] overwrites
/// any earlier mark and is itself never overwritten; otherwise the first
/// mark wins.
///
/// Nodes in `effector_nodes` are expected to carry effectors (see
/// [`collect_effector_nodes`](crate::collect_effector_nodes)). A node
/// without one is walked with an unbounded chain, which immediately trips
/// the leaf invariant if it is childless.
///
/// # Errors
///
/// Returns [`PlanError::UnmarkedLeaf`] if a walk visits a childless node
/// with no effector attached. Every skeleton leaf must be a chain
/// terminus; anything else means the topology and the effector set
/// disagree.
pub fn mark_chains(
    skeleton: &Skeleton,
    effector_nodes: &[NodeId],
) -> Result<HashMap<NodeId, Marking>, PlanError> {
    let mut marks = HashMap::new();

    for &start in effector_nodes {
        // Steps remaining before the chain is cut off; `None` walks to the
        // root.
        let mut remaining = skeleton
            .effector(start)
            .and_then(|e| (e.chain_length > 0).then_some(e.chain_length));

        let mut node = start;
        loop {
            let parent = skeleton.parent(node);
            let end_of_chain = remaining == Some(0) || parent.is_none();
            let mark = classify(
                node,
                end_of_chain,
                skeleton.child_count(node) > 0,
                skeleton.effector(node).is_some(),
                skeleton.algorithm(node).is_some(),
            )?;

            if skeleton.algorithm(node).is_some() && !mark.is_boundary() {
                warn!(
                    node = %node,
                    "attached algorithm is unreachable: node never roots a subtree"
                );
            }

            match marks.entry(node) {
                Entry::Occupied(mut existing) => {
                    // A junction that is pass-through for any chain must
                    // never be treated as a terminus.
                    if mark == Marking::Section {
                        *existing.get_mut() = Marking::Section;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(mark);
                }
            }

            match parent {
                Some(p) if !end_of_chain => {
                    node = p;
                    remaining = remaining.map(|n| n - 1);
                }
                _ => break,
            }
        }
    }

    Ok(marks)
}

/// The fixed decision table selecting a mark from the four per-node flags.
fn classify(
    node: NodeId,
    end_of_chain: bool,
    has_children: bool,
    has_effector: bool,
    has_algorithm: bool,
) -> Result<Marking, PlanError> {
    match (has_children, has_effector, has_algorithm, end_of_chain) {
        // A childless node on a chain must itself be an effector terminus.
        (false, false, _, _) => {
            error!(node = %node, "found a leaf node with no effector attached");
            Err(PlanError::UnmarkedLeaf { node })
        }

        // Plain interior nodes: pass-through until the chain is cut off.
        (true, false, _, false) => Ok(Marking::Section),
        (true, false, _, true) => Ok(Marking::Begin),

        // Effector leaves terminate their chain.
        (false, true, false, _) => Ok(Marking::End),

        // An effector with descendants terminates the enclosing subtree and
        // roots a new one for the chains beneath it.
        (true, true, false, _) => Ok(Marking::BeginAndEnd),

        // An effector leaf carrying its own algorithm must root its own
        // subtree so the algorithm applies to it.
        (false, true, true, false) => Ok(Marking::Begin),
        (false, true, true, true) => Ok(Marking::BeginAndEnd),
        (true, true, true, _) => Ok(Marking::BeginAndEnd),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
