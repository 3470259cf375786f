//! Subtree partitioning: split a marked skeleton into solver jobs.
//!
//! Recursive descent from the skeleton root, guided by the marking map.
//! Children are fully processed, and their jobs appended, before a subtree
//! constructs its own job; the resulting job order is therefore a valid
//! topological (children-before-parents) order.

use std::collections::HashMap;

use tracing::error;

use rigsolve_skeleton::{Algorithm, NodeId, Skeleton};

use crate::error::PlanError;
use crate::joblist::SolverJob;
use crate::marking::Marking;
use crate::subtree::Subtree;

/// Partition the skeleton into solver jobs according to the marking map.
///
/// Chain length limits can isolate parts of the tree, splitting it into a
/// list of segments which must be solved in order; the returned vector
/// holds one job per Begin/BeginAndEnd mark, dependency-ordered.
///
/// # Errors
///
/// - [`PlanError::UnmarkedLeaf`] if a childless node carries no mark: the
///   marking map and the topology disagree.
/// - [`PlanError::TerminalOutsideSubtree`] if an End/BeginAndEnd mark is
///   found with no enclosing subtree open.
/// - [`PlanError::NoAlgorithm`] if a segment resolves no algorithm.
pub fn partition(
    skeleton: &Skeleton,
    marks: &HashMap<NodeId, Marking>,
) -> Result<Vec<SolverJob>, PlanError> {
    let mut jobs = Vec::new();
    descend(skeleton, skeleton.root(), None, marks, &mut jobs)?;
    Ok(jobs)
}

fn descend(
    skeleton: &Skeleton,
    node: NodeId,
    mut current: Option<&mut Subtree>,
    marks: &HashMap<NodeId, Marking>,
    jobs: &mut Vec<SolverJob>,
) -> Result<(), PlanError> {
    match marks.get(&node).copied() {
        // Outside every effector's reach: not part of any job, but chains
        // may still exist further down.
        None => {
            if skeleton.child_count(node) == 0 {
                error!(node = %node, "unmarked leaf node reached the partitioner");
                return Err(PlanError::UnmarkedLeaf { node });
            }
            for &child in skeleton.children(node) {
                descend(skeleton, child, current.as_deref_mut(), marks, jobs)?;
            }
        }

        // Interior node of the current segment.
        Some(Marking::Section) => {
            for &child in skeleton.children(node) {
                descend(skeleton, child, current.as_deref_mut(), marks, jobs)?;
            }
        }

        // Chain terminus. The node can still be pass-through for chains
        // attached beneath it, so the descent continues in the same
        // segment.
        Some(Marking::End) => {
            match current.as_deref_mut() {
                Some(subtree) => subtree.push_leaf(node),
                None => return Err(PlanError::TerminalOutsideSubtree { node }),
            }
            for &child in skeleton.children(node) {
                descend(skeleton, child, current.as_deref_mut(), marks, jobs)?;
            }
        }

        // Terminus of the enclosing segment and root of a new one.
        Some(Marking::BeginAndEnd) => {
            match current {
                Some(subtree) => subtree.push_leaf(node),
                None => return Err(PlanError::TerminalOutsideSubtree { node }),
            }
            begin_subtree(skeleton, node, marks, jobs)?;
        }

        Some(Marking::Begin) => begin_subtree(skeleton, node, marks, jobs)?,
    }

    Ok(())
}

/// Open a new segment rooted at `node`, finish it bottom-up, and append its
/// job after all jobs of the segments beneath it.
fn begin_subtree(
    skeleton: &Skeleton,
    node: NodeId,
    marks: &HashMap<NodeId, Marking>,
    jobs: &mut Vec<SolverJob>,
) -> Result<(), PlanError> {
    let mut subtree = Subtree::new(node);
    for &child in skeleton.children(node) {
        descend(skeleton, child, Some(&mut subtree), marks, jobs)?;
    }

    let algorithm = resolve_algorithm(skeleton, node)?;
    jobs.push(SolverJob::new(subtree, algorithm));
    Ok(())
}

/// Resolve the algorithm for a segment: nearest ancestor-or-self carrying a
/// descriptor, up to and including the skeleton root.
fn resolve_algorithm(skeleton: &Skeleton, root: NodeId) -> Result<Algorithm, PlanError> {
    let mut node = Some(root);
    while let Some(id) = node {
        if let Some(algorithm) = skeleton.algorithm(id) {
            return Ok(algorithm.clone());
        }
        node = skeleton.parent(id);
    }
    error!(root = %root, "no algorithm assigned to subtree");
    Err(PlanError::NoAlgorithm { root })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
