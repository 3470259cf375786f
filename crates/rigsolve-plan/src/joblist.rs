//! The ordered, dependency-sorted collection of solver jobs.

use std::slice;

use tracing::{debug, warn};

use rigsolve_skeleton::{Algorithm, NodeId, Skeleton};

use crate::collect::collect_effector_nodes;
use crate::error::PlanError;
use crate::marking::mark_chains;
use crate::partition::partition;
use crate::subtree::Subtree;

// ---------------------------------------------------------------------------
// SolverJob
// ---------------------------------------------------------------------------

/// One segment bound to the algorithm that will solve it.
///
/// The structural description ([`Subtree`]) and the resolved [`Algorithm`]
/// are all a solver implementation needs to instantiate itself; whether the
/// segment's shape suits the method (e.g. a two-bone solver on a two-segment
/// chain) is that implementation's contract to check.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverJob {
    subtree: Subtree,
    algorithm: Algorithm,
}

impl SolverJob {
    pub(crate) fn new(subtree: Subtree, algorithm: Algorithm) -> Self {
        Self { subtree, algorithm }
    }

    /// The segment this job solves.
    pub fn subtree(&self) -> &Subtree {
        &self.subtree
    }

    /// The algorithm resolved for this segment.
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }
}

// ---------------------------------------------------------------------------
// JobList
// ---------------------------------------------------------------------------

/// All solver jobs for one skeleton, in dependency order.
///
/// A job whose segment is a descendant of another job's segment appears
/// earlier, so consumers can execute jobs front to back and every hand-off
/// node is solved before the segment that depends on it.
///
/// The list owns its jobs outright and records the root id it was built
/// from; the skeleton itself stays with the caller and must outlive every
/// [`update`](Self::update).
#[derive(Debug)]
pub struct JobList {
    root: NodeId,
    jobs: Vec<SolverJob>,
}

impl JobList {
    /// Build a job list for `skeleton`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`update`](Self::update).
    pub fn build(skeleton: &Skeleton) -> Result<Self, PlanError> {
        let mut list = Self {
            root: skeleton.root(),
            jobs: Vec::new(),
        };
        list.update(skeleton)?;
        Ok(list)
    }

    /// Recompute the partition from scratch, e.g. after effectors or the
    /// topology changed.
    ///
    /// The previous jobs are discarded before the new set is built: if
    /// partitioning fails, the list is left empty rather than restored.
    /// Failures detected before that point (no effectors, defective
    /// marking) leave the previous jobs in place.
    ///
    /// # Errors
    ///
    /// - [`PlanError::NoEffectors`] if no node carries an effector.
    /// - [`PlanError::UnmarkedLeaf`] if a childless node ends up outside
    ///   every chain.
    /// - [`PlanError::TerminalOutsideSubtree`] on a defective marking map.
    /// - [`PlanError::NoAlgorithm`] if a segment resolves no algorithm.
    pub fn update(&mut self, skeleton: &Skeleton) -> Result<(), PlanError> {
        let effector_nodes = collect_effector_nodes(skeleton);
        if effector_nodes.is_empty() {
            warn!("no effectors found in the skeleton; job list not rebuilt");
            return Err(PlanError::NoEffectors);
        }

        let marks = mark_chains(skeleton, &effector_nodes)?;

        // Old jobs are released before partitioning; a failure below leaves
        // the list empty.
        self.jobs.clear();
        self.root = skeleton.root();
        self.jobs = partition(skeleton, &marks)?;

        debug!(
            jobs = self.jobs.len(),
            effectors = effector_nodes.len(),
            "job list rebuilt"
        );
        Ok(())
    }

    /// The skeleton root this list was built from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the list holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The jobs in dependency (children-before-parents) order.
    pub fn jobs(&self) -> &[SolverJob] {
        &self.jobs
    }

    /// Iterate over the jobs in dependency order.
    pub fn iter(&self) -> slice::Iter<'_, SolverJob> {
        self.jobs.iter()
    }
}

impl<'a> IntoIterator for &'a JobList {
    type Item = &'a SolverJob;
    type IntoIter = slice::Iter<'a, SolverJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rigsolve_skeleton::{Effector, SolverKind};

    /// root -> a -> b(effector, unbounded) -> c -> d(effector, chain 2),
    /// Fabrik on the root. Partitions into two dependent segments.
    fn two_segment_rig() -> (Skeleton, [NodeId; 5]) {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();
        let b = s.add_child(a).unwrap();
        let c = s.add_child(b).unwrap();
        let d = s.add_child(c).unwrap();
        s.attach_effector(b, Effector::default()).unwrap();
        s.attach_effector(d, Effector::default().with_chain_length(2))
            .unwrap();
        s.attach_algorithm(s.root(), Algorithm::new(SolverKind::Fabrik))
            .unwrap();
        let root = s.root();
        (s, [root, a, b, c, d])
    }

    #[test]
    fn build_produces_dependency_ordered_jobs() {
        let (s, [root, _, b, _, d]) = two_segment_rig();
        let list = JobList::build(&s).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.root(), root);
        assert!(!list.is_empty());

        let jobs: Vec<&SolverJob> = list.iter().collect();
        assert_eq!(jobs[0].subtree().root(), b);
        assert_eq!(jobs[0].subtree().leaves(), &[d]);
        assert_eq!(jobs[1].subtree().root(), root);
        assert_eq!(jobs[1].subtree().leaves(), &[b]);
    }

    #[test]
    fn build_fails_without_effectors() {
        let mut s = Skeleton::new();
        let _a = s.add_child(s.root()).unwrap();
        assert_eq!(JobList::build(&s).unwrap_err(), PlanError::NoEffectors);
    }

    #[test]
    fn build_fails_without_algorithm() {
        let mut s = Skeleton::new();
        let a = s.add_child(s.root()).unwrap();
        s.attach_effector(a, Effector::default()).unwrap();
        assert!(matches!(
            JobList::build(&s),
            Err(PlanError::NoAlgorithm { .. })
        ));
    }

    #[test]
    fn update_is_idempotent() {
        let (s, _) = two_segment_rig();
        let mut list = JobList::build(&s).unwrap();
        let before: Vec<SolverJob> = list.iter().cloned().collect();

        list.update(&s).unwrap();
        let after: Vec<SolverJob> = list.iter().cloned().collect();

        assert_eq!(before, after);
    }

    #[test]
    fn no_effectors_keeps_previous_jobs() {
        let (mut s, [_, _, b, _, d]) = two_segment_rig();
        let mut list = JobList::build(&s).unwrap();
        assert_eq!(list.len(), 2);

        s.detach_effector(b).unwrap();
        s.detach_effector(d).unwrap();

        assert_eq!(list.update(&s).unwrap_err(), PlanError::NoEffectors);
        // Failure happened before the old set was discarded.
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn failed_rebuild_leaves_list_empty() {
        let (mut s, [root, ..]) = two_segment_rig();
        let mut list = JobList::build(&s).unwrap();
        assert_eq!(list.len(), 2);

        // Partitioning now fails at algorithm resolution, after the old
        // jobs were discarded.
        s.detach_algorithm(root).unwrap();
        assert!(matches!(
            list.update(&s),
            Err(PlanError::NoAlgorithm { .. })
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn update_reflects_effector_changes() {
        let (mut s, [_, _, b, _, d]) = two_segment_rig();
        let mut list = JobList::build(&s).unwrap();
        assert_eq!(list.len(), 2);

        // Removing the hand-off effector collapses the rig into the single
        // bounded segment above d.
        s.detach_effector(b).unwrap();
        list.update(&s).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.jobs()[0].subtree().root(), b);
        assert_eq!(list.jobs()[0].subtree().leaves(), &[d]);
    }

    #[test]
    fn into_iterator_walks_jobs_in_order() {
        let (s, _) = two_segment_rig();
        let list = JobList::build(&s).unwrap();

        let mut count = 0;
        for job in &list {
            assert!(job.subtree().leaf_count() >= 1);
            count += 1;
        }
        assert_eq!(count, list.len());
    }
}
