//! The branch-and-price search tree.

use crate::arena::NodeArena;
use crate::branching::BranchingDecision;
use crate::node::{Node, NodeId, NodeStatus};
use crate::settings::SearchSettings;

/// Running statistics about the search tree.
///
/// Counters are maintained incrementally by the tree as nodes are created,
/// branched, processed and pruned; at every observable instant they agree
/// with a full scan of the stored nodes.
#[derive(Debug, Clone)]
pub struct TreeStats {
    /// Total nodes allocated, root included.
    pub nodes_created: u64,

    /// Nodes that left the Pending/Processing states.
    pub nodes_processed: u64,

    /// Nodes pruned because their bound met the global upper bound.
    pub nodes_pruned_bound: u64,

    /// Nodes whose LP relaxation was infeasible.
    pub nodes_pruned_infeasible: u64,

    /// Nodes that produced an integer solution.
    pub nodes_integer: u64,

    /// Nodes branched into children.
    pub nodes_branched: u64,

    /// Nodes currently open (Pending).
    pub nodes_open: u64,

    /// Deepest node created so far.
    pub max_depth: usize,

    /// Best known global lower bound.
    pub best_lower_bound: f64,

    /// Best known global upper bound.
    pub best_upper_bound: f64,
}

impl Default for TreeStats {
    fn default() -> Self {
        Self {
            nodes_created: 0,
            nodes_processed: 0,
            nodes_pruned_bound: 0,
            nodes_pruned_infeasible: 0,
            nodes_integer: 0,
            nodes_branched: 0,
            nodes_open: 0,
            max_depth: 0,
            best_lower_bound: f64::NEG_INFINITY,
            best_upper_bound: f64::INFINITY,
        }
    }
}

impl TreeStats {
    /// Relative optimality gap between the recorded best bounds.
    pub fn gap(&self) -> f64 {
        relative_gap(self.best_lower_bound, self.best_upper_bound)
    }
}

// Shared gap formula: infinite on an open bound, exact-zero handling near
// an upper bound of zero.
fn relative_gap(lower: f64, upper: f64) -> f64 {
    if upper == f64::INFINITY || lower == f64::NEG_INFINITY {
        return f64::INFINITY;
    }
    if upper.abs() < 1e-10 {
        return if lower.abs() < 1e-10 {
            0.0
        } else {
            f64::INFINITY
        };
    }
    (upper - lower) / upper.abs()
}

/// The branch-and-price search tree: the authoritative store of nodes.
///
/// The tree owns every node through a chunked arena and is the only party
/// that assigns identity and rewires structure. The external LP solver
/// mutates per-node bounds through [`Tree::node_mut`]; selectors hold node
/// ids and resolve them back through [`Tree::node`].
///
/// Ids are handed out densely from 0 (the root), so the id of a node is
/// also its slot ordinal in the arena.
#[derive(Debug)]
pub struct Tree {
    minimize: bool,
    arena: NodeArena,
    next_id: NodeId,
    incumbent_id: Option<NodeId>,
    global_lower_bound: f64,
    global_upper_bound: f64,
    stats: TreeStats,
}

impl Tree {
    /// Create a tree with a root node already allocated and counted.
    ///
    /// `minimize` records the optimization sense; it affects how bound
    /// improvements are interpreted by the driver, not the structure.
    pub fn new(minimize: bool) -> Self {
        Self::with_settings(minimize, &SearchSettings::default())
    }

    /// Create a tree using the arena chunk size from `settings`.
    pub fn with_settings(minimize: bool, settings: &SearchSettings) -> Self {
        let mut tree = Self {
            minimize,
            arena: NodeArena::with_chunk_size(settings.chunk_size),
            next_id: 0,
            incumbent_id: None,
            global_lower_bound: f64::NEG_INFINITY,
            global_upper_bound: f64::INFINITY,
            stats: TreeStats::default(),
        };
        tree.alloc_root();
        tree
    }

    fn alloc_root(&mut self) {
        debug_assert_eq!(self.arena.len(), 0);
        self.arena.alloc(Node::root());
        self.next_id = 1;
        self.stats.nodes_created = 1;
        self.stats.nodes_open = 1;
    }

    /// Whether this tree minimizes the objective.
    pub fn is_minimizing(&self) -> bool {
        self.minimize
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        self.arena.get(0).expect("tree always has a root")
    }

    /// The root node, mutably.
    pub fn root_mut(&mut self) -> &mut Node {
        self.arena.get_mut(0).expect("tree always has a root")
    }

    /// Id of the root node.
    pub fn root_id(&self) -> NodeId {
        self.root().id()
    }

    /// Look up a node by id. `None` for ids this tree never assigned.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if id < 0 {
            return None;
        }
        self.arena.get(id as usize)
    }

    /// Look up a node by id, mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id < 0 {
            return None;
        }
        self.arena.get_mut(id as usize)
    }

    /// Whether `id` names a node of this tree.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Total number of nodes stored.
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Approximate memory held by the node storage, in bytes.
    pub fn memory_usage(&self) -> usize {
        self.arena.memory_usage()
    }

    /// Create a child of `parent` carrying `decision`.
    ///
    /// The child starts Pending at depth `parent.depth() + 1`, inherits the
    /// parent's accumulated decisions (the propagation point, O(depth) per
    /// child) and the parent's bounds as a first estimate.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn create_child(&mut self, parent: NodeId, decision: BranchingDecision) -> NodeId {
        let (parent_depth, parent_lb, parent_ub, inherited) = {
            let p = self
                .node(parent)
                .expect("create_child: parent is not a node of this tree");
            (p.depth(), p.lower_bound, p.upper_bound, p.all_decisions())
        };

        let id = self.next_id;
        self.next_id += 1;
        debug_assert_eq!(id as usize, self.arena.len());

        let depth = parent_depth + 1;
        let mut child = Node::child(id, parent, depth, decision);
        child.set_inherited_decisions(inherited);
        child.lower_bound = parent_lb;
        child.upper_bound = parent_ub;
        self.arena.alloc(child);

        // The parent was checked above, so this lookup cannot fail.
        if let Some(p) = self.node_mut(parent) {
            p.add_child(id);
        }

        self.stats.nodes_created += 1;
        self.stats.nodes_open += 1;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }

        id
    }

    /// Create one child per decision, left to right, then mark the parent
    /// Branched.
    ///
    /// The parent leaves the open frontier exactly once, whatever the
    /// number of children, including zero. Branching with an empty
    /// decision list therefore fathoms the parent; drivers should only do
    /// that on purpose.
    pub fn create_children(
        &mut self,
        parent: NodeId,
        decisions: &[BranchingDecision],
    ) -> Vec<NodeId> {
        let children: Vec<NodeId> = decisions
            .iter()
            .map(|decision| self.create_child(parent, decision.clone()))
            .collect();

        if let Some(p) = self.node_mut(parent) {
            p.status = NodeStatus::Branched;
        }
        self.stats.nodes_branched += 1;
        self.stats.nodes_open = self.stats.nodes_open.saturating_sub(1);

        children
    }

    /// Transition a node to `new_status` and update the statistics.
    ///
    /// The first transition out of Pending/Processing counts the node as
    /// processed and, unless the new status is `Branched` (which
    /// [`Tree::create_children`] accounts for itself), removes it from the
    /// open count. Unknown ids are ignored.
    pub fn mark_processed(&mut self, id: NodeId, new_status: NodeStatus) {
        let old_status = match self.node_mut(id) {
            Some(node) => {
                let old = node.status;
                node.status = new_status;
                old
            }
            None => return,
        };

        if !old_status.is_terminal() {
            self.stats.nodes_processed += 1;
            if new_status != NodeStatus::Branched {
                self.stats.nodes_open = self.stats.nodes_open.saturating_sub(1);
            }
        }

        match new_status {
            NodeStatus::PrunedBound => self.stats.nodes_pruned_bound += 1,
            NodeStatus::PrunedInfeasible => self.stats.nodes_pruned_infeasible += 1,
            NodeStatus::Integer => self.stats.nodes_integer += 1,
            _ => {}
        }
    }

    /// Current global lower bound.
    pub fn global_lower_bound(&self) -> f64 {
        self.global_lower_bound
    }

    /// Current global upper bound.
    pub fn global_upper_bound(&self) -> f64 {
        self.global_upper_bound
    }

    /// Overwrite the global lower bound.
    pub fn set_global_lower_bound(&mut self, lb: f64) {
        self.global_lower_bound = lb;
    }

    /// Overwrite the global upper bound.
    pub fn set_global_upper_bound(&mut self, ub: f64) {
        self.global_upper_bound = ub;
    }

    /// Pull the global upper bound down from a freshly processed node.
    ///
    /// If the node carries an integer solution whose LP value strictly
    /// improves the global upper bound, the bound (and
    /// `stats.best_upper_bound`) is updated and `true` is returned. The
    /// global lower bound is not recomputed here; the driver derives it
    /// from the selector's open set via [`Tree::compute_lower_bound`].
    pub fn update_bounds(&mut self, id: NodeId) -> bool {
        let (is_integer, lp_value) = match self.node(id) {
            Some(node) => (node.is_integer, node.lp_value),
            None => return false,
        };

        if is_integer && lp_value < self.global_upper_bound {
            self.global_upper_bound = lp_value;
            self.stats.best_upper_bound = lp_value;
            log::debug!(
                "integer solution at node {} improved the upper bound to {:.6e}",
                id,
                lp_value
            );
            return true;
        }
        false
    }

    /// Minimum lower bound over the explorable nodes in `open_ids`, capped
    /// above by the global upper bound (which is what an empty set yields).
    pub fn compute_lower_bound(&self, open_ids: &[NodeId]) -> f64 {
        let mut lb = self.global_upper_bound;
        for &id in open_ids {
            if let Some(node) = self.node(id) {
                if node.can_be_explored() {
                    lb = lb.min(node.lower_bound);
                }
            }
        }
        lb
    }

    /// Prune every explorable node whose lower bound meets the global
    /// upper bound. Returns the number of newly pruned nodes.
    pub fn prune_by_bound(&mut self) -> usize {
        let global_upper = self.global_upper_bound;
        let mut pruned: usize = 0;
        for node in self.arena.iter_mut() {
            if node.can_be_explored() && node.try_prune_by_bound(global_upper) {
                pruned += 1;
            }
        }

        self.stats.nodes_pruned_bound += pruned as u64;
        self.stats.nodes_open = self.stats.nodes_open.saturating_sub(pruned as u64);
        if pruned > 0 {
            log::debug!("bound pruning removed {} open nodes", pruned);
        }
        pruned
    }

    /// Ids of all explorable nodes.
    pub fn open_nodes(&self) -> Vec<NodeId> {
        self.arena
            .iter()
            .filter(|node| node.can_be_explored())
            .map(|node| node.id())
            .collect()
    }

    /// Whether no open nodes remain.
    pub fn is_complete(&self) -> bool {
        self.stats.nodes_open == 0
    }

    /// Relative optimality gap between the global bounds.
    pub fn gap(&self) -> f64 {
        relative_gap(self.global_lower_bound, self.global_upper_bound)
    }

    /// The incumbent node, if an integer solution has been recorded.
    pub fn incumbent(&self) -> Option<&Node> {
        self.incumbent_id.and_then(|id| self.node(id))
    }

    /// Id of the incumbent node, if any.
    pub fn incumbent_id(&self) -> Option<NodeId> {
        self.incumbent_id
    }

    /// Record `id` as the incumbent and pull the global upper bound down
    /// to its LP value.
    ///
    /// The caller guarantees the node carries an integer solution.
    /// Unknown ids are ignored.
    pub fn set_incumbent(&mut self, id: NodeId) {
        let lp_value = match self.node(id) {
            Some(node) => node.lp_value,
            None => return,
        };
        self.incumbent_id = Some(id);
        self.global_upper_bound = lp_value;
        self.stats.best_upper_bound = lp_value;
        log::debug!("incumbent set to node {} with value {:.6e}", id, lp_value);
    }

    /// Node ids from the root to `target`, inclusive.
    ///
    /// Unknown ids produce an empty path.
    pub fn path_to_root(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        if !self.has_node(target) {
            return path;
        }

        let mut current = target;
        while let Some(node) = self.node(current) {
            path.push(current);
            current = node.parent_id();
        }
        path.reverse();
        path
    }

    /// Call `f` on every stored node, in id order.
    pub fn for_each_node(&self, mut f: impl FnMut(&Node)) {
        for node in self.arena.iter() {
            f(node);
        }
    }

    /// Tree statistics.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Drop every node and start over from a fresh root.
    ///
    /// Ids restart from 0, bounds and statistics are reset, and the
    /// incumbent is forgotten. The arena is re-seeded in the same
    /// operation, so the tree never exists without a root.
    pub fn reset(&mut self) {
        self.arena.clear();
        self.incumbent_id = None;
        self.global_lower_bound = f64::NEG_INFINITY;
        self.global_upper_bound = f64::INFINITY;
        self.stats = TreeStats::default();
        self.alloc_root();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::INVALID_ID;

    fn binary_decisions() -> Vec<BranchingDecision> {
        vec![
            BranchingDecision::variable_branch(0, 1.0, true),
            BranchingDecision::variable_branch(0, 2.0, false),
        ]
    }

    #[test]
    fn test_tree_creation() {
        let tree = Tree::new(true);

        assert!(tree.is_minimizing());
        assert_eq!(tree.root_id(), 0);
        assert_eq!(tree.num_nodes(), 1);
        assert_eq!(tree.root().depth(), 0);
        assert_eq!(tree.root().parent_id(), INVALID_ID);
        assert_eq!(tree.stats().nodes_created, 1);
        assert_eq!(tree.stats().nodes_open, 1);
        assert_eq!(tree.gap(), f64::INFINITY);
    }

    #[test]
    fn test_maximization_tree() {
        let tree = Tree::new(false);
        assert!(!tree.is_minimizing());
    }

    #[test]
    fn test_create_child() {
        let mut tree = Tree::new(true);

        let child = tree.create_child(0, BranchingDecision::variable_branch(0, 1.0, true));

        assert_eq!(child, 1);
        assert_eq!(tree.num_nodes(), 2);

        let node = tree.node(child).unwrap();
        assert_eq!(node.parent_id(), 0);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.local_decisions().len(), 1);
        assert!(tree.root().children().contains(&child));
    }

    #[test]
    fn test_child_inherits_bounds() {
        let mut tree = Tree::new(true);
        tree.root_mut().lower_bound = 10.0;
        tree.root_mut().upper_bound = 90.0;

        let child = tree.create_child(0, BranchingDecision::ryan_foster(0, 1, true));

        let node = tree.node(child).unwrap();
        assert_eq!(node.lower_bound, 10.0);
        assert_eq!(node.upper_bound, 90.0);
    }

    #[test]
    fn test_create_children() {
        let mut tree = Tree::new(true);

        let children = tree.create_children(0, &binary_decisions());

        assert_eq!(children, vec![1, 2]);
        assert_eq!(tree.num_nodes(), 3);
        assert_eq!(tree.root().status, NodeStatus::Branched);
        assert_eq!(tree.stats().nodes_branched, 1);
        assert_eq!(tree.stats().nodes_open, 2);
        assert_eq!(tree.stats().max_depth, 1);
    }

    #[test]
    fn test_inherited_decisions() {
        let mut tree = Tree::new(true);

        let c1 = tree.create_child(0, BranchingDecision::variable_branch(0, 1.0, true));
        let c2 = tree.create_child(c1, BranchingDecision::ryan_foster(1, 2, true));

        let node = tree.node(c2).unwrap();
        assert_eq!(node.inherited_decisions().len(), 1);
        assert_eq!(node.local_decisions().len(), 1);
        assert_eq!(node.num_decisions(), 2);
        assert_eq!(node.depth(), 2);
        assert_eq!(tree.stats().max_depth, 2);

        // Root to leaf: the variable decision precedes the pair decision.
        let all = node.all_decisions();
        assert_eq!(all[0], BranchingDecision::variable_branch(0, 1.0, true));
        assert_eq!(all[1], BranchingDecision::ryan_foster(1, 2, true));
    }

    #[test]
    fn test_node_lookup() {
        let mut tree = Tree::new(true);
        let child = tree.create_child(0, BranchingDecision::variable_branch(0, 1.0, true));

        assert!(tree.node(0).is_some());
        assert!(tree.node(child).is_some());
        assert!(tree.node(999).is_none());
        assert!(tree.node(INVALID_ID).is_none());

        assert!(tree.has_node(0));
        assert!(!tree.has_node(999));
    }

    #[test]
    fn test_bounds_management() {
        let mut tree = Tree::new(true);

        tree.set_global_lower_bound(50.0);
        tree.set_global_upper_bound(100.0);

        assert_eq!(tree.global_lower_bound(), 50.0);
        assert_eq!(tree.global_upper_bound(), 100.0);
        assert!((tree.gap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_update_bounds() {
        let mut tree = Tree::new(true);
        {
            let root = tree.root_mut();
            root.lp_value = 80.0;
            root.is_integer = true;
        }

        assert!(tree.update_bounds(0));
        assert_eq!(tree.global_upper_bound(), 80.0);
        assert_eq!(tree.stats().best_upper_bound, 80.0);

        // A second pass with the same value is not an improvement.
        assert!(!tree.update_bounds(0));
    }

    #[test]
    fn test_update_bounds_ignores_fractional() {
        let mut tree = Tree::new(true);
        tree.root_mut().lp_value = 80.0;

        assert!(!tree.update_bounds(0));
        assert_eq!(tree.global_upper_bound(), f64::INFINITY);
    }

    #[test]
    fn test_prune_by_bound() {
        let mut tree = Tree::new(true);
        let children = tree.create_children(0, &binary_decisions());

        tree.node_mut(children[0]).unwrap().lower_bound = 100.0;
        tree.node_mut(children[1]).unwrap().lower_bound = 50.0;
        tree.set_global_upper_bound(75.0);

        let pruned = tree.prune_by_bound();

        assert_eq!(pruned, 1);
        assert_eq!(
            tree.node(children[0]).unwrap().status,
            NodeStatus::PrunedBound
        );
        assert!(tree.node(children[1]).unwrap().can_be_explored());
        assert_eq!(tree.stats().nodes_pruned_bound, 1);
        assert_eq!(tree.stats().nodes_open, 1);

        // A second sweep finds nothing left to prune.
        assert_eq!(tree.prune_by_bound(), 0);
    }

    #[test]
    fn test_compute_lower_bound() {
        let mut tree = Tree::new(true);
        let children = tree.create_children(0, &binary_decisions());

        tree.node_mut(children[0]).unwrap().lower_bound = 60.0;
        tree.node_mut(children[1]).unwrap().lower_bound = 40.0;
        tree.set_global_upper_bound(100.0);

        assert_eq!(tree.compute_lower_bound(&children), 40.0);

        // Non-explorable nodes are skipped.
        tree.mark_processed(children[1], NodeStatus::PrunedInfeasible);
        assert_eq!(tree.compute_lower_bound(&children), 60.0);

        // Empty set: capped at the global upper bound.
        assert_eq!(tree.compute_lower_bound(&[]), 100.0);
    }

    #[test]
    fn test_open_nodes() {
        let mut tree = Tree::new(true);
        let children = tree.create_children(0, &binary_decisions());

        let open = tree.open_nodes();
        assert_eq!(open.len(), 2);
        assert!(open.contains(&children[0]));
        assert!(open.contains(&children[1]));
        assert!(!open.contains(&0)); // root is branched
    }

    #[test]
    fn test_mark_processed() {
        let mut tree = Tree::new(true);

        tree.mark_processed(0, NodeStatus::Integer);

        assert_eq!(tree.root().status, NodeStatus::Integer);
        assert_eq!(tree.stats().nodes_processed, 1);
        assert_eq!(tree.stats().nodes_integer, 1);
        assert_eq!(tree.stats().nodes_open, 0);
        assert!(tree.is_complete());
    }

    #[test]
    fn test_mark_processed_via_processing() {
        let mut tree = Tree::new(true);

        tree.root_mut().status = NodeStatus::Processing;
        tree.mark_processed(0, NodeStatus::PrunedInfeasible);

        assert_eq!(tree.stats().nodes_processed, 1);
        assert_eq!(tree.stats().nodes_pruned_infeasible, 1);
        assert_eq!(tree.stats().nodes_open, 0);
    }

    #[test]
    fn test_incumbent() {
        let mut tree = Tree::new(true);
        assert!(tree.incumbent().is_none());

        {
            let root = tree.root_mut();
            root.lp_value = 100.0;
            root.is_integer = true;
        }
        tree.set_incumbent(0);

        assert_eq!(tree.incumbent_id(), Some(0));
        assert_eq!(tree.incumbent().unwrap().id(), 0);
        assert_eq!(tree.global_upper_bound(), 100.0);
        assert_eq!(tree.stats().best_upper_bound, 100.0);
    }

    #[test]
    fn test_path_to_root() {
        let mut tree = Tree::new(true);
        let c1 = tree.create_child(0, BranchingDecision::variable_branch(0, 1.0, true));
        let c2 = tree.create_child(c1, BranchingDecision::variable_branch(1, 2.0, true));

        assert_eq!(tree.path_to_root(c2), vec![0, c1, c2]);
        assert_eq!(tree.path_to_root(0), vec![0]);
        assert!(tree.path_to_root(999).is_empty());
    }

    #[test]
    fn test_statistics_tracking() {
        let mut tree = Tree::new(true);

        let children = tree.create_children(0, &binary_decisions());
        assert_eq!(tree.stats().nodes_created, 3);
        assert_eq!(tree.stats().nodes_branched, 1);
        assert_eq!(tree.stats().nodes_open, 2);
        assert_eq!(tree.stats().max_depth, 1);

        tree.node_mut(children[0]).unwrap().lower_bound = 100.0;
        tree.set_global_upper_bound(50.0);
        tree.prune_by_bound();

        assert_eq!(tree.stats().nodes_pruned_bound, 1);
        assert_eq!(tree.stats().nodes_open, 1);
    }

    #[test]
    fn test_stats_agree_with_scan() {
        let mut tree = Tree::new(true);
        let children = tree.create_children(0, &binary_decisions());
        tree.mark_processed(children[0], NodeStatus::PrunedInfeasible);

        let mut pending = 0u64;
        tree.for_each_node(|node| {
            if node.can_be_explored() {
                pending += 1;
            }
        });
        assert_eq!(pending, tree.stats().nodes_open);

        // open + terminal = created
        let stats = tree.stats();
        let terminal = stats.nodes_branched
            + stats.nodes_pruned_bound
            + stats.nodes_pruned_infeasible
            + stats.nodes_integer;
        assert_eq!(stats.nodes_open + terminal, stats.nodes_created);
    }

    #[test]
    fn test_for_each_node_order() {
        let mut tree = Tree::new(true);
        tree.create_children(0, &binary_decisions());

        let mut ids = Vec::new();
        tree.for_each_node(|node| ids.push(node.id()));
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_reset() {
        let mut tree = Tree::new(true);
        tree.create_children(0, &binary_decisions());
        tree.set_global_upper_bound(10.0);
        tree.set_incumbent(0);

        tree.reset();

        assert_eq!(tree.num_nodes(), 1);
        assert_eq!(tree.root_id(), 0);
        assert!(tree.root().can_be_explored());
        assert!(tree.incumbent().is_none());
        assert_eq!(tree.global_upper_bound(), f64::INFINITY);
        assert_eq!(tree.stats().nodes_created, 1);
        assert_eq!(tree.stats().nodes_open, 1);

        // Ids restart from 1 for the first child.
        let child = tree.create_child(0, BranchingDecision::variable_branch(0, 1.0, true));
        assert_eq!(child, 1);
    }

    #[test]
    fn test_stats_gap() {
        let mut stats = TreeStats::default();
        assert_eq!(stats.gap(), f64::INFINITY);

        stats.best_lower_bound = 90.0;
        stats.best_upper_bound = 100.0;
        assert!((stats.gap() - 0.1).abs() < 1e-9);

        stats.best_lower_bound = 0.0;
        stats.best_upper_bound = 0.0;
        assert_eq!(stats.gap(), 0.0);
    }
}
