//! Search-tree node representation.

use std::fmt;
use std::str::FromStr;

use crate::branching::BranchingDecision;
use crate::error::ParseError;

/// Identifier of a node within its tree.
///
/// Ids are assigned monotonically from 0 and never reused, even after a
/// node has been pruned.
pub type NodeId = i64;

/// Sentinel id: the root's parent, and the result of failed lookups at
/// foreign boundaries.
pub const INVALID_ID: NodeId = -1;

/// Tolerance used when comparing a node's lower bound against the global
/// upper bound during pruning.
pub const PRUNE_TOLERANCE: f64 = 1e-6;

/// Status of a search-tree node.
///
/// A node starts `Pending`, may pass through `Processing`, and ends in one
/// of the terminal states. Once terminal, its bounds, status and children
/// are frozen. The progression is a documented contract of the driver, not
/// something this type enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    /// Not yet processed.
    Pending,

    /// Currently being processed.
    Processing,

    /// Branched into children.
    Branched,

    /// Pruned by bound.
    PrunedBound,

    /// LP relaxation infeasible.
    PrunedInfeasible,

    /// Integer solution found.
    Integer,

    /// Fathomed for another reason.
    Fathomed,
}

impl NodeStatus {
    /// Whether this is a terminal status.
    pub fn is_terminal(self) -> bool {
        !matches!(self, NodeStatus::Pending | NodeStatus::Processing)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeStatus::Pending => "PENDING",
            NodeStatus::Processing => "PROCESSING",
            NodeStatus::Branched => "BRANCHED",
            NodeStatus::PrunedBound => "PRUNED_BOUND",
            NodeStatus::PrunedInfeasible => "PRUNED_INFEASIBLE",
            NodeStatus::Integer => "INTEGER",
            NodeStatus::Fathomed => "FATHOMED",
        };
        f.write_str(s)
    }
}

impl FromStr for NodeStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(NodeStatus::Pending),
            "PROCESSING" => Ok(NodeStatus::Processing),
            "BRANCHED" => Ok(NodeStatus::Branched),
            "PRUNED_BOUND" => Ok(NodeStatus::PrunedBound),
            "PRUNED_INFEASIBLE" => Ok(NodeStatus::PrunedInfeasible),
            "INTEGER" => Ok(NodeStatus::Integer),
            "FATHOMED" => Ok(NodeStatus::Fathomed),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

/// A node in the branch-and-price search tree.
///
/// Structural identity (id, parent, depth, children, accumulated
/// decisions) belongs to the [`Tree`](crate::Tree) and is read-only here.
/// The solver-facing scalars (bounds, LP value, status, integrality) are
/// public fields the external LP solver writes directly between the
/// moment a node is selected and the moment the driver marks it
/// processed.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    parent_id: NodeId,
    depth: usize,

    /// Lower bound at this node (from the LP relaxation).
    pub lower_bound: f64,

    /// Upper bound at this node.
    pub upper_bound: f64,

    /// Objective value of the node's LP relaxation.
    pub lp_value: f64,

    /// Processing status. Prefer [`Tree::mark_processed`](crate::Tree::mark_processed)
    /// for terminal transitions so the tree statistics stay consistent;
    /// writing the field directly is meant for the `Pending` →
    /// `Processing` handoff.
    pub status: NodeStatus,

    /// Whether the node's LP solution is integer feasible.
    pub is_integer: bool,

    // Decisions leading to this node: inherited from ancestors, then local.
    inherited_decisions: Vec<BranchingDecision>,
    local_decisions: Vec<BranchingDecision>,

    children: Vec<NodeId>,

    // Solution payload, only populated for integer nodes.
    solution: Vec<f64>,
    solution_columns: Vec<i32>,
}

impl Node {
    /// Create the root node: id 0, no parent, depth 0, bounds `[-inf, +inf]`.
    pub fn root() -> Self {
        Self {
            id: 0,
            parent_id: INVALID_ID,
            depth: 0,
            lower_bound: f64::NEG_INFINITY,
            upper_bound: f64::INFINITY,
            lp_value: f64::INFINITY,
            status: NodeStatus::Pending,
            is_integer: false,
            inherited_decisions: Vec::new(),
            local_decisions: Vec::new(),
            children: Vec::new(),
            solution: Vec::new(),
            solution_columns: Vec::new(),
        }
    }

    /// Create a child node carrying the branching decision that spawned it.
    ///
    /// The identity triple is handed out by the tree; `depth` must be the
    /// parent's depth plus one.
    pub fn child(id: NodeId, parent_id: NodeId, depth: usize, decision: BranchingDecision) -> Self {
        let mut node = Node::root();
        node.id = id;
        node.parent_id = parent_id;
        node.depth = depth;
        node.local_decisions.push(decision);
        node
    }

    /// Unique identifier of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Identifier of the parent, or [`INVALID_ID`] for the root.
    pub fn parent_id(&self) -> NodeId {
        self.parent_id
    }

    /// Whether this node is the root.
    pub fn is_root(&self) -> bool {
        self.parent_id == INVALID_ID
    }

    /// Depth in the tree; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Relative gap between this node's bounds.
    ///
    /// Infinite on an open bound; with a zero upper bound the gap is zero
    /// iff the lower bound is zero too.
    pub fn gap(&self) -> f64 {
        if self.upper_bound == f64::INFINITY || self.lower_bound == f64::NEG_INFINITY {
            return f64::INFINITY;
        }
        if self.upper_bound == 0.0 {
            return if self.lower_bound == 0.0 {
                0.0
            } else {
                f64::INFINITY
            };
        }
        (self.upper_bound - self.lower_bound) / self.upper_bound.abs()
    }

    /// Whether the node has reached a terminal status.
    pub fn is_processed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether the node was discarded without branching.
    pub fn is_pruned(&self) -> bool {
        matches!(
            self.status,
            NodeStatus::PrunedBound | NodeStatus::PrunedInfeasible | NodeStatus::Fathomed
        )
    }

    /// Whether the node is still waiting on the open frontier.
    pub fn can_be_explored(&self) -> bool {
        self.status == NodeStatus::Pending
    }

    /// Decisions taken at this node.
    pub fn local_decisions(&self) -> &[BranchingDecision] {
        &self.local_decisions
    }

    /// Decisions inherited from all ancestors, in root-to-parent order.
    pub fn inherited_decisions(&self) -> &[BranchingDecision] {
        &self.inherited_decisions
    }

    /// All decisions constraining this node: inherited, then local.
    pub fn all_decisions(&self) -> Vec<BranchingDecision> {
        let mut all =
            Vec::with_capacity(self.inherited_decisions.len() + self.local_decisions.len());
        all.extend(self.inherited_decisions.iter().cloned());
        all.extend(self.local_decisions.iter().cloned());
        all
    }

    /// Total number of decisions constraining this node.
    pub fn num_decisions(&self) -> usize {
        self.inherited_decisions.len() + self.local_decisions.len()
    }

    /// Append a decision taken at this node.
    ///
    /// Only meaningful while the node is `Pending` or `Processing`; the
    /// decision list is frozen once the node is terminal.
    pub fn add_local_decision(&mut self, decision: BranchingDecision) {
        self.local_decisions.push(decision);
    }

    /// Install the inherited decision chain. Called exactly once by the
    /// tree, right after child construction.
    pub(crate) fn set_inherited_decisions(&mut self, decisions: Vec<BranchingDecision>) {
        self.inherited_decisions = decisions;
    }

    /// Ids of this node's children, in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node has been branched into at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn add_child(&mut self, child_id: NodeId) {
        self.children.push(child_id);
    }

    /// Prune this node if its lower bound meets the global upper bound.
    ///
    /// Transitions to `PrunedBound` and returns `true` when
    /// `lower_bound >= global_upper - PRUNE_TOLERANCE` and the node is not
    /// already terminal; otherwise leaves the node untouched and returns
    /// `false`.
    pub fn try_prune_by_bound(&mut self, global_upper: f64) -> bool {
        if self.is_processed() {
            return false;
        }
        if self.lower_bound >= global_upper - PRUNE_TOLERANCE {
            self.status = NodeStatus::PrunedBound;
            true
        } else {
            false
        }
    }

    /// Store the dense solution vector. Set at most once per node.
    pub fn set_solution(&mut self, solution: Vec<f64>) {
        self.solution = solution;
    }

    /// Dense solution vector, empty if none was stored.
    pub fn solution(&self) -> &[f64] {
        &self.solution
    }

    /// Whether a solution vector was stored on this node.
    pub fn has_solution(&self) -> bool {
        !self.solution.is_empty()
    }

    /// Store the indices of the columns active in the solution.
    pub fn set_solution_columns(&mut self, columns: Vec<i32>) {
        self.solution_columns = columns;
    }

    /// Column indices of the sparse solution representation.
    pub fn solution_columns(&self) -> &[i32] {
        &self.solution_columns
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::root()
    }
}
