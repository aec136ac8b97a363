//! Search-tree core for branch-and-price solvers.
//!
//! Branch-and-price solves huge integer programs by combining
//! branch-and-bound with column generation: every node of the search tree
//! is a restricted LP relaxation, and branching decisions accumulated
//! from the root shape the pricing subproblem below each node. This crate
//! provides the engine that manages that tree; it does not solve LPs,
//! price columns or decide what to branch on.
//!
//! The pieces, bottom up:
//!
//! - [`BranchingDecision`]: one branching action (variable bound,
//!   Ryan-Foster pair, arc fix/forbid, resource window, or an opaque
//!   custom payload). Pure data; strategies pattern-match on it.
//! - [`Node`]: identity, structure links, bounds, status and accumulated
//!   decisions. The external LP solver stamps bounds and integrality
//!   between selection and processing.
//! - [`Tree`]: the authoritative node store. Bulk arena allocation,
//!   child creation with decision inheritance, global bounds, incumbent,
//!   bound pruning and running statistics all flow through it.
//! - [`NodeSelector`]: the open-node working set, with best-first,
//!   depth-first, best-estimate and hybrid diving policies behind one
//!   trait, built directly or through [`create_selector`].
//!
//! A driver iterates: ask the selector for a node, have the LP solver
//! evaluate it, report the outcome back to the tree (`mark_processed`,
//! `update_bounds`), branch through [`Tree::create_children`] and hand the
//! new children to the selector.
//!
//! ```
//! use bp_core::{BranchingDecision, NodeSelector, NodeStatus, Tree, create_selector};
//!
//! let mut tree = Tree::new(true);
//! let mut selector = create_selector("best_first");
//!
//! // Pretend the LP solver evaluated the root to a fractional 40.0.
//! {
//!     let root = tree.root_mut();
//!     root.lower_bound = 40.0;
//!     root.lp_value = 40.0;
//! }
//!
//! // Branch on x[0] and put both children on the frontier.
//! let children = tree.create_children(
//!     0,
//!     &[
//!         BranchingDecision::variable_branch(0, 0.0, true),
//!         BranchingDecision::variable_branch(0, 1.0, false),
//!     ],
//! );
//! selector.add_nodes(&tree, &children);
//!
//! let next = selector.select_next(&tree).expect("two open nodes");
//! tree.mark_processed(next, NodeStatus::PrunedInfeasible);
//! assert_eq!(tree.stats().nodes_open, 1);
//! ```
//!
//! The core is single-threaded and keeps its hot path check-free: unknown
//! ids come back as `None`, empty selectors as `None`/`+inf`, and contract
//! violations (double-adding a node, branching a terminal parent) are the
//! driver's responsibility.

#![warn(missing_docs)]

mod arena;
mod branching;
mod error;
mod node;
mod selection;
mod settings;
mod tree;

pub use arena::NodeArena;
pub use branching::{BranchKind, BranchingDecision};
pub use error::ParseError;
pub use node::{Node, NodeId, NodeStatus, INVALID_ID, PRUNE_TOLERANCE};
pub use selection::{
    create_selector, create_selector_with, BestEstimateSelector, BestFirstSelector,
    DepthFirstSelector, HybridSelector, NodeHandle, NodeSelector,
};
pub use settings::{SearchSettings, SelectorKind};
pub use tree::{Tree, TreeStats};
