//! Open-node selection policies.
//!
//! A selector holds non-owning handles to the open nodes of a [`Tree`] and
//! answers "which node next?". Handles freeze their ordering keys when they
//! enter the working set; liveness and live bound values are re-resolved
//! through the tree at selection time, which is why most operations take
//! `&Tree`.

mod best_estimate;
mod best_first;
mod depth_first;
mod hybrid;

pub use best_estimate::BestEstimateSelector;
pub use best_first::BestFirstSelector;
pub use depth_first::DepthFirstSelector;
pub use hybrid::HybridSelector;

use crate::node::{Node, NodeId};
use crate::settings::{SearchSettings, SelectorKind};
use crate::tree::Tree;

/// Non-owning handle to a node sitting in a selector's working set.
///
/// The ordering keys (`depth`, `lower_bound`) are captured when the handle
/// is inserted; whether the node is still explorable is checked against
/// the tree when the handle resurfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeHandle {
    /// Id of the node within its tree.
    pub id: NodeId,

    /// Depth captured at insertion.
    pub depth: usize,

    /// Lower bound captured at insertion.
    pub lower_bound: f64,
}

impl NodeHandle {
    /// Capture a handle from a node.
    pub fn of(node: &Node) -> Self {
        Self {
            id: node.id(),
            depth: node.depth(),
            lower_bound: node.lower_bound,
        }
    }
}

/// Whether `id` resolves to a node that is still waiting on the frontier.
fn is_explorable(tree: &Tree, id: NodeId) -> bool {
    tree.node(id).map_or(false, |node| node.can_be_explored())
}

/// Operations shared by every node selection policy.
///
/// Selectors never own nodes; they hold handles whose validity the owning
/// tree guarantees. Adding the same node twice, or handing a selector a
/// node from a different tree, is a driver error the policies do not
/// detect: the hot path is deliberately check-free.
pub trait NodeSelector {
    /// Which policy this selector implements.
    fn kind(&self) -> SelectorKind;

    /// Insert `id` into the working set if it names an explorable node of
    /// `tree`; otherwise do nothing.
    fn add_node(&mut self, tree: &Tree, id: NodeId);

    /// Insert several nodes; equivalent to repeated [`NodeSelector::add_node`].
    fn add_nodes(&mut self, tree: &Tree, ids: &[NodeId]) {
        for &id in ids {
            self.add_node(tree, id);
        }
    }

    /// Remove and return the highest-priority explorable node, lazily
    /// discarding stale handles along the way. `None` iff nothing
    /// explorable remains.
    fn select_next(&mut self, tree: &Tree) -> Option<NodeId>;

    /// The node [`NodeSelector::select_next`] would return, without
    /// mutating the working set.
    fn peek_next(&self, tree: &Tree) -> Option<NodeId>;

    /// Number of handles currently held. May overcount by handles whose
    /// nodes have since left the frontier and await lazy discard.
    fn len(&self) -> usize;

    /// Whether the working set holds no handles at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Eagerly drop every handle whose node is no longer explorable;
    /// returns how many were dropped.
    fn prune(&mut self, tree: &Tree) -> usize;

    /// Notification that the global upper bound improved. The default does
    /// nothing.
    fn on_bound_update(&mut self, _new_upper: f64) {}

    /// Minimum lower bound over the held explorable nodes, `+inf` when
    /// empty.
    fn best_bound(&self, tree: &Tree) -> f64;

    /// Snapshot of the held node ids, in no particular order.
    fn open_node_ids(&self) -> Vec<NodeId>;

    /// Drop every handle.
    fn clear(&mut self);
}

/// Build a selector from its string name.
///
/// Accepts the canonical names and camel-case aliases understood by
/// [`SelectorKind`]; unknown names fall back to best-first rather than
/// erroring.
pub fn create_selector(name: &str) -> Box<dyn NodeSelector> {
    let kind = name.parse::<SelectorKind>().unwrap_or_default();
    build_selector(kind, &SearchSettings::default())
}

/// Build the selector configured in `settings`.
pub fn create_selector_with(settings: &SearchSettings) -> Box<dyn NodeSelector> {
    build_selector(settings.selector, settings)
}

fn build_selector(kind: SelectorKind, settings: &SearchSettings) -> Box<dyn NodeSelector> {
    match kind {
        SelectorKind::BestFirst => Box::new(BestFirstSelector::new()),
        SelectorKind::DepthFirst => Box::new(DepthFirstSelector::new()),
        SelectorKind::BestEstimate => {
            Box::new(BestEstimateSelector::with_weight(settings.estimate_weight))
        }
        SelectorKind::Hybrid => Box::new(HybridSelector::with_parameters(
            settings.dive_frequency,
            settings.dive_depth,
        )),
    }
}
