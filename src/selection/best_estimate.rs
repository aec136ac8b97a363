//! Best-estimate node selection.

use super::{NodeHandle, NodeSelector};
use crate::node::{Node, NodeId};
use crate::settings::SelectorKind;
use crate::tree::Tree;

/// Best-estimate node selection.
///
/// Scores every open node with an estimate of the integer objective
/// reachable below it and explores the minimum. Before any incumbent
/// exists the estimate is `lower_bound - weight * depth`, which favors
/// diving; once an upper bound is known it becomes
/// `lower_bound + weight * (1 - depth/max_depth) * (upper - lower_bound)`,
/// which discounts shallow nodes by the gap they still have to close.
#[derive(Debug)]
pub struct BestEstimateSelector {
    nodes: Vec<NodeHandle>,
    estimate_weight: f64,
    global_upper_bound: f64,
    max_depth: usize,
}

impl BestEstimateSelector {
    /// Create a selector with the default estimate weight (0.5).
    pub fn new() -> Self {
        Self::with_weight(0.5)
    }

    /// Create a selector with the given estimate weight.
    pub fn with_weight(estimate_weight: f64) -> Self {
        Self {
            nodes: Vec::new(),
            estimate_weight,
            global_upper_bound: f64::INFINITY,
            max_depth: 1,
        }
    }

    fn estimate(&self, node: &Node) -> f64 {
        let lb = node.lower_bound;

        if self.global_upper_bound == f64::INFINITY {
            // No incumbent yet: a plain depth discount encourages diving.
            return lb - self.estimate_weight * node.depth() as f64;
        }

        let depth_ratio = node.depth() as f64 / self.max_depth.max(1) as f64;
        let gap = self.global_upper_bound - lb;
        lb + self.estimate_weight * (1.0 - depth_ratio) * gap
    }

    /// Index of the working-set entry with the smallest estimate, resolved
    /// through `tree`; handles that do not resolve are skipped.
    fn argmin_estimate(&self, tree: &Tree, explorable_only: bool) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, handle) in self.nodes.iter().enumerate() {
            let node = match tree.node(handle.id) {
                Some(node) => node,
                None => continue,
            };
            if explorable_only && !node.can_be_explored() {
                continue;
            }
            let estimate = self.estimate(node);
            let better = match best {
                Some((_, current)) => estimate < current,
                None => true,
            };
            if better {
                best = Some((index, estimate));
            }
        }
        best.map(|(index, _)| index)
    }
}

impl Default for BestEstimateSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeSelector for BestEstimateSelector {
    fn kind(&self) -> SelectorKind {
        SelectorKind::BestEstimate
    }

    fn add_node(&mut self, tree: &Tree, id: NodeId) {
        if let Some(node) = tree.node(id) {
            if node.can_be_explored() {
                self.nodes.push(NodeHandle::of(node));
                self.max_depth = self.max_depth.max(node.depth());
            }
        }
    }

    fn select_next(&mut self, tree: &Tree) -> Option<NodeId> {
        self.prune(tree);
        let index = self.argmin_estimate(tree, false)?;
        Some(self.nodes.remove(index).id)
    }

    fn peek_next(&self, tree: &Tree) -> Option<NodeId> {
        let index = self.argmin_estimate(tree, true)?;
        Some(self.nodes[index].id)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn prune(&mut self, tree: &Tree) -> usize {
        let before = self.nodes.len();
        self.nodes
            .retain(|handle| super::is_explorable(tree, handle.id));
        before - self.nodes.len()
    }

    fn on_bound_update(&mut self, new_upper: f64) {
        self.global_upper_bound = new_upper;
    }

    fn best_bound(&self, tree: &Tree) -> f64 {
        self.nodes
            .iter()
            .filter_map(|handle| tree.node(handle.id))
            .filter(|node| node.can_be_explored())
            .map(|node| node.lower_bound)
            .fold(f64::INFINITY, f64::min)
    }

    fn open_node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|handle| handle.id).collect()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}
