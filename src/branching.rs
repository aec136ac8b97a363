//! Branching decisions accumulated along the search tree.

use std::fmt;

/// Discriminator for the branching decision variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    /// Standard variable branching (`x <= k` or `x >= k`).
    Variable,

    /// Ryan-Foster branching: a pair of items same/different column.
    RyanFoster,

    /// Arc branching: an arc forced into or out of the solution.
    Arc,

    /// Resource window branching.
    Resource,

    /// User-defined branching.
    Custom,
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BranchKind::Variable => "VARIABLE",
            BranchKind::RyanFoster => "RYAN_FOSTER",
            BranchKind::Arc => "ARC",
            BranchKind::Resource => "RESOURCE",
            BranchKind::Custom => "CUSTOM",
        };
        f.write_str(s)
    }
}

/// A single branching decision.
///
/// Decisions are polymorphic: the interpretation belongs to the branching
/// strategy that created them, which lets different strategies store their
/// decisions in one uniform container. A decision is an immutable value;
/// it is always copied between nodes, never shared.
///
/// Construction never validates the payload. Negative indices and infinite
/// bounds are permitted; the interpreting strategy owns the semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchingDecision {
    /// Bound a variable: `x[i] <= v` (upper) or `x[i] >= v` (lower).
    Variable {
        /// Index of the branched variable.
        variable_index: i32,
        /// The bound value `v`.
        bound_value: f64,
        /// `true` for `x <= v`, `false` for `x >= v`.
        is_upper_bound: bool,
    },

    /// Force a pair of items into the same column, or keep them apart.
    RyanFoster {
        /// First item of the pair.
        item_i: i32,
        /// Second item of the pair.
        item_j: i32,
        /// `true` = must share a column, `false` = must not.
        same_column: bool,
    },

    /// Require or forbid an arc of the underlying network.
    Arc {
        /// Index of the arc.
        arc_index: i32,
        /// Source node of the arc in the underlying graph.
        source_node: i32,
        /// `true` = arc must be used, `false` = arc is forbidden.
        required: bool,
    },

    /// Tighten the feasible window of a resource.
    Resource {
        /// Index of the resource.
        resource_index: i32,
        /// New lower edge of the window.
        lower_bound: f64,
        /// New upper edge of the window.
        upper_bound: f64,
    },

    /// Opaque payload interpreted by the strategy that produced it.
    Custom {
        /// Integer payload.
        int_data: Vec<i32>,
        /// Real payload.
        float_data: Vec<f64>,
    },
}

impl BranchingDecision {
    /// Create a variable branching decision.
    pub fn variable_branch(variable_index: i32, bound_value: f64, is_upper_bound: bool) -> Self {
        BranchingDecision::Variable {
            variable_index,
            bound_value,
            is_upper_bound,
        }
    }

    /// Create a Ryan-Foster branching decision on the pair `(item_i, item_j)`.
    pub fn ryan_foster(item_i: i32, item_j: i32, same_column: bool) -> Self {
        BranchingDecision::RyanFoster {
            item_i,
            item_j,
            same_column,
        }
    }

    /// Create an arc branching decision.
    pub fn arc_branch(arc_index: i32, source_node: i32, required: bool) -> Self {
        BranchingDecision::Arc {
            arc_index,
            source_node,
            required,
        }
    }

    /// Create a resource window branching decision.
    ///
    /// Pass `f64::INFINITY` as `upper_bound` to leave the window open above.
    pub fn resource_branch(resource_index: i32, lower_bound: f64, upper_bound: f64) -> Self {
        BranchingDecision::Resource {
            resource_index,
            lower_bound,
            upper_bound,
        }
    }

    /// Create a custom branching decision carrying opaque payloads.
    pub fn custom(int_data: Vec<i32>, float_data: Vec<f64>) -> Self {
        BranchingDecision::Custom {
            int_data,
            float_data,
        }
    }

    /// The discriminator of this decision.
    pub fn kind(&self) -> BranchKind {
        match self {
            BranchingDecision::Variable { .. } => BranchKind::Variable,
            BranchingDecision::RyanFoster { .. } => BranchKind::RyanFoster,
            BranchingDecision::Arc { .. } => BranchKind::Arc,
            BranchingDecision::Resource { .. } => BranchKind::Resource,
            BranchingDecision::Custom { .. } => BranchKind::Custom,
        }
    }
}
