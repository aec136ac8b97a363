//! Configuration settings for the search-tree core.

use std::fmt;
use std::str::FromStr;

use crate::arena::NodeArena;
use crate::error::ParseError;

/// Open-node selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorKind {
    /// Always explore the open node with the lowest lower bound.
    #[default]
    BestFirst,

    /// Explore the deepest open node first (helps find integer solutions
    /// quickly); ties broken by lower bound.
    DepthFirst,

    /// Explore the node with the best depth/gap estimate.
    BestEstimate,

    /// Best-first cruising with periodic depth-first dives.
    Hybrid,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectorKind::BestFirst => "best_first",
            SelectorKind::DepthFirst => "depth_first",
            SelectorKind::BestEstimate => "best_estimate",
            SelectorKind::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

impl FromStr for SelectorKind {
    type Err = ParseError;

    /// Accepts the canonical snake_case names and their camel-case aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best_first" | "BestFirst" => Ok(SelectorKind::BestFirst),
            "depth_first" | "DepthFirst" => Ok(SelectorKind::DepthFirst),
            "best_estimate" | "BestEstimate" => Ok(SelectorKind::BestEstimate),
            "hybrid" | "Hybrid" => Ok(SelectorKind::Hybrid),
            _ => Err(ParseError::UnknownSelector(s.to_string())),
        }
    }
}

/// Tuning knobs for the tree store and the selection policies.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    // === Tree store ===
    /// Node slots allocated per arena chunk.
    pub chunk_size: usize,

    // === Node selection ===
    /// Which selection policy to build.
    pub selector: SelectorKind,

    /// Weight of the depth term in the best-estimate score.
    pub estimate_weight: f64,

    /// Cruise length before the hybrid selector starts a dive.
    pub dive_frequency: usize,

    /// Number of depth-first picks per hybrid dive.
    pub dive_depth: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            chunk_size: NodeArena::DEFAULT_CHUNK_SIZE,
            selector: SelectorKind::default(),
            estimate_weight: 0.5,
            dive_frequency: 5,
            dive_depth: 10,
        }
    }
}

impl SearchSettings {
    /// Set the selection policy.
    pub fn with_selector(mut self, selector: SelectorKind) -> Self {
        self.selector = selector;
        self
    }

    /// Set the arena chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the best-estimate weight.
    pub fn with_estimate_weight(mut self, weight: f64) -> Self {
        self.estimate_weight = weight;
        self
    }

    /// Set the hybrid dive cadence: dive every `frequency` nodes, for
    /// `depth` picks.
    pub fn with_dive(mut self, frequency: usize, depth: usize) -> Self {
        self.dive_frequency = frequency;
        self.dive_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SearchSettings::default();

        assert_eq!(settings.chunk_size, 1024);
        assert_eq!(settings.selector, SelectorKind::BestFirst);
        assert_eq!(settings.estimate_weight, 0.5);
        assert_eq!(settings.dive_frequency, 5);
        assert_eq!(settings.dive_depth, 10);
    }

    #[test]
    fn test_builders() {
        let settings = SearchSettings::default()
            .with_selector(SelectorKind::Hybrid)
            .with_chunk_size(64)
            .with_estimate_weight(0.25)
            .with_dive(3, 7);

        assert_eq!(settings.selector, SelectorKind::Hybrid);
        assert_eq!(settings.chunk_size, 64);
        assert_eq!(settings.estimate_weight, 0.25);
        assert_eq!(settings.dive_frequency, 3);
        assert_eq!(settings.dive_depth, 7);
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            SelectorKind::BestFirst,
            SelectorKind::DepthFirst,
            SelectorKind::BestEstimate,
            SelectorKind::Hybrid,
        ] {
            assert_eq!(kind.to_string().parse::<SelectorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!("BestFirst".parse::<SelectorKind>(), Ok(SelectorKind::BestFirst));
        assert_eq!("DepthFirst".parse::<SelectorKind>(), Ok(SelectorKind::DepthFirst));
        assert_eq!(
            "BestEstimate".parse::<SelectorKind>(),
            Ok(SelectorKind::BestEstimate)
        );
        assert_eq!("Hybrid".parse::<SelectorKind>(), Ok(SelectorKind::Hybrid));
        assert!("round_robin".parse::<SelectorKind>().is_err());
    }
}
