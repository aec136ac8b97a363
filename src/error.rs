//! Error types for the search-tree core.

use thiserror::Error;

/// Errors raised when parsing the string form of a core enum.
///
/// These are the only errors the crate surfaces as `Result`s: every other
/// failure mode (unknown node id, empty selector, redundant prune) is
/// reported through sentinel values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not name a known selector kind.
    #[error("unknown selector kind: {0}")]
    UnknownSelector(String),

    /// The string does not name a known node status.
    #[error("unknown node status: {0}")]
    UnknownStatus(String),
}
