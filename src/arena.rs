//! Chunked arena for bulk node storage.

use crate::node::Node;

/// Arena allocator for search-tree nodes.
///
/// Nodes are stored in fixed-size chunks that are allocated on demand and
/// never reallocated, so a slot keeps its address for the lifetime of the
/// arena. Individual nodes are never reclaimed during the search; the
/// whole arena is released at once.
///
/// Slot ordinals double as lookup keys: the tree assigns ids densely from
/// 0, which makes id-to-node resolution plain index arithmetic.
#[derive(Debug)]
pub struct NodeArena {
    chunk_size: usize,
    chunks: Vec<Vec<Node>>,
    len: usize,
}

impl NodeArena {
    /// Default number of node slots per chunk.
    pub const DEFAULT_CHUNK_SIZE: usize = 1024;

    /// Create an arena with the default chunk size.
    pub fn new() -> Self {
        Self::with_chunk_size(Self::DEFAULT_CHUNK_SIZE)
    }

    /// Create an arena allocating `chunk_size` node slots at a time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            chunks: vec![Vec::with_capacity(chunk_size)],
            len: 0,
        }
    }

    /// Store a node in the next free slot and return a reference to it.
    pub fn alloc(&mut self, node: Node) -> &mut Node {
        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }

        let chunk = self.chunks.last_mut().expect("arena always has a chunk");
        chunk.push(node);
        self.len += 1;
        chunk.last_mut().expect("slot was just filled")
    }

    /// Look up a node by its slot ordinal.
    pub fn get(&self, index: usize) -> Option<&Node> {
        if index >= self.len {
            return None;
        }
        Some(&self.chunks[index / self.chunk_size][index % self.chunk_size])
    }

    /// Look up a node by its slot ordinal, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        if index >= self.len {
            return None;
        }
        Some(&mut self.chunks[index / self.chunk_size][index % self.chunk_size])
    }

    /// Number of nodes stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks currently allocated.
    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Approximate memory held by the arena, in bytes.
    pub fn memory_usage(&self) -> usize {
        self.chunks.len() * self.chunk_size * std::mem::size_of::<Node>()
    }

    /// Release every chunk and re-allocate a single fresh one.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.chunks.push(Vec::with_capacity(self.chunk_size));
        self.len = 0;
    }

    /// Iterate over the stored nodes in allocation (= id) order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.chunks.iter().flat_map(|chunk| chunk.iter())
    }

    /// Iterate mutably over the stored nodes in allocation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.chunks.iter_mut().flat_map(|chunk| chunk.iter_mut())
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::BranchingDecision;

    #[test]
    fn test_empty_arena() {
        let arena = NodeArena::new();

        assert_eq!(arena.len(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.num_chunks(), 1);
        assert!(arena.get(0).is_none());
    }

    #[test]
    fn test_alloc_and_get() {
        let mut arena = NodeArena::new();

        arena.alloc(Node::root());
        let d = BranchingDecision::variable_branch(0, 1.0, true);
        arena.alloc(Node::child(1, 0, 1, d));

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(0).map(|n| n.id()), Some(0));
        assert_eq!(arena.get(1).map(|n| n.id()), Some(1));
        assert!(arena.get(2).is_none());
    }

    #[test]
    fn test_chunk_growth() {
        let mut arena = NodeArena::with_chunk_size(4);

        for i in 0..10 {
            let d = BranchingDecision::variable_branch(i, 0.0, true);
            arena.alloc(Node::child(i as i64, 0, 1, d));
        }

        assert_eq!(arena.len(), 10);
        assert_eq!(arena.num_chunks(), 3); // 4 + 4 + 2

        // Slots in every chunk stay addressable.
        for i in 0..10 {
            assert_eq!(arena.get(i).map(|n| n.id()), Some(i as i64));
        }
    }

    #[test]
    fn test_get_mut() {
        let mut arena = NodeArena::with_chunk_size(2);
        arena.alloc(Node::root());

        if let Some(node) = arena.get_mut(0) {
            node.lower_bound = 42.0;
        }

        assert_eq!(arena.get(0).map(|n| n.lower_bound), Some(42.0));
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::with_chunk_size(2);
        for i in 0..5 {
            arena.alloc(Node::child(i, 0, 1, BranchingDecision::custom(vec![], vec![])));
        }
        assert_eq!(arena.num_chunks(), 3);

        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.num_chunks(), 1);
        assert!(arena.get(0).is_none());
    }

    #[test]
    fn test_iter_order() {
        let mut arena = NodeArena::with_chunk_size(3);
        for i in 0..7 {
            arena.alloc(Node::child(i, 0, 1, BranchingDecision::custom(vec![], vec![])));
        }

        let ids: Vec<i64> = arena.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_memory_usage_grows_with_chunks() {
        let mut arena = NodeArena::with_chunk_size(2);
        let initial = arena.memory_usage();

        for i in 0..3 {
            arena.alloc(Node::child(i, 0, 1, BranchingDecision::custom(vec![], vec![])));
        }

        assert!(arena.memory_usage() > initial);
    }
}
