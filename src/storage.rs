//! Arena storage for queue nodes
//!
//! [`NodeArena`] owns every node a queue creates. Nodes are referenced by
//! [`NodeKey`], a generational `slotmap` key: once a node is removed, any
//! key that still names it resolves to `None` instead of dangling.
//!
//! Links between nodes are plain keys. They are navigation aids only; the
//! arena is the single owner and releases a node's storage on [`NodeArena::remove`].

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key of a node stored in a [`NodeArena`]
    pub struct NodeKey;
}

/// A doubly linked node holding one timing sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub(crate) value: i32,
    pub(crate) next: Option<NodeKey>,
    pub(crate) prev: Option<NodeKey>,
}

impl Node {
    /// Creates an unlinked node
    #[inline]
    pub(crate) fn new(value: i32) -> Self {
        Node {
            value,
            next: None,
            prev: None,
        }
    }

    /// The stored sample
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }
}

/// SlotMap-backed node arena
///
/// # Characteristics
/// - Contiguous allocation, good cache locality on small devices
/// - Freed slots are reused by later inserts
/// - Generational keys detect stale references
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: SlotMap<NodeKey, Node>,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl NodeArena {
    /// Creates an arena with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Stores a node, returning its key
    #[inline]
    pub fn insert(&mut self, node: Node) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Removes a node, returning it if the key was live
    #[inline]
    pub fn remove(&mut self, key: NodeKey) -> Option<Node> {
        self.nodes.remove(key)
    }

    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node, keeping the allocation
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
