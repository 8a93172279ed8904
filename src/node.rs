//! Vertex type for the phrase trie.
//!
//! Nodes form a strict owning tree: every node except the root is owned by exactly one parent and
//! is reached over exactly one character edge. The path of edges from the root to a node spells
//! the prefix that node represents, and a node flagged as a phrase end terminates a live
//! dictionary phrase.
//!
//! Deletion is soft. It only clears the phrase-end flag, so nodes and edges survive for any other
//! phrases sharing the prefix, and re-insertion just sets the flag again.

use bitflags::bitflags;
use hashbrown::HashMap;

bitflags! {
    /// Bitflags defining attributes on a [`Node`].
    pub struct NodeFlags: u8 {
        /// The node is the root of its trie.
        ///
        /// Exactly one node per trie carries this flag. The root is the starting point of every
        /// match attempt and is never itself a phrase end.
        const ROOT = 0b0000_0001;
        /// The node terminates a live dictionary phrase.
        ///
        /// Set on insertion and cleared on soft deletion. The node itself outlives the flag.
        const PHRASE_END = 0b0000_0010;
    }
}

/// A single trie vertex.
#[derive(Clone, Debug)]
pub struct Node {
    /// Flags defining binary attributes.
    flags: NodeFlags,
    /// The character on the edge from this node's parent.
    ///
    /// The root holds the NUL placeholder, since no edge leads to it.
    #[allow(dead_code)]
    value: char,
    /// All child nodes, keyed by character edges.
    children: HashMap<char, Node>,
}

impl Node {
    /// Creates a root node.
    pub fn new_root() -> Self {
        Self {
            flags: NodeFlags::ROOT,
            value: '\0',
            children: HashMap::new(),
        }
    }

    /// Creates an interior node reached over the edge `value`.
    pub fn new(value: char) -> Self {
        Self {
            flags: NodeFlags::empty(),
            value,
            children: HashMap::new(),
        }
    }

    /// Returns whether the `ROOT` flag is set.
    #[allow(dead_code)]
    #[inline]
    pub fn is_root(&self) -> bool {
        self.flags.contains(NodeFlags::ROOT)
    }

    /// Returns whether the `PHRASE_END` flag is set.
    #[inline]
    pub fn is_phrase_end(&self) -> bool {
        self.flags.contains(NodeFlags::PHRASE_END)
    }

    /// Returns whether the node has no children.
    #[allow(dead_code)]
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the character on the edge leading to this node.
    #[allow(dead_code)]
    #[inline]
    pub fn value(&self) -> char {
        self.value
    }

    /// Marks the node as terminating a live phrase.
    #[inline]
    pub fn mark_phrase_end(&mut self) {
        self.flags.insert(NodeFlags::PHRASE_END);
    }

    /// Clears the phrase-end mark.
    ///
    /// This is the soft delete. Children are untouched, so longer phrases passing through this
    /// node remain live.
    #[inline]
    pub fn unmark_phrase_end(&mut self) {
        self.flags.remove(NodeFlags::PHRASE_END);
    }

    /// Returns the child on the `value` edge, if present.
    #[inline]
    pub fn child(&self, value: char) -> Option<&Node> {
        self.children.get(&value)
    }

    /// Returns the child on the `value` edge mutably, if present.
    #[inline]
    pub fn child_mut(&mut self, value: char) -> Option<&mut Node> {
        self.children.get_mut(&value)
    }

    /// Returns the child on the `value` edge, creating it first if it is absent.
    pub fn child_or_insert(&mut self, value: char) -> &mut Node {
        self.children.entry(value).or_insert_with(|| Node::new(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Node;

    #[test]
    fn root_flags() {
        let root = Node::new_root();

        assert!(root.is_root());
        assert!(!root.is_phrase_end());
        assert_eq!(root.value(), '\0');
    }

    #[test]
    fn interior_flags() {
        let node = Node::new('a');

        assert!(!node.is_root());
        assert!(!node.is_phrase_end());
        assert_eq!(node.value(), 'a');
    }

    #[test]
    fn mark_and_unmark_phrase_end() {
        let mut node = Node::new('a');

        node.mark_phrase_end();
        assert!(node.is_phrase_end());

        node.unmark_phrase_end();
        assert!(!node.is_phrase_end());
    }

    #[test]
    fn unmark_is_idempotent() {
        let mut node = Node::new('a');

        node.unmark_phrase_end();
        node.unmark_phrase_end();

        assert!(!node.is_phrase_end());
    }

    #[test]
    fn child_or_insert_creates_once() {
        let mut root = Node::new_root();

        root.child_or_insert('a').mark_phrase_end();
        let node = root.child_or_insert('a');

        assert!(node.is_phrase_end());
        assert_eq!(node.value(), 'a');
    }

    #[test]
    fn child_lookup() {
        let mut root = Node::new_root();
        root.child_or_insert('a');

        assert!(root.child('a').is_some());
        assert!(root.child('b').is_none());
    }

    #[test]
    fn leaves() {
        let mut root = Node::new_root();

        assert!(root.is_leaf());

        root.child_or_insert('a');

        assert!(!root.is_leaf());
        assert!(root.child('a').map(Node::is_leaf).unwrap_or(false));
    }
}
