//! Prefix trie storing items at every node along their key.

use crate::normalize::normalize;
use pokedex_core::types::Named;
use std::collections::HashMap;

/// One trie node.
///
/// `items` holds every item whose normalized key passes through this node,
/// in insertion order.
#[derive(Debug, Clone)]
pub struct PrefixNode<T> {
    children: HashMap<char, PrefixNode<T>>,
    items: Vec<T>,
}

impl<T> Default for PrefixNode<T> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            items: Vec::new(),
        }
    }
}

impl<T> PrefixNode<T> {
    pub fn child(&self, c: char) -> Option<&PrefixNode<T>> {
        self.children.get(&c)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Trie answering "starts-with" lookups in O(prefix length).
///
/// Lookups never walk the subtree below the prefix: each node already holds
/// the items of every key passing through it.
#[derive(Debug, Clone)]
pub struct PrefixTrie<T> {
    root: PrefixNode<T>,
}

impl<T> Default for PrefixTrie<T> {
    fn default() -> Self {
        Self {
            root: PrefixNode::default(),
        }
    }
}

impl<T> PrefixTrie<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &PrefixNode<T> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns every item whose normalized key starts with the normalized
    /// `prefix`, in insertion order.
    ///
    /// An empty or whitespace-only prefix matches nothing.
    pub fn search(&self, prefix: &str) -> &[T] {
        let normalized = normalize(prefix);
        if normalized.is_empty() {
            return &[];
        }

        let mut node = &self.root;
        for c in normalized.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => return &[],
            }
        }

        node.items()
    }

    /// Drops every node and starts over with an empty root.
    pub fn clear(&mut self) {
        self.root = PrefixNode::default();
    }
}

impl<T: Clone> PrefixTrie<T> {
    /// Indexes `item` under every prefix of the normalized `key`.
    ///
    /// A key that normalizes to the empty string indexes nothing.
    pub fn insert(&mut self, key: &str, item: T) {
        let normalized = normalize(key);
        let mut node = &mut self.root;

        for c in normalized.chars() {
            node = node.children.entry(c).or_default();
            node.items.push(item.clone());
        }
    }
}

impl<T: Named + Clone> FromIterator<T> for PrefixTrie<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut trie = Self::new();
        for item in iter {
            let key = item.name().to_owned();
            trie.insert(&key, item);
        }
        trie
    }
}
