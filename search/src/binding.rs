//! Per-collection trie binding.

use crate::stamp::CollectionStamp;
use crate::trie::PrefixTrie;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingStatus {
    /// Never built, or reset.
    Unbuilt,
    Fresh,
    /// The caller reported a change that has not been indexed yet.
    Invalidated,
}

/// Trie and unfiltered snapshot of one collection.
///
/// Both are replaced together on every rebuild and never edited in place.
#[derive(Debug)]
pub struct Binding<R> {
    trie: PrefixTrie<Arc<R>>,
    items: Vec<Arc<R>>,
    stamp: Option<CollectionStamp>,
    status: BindingStatus,
}

impl<R> Default for Binding<R> {
    fn default() -> Self {
        Self {
            trie: PrefixTrie::new(),
            items: Vec::new(),
            stamp: None,
            status: BindingStatus::Unbuilt,
        }
    }
}

impl<R> Binding<R> {
    /// Records in source order, as of the last rebuild.
    pub fn items(&self) -> &[Arc<R>] {
        &self.items
    }

    pub fn trie(&self) -> &PrefixTrie<Arc<R>> {
        &self.trie
    }

    pub fn stamp(&self) -> Option<CollectionStamp> {
        self.stamp
    }

    pub fn is_fresh(&self) -> bool {
        self.status == BindingStatus::Fresh
    }

    pub(crate) fn status(&self) -> BindingStatus {
        self.status
    }

    pub(crate) fn search(&self, prefix: &str) -> &[Arc<R>] {
        self.trie.search(prefix)
    }

    pub(crate) fn invalidate(&mut self) {
        if self.status == BindingStatus::Fresh {
            self.status = BindingStatus::Invalidated;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.trie.clear();
        self.items.clear();
        self.stamp = None;
        self.status = BindingStatus::Unbuilt;
    }
}

impl<R: pokedex_core::types::Record> Binding<R> {
    /// Builds a new trie from `records` and swaps it in.
    pub(crate) fn rebuild(&mut self, records: &[R], stamp: Option<CollectionStamp>) {
        let items: Vec<Arc<R>> = records.iter().cloned().map(Arc::new).collect();
        let trie: PrefixTrie<Arc<R>> = items.iter().cloned().collect();

        self.trie = trie;
        self.items = items;
        self.stamp = stamp;
        self.status = BindingStatus::Fresh;
    }
}
