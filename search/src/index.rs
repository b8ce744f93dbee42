//! Search index over the three tracked collections.

use crate::binding::{Binding, BindingStatus};
use crate::config::SearchConfig;
use crate::query::SearchQuery;
use crate::results::QueryResults;
use crate::stamp::CollectionStamp;
use pokedex_core::catalog::Catalog;
use pokedex_core::types::{Ability, CollectionId, Element, Pokemon, RebuildPolicy, Record};
use std::sync::Arc;

/// Whether every collection has been indexed from its latest snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Stale,
    Fresh,
}

/// Maps a record type to its binding inside [`SearchIndex`].
pub trait Tracked: Record {
    fn binding(index: &SearchIndex) -> &Binding<Self>;
    fn binding_mut(index: &mut SearchIndex) -> &mut Binding<Self>;
}

impl Tracked for Pokemon {
    fn binding(index: &SearchIndex) -> &Binding<Self> {
        &index.pokemon
    }

    fn binding_mut(index: &mut SearchIndex) -> &mut Binding<Self> {
        &mut index.pokemon
    }
}

impl Tracked for Element {
    fn binding(index: &SearchIndex) -> &Binding<Self> {
        &index.elements
    }

    fn binding_mut(index: &mut SearchIndex) -> &mut Binding<Self> {
        &mut index.elements
    }
}

impl Tracked for Ability {
    fn binding(index: &SearchIndex) -> &Binding<Self> {
        &index.abilities
    }

    fn binding_mut(index: &mut SearchIndex) -> &mut Binding<Self> {
        &mut index.abilities
    }
}

/// One prefix trie per tracked collection.
///
/// Tries are rebuilt in full whenever their collection changes and are
/// never mutated in place. Queries filter only the active collection.
#[derive(Debug, Default)]
pub struct SearchIndex {
    pokemon: Binding<Pokemon>,
    elements: Binding<Element>,
    abilities: Binding<Ability>,
    config: SearchConfig,
}

/// Create operations.
impl SearchIndex {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates an index already synced with every collection of `catalog`.
    pub fn from_catalog(catalog: &Catalog, config: SearchConfig) -> Self {
        let mut index = Self::new(config);
        index.sync_catalog(catalog);
        index
    }
}

/// Rebuild operations.
impl SearchIndex {
    /// Unconditionally rebuilds the trie of `R`'s collection from `items`.
    ///
    /// The new trie is built completely before it replaces the old one.
    /// Other collections are not touched.
    pub fn rebuild<R: Tracked>(&mut self, items: &[R]) {
        let stamp = stamp_of(items);
        self.rebuild_stamped(items, stamp);
    }

    /// Rebuilds `R`'s collection only if its content differs from what was
    /// last indexed. Returns whether a rebuild happened.
    ///
    /// Under [`RebuildPolicy::Always`] every call rebuilds.
    pub fn sync<R: Tracked>(&mut self, items: &[R]) -> bool {
        let stamp = stamp_of(items);
        let binding = R::binding(self);

        let unchanged = self.config.rebuild_policy == RebuildPolicy::OnChange
            && binding.is_fresh()
            && stamp.is_some()
            && binding.stamp() == stamp;
        if unchanged {
            tracing::trace!(collection = %R::COLLECTION, "collection unchanged, keeping trie");
            return false;
        }

        self.rebuild_stamped(items, stamp);
        true
    }

    /// Syncs all three collections from a catalog. Returns the collections
    /// that were rebuilt.
    pub fn sync_catalog(&mut self, catalog: &Catalog) -> Vec<CollectionId> {
        let mut rebuilt = Vec::new();
        if self.sync(catalog.all::<Pokemon>()) {
            rebuilt.push(CollectionId::Pokemon);
        }
        if self.sync(catalog.all::<Element>()) {
            rebuilt.push(CollectionId::Elements);
        }
        if self.sync(catalog.all::<Ability>()) {
            rebuilt.push(CollectionId::Abilities);
        }
        rebuilt
    }

    /// Marks a collection as changed without rebuilding it yet.
    pub fn invalidate(&mut self, collection: CollectionId) {
        match collection {
            CollectionId::Pokemon => self.pokemon.invalidate(),
            CollectionId::Elements => self.elements.invalidate(),
            CollectionId::Abilities => self.abilities.invalidate(),
        }
    }

    /// Empties every trie and forgets all stamps.
    pub fn reset(&mut self) {
        self.pokemon.reset();
        self.elements.reset();
        self.abilities.reset();
    }

    fn rebuild_stamped<R: Tracked>(&mut self, items: &[R], stamp: Option<CollectionStamp>) {
        R::binding_mut(self).rebuild(items, stamp);
        tracing::debug!(
            collection = %R::COLLECTION,
            items = items.len(),
            stamp = stamp.map(|s| s.to_string()).unwrap_or_default(),
            "rebuilt prefix trie"
        );
    }
}

/// State operations.
impl SearchIndex {
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> IndexState {
        if self.stale_collections().is_empty() {
            IndexState::Fresh
        } else {
            IndexState::Stale
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.state() == IndexState::Fresh
    }

    /// Collections whose trie is unbuilt or invalidated.
    pub fn stale_collections(&self) -> Vec<CollectionId> {
        CollectionId::ALL
            .into_iter()
            .filter(|collection| self.status(*collection) != BindingStatus::Fresh)
            .collect()
    }

    pub fn stamp(&self, collection: CollectionId) -> Option<CollectionStamp> {
        match collection {
            CollectionId::Pokemon => self.pokemon.stamp(),
            CollectionId::Elements => self.elements.stamp(),
            CollectionId::Abilities => self.abilities.stamp(),
        }
    }

    pub fn binding<R: Tracked>(&self) -> &Binding<R> {
        R::binding(self)
    }

    fn status(&self, collection: CollectionId) -> BindingStatus {
        match collection {
            CollectionId::Pokemon => self.pokemon.status(),
            CollectionId::Elements => self.elements.status(),
            CollectionId::Abilities => self.abilities.status(),
        }
    }
}

/// Search operations.
impl SearchIndex {
    /// Prefix lookup in a single collection's trie.
    pub fn search<R: Tracked>(&self, prefix: &str) -> &[Arc<R>] {
        R::binding(self).search(prefix)
    }

    /// Filters the active collection by `raw_query` and passes the other
    /// two through unfiltered.
    ///
    /// An empty or whitespace-only query returns all three collections
    /// unfiltered. A stale index still answers from what it last built.
    pub fn query(&self, raw_query: &str, active: CollectionId) -> QueryResults<'_> {
        let stale = self.stale_collections();
        if !stale.is_empty() {
            tracing::warn!(?stale, "querying search index with stale collections");
        }

        let all = QueryResults {
            pokemon: self.pokemon.items(),
            elements: self.elements.items(),
            abilities: self.abilities.items(),
        };

        let prefix = match SearchQuery::parse(raw_query) {
            SearchQuery::All => return all,
            SearchQuery::Prefix(prefix) => prefix,
        };

        match active {
            CollectionId::Pokemon => QueryResults {
                pokemon: self.pokemon.search(&prefix),
                ..all
            },
            CollectionId::Elements => QueryResults {
                elements: self.elements.search(&prefix),
                ..all
            },
            CollectionId::Abilities => QueryResults {
                abilities: self.abilities.search(&prefix),
                ..all
            },
        }
    }
}

fn stamp_of<R: Tracked>(items: &[R]) -> Option<CollectionStamp> {
    match CollectionStamp::of(items) {
        Ok(stamp) => Some(stamp),
        Err(err) => {
            tracing::warn!(
                collection = %R::COLLECTION,
                error = %err,
                "could not stamp collection, it will be rebuilt on every sync"
            );
            None
        }
    }
}
