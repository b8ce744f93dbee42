//! Query result types.

use pokedex_core::types::{Ability, CollectionId, Element, Pokemon};
use std::sync::Arc;

/// One list per collection, borrowed from the index.
///
/// Only the active collection is filtered; the other two are the full
/// snapshots last indexed.
#[derive(Debug, Clone, Copy)]
pub struct QueryResults<'a> {
    pub pokemon: &'a [Arc<Pokemon>],
    pub elements: &'a [Arc<Element>],
    pub abilities: &'a [Arc<Ability>],
}

impl QueryResults<'_> {
    pub fn len(&self, collection: CollectionId) -> usize {
        match collection {
            CollectionId::Pokemon => self.pokemon.len(),
            CollectionId::Elements => self.elements.len(),
            CollectionId::Abilities => self.abilities.len(),
        }
    }

    pub fn is_empty(&self, collection: CollectionId) -> bool {
        self.len(collection) == 0
    }
}
