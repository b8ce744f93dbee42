//! In-memory record catalog.
//!
//! Stands in for the REST layer: one ordered table per collection with
//! create/update/delete, foreign-key checks, and seed loading. Nothing here
//! is persisted; a catalog lives for one session.

use crate::types::{Ability, CollectionId, Element, Name, Pokemon, Record, RecordId};
use error::CatalogError;
use std::time::SystemTime;

mod seed;
mod table;

pub use seed::{AbilitySeed, ElementSeed, PokemonSeed, SeedData, SeedOutcome};
pub use table::Table;

pub mod error {
    use crate::types::{CollectionId, RecordId};
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum CatalogError {
        #[error("{collection} record {id} not found")]
        NotFound { collection: CollectionId, id: RecordId },

        #[error("{collection} record {id} referenced by the form does not exist")]
        MissingParent { collection: CollectionId, id: RecordId },

        #[error("{collection} record {id} is still referenced by {dependents} record(s)")]
        InUse {
            collection: CollectionId,
            id: RecordId,
            dependents: usize,
        },

        #[error("seed pokemon {pokemon} names unknown element {element}")]
        UnknownElement { pokemon: String, element: String },
    }
}

/// Gives generic catalog operations access to a record type's table.
pub trait Stored: Record {
    fn table(catalog: &Catalog) -> &Table<Self>;
    fn table_mut(catalog: &mut Catalog) -> &mut Table<Self>;
}

impl Stored for Pokemon {
    fn table(catalog: &Catalog) -> &Table<Self> {
        &catalog.pokemon
    }

    fn table_mut(catalog: &mut Catalog) -> &mut Table<Self> {
        &mut catalog.pokemon
    }
}

impl Stored for Element {
    fn table(catalog: &Catalog) -> &Table<Self> {
        &catalog.elements
    }

    fn table_mut(catalog: &mut Catalog) -> &mut Table<Self> {
        &mut catalog.elements
    }
}

impl Stored for Ability {
    fn table(catalog: &Catalog) -> &Table<Self> {
        &catalog.abilities
    }

    fn table_mut(catalog: &mut Catalog) -> &mut Table<Self> {
        &mut catalog.abilities
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pokemon: Table<Pokemon>,
    elements: Table<Element>,
    abilities: Table<Ability>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in seed data.
    pub fn seeded(now: SystemTime) -> crate::Result<Self> {
        let mut catalog = Self::new();
        catalog.apply_seed(&SeedData::builtin()?, now)?;
        Ok(catalog)
    }
}

/// Read operations.
impl Catalog {
    pub fn all<R: Stored>(&self) -> &[R] {
        R::table(self).rows()
    }

    pub fn get<R: Stored>(&self, id: RecordId) -> Option<&R> {
        R::table(self).get(id)
    }

    pub fn find_by_name<R: Stored>(&self, name: &str) -> Option<&R> {
        self.all::<R>().iter().find(|row| row.name() == name)
    }

    pub fn contains(&self, collection: CollectionId, id: RecordId) -> bool {
        match collection {
            CollectionId::Pokemon => self.pokemon.get(id).is_some(),
            CollectionId::Elements => self.elements.get(id).is_some(),
            CollectionId::Abilities => self.abilities.get(id).is_some(),
        }
    }

    pub fn len(&self, collection: CollectionId) -> usize {
        match collection {
            CollectionId::Pokemon => self.pokemon.len(),
            CollectionId::Elements => self.elements.len(),
            CollectionId::Abilities => self.abilities.len(),
        }
    }

    /// Mutation counter of one collection. Changes whenever its rows change.
    pub fn revision(&self, collection: CollectionId) -> u64 {
        match collection {
            CollectionId::Pokemon => self.pokemon.revision(),
            CollectionId::Elements => self.elements.revision(),
            CollectionId::Abilities => self.abilities.revision(),
        }
    }

    /// Counts records whose foreign key points at `(collection, id)`.
    pub fn dependents(&self, collection: CollectionId, id: RecordId) -> usize {
        let target = Some((collection, id));
        let pokemon = self.pokemon.rows().iter().filter(|r| r.parent() == target);
        let abilities = self.abilities.rows().iter().filter(|r| r.parent() == target);
        pokemon.count() + abilities.count()
    }
}

/// Mutation operations.
impl Catalog {
    pub fn create<R: Stored>(
        &mut self,
        form: R::Form,
        now: SystemTime,
    ) -> Result<R, CatalogError> {
        self.check_parent::<R>(&form)?;

        let row = R::table_mut(self).insert(form, now);
        tracing::debug!(
            collection = %R::COLLECTION,
            id = %row.id(),
            name = row.name(),
            "created record"
        );
        Ok(row)
    }

    pub fn update<R: Stored>(
        &mut self,
        id: RecordId,
        form: R::Form,
        now: SystemTime,
    ) -> Result<R, CatalogError> {
        if R::table(self).get(id).is_none() {
            return Err(CatalogError::NotFound {
                collection: R::COLLECTION,
                id,
            });
        }
        self.check_parent::<R>(&form)?;

        let row = R::table_mut(self)
            .update(id, form, now)
            .ok_or(CatalogError::NotFound {
                collection: R::COLLECTION,
                id,
            })?;
        tracing::debug!(
            collection = %R::COLLECTION,
            id = %id,
            name = row.name(),
            "updated record"
        );
        Ok(row)
    }

    /// Changes only the name of a record.
    pub fn rename<R: Stored>(
        &mut self,
        id: RecordId,
        name: Name,
        now: SystemTime,
    ) -> Result<R, CatalogError> {
        let form = self
            .get::<R>(id)
            .map(|row| row.renamed(name))
            .ok_or(CatalogError::NotFound {
                collection: R::COLLECTION,
                id,
            })?;
        self.update::<R>(id, form, now)
    }

    /// Deletes a record. Records still referenced by others are kept.
    pub fn delete<R: Stored>(&mut self, id: RecordId) -> Result<R, CatalogError> {
        if R::table(self).get(id).is_none() {
            return Err(CatalogError::NotFound {
                collection: R::COLLECTION,
                id,
            });
        }

        let dependents = self.dependents(R::COLLECTION, id);
        if dependents > 0 {
            return Err(CatalogError::InUse {
                collection: R::COLLECTION,
                id,
                dependents,
            });
        }

        let row = R::table_mut(self).remove(id).ok_or(CatalogError::NotFound {
            collection: R::COLLECTION,
            id,
        })?;
        tracing::debug!(collection = %R::COLLECTION, id = %id, "deleted record");
        Ok(row)
    }

    fn check_parent<R: Stored>(&self, form: &R::Form) -> Result<(), CatalogError> {
        match R::form_parent(form) {
            Some((collection, id)) if !self.contains(collection, id) => {
                Err(CatalogError::MissingParent { collection, id })
            }
            _ => Ok(()),
        }
    }
}
