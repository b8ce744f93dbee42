use super::error::CatalogError;
use super::Catalog;
use crate::types::{Ability, AbilityForm, Color, Element, ElementForm, Name, Pokemon, PokemonForm};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;

const BUILTIN_SEED: &str = include_str!("seed.toml");

/// Catalog contents in seed-file form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub elements: Vec<ElementSeed>,
    pub pokemon: Vec<PokemonSeed>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSeed {
    pub name: Name,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSeed {
    pub name: Name,
    /// Slash-separated element names; the first one is the pokemon's element.
    #[serde(rename = "type")]
    pub kind: String,
    pub hp: u32,
    pub image_url: String,
    #[serde(default)]
    pub abilities: Vec<AbilitySeed>,
}

impl PokemonSeed {
    pub fn primary_element(&self) -> &str {
        self.kind.split('/').next().unwrap_or_default().trim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySeed {
    pub name: Name,
    pub description: String,
    pub power: u32,
}

/// Number of records each seed run actually created.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub elements_created: usize,
    pub pokemon_created: usize,
    pub abilities_created: usize,
}

impl SeedData {
    /// The seed shipped with the crate.
    pub fn builtin() -> Result<Self, toml::de::Error> {
        Self::from_toml(BUILTIN_SEED)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

impl Catalog {
    /// Loads seed data, reusing records that already match a seed entry.
    ///
    /// Running the same seed twice leaves the catalog unchanged.
    pub fn apply_seed(
        &mut self,
        seed: &SeedData,
        now: SystemTime,
    ) -> Result<SeedOutcome, CatalogError> {
        let mut outcome = SeedOutcome::default();

        for element in &seed.elements {
            let form = ElementForm {
                name: element.name.clone(),
                color: element.color.clone(),
            };
            let existing = self
                .all::<Element>()
                .iter()
                .any(|e| e.name == form.name && e.color == form.color);
            if !existing {
                self.create::<Element>(form, now)?;
                outcome.elements_created += 1;
            }
        }

        for pokemon in &seed.pokemon {
            let element_name = pokemon.primary_element();
            let element_id = self
                .find_by_name::<Element>(element_name)
                .map(|e| e.id)
                .ok_or_else(|| CatalogError::UnknownElement {
                    pokemon: pokemon.name.to_string(),
                    element: element_name.to_string(),
                })?;

            let form = PokemonForm {
                name: pokemon.name.clone(),
                image_url: pokemon.image_url.clone(),
                hp: pokemon.hp,
                element_id,
            };
            let existing = find_matching(self.all::<Pokemon>(), |p| {
                p.name == form.name
                    && p.image_url == form.image_url
                    && p.hp == form.hp
                    && p.element_id == form.element_id
            })
            .map(|p| p.id);
            let pokemon_id = match existing {
                Some(id) => id,
                None => {
                    outcome.pokemon_created += 1;
                    self.create::<Pokemon>(form, now)?.id
                }
            };

            for ability in &pokemon.abilities {
                let form = AbilityForm {
                    name: ability.name.clone(),
                    description: ability.description.clone(),
                    power: ability.power,
                    pokemon_id,
                };
                let existing = find_matching(self.all::<Ability>(), |a| {
                    a.name == form.name
                        && a.description == form.description
                        && a.power == form.power
                        && a.pokemon_id == form.pokemon_id
                });
                if existing.is_none() {
                    self.create::<Ability>(form, now)?;
                    outcome.abilities_created += 1;
                }
            }
        }

        tracing::debug!(?outcome, "applied seed");
        Ok(outcome)
    }
}

fn find_matching<R>(rows: &[R], predicate: impl Fn(&R) -> bool) -> Option<&R> {
    rows.iter().find(|row| predicate(row))
}
