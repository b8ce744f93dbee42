//! Records of the three tracked collections and their edit forms.

use crate::types::{CollectionId, Color, Name, Named, PowerLevel, Record, RecordId};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Elemental type such as Fire or Water.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: RecordId,
    pub name: Name,
    pub color: Color,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementForm {
    pub name: Name,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: RecordId,
    pub name: Name,
    pub image_url: String,
    pub hp: u32,
    pub element_id: RecordId,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub name: Name,
    pub image_url: String,
    pub hp: u32,
    pub element_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: RecordId,
    pub name: Name,
    pub description: String,
    pub power: u32,
    pub pokemon_id: RecordId,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl Ability {
    pub fn power_level(&self) -> PowerLevel {
        PowerLevel::from_power(self.power)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityForm {
    pub name: Name,
    pub description: String,
    pub power: u32,
    pub pokemon_id: RecordId,
}

impl Named for Element {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Named for Pokemon {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Named for Ability {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Record for Element {
    const COLLECTION: CollectionId = CollectionId::Elements;
    type Form = ElementForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn parent(&self) -> Option<(CollectionId, RecordId)> {
        None
    }

    fn form_parent(_form: &ElementForm) -> Option<(CollectionId, RecordId)> {
        None
    }

    fn from_form(id: RecordId, form: ElementForm, now: SystemTime) -> Self {
        Self {
            id,
            name: form.name,
            color: form.color,
            created_at: now,
            updated_at: now,
        }
    }

    fn to_form(&self) -> ElementForm {
        ElementForm {
            name: self.name.clone(),
            color: self.color.clone(),
        }
    }

    fn renamed(&self, name: Name) -> ElementForm {
        ElementForm {
            name,
            ..self.to_form()
        }
    }

    fn apply_form(&mut self, form: ElementForm, now: SystemTime) {
        self.name = form.name;
        self.color = form.color;
        self.updated_at = now;
    }
}

impl Record for Pokemon {
    const COLLECTION: CollectionId = CollectionId::Pokemon;
    type Form = PokemonForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn parent(&self) -> Option<(CollectionId, RecordId)> {
        Some((CollectionId::Elements, self.element_id))
    }

    fn form_parent(form: &PokemonForm) -> Option<(CollectionId, RecordId)> {
        Some((CollectionId::Elements, form.element_id))
    }

    fn from_form(id: RecordId, form: PokemonForm, now: SystemTime) -> Self {
        Self {
            id,
            name: form.name,
            image_url: form.image_url,
            hp: form.hp,
            element_id: form.element_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn to_form(&self) -> PokemonForm {
        PokemonForm {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            hp: self.hp,
            element_id: self.element_id,
        }
    }

    fn renamed(&self, name: Name) -> PokemonForm {
        PokemonForm {
            name,
            ..self.to_form()
        }
    }

    fn apply_form(&mut self, form: PokemonForm, now: SystemTime) {
        self.name = form.name;
        self.image_url = form.image_url;
        self.hp = form.hp;
        self.element_id = form.element_id;
        self.updated_at = now;
    }
}

impl Record for Ability {
    const COLLECTION: CollectionId = CollectionId::Abilities;
    type Form = AbilityForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn parent(&self) -> Option<(CollectionId, RecordId)> {
        Some((CollectionId::Pokemon, self.pokemon_id))
    }

    fn form_parent(form: &AbilityForm) -> Option<(CollectionId, RecordId)> {
        Some((CollectionId::Pokemon, form.pokemon_id))
    }

    fn from_form(id: RecordId, form: AbilityForm, now: SystemTime) -> Self {
        Self {
            id,
            name: form.name,
            description: form.description,
            power: form.power,
            pokemon_id: form.pokemon_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn to_form(&self) -> AbilityForm {
        AbilityForm {
            name: self.name.clone(),
            description: self.description.clone(),
            power: self.power,
            pokemon_id: self.pokemon_id,
        }
    }

    fn renamed(&self, name: Name) -> AbilityForm {
        AbilityForm {
            name,
            ..self.to_form()
        }
    }

    fn apply_form(&mut self, form: AbilityForm, now: SystemTime) {
        self.name = form.name;
        self.description = form.description;
        self.power = form.power;
        self.pokemon_id = form.pokemon_id;
        self.updated_at = now;
    }
}
