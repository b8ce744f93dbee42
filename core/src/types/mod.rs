pub(crate) mod collection;
pub use collection::{CollectionId, UnknownCollection};

pub(crate) mod color;
pub use color::{Color, ColorError};

pub mod config;
pub use config::{AppConfig, ConfigError, RebuildPolicy};

pub(crate) mod entity;
pub use entity::{Ability, AbilityForm, Element, ElementForm, Pokemon, PokemonForm};

pub(crate) mod name;
pub use name::{MAX_NAME_LENGTH, Name, NameError, RecordId};

pub(crate) mod power;
pub use power::PowerLevel;

pub(crate) mod record;
pub use record::{Named, Record};
