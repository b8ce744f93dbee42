use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three tracked collections.
///
/// Doubles as the "active view" selector: exactly one collection is filtered
/// by a live query at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionId {
    #[default]
    Pokemon,
    Elements,
    Abilities,
}

impl CollectionId {
    pub const ALL: [CollectionId; 3] = [
        CollectionId::Pokemon,
        CollectionId::Elements,
        CollectionId::Abilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionId::Pokemon => "pokemon",
            CollectionId::Elements => "elements",
            CollectionId::Abilities => "abilities",
        }
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for CollectionId {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pokemon" => Ok(CollectionId::Pokemon),
            "elements" | "element" => Ok(CollectionId::Elements),
            "abilities" | "ability" => Ok(CollectionId::Abilities),
            _ => Err(UnknownCollection(s.to_string())),
        }
    }
}
