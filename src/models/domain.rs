use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// One row of the upstream listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
}

/// Upstream pagination envelope; only `results` is relayed
///
/// `results` is kept as the raw upstream text so entries pass through
/// untouched, including fields the relay does not know about.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage {
    pub results: Box<RawValue>,
}

impl ListingPage {
    pub fn results_is_array(&self) -> bool {
        self.results.get().trim_start().starts_with('[')
    }
}

/// A `{ name, url }` reference to another upstream resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: StatRef,
}

/// Sprite URLs; only the default front sprite is guaranteed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: String,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}

impl Sprites {
    pub fn has_shiny(&self) -> bool {
        self.front_shiny.is_some()
    }

    /// Front sprite to display, falling back to the default one when no
    /// shiny variant exists
    pub fn front(&self, shiny: bool) -> &str {
        match (&self.front_shiny, shiny) {
            (Some(url), true) => url,
            _ => &self.front_default,
        }
    }
}

/// Full detail record for a single creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub abilities: Vec<AbilitySlot>,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub sprites: Sprites,
}

impl DetailRecord {
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }

    pub fn hidden_abilities(&self) -> impl Iterator<Item = &str> {
        self.abilities
            .iter()
            .filter(|a| a.is_hidden)
            .map(|a| a.ability.name.as_str())
    }
}
