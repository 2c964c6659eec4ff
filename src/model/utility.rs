//! Languages and the small value types shared by every other resource

use serde::{Deserialize, Serialize};

use crate::resource::{ApiResource, NamedApiResource};

/// A language that resource text is translated into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
    /// Whether or not the games are published in this language
    pub official: bool,
    /// Two-letter ISO 639 code
    pub iso639: String,
    /// Two-letter ISO 3166 country code
    pub iso3166: String,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub description: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerboseEffect {
    pub effect: String,
    pub short_effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGroupFlavorText {
    pub text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

/// Encounter details for a Pokémon in a location area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub min_level: i32,
    pub max_level: i32,
    pub condition_values: Vec<NamedApiResource>,
    /// Percent chance that this encounter occurs
    pub chance: i32,
    pub method: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedApiResource,
    /// Total chance of all encounter details combined
    pub max_chance: i32,
    pub encounter_details: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationGameIndex {
    pub game_index: i32,
    pub generation: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGameIndex {
    pub game_index: i32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineVersionDetail {
    pub machine: ApiResource,
    pub version_group: NamedApiResource,
}
