//! Locations, location areas, pal park areas and regions

use serde::{Deserialize, Serialize};

use super::utility::{GenerationGameIndex, Name, VersionEncounterDetail};
use crate::resource::NamedApiResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub region: Option<NamedApiResource>,
    pub names: Vec<Name>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub areas: Vec<NamedApiResource>,
}

/// A section of a location (a cave floor, a building, ...) with its own encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: i64,
    pub name: String,
    pub game_index: i32,
    pub encounter_method_rates: Vec<EncounterMethodRate>,
    pub location: NamedApiResource,
    pub names: Vec<Name>,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterMethodRate {
    pub encounter_method: NamedApiResource,
    pub version_details: Vec<EncounterMethodRateVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterMethodRateVersionDetail {
    pub rate: i32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedApiResource,
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalParkArea {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_encounters: Vec<PalParkEncounterSpecies>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalParkEncounterSpecies {
    pub base_score: i32,
    pub rate: i32,
    pub pokemon_species: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub locations: Vec<NamedApiResource>,
    pub main_generation: Option<NamedApiResource>,
    pub names: Vec<Name>,
    pub pokedexes: Vec<NamedApiResource>,
    pub version_groups: Vec<NamedApiResource>,
}
