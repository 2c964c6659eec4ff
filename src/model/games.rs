//! Generations, pokedexes, versions and version groups

use serde::{Deserialize, Serialize};

use super::utility::{Description, Name};
use crate::resource::NamedApiResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub id: i64,
    pub name: String,
    pub abilities: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub main_region: NamedApiResource,
    pub moves: Vec<NamedApiResource>,
    pub pokemon_species: Vec<NamedApiResource>,
    pub types: Vec<NamedApiResource>,
    pub version_groups: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokedex {
    pub id: i64,
    pub name: String,
    pub is_main_series: bool,
    pub descriptions: Vec<Description>,
    pub names: Vec<Name>,
    pub pokemon_entries: Vec<PokemonEntry>,
    /// `None` for the national dex
    pub region: Option<NamedApiResource>,
    pub version_groups: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEntry {
    pub entry_number: i32,
    pub pokemon_species: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGroup {
    pub id: i64,
    pub name: String,
    pub order: i32,
    pub generation: NamedApiResource,
    pub move_learn_methods: Vec<NamedApiResource>,
    pub pokedexes: Vec<NamedApiResource>,
    pub regions: Vec<NamedApiResource>,
    pub versions: Vec<NamedApiResource>,
}
