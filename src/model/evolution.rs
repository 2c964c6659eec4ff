//! Evolution chains and triggers

use serde::{Deserialize, Serialize};

use super::utility::Name;
use crate::resource::NamedApiResource;

/// An evolution family, rooted at its least evolved species. Unnamed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: i64,
    /// Item a parent must hold to breed the baby of this chain
    pub baby_trigger_item: Option<NamedApiResource>,
    pub chain: ChainLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub is_baby: bool,
    pub species: NamedApiResource,
    pub evolution_details: Vec<EvolutionDetail>,
    pub evolves_to: Vec<ChainLink>,
}

/// Conditions for one evolution step. Every condition besides the trigger
/// is optional and absent when it does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedApiResource,
    #[serde(default)]
    pub item: Option<NamedApiResource>,
    #[serde(default)]
    pub gender: Option<i32>,
    #[serde(default)]
    pub held_item: Option<NamedApiResource>,
    #[serde(default)]
    pub known_move: Option<NamedApiResource>,
    #[serde(default)]
    pub known_move_type: Option<NamedApiResource>,
    #[serde(default)]
    pub location: Option<NamedApiResource>,
    #[serde(default)]
    pub min_level: Option<i32>,
    #[serde(default)]
    pub min_happiness: Option<i32>,
    #[serde(default)]
    pub min_beauty: Option<i32>,
    #[serde(default)]
    pub min_affection: Option<i32>,
    #[serde(default)]
    pub party_species: Option<NamedApiResource>,
    #[serde(default)]
    pub party_type: Option<NamedApiResource>,
    /// 1 = Attack > Defense, 0 = equal, -1 = Attack < Defense
    #[serde(default)]
    pub relative_physical_stats: Option<i32>,
    /// "day", "night" or empty
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub trade_species: Option<NamedApiResource>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    #[serde(default)]
    pub turn_upside_down: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionTrigger {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}
