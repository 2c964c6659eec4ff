//! Moves and their ailments, battle styles, categories, damage classes,
//! learn methods and targets

use serde::{Deserialize, Serialize};

use super::pokemon::AbilityEffectChange;
use super::utility::{Description, MachineVersionDetail, Name, VerboseEffect};
use crate::resource::{ApiResource, NamedApiResource};

/// A skill a Pokémon uses in battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: i64,
    pub name: String,
    pub accuracy: Option<i32>,
    /// Percent chance that the secondary effect happens
    pub effect_chance: Option<i32>,
    pub pp: Option<i32>,
    /// Between -8 and 8; higher moves act first
    pub priority: i32,
    pub power: Option<i32>,
    pub contest_combos: Option<ContestComboSets>,
    pub contest_type: Option<NamedApiResource>,
    pub contest_effect: Option<ApiResource>,
    pub super_contest_effect: Option<ApiResource>,
    pub damage_class: NamedApiResource,
    pub effect_entries: Vec<VerboseEffect>,
    pub effect_changes: Vec<AbilityEffectChange>,
    pub generation: NamedApiResource,
    pub learned_by_pokemon: Vec<NamedApiResource>,
    pub meta: Option<MoveMetaData>,
    pub names: Vec<Name>,
    pub past_values: Vec<PastMoveStatValues>,
    pub stat_changes: Vec<MoveStatChange>,
    pub target: NamedApiResource,
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
    pub machines: Vec<MachineVersionDetail>,
    pub flavor_text_entries: Vec<MoveFlavorText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestComboSets {
    #[serde(rename = "normal")]
    pub normal_set: ContestComboDetail,
    #[serde(rename = "super")]
    pub super_set: ContestComboDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestComboDetail {
    pub use_before: Option<Vec<NamedApiResource>>,
    pub use_after: Option<Vec<NamedApiResource>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveMetaData {
    pub ailment: NamedApiResource,
    pub category: NamedApiResource,
    pub min_hits: Option<i32>,
    pub max_hits: Option<i32>,
    pub min_turns: Option<i32>,
    pub max_turns: Option<i32>,
    /// HP drain (positive) or recoil (negative), as a percent of damage dealt
    pub drain: i32,
    /// Percent of the user's max HP healed
    pub healing: i32,
    pub crit_rate: i32,
    pub ailment_chance: i32,
    pub flinch_chance: i32,
    pub stat_chance: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatChange {
    pub change: i32,
    pub stat: NamedApiResource,
}

/// Values a move had before the version group that changed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastMoveStatValues {
    pub accuracy: Option<i32>,
    pub effect_chance: Option<i32>,
    pub power: Option<i32>,
    pub pp: Option<i32>,
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(rename = "type")]
    pub type_: Option<NamedApiResource>,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveAilment {
    pub id: i64,
    pub name: String,
    pub moves: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveBattleStyle {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCategory {
    pub id: i64,
    pub name: String,
    pub moves: Vec<NamedApiResource>,
    pub descriptions: Vec<Description>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDamageClass {
    pub id: i64,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub moves: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveLearnMethod {
    pub id: i64,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub names: Vec<Name>,
    pub version_groups: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveTarget {
    pub id: i64,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub moves: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}
