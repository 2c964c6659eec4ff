//! Pokémon, species, forms, and the stats, types, natures and abilities
//! that describe them

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::utility::{
    Description, Effect, GenerationGameIndex, Name, VerboseEffect, VersionEncounterDetail,
    VersionGameIndex,
};
use crate::resource::{ApiResource, NamedApiResource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: i64,
    pub name: String,
    pub is_main_series: bool,
    pub generation: NamedApiResource,
    pub names: Vec<Name>,
    pub effect_entries: Vec<VerboseEffect>,
    pub effect_changes: Vec<AbilityEffectChange>,
    pub flavor_text_entries: Vec<AbilityFlavorText>,
    pub pokemon: Vec<AbilityPokemon>,
}

/// Previous effect text of an ability or move, valid up to a version group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectChange {
    pub effect_entries: Vec<Effect>,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityPokemon {
    pub is_hidden: bool,
    pub slot: i32,
    pub pokemon: NamedApiResource,
}

/// Flavor text tied to a Pokémon's highest IV. Unnamed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: i64,
    pub gene_modulo: i32,
    pub possible_values: Vec<i32>,
    pub descriptions: Vec<Description>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggGroup {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gender {
    pub id: i64,
    pub name: String,
    pub pokemon_species_details: Vec<PokemonSpeciesGender>,
    pub required_for_evolution: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpeciesGender {
    /// Chance of being female, in eighths; -1 for genderless
    pub rate: i32,
    pub pokemon_species: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRate {
    pub id: i64,
    pub name: String,
    /// LaTeX formula for experience needed per level
    pub formula: String,
    pub descriptions: Vec<Description>,
    pub levels: Vec<GrowthRateExperienceLevel>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateExperienceLevel {
    pub level: i32,
    pub experience: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nature {
    pub id: i64,
    pub name: String,
    pub decreased_stat: Option<NamedApiResource>,
    pub increased_stat: Option<NamedApiResource>,
    pub hates_flavor: Option<NamedApiResource>,
    pub likes_flavor: Option<NamedApiResource>,
    pub pokeathlon_stat_changes: Vec<NatureStatChange>,
    pub move_battle_style_preferences: Vec<MoveBattleStylePreference>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureStatChange {
    pub max_change: i32,
    pub pokeathlon_stat: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveBattleStylePreference {
    pub low_hp_preference: i32,
    pub high_hp_preference: i32,
    pub move_battle_style: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeathlonStat {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub affecting_natures: NaturePokeathlonStatAffectSets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffectSets {
    pub increase: Vec<NaturePokeathlonStatAffect>,
    pub decrease: Vec<NaturePokeathlonStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffect {
    pub max_change: i32,
    pub nature: NamedApiResource,
}

/// A single Pokémon variety (`/pokemon/{id}`). Species group varieties
/// together; most species have exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub base_experience: Option<i32>,
    /// Height in decimetres
    pub height: i32,
    pub is_default: bool,
    pub order: i32,
    /// Weight in hectograms
    pub weight: i32,
    pub species: NamedApiResource,
    pub abilities: Vec<PokemonAbility>,
    pub forms: Vec<NamedApiResource>,
    pub game_indices: Vec<VersionGameIndex>,
    pub held_items: Vec<PokemonHeldItem>,
    pub moves: Vec<PokemonMove>,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
    pub past_types: Vec<PokemonPastType>,
    pub past_abilities: Vec<PokemonPastAbility>,
    pub cries: PokemonCries,
    pub sprites: PokemonSprites,
}

/// Default sprites. Per-game and artwork sprites vary by generation and
/// are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny_female: Option<String>,
    #[serde(default)]
    pub other: Value,
    #[serde(default)]
    pub versions: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonCries {
    pub latest: String,
    pub legacy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: i32,
    pub ability: Option<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedApiResource,
    pub version_details: Vec<PokemonHeldItemVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonHeldItemVersion {
    pub version: NamedApiResource,
    pub rarity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub move_learn_method: NamedApiResource,
    pub version_group: NamedApiResource,
    pub level_learned_at: i32,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedApiResource,
    /// Effort points gained by defeating this Pokémon
    pub effort: i32,
    pub base_stat: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: i32,
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPastType {
    pub generation: NamedApiResource,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPastAbility {
    pub generation: NamedApiResource,
    pub abilities: Vec<PokemonAbility>,
}

/// Element of `/pokemon/{id}/encounters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaEncounter {
    pub location_area: NamedApiResource,
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonColor {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub id: i64,
    pub name: String,
    pub order: i32,
    pub form_order: i32,
    pub is_default: bool,
    pub is_battle_only: bool,
    pub is_mega: bool,
    pub form_name: String,
    pub pokemon: NamedApiResource,
    pub types: Vec<PokemonType>,
    pub version_group: NamedApiResource,
    pub names: Vec<Name>,
    pub form_names: Vec<Name>,
    pub sprites: PokemonFormSprites,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonFormSprites {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonHabitat {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonShape {
    pub id: i64,
    pub name: String,
    pub awesome_names: Vec<AwesomeName>,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwesomeName {
    pub awesome_name: String,
    pub language: NamedApiResource,
}

/// The species a group of Pokémon varieties belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: i64,
    pub name: String,
    pub order: i32,
    /// Chance of being female, in eighths; -1 for genderless
    pub gender_rate: i32,
    pub capture_rate: i32,
    pub base_happiness: Option<i32>,
    pub is_baby: bool,
    #[serde(default)]
    pub is_legendary: Option<bool>,
    #[serde(default)]
    pub is_mythical: Option<bool>,
    pub hatch_counter: Option<i32>,
    pub has_gender_differences: bool,
    pub forms_switchable: bool,
    pub growth_rate: NamedApiResource,
    pub pokedex_numbers: Vec<PokemonSpeciesDexEntry>,
    pub egg_groups: Vec<NamedApiResource>,
    pub color: NamedApiResource,
    pub shape: Option<NamedApiResource>,
    pub evolves_from_species: Option<NamedApiResource>,
    pub evolution_chain: ApiResource,
    pub habitat: Option<NamedApiResource>,
    pub generation: NamedApiResource,
    pub names: Vec<Name>,
    pub pal_park_encounters: Vec<PalParkEncounterArea>,
    pub form_descriptions: Vec<Description>,
    pub genera: Vec<Genus>,
    pub varieties: Vec<PokemonSpeciesVariety>,
    pub flavor_text_entries: Vec<PokemonSpeciesFlavorText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpeciesFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpeciesDexEntry {
    pub entry_number: i32,
    pub pokedex: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalParkEncounterArea {
    pub base_score: i32,
    pub rate: i32,
    pub area: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpeciesVariety {
    pub is_default: bool,
    pub pokemon: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: i64,
    pub name: String,
    pub game_index: i32,
    pub is_battle_only: bool,
    pub affecting_moves: MoveStatAffectSets,
    pub affecting_natures: NatureStatAffectSets,
    pub characteristics: Vec<ApiResource>,
    pub move_damage_class: Option<NamedApiResource>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatAffectSets {
    pub increase: Vec<MoveStatAffect>,
    pub decrease: Vec<MoveStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatAffect {
    pub change: i32,
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureStatAffectSets {
    pub increase: Vec<NamedApiResource>,
    pub decrease: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Type {
    pub id: i64,
    pub name: String,
    pub damage_relations: TypeRelations,
    pub past_damage_relations: Vec<TypePastDamageRelation>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub generation: NamedApiResource,
    pub move_damage_class: Option<NamedApiResource>,
    pub names: Vec<Name>,
    pub pokemon: Vec<TypePokemon>,
    pub moves: Vec<NamedApiResource>,
    /// Type icons per generation and version group, kept as raw JSON
    #[serde(default)]
    pub sprites: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypePokemon {
    pub slot: i32,
    pub pokemon: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRelations {
    pub no_damage_to: Vec<NamedApiResource>,
    pub half_damage_to: Vec<NamedApiResource>,
    pub double_damage_to: Vec<NamedApiResource>,
    pub no_damage_from: Vec<NamedApiResource>,
    pub half_damage_from: Vec<NamedApiResource>,
    pub double_damage_from: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypePastDamageRelation {
    pub generation: NamedApiResource,
    pub damage_relations: TypeRelations,
}
