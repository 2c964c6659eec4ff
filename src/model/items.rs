//! Items and their attributes, categories, fling effects and pockets

use serde::{Deserialize, Serialize};

use super::utility::{
    Description, Effect, GenerationGameIndex, MachineVersionDetail, Name, VerboseEffect,
    VersionGroupFlavorText,
};
use crate::resource::{ApiResource, NamedApiResource};

/// An object in the player's bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Price when bought from a shop
    pub cost: i32,
    /// Power of "Fling" with this item
    pub fling_power: Option<i32>,
    pub fling_effect: Option<NamedApiResource>,
    pub attributes: Vec<NamedApiResource>,
    pub category: NamedApiResource,
    pub effect_entries: Vec<VerboseEffect>,
    pub flavor_text_entries: Vec<VersionGroupFlavorText>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub names: Vec<Name>,
    pub held_by_pokemon: Vec<ItemHolderPokemon>,
    /// Evolution chain whose baby this item triggers when bred
    pub baby_trigger_for: Option<ApiResource>,
    pub sprites: ItemSprites,
    pub machines: Vec<MachineVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSprites {
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHolderPokemon {
    pub pokemon: NamedApiResource,
    pub version_details: Vec<ItemHolderPokemonVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHolderPokemonVersionDetail {
    pub rarity: i32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub id: i64,
    pub name: String,
    pub items: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub descriptions: Vec<Description>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: i64,
    pub name: String,
    pub items: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub pocket: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFlingEffect {
    pub id: i64,
    pub name: String,
    pub effect_entries: Vec<Effect>,
    pub items: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPocket {
    pub id: i64,
    pub name: String,
    pub categories: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}
