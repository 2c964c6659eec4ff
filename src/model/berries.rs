//! Berries, berry firmnesses and berry flavors

use serde::{Deserialize, Serialize};

use super::utility::Name;
use crate::resource::NamedApiResource;

/// A berry: a small fruit that restores HP, cures status conditions or
/// boosts stats when eaten by a Pokémon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Berry {
    pub id: i64,
    pub name: String,
    /// Hours the tree takes to grow one of its four stages
    pub growth_time: i32,
    /// Maximum berries on one tree in Generation IV
    pub max_harvest: i32,
    /// Power of "Natural Gift" when used with this berry
    pub natural_gift_power: i32,
    /// Size in millimeters
    pub size: i32,
    pub smoothness: i32,
    /// How fast the berry dries out the soil; higher dries faster
    pub soil_dryness: i32,
    pub firmness: NamedApiResource,
    pub flavors: Vec<BerryFlavorMap>,
    /// The item data for this berry
    pub item: NamedApiResource,
    /// Type inherited by "Natural Gift" when used with this berry
    pub natural_gift_type: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryFlavorMap {
    pub potency: i32,
    pub flavor: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryFirmness {
    pub id: i64,
    pub name: String,
    pub berries: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

/// Flavors decide whether a Pokémon likes or dislikes a berry based on its nature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryFlavor {
    pub id: i64,
    pub name: String,
    pub berries: Vec<FlavorBerryMap>,
    pub contest_type: NamedApiResource,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorBerryMap {
    pub potency: i32,
    pub berry: NamedApiResource,
}
