//! Encounter methods, conditions and condition values

use serde::{Deserialize, Serialize};

use super::utility::Name;
use crate::resource::NamedApiResource;

/// How the player meets a wild Pokémon (tall grass, surfing, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterMethod {
    pub id: i64,
    pub name: String,
    pub order: i32,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterCondition {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub values: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterConditionValue {
    pub id: i64,
    pub name: String,
    pub condition: NamedApiResource,
    pub names: Vec<Name>,
}
