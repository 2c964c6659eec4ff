//! Contest types and effects

use serde::{Deserialize, Serialize};

use super::utility::{Effect, FlavorText};
use crate::resource::NamedApiResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestType {
    pub id: i64,
    pub name: String,
    pub berry_flavor: NamedApiResource,
    pub names: Vec<ContestName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestName {
    pub name: String,
    pub color: String,
    pub language: NamedApiResource,
}

/// Effect of a move when used in a contest. Unnamed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestEffect {
    pub id: i64,
    /// Base number of hearts the user receives
    pub appeal: i32,
    /// Base number of hearts the user's opponent loses
    pub jam: i32,
    pub effect_entries: Vec<Effect>,
    pub flavor_text_entries: Vec<FlavorText>,
}

/// Effect of a move when used in a super contest. Unnamed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperContestEffect {
    pub id: i64,
    pub appeal: i32,
    pub flavor_text_entries: Vec<FlavorText>,
    pub moves: Vec<NamedApiResource>,
}
