//! Machines: the TMs and HMs that teach moves

use serde::{Deserialize, Serialize};

use crate::resource::NamedApiResource;

/// A TM or HM: the item that teaches a move, per version group. Unnamed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    pub item: NamedApiResource,
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
    pub version_group: NamedApiResource,
}
