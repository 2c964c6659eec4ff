//! Typed records for every PokeAPI resource
//!
//! Field names follow the API's snake_case JSON. Decoding is strict: a
//! missing required field fails the whole record. Unknown fields are ignored
//! so additions on the server side do not break older clients.

mod berries;
mod contests;
mod encounters;
mod evolution;
mod games;
mod items;
mod locations;
mod machines;
mod moves;
mod pokemon;
mod utility;

pub use berries::*;
pub use contests::*;
pub use encounters::*;
pub use evolution::*;
pub use games::*;
pub use items::*;
pub use locations::*;
pub use machines::*;
pub use moves::*;
pub use pokemon::*;
pub use utility::*;
