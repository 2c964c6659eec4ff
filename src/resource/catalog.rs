//! The resource table.
//!
//! One line per resource. From it [`catalog!`] generates the [`Resource`]
//! impls, the [`Record`] enum, the registry descriptors and a named pair of
//! accessors (`get_x`, `get_x_list`) on both clients.

use serde::Serialize;

use super::registry::{Resource, ResourceDescriptor, ResourceKind};
use super::summary::{ApiResource, NamedApiResource, PaginatedList};
use crate::api::blocking::PokeApi as BlockingPokeApi;
use crate::api::{ApiError, PokeApi, Transport};
use crate::model::*;

macro_rules! summary_type {
    (named) => {
        NamedApiResource
    };
    (unnamed) => {
        ApiResource
    };
}

macro_rules! resource_kind {
    (named) => {
        ResourceKind::Named
    };
    (unnamed) => {
        ResourceKind::Unnamed
    };
}

macro_rules! record_name {
    (named, $record:expr) => {
        Some($record.name.as_str())
    };
    (unnamed, $record:expr) => {{
        let _ = $record;
        None
    }};
}

macro_rules! catalog {
    ($( $kind:ident $name:literal => $ty:ident { $get:ident, $list:ident } ),* $(,)?) => {
        /// A decoded record of any resource type
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Record {
            $( $ty($ty), )*
        }

        impl Record {
            /// Registry name of the record's resource type
            pub fn resource_name(&self) -> &'static str {
                match self {
                    $( Record::$ty(_) => $name, )*
                }
            }

            pub fn id(&self) -> i64 {
                match self {
                    $( Record::$ty(record) => record.id, )*
                }
            }

            /// The record's `name` field; `None` for unnamed resources
            pub fn name(&self) -> Option<&str> {
                match self {
                    $( Record::$ty(record) => record_name!($kind, record), )*
                }
            }
        }

        $(
            impl From<$ty> for Record {
                fn from(record: $ty) -> Self {
                    Record::$ty(record)
                }
            }

            impl Resource for $ty {
                const NAME: &'static str = $name;
                const PATH_SEGMENT: &'static str = $name;
                const KIND: ResourceKind = resource_kind!($kind);
                type Summary = summary_type!($kind);
            }
        )*

        pub(super) static DESCRIPTORS: &[ResourceDescriptor] = &[
            $( ResourceDescriptor::of::<$ty>(), )*
        ];

        impl<T: Transport> PokeApi<T> {
            $(
                #[doc = concat!("Fetch a `", $name, "` by id")]
                pub async fn $get(&self, id: i64) -> Result<$ty, ApiError> {
                    self.get::<$ty>(id).await
                }

                #[doc = concat!("Fetch a page of `", $name, "` summaries")]
                pub async fn $list(
                    &self,
                    offset: i64,
                    limit: i64,
                ) -> Result<PaginatedList<summary_type!($kind)>, ApiError> {
                    self.get_list::<$ty>(offset, limit).await
                }
            )*
        }

        impl<T: Transport> BlockingPokeApi<T> {
            $(
                #[doc = concat!("Fetch a `", $name, "` by id")]
                pub fn $get(&self, id: i64) -> Result<$ty, ApiError> {
                    self.get::<$ty>(id)
                }

                #[doc = concat!("Fetch a page of `", $name, "` summaries")]
                pub fn $list(
                    &self,
                    offset: i64,
                    limit: i64,
                ) -> Result<PaginatedList<summary_type!($kind)>, ApiError> {
                    self.get_list::<$ty>(offset, limit)
                }
            )*
        }
    };
}

catalog! {
    // Berries
    named "berry" => Berry { get_berry, get_berry_list },
    named "berry-firmness" => BerryFirmness { get_berry_firmness, get_berry_firmness_list },
    named "berry-flavor" => BerryFlavor { get_berry_flavor, get_berry_flavor_list },

    // Contests
    named "contest-type" => ContestType { get_contest_type, get_contest_type_list },
    unnamed "contest-effect" => ContestEffect { get_contest_effect, get_contest_effect_list },
    unnamed "super-contest-effect" => SuperContestEffect { get_super_contest_effect, get_super_contest_effect_list },

    // Encounters
    named "encounter-method" => EncounterMethod { get_encounter_method, get_encounter_method_list },
    named "encounter-condition" => EncounterCondition { get_encounter_condition, get_encounter_condition_list },
    named "encounter-condition-value" => EncounterConditionValue { get_encounter_condition_value, get_encounter_condition_value_list },

    // Evolution
    unnamed "evolution-chain" => EvolutionChain { get_evolution_chain, get_evolution_chain_list },
    named "evolution-trigger" => EvolutionTrigger { get_evolution_trigger, get_evolution_trigger_list },

    // Games
    named "generation" => Generation { get_generation, get_generation_list },
    named "pokedex" => Pokedex { get_pokedex, get_pokedex_list },
    named "version" => Version { get_version, get_version_list },
    named "version-group" => VersionGroup { get_version_group, get_version_group_list },

    // Items
    named "item" => Item { get_item, get_item_list },
    named "item-attribute" => ItemAttribute { get_item_attribute, get_item_attribute_list },
    named "item-category" => ItemCategory { get_item_category, get_item_category_list },
    named "item-fling-effect" => ItemFlingEffect { get_item_fling_effect, get_item_fling_effect_list },
    named "item-pocket" => ItemPocket { get_item_pocket, get_item_pocket_list },

    // Locations
    named "location" => Location { get_location, get_location_list },
    named "location-area" => LocationArea { get_location_area, get_location_area_list },
    named "pal-park-area" => PalParkArea { get_pal_park_area, get_pal_park_area_list },
    named "region" => Region { get_region, get_region_list },

    // Machines
    unnamed "machine" => Machine { get_machine, get_machine_list },

    // Moves
    named "move" => Move { get_move, get_move_list },
    named "move-ailment" => MoveAilment { get_move_ailment, get_move_ailment_list },
    named "move-battle-style" => MoveBattleStyle { get_move_battle_style, get_move_battle_style_list },
    named "move-category" => MoveCategory { get_move_category, get_move_category_list },
    named "move-damage-class" => MoveDamageClass { get_move_damage_class, get_move_damage_class_list },
    named "move-learn-method" => MoveLearnMethod { get_move_learn_method, get_move_learn_method_list },
    named "move-target" => MoveTarget { get_move_target, get_move_target_list },

    // Pokémon
    named "ability" => Ability { get_ability, get_ability_list },
    unnamed "characteristic" => Characteristic { get_characteristic, get_characteristic_list },
    named "egg-group" => EggGroup { get_egg_group, get_egg_group_list },
    named "gender" => Gender { get_gender, get_gender_list },
    named "growth-rate" => GrowthRate { get_growth_rate, get_growth_rate_list },
    named "nature" => Nature { get_nature, get_nature_list },
    named "pokeathlon-stat" => PokeathlonStat { get_pokeathlon_stat, get_pokeathlon_stat_list },
    named "pokemon" => Pokemon { get_pokemon, get_pokemon_list },
    named "pokemon-color" => PokemonColor { get_pokemon_color, get_pokemon_color_list },
    named "pokemon-form" => PokemonForm { get_pokemon_form, get_pokemon_form_list },
    named "pokemon-habitat" => PokemonHabitat { get_pokemon_habitat, get_pokemon_habitat_list },
    named "pokemon-shape" => PokemonShape { get_pokemon_shape, get_pokemon_shape_list },
    named "pokemon-species" => PokemonSpecies { get_pokemon_species, get_pokemon_species_list },
    named "stat" => Stat { get_stat, get_stat_list },
    named "type" => Type { get_type, get_type_list },

    // Utility
    named "language" => Language { get_language, get_language_list },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sitrus() -> Berry {
        serde_json::from_str(include_str!("../../tests/fixtures/berry-10.json")).unwrap()
    }

    #[test]
    fn record_reports_its_resource() {
        let record = Record::from(sitrus());
        assert_eq!(record.resource_name(), "berry");
        assert_eq!(record.id(), 10);
        assert_eq!(record.name(), Some("sitrus"));
    }

    #[test]
    fn unnamed_record_has_no_name() {
        let machine: Machine = serde_json::from_str(
            r#"{
                "id": 1,
                "item": {"name": "tm00", "url": "https://pokeapi.co/api/v2/item/1288/"},
                "move": {"name": "mega-punch", "url": "https://pokeapi.co/api/v2/move/5/"},
                "version_group": {"name": "sword-shield", "url": "https://pokeapi.co/api/v2/version-group/20/"}
            }"#,
        )
        .unwrap();

        let record = Record::from(machine);
        assert_eq!(record.resource_name(), "machine");
        assert_eq!(record.name(), None);
    }

    #[test]
    fn record_serializes_without_a_tag() {
        let berry = sitrus();
        let record = serde_json::to_value(Record::from(berry.clone())).unwrap();
        assert_eq!(record, serde_json::to_value(berry).unwrap());
    }

    macro_rules! recorded {
        ($( $name:literal $id:literal ),* $(,)?) => {
            &[ $( ($name, $id, include_str!(concat!("../../tests/fixtures/", $name, "-", $id, ".json"))), )* ]
        };
    }

    /// One recorded response per resource: (registry name, id, body)
    const RECORDED: &[(&str, i64, &str)] = recorded![
        "ability" 1,
        "berry" 10,
        "berry-firmness" 3,
        "berry-flavor" 3,
        "characteristic" 1,
        "contest-effect" 27,
        "contest-type" 4,
        "egg-group" 1,
        "encounter-condition" 5,
        "encounter-condition-value" 5,
        "encounter-method" 5,
        "evolution-chain" 1,
        "evolution-trigger" 1,
        "gender" 1,
        "generation" 6,
        "growth-rate" 1,
        "item" 20,
        "item-attribute" 3,
        "item-category" 34,
        "item-fling-effect" 1,
        "item-pocket" 4,
        "language" 9,
        "location" 20,
        "location-area" 20,
        "machine" 18,
        "move" 34,
        "move-ailment" 1,
        "move-battle-style" 1,
        "move-category" 1,
        "move-damage-class" 1,
        "move-learn-method" 10,
        "move-target" 8,
        "nature" 10,
        "pal-park-area" 2,
        "pokeathlon-stat" 1,
        "pokedex" 12,
        "pokemon" 1,
        "pokemon-color" 1,
        "pokemon-form" 1,
        "pokemon-habitat" 1,
        "pokemon-shape" 1,
        "pokemon-species" 1,
        "region" 1,
        "stat" 2,
        "super-contest-effect" 14,
        "type" 8,
        "version" 9,
        "version-group" 1,
    ];

    #[test]
    fn every_resource_decodes_a_recorded_response() {
        for descriptor in DESCRIPTORS {
            let (_, id, body) = RECORDED
                .iter()
                .find(|(name, _, _)| *name == descriptor.name)
                .unwrap_or_else(|| panic!("no recorded response for {}", descriptor.name));

            let record = descriptor
                .decode(body.as_bytes())
                .unwrap_or_else(|e| panic!("{} failed to decode: {e}", descriptor.name));

            assert_eq!(record.resource_name(), descriptor.name);
            assert_eq!(record.id(), *id);
            assert_eq!(
                record.name().is_some(),
                descriptor.kind == ResourceKind::Named,
                "{} name presence",
                descriptor.name
            );
        }
        assert_eq!(RECORDED.len(), DESCRIPTORS.len());
    }

    #[test]
    fn type_and_move_keep_their_wire_names() {
        assert_eq!(Type::NAME, "type");
        assert_eq!(Move::PATH_SEGMENT, "move");
        assert_eq!(EvolutionChain::KIND, ResourceKind::Unnamed);
    }
}
