#![forbid(unsafe_code)]
//! feather_quest: engine-agnostic gameplay logic for a bird-watching game.
//!
//! Modules:
//! - geometry: the small 2D vector passed across the engine boundary
//! - focus: binocular sway and photo quality scoring
//! - encounter: per-frame focus tracking, reticle offset and medal tiers
//! - world: time of day, weather, season and the visibility/difficulty they imply
//! - spawn: weather/time rule tables and spawn scheduling helpers
//! - birds: species records (plumage variants, calls, asset references)
//! - loader: JSON bird catalog loading and lookup
//!
//! Nothing here owns a random source; functions that need randomness take an RNG
//! from the caller.

/// Implements case-insensitive `FromStr`, `TryFrom<String>` and `Display` for a
/// fieldless enum exposing an `ALL` constant.
macro_rules! impl_case_insensitive_parse {
    ($ty:ident, $label:literal) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::Error;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                let value = value.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| format!("{v:?}").eq_ignore_ascii_case(value))
                    .ok_or_else(|| {
                        $crate::error::Error::InvalidArgument(format!(
                            "unknown {} '{}'",
                            $label, value
                        ))
                    })
            }
        }

        impl ::std::convert::TryFrom<String> for $ty {
            type Error = $crate::error::Error;

            fn try_from(value: String) -> ::std::result::Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

pub mod birds;
pub mod encounter;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod loader;
pub mod spawn;
pub mod world;

/// Convenient re-exports for common types. Import with `use feather_quest::prelude::*;`.
pub mod prelude {
    pub use crate::birds::{
        AssetReference, BirdCall, BirdDefinition, CallType, DifficultyTier, Gender,
        PlumageType, PlumageVariant,
    };
    pub use crate::encounter::{
        BinocularView, EncounterConfig, FocusEncounter, PhotoMedal, PhotoResult,
    };
    pub use crate::error::{Error, Result};
    pub use crate::focus::{calculate_photo_quality, calculate_sway, DEFAULT_SWAY_AMPLITUDE};
    pub use crate::geometry::Vector2;
    pub use crate::loader::{BirdCatalog, BirdLoader};
    pub use crate::spawn::rules::{spawn_modifier_for, SpawnModifier, SpawnPattern, SpawnRuleEngine};
    pub use crate::spawn::scheduler::{
        next_spawn_interval, plan_spawn_group, select_plumage_variant,
        select_plumage_variant_for_season, select_random_bird, SpawnRequest, SpawnerConfig,
    };
    pub use crate::world::{EnvironmentFactors, Season, TimeOfDay, Weather, WorldContext};
}
