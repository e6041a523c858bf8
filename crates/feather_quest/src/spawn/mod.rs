//! Spawn behavior driven by world conditions.
//!
//! [`rules`] maps a [`crate::world::WorldContext`] to a [`rules::SpawnModifier`];
//! [`scheduler`] turns a modifier into concrete intervals and group requests using
//! a caller-supplied RNG.
pub mod rules;
pub mod scheduler;

pub use rules::{spawn_modifier_for, SpawnModifier, SpawnPattern, SpawnRuleEngine};
pub use scheduler::{SpawnRequest, SpawnerConfig};
