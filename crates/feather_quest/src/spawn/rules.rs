//! Priority-ordered spawn rules.
//!
//! Weather rules are checked first and short-circuit time-of-day rules entirely;
//! the two never blend. When neither matches, the default modifier applies.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::world::{TimeOfDay, Weather, WorldContext};

/// How birds appear in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpawnPattern {
    /// Single bird spawns.
    #[default]
    Solitary,
    /// Small group of 2-4 birds.
    Flock,
    /// Large group of 5 or more birds.
    Swarm,
    /// Birds are sheltering and rarely appear.
    Hidden,
}

/// Spawn adjustments produced by rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnModifier {
    pub pattern: SpawnPattern,
    /// Rate multiplier, always `> 0`. `2.0` spawns twice as often.
    pub spawn_rate_multiplier: f32,
    /// Birds per spawn, always `>= 1`.
    pub group_size: u32,
}

impl SpawnModifier {
    pub const fn new(pattern: SpawnPattern, spawn_rate_multiplier: f32, group_size: u32) -> Self {
        Self {
            pattern,
            spawn_rate_multiplier,
            group_size,
        }
    }
}

impl Default for SpawnModifier {
    fn default() -> Self {
        Self::new(SpawnPattern::Solitary, 1.0, 1)
    }
}

fn weather_rule(weather: Weather) -> Option<SpawnModifier> {
    use SpawnPattern::*;

    match weather {
        // Worms surface; robins and thrushes swarm.
        Weather::PostRain => Some(SpawnModifier::new(Swarm, 2.0, 5)),
        Weather::HeavyRain => Some(SpawnModifier::new(Hidden, 0.2, 1)),
        Weather::LightRain => Some(SpawnModifier::new(Solitary, 0.5, 1)),
        Weather::Fog => Some(SpawnModifier::new(Solitary, 0.4, 1)),
        Weather::Snow => Some(SpawnModifier::new(Solitary, 0.6, 1)),
        Weather::Windy => Some(SpawnModifier::new(Solitary, 0.7, 1)),
        Weather::Clear | Weather::PartlyCloudy | Weather::Overcast => None,
    }
}

fn time_of_day_rule(time_of_day: TimeOfDay) -> Option<SpawnModifier> {
    use SpawnPattern::*;

    match time_of_day {
        TimeOfDay::Dawn | TimeOfDay::Morning => Some(SpawnModifier::new(Flock, 1.5, 3)),
        TimeOfDay::Midday => Some(SpawnModifier::new(Solitary, 0.5, 1)),
        TimeOfDay::Dusk => Some(SpawnModifier::new(Flock, 1.3, 2)),
        // Owls and nightjars only.
        TimeOfDay::Night => Some(SpawnModifier::new(Hidden, 0.3, 1)),
        TimeOfDay::Afternoon => None,
    }
}

/// Evaluates the rule tables for `context`. Season is not consulted.
pub fn spawn_modifier_for(context: &WorldContext) -> SpawnModifier {
    weather_rule(context.weather)
        .or_else(|| time_of_day_rule(context.time_of_day))
        .unwrap_or_default()
}

/// Stateless rule evaluator handed to spawners.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnRuleEngine;

impl SpawnRuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Returns the modifier for `context`, or [`Error::InvalidArgument`] when no
    /// context is available.
    pub fn evaluate_spawn_rules(&self, context: Option<&WorldContext>) -> Result<SpawnModifier> {
        let context =
            context.ok_or_else(|| Error::InvalidArgument("world context is required".into()))?;
        Ok(spawn_modifier_for(context))
    }
}
