//! Turning a [`SpawnModifier`] into concrete spawn decisions.
//!
//! Every helper takes the caller's RNG; nothing here seeds or stores one. The
//! presentation layer keeps its own timer and instantiates whatever the returned
//! [`SpawnRequest`]s describe.
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::birds::{BirdCall, BirdDefinition, PlumageVariant};
use crate::error::{Error, Result};
use crate::geometry::Vector2;
use crate::loader::BirdCatalog;
use crate::spawn::rules::{SpawnModifier, SpawnPattern};
use crate::world::Season;

/// Tuning for spawn timing and placement.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Shortest base interval between spawns, in seconds.
    pub min_interval: f32,
    /// Longest base interval between spawns, in seconds.
    pub max_interval: f32,
    /// Lower corner of the spawn area.
    pub spawn_area_min: Vector2,
    /// Upper corner of the spawn area.
    pub spawn_area_max: Vector2,
    /// Horizontal distance between birds of one group.
    pub group_spacing: f32,
    /// Maximum vertical scatter applied to grouped birds, in either direction.
    pub group_vertical_jitter: f32,
    /// Floor for the rate multiplier when stretching intervals.
    pub min_rate_multiplier: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            min_interval: 3.0,
            max_interval: 8.0,
            spawn_area_min: Vector2::ZERO,
            spawn_area_max: Vector2::new(1024.0, 600.0),
            group_spacing: 50.0,
            group_vertical_jitter: 20.0,
            min_rate_multiplier: 0.2,
        }
    }
}

impl SpawnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base interval range.
    pub fn with_interval(mut self, min_interval: f32, max_interval: f32) -> Self {
        self.min_interval = min_interval;
        self.max_interval = max_interval;
        self
    }

    /// Sets the spawn area corners.
    pub fn with_spawn_area(mut self, min: Vector2, max: Vector2) -> Self {
        self.spawn_area_min = min;
        self.spawn_area_max = max;
        self
    }

    /// Sets group spacing and vertical jitter.
    pub fn with_group_layout(mut self, spacing: f32, vertical_jitter: f32) -> Self {
        self.group_spacing = spacing;
        self.group_vertical_jitter = vertical_jitter;
        self
    }

    /// Sets the rate multiplier floor.
    pub fn with_min_rate_multiplier(mut self, min_rate_multiplier: f32) -> Self {
        self.min_rate_multiplier = min_rate_multiplier;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.min_interval < 0.0 || self.min_interval > self.max_interval {
            return Err(Error::InvalidConfig(
                "interval range must satisfy 0 <= min_interval <= max_interval".into(),
            ));
        }
        if self.min_rate_multiplier <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_rate_multiplier must be > 0".into(),
            ));
        }
        if self.spawn_area_min.x > self.spawn_area_max.x
            || self.spawn_area_min.y > self.spawn_area_max.y
        {
            return Err(Error::InvalidConfig(
                "spawn_area_min must not exceed spawn_area_max".into(),
            ));
        }
        if self.group_spacing < 0.0 || self.group_vertical_jitter < 0.0 {
            return Err(Error::InvalidConfig(
                "group layout values must be >= 0".into(),
            ));
        }

        Ok(())
    }
}

/// One bird the presentation layer should instantiate.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest<'a> {
    pub bird: &'a BirdDefinition,
    pub variant: &'a PlumageVariant,
    /// Call to play on appearance, when the species has any.
    pub call: Option<&'a BirdCall>,
    pub position: Vector2,
    pub pattern: SpawnPattern,
    pub index_in_group: u32,
    pub group_size: u32,
}

/// Generate a random float in the range [0, 1].
#[inline]
fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

fn pick_index(len: usize, rng: &mut dyn RngCore) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(((rand01(rng) * len as f32) as usize).min(len - 1))
}

/// Uniform base interval in `[min_interval, max_interval]`.
pub fn random_interval(config: &SpawnerConfig, rng: &mut dyn RngCore) -> f32 {
    config.min_interval + rand01(rng) * (config.max_interval - config.min_interval)
}

/// Seconds until the next spawn: a base interval divided by the rate multiplier,
/// with the multiplier floored at `config.min_rate_multiplier`.
pub fn next_spawn_interval(
    config: &SpawnerConfig,
    modifier: &SpawnModifier,
    rng: &mut dyn RngCore,
) -> f32 {
    let rate = modifier
        .spawn_rate_multiplier
        .max(config.min_rate_multiplier);
    random_interval(config, rng) / rate
}

/// Whether hiding birds skip this spawn: only the [`SpawnPattern::Hidden`]
/// pattern rolls, and it spawns with probability equal to its rate multiplier.
pub fn is_suppressed_by_hiding(modifier: &SpawnModifier, rng: &mut dyn RngCore) -> bool {
    modifier.pattern == SpawnPattern::Hidden && rand01(rng) > modifier.spawn_rate_multiplier
}

pub fn select_random_bird<'a>(
    catalog: &'a BirdCatalog,
    rng: &mut dyn RngCore,
) -> Option<&'a BirdDefinition> {
    let index = pick_index(catalog.len(), rng)?;
    catalog.iter().nth(index)
}

pub fn select_plumage_variant<'a>(
    bird: &'a BirdDefinition,
    rng: &mut dyn RngCore,
) -> Option<&'a PlumageVariant> {
    let index = pick_index(bird.variants.len(), rng)?;
    bird.variants.get(index)
}

/// Picks among variants typical for `season`, falling back to any variant.
pub fn select_plumage_variant_for_season<'a>(
    bird: &'a BirdDefinition,
    season: Season,
    rng: &mut dyn RngCore,
) -> Option<&'a PlumageVariant> {
    let seasonal: Vec<&PlumageVariant> = bird
        .variants_with_plumage(season.typical_plumage())
        .collect();
    match pick_index(seasonal.len(), rng) {
        Some(index) => Some(seasonal[index]),
        None => select_plumage_variant(bird, rng),
    }
}

/// Uniform position inside the configured spawn area.
pub fn random_spawn_position(config: &SpawnerConfig, rng: &mut dyn RngCore) -> Vector2 {
    let min = config.spawn_area_min;
    let max = config.spawn_area_max;
    Vector2::new(
        min.x + rand01(rng) * (max.x - min.x),
        min.y + rand01(rng) * (max.y - min.y),
    )
}

/// Builds the spawn requests for one timer tick.
///
/// Returns nothing when the catalog is empty or hiding birds skip the tick.
/// Otherwise produces up to `modifier.group_size` requests; grouped birds are
/// spread horizontally around their drawn position and scattered vertically.
pub fn plan_spawn_group<'a>(
    config: &SpawnerConfig,
    modifier: &SpawnModifier,
    season: Season,
    catalog: &'a BirdCatalog,
    rng: &mut dyn RngCore,
) -> Vec<SpawnRequest<'a>> {
    if catalog.is_empty() {
        warn!("Cannot spawn birds: catalog is empty.");
        return Vec::new();
    }

    if is_suppressed_by_hiding(modifier, rng) {
        debug!("Birds are hiding (pattern {:?}); skipping spawn.", modifier.pattern);
        return Vec::new();
    }

    let group_size = modifier.group_size.max(1);
    let mut requests = Vec::with_capacity(group_size as usize);

    for index in 0..group_size {
        let Some(bird) = select_random_bird(catalog, rng) else {
            continue;
        };
        let Some(variant) = select_plumage_variant_for_season(bird, season, rng) else {
            warn!("Bird '{}' has no plumage variants; skipping.", bird.id);
            continue;
        };

        let mut position = random_spawn_position(config, rng);
        if group_size > 1 {
            position.x += (index as f32 - group_size as f32 / 2.0) * config.group_spacing;
            position.y += rand01(rng) * 2.0 * config.group_vertical_jitter
                - config.group_vertical_jitter;
        }

        let call = pick_index(bird.calls.len(), rng).and_then(|i| bird.calls.get(i));

        requests.push(SpawnRequest {
            bird,
            variant,
            call,
            position,
            pattern: modifier.pattern,
            index_in_group: index,
            group_size,
        });
    }

    requests
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::birds::{AssetReference, CallType, DifficultyTier, Gender, PlumageType};

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    fn variant(plumage_type: PlumageType, gender: Gender) -> PlumageVariant {
        PlumageVariant {
            plumage_type,
            gender,
            sprite_path: AssetReference::new(format!("res://{plumage_type:?}_{gender:?}.png")),
            difficulty_rating: DifficultyTier::Beginner,
        }
    }

    fn bird(id: &str, variants: Vec<PlumageVariant>) -> BirdDefinition {
        BirdDefinition {
            id: id.into(),
            common_name: id.to_uppercase(),
            scientific_name: String::new(),
            tier: DifficultyTier::Beginner,
            field_marks: Vec::new(),
            variants,
            calls: vec![BirdCall {
                call_type: CallType::Song,
                audio_path: AssetReference::new(format!("res://{id}.mp3")),
                spectrogram_path: AssetReference::default(),
            }],
        }
    }

    fn catalog() -> BirdCatalog {
        BirdCatalog::from_birds([
            bird(
                "bluebird",
                vec![
                    variant(PlumageType::Breeding, Gender::Male),
                    variant(PlumageType::Breeding, Gender::Female),
                ],
            ),
            bird(
                "robin",
                vec![
                    variant(PlumageType::Breeding, Gender::Male),
                    variant(PlumageType::NonBreeding, Gender::Male),
                ],
            ),
        ])
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SpawnerConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let inverted = SpawnerConfig::new().with_interval(5.0, 1.0);
        assert!(matches!(inverted.validate(), Err(Error::InvalidConfig(_))));
        let zero_rate = SpawnerConfig::new().with_min_rate_multiplier(0.0);
        assert!(zero_rate.validate().is_err());
        let area = SpawnerConfig::new().with_spawn_area(Vector2::new(10.0, 0.0), Vector2::ZERO);
        assert!(area.validate().is_err());
        let layout = SpawnerConfig::new().with_group_layout(-1.0, 0.0);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn random_interval_stays_in_range() {
        let config = SpawnerConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let interval = random_interval(&config, &mut rng);
            assert!((config.min_interval..=config.max_interval).contains(&interval));
        }
    }

    #[test]
    fn interval_is_divided_by_rate() {
        let config = SpawnerConfig::default();
        let mut rng = FixedRng { value: 0 };
        let swarm = SpawnModifier::new(SpawnPattern::Swarm, 2.0, 5);
        assert_eq!(next_spawn_interval(&config, &swarm, &mut rng), 1.5);
        let hidden = SpawnModifier::new(SpawnPattern::Hidden, 0.2, 1);
        assert!((next_spawn_interval(&config, &hidden, &mut rng) - 15.0).abs() < 1e-4);
    }

    #[test]
    fn tiny_rates_are_floored() {
        let config = SpawnerConfig::default();
        let crawl = SpawnModifier::new(SpawnPattern::Hidden, 0.01, 1);
        let floor = SpawnModifier::new(SpawnPattern::Hidden, 0.2, 1);
        assert_eq!(
            next_spawn_interval(&config, &crawl, &mut FixedRng { value: 0 }),
            next_spawn_interval(&config, &floor, &mut FixedRng { value: 0 })
        );
    }

    #[test]
    fn only_hidden_pattern_can_be_suppressed() {
        let high_roll = || FixedRng { value: u32::MAX };
        let hidden = SpawnModifier::new(SpawnPattern::Hidden, 0.3, 1);
        assert!(is_suppressed_by_hiding(&hidden, &mut high_roll()));
        assert!(!is_suppressed_by_hiding(&hidden, &mut FixedRng { value: 0 }));
        let solitary = SpawnModifier::new(SpawnPattern::Solitary, 0.1, 1);
        assert!(!is_suppressed_by_hiding(&solitary, &mut high_roll()));
    }

    #[test]
    fn selection_returns_none_for_empty_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_random_bird(&BirdCatalog::default(), &mut rng).is_none());
        let bare = bird("ghost", Vec::new());
        assert!(select_plumage_variant(&bare, &mut rng).is_none());
        assert!(select_plumage_variant_for_season(&bare, Season::Fall, &mut rng).is_none());
    }

    #[test]
    fn random_selection_covers_catalog() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(12345);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..50 {
            let bird = select_random_bird(&catalog, &mut rng).unwrap();
            assert!(catalog.contains(&bird.id));
            seen.insert(bird.id.clone());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn seasonal_selection_prefers_typical_plumage() {
        let catalog = catalog();
        let robin = catalog.get("robin").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            let winter = select_plumage_variant_for_season(robin, Season::Winter, &mut rng);
            assert_eq!(winter.unwrap().plumage_type, PlumageType::NonBreeding);
            let spring = select_plumage_variant_for_season(robin, Season::Spring, &mut rng);
            assert_eq!(spring.unwrap().plumage_type, PlumageType::Breeding);
        }
    }

    #[test]
    fn seasonal_selection_falls_back_to_any_variant() {
        let catalog = catalog();
        let bluebird = catalog.get("bluebird").unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let picked = select_plumage_variant_for_season(bluebird, Season::Winter, &mut rng);
        assert_eq!(picked.unwrap().plumage_type, PlumageType::Breeding);
    }

    #[test]
    fn spawn_positions_stay_in_area() {
        let config = SpawnerConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let p = random_spawn_position(&config, &mut rng);
            assert!((0.0..=1024.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
        }
    }

    #[test]
    fn group_plan_matches_modifier() {
        let catalog = catalog();
        let config = SpawnerConfig::default();
        let swarm = SpawnModifier::new(SpawnPattern::Swarm, 2.0, 5);
        let mut rng = StdRng::seed_from_u64(42);
        let plan = plan_spawn_group(&config, &swarm, Season::Spring, &catalog, &mut rng);
        assert_eq!(plan.len(), 5);
        for (i, request) in plan.iter().enumerate() {
            assert_eq!(request.index_in_group, i as u32);
            assert_eq!(request.group_size, 5);
            assert_eq!(request.pattern, SpawnPattern::Swarm);
            assert_eq!(request.variant.plumage_type, PlumageType::Breeding);
            assert!(request.call.is_some());
        }
    }

    #[test]
    fn grouped_birds_are_spread_horizontally() {
        let catalog = catalog();
        let config = SpawnerConfig::default();
        let flock = SpawnModifier::new(SpawnPattern::Swarm, 2.0, 5);
        let mut rng = FixedRng { value: 0 };
        let plan = plan_spawn_group(&config, &flock, Season::Spring, &catalog, &mut rng);
        let xs: Vec<f32> = plan.iter().map(|r| r.position.x).collect();
        assert_eq!(xs, vec![-125.0, -75.0, -25.0, 25.0, 75.0]);
        assert!(plan.iter().all(|r| r.position.y == -20.0));
    }

    #[test]
    fn solitary_birds_are_not_offset() {
        let catalog = catalog();
        let config = SpawnerConfig::default();
        let mut rng = FixedRng { value: 0 };
        let plan =
            plan_spawn_group(&config, &SpawnModifier::default(), Season::Summer, &catalog, &mut rng);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].position, Vector2::ZERO);
    }

    #[test]
    fn empty_catalog_or_hiding_produces_no_requests() {
        let config = SpawnerConfig::default();
        let mut rng = FixedRng { value: u32::MAX };
        let modifier = SpawnModifier::default();
        assert!(
            plan_spawn_group(&config, &modifier, Season::Fall, &BirdCatalog::default(), &mut rng)
                .is_empty()
        );
        let hidden = SpawnModifier::new(SpawnPattern::Hidden, 0.2, 1);
        assert!(plan_spawn_group(&config, &hidden, Season::Fall, &catalog(), &mut rng).is_empty());
    }
}
