use feather_quest::prelude::*;
use feather_quest_demos::{default_bird_data_path, init_tracing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(default_bird_data_path);

    info!("Loading bird catalog from {}.", path);
    let mut loader = BirdLoader::new();
    let catalog = loader.load_from_path(&path)?;

    for bird in catalog.iter() {
        println!(
            "{:<18} {:<26} {:<14} variants {} calls {}",
            bird.id,
            bird.common_name,
            bird.tier.to_string(),
            bird.variants.len(),
            bird.calls.len()
        );
    }

    let context = WorldContext::new(TimeOfDay::Dawn, Weather::PostRain, Season::Fall);
    let modifier = SpawnRuleEngine::new().evaluate_spawn_rules(Some(&context))?;
    let config = SpawnerConfig::default();
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(7);
    println!();
    println!(
        "Next spawn in {:.2}s under {:?}:",
        next_spawn_interval(&config, &modifier, &mut rng),
        modifier.pattern
    );
    for request in plan_spawn_group(&config, &modifier, context.season, &catalog, &mut rng) {
        println!(
            "  [{}/{}] {:<18} {:<12} at ({:.0}, {:.0})",
            request.index_in_group + 1,
            request.group_size,
            request.bird.id,
            request.variant.plumage_type.to_string(),
            request.position.x,
            request.position.y
        );
    }

    Ok(())
}
