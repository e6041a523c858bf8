use feather_quest::prelude::*;
use feather_quest_demos::{describe_modifier, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let engine = SpawnRuleEngine::new();

    print!("{:<14}", "weather");
    for time in TimeOfDay::ALL {
        print!(" | {:<24}", time.to_string());
    }
    println!();

    for weather in Weather::ALL {
        print!("{:<14}", weather.to_string());
        for time in TimeOfDay::ALL {
            let context = WorldContext::new(time, weather, Season::Spring);
            let modifier = engine.evaluate_spawn_rules(Some(&context))?;
            print!(" | {:<24}", describe_modifier(&modifier));
        }
        println!();
    }

    println!();
    println!("{:<14} {:>10} {:>10}", "conditions", "visibility", "difficulty");
    for weather in Weather::ALL {
        for time in [TimeOfDay::Dawn, TimeOfDay::Midday, TimeOfDay::Night] {
            let factors = WorldContext::new(time, weather, Season::Spring).recalculate_factors();
            println!(
                "{:<14} {:>10.3} {:>10.3}",
                format!("{weather}/{time}"),
                factors.visibility,
                factors.difficulty_multiplier
            );
        }
    }

    Ok(())
}
