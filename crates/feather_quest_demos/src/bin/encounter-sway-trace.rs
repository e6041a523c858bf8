use feather_quest::prelude::*;
use feather_quest_demos::{describe_encounter, init_tracing};

const FRAME: f32 = 1.0 / 30.0;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = EncounterConfig::default();
    config.validate()?;

    for stability in [0.2f32, 0.5, 0.9] {
        let mut view = BinocularView::new(stability, 400.0);
        let mut encounter = FocusEncounter::new(config.clone());
        view.start();

        let mut frames = 0u32;
        while !encounter.is_complete() && frames < 600 {
            view.advance(FRAME);
            // Nudge the bird back toward the center, like a player chasing the sway.
            let offset = view.offset_from_center();
            view.apply_input(Vector2::new(offset.x * 40.0, offset.y * 40.0));
            encounter.update(view.offset_from_center(), FRAME);
            frames += 1;
        }

        let result = encounter.complete(view.offset_from_center());
        view.end();
        println!("{}", describe_encounter(stability, frames, &encounter, &result));
    }

    Ok(())
}
