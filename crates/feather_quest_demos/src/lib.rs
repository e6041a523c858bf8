#![forbid(unsafe_code)]

use feather_quest::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when demos are composed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Path of the bundled bird fixture, used when no path argument is given.
pub fn default_bird_data_path() -> String {
    format!(
        "{}/../feather_quest/tests/data/birds.json",
        env!("CARGO_MANIFEST_DIR")
    )
}

/// Formats a modifier as a fixed-width table cell.
pub fn describe_modifier(modifier: &SpawnModifier) -> String {
    format!(
        "{:<9} x{:<4.1} group {}",
        format!("{:?}", modifier.pattern),
        modifier.spawn_rate_multiplier,
        modifier.group_size
    )
}

/// One summary line for a finished encounter.
pub fn describe_encounter(
    view_stability: f32,
    frames: u32,
    encounter: &FocusEncounter,
    result: &PhotoResult,
) -> String {
    format!(
        "view stability {view_stability:.1}: {frames:>3} frames, avg stability {:.2}, quality {:.3} -> {:?}",
        encounter.average_stability(),
        result.quality,
        result.medal
    )
}
