//! Binocular sway and photo quality calculations.
//!
//! Both functions are pure: identical inputs always produce identical outputs and
//! no state is kept between calls. Out-of-range stability and tolerance values are
//! clamped to `[0, 1]` rather than rejected, since they usually come straight from
//! noisy input devices.
use std::f32::consts::SQRT_2;

use crate::geometry::Vector2;

/// Sway amplitude used when the caller has no tuning of its own.
pub const DEFAULT_SWAY_AMPLITUDE: f32 = 0.2;

/// Horizontal oscillation frequency in radians per second.
pub const SWAY_FREQUENCY_X: f32 = 1.5;
/// Vertical oscillation frequency. Differs from X so the reticle never traces a circle.
pub const SWAY_FREQUENCY_Y: f32 = 2.0;

/// Largest distance from the center of the unit square to one of its corners.
const MAX_CENTER_DISTANCE: f32 = SQRT_2;

/// Computes the reticle sway offset after `elapsed_time` seconds.
///
/// `stability` is clamped to `[0, 1]`; `sway_amplitude` is used as given. The
/// offset is exactly zero at full stability and at `elapsed_time == 0`.
pub fn calculate_sway(elapsed_time: f32, stability: f32, sway_amplitude: f32) -> Vector2 {
    let instability = 1.0 - stability.clamp(0.0, 1.0);
    let scale = sway_amplitude * instability;

    Vector2::new(
        (elapsed_time * SWAY_FREQUENCY_X).sin() * scale,
        (elapsed_time * SWAY_FREQUENCY_Y).sin() * scale,
    )
}

/// Scores a photo from the final reticle offset and the average stability.
///
/// The offset is normalized against the unit-square corner distance, reduced by
/// `center_tolerance` (never below zero) and scaled by stability. The result is
/// always in `[0, 1]` and equals `stability_avg` for a perfectly centered shot.
pub fn calculate_photo_quality(
    final_position: Vector2,
    stability_avg: f32,
    center_tolerance: f32,
) -> f32 {
    let stability = stability_avg.clamp(0.0, 1.0);
    let tolerance = center_tolerance.clamp(0.0, 1.0);

    let normalized_distance = final_position.magnitude() / MAX_CENTER_DISTANCE;
    let adjusted_distance = (normalized_distance - tolerance).max(0.0);

    ((1.0 - adjusted_distance) * stability).clamp(0.0, 1.0)
}
