//! Binocular encounter state: reticle offset under sway and player correction,
//! focus accumulation and the final photo score.
//!
//! The presentation layer feeds frame deltas and input motion in and renders the
//! positions that come back; nothing here touches an engine type.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::focus::{calculate_photo_quality, calculate_sway, DEFAULT_SWAY_AMPLITUDE};
use crate::geometry::Vector2;

/// Tuning for focus accumulation and photo scoring.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Focus points needed to take the photo.
    pub focus_requirement: f32,
    /// Focus points gained per second while perfectly centered.
    pub focus_rate: f32,
    /// Normalized distance from center still scored as perfect.
    pub center_tolerance: f32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            focus_requirement: 100.0,
            focus_rate: 50.0,
            center_tolerance: 0.1,
        }
    }
}

impl EncounterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_focus_requirement(mut self, focus_requirement: f32) -> Self {
        self.focus_requirement = focus_requirement;
        self
    }

    pub fn with_focus_rate(mut self, focus_rate: f32) -> Self {
        self.focus_rate = focus_rate;
        self
    }

    pub fn with_center_tolerance(mut self, center_tolerance: f32) -> Self {
        self.center_tolerance = center_tolerance;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.focus_requirement <= 0.0 {
            return Err(Error::InvalidConfig("focus_requirement must be > 0".into()));
        }
        if self.focus_rate <= 0.0 {
            return Err(Error::InvalidConfig("focus_rate must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.center_tolerance) {
            return Err(Error::InvalidConfig(
                "center_tolerance must be within [0, 1]".into(),
            ));
        }

        Ok(())
    }
}

/// Award tier for a finished photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhotoMedal {
    Unranked,
    Bronze,
    Silver,
    Gold,
}

impl PhotoMedal {
    pub const GOLD_THRESHOLD: f32 = 0.85;
    pub const SILVER_THRESHOLD: f32 = 0.60;
    pub const BRONZE_THRESHOLD: f32 = 0.35;

    pub fn from_quality(quality: f32) -> Self {
        if quality >= Self::GOLD_THRESHOLD {
            PhotoMedal::Gold
        } else if quality >= Self::SILVER_THRESHOLD {
            PhotoMedal::Silver
        } else if quality >= Self::BRONZE_THRESHOLD {
            PhotoMedal::Bronze
        } else {
            PhotoMedal::Unranked
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoResult {
    /// Score in `[0, 1]`.
    pub quality: f32,
    pub medal: PhotoMedal,
}

/// Reticle view during an encounter.
///
/// The bird drifts with [`calculate_sway`] scaled to the viewport; player input
/// accumulates an opposing offset, clamped to twice the sway amplitude.
#[derive(Debug, Clone, PartialEq)]
pub struct BinocularView {
    pub stability: f32,
    pub sway_amplitude: f32,
    pub mouse_sensitivity: f32,
    /// Side length of the viewing area in pixels.
    pub viewport_size: f32,
    elapsed: f32,
    input_offset: Vector2,
    active: bool,
}

impl Default for BinocularView {
    fn default() -> Self {
        Self {
            stability: 0.5,
            sway_amplitude: DEFAULT_SWAY_AMPLITUDE,
            mouse_sensitivity: 1.0,
            viewport_size: 400.0,
            elapsed: 0.0,
            input_offset: Vector2::ZERO,
            active: false,
        }
    }
}

impl BinocularView {
    pub fn new(stability: f32, viewport_size: f32) -> Self {
        Self {
            stability,
            viewport_size,
            ..Default::default()
        }
    }

    pub fn with_sway_amplitude(mut self, sway_amplitude: f32) -> Self {
        self.sway_amplitude = sway_amplitude;
        self
    }

    pub fn with_mouse_sensitivity(mut self, mouse_sensitivity: f32) -> Self {
        self.mouse_sensitivity = mouse_sensitivity;
        self
    }

    /// Begins an encounter with a fresh clock and no input offset.
    pub fn start(&mut self) {
        self.active = true;
        self.elapsed = 0.0;
        self.input_offset = Vector2::ZERO;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn input_offset(&self) -> Vector2 {
        self.input_offset
    }

    /// Advances the sway clock. Ignored while inactive.
    pub fn advance(&mut self, delta: f32) {
        if self.active {
            self.elapsed += delta;
        }
    }

    /// Applies relative pointer or drag motion. Ignored while inactive.
    pub fn apply_input(&mut self, motion: Vector2) {
        if !self.active {
            return;
        }

        // Negative amplitudes mirror the sway; the correction range stays symmetric.
        let max_offset = (self.viewport_size * self.sway_amplitude * 2.0).abs();
        let max_offset = if max_offset.is_nan() { 0.0 } else { max_offset };
        let x = self.input_offset.x + motion.x * self.mouse_sensitivity;
        let y = self.input_offset.y + motion.y * self.mouse_sensitivity;
        self.input_offset = Vector2::new(
            x.clamp(-max_offset, max_offset),
            y.clamp(-max_offset, max_offset),
        );
    }

    /// Bird position relative to the reticle, in pixels.
    pub fn bird_position(&self) -> Vector2 {
        let sway = calculate_sway(self.elapsed, self.stability, self.sway_amplitude);
        Vector2::new(
            sway.x * self.viewport_size - self.input_offset.x,
            sway.y * self.viewport_size - self.input_offset.y,
        )
    }

    /// Bird position normalized by the viewport; `(0, 0)` is perfectly centered.
    pub fn offset_from_center(&self) -> Vector2 {
        if self.viewport_size <= 0.0 {
            return Vector2::ZERO;
        }
        let p = self.bird_position();
        Vector2::new(p.x / self.viewport_size, p.y / self.viewport_size)
    }
}

/// Tracks focus and stability over one encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusEncounter {
    config: EncounterConfig,
    focus: f32,
    stability_sum: f32,
    samples: u32,
}

impl FocusEncounter {
    pub fn new(config: EncounterConfig) -> Self {
        Self {
            config,
            focus: 0.0,
            stability_sum: 0.0,
            samples: 0,
        }
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.focus = 0.0;
        self.stability_sum = 0.0;
        self.samples = 0;
    }

    /// Records one frame with the bird at `offset` (normalized) and returns progress.
    ///
    /// Focus builds faster the closer the bird is to center; each frame also
    /// contributes `1 - distance` to the stability average.
    pub fn update(&mut self, offset: Vector2, delta: f32) -> f32 {
        let distance = offset.magnitude().clamp(0.0, 1.0);
        let closeness = 1.0 - distance;

        self.focus += (closeness * delta * self.config.focus_rate).max(0.0);
        self.stability_sum += closeness;
        self.samples += 1;

        self.progress()
    }

    pub fn focus(&self) -> f32 {
        self.focus
    }

    /// Fraction of the focus requirement reached, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.config.focus_requirement <= 0.0 {
            return 1.0;
        }
        (self.focus / self.config.focus_requirement).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.focus >= self.config.focus_requirement
    }

    /// Mean stability over recorded frames, or `0` before any frame.
    pub fn average_stability(&self) -> f32 {
        if self.samples == 0 {
            return 0.0;
        }
        self.stability_sum / self.samples as f32
    }

    /// Scores the photo taken with the bird at `final_position`.
    pub fn complete(&self, final_position: Vector2) -> PhotoResult {
        let quality = calculate_photo_quality(
            final_position,
            self.average_stability(),
            self.config.center_tolerance,
        );
        let medal = PhotoMedal::from_quality(quality);
        debug!(
            "Encounter finished after {} frames: quality {:.2}, medal {:?}.",
            self.samples, quality, medal
        );
        PhotoResult { quality, medal }
    }
}
