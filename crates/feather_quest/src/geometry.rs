//! Engine-agnostic 2D vector used for reticle offsets and spawn positions.
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Immutable 2D vector with single-precision components.
///
/// Converts to and from [`glam::Vec2`] and [`mint::Vector2`] so callers can hand
/// engine vectors across the boundary without depending on this type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn magnitude(self) -> f32 {
        Vec2::from(self).length()
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<mint::Vector2<f32>> for Vector2 {
    fn from(v: mint::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for mint::Vector2<f32> {
    fn from(v: Vector2) -> Self {
        mint::Vector2 { x: v.x, y: v.y }
    }
}
