//! Per-frame twinkle animation: scrolls the star noise texture sideways.

use std::time::Duration;

use serde::Serialize;

use crate::material::Material;

/// Frame rate the per-frame step is defined against, for time-based advance.
pub const REFERENCE_FPS: f64 = 60.0;

/// Owns the noise texture's horizontal offset. The host calls [`tick`] (or
/// [`advance`]) once per rendered frame, after scene update and before draw,
/// then [`apply`] to push the offset into the material.
///
/// [`tick`]: TwinkleAnimator::tick
/// [`advance`]: TwinkleAnimator::advance
/// [`apply`]: TwinkleAnimator::apply
#[derive(Debug, Clone, Serialize)]
pub struct TwinkleAnimator {
    step: f64,
    // Kept in [0, 1): the texture wraps.
    u_offset: f64,
    frames: u64,
}

impl TwinkleAnimator {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            u_offset: 0.0,
            frames: 0,
        }
    }

    pub fn u_offset(&self) -> f64 {
        self.u_offset
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance by exactly one frame.
    pub fn tick(&mut self) {
        self.shift(self.step);
        self.frames += 1;
    }

    /// Advance by elapsed time, at `step` per frame of [`REFERENCE_FPS`].
    pub fn advance(&mut self, delta: Duration) {
        self.shift(self.step * delta.as_secs_f64() * REFERENCE_FPS);
        self.frames += 1;
    }

    fn shift(&mut self, amount: f64) {
        self.u_offset = (self.u_offset + amount).rem_euclid(1.0);
    }

    /// Write the current offset into the material's emissive texture.
    pub fn apply(&self, material: &mut Material) {
        if let Some(texture) = material.emissive_texture.as_mut() {
            texture.u_offset = self.u_offset;
        }
    }
}
