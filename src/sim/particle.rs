//! Ball entity and play-area bounds

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::consts::*;

/// A ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Random-walk angle (radians) the drift pushes along
    pub heading: f64,
    /// Cohort this ball belongs to, fixed at creation
    pub color_index: usize,
}

impl Particle {
    /// A ball at rest
    pub fn new(pos: DVec2, heading: f64, color_index: usize) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            heading,
            color_index,
        }
    }

    /// Spawn a ball uniformly inside the disk of `radius` around `center`
    pub fn spawn_in_disk<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        radius: f64,
        color_index: usize,
    ) -> Self {
        let angle = rng.random::<f64>() * TAU;
        // sqrt keeps the area density uniform
        let r = rng.random::<f64>().sqrt() * radius;
        let pos = center + DVec2::new(angle.cos(), angle.sin()) * r;
        let heading = rng.random::<f64>() * TAU;
        Self::new(pos, heading, color_index)
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}

/// Rectangular play area with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Lowest coordinate a ball center may take on each axis
    #[inline]
    pub fn min_pos(&self) -> DVec2 {
        DVec2::splat(BALL_RADIUS)
    }

    /// Highest coordinate a ball center may take on each axis
    #[inline]
    pub fn max_pos(&self) -> DVec2 {
        DVec2::new(self.width - BALL_RADIUS, self.height - BALL_RADIUS)
    }

    /// Whether a ball centered at `pos` lies fully inside the walls
    pub fn contains_ball(&self, pos: DVec2) -> bool {
        let lo = self.min_pos();
        let hi = self.max_pos();
        pos.x >= lo.x && pos.x <= hi.x && pos.y >= lo.y && pos.y <= hi.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
