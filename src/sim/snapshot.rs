//! Read-only view of the simulation for renderers
//!
//! Serialized to JSON and handed to the browser page once per frame.

use serde::Serialize;

use super::cluster::clustered_flags;
use super::particle::{Bounds, Particle};
use crate::palette::cohort_colors;

/// What the renderer needs to draw one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f64,
    pub y: f64,
    pub color_index: usize,
    /// Enough same-color neighbors nearby to be marked as grouped
    pub clustered: bool,
}

/// Everything a frame shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<BallView>,
    /// CSS color per color index
    pub colors: Vec<String>,
    pub solved: bool,
    /// Timer value to display (frozen once solved)
    pub elapsed_seconds: u64,
    pub solve_time: Option<u64>,
}

impl Snapshot {
    pub fn capture(
        particles: &[Particle],
        bounds: Bounds,
        color_count: usize,
        solved: bool,
        elapsed_seconds: u64,
        solve_time: Option<u64>,
    ) -> Self {
        let views = particles
            .iter()
            .zip(clustered_flags(particles))
            .map(|(p, clustered)| BallView {
                x: p.pos.x,
                y: p.pos.y,
                color_index: p.color_index,
                clustered,
            })
            .collect();

        Self {
            width: bounds.width,
            height: bounds.height,
            particles: views,
            colors: cohort_colors(color_count),
            solved,
            elapsed_seconds,
            solve_time,
        }
    }
}
