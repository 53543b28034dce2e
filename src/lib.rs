//! Hue Herd - A color-sorting particle puzzle
//!
//! Core modules:
//! - `sim`: Particle physics and cluster win detection
//! - `platform`: Clock and pointer abstractions for browser/native hosts
//! - `settings`: Player-chosen puzzle size
//! - `palette`: Cohort colors for the renderer
//! - `ui`: Win overlay hit-testing

pub mod palette;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

use glam::DVec2;

/// Physics and puzzle constants
pub mod consts {
    /// Per-tick time quantum the force constants are tuned for (~60 Hz)
    pub const TICK_DT: f64 = 0.016;

    /// Ball geometry
    pub const BALL_RADIUS: f64 = 8.0;
    /// Extra gap kept between touching balls
    pub const SEPARATION_PAD: f64 = 6.0;

    /// Velocity damping applied every tick (multiplicative)
    pub const FRICTION: f64 = 0.98;
    /// Wall bounce factor (velocity component is negated and scaled)
    pub const BOUNCE: f64 = 0.9;
    pub const MAX_SPEED: f64 = 2.5;
    /// Floor that keeps every ball moving
    pub const MIN_SPEED: f64 = 0.08;

    /// Cursor pushes balls away inside this radius
    pub const CURSOR_REPEL_RADIUS: f64 = 110.0;
    pub const REPEL_STRENGTH: f64 = 220.0;

    /// Fraction of approach speed returned on ball-ball contact
    pub const RESTITUTION: f64 = 0.85;

    /// Cohesion (pull toward local neighbor centroid, any color)
    pub const COHESION_RADIUS: f64 = 120.0;
    pub const COHESION_STRENGTH: f64 = 45.0;
    pub const COHESION_MIN_NEIGHBORS: usize = 2;
    pub const COHESION_SATURATE_AT: f64 = 60.0;
    pub const COHESION_IMPULSE_CAP: f64 = 0.06;

    /// Random velocity jitter
    pub const BROWNIAN: f64 = 0.4;
    /// Wandering drift along each ball's heading
    pub const DRIFT_ACCEL: f64 = 0.35;
    pub const DRIFT_TURN: f64 = 0.6;

    /// Balls spawn inside a disk of this radius around the play area center
    pub const START_CLUSTER_RADIUS: f64 = 130.0;

    /// Win thresholds (distance to cohort centroid)
    pub const CLUSTER_AVG_DIST_MAX: f64 = 28.0;
    pub const CLUSTER_MAX_DIST_MAX: f64 = 52.0;

    /// A ball is highlighted once this many same-color balls are within reach
    pub const CLUSTER_NEIGHBOR_RADIUS: f64 = CLUSTER_MAX_DIST_MAX;
    pub const CLUSTER_NEIGHBOR_MIN: usize = 2;

    /// Settings limits
    pub const MIN_COLORS: usize = 1;
    pub const MAX_COLORS: usize = 12;
    pub const MIN_BALLS_PER_COLOR: usize = 1;
    pub const MAX_BALLS_PER_COLOR: usize = 60;

    /// Squared distance below which two points are treated as coincident
    pub const COINCIDENT_EPSILON_SQ: f64 = 0.0001;
}

/// Unit vector pointing along `theta` (radians)
#[inline]
pub fn heading_vector(theta: f64) -> DVec2 {
    DVec2::new(theta.cos(), theta.sin())
}

/// Minimum center-to-center distance two balls are allowed to keep
#[inline]
pub fn contact_distance() -> f64 {
    2.0 * consts::BALL_RADIUS + consts::SEPARATION_PAD
}
