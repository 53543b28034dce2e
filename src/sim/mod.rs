//! Particle simulation module
//!
//! All puzzle logic lives here. This module stays free of rendering and
//! platform code:
//! - Time quantum is passed in, never read from a clock
//! - Randomness comes from an injected `Rng`
//! - Stable iteration order (by index in the particle vector)

pub mod cluster;
pub mod forces;
pub mod integrate;
pub mod particle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use cluster::{CohortStats, clustered_flags, cohort_stats, is_solved};
pub use forces::{apply_cohesion, apply_cursor_repulsion, repel_impulse, resolve_collisions};
pub use integrate::integrate;
pub use particle::{Bounds, Particle};
pub use snapshot::{BallView, Snapshot};
pub use state::Simulation;
pub use tick::{TickInput, step_physics};
