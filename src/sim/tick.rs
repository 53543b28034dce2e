//! One simulation step
//!
//! Order matters: cursor repulsion, contacts, cohesion, then per-ball
//! integration. The win check runs afterwards in `Simulation::tick`.

use glam::DVec2;
use rand::Rng;

use super::forces::{apply_cohesion, apply_cursor_repulsion, resolve_collisions};
use super::integrate::integrate;
use super::particle::{Bounds, Particle};
use crate::consts::TICK_DT;

/// Host input for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Cursor position in play-area coordinates, `None` while the pointer is
    /// outside the play area
    pub cursor: Option<DVec2>,
    /// Time quantum scaling the per-tick forces
    pub dt: f64,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            cursor: None,
            dt: TICK_DT,
        }
    }
}

impl TickInput {
    /// Input with the cursor at `pos` and the default time quantum
    pub fn with_cursor(pos: DVec2) -> Self {
        Self {
            cursor: Some(pos),
            ..Default::default()
        }
    }
}

/// Run the force model and integrator once over all balls
pub fn step_physics<R: Rng + ?Sized>(
    particles: &mut [Particle],
    bounds: &Bounds,
    input: &TickInput,
    rng: &mut R,
) {
    apply_cursor_repulsion(particles, input.cursor, input.dt);
    resolve_collisions(particles);
    apply_cohesion(particles, input.dt);
    integrate(particles, bounds, rng, input.dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_input() {
        let input = TickInput::default();
        assert_eq!(input.cursor, None);
        assert_eq!(input.dt, TICK_DT);

        let input = TickInput::with_cursor(DVec2::new(1.0, 2.0));
        assert_eq!(input.cursor, Some(DVec2::new(1.0, 2.0)));
        assert_eq!(input.dt, TICK_DT);
    }

    #[test]
    fn test_step_is_deterministic_for_seed() {
        let bounds = Bounds::default();
        let make = || -> Vec<Particle> {
            let mut rng = Pcg32::seed_from_u64(11);
            (0..30)
                .map(|i| Particle::spawn_in_disk(&mut rng, bounds.center(), START_CLUSTER_RADIUS, i % 3))
                .collect()
        };

        let mut a = make();
        let mut b = make();
        let mut rng_a = Pcg32::seed_from_u64(5);
        let mut rng_b = Pcg32::seed_from_u64(5);
        let input = TickInput::with_cursor(bounds.center());

        for _ in 0..50 {
            step_physics(&mut a, &bounds, &input, &mut rng_a);
            step_physics(&mut b, &bounds, &input, &mut rng_b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_cursor_clears_area() {
        let bounds = Bounds::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let center = bounds.center();
        let mut balls: Vec<Particle> = (0..40)
            .map(|i| Particle::spawn_in_disk(&mut rng, center, 40.0, i % 2))
            .collect();

        let input = TickInput::with_cursor(center);
        for _ in 0..120 {
            step_physics(&mut balls, &bounds, &input, &mut rng);
        }

        let mean_dist: f64 =
            balls.iter().map(|p| p.pos.distance(center)).sum::<f64>() / balls.len() as f64;
        assert!(mean_dist > 40.0, "mean distance {mean_dist}");
    }
}
