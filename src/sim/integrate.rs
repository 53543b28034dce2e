//! Per-ball motion update: damping, wandering drift, noise, speed limits,
//! position step and wall bounces

use glam::DVec2;
use rand::Rng;

use super::particle::{Bounds, Particle};
use crate::consts::*;
use crate::heading_vector;

/// Uniform draw in [-0.5, 0.5)
#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>() - 0.5
}

/// Clamp a ball against the four walls, reflecting and damping the velocity
/// component that hit. Returns true if any wall was touched.
pub fn reflect_off_walls(p: &mut Particle, bounds: &Bounds) -> bool {
    let lo = bounds.min_pos();
    let hi = bounds.max_pos();
    let mut hit = false;

    if p.pos.x < lo.x {
        p.pos.x = lo.x;
        p.vel.x *= -BOUNCE;
        hit = true;
    }
    if p.pos.x > hi.x {
        p.pos.x = hi.x;
        p.vel.x *= -BOUNCE;
        hit = true;
    }
    if p.pos.y < lo.y {
        p.pos.y = lo.y;
        p.vel.y *= -BOUNCE;
        hit = true;
    }
    if p.pos.y > hi.y {
        p.pos.y = hi.y;
        p.vel.y *= -BOUNCE;
        hit = true;
    }

    hit
}

/// Keep speed within [MIN_SPEED, MAX_SPEED]
///
/// A ball that has nearly stopped is relaunched at `MIN_SPEED` along its
/// heading rather than its (possibly degenerate) velocity direction.
pub fn clamp_speed(p: &mut Particle) {
    if p.speed() < MIN_SPEED {
        p.vel = heading_vector(p.heading) * MIN_SPEED;
    }

    let speed = p.speed();
    if speed > MAX_SPEED {
        p.vel = p.vel / speed * MAX_SPEED;
    }
}

/// Advance one ball by one tick
pub fn integrate_particle<R: Rng + ?Sized>(p: &mut Particle, bounds: &Bounds, rng: &mut R, dt: f64) {
    p.vel *= FRICTION;

    p.vel += heading_vector(p.heading) * DRIFT_ACCEL * dt;
    p.heading += centered(rng) * DRIFT_TURN * dt;

    let jitter = DVec2::new(centered(rng), centered(rng));
    p.vel += jitter * BROWNIAN * dt;

    clamp_speed(p);

    // Positions advance one rendered frame per tick
    p.pos += p.vel;

    reflect_off_walls(p, bounds);
}

/// Advance every ball by one tick, in index order
pub fn integrate<R: Rng + ?Sized>(particles: &mut [Particle], bounds: &Bounds, rng: &mut R, dt: f64) {
    for p in particles.iter_mut() {
        integrate_particle(p, bounds, rng, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reflect_left_wall() {
        let bounds = Bounds::new(200.0, 200.0);
        let mut p = Particle::new(DVec2::new(3.0, 100.0), 0.0, 0);
        p.vel = DVec2::new(-2.0, 1.0);

        assert!(reflect_off_walls(&mut p, &bounds));
        assert_eq!(p.pos.x, BALL_RADIUS);
        assert!((p.vel.x - 2.0 * BOUNCE).abs() < 1e-12);
        assert_eq!(p.vel.y, 1.0);
    }

    #[test]
    fn test_reflect_bottom_right_corner() {
        let bounds = Bounds::new(200.0, 100.0);
        let mut p = Particle::new(DVec2::new(250.0, 130.0), 0.0, 0);
        p.vel = DVec2::new(1.0, 2.0);

        assert!(reflect_off_walls(&mut p, &bounds));
        assert_eq!(p.pos, DVec2::new(200.0 - BALL_RADIUS, 100.0 - BALL_RADIUS));
        assert!(p.vel.x < 0.0 && p.vel.y < 0.0);
    }

    #[test]
    fn test_reflect_inside_untouched() {
        let bounds = Bounds::default();
        let mut p = Particle::new(DVec2::new(100.0, 100.0), 0.0, 0);
        p.vel = DVec2::new(1.0, 1.0);
        assert!(!reflect_off_walls(&mut p, &bounds));
        assert_eq!(p.vel, DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_clamp_speed_floor_uses_heading() {
        let mut p = Particle::new(DVec2::ZERO, std::f64::consts::FRAC_PI_2, 0);
        clamp_speed(&mut p);
        assert!((p.speed() - MIN_SPEED).abs() < 1e-12);
        assert!(p.vel.x.abs() < 1e-12);
        assert!(p.vel.y > 0.0);
    }

    #[test]
    fn test_clamp_speed_ceiling_keeps_direction() {
        let mut p = Particle::new(DVec2::ZERO, 0.0, 0);
        p.vel = DVec2::new(30.0, -40.0);
        clamp_speed(&mut p);
        assert!((p.speed() - MAX_SPEED).abs() < 1e-12);
        assert!((p.vel.normalize() - DVec2::new(0.6, -0.8)).length() < 1e-12);
    }

    #[test]
    fn test_integrate_keeps_balls_inside() {
        let bounds = Bounds::new(120.0, 80.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut balls: Vec<Particle> = (0..20)
            .map(|i| {
                let mut p = Particle::new(DVec2::new(60.0, 40.0), i as f64, 0);
                p.vel = DVec2::new(i as f64 - 10.0, 5.0 - i as f64);
                p
            })
            .collect();

        for _ in 0..300 {
            integrate(&mut balls, &bounds, &mut rng, TICK_DT);
            for p in &balls {
                assert!(bounds.contains_ball(p.pos), "escaped: {:?}", p.pos);
            }
        }
    }

    #[test]
    fn test_friction_and_drift_without_noise() {
        // Ball heading along +x, inside the walls, speed well within limits
        let bounds = Bounds::default();
        let mut p = Particle::new(DVec2::new(400.0, 300.0), 0.0, 0);
        p.vel = DVec2::new(1.0, 0.0);

        struct Midpoint;
        impl rand::RngCore for Midpoint {
            fn next_u32(&mut self) -> u32 {
                1 << 31
            }
            fn next_u64(&mut self) -> u64 {
                1 << 63
            }
            fn fill_bytes(&mut self, dst: &mut [u8]) {
                dst.fill(0);
            }
        }

        integrate_particle(&mut p, &bounds, &mut Midpoint, TICK_DT);
        let expected_vx = 1.0 * FRICTION + DRIFT_ACCEL * TICK_DT;
        assert!((p.vel.x - expected_vx).abs() < 1e-12);
        assert!(p.vel.y.abs() < 1e-12);
        assert_eq!(p.heading, 0.0);
        assert!((p.pos.x - (400.0 + expected_vx)).abs() < 1e-12);
    }
}
