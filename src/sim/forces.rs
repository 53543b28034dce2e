//! Force model: cursor repulsion, ball-ball contacts and cohesion
//!
//! Every function here only touches the particle slice it is given. Pair
//! loops are O(n²), which is fine for the few hundred balls a puzzle holds.

use glam::DVec2;

use super::particle::Particle;
use crate::consts::*;
use crate::contact_distance;

/// Repulsive force the cursor exerts on a ball at `pos`
///
/// Falls off linearly from `REPEL_STRENGTH` at the cursor to zero at
/// `CURSOR_REPEL_RADIUS`. Returns zero outside the radius and when the ball
/// sits on the cursor (no defined direction).
pub fn repel_force(pos: DVec2, cursor: DVec2) -> DVec2 {
    let away = pos - cursor;
    let d2 = away.length_squared();
    let r = CURSOR_REPEL_RADIUS;
    if d2 <= COINCIDENT_EPSILON_SQ || d2 >= r * r {
        return DVec2::ZERO;
    }
    let d = d2.sqrt();
    let falloff = 1.0 - d / r;
    away / d * REPEL_STRENGTH * falloff
}

/// Velocity change from the cursor over one tick of length `dt`
#[inline]
pub fn repel_impulse(pos: DVec2, cursor: DVec2, dt: f64) -> DVec2 {
    repel_force(pos, cursor) * dt
}

/// Push every ball near the cursor away from it
pub fn apply_cursor_repulsion(particles: &mut [Particle], cursor: Option<DVec2>, dt: f64) {
    let Some(cursor) = cursor else {
        return;
    };
    for p in particles.iter_mut() {
        p.vel += repel_impulse(p.pos, cursor, dt);
    }
}

/// Outcome of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal from the first ball toward the second
    pub normal: DVec2,
    /// Distance each ball was moved along the normal
    pub correction: f64,
    /// Impulse magnitude applied along the normal (0 when separating)
    pub impulse: f64,
}

/// Separate two overlapping balls and bounce them off each other
///
/// Each ball moves half the overlap, so the pair's midpoint is preserved.
/// The impulse is equal and opposite and is only applied while the balls
/// approach each other. Returns `None` when the pair does not overlap or the
/// centers coincide.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let d2 = delta.length_squared();
    if d2 < COINCIDENT_EPSILON_SQ {
        return None;
    }

    let d = d2.sqrt();
    let min_dist = contact_distance();
    if d >= min_dist {
        return None;
    }

    let normal = delta / d;
    let correction = (min_dist - d) * 0.5;
    a.pos -= normal * correction;
    b.pos += normal * correction;

    let vn = (b.vel - a.vel).dot(normal);
    let mut impulse = 0.0;
    if vn < 0.0 {
        impulse = -(1.0 + RESTITUTION) * vn / 2.0;
        a.vel -= normal * impulse;
        b.vel += normal * impulse;
    }

    Some(Contact {
        normal,
        correction,
        impulse,
    })
}

/// Single pass over every unordered pair (i < j) in index order
///
/// Corrections are applied in place as the loop goes; overlaps created by an
/// earlier correction are not revisited this tick. Returns the number of
/// contacts resolved.
pub fn resolve_collisions(particles: &mut [Particle]) -> usize {
    let mut contacts = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b).is_some() {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Velocity change pulling `particles[index]` toward its neighbors' centroid
///
/// Neighbors are all other balls within `COHESION_RADIUS`, whatever their
/// color. The pull is divided by the neighbor count so dense crowds do not
/// over-accelerate, and is capped at `COHESION_IMPULSE_CAP`.
pub fn cohesion_impulse(particles: &[Particle], index: usize, dt: f64) -> DVec2 {
    let me = particles[index].pos;
    let r2 = COHESION_RADIUS * COHESION_RADIUS;

    let mut sum = DVec2::ZERO;
    let mut count = 0usize;
    for (j, other) in particles.iter().enumerate() {
        if j == index {
            continue;
        }
        let d2 = me.distance_squared(other.pos);
        if d2 > COINCIDENT_EPSILON_SQ && d2 < r2 {
            sum += other.pos;
            count += 1;
        }
    }

    if count < COHESION_MIN_NEIGHBORS {
        return DVec2::ZERO;
    }

    let to_centroid = sum / count as f64 - me;
    let d = to_centroid.length();
    // Already touching the local crowd: no pull
    let min_pull = contact_distance() + 4.0;
    if d <= min_pull {
        return DVec2::ZERO;
    }

    let saturation = d.min(COHESION_SATURATE_AT) / COHESION_SATURATE_AT;
    let falloff = d / COHESION_RADIUS;
    let scaled = COHESION_STRENGTH * saturation * falloff;
    let magnitude = (scaled / count.max(1) as f64 * dt).min(COHESION_IMPULSE_CAP);

    to_centroid / d * magnitude
}

/// Apply cohesion to every ball
///
/// Only velocities change, so all impulses are computed against the same
/// positions before any is applied.
pub fn apply_cohesion(particles: &mut [Particle], dt: f64) {
    let impulses: Vec<DVec2> = (0..particles.len())
        .map(|i| cohesion_impulse(particles, i, dt))
        .collect();
    for (p, impulse) in particles.iter_mut().zip(impulses) {
        p.vel += impulse;
    }
}
