//! Win detection: how tightly each color cohort is packed

use std::collections::BTreeMap;

use glam::DVec2;

use super::particle::Particle;
use crate::consts::*;

/// Compactness of one color cohort
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortStats {
    pub color_index: usize,
    pub count: usize,
    pub centroid: DVec2,
    /// Mean distance of members to the centroid
    pub mean_dist: f64,
    /// Largest distance of any member to the centroid
    pub max_dist: f64,
}

impl CohortStats {
    /// Compute stats for a non-empty set of positions
    pub fn from_positions(color_index: usize, positions: &[DVec2]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }

        let count = positions.len();
        let centroid = positions.iter().copied().sum::<DVec2>() / count as f64;

        let mut sum = 0.0;
        let mut max_dist: f64 = 0.0;
        for pos in positions {
            let d = pos.distance(centroid);
            sum += d;
            max_dist = max_dist.max(d);
        }

        Some(Self {
            color_index,
            count,
            centroid,
            mean_dist: sum / count as f64,
            max_dist,
        })
    }

    /// Whether this cohort is packed tightly enough to count as sorted
    pub fn is_compact(&self) -> bool {
        self.mean_dist <= CLUSTER_AVG_DIST_MAX && self.max_dist <= CLUSTER_MAX_DIST_MAX
    }
}

/// Group positions by color index, keyed only by colors that have balls
fn positions_by_color(particles: &[Particle]) -> BTreeMap<usize, Vec<DVec2>> {
    let mut groups: BTreeMap<usize, Vec<DVec2>> = BTreeMap::new();
    for p in particles {
        groups.entry(p.color_index).or_default().push(p.pos);
    }
    groups
}

/// Stats for every cohort present, ordered by color index
pub fn cohort_stats(particles: &[Particle]) -> Vec<CohortStats> {
    positions_by_color(particles)
        .iter()
        .filter_map(|(&color, positions)| CohortStats::from_positions(color, positions))
        .collect()
}

/// The puzzle is solved when every cohort is compact
///
/// An empty population never counts as solved.
pub fn is_solved(particles: &[Particle]) -> bool {
    if particles.is_empty() {
        return false;
    }
    cohort_stats(particles).iter().all(CohortStats::is_compact)
}

/// Per-ball flag: does it have enough same-color company nearby
///
/// Used by the renderer to mark balls that already sit in a group.
pub fn clustered_flags(particles: &[Particle]) -> Vec<bool> {
    let r2 = CLUSTER_NEIGHBOR_RADIUS * CLUSTER_NEIGHBOR_RADIUS;
    particles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let neighbors = particles
                .iter()
                .enumerate()
                .filter(|&(j, q)| {
                    j != i && q.color_index == p.color_index && p.pos.distance_squared(q.pos) <= r2
                })
                .count();
            neighbors >= CLUSTER_NEIGHBOR_MIN
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f64, y: f64, color: usize) -> Particle {
        Particle::new(DVec2::new(x, y), 0.0, color)
    }

    #[test]
    fn test_tight_cohort_is_solved() {
        let balls: Vec<Particle> = [(0.0, 0.0), (0.5, 0.2), (-0.4, 0.3), (0.1, -0.6), (0.2, 0.7)]
            .iter()
            .map(|&(dx, dy)| ball(300.0 + dx, 200.0 + dy, 0))
            .collect();

        let stats = cohort_stats(&balls);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].count, 5);
        assert!(stats[0].mean_dist < 1.0);
        assert!(stats[0].max_dist < 1.0);
        assert!(is_solved(&balls));
    }

    #[test]
    fn test_spread_pair_is_not_solved() {
        let balls = vec![ball(100.0, 100.0, 0), ball(300.0, 100.0, 0)];
        let stats = cohort_stats(&balls);
        assert!((stats[0].max_dist - 100.0).abs() < 1e-9);
        assert!((stats[0].mean_dist - 100.0).abs() < 1e-9);
        assert!(!is_solved(&balls));
    }

    #[test]
    fn test_empty_is_not_solved() {
        assert!(!is_solved(&[]));
    }

    #[test]
    fn test_every_cohort_must_be_compact() {
        let mut balls = vec![ball(100.0, 100.0, 0), ball(110.0, 100.0, 0)];
        balls.push(ball(400.0, 400.0, 1));
        balls.push(ball(405.0, 400.0, 1));
        assert!(is_solved(&balls));

        balls.push(ball(600.0, 400.0, 1));
        assert!(!is_solved(&balls));
    }

    #[test]
    fn test_max_distance_threshold_alone_fails() {
        // Mean stays under 28 but one straggler sits beyond 52
        let mut balls: Vec<Particle> = (0..9).map(|_| ball(200.0, 200.0, 0)).collect();
        balls.push(ball(270.0, 200.0, 0));
        let stats = cohort_stats(&balls);
        assert!(stats[0].mean_dist <= CLUSTER_AVG_DIST_MAX);
        assert!(stats[0].max_dist > CLUSTER_MAX_DIST_MAX);
        assert!(!is_solved(&balls));
    }

    #[test]
    fn test_missing_color_is_skipped() {
        // Color 0 has no balls; only color 1 is evaluated
        let balls = vec![ball(50.0, 50.0, 1), ball(52.0, 50.0, 1)];
        let stats = cohort_stats(&balls);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].color_index, 1);
        assert!(is_solved(&balls));
    }

    #[test]
    fn test_sparse_color_indices() {
        let balls = vec![
            ball(50.0, 50.0, usize::MAX),
            ball(52.0, 50.0, usize::MAX),
            ball(300.0, 300.0, 1 << 40),
        ];
        let stats = cohort_stats(&balls);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].color_index, 1 << 40);
        assert_eq!(stats[1].color_index, usize::MAX);
        assert_eq!(stats[1].count, 2);
        assert!(is_solved(&balls));
        assert!(is_solved(&[ball(10.0, 10.0, usize::MAX)]));
    }

    #[test]
    fn test_is_solved_is_repeatable() {
        let balls = vec![ball(10.0, 10.0, 0), ball(40.0, 10.0, 0), ball(500.0, 10.0, 1)];
        let first = is_solved(&balls);
        for _ in 0..10 {
            assert_eq!(is_solved(&balls), first);
        }
    }

    #[test]
    fn test_clustered_flags() {
        let balls = vec![
            ball(100.0, 100.0, 0),
            ball(120.0, 100.0, 0),
            ball(100.0, 130.0, 0),
            // Other color right next to them does not count
            ball(110.0, 110.0, 1),
            ball(400.0, 400.0, 1),
        ];
        let flags = clustered_flags(&balls);
        assert_eq!(flags, vec![true, true, true, false, false]);
    }
}
