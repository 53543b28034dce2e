//! Simulation driver
//!
//! Owns the ball population, the random source and the clock, and runs the
//! tick pipeline until the puzzle is solved.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::cluster;
use super::particle::{Bounds, Particle};
use super::snapshot::Snapshot;
use super::tick::{TickInput, step_physics};
use crate::consts::*;
use crate::platform::{Clock, SystemClock};
use crate::settings::Settings;

/// A running puzzle
#[derive(Debug)]
pub struct Simulation<R = Pcg32, C = SystemClock> {
    particles: Vec<Particle>,
    bounds: Bounds,
    settings: Settings,
    rng: R,
    clock: C,
    /// Clock reading when the current puzzle started (ms)
    started_at_ms: f64,
    solved: bool,
    /// Whole seconds on the clock when the puzzle was solved
    solve_time: Option<u64>,
    /// Ticks run since the last initialize
    ticks: u64,
}

impl Simulation {
    /// Start a puzzle with an unseeded generator and the wall clock
    pub fn new(settings: Settings, bounds: Bounds) -> Self {
        let rng = Pcg32::from_rng(&mut rand::rng());
        Self::with_parts(settings, bounds, rng, SystemClock::new())
    }
}

impl<R: Rng, C: Clock> Simulation<R, C> {
    /// Start a puzzle with an explicit random source and clock
    pub fn with_parts(settings: Settings, bounds: Bounds, rng: R, clock: C) -> Self {
        let mut sim = Self {
            particles: Vec::new(),
            bounds,
            settings,
            rng,
            clock,
            started_at_ms: 0.0,
            solved: false,
            solve_time: None,
            ticks: 0,
        };
        sim.initialize(settings, bounds);
        sim
    }

    /// Replace the population, restart the timer and clear the solved state
    ///
    /// Balls are spawned color by color inside a disk of
    /// `START_CLUSTER_RADIUS` around the center of `bounds`.
    pub fn initialize(&mut self, settings: Settings, bounds: Bounds) {
        self.settings = settings;
        self.bounds = bounds;

        let center = bounds.center();
        let mut particles = Vec::with_capacity(settings.total_balls());
        for color in 0..settings.color_count() {
            for _ in 0..settings.balls_per_color() {
                particles.push(Particle::spawn_in_disk(
                    &mut self.rng,
                    center,
                    START_CLUSTER_RADIUS,
                    color,
                ));
            }
        }

        self.particles = particles;
        self.restart_timer();

        log::info!(
            "Puzzle started: {} colors x {} balls in {}x{}",
            settings.color_count(),
            settings.balls_per_color(),
            bounds.width,
            bounds.height
        );
    }

    /// Start over with the current settings and bounds
    pub fn reset(&mut self) {
        self.initialize(self.settings, self.bounds);
    }

    /// Install a hand-placed population and restart the timer
    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
        self.restart_timer();
    }

    fn restart_timer(&mut self) {
        self.started_at_ms = self.clock.now_ms();
        self.solved = false;
        self.solve_time = None;
        self.ticks = 0;
    }

    /// Advance one tick and run the win check
    ///
    /// Does nothing once the puzzle is solved; the population and the solve
    /// time stay frozen until the next reset. Returns the solved flag.
    pub fn tick(&mut self, input: &TickInput) -> bool {
        if self.solved {
            return true;
        }

        step_physics(&mut self.particles, &self.bounds, input, &mut self.rng);
        self.ticks += 1;

        if cluster::is_solved(&self.particles) {
            let secs = self.elapsed_seconds();
            self.solved = true;
            self.solve_time = Some(secs);
            log::info!("Puzzle solved in {}s ({} ticks)", secs, self.ticks);
        }

        self.solved
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whole seconds since the puzzle started, frozen once solved
    pub fn elapsed_seconds(&self) -> u64 {
        if let Some(secs) = self.solve_time {
            return secs;
        }
        let elapsed_ms = (self.clock.now_ms() - self.started_at_ms).max(0.0);
        (elapsed_ms / 1000.0).floor() as u64
    }

    /// Seconds it took to solve, if solved
    pub fn solve_time(&self) -> Option<u64> {
        self.solve_time
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.particles,
            self.bounds,
            self.settings.color_count(),
            self.solved,
            self.elapsed_seconds(),
            self.solve_time,
        )
    }
}
