//! Simulation state for the hero-section pixel trail.
//!
//! Particles are flat-colored squares that rise and fade out over roughly a
//! second. They are emitted in bursts at the pointer position and, absent
//! input, near four fixed cluster anchors so the background never goes
//! fully still.

use glam::Vec2;

/// Tunables for the trail. The defaults are the shipped look.
#[derive(Debug, Clone, Copy)]
pub struct TrailConfig {
    /// Particles per pointer/touch movement event.
    pub pointer_burst: usize,
    /// Edge length of the square jitter window around the pointer.
    pub pointer_jitter: f32,
    pub pointer_size_min: f32,
    pub pointer_size_spread: f32,
    /// Particles per cluster emission.
    pub cluster_burst: usize,
    /// Edge length of the square jitter window around a cluster anchor.
    pub cluster_jitter: f32,
    pub cluster_size_min: f32,
    pub cluster_size_spread: f32,
    /// Per-frame, per-cluster emission probability.
    pub cluster_chance: f32,
    /// Cluster particles start partway through their life so the idle
    /// emission reads dimmer than the pointer trail.
    pub cluster_initial_life: f32,
    /// Life added per rendered frame; 1/life_step frames to full fade.
    pub life_step: f32,
    /// Upward drift factor, scaled by current life.
    pub drift: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            pointer_burst: 14,
            pointer_jitter: 32.0,
            pointer_size_min: 3.0,
            pointer_size_spread: 3.0,
            cluster_burst: 4,
            cluster_jitter: 120.0,
            cluster_size_min: 2.0,
            cluster_size_spread: 3.0,
            cluster_chance: 0.4,
            cluster_initial_life: 0.4,
            life_step: 0.015,
            drift: 10.0,
        }
    }
}

/// One short-lived square sprite.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    pub life: f32,
}

impl Particle {
    /// Derived opacity; the particle is culled once this reaches zero.
    pub fn opacity(&self) -> f32 {
        (1.0 - self.life).max(0.0)
    }
}

/// Viewport fractions of the four idle-emission anchors.
const CLUSTER_FRACTIONS: [(f32, f32); 4] =
    [(0.18, 0.25), (0.78, 0.28), (0.2, 0.78), (0.8, 0.72)];

/// Anchor positions for a given viewport size. Pure, so calling it twice
/// with the same dimensions yields identical anchors.
pub fn cluster_anchors(width: f32, height: f32) -> [Vec2; 4] {
    CLUSTER_FRACTIONS.map(|(fx, fy)| Vec2::new(width * fx, height * fy))
}

/// Trail simulation. One instance per mounted canvas; the active particle
/// set is owned here exclusively.
pub struct TrailSim {
    config: TrailConfig,
    clusters: [Vec2; 4],
    particles: Vec<Particle>,
}

impl TrailSim {
    pub fn new(config: TrailConfig, width: f32, height: f32) -> Self {
        Self {
            config,
            clusters: cluster_anchors(width, height),
            particles: Vec::new(),
        }
    }

    /// Recompute the cluster anchors for a new viewport. Idempotent.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.clusters = cluster_anchors(width, height);
    }

    pub fn clusters(&self) -> &[Vec2; 4] {
        &self.clusters
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Emit the pointer burst, jittered around `at`.
    pub fn pointer_burst(&mut self, at: Vec2, rng: &mut impl FnMut() -> f32) {
        let c = self.config;
        for _ in 0..c.pointer_burst {
            let jitter = Vec2::new(
                (rng() - 0.5) * c.pointer_jitter,
                (rng() - 0.5) * c.pointer_jitter,
            );
            self.particles.push(Particle {
                pos: at + jitter,
                size: c.pointer_size_min + rng() * c.pointer_size_spread,
                life: 0.0,
            });
        }
    }

    /// Advance one frame: probabilistic cluster emission, then age, drift,
    /// and cull. Particles emitted this frame age along with the rest.
    pub fn step(&mut self, rng: &mut impl FnMut() -> f32) {
        let c = self.config;
        for anchor in self.clusters {
            if rng() < c.cluster_chance {
                for _ in 0..c.cluster_burst {
                    let jitter = Vec2::new(
                        (rng() - 0.5) * c.cluster_jitter,
                        (rng() - 0.5) * c.cluster_jitter,
                    );
                    self.particles.push(Particle {
                        pos: anchor + jitter,
                        size: c.cluster_size_min + rng() * c.cluster_size_spread,
                        life: rng() * c.cluster_initial_life,
                    });
                }
            }
        }

        self.particles.retain_mut(|p| {
            p.life += c.life_step;
            if p.opacity() <= 0.0 {
                return false;
            }
            p.pos.y -= p.life * c.drift;
            true
        });
    }
}
