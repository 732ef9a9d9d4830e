//! Particle field: spawn, per-frame integration, and link computation.
//!
//! Owns no canvas handle. [`crate::render`] borrows the field each frame and
//! turns it into pixels; everything here is plain math so it runs in native
//! tests.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::consts::{
    ALPHA_MIN, ALPHA_SPAN, AREA_PER_PARTICLE, LINK_BASE_ALPHA, LINK_DISTANCE, PALETTE, RADIUS_MIN,
    RADIUS_SPAN, SPEED_SPAN,
};

/// A single background particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Horizontal velocity, px per frame.
    pub dx: f64,
    /// Vertical velocity, px per frame.
    pub dy: f64,
    pub color: &'static str,
    pub alpha: f64,
}

/// A connecting line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Stroke opacity, fading linearly with distance.
    pub alpha: f64,
}

/// The particle set for one drawing surface.
///
/// Spawned in a batch sized to the surface area, stepped once per animation
/// frame, and fully regenerated on a settled resize.
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn a field for a `width` x `height` surface.
    #[must_use]
    pub fn new(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
        };
        field.regenerate(rng);
        field
    }

    /// Spawn a field from a deterministic seed.
    #[must_use]
    pub fn seeded(width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::new(width, height, &mut rng)
    }

    /// Particle count for a surface: one per [`AREA_PER_PARTICLE`] px^2,
    /// rounded down.
    #[must_use]
    pub fn population_for(width: f64, height: f64) -> usize {
        let area = (width * height).max(0.0);
        (area / AREA_PER_PARTICLE).floor() as usize
    }

    /// Discard all particles and spawn a fresh batch for the current extent.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        let count = Self::population_for(self.width, self.height);
        self.particles = (0..count).map(|_| spawn(self.width, self.height, rng)).collect();
    }

    /// Adopt a new surface extent and regenerate the whole batch.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.regenerate(rng);
    }

    /// [`resize`](Self::resize) with an internally seeded generator.
    pub fn resize_seeded(&mut self, width: f64, height: f64, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.resize(width, height, &mut rng);
    }

    /// Advance every particle one frame: integrate velocity, then reflect off
    /// any crossed edge. Every position ends the tick inside
    /// `[0, width] x [0, height]`.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.dx;
            p.y += p.dy;
            if p.x < 0.0 {
                p.x = 0.0;
                p.dx = -p.dx;
            } else if p.x > self.width {
                p.x = self.width;
                p.dx = -p.dx;
            }
            if p.y < 0.0 {
                p.y = 0.0;
                p.dy = -p.dy;
            } else if p.y > self.height {
                p.y = self.height;
                p.dy = -p.dy;
            }
        }
    }

    /// Connecting lines for every particle pair closer than
    /// [`LINK_DISTANCE`]. Each unordered pair appears at most once.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < LINK_DISTANCE {
                    links.push(Link {
                        x1: a.x,
                        y1: a.y,
                        x2: b.x,
                        y2: b.y,
                        alpha: LINK_BASE_ALPHA * (1.0 - dist / LINK_DISTANCE),
                    });
                }
            }
        }
        links
    }
}

fn spawn(width: f64, height: f64, rng: &mut impl Rng) -> Particle {
    Particle {
        x: rng.random::<f64>() * width,
        y: rng.random::<f64>() * height,
        radius: rng.random::<f64>() * RADIUS_SPAN + RADIUS_MIN,
        dx: (rng.random::<f64>() - 0.5) * SPEED_SPAN,
        dy: (rng.random::<f64>() - 0.5) * SPEED_SPAN,
        color: PALETTE[rng.random_range(0..PALETTE.len())],
        alpha: rng.random::<f64>() * ALPHA_SPAN + ALPHA_MIN,
    }
}
