#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn test_rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

fn single_particle_field(width: f64, height: f64, p: Particle) -> ParticleField {
    ParticleField {
        width,
        height,
        particles: vec![p],
    }
}

fn still_particle(x: f64, y: f64) -> Particle {
    Particle {
        x,
        y,
        radius: 1.0,
        dx: 0.0,
        dy: 0.0,
        color: "#FFD60A",
        alpha: 0.5,
    }
}

// --- population_for ---

#[test]
fn population_for_small_surface_is_zero() {
    // 100 * 100 = 10_000 < 14_000.
    assert_eq!(ParticleField::population_for(100.0, 100.0), 0);
}

#[test]
fn population_for_reference_surface() {
    // 1400 * 800 / 14_000 = 80 exactly.
    assert_eq!(ParticleField::population_for(1400.0, 800.0), 80);
}

#[test]
fn population_for_rounds_down() {
    // 1000 * 29 / 14_000 = 2.07...
    assert_eq!(ParticleField::population_for(1000.0, 29.0), 2);
}

#[test]
fn population_for_zero_area_is_zero() {
    assert_eq!(ParticleField::population_for(0.0, 800.0), 0);
}

// --- new / seeded ---

#[test]
fn new_spawns_area_sized_batch() {
    let mut rng = test_rng();
    let field = ParticleField::new(1400.0, 800.0, &mut rng);
    assert_eq!(field.particles.len(), 80);
    assert_eq!(field.width, 1400.0);
    assert_eq!(field.height, 800.0);
}

#[test]
fn spawn_positions_are_in_bounds() {
    let mut rng = test_rng();
    let field = ParticleField::new(1400.0, 800.0, &mut rng);
    for p in &field.particles {
        assert!((0.0..=1400.0).contains(&p.x));
        assert!((0.0..=800.0).contains(&p.y));
    }
}

#[test]
fn spawn_radius_is_in_range() {
    let mut rng = test_rng();
    let field = ParticleField::new(1400.0, 800.0, &mut rng);
    for p in &field.particles {
        assert!(p.radius >= 0.5, "radius {} below minimum", p.radius);
        assert!(p.radius < 2.7, "radius {} above maximum", p.radius);
    }
}

#[test]
fn spawn_velocity_is_in_range() {
    let mut rng = test_rng();
    let field = ParticleField::new(1400.0, 800.0, &mut rng);
    for p in &field.particles {
        assert!(p.dx.abs() <= 0.175, "dx {} out of range", p.dx);
        assert!(p.dy.abs() <= 0.175, "dy {} out of range", p.dy);
    }
}

#[test]
fn spawn_alpha_is_in_range() {
    let mut rng = test_rng();
    let field = ParticleField::new(1400.0, 800.0, &mut rng);
    for p in &field.particles {
        assert!(p.alpha >= 0.15, "alpha {} below minimum", p.alpha);
        assert!(p.alpha < 0.65, "alpha {} above maximum", p.alpha);
    }
}

#[test]
fn spawn_color_comes_from_palette() {
    let mut rng = test_rng();
    let field = ParticleField::new(1400.0, 800.0, &mut rng);
    for p in &field.particles {
        assert!(crate::consts::PALETTE.contains(&p.color), "unknown color {}", p.color);
    }
}

#[test]
fn seeded_is_deterministic() {
    let a = ParticleField::seeded(1400.0, 800.0, 42);
    let b = ParticleField::seeded(1400.0, 800.0, 42);
    assert_eq!(a.particles, b.particles);
}

#[test]
fn seeded_differs_across_seeds() {
    let a = ParticleField::seeded(1400.0, 800.0, 1);
    let b = ParticleField::seeded(1400.0, 800.0, 2);
    assert_ne!(a.particles, b.particles);
}

// --- step ---

#[test]
fn step_integrates_velocity() {
    let mut field = single_particle_field(
        100.0,
        100.0,
        Particle {
            dx: 1.5,
            dy: -0.5,
            ..still_particle(50.0, 50.0)
        },
    );
    field.step();
    assert!(approx_eq(field.particles[0].x, 51.5));
    assert!(approx_eq(field.particles[0].y, 49.5));
}

#[test]
fn step_reflects_left_edge() {
    let mut field = single_particle_field(
        100.0,
        100.0,
        Particle {
            dx: -1.0,
            ..still_particle(0.5, 50.0)
        },
    );
    field.step();
    // 0.5 - 1.0 = -0.5, clamped to the edge with the velocity reversed.
    assert_eq!(field.particles[0].x, 0.0);
    assert_eq!(field.particles[0].dx, 1.0);
}

#[test]
fn step_reflects_right_edge() {
    let mut field = single_particle_field(
        100.0,
        100.0,
        Particle {
            dx: 2.0,
            ..still_particle(99.0, 50.0)
        },
    );
    field.step();
    assert_eq!(field.particles[0].x, 100.0);
    assert_eq!(field.particles[0].dx, -2.0);
}

#[test]
fn step_reflects_top_edge() {
    let mut field = single_particle_field(
        100.0,
        100.0,
        Particle {
            dy: -1.0,
            ..still_particle(50.0, 0.25)
        },
    );
    field.step();
    assert_eq!(field.particles[0].y, 0.0);
    assert_eq!(field.particles[0].dy, 1.0);
}

#[test]
fn step_reflects_bottom_edge() {
    let mut field = single_particle_field(
        100.0,
        100.0,
        Particle {
            dy: 3.0,
            ..still_particle(50.0, 98.0)
        },
    );
    field.step();
    assert_eq!(field.particles[0].y, 100.0);
    assert_eq!(field.particles[0].dy, -3.0);
}

#[test]
fn step_keeps_every_particle_in_bounds() {
    let mut field = ParticleField::seeded(1400.0, 800.0, 9);
    for _ in 0..10_000 {
        field.step();
        for p in &field.particles {
            assert!((0.0..=1400.0).contains(&p.x), "x escaped: {}", p.x);
            assert!((0.0..=800.0).contains(&p.y), "y escaped: {}", p.y);
        }
    }
}

// --- links ---

#[test]
fn links_skips_distant_pairs() {
    let mut field = single_particle_field(1000.0, 1000.0, still_particle(100.0, 100.0));
    field.particles.push(still_particle(300.0, 100.0));
    assert!(field.links().is_empty());
}

#[test]
fn links_at_exact_threshold_are_excluded() {
    let mut field = single_particle_field(1000.0, 1000.0, still_particle(100.0, 100.0));
    field.particles.push(still_particle(220.0, 100.0));
    assert!(field.links().is_empty());
}

#[test]
fn links_connects_near_pair() {
    let mut field = single_particle_field(1000.0, 1000.0, still_particle(100.0, 100.0));
    field.particles.push(still_particle(160.0, 100.0));
    let links = field.links();
    assert_eq!(links.len(), 1);
    // 0.06 * (1 - 60/120) = 0.03.
    assert!(approx_eq(links[0].alpha, 0.03));
    assert_eq!(links[0].x1, 100.0);
    assert_eq!(links[0].x2, 160.0);
}

#[test]
fn links_alpha_fades_with_distance() {
    let mut near = single_particle_field(1000.0, 1000.0, still_particle(100.0, 100.0));
    near.particles.push(still_particle(130.0, 100.0));
    let mut far = single_particle_field(1000.0, 1000.0, still_particle(100.0, 100.0));
    far.particles.push(still_particle(190.0, 100.0));
    assert!(near.links()[0].alpha > far.links()[0].alpha);
}

#[test]
fn links_coincident_pair_uses_base_alpha() {
    let mut field = single_particle_field(1000.0, 1000.0, still_particle(100.0, 100.0));
    field.particles.push(still_particle(100.0, 100.0));
    assert!(approx_eq(field.links()[0].alpha, 0.06));
}

#[test]
fn links_counts_each_pair_once() {
    // Three mutually near particles form exactly three pairs.
    let mut field = single_particle_field(1000.0, 1000.0, still_particle(100.0, 100.0));
    field.particles.push(still_particle(110.0, 100.0));
    field.particles.push(still_particle(100.0, 110.0));
    assert_eq!(field.links().len(), 3);
}

// --- resize ---

#[test]
fn resize_regenerates_for_new_extent() {
    let mut rng = test_rng();
    let mut field = ParticleField::new(1400.0, 800.0, &mut rng);
    field.resize(700.0, 400.0, &mut rng);
    // 700 * 400 / 14_000 = 20.
    assert_eq!(field.particles.len(), 20);
    assert_eq!(field.width, 700.0);
    assert_eq!(field.height, 400.0);
}

#[test]
fn resize_discards_previous_batch() {
    let mut field = single_particle_field(1000.0, 1000.0, still_particle(999.0, 999.0));
    field.resize_seeded(1400.0, 800.0, 3);
    assert_eq!(field.particles.len(), 80);
    for p in &field.particles {
        assert!(p.x <= 1400.0 && p.y <= 800.0);
    }
}

#[test]
fn resize_seeded_matches_resize_with_same_seed() {
    let mut a = ParticleField::seeded(1400.0, 800.0, 5);
    let mut b = a.clone();
    a.resize_seeded(700.0, 400.0, 11);
    let mut rng = SmallRng::seed_from_u64(11);
    b.resize(700.0, 400.0, &mut rng);
    assert_eq!(a.particles, b.particles);
}
