// Host-side tests for particle seeding.

mod common;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use theremin_core::{BaseColor, Config, ParticleField, SpawnShape};

#[test]
fn seed_allocates_configured_count() {
    let config = Config::point_cloud();
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(1));
    assert_eq!(field.len(), config.particle_count);
    assert_eq!(field.velocities().len(), config.particle_count);
    assert_eq!(field.sizes().len(), config.particle_count);
    assert_eq!(field.positions_flat().len(), config.particle_count * 3);
    assert_eq!(field.colors_flat().len(), config.particle_count * 3);
}

#[test]
fn shell_spawn_stays_between_radii() {
    let config = Config::point_cloud();
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(2));
    let SpawnShape::Shell { inner, outer } = config.spawn else {
        panic!("point cloud should spawn in a shell");
    };
    for p in field.positions() {
        let r = p.length();
        assert!(r >= inner - 1e-4 && r <= outer + 1e-4, "radius {r} outside shell");
    }
}

#[test]
fn cube_spawn_stays_inside_half_extent() {
    let config = Config::cubes();
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(3));
    let SpawnShape::Cube { half_extent } = config.spawn else {
        panic!("cubes should spawn in a cube");
    };
    for p in field.positions() {
        assert!(p.abs().max_element() <= half_extent);
    }
}

#[test]
fn ball_spawn_stays_inside_radius() {
    let config = Config {
        spawn: SpawnShape::Ball { radius: 1.5 },
        ..Config::point_cloud()
    };
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(4));
    assert!(field.positions().iter().all(|p| p.length() <= 1.5 + 1e-4));
}

#[test]
fn velocities_are_small_and_symmetric() {
    let config = Config::point_cloud();
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(5));
    let mut sum = Vec3::ZERO;
    for v in field.velocities() {
        assert!(v.abs().max_element() <= config.initial_speed);
        sum += *v;
    }
    let mean = sum / field.len() as f32;
    // 2000 samples of ±0.005: the mean sits well inside the range
    assert!(mean.abs().max_element() < config.initial_speed * 0.2);
}

#[test]
fn live_attributes_start_at_baseline() {
    let config = Config::point_cloud();
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(6));
    assert_eq!(field.colors(), field.base_colors());
    assert_eq!(field.sizes(), field.base_sizes());
    let (lo, hi) = config.size_range;
    assert!(field.base_sizes().iter().all(|s| *s >= lo && *s < hi));
}

#[test]
fn position_tint_follows_position_and_stays_in_unit_range() {
    let config = Config::point_cloud();
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(7));
    let BaseColor::PositionTint { center, gain } = config.base_color else {
        panic!("point cloud should tint by position");
    };
    for (p, c) in field.positions().iter().zip(field.base_colors()) {
        let expected = (Vec3::splat(center) + *p * gain).clamp(Vec3::ZERO, Vec3::ONE);
        assert!(common::approx_vec(*c, expected, 1e-6));
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
    }
}

#[test]
fn fixed_base_color_is_shared() {
    let config = Config::cubes();
    let field = ParticleField::seed(&config, &mut StdRng::seed_from_u64(8));
    let BaseColor::Fixed(rgb) = config.base_color else {
        panic!("cubes should use a fixed base color");
    };
    assert!(field.base_colors().iter().all(|c| *c == rgb));
}

#[test]
fn seeding_is_deterministic_per_seed() {
    let config = Config::cubes();
    let a = ParticleField::seed(&config, &mut StdRng::seed_from_u64(9));
    let b = ParticleField::seed(&config, &mut StdRng::seed_from_u64(9));
    let c = ParticleField::seed(&config, &mut StdRng::seed_from_u64(10));
    assert_eq!(a.positions(), b.positions());
    assert_ne!(a.positions(), c.positions());
}

#[test]
#[should_panic(expected = "equal length")]
fn from_particles_rejects_mismatched_arrays() {
    ParticleField::from_particles(
        vec![Vec3::ZERO; 2],
        vec![Vec3::ZERO; 1],
        vec![Vec3::ONE; 2],
        vec![1.0; 2],
    );
}
