// Host-side tests for color/size following and relaxation.

mod common;

use common::{approx, approx_vec, still_field};
use glam::Vec3;
use theremin_core::{AppearanceUpdater, Config, PointerState};

#[test]
fn relaxation_decays_geometrically() {
    let config = Config::point_cloud();
    let updater = AppearanceUpdater::new(&config);
    let mut field = still_field(&[Vec3::ZERO]);
    let base_color = field.base_colors()[0];
    let base_size = field.base_sizes()[0];
    field.set_appearance(0, Vec3::ONE, 4.0);

    let color_diff0 = Vec3::ONE - base_color;
    let size_diff0 = 4.0 - base_size;
    let inactive = PointerState::default();
    let k = 100;
    for _ in 0..k {
        updater.step(&mut field, &inactive, Vec3::ZERO, 0.0);
    }
    let factor = (1.0 - config.relaxation_rate).powi(k);
    let color_diff = field.colors()[0] - base_color;
    let size_diff = field.sizes()[0] - base_size;
    assert!(approx_vec(color_diff, color_diff0 * factor, 1e-4));
    assert!(approx(size_diff, size_diff0 * factor, 1e-4));
    // Still visibly away from baseline: a slow cooldown, not a snap
    assert!(size_diff > 0.5);
}

#[test]
fn sustained_inactivity_converges_to_baseline() {
    let config = Config::point_cloud();
    let updater = AppearanceUpdater::new(&config);
    let mut field = still_field(&[Vec3::ZERO, Vec3::X]);
    field.set_appearance(0, Vec3::ONE, 4.0);
    field.set_appearance(1, Vec3::ZERO, 0.2);
    for _ in 0..2000 {
        updater.step(&mut field, &PointerState::default(), Vec3::ZERO, 0.0);
    }
    for i in 0..2 {
        assert!(approx_vec(field.colors()[i], field.base_colors()[i], 1e-4));
        assert!(approx(field.sizes()[i], field.base_sizes()[i], 1e-4));
    }
}

#[test]
fn size_is_non_increasing_with_distance_and_tends_to_one() {
    for config in [Config::point_cloud(), Config::cubes()] {
        let updater = AppearanceUpdater::new(&config);
        let mut prev = f32::INFINITY;
        let mut d = config.attraction_epsilon;
        while d < 1000.0 {
            let s = updater.size_at(d);
            assert!(s <= prev, "size grew from {prev} to {s} at distance {d}");
            assert!(s <= config.size_cap);
            assert!(s > 1.0);
            prev = s;
            d *= 1.25;
        }
        assert!(prev < 1.02);
    }
}

#[test]
fn active_pointer_sizes_follow_distance() {
    let config = Config::point_cloud();
    let updater = AppearanceUpdater::new(&config);
    let positions = [1.0, 2.0, 4.0, 8.0].map(|x| Vec3::new(x, 0.0, 0.0));
    let mut field = still_field(&positions);
    let pointer = PointerState::active(0.5, 0.5);
    updater.step(&mut field, &pointer, Vec3::ZERO, 1.5);

    let sizes = field.sizes();
    for pair in sizes.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    for (p, s) in positions.iter().zip(sizes) {
        let dist = p.length() + config.attraction_epsilon;
        let expected = (1.0 + config.size_gain / (dist + config.size_offset)).min(config.size_cap);
        assert!(approx(*s, expected, 1e-6));
    }
}

#[test]
fn active_colors_follow_palette_and_stay_in_unit_range() {
    let config = Config::point_cloud();
    let updater = AppearanceUpdater::new(&config);
    let positions: Vec<Vec3> = (0..50).map(|i| Vec3::new(i as f32 * 0.2, 1.0, -0.5)).collect();
    let mut field = still_field(&positions);
    let target = Vec3::new(-2.0, 3.0, 0.0);
    let elapsed = 7.25;
    updater.step(&mut field, &PointerState::active(0.3, 0.2), target, elapsed);

    for (p, c) in positions.iter().zip(field.colors()) {
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        let dist = updater.distance(*p, target);
        let [r, g, b] = config.palette;
        let raw = Vec3::new(
            r.eval(dist, elapsed),
            g.eval(dist, elapsed),
            b.eval(dist, elapsed),
        );
        assert!(approx_vec(*c, raw.clamp(Vec3::ZERO, Vec3::ONE), 1e-6));
    }
}

#[test]
fn cosine_channel_matches_cos() {
    let config = Config::point_cloud();
    let green = config.palette[1];
    let (d, t) = (2.0_f32, 3.0_f32);
    let expected = 0.2 + (d * 0.5 + t * 0.3).cos();
    assert!(approx(green.eval(d, t), expected, 1e-5));
}

#[test]
fn planar_distance_ignores_depth() {
    let updater = AppearanceUpdater::new(&Config::cubes());
    let d = updater.distance(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    assert!(approx(d, 0.1, 1e-6));
    let volume = AppearanceUpdater::new(&Config::point_cloud());
    let d = volume.distance(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    assert!(approx(d, 5.1, 1e-5));
}

#[test]
fn relaxation_resumes_from_pointer_driven_state() {
    let config = Config::point_cloud();
    let updater = AppearanceUpdater::new(&config);
    let mut field = still_field(&[Vec3::new(0.5, 0.0, 0.0)]);
    updater.step(&mut field, &PointerState::active(0.5, 0.5), Vec3::ZERO, 0.0);
    let driven = field.sizes()[0];
    assert!(driven > field.base_sizes()[0]);

    updater.step(&mut field, &PointerState::default(), Vec3::ZERO, 0.0);
    let after = field.sizes()[0];
    let expected = driven + (field.base_sizes()[0] - driven) * config.relaxation_rate;
    assert!(approx(after, expected, 1e-6));
}
