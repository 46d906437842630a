// Host-side tests for presets and configuration validation.

use glam::Vec2;
use theremin_core::constants::*;
use theremin_core::{Config, ConfigError, RenderPrimitive, SpawnShape, VolumePolicy};

#[test]
fn presets_are_valid() {
    assert_eq!(Config::point_cloud().validate(), Ok(()));
    assert_eq!(Config::cubes().validate(), Ok(()));
    assert_eq!(Config::default().primitive, RenderPrimitive::Points);
}

#[test]
fn presets_by_name() {
    assert_eq!(Config::preset("points").map(|c| c.primitive), Some(RenderPrimitive::Points));
    assert_eq!(Config::preset("cubes").map(|c| c.particle_count), Some(CUBE_PARTICLES));
    assert!(Config::preset("spheres").is_none());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frequency_range_spans_two_octaves() {
    assert_eq!(FREQUENCY_MAX_HZ, FREQUENCY_MIN_HZ * 4.0);
    assert!(RESET_HALF_EXTENT * 3.0_f32.sqrt() < POINT_CLOUD_RESET_DISTANCE);
}

#[test]
fn empty_field_is_rejected() {
    let config = Config {
        particle_count: 0,
        ..Config::cubes()
    };
    assert_eq!(config.validate(), Err(ConfigError::NoParticles));
}

#[test]
fn inverted_frequency_range_is_rejected() {
    let config = Config {
        f_min: 880.0,
        f_max: 220.0,
        ..Config::point_cloud()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyRange { name: "frequency", .. })
    ));
}

#[test]
fn relaxation_rate_must_be_in_unit_interval() {
    for rate in [0.0, -0.1, 1.5, f32::NAN] {
        let config = Config {
            relaxation_rate: rate,
            ..Config::point_cloud()
        };
        assert!(matches!(config.validate(), Err(ConfigError::RelaxationRate(_))));
    }
    let config = Config {
        relaxation_rate: 1.0,
        ..Config::point_cloud()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn respawn_cube_must_fit_inside_reset_sphere() {
    let config = Config {
        reset_half_extent: 8.0,
        ..Config::point_cloud()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ResetRegion { .. })));
}

#[test]
fn non_positive_fields_are_named() {
    let config = Config {
        attraction_epsilon: 0.0,
        ..Config::point_cloud()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::NotPositive {
            name: "attraction_epsilon",
            value: 0.0
        })
    );

    let config = Config {
        world_scale: Vec2::new(10.0, -1.0),
        ..Config::point_cloud()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive { name: "world_scale.y", .. })
    ));

    let config = Config {
        attraction_cap: 0.0,
        ..Config::cubes()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive { name: "attraction_cap", .. })
    ));
}

#[test]
fn negative_coefficients_are_rejected() {
    let config = Config {
        center_coefficient: -0.001,
        ..Config::cubes()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Negative { name: "center_coefficient", .. })
    ));
}

#[test]
fn bad_spawn_shapes_are_rejected() {
    let config = Config {
        spawn: SpawnShape::Shell {
            inner: 5.0,
            outer: 2.0,
        },
        ..Config::point_cloud()
    };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyRange { .. })));

    let config = Config {
        spawn: SpawnShape::Ball { radius: 0.0 },
        ..Config::point_cloud()
    };
    assert!(config.validate().is_err());
}

#[test]
fn volumes_must_be_unit() {
    let config = Config {
        volume: VolumePolicy::Fixed(1.2),
        ..Config::point_cloud()
    };
    assert_eq!(config.validate(), Err(ConfigError::Volume(1.2)));
    let config = Config {
        activation_volume: Some(-0.5),
        ..Config::cubes()
    };
    assert_eq!(config.validate(), Err(ConfigError::Volume(-0.5)));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::NotPositive {
        name: "f_min",
        value: -1.0,
    };
    assert!(err.to_string().contains("f_min"));
}
