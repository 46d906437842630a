use crate::constants::*;
use crate::error::ConfigError;
use glam::{Vec2, Vec3};

/// How the host draws each particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPrimitive {
    /// Additive round points; uses `PointBuffers`.
    Points,
    /// Instanced boxes with per-instance rotation; uses `InstanceBuffer`.
    Cubes,
}

/// Region initial positions are sampled from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnShape {
    /// Radius uniform in `[inner, outer)`, direction uniform on the sphere.
    Shell { inner: f32, outer: f32 },
    /// Uniform in the volume of a ball.
    Ball { radius: f32 },
    /// Uniform in an axis-aligned cube centered at the origin.
    Cube { half_extent: f32 },
}

/// Baseline color assigned at seed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BaseColor {
    Fixed(Vec3),
    /// `center + position * gain`, clamped to [0, 1].
    PositionTint { center: f32, gain: f32 },
}

/// Space in which pointer distance and attraction are measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttractionSpace {
    Volume,
    /// XY only; z is neither measured nor pushed.
    Planar,
}

/// One color channel while the pointer is active:
/// `offset + amplitude * sin(dist * distance_freq + t * time_freq + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorWave {
    pub offset: f32,
    pub amplitude: f32,
    pub distance_freq: f32,
    pub time_freq: f32,
    pub phase: f32,
}

impl ColorWave {
    pub const fn sine(offset: f32, amplitude: f32, distance_freq: f32, time_freq: f32) -> Self {
        Self {
            offset,
            amplitude,
            distance_freq,
            time_freq,
            phase: 0.0,
        }
    }

    pub const fn cosine(offset: f32, amplitude: f32, distance_freq: f32, time_freq: f32) -> Self {
        Self {
            offset,
            amplitude,
            distance_freq,
            time_freq,
            phase: std::f32::consts::FRAC_PI_2,
        }
    }

    #[inline]
    pub fn eval(&self, dist: f32, elapsed_sec: f32) -> f32 {
        self.offset
            + self.amplitude
                * (dist * self.distance_freq + elapsed_sec * self.time_freq + self.phase).sin()
    }
}

/// Pointer Y to volume policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VolumePolicy {
    /// `1 - y`: top of the surface is loud.
    InvertedY,
    Fixed(f32),
}

/// Immutable engine configuration. `Default` is the point-cloud preset.
#[derive(Clone, Debug)]
pub struct Config {
    pub particle_count: usize,
    pub primitive: RenderPrimitive,

    pub spawn: SpawnShape,
    pub initial_speed: f32,
    pub base_color: BaseColor,
    pub size_range: (f32, f32),

    pub reset_distance: f32,
    pub reset_half_extent: f32,
    pub center_coefficient: f32,
    pub attraction_coefficient: f32,
    /// `f32::INFINITY` disables the cap.
    pub attraction_cap: f32,
    pub attraction_epsilon: f32,
    pub attraction_space: AttractionSpace,
    pub spin_rate: Vec3,

    pub relaxation_rate: f32,
    pub palette: [ColorWave; 3],
    pub size_cap: f32,
    pub size_gain: f32,
    pub size_offset: f32,

    pub world_scale: Vec2,
    pub f_min: f32,
    pub f_max: f32,
    pub volume: VolumePolicy,
    /// Volume pushed on pointer-down instead of the mapped one, if set.
    pub activation_volume: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self::point_cloud()
    }
}

impl Config {
    /// Dense additive point cloud seeded in a spherical shell.
    pub fn point_cloud() -> Self {
        Self {
            particle_count: POINT_CLOUD_PARTICLES,
            primitive: RenderPrimitive::Points,
            spawn: SpawnShape::Shell {
                inner: SHELL_INNER_RADIUS,
                outer: SHELL_OUTER_RADIUS,
            },
            initial_speed: POINT_CLOUD_INITIAL_SPEED,
            base_color: BaseColor::PositionTint {
                center: 0.5,
                gain: 0.1,
            },
            size_range: (1.0, 3.0),
            reset_distance: POINT_CLOUD_RESET_DISTANCE,
            reset_half_extent: RESET_HALF_EXTENT,
            center_coefficient: POINT_CLOUD_CENTER_COEFFICIENT,
            attraction_coefficient: POINT_CLOUD_ATTRACTION,
            attraction_cap: f32::INFINITY,
            attraction_epsilon: ATTRACTION_EPSILON,
            attraction_space: AttractionSpace::Volume,
            spin_rate: Vec3::ZERO,
            relaxation_rate: RELAXATION_RATE,
            palette: [
                ColorWave::sine(0.5, 1.0, 1.0, 1.0),
                ColorWave::cosine(0.2, 1.0, 0.5, 0.3),
                ColorWave::sine(0.8, 1.0, 0.2, 0.5),
            ],
            size_cap: POINT_CLOUD_SIZE_CAP,
            size_gain: POINT_CLOUD_SIZE_GAIN,
            size_offset: 1.0,
            world_scale: Vec2::splat(WORLD_SCALE),
            f_min: FREQUENCY_MIN_HZ,
            f_max: FREQUENCY_MAX_HZ,
            volume: VolumePolicy::InvertedY,
            activation_volume: None,
        }
    }

    /// Sparse instanced cubes with planar, capped attraction.
    pub fn cubes() -> Self {
        Self {
            particle_count: CUBE_PARTICLES,
            primitive: RenderPrimitive::Cubes,
            spawn: SpawnShape::Cube {
                half_extent: CUBE_SPAWN_HALF_EXTENT,
            },
            initial_speed: CUBE_INITIAL_SPEED,
            base_color: BaseColor::Fixed(Vec3::from(CUBE_BASE_COLOR)),
            size_range: (0.5, 1.0),
            reset_distance: CUBE_RESET_DISTANCE,
            reset_half_extent: RESET_HALF_EXTENT,
            center_coefficient: CUBE_CENTER_COEFFICIENT,
            attraction_coefficient: CUBE_ATTRACTION,
            attraction_cap: CUBE_ATTRACTION_CAP,
            attraction_epsilon: ATTRACTION_EPSILON,
            attraction_space: AttractionSpace::Planar,
            spin_rate: Vec3::splat(CUBE_SPIN_RATE),
            relaxation_rate: RELAXATION_RATE,
            palette: [
                ColorWave::sine(0.5, 0.5, 0.2, 0.0),
                ColorWave::cosine(0.2, 0.3, 0.1, 0.0),
                ColorWave::sine(0.5, 0.5, 0.3, 0.0),
            ],
            size_cap: CUBE_SIZE_CAP,
            size_gain: CUBE_SIZE_GAIN,
            size_offset: 0.0,
            world_scale: Vec2::splat(WORLD_SCALE),
            f_min: FREQUENCY_MIN_HZ,
            f_max: FREQUENCY_MAX_HZ,
            volume: VolumePolicy::InvertedY,
            activation_volume: Some(CUBE_ACTIVATION_VOLUME),
        }
    }

    /// Look up a preset by name (`points` or `cubes`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "points" | "point_cloud" => Some(Self::point_cloud()),
            "cubes" => Some(Self::cubes()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }

        match self.spawn {
            SpawnShape::Shell { inner, outer } => {
                non_negative("spawn.inner", inner)?;
                range("spawn shell", inner, outer)?;
            }
            SpawnShape::Ball { radius } => positive("spawn.radius", radius)?,
            SpawnShape::Cube { half_extent } => positive("spawn.half_extent", half_extent)?,
        }
        non_negative("initial_speed", self.initial_speed)?;
        positive("size_range.min", self.size_range.0)?;
        range("size_range", self.size_range.0, self.size_range.1)?;

        positive("reset_distance", self.reset_distance)?;
        positive("reset_half_extent", self.reset_half_extent)?;
        // Farthest corner of the respawn cube must still be inside the reset sphere.
        if self.reset_half_extent * 3.0_f32.sqrt() >= self.reset_distance {
            return Err(ConfigError::ResetRegion {
                half_extent: self.reset_half_extent,
                distance: self.reset_distance,
            });
        }
        non_negative("center_coefficient", self.center_coefficient)?;
        non_negative("attraction_coefficient", self.attraction_coefficient)?;
        if self.attraction_cap.is_nan() || self.attraction_cap <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "attraction_cap",
                value: self.attraction_cap,
            });
        }
        positive("attraction_epsilon", self.attraction_epsilon)?;

        if !(0.0..=1.0).contains(&self.relaxation_rate) || self.relaxation_rate == 0.0 {
            return Err(ConfigError::RelaxationRate(self.relaxation_rate));
        }
        positive("size_cap", self.size_cap)?;
        non_negative("size_gain", self.size_gain)?;
        non_negative("size_offset", self.size_offset)?;

        positive("world_scale.x", self.world_scale.x)?;
        positive("world_scale.y", self.world_scale.y)?;
        positive("f_min", self.f_min)?;
        range("frequency", self.f_min, self.f_max)?;
        if let VolumePolicy::Fixed(v) = self.volume {
            unit(v)?;
        }
        if let Some(v) = self.activation_volume {
            unit(v)?;
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { name, min, max })
    }
}

fn unit(value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Volume(value))
    }
}
