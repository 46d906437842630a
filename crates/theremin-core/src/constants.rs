// Shared simulation/audio tuning constants used by both web and native frontends.

// Field size
pub const POINT_CLOUD_PARTICLES: usize = 2000;
pub const CUBE_PARTICLES: usize = 500;

// Seeding
pub const SHELL_INNER_RADIUS: f32 = 2.0;
pub const SHELL_OUTER_RADIUS: f32 = 5.0;
pub const CUBE_SPAWN_HALF_EXTENT: f32 = 5.0;
pub const POINT_CLOUD_INITIAL_SPEED: f32 = 0.005; // units per frame, per axis
pub const CUBE_INITIAL_SPEED: f32 = 0.0015;

// Boundary reset
pub const POINT_CLOUD_RESET_DISTANCE: f32 = 10.0;
pub const CUBE_RESET_DISTANCE: f32 = 20.0;
pub const RESET_HALF_EXTENT: f32 = 2.5; // escaped particles respawn inside this cube

// Forces
pub const POINT_CLOUD_CENTER_COEFFICIENT: f32 = 0.0001;
pub const CUBE_CENTER_COEFFICIENT: f32 = 0.0002;
pub const POINT_CLOUD_ATTRACTION: f32 = 0.01;
pub const CUBE_ATTRACTION: f32 = 0.4;
pub const CUBE_ATTRACTION_CAP: f32 = 0.004;
pub const ATTRACTION_EPSILON: f32 = 0.1; // keeps 1/dist² finite at the target
pub const CUBE_SPIN_RATE: f32 = 0.001; // radians per frame, per axis

// Appearance
pub const RELAXATION_RATE: f32 = 0.01; // lerp factor per inactive frame
pub const POINT_CLOUD_SIZE_CAP: f32 = 4.0;
pub const POINT_CLOUD_SIZE_GAIN: f32 = 5.0;
pub const CUBE_SIZE_CAP: f32 = 3.0;
pub const CUBE_SIZE_GAIN: f32 = 3.0;
pub const CUBE_BASE_COLOR: [f32; 3] = [0.1, 0.3, 0.8]; // blue-ish

// Pointer mapping
pub const WORLD_SCALE: f32 = 10.0; // normalized [0,1] span in world units
pub const FREQUENCY_MIN_HZ: f32 = 220.0; // A3
pub const FREQUENCY_MAX_HZ: f32 = 880.0; // A5
pub const CUBE_ACTIVATION_VOLUME: f32 = 0.5;

// Camera
pub const CAMERA_Z: f32 = 10.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
