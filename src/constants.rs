// Bird physics constants
pub const BIRD_START_X: f64 = 230.0;
pub const BIRD_START_Y: f64 = 350.0;
pub const JUMP_VELOCITY: f64 = -10.5;
pub const MAX_DISPLACEMENT: f64 = 16.0; // terminal speed, px per tick
pub const JUMP_BOOST: f64 = 2.0; // extra lift while moving up
pub const TILT_HOLD_DISTANCE: f64 = 50.0; // keep nose up until this far below the launch height

// Bird rotation and animation
pub const MAX_ROTATION: f64 = 25.0;
pub const MIN_ROTATION: f64 = -90.0;
pub const ROTATION_VELOCITY: f64 = 20.0;
pub const NOSE_DIVE_TILT: f64 = -80.0;
pub const ANIMATION_TIME: u32 = 5;

// Pipe geometry
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_HEIGHT_MIN: i32 = 50;
pub const PIPE_HEIGHT_MAX: i32 = 450; // exclusive

// Out-of-bounds
pub const CEILING_Y: f64 = -50.0;

// Evaluation rewards
pub const SURVIVAL_REWARD: f64 = 0.1;
pub const COLLISION_PENALTY: f64 = 1.0;
pub const PASS_BONUS: f64 = 5.0;
pub const JUMP_THRESHOLD: f64 = 0.5;

// Observation layout: bird y, distance to gap top, distance to gap bottom
pub const OBSERVATION_SIZE: usize = 3;
