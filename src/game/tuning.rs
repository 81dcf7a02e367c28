//! Per-variant tuning.
//!
//! The playable game and the evolution arena share all physics but scroll at
//! different speeds, run at different frame rates and use different play-field
//! sizes.

/// Which game the tuning belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Single player, keyboard controlled.
    Classic,
    /// Population of controller-driven birds.
    Evolution,
}

/// Tunable constants that differ between variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub variant: Variant,
    /// Logical window size in pixels.
    pub window_width: f64,
    pub window_height: f64,
    /// Downward acceleration; displacement uses `0.5 * gravity * t^2`.
    pub gravity: f64,
    /// Pixels per tick the pipes scroll left.
    pub pipe_velocity: f64,
    /// Pixels per tick the ground scrolls left.
    pub base_velocity: f64,
    /// Where the ground strip is drawn.
    pub base_y: f64,
    /// Bird is out once its lower edge (minus `floor_margin`) reaches this line.
    pub floor_y: f64,
    pub floor_margin: f64,
    /// X of the pipe present when the run starts.
    pub first_pipe_x: f64,
    /// X of every pipe spawned after a pass.
    pub spawn_pipe_x: f64,
    /// Frame-rate cap for interactive runs.
    pub ticks_per_second: u32,
}

impl Tuning {
    /// The playable single-bird game.
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            window_width: 550.0,
            window_height: 900.0,
            gravity: 3.0,
            pipe_velocity: 5.0,
            base_velocity: 5.0,
            base_y: 730.0,
            floor_y: 700.0,
            floor_margin: 0.0,
            first_pipe_x: 600.0,
            spawn_pipe_x: 600.0,
            ticks_per_second: 30,
        }
    }

    /// The evolution arena.
    pub fn evolution() -> Self {
        Self {
            variant: Variant::Evolution,
            window_width: 600.0,
            window_height: 800.0,
            gravity: 3.0,
            pipe_velocity: 10.0,
            base_velocity: 10.0,
            base_y: 730.0,
            floor_y: 730.0,
            floor_margin: 10.0,
            first_pipe_x: 700.0,
            spawn_pipe_x: 600.0,
            ticks_per_second: 60,
        }
    }

    /// Milliseconds per tick at the frame-rate cap.
    pub fn tick_interval_ms(&self) -> u64 {
        1000 / self.ticks_per_second.max(1) as u64
    }
}
