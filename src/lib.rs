//! Futbolito - tilt-controlled table football
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field geometry, physics tick, match state)
//! - `input`: Tilt sample sources and the latest-sample-wins sensor feed
//! - `session`: Match orchestration (pause gate, event application, snapshots)
//! - `audio`: Sound cues for game events
//! - `settings`: Player preferences and demo configuration

pub mod audio;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;

pub use input::{TiltSample, TiltSource};
pub use session::{Match, Snapshot};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Tilt to velocity gain per tick
    pub const SENSITIVITY: f32 = 0.5;
    /// Velocity retained each tick (applied once, after collisions)
    pub const FRICTION: f32 = 0.98;
    /// Velocity retained on a bounce (sign is flipped separately)
    pub const RESTITUTION: f32 = 0.8;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;

    /// Goal mouth: centered band of this fraction of the field width
    pub const GOAL_WIDTH_FRACTION: f32 = 0.2;
    pub const GOAL_HEIGHT: f32 = 20.0;

    /// Goals needed to win a match
    pub const WIN_SCORE: u32 = 5;
}
