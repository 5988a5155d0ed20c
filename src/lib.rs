//! Hand Juggle - keep falling balls in the air with tracked hands
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, hand collisions, round state machine)
//! - `platform`: Clock and hand detector abstractions
//! - `driver`: Single-threaded frame loop fed by a command queue
//! - `config`: Startup configuration

pub mod config;
pub mod driver;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::{CountdownPolicy, GameConfig, HandArbitration};
pub use driver::{Command, Driver, FrameReport};
pub use error::{AcquisitionError, ConfigError};

use glam::Vec2;

/// Game configuration defaults
pub mod consts {
    /// Balls present when a round starts
    pub const BALL_COUNT: u32 = 1;
    /// Ball radius (pixels)
    pub const BALL_RADIUS: f32 = 20.0;
    /// Downward acceleration per tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.2;
    /// Vertical velocity forced on a ball that touches a hand (pixels/tick)
    pub const BOUNCE_VELOCITY: f32 = -8.0;
    /// Radius of the circular hand zone (pixels)
    pub const HAND_RADIUS: f32 = 50.0;
    /// Horizontal impulse per pixel of offset from the hand center
    pub const STEER_FACTOR: f32 = 0.1;

    /// Pre-round countdown (seconds)
    pub const COUNTDOWN_SECS: f32 = 3.0;
    /// Tick rate the fixed-step countdown assumes
    pub const ASSUMED_TICK_HZ: f32 = 60.0;

    /// Wall-clock period between spawned balls (milliseconds)
    pub const SPAWN_INTERVAL_MS: u64 = 20_000;
    /// Spawned balls appear this far below the top edge
    pub const SPAWN_HEIGHT: f32 = 100.0;
    /// Hue rotation per spawned ball (degrees)
    pub const HUE_STEP: f32 = 120.0;
    pub const BALL_SATURATION: f32 = 70.0;
    pub const BALL_LIGHTNESS: f32 = 60.0;

    /// Default playing field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 650.0;
}

/// Unit vector pointing from `from` toward `to`, or straight up (screen space)
/// when the two points coincide.
#[inline]
pub fn direction_or_up(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    if delta.length_squared() == 0.0 {
        Vec2::NEG_Y
    } else {
        let angle = delta.y.atan2(delta.x);
        Vec2::new(angle.cos(), angle.sin())
    }
}
