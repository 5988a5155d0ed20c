//! Game configuration
//!
//! Fixed at startup. Loaded from JSON (every field optional) or taken from
//! the defaults in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Field;

/// How the pre-round countdown is decremented
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CountdownPolicy {
    /// Subtract the measured time since the previous tick
    #[default]
    WallClock,
    /// Subtract `1 / tick_hz` per tick regardless of the real frame rate
    FixedStep { tick_hz: f32 },
}

impl CountdownPolicy {
    /// One sixtieth of a second per tick, whatever the display does
    pub const fn fixed_60hz() -> Self {
        CountdownPolicy::FixedStep {
            tick_hz: ASSUMED_TICK_HZ,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CountdownPolicy::WallClock => "wall_clock",
            CountdownPolicy::FixedStep { .. } => "fixed_step",
        }
    }

    /// Seconds to take off the countdown for a tick that follows `elapsed`
    /// of real time
    pub fn decrement(&self, elapsed: Duration) -> f32 {
        match *self {
            CountdownPolicy::WallClock => elapsed.as_secs_f32(),
            CountdownPolicy::FixedStep { tick_hz } => 1.0 / tick_hz,
        }
    }
}

/// Which hand(s) resolve a ball that overlaps several in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HandArbitration {
    /// Every overlapping hand in snapshot order; last one wins for vertical
    /// velocity and position, horizontal impulses add up
    #[default]
    Sequential,
    /// Only the closest overlapping hand
    Nearest,
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Round ===
    /// Balls present at round start
    pub ball_count: u32,
    /// Pre-round countdown (seconds)
    pub countdown_secs: f32,
    pub countdown_policy: CountdownPolicy,

    // === Physics ===
    pub ball_radius: f32,
    /// Added to vertical velocity each tick
    pub gravity: f32,
    /// Vertical velocity imposed on hand contact (negative = up)
    pub bounce_velocity: f32,
    pub hand_radius: f32,
    /// Horizontal impulse per pixel of ball offset from the hand
    pub steer_factor: f32,
    pub hand_arbitration: HandArbitration,

    // === Spawning ===
    pub spawn_interval_ms: u64,
    /// Distance of the spawn point below the top edge
    pub spawn_height: f32,
    /// Hue rotation per ball index (degrees)
    pub hue_step: f32,

    /// Initial playing field (drivers may resize it later)
    pub field: Field,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            countdown_secs: COUNTDOWN_SECS,
            countdown_policy: CountdownPolicy::WallClock,

            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            bounce_velocity: BOUNCE_VELOCITY,
            hand_radius: HAND_RADIUS,
            steer_factor: STEER_FACTOR,
            hand_arbitration: HandArbitration::Sequential,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_height: SPAWN_HEIGHT,
            hue_step: HUE_STEP,

            field: Field::new(FIELD_WIDTH, FIELD_HEIGHT),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Spawn cadence as a duration
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        let floats = [
            ("countdown_secs", self.countdown_secs),
            ("ball_radius", self.ball_radius),
            ("gravity", self.gravity),
            ("bounce_velocity", self.bounce_velocity),
            ("hand_radius", self.hand_radius),
            ("steer_factor", self.steer_factor),
            ("spawn_height", self.spawn_height),
            ("hue_step", self.hue_step),
            ("field.width", self.field.width),
            ("field.height", self.field.height),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return invalid(&format!("{name} must be a finite number"));
        }

        if self.ball_count == 0 {
            return invalid("ball_count must be at least 1");
        }
        if self.ball_radius <= 0.0 {
            return invalid("ball_radius must be positive");
        }
        if self.hand_radius <= 0.0 {
            return invalid("hand_radius must be positive");
        }
        if self.gravity < 0.0 {
            return invalid("gravity must not be negative");
        }
        if self.bounce_velocity >= 0.0 {
            return invalid("bounce_velocity must be negative (upward)");
        }
        if self.countdown_secs < 0.0 {
            return invalid("countdown_secs must not be negative");
        }
        if let CountdownPolicy::FixedStep { tick_hz } = self.countdown_policy {
            if !tick_hz.is_finite() || tick_hz <= 0.0 {
                return invalid("countdown tick_hz must be a positive number");
            }
        }
        if self.spawn_interval_ms == 0 {
            return invalid("spawn_interval_ms must be positive");
        }
        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            return invalid("field dimensions must be positive");
        }
        // Wall bounces clamp to [radius, width - radius]
        if self.field.width <= 2.0 * self.ball_radius {
            return invalid("field must be wider than one ball");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn_interval(), Duration::from_secs(20));
        assert_eq!(config.ball_count, 1);
        assert_eq!(config.bounce_velocity, -8.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "ball_count": 3, "gravity": 0.3 }"#).unwrap();
        assert_eq!(config.ball_count, 3);
        assert_eq!(config.gravity, 0.3);
        assert_eq!(config.hand_radius, HAND_RADIUS);
        assert_eq!(config.countdown_policy, CountdownPolicy::WallClock);
    }

    #[test]
    fn test_policy_json() {
        let config = GameConfig::from_json_str(
            r#"{ "countdown_policy": { "fixed_step": { "tick_hz": 60.0 } }, "hand_arbitration": "nearest" }"#,
        )
        .unwrap();
        assert_eq!(config.countdown_policy, CountdownPolicy::FixedStep { tick_hz: 60.0 });
        assert_eq!(config.hand_arbitration, HandArbitration::Nearest);
    }

    #[test]
    fn test_rejects_invalid() {
        let err = GameConfig::from_json_str(r#"{ "ball_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json_str(r#"{ "bounce_velocity": 8.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_finite() {
        let config = GameConfig {
            countdown_secs: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            steer_factor: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            field: Field::new(f32::INFINITY, 650.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            countdown_policy: CountdownPolicy::FixedStep { tick_hz: f32::INFINITY },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_field_narrower_than_ball() {
        let err = GameConfig::from_json_str(r#"{ "field": { "width": 30.0, "height": 650.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json_str(r#"{ "ball_radius": 400.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config =
            GameConfig::from_json_str(r#"{ "field": { "width": 41.0, "height": 650.0 } }"#).unwrap();
        assert_eq!(config.field.width, 41.0);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(CountdownPolicy::WallClock.as_str(), "wall_clock");
        assert_eq!(CountdownPolicy::fixed_60hz().as_str(), "fixed_step");
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/nonexistent/hand-juggle.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_countdown_decrement() {
        let fixed = CountdownPolicy::fixed_60hz();
        assert!((fixed.decrement(Duration::from_millis(500)) - 1.0 / 60.0).abs() < 1e-6);
        let wall = CountdownPolicy::WallClock;
        assert!((wall.decrement(Duration::from_millis(500)) - 0.5).abs() < 1e-6);
    }
}
