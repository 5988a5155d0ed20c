//! Game state and core simulation types
//!
//! Everything a renderer or HUD needs to draw a frame lives here.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_LIGHTNESS, BALL_SATURATION};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundPhase {
    /// No round has started (or the last one was aborted)
    #[default]
    Idle,
    /// "Get Ready!" - only the countdown advances
    CountingDown,
    /// Active gameplay
    Playing,
    /// Round ended, score and balls frozen for display
    GameOver,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Idle => "idle",
            RoundPhase::CountingDown => "counting_down",
            RoundPhase::Playing => "playing",
            RoundPhase::GameOver => "game_over",
        }
    }
}

/// Playing field bounds (screen space, origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// HSL color (hue in degrees, saturation/lightness in percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Color for the ball at `index` in the collection
    pub fn for_ball_index(index: usize, hue_step: f32) -> Self {
        Self {
            hue: (index as f32 * hue_step).rem_euclid(360.0),
            saturation: BALL_SATURATION,
            lightness: BALL_LIGHTNESS,
        }
    }

    /// CSS color string, e.g. `hsl(120, 70%, 60%)`
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    radius: f32,
    pub color: Hsl,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Hsl) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Ball at rest at the spawn point, colored by its collection index
    pub fn spawned(index: usize, field: Field, spawn_height: f32, radius: f32, hue_step: f32) -> Self {
        Self::new(
            Vec2::new(field.center_x(), spawn_height),
            Vec2::ZERO,
            radius,
            Hsl::for_ball_index(index, hue_step),
        )
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Y coordinate of the ball's top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }
}

/// A detected hand position. Carries no identity between snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub pos: Vec2,
}

impl Hand {
    pub fn new(x: f32, y: f32) -> Self {
        Self { pos: Vec2::new(x, y) }
    }
}

/// Complete round state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub phase: RoundPhase,
    /// Balls in spawn order; only grows during a round
    pub balls: Vec<Ball>,
    /// Latest hand snapshot
    pub hands: Vec<Hand>,
    /// Whole seconds survived
    pub score: u32,
    /// Seconds left before play starts
    pub countdown: f32,
    /// Clock reading when `Playing` was entered
    pub start_time: Option<Duration>,
    /// Whether the spawn timer is running
    pub spawning: bool,
    /// User-facing message from the last aborted start
    pub message: Option<String>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_counting_down(&self) -> bool {
        self.phase == RoundPhase::CountingDown
    }

    /// Render/HUD view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    x: b.pos.x,
                    y: b.pos.y,
                    radius: b.radius(),
                    color: b.color.to_css(),
                })
                .collect(),
            hands: self.hands.clone(),
            score: self.score,
            countdown: self.countdown,
            counting_down: self.is_counting_down(),
            message: self.message.clone(),
        }
    }
}

/// A ball as a renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: String,
}

/// Output handed to rendering/HUD collaborators each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: RoundPhase,
    pub balls: Vec<BallView>,
    pub hands: Vec<Hand>,
    pub score: u32,
    pub countdown: f32,
    pub counting_down: bool,
    pub message: Option<String>,
}
