//! Simulation module
//!
//! All gameplay logic lives here:
//! - Per-tick ball physics (no frame-rate compensation, one step per frame)
//! - Wall-clock timestamps passed in by the caller, never read directly
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod dynamics;
pub mod round;
pub mod score;
pub mod spawn;
pub mod state;

pub use autopilot::Autopilot;
pub use collision::{CollisionResult, HandContact, ball_hand_collision, resolve_hand_contacts};
pub use dynamics::step_balls;
pub use round::{Rating, Round, RoundSummary, TickOutcome};
pub use score::ScoreTracker;
pub use spawn::SpawnScheduler;
pub use state::{Ball, BallView, Field, GameState, Hand, Hsl, RoundPhase, Snapshot};
