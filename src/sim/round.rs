//! Round state machine
//!
//! `Idle -> CountingDown -> Playing -> GameOver`, and back to `CountingDown`
//! on the next start. The round owns the spawn timer and the frame chain and
//! switches them on and off inside the phase transitions themselves, so the
//! timer can only run while `Playing`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::collision::{HandContact, any_ball_fell_out, resolve_hand_contacts};
use super::dynamics::step_balls;
use super::score::ScoreTracker;
use super::spawn::SpawnScheduler;
use super::state::{Ball, Field, GameState, Hand, RoundPhase, Snapshot};
use crate::config::GameConfig;
use crate::error::AcquisitionError;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Seconds survived
    pub score: u32,
    /// Balls in play when the round ended
    pub balls: usize,
}

/// End-screen tier for a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Amazing,
    GreatJob,
    GameOver,
}

impl Rating {
    pub fn for_score(score: u32) -> Self {
        if score > 30 {
            Rating::Amazing
        } else if score > 15 {
            Rating::GreatJob
        } else {
            Rating::GameOver
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Rating::Amazing => "Amazing!",
            Rating::GreatJob => "Great Job!",
            Rating::GameOver => "Game Over!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Rating::Amazing => "🎉",
            Rating::GreatJob => "👏",
            Rating::GameOver => "💪",
        }
    }
}

impl RoundSummary {
    pub fn rating(&self) -> Rating {
        Rating::for_score(self.score)
    }

    /// One-line end-screen text
    pub fn message(&self) -> String {
        let rating = self.rating();
        format!(
            "{} {} You survived {} seconds",
            rating.headline(),
            rating.emoji(),
            self.score
        )
    }
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// No frame chain is running (idle or game over)
    Inactive,
    /// Countdown still running
    CountingDown { remaining: f32 },
    /// Countdown finished this tick; play begins next tick
    Started,
    /// Physics advanced, round continues
    Playing { contacts: usize },
    /// A ball fell out this tick
    Ended(RoundSummary),
}

/// One player's round: state plus the triggers that drive it
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    contact: HandContact,
    state: GameState,
    spawner: SpawnScheduler,
    score: ScoreTracker,
    /// Clock reading of the previous tick (for the countdown)
    last_tick: Option<Duration>,
    /// Whether the next frame should be ticked
    frame_active: bool,
}

impl Round {
    pub fn new(config: GameConfig) -> Self {
        let contact = HandContact {
            hand_radius: config.hand_radius,
            bounce_velocity: config.bounce_velocity,
            steer_factor: config.steer_factor,
            arbitration: config.hand_arbitration,
        };
        Self {
            spawner: SpawnScheduler::new(config.spawn_interval()),
            config,
            contact,
            state: GameState::new(),
            score: ScoreTracker::new(),
            last_tick: None,
            frame_active: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Whether the frame chain wants another tick
    pub fn is_running(&self) -> bool {
        self.frame_active
    }

    pub fn is_spawning(&self) -> bool {
        self.spawner.is_active()
    }

    /// Start (or restart) a round. Both triggers are cancelled before any
    /// state is reset.
    pub fn start(&mut self, now: Duration, field: Field) {
        self.cancel_triggers();

        let config = &self.config;
        self.state.balls = (0..config.ball_count as usize)
            .map(|i| {
                Ball::spawned(
                    i,
                    field,
                    config.spawn_height,
                    config.ball_radius,
                    config.hue_step,
                )
            })
            .collect();
        self.state.hands.clear();
        self.state.score = 0;
        self.state.countdown = config.countdown_secs;
        self.state.start_time = None;
        self.state.message = None;
        self.score.reset();

        self.state.phase = RoundPhase::CountingDown;
        self.last_tick = Some(now);
        self.frame_active = true;
        log::info!(
            "Round starting: {} ball(s), {:.1}s countdown",
            self.state.balls.len(),
            self.state.countdown
        );
    }

    /// Replace the hand snapshot wholesale
    pub fn set_hands(&mut self, hands: Vec<Hand>) {
        self.state.hands = hands;
    }

    /// Advance one frame
    pub fn tick(&mut self, field: Field, now: Duration) -> TickOutcome {
        if !self.frame_active {
            return TickOutcome::Inactive;
        }

        match self.state.phase {
            RoundPhase::CountingDown => {
                let elapsed = self
                    .last_tick
                    .map(|last| now.saturating_sub(last))
                    .unwrap_or_default();
                self.last_tick = Some(now);
                self.state.countdown -= self.config.countdown_policy.decrement(elapsed);

                if self.state.countdown <= 0.0 {
                    self.enter_playing(now);
                    TickOutcome::Started
                } else {
                    TickOutcome::CountingDown {
                        remaining: self.state.countdown,
                    }
                }
            }

            RoundPhase::Playing => {
                self.last_tick = Some(now);
                step_balls(&mut self.state.balls, field, self.config.gravity);
                let contacts =
                    resolve_hand_contacts(&mut self.state.balls, &self.state.hands, &self.contact);
                self.score.update(&mut self.state.score, now);

                if any_ball_fell_out(&self.state.balls, field) {
                    TickOutcome::Ended(self.enter_game_over())
                } else {
                    TickOutcome::Playing { contacts }
                }
            }

            RoundPhase::Idle | RoundPhase::GameOver => {
                self.frame_active = false;
                TickOutcome::Inactive
            }
        }
    }

    /// Spawn-timer callback: add every ball that came due by `now`.
    ///
    /// Returns the number of balls added.
    pub fn pump_spawns(&mut self, now: Duration, field: Field) -> usize {
        let due = self.spawner.poll(now);
        if self.state.phase != RoundPhase::Playing {
            return 0;
        }

        for _ in 0..due {
            let index = self.state.balls.len();
            self.state.balls.push(Ball::spawned(
                index,
                field,
                self.config.spawn_height,
                self.config.ball_radius,
                self.config.hue_step,
            ));
            log::info!("New ball spawned! Total balls: {}", self.state.balls.len());
        }
        due
    }

    /// Stop command from the UI. Ends a round in play, abandons a countdown.
    pub fn stop(&mut self) -> Option<RoundSummary> {
        match self.state.phase {
            RoundPhase::Playing => Some(self.enter_game_over()),
            RoundPhase::CountingDown => {
                self.cancel_triggers();
                self.state.phase = RoundPhase::Idle;
                log::info!("Countdown abandoned");
                None
            }
            RoundPhase::Idle | RoundPhase::GameOver => None,
        }
    }

    /// The hand detector couldn't start: leave the round idle with a message
    pub fn fail_start(&mut self, err: &AcquisitionError) {
        self.cancel_triggers();
        self.state.phase = RoundPhase::Idle;
        self.state.message = Some(err.user_message().to_string());
        log::warn!("Round could not start: {}", err);
    }

    fn enter_playing(&mut self, now: Duration) {
        self.state.phase = RoundPhase::Playing;
        self.state.countdown = 0.0;
        self.state.start_time = Some(now);
        self.score.begin(now);
        self.spawner.start(now);
        self.state.spawning = true;
        log::info!("Countdown finished, round in play");
    }

    fn enter_game_over(&mut self) -> RoundSummary {
        self.cancel_triggers();
        self.score.freeze();
        self.state.phase = RoundPhase::GameOver;

        let summary = RoundSummary {
            score: self.state.score,
            balls: self.state.balls.len(),
        };
        log::info!("Round over: {}", summary.message());
        summary
    }

    fn cancel_triggers(&mut self) {
        self.spawner.stop();
        self.state.spawning = false;
        self.frame_active = false;
    }
}
