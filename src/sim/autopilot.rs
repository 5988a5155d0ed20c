//! Demo/idle hand source
//!
//! Stands in for the camera detector: places hands under the balls that are
//! closest to falling out, leading them slightly, with seeded jitter so runs
//! vary but stay reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Ball, Field, GameState, Hand};

/// Synthetic player
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Maximum hands to place
    hands: usize,
    /// Max random offset applied to each hand (pixels)
    jitter: f32,
    /// How many ticks ahead to predict ball positions
    lead_ticks: f32,
}

impl Autopilot {
    pub fn new(seed: u64, hands: usize, jitter: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hands,
            jitter,
            lead_ticks: 4.0,
        }
    }

    /// Build a hand snapshot for the current state
    pub fn hands_for(&mut self, state: &GameState, field: Field) -> Vec<Hand> {
        // Most dangerous first: falling, and lowest on screen
        let mut threats: Vec<&Ball> = state.balls.iter().filter(|b| b.vel.y >= 0.0).collect();
        threats.sort_by(|a, b| b.pos.y.total_cmp(&a.pos.y));

        threats
            .into_iter()
            .take(self.hands)
            .map(|ball| {
                let predicted = ball.pos + ball.vel * self.lead_ticks;
                let offset = if self.jitter > 0.0 {
                    Vec2::new(
                        self.rng.random_range(-self.jitter..self.jitter),
                        self.rng.random_range(-self.jitter..self.jitter),
                    )
                } else {
                    Vec2::ZERO
                };
                // Sit just under the ball, never below the field
                let target = predicted + Vec2::new(0.0, ball.radius() * 2.0) + offset;
                Hand::new(
                    target.x.clamp(0.0, field.width),
                    target.y.clamp(0.0, field.height),
                )
            })
            .collect()
    }
}
