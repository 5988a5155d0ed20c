//! Ball dynamics
//!
//! Explicit Euler integration with side-wall and ceiling bounces. There is
//! no floor: a ball dropping out of the bottom ends the round.

use super::state::{Ball, Field};

/// Accelerate a ball downward by one tick of gravity
#[inline]
pub fn apply_gravity(ball: &mut Ball, gravity: f32) {
    ball.vel.y += gravity;
}

/// Move a ball by its velocity
#[inline]
pub fn integrate(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Bounce off the left/right walls, snapping back inside the field
pub fn resolve_walls(ball: &mut Ball, field: Field) {
    let r = ball.radius();
    if ball.pos.x - r < 0.0 || ball.pos.x + r > field.width {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = if ball.pos.x < field.center_x() {
            r
        } else {
            field.width - r
        };
    }
}

/// Bounce off the top edge
pub fn resolve_ceiling(ball: &mut Ball) {
    let r = ball.radius();
    if ball.pos.y - r < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
    }
}

/// Advance every ball by one tick
pub fn step_balls(balls: &mut [Ball], field: Field, gravity: f32) {
    for ball in balls.iter_mut() {
        apply_gravity(ball, gravity);
        integrate(ball);
        resolve_walls(ball, field);
        resolve_ceiling(ball);
    }
}
