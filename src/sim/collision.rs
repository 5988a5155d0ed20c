//! Ball/hand collision detection and response
//!
//! A hand is a circular zone around the detected position. Touching one
//! launches the ball upward at a fixed speed, steers it sideways by how far
//! off-center it landed, and pushes it out to the zone boundary so it can't
//! stick.

use glam::Vec2;

use super::state::{Ball, Field, Hand};
use crate::config::HandArbitration;
use crate::direction_or_up;

/// Hand-zone physics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandContact {
    pub hand_radius: f32,
    /// Vertical velocity imposed on contact
    pub bounce_velocity: f32,
    /// Horizontal impulse per pixel of ball offset from the hand center
    pub steer_factor: f32,
    pub arbitration: HandArbitration,
}

/// Result of a ball/hand overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Center distance between ball and hand
    pub distance: f32,
    /// Unit vector from hand toward ball (straight up if centers coincide)
    pub normal: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            distance: f32::INFINITY,
            normal: Vec2::ZERO,
        }
    }
}

/// Check whether a ball overlaps a hand zone. Touching exactly at the
/// combined radius is not a hit.
pub fn ball_hand_collision(ball: &Ball, hand: &Hand, hand_radius: f32) -> CollisionResult {
    let distance = ball.pos.distance(hand.pos);
    if distance < ball.radius() + hand_radius {
        CollisionResult {
            hit: true,
            distance,
            normal: direction_or_up(hand.pos, ball.pos),
        }
    } else {
        CollisionResult::miss()
    }
}

/// Apply one hand's response to a ball already known to overlap it
pub fn bounce_off_hand(ball: &mut Ball, hand: &Hand, normal: Vec2, params: &HandContact) {
    ball.vel.y = params.bounce_velocity;
    ball.vel.x += (ball.pos.x - hand.pos.x) * params.steer_factor;
    ball.pos = hand.pos + normal * (ball.radius() + params.hand_radius);
}

/// Resolve every ball against the current hand snapshot.
///
/// Returns the number of ball/hand contacts applied.
pub fn resolve_hand_contacts(balls: &mut [Ball], hands: &[Hand], params: &HandContact) -> usize {
    let mut contacts = 0;
    for ball in balls.iter_mut() {
        match params.arbitration {
            HandArbitration::Sequential => {
                // Later hands see the position left by earlier ones
                for hand in hands {
                    let result = ball_hand_collision(ball, hand, params.hand_radius);
                    if result.hit {
                        bounce_off_hand(ball, hand, result.normal, params);
                        contacts += 1;
                    }
                }
            }
            HandArbitration::Nearest => {
                let nearest = hands
                    .iter()
                    .map(|hand| (hand, ball_hand_collision(ball, hand, params.hand_radius)))
                    .filter(|(_, result)| result.hit)
                    .min_by(|(_, a), (_, b)| a.distance.total_cmp(&b.distance));
                if let Some((hand, result)) = nearest {
                    bounce_off_hand(ball, hand, result.normal, params);
                    contacts += 1;
                }
            }
        }
    }
    contacts
}

/// Check if a ball has dropped entirely below the field
#[inline]
pub fn ball_fell_out(ball: &Ball, field: Field) -> bool {
    ball.top() > field.height
}

/// Round-ending condition: any ball fell out
pub fn any_ball_fell_out(balls: &[Ball], field: Field) -> bool {
    balls.iter().any(|b| ball_fell_out(b, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Hsl;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 20.0, Hsl::for_ball_index(0, 120.0))
    }

    fn params(arbitration: HandArbitration) -> HandContact {
        HandContact {
            hand_radius: 50.0,
            bounce_velocity: -8.0,
            steer_factor: 0.1,
            arbitration,
        }
    }

    #[test]
    fn test_hand_bounce() {
        let mut balls = vec![ball(300.0, 300.0, 0.0, 5.0)];
        let hands = [Hand::new(300.0, 320.0)];

        let contacts = resolve_hand_contacts(&mut balls, &hands, &params(HandArbitration::Sequential));
        assert_eq!(contacts, 1);

        let b = &balls[0];
        assert_eq!(b.vel.y, -8.0);
        assert_eq!(b.vel.x, 0.0);
        assert!((b.pos.x - 300.0).abs() < 1e-3);
        assert!((b.pos.y - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_steering_impulse() {
        let mut balls = vec![ball(330.0, 300.0, 1.0, 5.0)];
        let hands = [Hand::new(300.0, 320.0)];
        resolve_hand_contacts(&mut balls, &hands, &params(HandArbitration::Sequential));

        let b = &balls[0];
        assert!((b.vel.x - 4.0).abs() < 1e-5);
        // Pushed out to exactly the combined radius
        assert!((b.pos.distance(hands[0].pos) - 70.0).abs() < 1e-3);
        assert!(b.pos.x > 300.0);
    }

    #[test]
    fn test_exact_touch_is_not_a_hit() {
        let b = ball(300.0, 250.0, 0.0, 5.0);
        let result = ball_hand_collision(&b, &Hand::new(300.0, 320.0), 50.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_coincident_centers_bounce_up() {
        let mut balls = vec![ball(300.0, 300.0, 0.0, 5.0)];
        let hands = [Hand::new(300.0, 300.0)];
        resolve_hand_contacts(&mut balls, &hands, &params(HandArbitration::Sequential));

        let b = &balls[0];
        assert_eq!(b.pos, Vec2::new(300.0, 230.0));
        assert_eq!(b.vel.y, -8.0);
    }

    #[test]
    fn test_sequential_last_hand_wins() {
        // Ball overlaps both hands; the second is processed last
        let mut balls = vec![ball(300.0, 300.0, 0.0, 5.0)];
        let hands = [Hand::new(290.0, 330.0), Hand::new(330.0, 320.0)];
        let contacts = resolve_hand_contacts(&mut balls, &hands, &params(HandArbitration::Sequential));

        let b = &balls[0];
        assert_eq!(contacts, 2);
        // First hand: vx += (300 - 290) * 0.1 = 1.0, ball moved to its boundary.
        // Second hand is evaluated from that new position and still overlaps.
        assert!((b.pos.distance(hands[1].pos) - 70.0).abs() < 1e-3);
        assert_eq!(b.vel.y, -8.0);
        assert!(b.vel.x != 1.0);
    }

    #[test]
    fn test_nearest_hand_only() {
        let mut balls = vec![ball(300.0, 300.0, 0.0, 5.0)];
        let hands = [Hand::new(340.0, 330.0), Hand::new(295.0, 320.0)];
        let contacts = resolve_hand_contacts(&mut balls, &hands, &params(HandArbitration::Nearest));

        let b = &balls[0];
        assert_eq!(contacts, 1);
        assert!((b.vel.x - 0.5).abs() < 1e-5);
        assert!((b.pos.distance(hands[1].pos) - 70.0).abs() < 1e-3);
    }

    #[test]
    fn test_no_hands_no_contacts() {
        let mut balls = vec![ball(300.0, 300.0, 2.0, 5.0)];
        let contacts = resolve_hand_contacts(&mut balls, &[], &params(HandArbitration::Sequential));
        assert_eq!(contacts, 0);
        assert_eq!(balls[0].vel, Vec2::new(2.0, 5.0));
    }

    #[test]
    fn test_fell_out() {
        let field = Field::new(800.0, 650.0);
        assert!(ball_fell_out(&ball(400.0, 700.0, 0.0, 0.0), field));
        assert!(!ball_fell_out(&ball(400.0, 300.0, 0.0, 0.0), field));
        // Top edge exactly on the bottom boundary is still in play
        assert!(!ball_fell_out(&ball(400.0, 670.0, 0.0, 0.0), field));

        let balls = vec![ball(400.0, 300.0, 0.0, 0.0), ball(100.0, 700.0, 0.0, 0.0)];
        assert!(any_ball_fell_out(&balls, field));
    }
}
