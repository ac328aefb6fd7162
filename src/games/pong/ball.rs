use std::time::Duration;

use ratatui::style::Color;

use crate::entity::{Shape, Sprite, Vec2};

/// Tick length of a freshly served ball.
pub const BASE_DELAY: Duration = Duration::from_millis(100);
/// Tick length multiplier applied on every horizontal bounce.
pub const SPEEDUP: f32 = 0.9;
pub const RADIUS: f32 = 10.0;
const SERVE_VELOCITY: Vec2 = Vec2::new(10.0, 10.0);

pub struct Ball {
    position: Vec2,
    velocity: Vec2,
    delay: Duration,
    sprite: Sprite,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: SERVE_VELOCITY,
            delay: BASE_DELAY,
            sprite: Sprite::new(Shape::Circle { radius: RADIUS }, Color::Yellow),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[cfg(test)]
    pub(crate) fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Hides or shows the ball without touching its motion.
    pub fn set_visible(&mut self, visible: bool) {
        self.sprite.set_visible(visible);
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.sprite.set_position(self.position);
    }

    pub fn bounce_vertical(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// Reverses horizontal travel and shortens the tick, so the rally speeds up.
    pub fn bounce_horizontal(&mut self) {
        self.velocity.x = -self.velocity.x;
        self.delay = self.delay.mul_f32(SPEEDUP);
    }

    /// Re-serves from the centre. Horizontal direction flips; vertical
    /// direction is kept as it was when the point was scored.
    pub fn reset(&mut self) {
        self.goto(Vec2::ZERO);
        self.bounce_horizontal();
        self.delay = BASE_DELAY;
    }

    fn goto(&mut self, position: Vec2) {
        self.position = position;
        self.sprite.set_position(position);
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, position: Vec2, velocity: Vec2) {
        self.goto(position);
        self.velocity = velocity;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(d: Duration) -> f64 {
        d.as_secs_f64()
    }

    #[test]
    fn straight_flight_is_linear() {
        for n in 0..50u16 {
            let mut ball = Ball::new();
            let start = Vec2::new(-30.0, 20.0);
            let velocity = Vec2::new(4.0, -3.0);
            ball.place(start, velocity);
            for _ in 0..n {
                ball.advance();
            }
            let n = f32::from(n);
            assert_eq!(ball.position(), Vec2::new(start.x + n * velocity.x, start.y + n * velocity.y));
            assert_eq!(ball.sprite().position(), ball.position());
        }
    }

    #[test]
    fn vertical_bounce_negates_dy_once() {
        let mut ball = Ball::new();
        ball.bounce_vertical();
        assert_eq!(ball.velocity(), Vec2::new(10.0, -10.0));
        ball.bounce_vertical();
        assert_eq!(ball.velocity(), Vec2::new(10.0, 10.0));
        assert_eq!(ball.delay(), BASE_DELAY);
    }

    #[test]
    fn horizontal_bounce_compounds_speedup() {
        let mut ball = Ball::new();
        for k in 1..=12 {
            ball.bounce_horizontal();
            let expected = 0.1 * 0.9f64.powi(k);
            assert!(
                (secs(ball.delay()) - expected).abs() < 1e-6,
                "after {k} bounces: {:?}",
                ball.delay()
            );
        }
        // An even number of bounces leaves the direction unchanged.
        assert_eq!(ball.velocity().x, 10.0);
    }

    #[test]
    fn reset_reserves_from_centre() {
        let mut ball = Ball::new();
        ball.place(Vec2::new(405.0, 12.0), Vec2::new(10.0, -10.0));
        ball.bounce_horizontal();
        ball.bounce_horizontal();

        ball.reset();

        assert_eq!(ball.position(), Vec2::ZERO);
        assert_eq!(ball.velocity(), Vec2::new(-10.0, -10.0));
        assert_eq!(ball.delay(), BASE_DELAY);
    }
}
