use ratatui::style::Color;

use crate::entity::{Shape, Sprite, Vec2};

pub const MOVE_DISTANCE: f32 = 10.0;
pub const STARTING_POSITION: Vec2 = Vec2::new(0.0, -280.0);
pub const FINISH_LINE_Y: f32 = 280.0;
const RADIUS: f32 = 10.0;

pub struct Player {
    position: Vec2,
    start: Vec2,
    finish_line_y: f32,
    sprite: Sprite,
}

impl Player {
    pub fn new(start: Vec2, finish_line_y: f32) -> Self {
        let mut player = Self {
            position: start,
            start,
            finish_line_y,
            sprite: Sprite::new(Shape::Circle { radius: RADIUS }, Color::Blue),
        };
        player.goto_start();
        player
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn move_up(&mut self) {
        self.set_y(self.position.y + MOVE_DISTANCE);
    }

    pub fn move_down(&mut self) {
        self.set_y(self.position.y - MOVE_DISTANCE);
    }

    /// True once the player is strictly past the finish line.
    pub fn is_at_finishline(&self) -> bool {
        self.position.y > self.finish_line_y
    }

    /// Marks the player as run over.
    pub fn hit(&mut self) {
        self.sprite.set_color(Color::Red);
    }

    pub fn goto_start(&mut self) {
        self.position = self.start;
        self.sprite.set_position(self.position);
    }

    fn set_y(&mut self, y: f32) {
        self.position.y = y;
        self.sprite.set_position(self.position);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(STARTING_POSITION, FINISH_LINE_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(y: f32) -> Player {
        let mut player = Player::default();
        player.set_y(y);
        player
    }

    #[test]
    fn starts_at_bottom() {
        let player = Player::default();
        assert_eq!(player.position(), Vec2::new(0.0, -280.0));
        assert_eq!(player.sprite().position(), player.position());
    }

    #[test]
    fn moves_vertically_only() {
        let mut player = Player::default();
        player.move_up();
        player.move_up();
        assert_eq!(player.position(), Vec2::new(0.0, -260.0));
        player.move_down();
        assert_eq!(player.position(), Vec2::new(0.0, -270.0));
    }

    #[test]
    fn finish_line_is_strict() {
        assert!(!player_at(280.0).is_at_finishline());
        assert!(player_at(281.0).is_at_finishline());
        assert!(player_at(300.0).is_at_finishline());
        assert!(!player_at(0.0).is_at_finishline());
    }

    #[test]
    fn goto_start_returns_home() {
        let mut player = player_at(290.0);
        player.goto_start();
        assert_eq!(player.position(), STARTING_POSITION);
    }
}
