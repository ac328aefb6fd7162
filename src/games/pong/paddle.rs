use ratatui::style::Color;

use crate::entity::{Shape, Sprite, Vec2};

pub const STEP: f32 = 20.0;
pub const LENGTH: f32 = 100.0;
pub const THICKNESS: f32 = 20.0;

pub struct Paddle {
    position: Vec2,
    /// Largest |y| the centre may reach, or `None` to roam freely.
    travel: Option<f32>,
    sprite: Sprite,
}

impl Paddle {
    pub fn new(x: f32, travel: Option<f32>) -> Self {
        let position = Vec2::new(x, 0.0);
        let mut sprite = Sprite::new(
            Shape::Rect { width: THICKNESS, height: LENGTH },
            Color::White,
        );
        sprite.set_position(position);
        Self { position, travel, sprite }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn move_up(&mut self) {
        self.set_y(self.position.y + STEP);
    }

    pub fn move_down(&mut self) {
        self.set_y(self.position.y - STEP);
    }

    fn set_y(&mut self, y: f32) {
        self.position.y = match self.travel {
            Some(limit) => y.clamp(-limit, limit),
            None => y,
        };
        self.sprite.set_position(self.position);
    }
}
