//! Plain motion data shared by every game object, plus the drawable handle
//! each object owns. Game rules only ever read and write [`Vec2`]s; the
//! [`Sprite`] is kept in sync so the canvas can draw it.

use std::ops::{Add, AddAssign, Sub};

use ratatui::style::Color;

/// A point on the canvas or a per-tick displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned box centred on the sprite position.
    Rect { width: f32, height: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    shape: Shape,
    position: Vec2,
    color: Color,
    visible: bool,
}

impl Sprite {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            position: Vec2::ZERO,
            color,
            visible: true,
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
