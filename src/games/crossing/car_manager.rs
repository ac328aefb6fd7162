use log::debug;
use rand::Rng;
use ratatui::style::Color;

use crate::entity::{Shape, Sprite, Vec2};

pub const COLORS: [Color; 6] = [
    Color::Red,
    Color::Rgb(255, 165, 0), // Orange
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta, // Purple
];
pub const STARTING_MOVE_DISTANCE: f32 = 5.0;
pub const MOVE_INCREMENT: f32 = 10.0;
/// A car is spawned on roughly one tick in this many.
pub const SPAWN_ONE_IN: u32 = 6;
pub const CAR_LENGTH: f32 = 40.0;
pub const CAR_HEIGHT: f32 = 20.0;

pub struct Car {
    position: Vec2,
    sprite: Sprite,
}

impl Car {
    fn new(position: Vec2, color: Color) -> Self {
        let mut sprite = Sprite::new(Shape::Rect { width: CAR_LENGTH, height: CAR_HEIGHT }, color);
        sprite.set_position(position);
        Self { position, sprite }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn drive(&mut self, distance: f32) {
        self.position.x -= distance;
        self.sprite.set_position(self.position);
    }
}

/// Owns every car on the road. All cars move left at the current speed,
/// which rises with each level.
pub struct CarManager {
    cars: Vec<Car>,
    speed: f32,
    level: u32,
    spawn_x: f32,
    lane_limit: f32,
    spawn_one_in: u32,
}

impl CarManager {
    /// `spawn_x` is the right edge cars enter from; lanes span `-lane_limit..=lane_limit`.
    pub fn new(spawn_x: f32, lane_limit: f32) -> Self {
        Self {
            cars: Vec::new(),
            speed: STARTING_MOVE_DISTANCE,
            level: 1,
            spawn_x,
            lane_limit,
            spawn_one_in: SPAWN_ONE_IN,
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[cfg(test)]
    pub(crate) fn level(&self) -> u32 {
        self.level
    }

    /// Rolls the spawn chance and, on success, adds a car in a random lane.
    pub fn create_car(&mut self, rng: &mut impl Rng) -> bool {
        if rng.gen_range(1..=self.spawn_one_in) != 1 {
            return false;
        }
        let y = rng.gen_range(-self.lane_limit..=self.lane_limit);
        let color = COLORS[rng.gen_range(0..COLORS.len())];
        self.spawn_car(y, color);
        true
    }

    pub fn spawn_car(&mut self, y: f32, color: Color) {
        debug!("car spawned in lane y={y:.0}");
        self.cars.push(Car::new(Vec2::new(self.spawn_x, y), color));
    }

    /// Drives every car left and drops the ones fully past the left edge.
    pub fn move_cars(&mut self) {
        for car in &mut self.cars {
            car.drive(self.speed);
        }
        let gone = -self.spawn_x - CAR_LENGTH;
        self.cars.retain(|car| car.position.x >= gone);
    }

    pub fn level_up(&mut self) {
        self.level += 1;
        self.speed += MOVE_INCREMENT;
    }

    #[cfg(test)]
    pub(crate) fn place_car(&mut self, position: Vec2) {
        self.cars.push(Car::new(position, Color::Red));
    }
}
