pub mod crossing;
pub mod pong;

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

pub trait Game {
    /// Advances the game by exactly one tick.
    fn update(&mut self);
    fn handle_input(&mut self, key: KeyEvent);
    fn render(&mut self, frame: &mut Frame, area: Rect);
    fn reset(&mut self);
    /// How long the next tick lasts.
    fn tick_delay(&self) -> Duration;
    fn get_score(&self) -> u32;
    fn is_game_over(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}
