pub mod car_manager;
pub mod player;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::prelude::*;
use ratatui::widgets::canvas::Context;
use ratatui::widgets::*;

use crate::config::WindowConfig;
use crate::entity::Vec2;
use crate::games::{Game, Phase};
use crate::scoreboard::LevelScoreboard;
use crate::ui::canvas::{paint_sprite, render_world};

use self::car_manager::CarManager;
use self::player::Player;

pub const TICK_DELAY: Duration = Duration::from_millis(100);
/// Car centre to player centre distance below which the player is hit.
pub const COLLISION_DISTANCE: f32 = 20.0;
/// Gap between the top/bottom edge and the finish line / starting spot.
const EDGE_MARGIN: f32 = 20.0;
/// Gap between the top/bottom edge and the outermost car lane.
const LANE_MARGIN: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    LevelUp,
    Collision,
}

pub struct Crossing {
    window: WindowConfig,
    seed: Option<u64>,
    rng: ChaCha8Rng,
    player: Player,
    cars: CarManager,
    scoreboard: LevelScoreboard,
    phase: Phase,
    paused: bool,
}

impl Crossing {
    pub fn new(window: WindowConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(window, seed, rng)
    }

    fn with_rng(window: WindowConfig, seed: Option<u64>, rng: ChaCha8Rng) -> Self {
        let hw = window.half_width();
        let hh = window.half_height();
        Self {
            seed,
            rng,
            player: Player::new(Vec2::new(0.0, -(hh - EDGE_MARGIN)), hh - EDGE_MARGIN),
            cars: CarManager::new(hw, hh - LANE_MARGIN),
            scoreboard: LevelScoreboard::new(),
            phase: Phase::Playing,
            paused: false,
            window,
        }
    }

    #[cfg(test)]
    pub(crate) fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub(crate) fn cars(&self) -> &CarManager {
        &self.cars
    }

    pub fn scoreboard(&self) -> &LevelScoreboard {
        &self.scoreboard
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    /// One tick of play. Once the game is over nothing changes any more.
    pub fn step(&mut self) -> Outcome {
        if self.phase == Phase::GameOver {
            return Outcome::Collision;
        }

        self.cars.create_car(&mut self.rng);
        self.cars.move_cars();

        let player = self.player.position();
        if self
            .cars
            .cars()
            .iter()
            .any(|car| car.position().distance(player) < COLLISION_DISTANCE)
        {
            self.phase = Phase::GameOver;
            self.player.hit();
            self.scoreboard.game_over();
            info!("run over on level {}", self.scoreboard.level());
            return Outcome::Collision;
        }

        if self.player.is_at_finishline() {
            self.player.goto_start();
            self.cars.level_up();
            self.scoreboard.increase_level();
            self.scoreboard.refresh();
            info!(
                "crossed, now level {} (car speed {})",
                self.scoreboard.level(),
                self.cars.speed()
            );
            return Outcome::LevelUp;
        }

        Outcome::Continue
    }

    fn paint(&self, ctx: &mut Context) {
        for car in self.cars.cars() {
            paint_sprite(ctx, car.sprite());
        }
        paint_sprite(ctx, self.player.sprite());

        let hw = f64::from(self.window.half_width());
        let hh = f64::from(self.window.half_height());
        ctx.print(
            -hw + 20.0,
            hh - 50.0,
            Span::styled(self.scoreboard.label(), Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)),
        );
        if self.scoreboard.shows_game_over() {
            ctx.print(
                -40.0,
                0.0,
                Span::styled("GAME OVER", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        }
    }
}

impl Game for Crossing {
    fn update(&mut self) {
        if self.paused {
            return;
        }
        self.step();
    }

    fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if self.phase == Phase::Playing {
                    self.paused = !self.paused;
                    info!("crossing paused: {}", self.paused);
                }
            }
            _ => {
                if self.phase == Phase::GameOver {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.reset();
                    }
                    return;
                }
                if self.paused {
                    return;
                }
                match key.code {
                    KeyCode::Up => self.player.move_up(),
                    KeyCode::Down => self.player.move_down(),
                    _ => {}
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(50, 180, 50)))
            .title(format!(" 🐢 {} ", self.window.title))
            .title_style(Style::default().fg(Color::Rgb(80, 220, 80)).add_modifier(Modifier::BOLD));
        render_world(frame, chunks[0], &self.window, block, |ctx| self.paint(ctx));

        let help = if self.phase == Phase::GameOver {
            Line::from(vec![
                Span::styled(" 💀 GAME OVER! ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled("Press ENTER to restart, Esc for menu", Style::default().fg(Color::Gray)),
            ])
        } else if self.paused {
            Line::from(vec![Span::styled(
                " ⏸ PAUSED - Press P to resume ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )])
        } else {
            Line::from(vec![
                Span::styled(" ↑↓ Move ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("P Pause ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("R Restart ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("Esc Menu", Style::default().fg(Color::DarkGray)),
            ])
        };
        frame.render_widget(Paragraph::new(help), chunks[1]);
    }

    /// Starts a new run. The RNG carries on, so a seeded session does not
    /// replay the same traffic.
    fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Crossing::with_rng(self.window.clone(), self.seed, rng);
    }

    fn tick_delay(&self) -> Duration {
        TICK_DELAY
    }

    fn get_score(&self) -> u32 {
        self.scoreboard.level()
    }

    fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn crossing() -> Crossing {
        Crossing::new(WindowConfig::crossing(), Some(7))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn walk_to(game: &mut Crossing, y: f32) {
        while game.player().position().y < y {
            game.handle_input(key(KeyCode::Up));
        }
    }

    #[test]
    fn geometry_follows_the_window() {
        let game = crossing();
        assert_eq!(game.player().position(), Vec2::new(0.0, -280.0));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.get_score(), 1);
        assert_eq!(game.tick_delay(), Duration::from_millis(100));
    }

    #[test]
    fn crossing_levels_up_and_sends_player_home() {
        let mut game = crossing();
        walk_to(&mut game, 270.0);
        assert_eq!(game.player().position().y, 270.0);

        game.handle_input(key(KeyCode::Up));
        assert_eq!(game.player().position().y, 280.0);
        assert!(!game.player().is_at_finishline());
        assert_eq!(game.step(), Outcome::Continue);
        assert_eq!(game.scoreboard().level(), 1);

        game.handle_input(key(KeyCode::Up));
        assert_eq!(game.player().position().y, 290.0);
        assert!(game.player().is_at_finishline());
        assert_eq!(game.step(), Outcome::LevelUp);

        assert_eq!(game.scoreboard().level(), 2);
        assert_eq!(game.scoreboard().displayed_level(), 2);
        assert_eq!(game.cars().level(), 2);
        assert_eq!(game.cars().speed(), 15.0);
        assert_eq!(game.player().position(), Vec2::new(0.0, -280.0));
    }

    #[test]
    fn collision_radius_is_strict() {
        // Cars move 5 left before the check, so place them 5 to the right.
        let mut game = crossing();
        game.cars.place_car(Vec2::new(5.0, -260.0));
        assert_ne!(game.step(), Outcome::Collision);
        assert_eq!(game.phase(), Phase::Playing);

        let mut game = crossing();
        game.cars.place_car(Vec2::new(5.0, -260.001));
        assert_eq!(game.step(), Outcome::Collision);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.scoreboard().shows_game_over());
        assert_eq!(game.player().sprite().color(), Color::Red);
    }

    #[test]
    fn game_over_is_terminal() {
        let mut game = crossing();
        game.cars.place_car(Vec2::new(5.0, -280.0));
        assert_eq!(game.step(), Outcome::Collision);
        let car_x = game.cars().cars()[0].position().x;

        for _ in 0..10 {
            game.update();
        }
        game.handle_input(key(KeyCode::Up));

        assert!(game.is_game_over());
        assert_eq!(game.cars().cars()[0].position().x, car_x);
        assert_eq!(game.player().position(), Vec2::new(0.0, -280.0));
        assert_eq!(game.scoreboard().level(), 1);
    }

    #[test]
    fn collision_wins_over_crossing() {
        let mut game = crossing();
        walk_to(&mut game, 290.0);
        game.cars.place_car(Vec2::new(5.0, 290.0));
        assert_eq!(game.step(), Outcome::Collision);
        assert_eq!(game.scoreboard().level(), 1);
    }

    #[test]
    fn enter_after_game_over_starts_fresh_run() {
        let mut game = crossing();
        game.cars.place_car(Vec2::new(5.0, -280.0));
        game.step();
        assert!(game.is_game_over());

        game.handle_input(key(KeyCode::Enter));

        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.cars().cars().is_empty());
        assert!(!game.scoreboard().shows_game_over());
    }

    #[test]
    fn pause_stops_traffic_and_player() {
        let mut game = crossing();
        game.cars.place_car(Vec2::new(200.0, 0.0));
        game.handle_input(key(KeyCode::Char('p')));
        game.update();
        game.handle_input(key(KeyCode::Up));
        assert_eq!(game.cars().cars()[0].position().x, 200.0);
        assert_eq!(game.player().position().y, -280.0);
    }

    #[test]
    fn traffic_never_reaches_the_start_early() {
        // Fresh cars need dozens of ticks to reach the player's column.
        let mut game = crossing();
        for _ in 0..50 {
            assert_eq!(game.step(), Outcome::Continue);
        }
    }
}
