pub mod ball;
pub mod paddle;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info};
use ratatui::prelude::*;
use ratatui::widgets::canvas::Context;
use ratatui::widgets::*;

use crate::config::WindowConfig;
use crate::games::Game;
use crate::scoreboard::PongScoreboard;
use crate::ui::canvas::{paint_sprite, render_world};

use self::ball::Ball;
use self::paddle::Paddle;

/// Gap between the top/bottom edge and the line where the ball bounces.
const WALL_MARGIN: f32 = 20.0;
/// Gap between the side edge and a paddle's centre.
const PADDLE_INSET: f32 = 50.0;
/// Gap between the side edge and the line the ball must cross to be returned.
const PADDLE_REACH: f32 = 80.0;
/// Ball centre to paddle centre distance below which the paddle returns it.
pub const PADDLE_HIT_RADIUS: f32 = 55.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub struct Pong {
    window: WindowConfig,
    wall_y: f32,
    goal_x: f32,
    return_x: f32,
    clamp_paddles: bool,
    ball: Ball,
    left: Paddle,
    right: Paddle,
    scoreboard: PongScoreboard,
    paused: bool,
}

impl Pong {
    pub fn new(window: WindowConfig, clamp_paddles: bool) -> Self {
        let hw = window.half_width();
        let hh = window.half_height();
        let travel = clamp_paddles.then_some(hh - paddle::LENGTH / 2.0);
        Self {
            wall_y: hh - WALL_MARGIN,
            goal_x: hw,
            return_x: hw - PADDLE_REACH,
            clamp_paddles,
            ball: Ball::new(),
            left: Paddle::new(-(hw - PADDLE_INSET), travel),
            right: Paddle::new(hw - PADDLE_INSET, travel),
            scoreboard: PongScoreboard::new(),
            paused: false,
            window,
        }
    }

    #[cfg(test)]
    pub(crate) fn ball(&self) -> &Ball {
        &self.ball
    }

    #[cfg(test)]
    pub(crate) fn left_paddle(&self) -> &Paddle {
        &self.left
    }

    #[cfg(test)]
    pub(crate) fn right_paddle(&self) -> &Paddle {
        &self.right
    }

    pub fn scoreboard(&self) -> &PongScoreboard {
        &self.scoreboard
    }

    #[cfg(test)]
    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }

    /// One tick of play. Returns the side that scored, if any.
    pub fn step(&mut self) -> Option<Side> {
        self.ball.advance();

        if self.ball.position().y.abs() > self.wall_y {
            self.ball.bounce_vertical();
        }

        if self.touches_paddle() {
            self.ball.bounce_horizontal();
            debug!("paddle return, tick now {:?}", self.ball.delay());
        }

        let scorer = self.goal_scored()?;
        match scorer {
            Side::Left => self.scoreboard.point_left(),
            Side::Right => self.scoreboard.point_right(),
        }
        self.ball.reset();
        self.scoreboard.refresh();
        info!(
            "{:?} scores: {} - {}",
            scorer,
            self.scoreboard.left(),
            self.scoreboard.right()
        );
        Some(scorer)
    }

    fn touches_paddle(&self) -> bool {
        let ball = self.ball.position();
        let near = |paddle: &Paddle| ball.distance(paddle.position()) < PADDLE_HIT_RADIUS;
        (near(&self.right) && ball.x > self.return_x) || (near(&self.left) && ball.x < -self.return_x)
    }

    /// A ball past the right edge is a point for the left player and vice versa.
    fn goal_scored(&self) -> Option<Side> {
        let x = self.ball.position().x;
        if x > self.goal_x {
            Some(Side::Left)
        } else if x < -self.goal_x {
            Some(Side::Right)
        } else {
            None
        }
    }

    fn paint(&self, ctx: &mut Context) {
        paint_sprite(ctx, self.left.sprite());
        paint_sprite(ctx, self.right.sprite());
        paint_sprite(ctx, self.ball.sprite());

        let (left, right) = self.scoreboard.displayed();
        let score_style = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);
        ctx.print(-100.0, 200.0, Span::styled(left.to_string(), score_style));
        ctx.print(100.0, 200.0, Span::styled(right.to_string(), score_style));
    }
}

impl Game for Pong {
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
                self.paused = !self.paused;
                // Ball stays hidden while paused.
                self.ball.set_visible(!self.paused);
                info!("pong paused: {}", self.paused);
            }
            _ => {
                if self.paused {
                    return;
                }
                match key.code {
                    KeyCode::Up => self.right.move_up(),
                    KeyCode::Down => self.right.move_down(),
                    KeyCode::Char('w') | KeyCode::Char('W') => self.left.move_up(),
                    KeyCode::Char('s') | KeyCode::Char('S') => self.left.move_down(),
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
            .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
            .title(format!(" 🏓 {} ", self.window.title))
            .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD));
        render_world(frame, chunks[0], &self.window, block, |ctx| self.paint(ctx));

        let help = if self.paused {
            Line::from(vec![Span::styled(
                " ⏸ PAUSED - Press P to resume ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )])
        } else {
            Line::from(vec![
                Span::styled(" W/S Left paddle ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("↑↓ Right paddle ", Style::default().fg(Color::DarkGray)),
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

    fn reset(&mut self) {
        *self = Pong::new(self.window.clone(), self.clamp_paddles);
    }

    fn tick_delay(&self) -> Duration {
        self.ball.delay()
    }

    /// Best side's points; Pong has no final result.
    fn get_score(&self) -> u32 {
        self.scoreboard.left().max(self.scoreboard.right())
    }

    fn is_game_over(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Vec2;
    use crossterm::event::KeyModifiers;

    fn pong() -> Pong {
        Pong::new(WindowConfig::pong(), true)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn geometry_follows_the_window() {
        let game = pong();
        assert_eq!(game.left_paddle().position(), Vec2::new(-350.0, 0.0));
        assert_eq!(game.right_paddle().position(), Vec2::new(350.0, 0.0));
        assert_eq!(game.wall_y, 280.0);
        assert_eq!(game.goal_x, 400.0);
        assert_eq!(game.return_x, 320.0);
    }

    #[test]
    fn ball_past_right_edge_scores_for_left() {
        let mut game = pong();
        game.ball.place(Vec2::new(395.0, 0.0), Vec2::new(10.0, 0.0));

        assert_eq!(game.step(), Some(Side::Left));

        assert_eq!(game.scoreboard().left(), 1);
        assert_eq!(game.scoreboard().right(), 0);
        assert_eq!(game.scoreboard().displayed(), (1, 0));
        assert_eq!(game.ball().position(), Vec2::ZERO);
        assert_eq!(game.ball().velocity(), Vec2::new(-10.0, 0.0));
        assert_eq!(game.ball().delay(), ball::BASE_DELAY);
    }

    #[test]
    fn goal_line_is_strict() {
        let mut game = pong();
        game.ball.place(Vec2::new(391.0, 200.0), Vec2::new(10.0, 0.0));
        assert_eq!(game.step(), Some(Side::Left));

        let mut game = pong();
        game.ball.place(Vec2::new(-391.0, -200.0), Vec2::new(-10.0, 0.0));
        assert_eq!(game.step(), Some(Side::Right));
        assert_eq!(game.scoreboard().right(), 1);

        let mut game = pong();
        game.ball.place(Vec2::new(390.0, 100.0), Vec2::new(10.0, 0.0));
        assert_eq!(game.step(), None);
        assert_eq!(game.ball().position(), Vec2::new(400.0, 100.0));
        assert_eq!(game.scoreboard().left(), 0);
    }

    #[test]
    fn serve_keeps_vertical_direction() {
        let mut game = pong();
        game.ball.place(Vec2::new(-395.0, 40.0), Vec2::new(-10.0, -10.0));
        game.step();
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, -10.0));
    }

    #[test]
    fn wall_flips_dy_without_correction() {
        let mut game = pong();
        game.ball.place(Vec2::new(0.0, 275.0), Vec2::new(10.0, 10.0));
        game.step();
        assert_eq!(game.ball().position(), Vec2::new(10.0, 285.0));
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, -10.0));

        game.ball.place(Vec2::new(0.0, 270.0), Vec2::new(10.0, 10.0));
        game.step();
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn right_paddle_returns_ball_and_speeds_up() {
        let mut game = pong();
        game.ball.place(Vec2::new(320.0, 10.0), Vec2::new(10.0, 0.0));

        assert_eq!(game.step(), None);

        assert_eq!(game.ball().velocity(), Vec2::new(-10.0, 0.0));
        let expected = 0.1 * 0.9;
        assert!((game.ball().delay().as_secs_f64() - expected).abs() < 1e-6);
        assert_eq!(game.tick_delay(), game.ball().delay());
    }

    #[test]
    fn left_paddle_returns_ball() {
        let mut game = pong();
        game.ball.place(Vec2::new(-320.0, -10.0), Vec2::new(-10.0, 0.0));
        game.step();
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn paddle_needs_ball_past_return_line() {
        // Close enough to the paddle but still in front of it.
        let mut game = pong();
        game.ball.place(Vec2::new(300.0, 0.0), Vec2::new(10.0, 0.0));
        game.step();
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn return_line_itself_is_not_past_it() {
        let mut game = pong();
        game.ball.place(Vec2::new(310.0, 0.0), Vec2::new(10.0, 0.0));
        game.step();
        assert_eq!(game.ball().position(), Vec2::new(320.0, 0.0));
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, 0.0));

        let mut game = pong();
        game.ball.place(Vec2::new(-310.0, 0.0), Vec2::new(-10.0, 0.0));
        game.step();
        assert_eq!(game.ball().position(), Vec2::new(-320.0, 0.0));
        assert_eq!(game.ball().velocity(), Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn paddle_reach_is_strict() {
        let mut game = pong();
        game.ball.place(Vec2::new(340.0, 55.0), Vec2::new(10.0, 0.0));
        game.step();
        assert_eq!(game.ball().position().distance(game.right_paddle().position()), 55.0);
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, 0.0));

        let mut game = pong();
        game.ball.place(Vec2::new(340.0, 54.9), Vec2::new(10.0, 0.0));
        game.step();
        assert_eq!(game.ball().velocity(), Vec2::new(-10.0, 0.0));
        assert!(game.ball().delay() < ball::BASE_DELAY);
    }

    #[test]
    fn missed_paddle_lets_ball_through() {
        let mut game = pong();
        game.ball.place(Vec2::new(320.0, 200.0), Vec2::new(10.0, 0.0));
        game.step();
        assert_eq!(game.ball().velocity(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn wall_and_paddle_can_fire_together() {
        let mut game = pong();
        for _ in 0..12 {
            game.handle_input(key(KeyCode::Up));
        }
        assert_eq!(game.right_paddle().position().y, 240.0);

        game.ball.place(Vec2::new(325.0, 275.0), Vec2::new(10.0, 10.0));
        game.step();
        assert_eq!(game.ball().velocity(), Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn keys_drive_the_paddles() {
        let mut game = pong();
        game.handle_input(key(KeyCode::Up));
        game.handle_input(key(KeyCode::Char('s')));
        game.handle_input(key(KeyCode::Char('s')));
        assert_eq!(game.right_paddle().position().y, 20.0);
        assert_eq!(game.left_paddle().position().y, -40.0);
    }

    #[test]
    fn pause_freezes_ball_and_paddles() {
        let mut game = pong();
        game.handle_input(key(KeyCode::Char('p')));
        assert!(game.is_paused());
        assert!(!game.ball().sprite().is_visible());

        game.update();
        game.handle_input(key(KeyCode::Up));
        assert_eq!(game.ball().position(), Vec2::ZERO);
        assert_eq!(game.right_paddle().position().y, 0.0);

        game.handle_input(key(KeyCode::Char('p')));
        assert!(game.ball().sprite().is_visible());
        game.update();
        assert_eq!(game.ball().position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn restart_clears_score() {
        let mut game = pong();
        game.ball.place(Vec2::new(395.0, 0.0), Vec2::new(10.0, 0.0));
        game.step();
        assert_eq!(game.get_score(), 1);

        game.handle_input(key(KeyCode::Char('r')));
        assert_eq!(game.get_score(), 0);
        assert_eq!(game.scoreboard().displayed(), (0, 0));
        assert!(!game.is_game_over());
    }
}
