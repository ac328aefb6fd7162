use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clock::{run_steps, FixedStep};
use crate::config::{Config, StartGame};
use crate::games::crossing::Crossing;
use crate::games::pong::Pong;
use crate::games::Game;
use crate::scores::{PersonalBests, Record};

pub const NUM_GAMES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tab {
    Home,
    Pong,
    Crossing,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Pong, Tab::Crossing]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => " Home ",
            Tab::Pong => " Pong ",
            Tab::Crossing => " Turtle Crossing ",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Pong => 1,
            Tab::Crossing => 2,
        }
    }

    fn for_game(game_idx: usize) -> Tab {
        match game_idx {
            0 => Tab::Pong,
            1 => Tab::Crossing,
            _ => Tab::Home,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub current_tab: Tab,
    pub selected_game: usize, // 0-1 for home screen game selection
    pub pong: Pong,
    pub crossing: Crossing,
    pub bests: PersonalBests,
    pub show_bests: bool,
    clock: FixedStep,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let current_tab = match config.start_game {
            Some(StartGame::Pong) => Tab::Pong,
            Some(StartGame::Crossing) => Tab::Crossing,
            None => Tab::Home,
        };
        Self {
            should_quit: false,
            current_tab,
            selected_game: 0,
            pong: Pong::new(config.pong_window.clone(), config.clamp_paddles),
            crossing: Crossing::new(config.crossing_window.clone(), config.seed),
            bests: PersonalBests::load(config.scores_file.clone()),
            show_bests: false,
            clock: FixedStep::new(),
        }
    }

    /// Feeds wall-clock time to the active game, which ticks at its own cadence.
    pub fn on_tick(&mut self, elapsed: Duration) {
        self.clock.accumulate(elapsed);
        match self.current_tab {
            Tab::Home => self.clock.reset(),
            Tab::Pong => {
                run_steps(&mut self.clock, &mut self.pong, Pong::tick_delay, Pong::update);
                self.bests.submit(Record::PongPoints, self.pong.get_score());
            }
            Tab::Crossing => {
                run_steps(&mut self.clock, &mut self.crossing, Crossing::tick_delay, Crossing::update);
                self.bests.submit(Record::CrossingLevel, self.crossing.get_score());
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                if matches!(self.current_tab, Tab::Home) {
                    self.should_quit = true;
                    return;
                }
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.prev_tab();
                } else {
                    self.next_tab();
                }
                return;
            }
            KeyCode::BackTab => {
                self.prev_tab();
                return;
            }
            KeyCode::Esc => {
                if !matches!(self.current_tab, Tab::Home) {
                    self.switch_to(Tab::Home);
                    return;
                }
            }
            _ => {}
        }

        // Home screen shortcuts and navigation
        if matches!(self.current_tab, Tab::Home) && key.modifiers.is_empty() {
            match key.code {
                KeyCode::Char('1') => self.switch_to(Tab::Pong),
                KeyCode::Char('2') => self.switch_to(Tab::Crossing),
                KeyCode::Char('h') | KeyCode::Char('H') => self.show_bests = !self.show_bests,
                KeyCode::Right | KeyCode::Down => {
                    self.selected_game = (self.selected_game + 1) % NUM_GAMES;
                }
                KeyCode::Left | KeyCode::Up => {
                    self.selected_game = (self.selected_game + NUM_GAMES - 1) % NUM_GAMES;
                }
                KeyCode::Enter => self.switch_to(Tab::for_game(self.selected_game)),
                _ => {}
            }
            return;
        }

        // Forward to active game
        match self.current_tab {
            Tab::Home => {}
            Tab::Pong => self.pong.handle_input(key),
            Tab::Crossing => self.crossing.handle_input(key),
        }
    }

    fn switch_to(&mut self, tab: Tab) {
        self.current_tab = tab;
        // Time spent on another tab must not fast-forward this one.
        self.clock.reset();
    }

    fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.switch_to(tabs[(idx + 1) % tabs.len()]);
    }

    fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.switch_to(tabs[(idx + tabs.len() - 1) % tabs.len()]);
    }
}
