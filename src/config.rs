use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use ratatui::style::Color;
use thiserror::Error;

/// Smallest canvas extent (world units, either axis) that still fits the fixed game geometry.
pub const MIN_CANVAS_EXTENT: f32 = 200.0;
const MAX_FRAME_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("canvas size {width}x{height} is not usable")]
    InvalidSize { width: f32, height: f32 },
    #[error("canvas {width}x{height} is smaller than the minimum of {min}x{min}")]
    CanvasTooSmall { width: f32, height: f32, min: f32 },
    #[error("window title must not be empty")]
    EmptyTitle,
    #[error("frame cadence of {0} ms is outside 1..={}", MAX_FRAME_MS)]
    FrameCadence(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StartGame {
    Pong,
    Crossing,
}

#[derive(Debug, Parser)]
#[command(name = "turtle-arcade", version, about = "Pong and Turtle Crossing in the terminal")]
pub struct Cli {
    /// Open a game directly instead of the home screen
    #[arg(long, value_enum)]
    pub game: Option<StartGame>,

    /// Redraw and input poll cadence in milliseconds
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// Seed for the car spawner (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let paddles travel past the top and bottom of the table
    #[arg(long)]
    pub free_paddles: bool,

    /// Write logs to this file (RUST_LOG picks the level)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Where personal bests are stored
    #[arg(long)]
    pub scores_file: Option<PathBuf>,
}

/// Logical canvas of one game. Coordinates run from `-width/2..width/2` and
/// `-height/2..height/2` with the origin in the centre.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub background: Color,
}

impl WindowConfig {
    pub fn pong() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Ping Pong".to_string(),
            background: Color::Blue,
        }
    }

    pub fn crossing() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            title: "Turtle Crossing".to_string(),
            background: Color::White,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let hw = f64::from(self.half_width());
        [-hw, hw]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        let hh = f64::from(self.half_height());
        [-hh, hh]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return Err(ConfigError::InvalidSize { width: self.width, height: self.height });
        }
        if self.width < MIN_CANVAS_EXTENT || self.height < MIN_CANVAS_EXTENT {
            return Err(ConfigError::CanvasTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_CANVAS_EXTENT,
            });
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub start_game: Option<StartGame>,
    pub frame: Duration,
    pub seed: Option<u64>,
    pub clamp_paddles: bool,
    pub log_file: Option<PathBuf>,
    pub scores_file: Option<PathBuf>,
    pub pong_window: WindowConfig,
    pub crossing_window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_game: None,
            frame: Duration::from_millis(16),
            seed: None,
            clamp_paddles: true,
            log_file: None,
            scores_file: None,
            pong_window: WindowConfig::pong(),
            crossing_window: WindowConfig::crossing(),
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.frame_ms == 0 || cli.frame_ms > MAX_FRAME_MS {
            return Err(ConfigError::FrameCadence(cli.frame_ms));
        }
        let config = Self {
            start_game: cli.game,
            frame: Duration::from_millis(cli.frame_ms),
            seed: cli.seed,
            clamp_paddles: !cli.free_paddles,
            log_file: cli.log_file,
            scores_file: cli.scores_file,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ms = self.frame.as_millis();
        if ms == 0 || ms > u128::from(MAX_FRAME_MS) {
            return Err(ConfigError::FrameCadence(ms.min(u128::from(u64::MAX)) as u64));
        }
        self.pong_window.validate()?;
        self.crossing_window.validate()
    }
}
