//! Score counters. Bumping a counter never touches what is on screen: the
//! loop calls `refresh` after a scoring event and only then does the
//! displayed value catch up.

/// Left/right points for Pong.
#[derive(Clone, Debug, Default)]
pub struct PongScoreboard {
    left: u32,
    right: u32,
    shown: (u32, u32),
}

impl PongScoreboard {
    pub fn new() -> Self {
        let mut board = Self::default();
        board.refresh();
        board
    }

    pub fn point_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn point_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn refresh(&mut self) {
        self.shown = (self.left, self.right);
    }

    /// What the canvas currently shows as `(left, right)`.
    pub fn displayed(&self) -> (u32, u32) {
        self.shown
    }
}

/// Level counter and game-over banner for Turtle Crossing.
#[derive(Clone, Debug)]
pub struct LevelScoreboard {
    level: u32,
    shown_level: u32,
    game_over: bool,
}

impl Default for LevelScoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelScoreboard {
    pub fn new() -> Self {
        Self {
            level: 1,
            shown_level: 1,
            game_over: false,
        }
    }

    pub fn increase_level(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn refresh(&mut self) {
        self.shown_level = self.level;
    }

    pub fn displayed_level(&self) -> u32 {
        self.shown_level
    }

    pub fn label(&self) -> String {
        format!("Level: {}", self.shown_level)
    }

    /// Puts up the "GAME OVER" banner. The counters stay as they were.
    pub fn game_over(&mut self) {
        self.game_over = true;
    }

    pub fn shows_game_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pong_points_diverge_until_refresh() {
        let mut board = PongScoreboard::new();
        board.point_left();
        board.point_left();
        board.point_right();

        assert_eq!((board.left(), board.right()), (2, 1));
        assert_eq!(board.displayed(), (0, 0));

        board.refresh();
        assert_eq!(board.displayed(), (2, 1));
    }

    #[test]
    fn level_starts_at_one() {
        let board = LevelScoreboard::new();
        assert_eq!(board.level(), 1);
        assert_eq!(board.label(), "Level: 1");
        assert!(!board.shows_game_over());
    }

    #[test]
    fn level_label_waits_for_refresh() {
        let mut board = LevelScoreboard::new();
        board.increase_level();
        assert_eq!(board.level(), 2);
        assert_eq!(board.displayed_level(), 1);
        assert_eq!(board.label(), "Level: 1");

        board.refresh();
        assert_eq!(board.label(), "Level: 2");
    }

    #[test]
    fn game_over_keeps_level() {
        let mut board = LevelScoreboard::new();
        board.increase_level();
        board.refresh();
        board.game_over();
        assert!(board.shows_game_over());
        assert_eq!(board.level(), 2);
        assert_eq!(board.displayed_level(), 2);
    }
}
