//! Game windows.
//!
//! A game window is a [`Window`] that exclusively owns a [`GameSettings`]
//! payload. Its memory figure is the window area plus the settings summary,
//! or 0 when the summary is 0. The set of games is closed, so the game is a
//! tag ([`GameKind`]) rather than a trait object.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::settings::{
    GameSettings, RockPaperScissorsSettings, SudokuSettings, TicTacToeSettings,
};
use crate::window::Window;

/// Which game a window runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    /// Rock-Paper-Scissors.
    RockPaperScissors,
    /// Tic-Tac-Toe.
    TicTacToe,
    /// Sudoku.
    Sudoku,
}

impl GameKind {
    /// Name used in status lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RockPaperScissors => "RockPaperScissors",
            Self::TicTacToe => "TicTacToe",
            Self::Sudoku => "Sudoku",
        }
    }

    /// Whether a zero memory figure ends the game.
    #[must_use]
    pub const fn ends_on_zero_memory(self) -> bool {
        matches!(self, Self::Sudoku)
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a game window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameState {
    /// The game is running.
    #[default]
    Active,
    /// The game has ended. Only Sudoku gets here.
    Ended,
}

/// Result of one game action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The action ran with the given memory figure.
    Performed {
        /// Game that acted.
        kind: GameKind,
        /// Memory figure after recomputation.
        memory: i64,
    },
    /// The game has ended.
    GameEnded {
        /// Game that ended.
        kind: GameKind,
    },
}

impl ActionOutcome {
    /// Game that produced this outcome.
    #[must_use]
    pub const fn kind(&self) -> GameKind {
        match self {
            Self::Performed { kind, .. } | Self::GameEnded { kind } => *kind,
        }
    }

    /// Memory figure reported by the action (0 when the game ended).
    #[must_use]
    pub const fn memory(&self) -> i64 {
        match self {
            Self::Performed { memory, .. } => *memory,
            Self::GameEnded { .. } => 0,
        }
    }

    /// Check if the game ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::GameEnded { .. })
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Performed { kind, memory } => write!(
                f,
                "{kind} game window is performing an action with memory needed: {memory}"
            ),
            Self::GameEnded { kind } => write!(f, "{kind} game ended!"),
        }
    }
}

/// A window running one game with its own settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWindow {
    window: Window,
    settings: GameSettings,
    state: GameState,
}

impl GameWindow {
    /// Create a game window that takes ownership of `settings`.
    ///
    /// The memory figure starts as the plain window area. Settings are first
    /// read on the next recomputation, so constructing a Sudoku window does
    /// not spend any of its time.
    #[must_use]
    pub fn new(height: i32, width: i32, admin_rights: bool, settings: GameSettings) -> Self {
        let window = Window::new(height, width, admin_rights);
        info!(
            "Opened {} window {} ({})",
            settings.kind(),
            window.id(),
            window.geometry()
        );

        Self {
            window,
            settings,
            state: GameState::Active,
        }
    }

    /// Create a Rock-Paper-Scissors window.
    #[must_use]
    pub fn rock_paper_scissors(
        height: i32,
        width: i32,
        admin_rights: bool,
        settings: RockPaperScissorsSettings,
    ) -> Self {
        Self::new(height, width, admin_rights, settings.into())
    }

    /// Create a Tic-Tac-Toe window.
    #[must_use]
    pub fn tic_tac_toe(
        height: i32,
        width: i32,
        admin_rights: bool,
        settings: TicTacToeSettings,
    ) -> Self {
        Self::new(height, width, admin_rights, settings.into())
    }

    /// Create a Sudoku window.
    #[must_use]
    pub fn sudoku(height: i32, width: i32, admin_rights: bool, settings: SudokuSettings) -> Self {
        Self::new(height, width, admin_rights, settings.into())
    }

    /// Memory for a game window.
    ///
    /// Reads the settings summary exactly once. A zero summary forces the
    /// figure to 0 regardless of geometry; otherwise it is area plus summary.
    pub fn calculate_memory(&mut self) -> i64 {
        let sum = self.settings.params_sum();
        if sum == 0 {
            return 0;
        }

        self.window.calculate_memory() + i64::from(sum)
    }

    /// Recompute memory and report the result without printing.
    pub fn perform_action(&mut self) -> ActionOutcome {
        let memory = self.calculate_memory();
        self.window.set_memory_needed(memory);

        let kind = self.kind();
        let outcome = if memory == 0 && kind.ends_on_zero_memory() {
            if self.state != GameState::Ended {
                info!("{kind} window {} ended", self.window.id());
            }
            self.state = GameState::Ended;
            ActionOutcome::GameEnded { kind }
        } else {
            ActionOutcome::Performed { kind, memory }
        };

        debug!("{kind} window {} action: {outcome:?}", self.window.id());
        outcome
    }

    /// Perform the action and write its status line to `out`.
    pub fn do_action<W: Write>(&mut self, out: &mut W) -> io::Result<ActionOutcome> {
        let outcome = self.perform_action();
        writeln!(out, "{outcome}")?;
        Ok(outcome)
    }

    /// Flip between shown and hidden.
    pub fn toggle_visibility(&mut self) {
        self.window.toggle_visibility();
    }

    /// Game this window runs.
    #[must_use]
    pub const fn kind(&self) -> GameKind {
        self.settings.kind()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Owned settings.
    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Underlying window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Memory figure from the most recent computation.
    #[must_use]
    pub const fn memory_needed(&self) -> i64 {
        self.window.memory_needed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Difficulty, Language, Quality, Settings};
    use proptest::prelude::*;

    fn rps_window() -> GameWindow {
        let base = Settings::new(0.7, 0.3, Quality::Mid, Difficulty::Easy, Language::Russian);
        GameWindow::rock_paper_scissors(700, 600, true, RockPaperScissorsSettings::new(base, 2))
    }

    fn sudoku_window(remaining_time: i32) -> GameWindow {
        let base = Settings::new(0.4, 0.6, Quality::High, Difficulty::Medium, Language::English);
        GameWindow::sudoku(600, 1000, true, SudokuSettings::new(base, remaining_time))
    }

    /// Settings whose summary is exactly zero.
    fn zero_base() -> Settings {
        Settings::new(0.0, 0.0, Quality::Low, Difficulty::Easy, Language::English)
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(GameKind::RockPaperScissors.to_string(), "RockPaperScissors");
        assert_eq!(GameKind::TicTacToe.name(), "TicTacToe");
        assert_eq!(GameKind::Sudoku.name(), "Sudoku");
    }

    #[test]
    fn test_construction_uses_area_only() {
        let window = sudoku_window(2);
        assert_eq!(window.memory_needed(), 600_000);
        assert_eq!(window.settings().extra(), 2);
        assert_eq!(window.state(), GameState::Active);
    }

    #[test]
    fn test_rock_paper_scissors_action() {
        let mut window = rps_window();
        let outcome = window.perform_action();

        assert_eq!(
            outcome,
            ActionOutcome::Performed {
                kind: GameKind::RockPaperScissors,
                memory: 420_104,
            }
        );
        assert_eq!(window.memory_needed(), 420_104);
        assert_eq!(
            outcome.to_string(),
            "RockPaperScissors game window is performing an action with memory needed: 420104"
        );
    }

    #[test]
    fn test_tic_tac_toe_defaults() {
        let mut window = GameWindow::tic_tac_toe(500, 500, true, TicTacToeSettings::default());
        assert_eq!(window.perform_action().memory(), 250_105);
        assert_eq!(window.perform_action().memory(), 250_105);
    }

    #[test]
    fn test_sudoku_ends_on_second_action() {
        let mut window = sudoku_window(2);

        let first = window.perform_action();
        assert_eq!(first.memory(), 600_104);
        assert!(!first.is_game_over());
        assert_eq!(window.state(), GameState::Active);

        let second = window.perform_action();
        assert!(second.is_game_over());
        assert_eq!(second.to_string(), "Sudoku game ended!");
        assert_eq!(window.memory_needed(), 0);
        assert_eq!(window.state(), GameState::Ended);
    }

    #[test]
    fn test_ended_window_stays_usable() {
        let mut window = sudoku_window(1);
        assert!(window.perform_action().is_game_over());

        window.toggle_visibility();
        assert!(!window.window().is_shown());
        assert!(window.perform_action().is_game_over());
        assert_eq!(window.settings().extra(), -1);
    }

    #[test]
    fn test_zero_summary_forces_zero_memory() {
        let mut window = GameWindow::new(
            300,
            300,
            false,
            GameSettings::for_kind(GameKind::TicTacToe, zero_base(), 0),
        );
        assert_eq!(window.calculate_memory(), 0);

        // Only Sudoku treats zero memory as the end of the game.
        let outcome = window.perform_action();
        assert_eq!(
            outcome.to_string(),
            "TicTacToe game window is performing an action with memory needed: 0"
        );
        assert_eq!(window.state(), GameState::Active);
    }

    #[test]
    fn test_huge_field_size_does_not_overflow() {
        let mut window = GameWindow::new(
            1000,
            1000,
            false,
            GameSettings::for_kind(GameKind::TicTacToe, Settings::default(), i32::MAX),
        );
        assert_eq!(
            window.perform_action().memory(),
            1_000_000 + i64::from(i32::MAX)
        );
    }

    #[test]
    fn test_do_action_writes_line() {
        let mut window = sudoku_window(2);
        let mut out = Vec::new();

        window.do_action(&mut out).expect("write to vec");
        window.do_action(&mut out).expect("write to vec");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "Sudoku game window is performing an action with memory needed: 600104\n\
             Sudoku game ended!\n"
        );
    }

    proptest! {
        #[test]
        fn memory_is_zero_exactly_when_summary_is_zero(
            h in -2000i32..2000,
            w in -2000i32..2000,
            extra in -300i32..300,
        ) {
            let settings = GameSettings::for_kind(GameKind::RockPaperScissors, zero_base(), extra);
            let mut probe = settings;
            let sum = probe.params_sum();

            let mut window = GameWindow::new(h, w, false, settings);
            let memory = window.calculate_memory();

            if sum == 0 {
                prop_assert_eq!(memory, 0);
            } else {
                prop_assert_eq!(memory, i64::from(h) * i64::from(w) + i64::from(sum));
            }
        }
    }
}
