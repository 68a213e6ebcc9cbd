//! Game settings data model.
//!
//! Every game window owns one settings payload. The payload folds its fields
//! into a single integer summary (`params_sum`) which the window adds to its
//! area when computing memory.
//!
//! - Base settings shared by every game (brightness, volume, quality,
//!   difficulty, language)
//! - Rock-Paper-Scissors settings (max rounds)
//! - Tic-Tac-Toe settings (field size)
//! - Sudoku settings (remaining time, decremented on every read)

use serde::{Deserialize, Serialize};

use crate::game_window::GameKind;

/// Default brightness.
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;
/// Default volume.
pub const DEFAULT_VOLUME: f32 = 0.5;
/// Default number of Rock-Paper-Scissors rounds.
pub const DEFAULT_MAX_ROUNDS: i32 = 3;
/// Default Tic-Tac-Toe field size.
pub const DEFAULT_FIELD_SIZE: i32 = 3;
/// Default Sudoku time budget.
pub const DEFAULT_REMAINING_TIME: i32 = 5;

// ============================================================================
// Enumerations
// ============================================================================

/// Graphics quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Low quality.
    Low,
    /// Medium quality.
    #[default]
    Mid,
    /// High quality.
    High,
}

impl Quality {
    /// Weight contributed to the settings summary.
    #[must_use]
    pub const fn weight(self) -> i32 {
        self as i32
    }
}

/// Game difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Easy difficulty.
    Easy,
    /// Medium difficulty.
    #[default]
    Medium,
    /// Hard difficulty.
    Hard,
}

impl Difficulty {
    /// Weight contributed to the settings summary.
    #[must_use]
    pub const fn weight(self) -> i32 {
        self as i32
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English.
    #[default]
    English,
    /// Russian.
    Russian,
    /// Spanish.
    Spanish,
}

impl Language {
    /// Weight contributed to the settings summary.
    #[must_use]
    pub const fn weight(self) -> i32 {
        self as i32
    }
}

// ============================================================================
// Base Settings
// ============================================================================

/// Settings shared by every game.
///
/// Fields are stored verbatim. Brightness and volume are meant to lie in
/// `[0, 1]` but nothing enforces it; see [`Settings::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Brightness (0.0 to 1.0).
    pub brightness: f32,
    /// Volume (0.0 to 1.0).
    pub volume: f32,
    /// Graphics quality.
    pub quality: Quality,
    /// Game difficulty.
    pub difficulty: Difficulty,
    /// Interface language.
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            volume: DEFAULT_VOLUME,
            quality: Quality::default(),
            difficulty: Difficulty::default(),
            language: Language::default(),
        }
    }
}

impl Settings {
    /// Create settings from explicit values.
    #[must_use]
    pub const fn new(
        brightness: f32,
        volume: f32,
        quality: Quality,
        difficulty: Difficulty,
        language: Language,
    ) -> Self {
        Self {
            brightness,
            volume,
            quality,
            difficulty,
            language,
        }
    }

    /// Summary of the settings: `100*brightness + 100*volume + quality +
    /// difficulty + language`, evaluated in `f32` and truncated toward zero.
    #[must_use]
    pub fn params_sum(&self) -> i32 {
        let sum = 100.0 * self.brightness
            + 100.0 * self.volume
            + self.quality.weight() as f32
            + self.difficulty.weight() as f32
            + self.language.weight() as f32;
        sum as i32
    }

    /// Report values outside their intended ranges. Never modifies anything.
    ///
    /// Non-finite brightness or volume is an error: the summary of such
    /// settings has no meaning. Finite values outside `0.0..=1.0` are only
    /// warnings.
    #[must_use]
    pub fn validate(&self) -> SettingsValidation {
        let mut validation = SettingsValidation::new();

        let levels = [("brightness", self.brightness), ("volume", self.volume)];
        for (name, level) in levels {
            if !level.is_finite() {
                validation.add_error(&format!("{name} must be a finite number ({level})"));
            } else if !(0.0..=1.0).contains(&level) {
                validation.add_warning(&format!("{name} is outside 0.0..=1.0 ({level})"));
            }
        }

        validation
    }
}

// ============================================================================
// Game-specific Settings
// ============================================================================

/// Rock-Paper-Scissors settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RockPaperScissorsSettings {
    /// Shared settings.
    pub base: Settings,
    /// Number of rounds in a match.
    pub max_rounds: i32,
}

impl Default for RockPaperScissorsSettings {
    fn default() -> Self {
        Self::new(Settings::default(), DEFAULT_MAX_ROUNDS)
    }
}

impl RockPaperScissorsSettings {
    /// Create Rock-Paper-Scissors settings.
    #[must_use]
    pub const fn new(base: Settings, max_rounds: i32) -> Self {
        Self { base, max_rounds }
    }

    /// Base summary plus the round count, saturating at the `i32` bounds.
    #[must_use]
    pub fn params_sum(&self) -> i32 {
        self.base.params_sum().saturating_add(self.max_rounds)
    }
}

/// Tic-Tac-Toe settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    /// Shared settings.
    pub base: Settings,
    /// Side length of the board.
    pub field_size: i32,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self::new(Settings::default(), DEFAULT_FIELD_SIZE)
    }
}

impl TicTacToeSettings {
    /// Create Tic-Tac-Toe settings.
    #[must_use]
    pub const fn new(base: Settings, field_size: i32) -> Self {
        Self { base, field_size }
    }

    /// Base summary plus the field size, saturating at the `i32` bounds.
    #[must_use]
    pub fn params_sum(&self) -> i32 {
        self.base.params_sum().saturating_add(self.field_size)
    }
}

/// Sudoku settings.
///
/// Reading the summary spends one unit of remaining time. Once the counter
/// reaches zero the summary is 0, and the counter keeps going negative on
/// every further read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SudokuSettings {
    /// Shared settings.
    pub base: Settings,
    remaining_time: i32,
}

impl Default for SudokuSettings {
    fn default() -> Self {
        Self::new(Settings::default(), DEFAULT_REMAINING_TIME)
    }
}

impl SudokuSettings {
    /// Create Sudoku settings.
    #[must_use]
    pub const fn new(base: Settings, remaining_time: i32) -> Self {
        Self {
            base,
            remaining_time,
        }
    }

    /// Time left on the clock. May be negative after the game has ended.
    #[must_use]
    pub const fn remaining_time(&self) -> i32 {
        self.remaining_time
    }

    /// Spend one unit of time, then return 0 if the clock has run out or the
    /// base summary plus the time still left. Arithmetic saturates at the
    /// `i32` bounds.
    pub fn params_sum(&mut self) -> i32 {
        self.remaining_time = self.remaining_time.saturating_sub(1);
        if self.remaining_time <= 0 {
            return 0;
        }

        self.base.params_sum().saturating_add(self.remaining_time)
    }
}

// ============================================================================
// Tagged Settings
// ============================================================================

/// Settings payload owned by a game window, one variant per game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameSettings {
    /// Rock-Paper-Scissors settings.
    RockPaperScissors(RockPaperScissorsSettings),
    /// Tic-Tac-Toe settings.
    TicTacToe(TicTacToeSettings),
    /// Sudoku settings.
    Sudoku(SudokuSettings),
}

impl GameSettings {
    /// Build the payload for `kind` from shared settings and the game's extra
    /// field (max rounds, field size, or remaining time).
    #[must_use]
    pub const fn for_kind(kind: GameKind, base: Settings, extra: i32) -> Self {
        match kind {
            GameKind::RockPaperScissors => {
                Self::RockPaperScissors(RockPaperScissorsSettings::new(base, extra))
            },
            GameKind::TicTacToe => Self::TicTacToe(TicTacToeSettings::new(base, extra)),
            GameKind::Sudoku => Self::Sudoku(SudokuSettings::new(base, extra)),
        }
    }

    /// Which game these settings belong to.
    #[must_use]
    pub const fn kind(&self) -> GameKind {
        match self {
            Self::RockPaperScissors(_) => GameKind::RockPaperScissors,
            Self::TicTacToe(_) => GameKind::TicTacToe,
            Self::Sudoku(_) => GameKind::Sudoku,
        }
    }

    /// Shared settings.
    #[must_use]
    pub const fn base(&self) -> &Settings {
        match self {
            Self::RockPaperScissors(s) => &s.base,
            Self::TicTacToe(s) => &s.base,
            Self::Sudoku(s) => &s.base,
        }
    }

    /// The game's extra field.
    #[must_use]
    pub const fn extra(&self) -> i32 {
        match self {
            Self::RockPaperScissors(s) => s.max_rounds,
            Self::TicTacToe(s) => s.field_size,
            Self::Sudoku(s) => s.remaining_time,
        }
    }

    /// Summary of the payload. Takes `&mut self` because reading Sudoku
    /// settings spends time.
    pub fn params_sum(&mut self) -> i32 {
        match self {
            Self::RockPaperScissors(s) => s.params_sum(),
            Self::TicTacToe(s) => s.params_sum(),
            Self::Sudoku(s) => s.params_sum(),
        }
    }

    /// Validate the shared settings and the extra field.
    #[must_use]
    pub fn validate(&self) -> SettingsValidation {
        let mut validation = self.base().validate();
        if self.extra() < 0 {
            validation.add_warning(&format!(
                "{} extra parameter is negative ({})",
                self.kind().name(),
                self.extra()
            ));
        }
        validation
    }
}

impl From<RockPaperScissorsSettings> for GameSettings {
    fn from(settings: RockPaperScissorsSettings) -> Self {
        Self::RockPaperScissors(settings)
    }
}

impl From<TicTacToeSettings> for GameSettings {
    fn from(settings: TicTacToeSettings) -> Self {
        Self::TicTacToe(settings)
    }
}

impl From<SudokuSettings> for GameSettings {
    fn from(settings: SudokuSettings) -> Self {
        Self::Sudoku(settings)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validation result for settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsValidation {
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl SettingsValidation {
    /// Create empty validation result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error.
    pub fn add_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    /// Check if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Merge another validation result.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}
