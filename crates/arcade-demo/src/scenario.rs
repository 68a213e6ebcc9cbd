//! Scenario configuration.
//!
//! The demo runs one fixed scenario. It is described in `scenario.toml`,
//! which is embedded into the binary; nothing is read from disk at runtime.
//! If the embedded description fails to parse, the same scenario is rebuilt
//! from [`ScenarioConfig::default`].

use arcade_common::{ScenarioError, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use arcade_games::{
    Difficulty, GameKind, GameSettings, GameWindow, Language, Quality, Settings,
    SettingsValidation, DEFAULT_FIELD_SIZE, DEFAULT_MAX_ROUNDS, DEFAULT_REMAINING_TIME,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Scenario description compiled into the binary.
const EMBEDDED_SCENARIO: &str = include_str!("../scenario.toml");

/// The windows to open and how many actions each performs, in order.
///
/// A description without windows, whether the key is missing or the list is
/// empty, is rejected with [`ScenarioError::Empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Windows in the order they are opened.
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
}

/// One window of the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Game the window runs.
    pub game: GameKind,
    /// Window height in pixels
    #[serde(default = "default_height")]
    pub height: i32,
    /// Window width in pixels
    #[serde(default = "default_width")]
    pub width: i32,
    /// Open with administrator rights
    #[serde(default)]
    pub admin_rights: bool,
    /// Game-specific parameter (None = game default)
    #[serde(default)]
    pub extra: Option<i32>,
    /// Number of actions to perform
    #[serde(default = "default_actions")]
    pub actions: u32,
    /// Shared game settings
    #[serde(default)]
    pub settings: Settings,
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_actions() -> u32 {
    1
}

/// Default value of a game's extra parameter.
const fn default_extra(game: GameKind) -> i32 {
    match game {
        GameKind::RockPaperScissors => DEFAULT_MAX_ROUNDS,
        GameKind::TicTacToe => DEFAULT_FIELD_SIZE,
        GameKind::Sudoku => DEFAULT_REMAINING_TIME,
    }
}

impl WindowSpec {
    /// Settings payload this spec describes.
    #[must_use]
    pub fn game_settings(&self) -> GameSettings {
        let extra = self.extra.unwrap_or_else(|| default_extra(self.game));
        GameSettings::for_kind(self.game, self.settings, extra)
    }

    /// Open the window.
    #[must_use]
    pub fn open(&self) -> GameWindow {
        GameWindow::new(self.height, self.width, self.admin_rights, self.game_settings())
    }

    /// Advisory checks. Values are passed through unchanged either way.
    #[must_use]
    pub fn validate(&self) -> SettingsValidation {
        let mut validation = self.game_settings().validate();

        if self.height <= 0 || self.width <= 0 {
            validation.add_warning(&format!(
                "{} window has degenerate geometry {}x{}",
                self.game, self.height, self.width
            ));
        }

        if self.actions == 0 {
            validation.add_warning(&format!("{} window performs no actions", self.game));
        }

        validation
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            windows: vec![
                WindowSpec {
                    game: GameKind::RockPaperScissors,
                    height: 700,
                    width: 600,
                    admin_rights: true,
                    settings: Settings::new(
                        0.7,
                        0.3,
                        Quality::Mid,
                        Difficulty::Easy,
                        Language::Russian,
                    ),
                    extra: Some(2),
                    actions: 1,
                },
                WindowSpec {
                    game: GameKind::TicTacToe,
                    height: 500,
                    width: 500,
                    admin_rights: true,
                    settings: Settings::default(),
                    extra: None,
                    actions: 1,
                },
                WindowSpec {
                    game: GameKind::Sudoku,
                    height: DEFAULT_HEIGHT,
                    width: 1000,
                    admin_rights: true,
                    settings: Settings::new(
                        0.4,
                        0.6,
                        Quality::High,
                        Difficulty::Medium,
                        Language::English,
                    ),
                    extra: Some(2),
                    actions: 2,
                },
            ],
        }
    }
}

impl ScenarioConfig {
    /// Load the embedded scenario.
    /// Returns the built-in default if the description is invalid.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED_SCENARIO) {
            Ok(config) => {
                info!("Loaded scenario with {} windows", config.windows.len());
                config
            },
            Err(e) => {
                warn!("Failed to load embedded scenario: {e}");
                Self::default()
            },
        }
    }

    /// Parse a scenario description.
    ///
    /// Validation errors reject the description; warnings do not.
    pub fn from_toml_str(contents: &str) -> Result<Self, ScenarioError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ScenarioError::Parse(e.to_string()))?;

        if config.windows.is_empty() {
            return Err(ScenarioError::Empty);
        }

        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ScenarioError::Invalid(validation.errors.join("; ")));
        }

        Ok(config)
    }

    /// Validate every window.
    #[must_use]
    pub fn validate(&self) -> SettingsValidation {
        let mut validation = SettingsValidation::new();
        for window in &self.windows {
            validation.merge(window.validate());
        }
        validation
    }

    /// Total number of actions the scenario performs.
    #[must_use]
    pub fn total_actions(&self) -> u32 {
        self.windows.iter().map(|w| w.actions).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_matches_default() {
        let embedded = ScenarioConfig::from_toml_str(EMBEDDED_SCENARIO).expect("embedded parses");
        assert_eq!(embedded, ScenarioConfig::default());
    }

    #[test]
    fn test_default_scenario_shape() {
        let config = ScenarioConfig::default();
        let games: Vec<_> = config.windows.iter().map(|w| w.game).collect();
        assert_eq!(
            games,
            vec![GameKind::RockPaperScissors, GameKind::TicTacToe, GameKind::Sudoku]
        );
        assert_eq!(config.total_actions(), 4);
        assert!(!config.validate().has_warnings());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ScenarioConfig::from_toml_str(
            r#"
            [[windows]]
            game = "tic_tac_toe"
            "#,
        )
        .expect("parses");

        let window = &config.windows[0];
        assert_eq!(window.height, DEFAULT_HEIGHT);
        assert_eq!(window.width, DEFAULT_WIDTH);
        assert!(!window.admin_rights);
        assert_eq!(window.actions, 1);
        assert_eq!(window.settings, Settings::default());
        assert_eq!(window.game_settings().extra(), DEFAULT_FIELD_SIZE);
    }

    #[test]
    fn test_empty_scenario_rejected() {
        let result = ScenarioConfig::from_toml_str("windows = []");
        assert!(matches!(result, Err(ScenarioError::Empty)));
    }

    #[test]
    fn test_missing_windows_key_rejected() {
        assert!(matches!(ScenarioConfig::from_toml_str(""), Err(ScenarioError::Empty)));
        assert!(matches!(
            ScenarioConfig::from_toml_str("# nothing here"),
            Err(ScenarioError::Empty)
        ));
    }

    #[test]
    fn test_non_finite_settings_rejected() {
        let result = ScenarioConfig::from_toml_str(
            r#"
            [[windows]]
            game = "sudoku"

            [windows.settings]
            brightness = nan
            "#,
        );
        assert!(matches!(result, Err(ScenarioError::Invalid(_))));
    }

    #[test]
    fn test_out_of_range_settings_only_warn() {
        let config = ScenarioConfig::from_toml_str(
            r#"
            [[windows]]
            game = "tic_tac_toe"
            extra = -1

            [windows.settings]
            volume = 3.0
            "#,
        )
        .expect("warnings do not reject");
        assert_eq!(config.validate().warnings.len(), 2);
    }

    #[test]
    fn test_unknown_game_rejected() {
        let result = ScenarioConfig::from_toml_str(
            r#"
            [[windows]]
            game = "chess"
            "#,
        );
        assert!(matches!(result, Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn test_validation_warns_but_keeps_values() {
        let spec = WindowSpec {
            game: GameKind::Sudoku,
            height: 0,
            width: 100,
            admin_rights: false,
            settings: Settings::default(),
            extra: Some(-4),
            actions: 0,
        };

        let validation = spec.validate();
        assert!(validation.is_valid());
        assert_eq!(validation.warnings.len(), 3);
        assert_eq!(spec.open().memory_needed(), 0);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ScenarioConfig::default()).expect("serialize");
        assert!(toml_str.contains("rock_paper_scissors"));
        assert!(toml_str.contains("brightness"));
    }
}
