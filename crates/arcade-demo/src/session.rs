//! Scenario runner.

use std::io::Write;

use arcade_common::ArcadeResult;
use arcade_games::{ActionOutcome, GameWindow};
use tracing::{debug, info};

use crate::scenario::{ScenarioConfig, WindowSpec};

/// A scenario being played: the specs still to open and the windows opened
/// so far.
#[derive(Debug)]
pub struct Session {
    specs: Vec<WindowSpec>,
    windows: Vec<GameWindow>,
}

impl Session {
    /// Create a session for `config`. No window is opened yet.
    #[must_use]
    pub fn new(config: &ScenarioConfig) -> Self {
        Self {
            specs: config.windows.clone(),
            windows: Vec::with_capacity(config.windows.len()),
        }
    }

    /// Open each window in turn and perform its actions, writing one status
    /// line per action to `out`.
    ///
    /// Windows are opened lazily so each one acts before the next exists.
    /// Calling `run` again on a finished session does nothing.
    pub fn run<W: Write>(&mut self, out: &mut W) -> ArcadeResult<Vec<ActionOutcome>> {
        let mut outcomes = Vec::new();

        for spec in self.specs.drain(..) {
            let mut window = spec.open();
            for _ in 0..spec.actions {
                outcomes.push(window.do_action(out)?);
            }
            debug!(
                "{} window {} finished in state {:?}",
                window.kind(),
                window.window().id(),
                window.state()
            );
            self.windows.push(window);
        }

        out.flush()?;
        info!("Scenario complete: {} actions", outcomes.len());
        Ok(outcomes)
    }

    /// Windows opened so far, in order.
    #[must_use]
    pub fn windows(&self) -> &[GameWindow] {
        &self.windows
    }
}
