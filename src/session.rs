//! Presentation-shell state: the current input text and toggle position.
//!
//! The session owns no conversion logic. Each event stores the new value and
//! re-renders through [`engine::display`](crate::engine::display).

use tracing::{debug, trace};

use crate::commands::{CommandResult, StateChange};
use crate::engine::{self, Direction, DisplayState};

/// Initial state for a [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub direction: Direction,
    pub input: String,
}

/// Live converter state.
#[derive(Debug, Clone)]
pub struct Session {
    raw: String,
    direction: Direction,
    display: DisplayState,
    updates: u64,
}

impl Session {
    /// Create a session and render its initial state.
    pub fn new(config: SessionConfig) -> Self {
        let display = engine::display(&config.input, config.direction);
        Self {
            raw: config.input,
            direction: config.direction,
            display,
            updates: 0,
        }
    }

    /// The input text changed.
    pub fn on_text_changed(&mut self, raw: impl Into<String>) -> &DisplayState {
        self.raw = raw.into();
        debug!(raw = %self.raw, "text changed");
        self.refresh()
    }

    /// The toggle changed. `checked` means celsius to fahrenheit.
    pub fn on_direction_toggled(&mut self, checked: bool) -> &DisplayState {
        self.direction = Direction::from_checked(checked);
        debug!(direction = %self.direction, "direction toggled");
        self.refresh()
    }

    /// Flip the toggle.
    pub fn toggle(&mut self) -> &DisplayState {
        self.on_direction_toggled(!self.direction.is_checked())
    }

    /// Apply what the command registry made of `line`.
    ///
    /// Returns the new display when something changed, `None` for commands
    /// that only print (and for `Quit`, which the caller handles).
    pub fn apply(&mut self, result: CommandResult, line: &str) -> Option<&DisplayState> {
        match result {
            CommandResult::NotACommand => Some(self.on_text_changed(line)),
            CommandResult::StateChanged(StateChange::Direction(d)) => {
                Some(self.on_direction_toggled(d.is_checked()))
            }
            CommandResult::StateChanged(StateChange::Input(raw)) => {
                Some(self.on_text_changed(raw))
            }
            CommandResult::Handled | CommandResult::Quit => None,
        }
    }

    fn refresh(&mut self) -> &DisplayState {
        self.display = engine::display(&self.raw, self.direction);
        self.updates += 1;
        trace!(hint = ?self.display.hint, text = %self.display.text, "display updated");
        &self.display
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Number of events rendered since the session started.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Render a display state for the terminal.
pub fn render(state: &DisplayState) -> String {
    let mut out = String::new();
    if let Some(hint) = &state.hint {
        out.push_str(&format!("  hint  {hint}\n"));
    }
    out.push_str(&format!("=> {}", state.text));
    out
}
