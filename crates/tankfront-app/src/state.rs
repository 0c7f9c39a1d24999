//! Host-side state shared between the input layer and the game loop thread.

use tankfront_core::commands::{Action, InputIntents, MatchCommand};

/// Commands sent from the input layer to the game loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    /// An action was pressed (`true`) or released (`false`).
    Intent(Action, bool),
    /// A match command to forward to the engine.
    Match(MatchCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// The host's intent map: which actions are currently held.
///
/// Movement and rotation stay set while held. Fire is a trigger and is
/// cleared at the end of every tick, so a press fires exactly one shot.
#[derive(Debug, Default, Clone)]
pub struct HostIntents {
    held: InputIntents,
}

impl HostIntents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action, pressed: bool) {
        // Releasing fire is meaningless; the trigger is consumed by the tick.
        if action == Action::Fire && !pressed {
            return;
        }
        self.held.set(action, pressed);
    }

    /// Intents for the tick about to run.
    pub fn current(&self) -> InputIntents {
        self.held
    }

    pub fn end_tick(&mut self) {
        self.held.fire = false;
    }
}
