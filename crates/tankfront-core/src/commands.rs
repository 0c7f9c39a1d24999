//! Inputs fed to the simulation by the host.
//!
//! Intents are read once per tick and never mutated by the simulation.
//! Match commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Named player actions the host's input layer can press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Forward,
    Backward,
    Fire,
}

/// Pressed-state of every player action for one tick.
///
/// `fire` is a trigger: each tick it is set fires one projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntents {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub fire: bool,
}

impl InputIntents {
    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::RotateLeft => self.rotate_left = pressed,
            Action::RotateRight => self.rotate_right = pressed,
            Action::Forward => self.forward = pressed,
            Action::Backward => self.backward = pressed,
            Action::Fire => self.fire = pressed,
        }
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::RotateLeft => self.rotate_left,
            Action::RotateRight => self.rotate_right,
            Action::Forward => self.forward,
            Action::Backward => self.backward,
            Action::Fire => self.fire,
        }
    }

    /// Builder-style helper, mostly for tests and scripted drivers.
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }
}

/// Match-level control commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Freeze the simulation; time does not advance.
    Pause,
    /// Continue a paused match.
    Resume,
    /// Throw away the current match and start a fresh one on the same map.
    Restart,
    /// Host pacing multiplier (1.0 = 60 Hz). Clamped to `[0, 4]`.
    SetTimeScale { scale: f64 },
}
