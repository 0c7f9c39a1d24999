//! Seeded random input driver, standing in for a keyboard in the headless host.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tankfront_core::commands::Action;

/// Shortest and longest time a maneuver is held, in ticks.
const MANEUVER_TICKS: std::ops::RangeInclusive<u32> = 20..=90;

/// Per-tick chance of pulling the trigger.
const FIRE_CHANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Maneuver {
    Hold,
    Advance,
    Reverse,
    TurnLeft,
    TurnRight,
}

const MANEUVERS: [Maneuver; 5] = [
    Maneuver::Hold,
    Maneuver::Advance,
    Maneuver::Reverse,
    Maneuver::TurnLeft,
    Maneuver::TurnRight,
];

impl Maneuver {
    fn held(self) -> &'static [Action] {
        match self {
            Maneuver::Hold => &[],
            Maneuver::Advance => &[Action::Forward],
            Maneuver::Reverse => &[Action::Backward],
            Maneuver::TurnLeft => &[Action::RotateLeft, Action::Forward],
            Maneuver::TurnRight => &[Action::RotateRight, Action::Forward],
        }
    }
}

/// Picks a maneuver, holds it for a while, and fires now and then.
/// Same seed, same presses.
pub struct Autopilot {
    rng: ChaCha8Rng,
    maneuver: Maneuver,
    remaining: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            maneuver: Maneuver::Hold,
            remaining: 0,
        }
    }

    /// Press/release transitions for the next tick.
    pub fn step(&mut self) -> Vec<(Action, bool)> {
        let mut changes = Vec::new();

        if self.remaining == 0 {
            let next = MANEUVERS[self.rng.gen_range(0..MANEUVERS.len())];
            let (before, after) = (self.maneuver.held(), next.held());
            changes.extend(
                before
                    .iter()
                    .filter(|a| !after.contains(*a))
                    .map(|a| (*a, false)),
            );
            changes.extend(
                after
                    .iter()
                    .filter(|a| !before.contains(*a))
                    .map(|a| (*a, true)),
            );
            self.maneuver = next;
            self.remaining = self.rng.gen_range(MANEUVER_TICKS);
        }
        self.remaining -= 1;

        if self.rng.gen_bool(FIRE_CHANCE) {
            changes.push((Action::Fire, true));
        }
        changes
    }
}
