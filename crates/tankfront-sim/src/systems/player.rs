//! Player control system: fire trigger, then movement from the tick's intents.

use hecs::{Entity, World};

use tankfront_core::commands::InputIntents;
use tankfront_core::components::Tank;
use tankfront_core::enums::Side;
use tankfront_core::events::MatchEvent;

use crate::arena::Arena;
use crate::objectives::ScoreState;
use crate::systems::{movement, projectiles};

/// Apply one tick of player input. The projectile leaves from the pre-move pose.
pub fn run(
    world: &mut World,
    player: Entity,
    intents: &InputIntents,
    arena: &Arena,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
) {
    let Ok(mut tank) = world.get::<&mut Tank>(player) else {
        return;
    };

    if intents.fire {
        projectiles::fire(&mut tank, Side::Player);
        score.shots_fired += 1;
        events.push(MatchEvent::ShotFired {
            side: Side::Player,
            slot: None,
        });
    }

    movement::move_player(&mut tank, intents, arena);
}
