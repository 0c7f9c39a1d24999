//! Match engine, the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, processes match commands, runs all
//! systems once per tick, and produces `MatchSnapshot`s. Completely headless
//! and deterministic: the same intents produce the same match.

use std::collections::VecDeque;

use hecs::{Entity, World};
use tracing::info;

use tankfront_core::commands::{InputIntents, MatchCommand};
use tankfront_core::constants::{ENEMY_SQUAD_SIZE, MAX_TIME_SCALE, MIN_TIME_SCALE};
use tankfront_core::enums::MatchPhase;
use tankfront_core::events::{MatchEvent, MatchOutcome};
use tankfront_core::state::MatchSnapshot;
use tankfront_core::types::SimTime;
use tankfront_map::{FlagTiles, MapError, MapLayout, TileGrid};

use crate::arena::Arena;
use crate::objectives::{Objectives, ScoreState};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Initial time scale (1.0 = normal). Only the host's pacing reads it.
    pub time_scale: f64,
    /// Number of enemies spawned, capped at the number of spawn lanes.
    pub enemy_count: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            enemy_count: ENEMY_SQUAD_SIZE,
        }
    }
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    player: Entity,
    arena: Arena,
    flag_tiles: FlagTiles,
    objectives: Objectives,
    score: ScoreState,
    time: SimTime,
    phase: MatchPhase,
    time_scale: f64,
    config: MatchConfig,
    command_queue: VecDeque<MatchCommand>,
    events: Vec<MatchEvent>,
    outcome: Option<MatchOutcome>,
}

impl MatchEngine {
    /// Create a match on the built-in map.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_layout(config, MapLayout::builtin())
    }

    /// Create a match on a custom tile grid.
    pub fn from_grid(config: MatchConfig, grid: &TileGrid) -> Result<Self, MapError> {
        Ok(Self::with_layout(config, MapLayout::from_grid(grid)?))
    }

    fn with_layout(config: MatchConfig, layout: MapLayout) -> Self {
        let mut world = World::new();
        let player = world_setup::setup_match(&mut world, config.enemy_count);
        info!(
            walls = layout.walls.len(),
            enemies = config.enemy_count,
            "match started"
        );

        Self {
            world,
            player,
            arena: Arena::new(layout.walls),
            flag_tiles: layout.flags,
            objectives: Objectives::new(layout.flags.player, layout.flags.enemy),
            score: ScoreState::default(),
            time: SimTime::default(),
            phase: MatchPhase::Active,
            time_scale: clamp_time_scale(config.time_scale),
            config,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            outcome: None,
        }
    }

    /// Queue a match command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MatchCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one tick with this tick's intents and return the
    /// resulting snapshot. Once the match is over, ticks only report state.
    pub fn tick(&mut self, intents: &InputIntents) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems(intents);
            self.time.advance();
            self.check_terminal();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.arena,
            &self.objectives,
            &self.score,
            &self.time,
            self.phase,
            events,
            self.outcome,
        )
    }

    /// Apply queued commands without running a tick. Lets a host that has
    /// stopped ticking (time scale 0) still change pause state or speed.
    pub fn apply_pending_commands(&mut self) {
        self.process_commands();
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Host pacing multiplier.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn objectives(&self) -> &Objectives {
        &self.objectives
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_entity(&self) -> Entity {
        self.player
    }

    #[cfg(test)]
    pub fn objectives_mut(&mut self) -> &mut Objectives {
        &mut self.objectives
    }

    /// Spawn an extra enemy at an exact position (for tests needing a staged fight).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, slot: u32, position: glam::DVec2) -> Entity {
        world_setup::spawn_enemy(&mut self.world, slot, position)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: MatchCommand) {
        match command {
            MatchCommand::Pause => {
                if self.phase == MatchPhase::Active {
                    self.phase = MatchPhase::Paused;
                }
            }
            MatchCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::Active;
                }
            }
            MatchCommand::Restart => self.restart(),
            MatchCommand::SetTimeScale { scale } => {
                self.time_scale = clamp_time_scale(scale);
            }
        }
    }

    /// Fresh match on the same walls and flag tiles.
    fn restart(&mut self) {
        self.world.clear();
        self.player = world_setup::setup_match(&mut self.world, self.config.enemy_count);
        self.objectives = Objectives::new(self.flag_tiles.player, self.flag_tiles.enemy);
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.phase = MatchPhase::Active;
        self.events.clear();
        self.outcome = None;
        info!("match restarted");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, intents: &InputIntents) {
        // 1. Player: fire trigger, then movement
        systems::player::run(
            &mut self.world,
            self.player,
            intents,
            &self.arena,
            &mut self.score,
            &mut self.events,
        );
        // 2. Enemies in slot order, each advancing its own projectiles
        systems::enemy_ai::run(
            &mut self.world,
            &self.arena,
            &mut self.objectives,
            &mut self.score,
            self.time.tick,
            &mut self.events,
        );
        // 3. Player projectiles
        systems::projectiles::advance(
            &mut self.world,
            self.player,
            &self.arena,
            &mut self.objectives,
            &mut self.score,
            &mut self.events,
        );
    }

    /// Latch the outcome the first time a terminal condition holds.
    fn check_terminal(&mut self) {
        let Some(cause) = self.objectives.evaluate() else {
            return;
        };
        let outcome = MatchOutcome::new(cause, self.score.score, self.time.tick);
        info!(
            winner = ?outcome.winner,
            ?cause,
            score = outcome.score,
            tick = outcome.tick,
            "match over"
        );
        self.phase = MatchPhase::Over;
        self.outcome = Some(outcome);
        self.events.push(MatchEvent::MatchOver(outcome));
    }
}

fn clamp_time_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
}
