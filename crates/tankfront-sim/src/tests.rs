//! Tests for the match engine, movement, projectile resolution and objectives.

use glam::DVec2;
use hecs::World;

use tankfront_core::commands::{Action, InputIntents, MatchCommand};
use tankfront_core::components::*;
use tankfront_core::constants::*;
use tankfront_core::enums::*;
use tankfront_core::events::MatchEvent;
use tankfront_core::types::Aabb;
use tankfront_map::{MapLayout, TileGrid};

use crate::arena::Arena;
use crate::engine::{MatchConfig, MatchEngine};
use crate::objectives::{Objectives, ScoreState};
use crate::systems::movement::{self, BoundaryClamp};
use crate::systems::projectiles::{self, Impact};
use crate::world_setup;

/// Open field with the enemy flag at (0, 96) and the player flag at (288, 96).
const OPEN_FIELD: &str = "
0000000000
0000000000
0000000000
3000000002
";

fn wall_at(x: f64, y: f64) -> Wall {
    Wall {
        bounds: Aabb::square(DVec2::new(x, y), TILE_SIZE),
    }
}

fn far_objectives() -> Objectives {
    Objectives::new(DVec2::new(700.0, 500.0), DVec2::new(700.0, 50.0))
}

/// Engine on the open field with no enemies spawned.
fn staged_engine() -> MatchEngine {
    let grid = TileGrid::parse(OPEN_FIELD).unwrap();
    MatchEngine::from_grid(
        MatchConfig {
            enemy_count: 0,
            ..Default::default()
        },
        &grid,
    )
    .unwrap()
}

fn place_player(engine: &mut MatchEngine, position: DVec2, orientation: f64) {
    let player = engine.player_entity();
    let mut tank = engine.world_mut().get::<&mut Tank>(player).unwrap();
    tank.position = position;
    tank.orientation = orientation;
}

fn player_tank(engine: &MatchEngine) -> Tank {
    let player = engine.player_entity();
    let tank = engine.world().get::<&Tank>(player).unwrap();
    (*tank).clone()
}

fn fire() -> InputIntents {
    InputIntents::default().with(Action::Fire)
}

// ---- Movement ----

#[test]
fn test_slides_along_wall_when_one_axis_blocked() {
    let arena = Arena::new(vec![wall_at(95.0, 40.0)]);
    let mut tank = Tank::new(DVec2::new(60.0, 50.0), 0.0);

    movement::resolve_step(&mut tank, DVec2::new(5.0, 5.0), &arena);

    // X is blocked by the wall, Y is free.
    assert_eq!(tank.position, DVec2::new(60.0, 55.0));
}

#[test]
fn test_both_axes_blocked_leaves_position() {
    let arena = Arena::new(vec![wall_at(95.0, 40.0), wall_at(40.0, 85.0)]);
    let mut tank = Tank::new(DVec2::new(60.0, 50.0), 0.0);

    movement::resolve_step(&mut tank, DVec2::new(5.0, 5.0), &arena);

    assert_eq!(tank.position, DVec2::new(60.0, 50.0));
}

#[test]
fn test_touching_wall_does_not_block() {
    // Tank's right edge sits exactly on the wall's left edge.
    let arena = Arena::new(vec![wall_at(92.0, 50.0)]);
    let mut tank = Tank::new(DVec2::new(60.0, 50.0), 0.0);
    assert!(!arena.collides_with_walls(&tank.bounds()));

    movement::resolve_step(&mut tank, DVec2::new(0.0, 3.0), &arena);
    assert_eq!(tank.position, DVec2::new(60.0, 53.0));

    // Repeating the query changes nothing.
    let bounds = tank.bounds();
    assert_eq!(
        arena.collides_with_walls(&bounds),
        arena.collides_with_walls(&bounds)
    );
}

#[test]
fn test_player_inset_clamp() {
    let arena = Arena::new(Vec::new());
    let mut tank = Tank::new(DVec2::new(0.0, -50.0), 0.0);
    BoundaryClamp::PlayerInset.apply(&mut tank, &arena);
    assert_eq!(tank.position, DVec2::new(33.0, 33.0));

    tank.position = DVec2::new(900.0, 900.0);
    BoundaryClamp::PlayerInset.apply(&mut tank, &arena);
    assert_eq!(tank.position, DVec2::new(735.0, 535.0));
}

#[test]
fn test_enemy_edge_clamp() {
    let arena = Arena::new(Vec::new());
    let mut tank = Tank::new(DVec2::new(-10.0, 700.0), 0.0);
    BoundaryClamp::ArenaEdges.apply(&mut tank, &arena);
    assert_eq!(tank.position, DVec2::new(0.0, 568.0));
}

#[test]
fn test_forward_and_rotation() {
    let arena = Arena::new(Vec::new());
    let mut tank = Tank::new(DVec2::new(100.0, 100.0), 0.0);

    movement::move_player(&mut tank, &InputIntents::default().with(Action::Forward), &arena);
    assert!((tank.position.x - 103.0).abs() < 1e-9);
    assert!((tank.position.y - 100.0).abs() < 1e-9);

    movement::move_player(&mut tank, &InputIntents::default().with(Action::Backward), &arena);
    assert!((tank.position.x - 100.0).abs() < 1e-9);

    movement::move_player(
        &mut tank,
        &InputIntents::default().with(Action::RotateLeft),
        &arena,
    );
    assert!((tank.orientation + ROTATION_STEP).abs() < 1e-12);
    assert!((tank.position.x - 100.0).abs() < 1e-9, "rotation alone never moves");
}

#[test]
fn test_forward_and_backward_cancel() {
    let arena = Arena::new(Vec::new());
    let mut tank = Tank::new(DVec2::new(100.0, 100.0), 0.3);
    let intents = InputIntents::default()
        .with(Action::Forward)
        .with(Action::Backward);

    movement::move_player(&mut tank, &intents, &arena);
    assert!((tank.position - DVec2::new(100.0, 100.0)).length() < 1e-9);
}

// ---- Projectiles ----

#[test]
fn test_projectile_spawns_at_cannon_tip() {
    let tank = Tank::new(DVec2::new(100.0, 100.0), 0.0);
    let projectile = projectiles::spawn(&tank, Side::Player);
    assert!((projectile.position - DVec2::new(141.6, 116.0)).length() < 1e-9);
    assert_eq!(projectile.size, PROJECTILE_SIZE);
    assert_eq!(projectile.orientation, 0.0);
}

#[test]
fn test_removal_during_advance_skips_nothing() {
    let mut world = World::new();
    let arena = Arena::new(vec![wall_at(200.0, 200.0)]);
    let mut objectives = far_objectives();
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let shooter = world_setup::spawn_player(&mut world, DVec2::new(400.0, 400.0));
    let flying = |x: f64, y: f64| Projectile {
        position: DVec2::new(x, y),
        size: PROJECTILE_SIZE,
        orientation: 0.0,
        speed: PROJECTILE_SPEED,
        owner: Side::Player,
    };
    world.get::<&mut Tank>(shooter).unwrap().projectiles = vec![
        flying(100.0, 100.0),
        flying(190.0, 210.0),
        flying(100.0, 300.0),
    ];

    projectiles::advance(
        &mut world,
        shooter,
        &arena,
        &mut objectives,
        &mut score,
        &mut events,
    );

    let tank = world.get::<&Tank>(shooter).unwrap();
    let remaining: Vec<DVec2> = tank.projectiles.iter().map(|p| p.position).collect();
    assert_eq!(
        remaining,
        vec![DVec2::new(105.0, 100.0), DVec2::new(105.0, 300.0)]
    );
    assert_eq!(
        events,
        vec![MatchEvent::WallHit {
            owner: Side::Player,
            position: DVec2::new(195.0, 210.0),
        }]
    );
}

#[test]
fn test_wall_takes_precedence_over_flag() {
    let mut world = World::new();
    let arena = Arena::new(vec![wall_at(200.0, 200.0)]);
    let mut objectives = Objectives::new(DVec2::new(700.0, 500.0), DVec2::new(200.0, 200.0));
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let projectile = Projectile {
        position: DVec2::new(210.0, 210.0),
        size: PROJECTILE_SIZE,
        orientation: 0.0,
        speed: PROJECTILE_SPEED,
        owner: Side::Player,
    };
    let impact = projectiles::resolve(
        &mut world,
        &projectile,
        &arena,
        &mut objectives,
        &mut score,
        &mut events,
    );

    assert_eq!(impact, Some(Impact::Wall));
    assert_eq!(objectives.enemy_flag.health, FLAG_MAX_HEALTH);
}

#[test]
fn test_projectile_leaving_arena_is_removed() {
    let mut world = World::new();
    let arena = Arena::new(Vec::new());
    let mut objectives = far_objectives();
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let shooter = world_setup::spawn_player(&mut world, DVec2::new(400.0, 400.0));
    world.get::<&mut Tank>(shooter).unwrap().projectiles = vec![Projectile {
        position: DVec2::new(798.0, 100.0),
        size: PROJECTILE_SIZE,
        orientation: 0.0,
        speed: PROJECTILE_SPEED,
        owner: Side::Player,
    }];

    projectiles::advance(
        &mut world,
        shooter,
        &arena,
        &mut objectives,
        &mut score,
        &mut events,
    );

    assert!(world.get::<&Tank>(shooter).unwrap().projectiles.is_empty());
    assert!(events.is_empty());
}

#[test]
fn test_enemy_hit_takes_quarter_health() {
    let mut world = World::new();
    let arena = Arena::new(Vec::new());
    let mut objectives = far_objectives();
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let player = world_setup::spawn_player(&mut world, DVec2::new(100.0, 100.0));
    let enemy = world_setup::spawn_enemy(&mut world, 0, DVec2::new(150.0, 100.0));
    {
        let mut tank = world.get::<&mut Tank>(player).unwrap();
        tank.orientation = 0.0;
        projectiles::fire(&mut tank, Side::Player);
    }

    projectiles::advance(
        &mut world,
        player,
        &arena,
        &mut objectives,
        &mut score,
        &mut events,
    );

    assert_eq!(world.get::<&Tank>(enemy).unwrap().health, 75);
    assert!(world.get::<&Tank>(player).unwrap().projectiles.is_empty());
    assert_eq!(score.score, 0);
}

#[test]
fn test_overlapping_enemies_latest_slot_hit_first() {
    let mut world = World::new();
    let arena = Arena::new(Vec::new());
    let mut objectives = far_objectives();
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let player = world_setup::spawn_player(&mut world, DVec2::new(100.0, 100.0));
    let older = world_setup::spawn_enemy(&mut world, 0, DVec2::new(150.0, 100.0));
    let newer = world_setup::spawn_enemy(&mut world, 1, DVec2::new(140.0, 100.0));
    {
        let mut tank = world.get::<&mut Tank>(player).unwrap();
        tank.orientation = 0.0;
        projectiles::fire(&mut tank, Side::Player);
    }

    projectiles::advance(
        &mut world,
        player,
        &arena,
        &mut objectives,
        &mut score,
        &mut events,
    );

    assert_eq!(world.get::<&Tank>(older).unwrap().health, TANK_MAX_HEALTH);
    assert_eq!(world.get::<&Tank>(newer).unwrap().health, 75);
}

#[test]
fn test_player_health_never_underflows() {
    let mut world = World::new();
    let arena = Arena::new(Vec::new());
    let mut objectives = far_objectives();
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let player = world_setup::spawn_player(&mut world, DVec2::new(100.0, 100.0));
    world.get::<&mut Tank>(player).unwrap().health = 5;

    let projectile = Projectile {
        position: DVec2::new(110.0, 110.0),
        size: PROJECTILE_SIZE,
        orientation: 0.0,
        speed: PROJECTILE_SPEED,
        owner: Side::Enemy,
    };
    let impact = projectiles::resolve(
        &mut world,
        &projectile,
        &arena,
        &mut objectives,
        &mut score,
        &mut events,
    );

    assert_eq!(impact, Some(Impact::Tank(Side::Player)));
    assert_eq!(world.get::<&Tank>(player).unwrap().health, 0);
    assert!(objectives.player_destroyed);
    assert_eq!(events, vec![MatchEvent::PlayerDestroyed]);
}

#[test]
fn test_player_projectiles_pass_through_player() {
    let mut world = World::new();
    let arena = Arena::new(Vec::new());
    let mut objectives = far_objectives();
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let player = world_setup::spawn_player(&mut world, DVec2::new(100.0, 100.0));
    let projectile = Projectile {
        position: DVec2::new(110.0, 110.0),
        size: PROJECTILE_SIZE,
        orientation: 0.0,
        speed: PROJECTILE_SPEED,
        owner: Side::Player,
    };
    let impact = projectiles::resolve(
        &mut world,
        &projectile,
        &arena,
        &mut objectives,
        &mut score,
        &mut events,
    );

    assert_eq!(impact, None);
    assert_eq!(world.get::<&Tank>(player).unwrap().health, TANK_MAX_HEALTH);
}

#[test]
fn test_enemy_shots_wear_down_player_flag() {
    let mut world = World::new();
    let arena = Arena::new(Vec::new());
    let mut objectives = Objectives::new(DVec2::new(288.0, 96.0), DVec2::new(700.0, 500.0));
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    let enemy = world_setup::spawn_enemy(&mut world, 0, DVec2::new(200.0, 96.0));
    world.get::<&mut Tank>(enemy).unwrap().orientation = 0.0;

    for shot in 1..=10u32 {
        projectiles::fire(&mut world.get::<&mut Tank>(enemy).unwrap(), Side::Enemy);
        // The cannon tip is 9 steps short of the flag.
        for _ in 0..9 {
            projectiles::advance(
                &mut world,
                enemy,
                &arena,
                &mut objectives,
                &mut score,
                &mut events,
            );
        }
        assert!(world.get::<&Tank>(enemy).unwrap().projectiles.is_empty());
        assert_eq!(objectives.player_flag.health, FLAG_MAX_HEALTH - FLAG_HIT_DAMAGE * shot);
        if shot == 5 {
            assert_eq!(objectives.player_flag.health, 50);
            assert_eq!(objectives.evaluate(), None);
        }
    }

    let cause = objectives.evaluate().expect("flag destroyed");
    assert_eq!(cause, EndCause::PlayerFlagDestroyed);
    assert_eq!(cause.winner(), Side::Enemy);
}

// ---- Objectives ----

#[test]
fn test_terminal_precedence() {
    let mut objectives = far_objectives();
    assert_eq!(objectives.evaluate(), None);

    objectives.player_destroyed = true;
    assert_eq!(objectives.evaluate(), Some(EndCause::PlayerDestroyed));

    objectives.player_flag.health = 0;
    assert_eq!(objectives.evaluate(), Some(EndCause::PlayerFlagDestroyed));

    objectives.enemy_flag.health = 0;
    assert_eq!(objectives.evaluate(), Some(EndCause::EnemyFlagDestroyed));
}

// ---- Engine ----

#[test]
fn test_initial_match_state() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    let snapshot = engine.tick(&InputIntents::default());

    assert_eq!(snapshot.phase, MatchPhase::Active);
    assert_eq!(snapshot.enemies.len(), ENEMY_SQUAD_SIZE);
    assert_eq!(snapshot.flags.len(), 2);
    assert_eq!(snapshot.walls.len(), MapLayout::builtin().walls.len());
    assert_eq!(snapshot.score.enemies_remaining, ENEMY_SQUAD_SIZE as u32);

    let slots: Vec<Option<u32>> = snapshot.enemies.iter().map(|e| e.slot).collect();
    assert_eq!(slots, vec![Some(0), Some(1), Some(2), Some(3)]);

    let player = snapshot.player.expect("player present");
    assert_eq!(player.health, TANK_MAX_HEALTH);
}

#[test]
fn test_every_enemy_fires_on_first_tick() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    let snapshot = engine.tick(&InputIntents::default());

    let enemy_shots = snapshot
        .events
        .iter()
        .filter(|e| matches!(e, MatchEvent::ShotFired { side: Side::Enemy, .. }))
        .count();
    assert_eq!(enemy_shots, ENEMY_SQUAD_SIZE);
    assert_eq!(snapshot.score.shots_fired, 0);
}

#[test]
fn test_sixty_ticks_is_one_second() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    for _ in 0..60 {
        engine.tick(&InputIntents::default());
    }
    assert_eq!(engine.time().tick, 60);
    assert!((engine.time().elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_determinism_same_inputs() {
    let mut engine_a = MatchEngine::new(MatchConfig::default());
    let mut engine_b = MatchEngine::new(MatchConfig::default());

    for tick in 0..600u64 {
        let mut intents = InputIntents::default();
        intents.set(Action::Forward, tick % 90 < 45);
        intents.set(Action::RotateRight, tick % 70 < 10);
        intents.set(Action::Fire, tick % 15 == 0);

        let snap_a = engine_a.tick(&intents);
        let snap_b = engine_b.tick(&intents);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged on tick {tick}");
    }
}

#[test]
fn test_pause_and_resume() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    engine.tick(&InputIntents::default());

    engine.queue_command(MatchCommand::Pause);
    let snapshot = engine.tick(&InputIntents::default().with(Action::Forward));
    assert_eq!(snapshot.phase, MatchPhase::Paused);
    assert_eq!(snapshot.time.tick, 1);

    engine.tick(&InputIntents::default());
    assert_eq!(engine.time().tick, 1, "time frozen while paused");

    engine.queue_command(MatchCommand::Resume);
    engine.tick(&InputIntents::default());
    assert_eq!(engine.phase(), MatchPhase::Active);
    assert_eq!(engine.time().tick, 2);
}

#[test]
fn test_restart_resets_match() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    for _ in 0..120 {
        engine.tick(&fire());
    }
    assert!(engine.score().shots_fired > 0);

    engine.queue_command(MatchCommand::Restart);
    let snapshot = engine.tick(&InputIntents::default());

    assert_eq!(snapshot.time.tick, 1);
    assert_eq!(snapshot.score.shots_fired, 0);
    assert_eq!(snapshot.score.score, 0);
    assert_eq!(snapshot.enemies.len(), ENEMY_SQUAD_SIZE);
    assert!(snapshot.flags.iter().all(|f| f.health == FLAG_MAX_HEALTH));
    assert!(snapshot
        .projectiles
        .iter()
        .all(|p| p.owner == Side::Enemy));
}

#[test]
fn test_time_scale_clamped() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    engine.queue_commands([MatchCommand::SetTimeScale { scale: 10.0 }]);
    engine.tick(&InputIntents::default());
    assert_eq!(engine.time_scale(), MAX_TIME_SCALE);

    engine.queue_command(MatchCommand::SetTimeScale { scale: -1.0 });
    engine.tick(&InputIntents::default());
    assert_eq!(engine.time_scale(), MIN_TIME_SCALE);
}

#[test]
fn test_killing_an_enemy_scores_and_removes_it() {
    let mut engine = staged_engine();
    place_player(&mut engine, DVec2::new(100.0, 300.0), 0.0);
    let enemy = engine.spawn_enemy_at(0, DVec2::new(150.0, 300.0));
    engine.world_mut().get::<&mut Tank>(enemy).unwrap().health = ENEMY_HIT_DAMAGE;

    let snapshot = engine.tick(&fire());

    assert!(snapshot.enemies.is_empty());
    assert_eq!(snapshot.score.score, KILL_REWARD);
    assert_eq!(snapshot.score.enemies_destroyed, 1);
    assert!(snapshot
        .events
        .contains(&MatchEvent::EnemyDestroyed { slot: 0, score: 100 }));
    assert!(engine.world().get::<&Tank>(enemy).is_err());

    // The shot the enemy fired this tick vanished with it.
    assert!(snapshot.projectiles.is_empty());
    for _ in 0..30 {
        engine.tick(&InputIntents::default());
    }
    assert_eq!(player_tank(&engine).health, TANK_MAX_HEALTH);
    assert_eq!(engine.phase(), MatchPhase::Active);
}

#[test]
fn test_own_flag_destroyed_means_enemy_wins() {
    let mut engine = staged_engine();
    // Facing the player flag at (288, 96).
    place_player(&mut engine, DVec2::new(200.0, 96.0), 0.0);

    let mut flag_hits = 0;
    for tick in 0..60 {
        let intents = if tick < 10 { fire() } else { InputIntents::default() };
        let snapshot = engine.tick(&intents);

        for event in &snapshot.events {
            if let MatchEvent::FlagHit { flag, health } = event {
                assert_eq!(*flag, Side::Player);
                flag_hits += 1;
                assert_eq!(*health, FLAG_MAX_HEALTH - FLAG_HIT_DAMAGE * flag_hits);
            }
        }
        if flag_hits == 5 {
            assert_eq!(engine.objectives().player_flag.health, 50);
        }
        if snapshot.outcome.is_some() {
            break;
        }
    }

    assert_eq!(flag_hits, 10);
    assert_eq!(engine.phase(), MatchPhase::Over);
    let outcome = engine.outcome().expect("match over");
    assert_eq!(outcome.winner, Side::Enemy);
    assert_eq!(outcome.cause, EndCause::PlayerFlagDestroyed);
    assert_eq!(outcome.headline(), "Enemy Wins!");
}

#[test]
fn test_enemy_flag_destroyed_means_player_wins() {
    let mut engine = staged_engine();
    engine.objectives_mut().enemy_flag.health = FLAG_HIT_DAMAGE;
    // Facing the enemy flag at (0, 96).
    place_player(&mut engine, DVec2::new(100.0, 96.0), std::f64::consts::PI);

    let mut outcome = None;
    for _ in 0..30 {
        outcome = engine.tick(&fire()).outcome;
        if outcome.is_some() {
            break;
        }
    }

    let outcome = outcome.expect("enemy flag destroyed");
    assert_eq!(outcome.winner, Side::Player);
    assert_eq!(outcome.cause, EndCause::EnemyFlagDestroyed);
}

#[test]
fn test_player_destroyed_ends_match() {
    let mut engine = staged_engine();
    place_player(&mut engine, DVec2::new(300.0, 300.0), 0.0);
    {
        let player = engine.player_entity();
        engine.world_mut().get::<&mut Tank>(player).unwrap().health = PLAYER_HIT_DAMAGE;
    }
    engine.spawn_enemy_at(0, DVec2::new(400.0, 300.0));

    let mut match_over_events = 0;
    for _ in 0..120 {
        let snapshot = engine.tick(&InputIntents::default());
        match_over_events += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, MatchEvent::MatchOver(_)))
            .count();
    }

    assert_eq!(match_over_events, 1, "MatchOver emitted exactly once");
    let outcome = engine.outcome().expect("player destroyed");
    assert_eq!(outcome.cause, EndCause::PlayerDestroyed);
    assert_eq!(outcome.winner, Side::Enemy);
    assert_eq!(player_tank(&engine).health, 0);

    // Ticks after the end report state without advancing time.
    let frozen = engine.time().tick;
    engine.tick(&InputIntents::default());
    assert_eq!(engine.time().tick, frozen);
}

#[test]
fn test_enemy_mode_follows_distance() {
    let mut engine = staged_engine();
    place_player(&mut engine, DVec2::new(100.0, 300.0), 0.0);
    engine.spawn_enemy_at(0, DVec2::new(500.0, 300.0));

    let snapshot = engine.tick(&InputIntents::default());
    assert_eq!(snapshot.enemies[0].mode, Some(AiMode::Far));
    let facing = snapshot.enemies[0].orientation;
    assert!((facing - std::f64::consts::PI).abs() < 1e-9);

    place_player(&mut engine, DVec2::new(400.0, 300.0), 0.0);
    let snapshot = engine.tick(&InputIntents::default());
    assert_eq!(snapshot.enemies[0].mode, Some(AiMode::Near));
}

#[test]
fn test_custom_grid_without_flags_rejected() {
    let grid = TileGrid::parse("0000\n0000\n").unwrap();
    assert!(MatchEngine::from_grid(MatchConfig::default(), &grid).is_err());
}
