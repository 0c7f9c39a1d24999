//! Game loop thread: runs the match engine at 60 Hz (times the time scale)
//! and hands each snapshot to a render sink.
//!
//! Commands arrive via `mpsc` channel. The loop ends on `Shutdown`, channel
//! disconnect, the tick limit, or the end of the match.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use tankfront_core::constants::TICK_RATE;
use tankfront_core::events::MatchOutcome;
use tankfront_sim::MatchEngine;

use crate::autopilot::Autopilot;
use crate::render::RenderSink;
use crate::state::{GameLoopCommand, HostIntents};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Below this time scale the loop stops ticking and only drains commands.
const IDLE_TIME_SCALE: f64 = 0.001;

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Sleep between ticks; otherwise run back to back.
    pub realtime: bool,
    /// Ticks to run before giving up without an outcome.
    pub max_ticks: Option<u64>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer and a handle yielding the
/// outcome, if the match ended.
pub fn spawn_game_loop(
    engine: MatchEngine,
    settings: LoopSettings,
    autopilot: Option<Autopilot>,
    mut sink: Box<dyn RenderSink + Send>,
) -> (
    mpsc::Sender<GameLoopCommand>,
    JoinHandle<Option<MatchOutcome>>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tankfront-game-loop".into())
        .spawn(move || run_game_loop(engine, &cmd_rx, settings, autopilot, sink.as_mut()))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Returns the outcome if the match ended.
pub fn run_game_loop(
    mut engine: MatchEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    settings: LoopSettings,
    mut autopilot: Option<Autopilot>,
    sink: &mut dyn RenderSink,
) -> Option<MatchOutcome> {
    let mut intents = HostIntents::new();
    let mut ticks_run: u64 = 0;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Intent(action, pressed)) => intents.apply(action, pressed),
                Ok(GameLoopCommand::Match(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!(ticks_run, "game loop shut down");
                    return engine.outcome();
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return engine.outcome(),
            }
        }

        let tick_duration = if settings.realtime {
            tick_duration(engine.time_scale())
        } else {
            Some(Duration::ZERO)
        };

        let Some(tick_duration) = tick_duration else {
            // Stopped clock: keep commands flowing so the scale can be raised again.
            engine.apply_pending_commands();
            std::thread::sleep(TICK_DURATION);
            next_tick_time = Instant::now();
            continue;
        };

        // 2. Autopilot presses land before the tick, like keyboard input would
        if let Some(autopilot) = autopilot.as_mut() {
            for (action, pressed) in autopilot.step() {
                intents.apply(action, pressed);
            }
        }

        // 3. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick(&intents.current());
        intents.end_tick();
        ticks_run += 1;

        // 4. Hand the snapshot to the renderer
        sink.present(&snapshot);

        if let Some(outcome) = snapshot.outcome {
            sink.game_over(&outcome);
            return Some(outcome);
        }
        if settings.max_ticks.is_some_and(|max| ticks_run >= max) {
            info!(ticks_run, "tick limit reached");
            return None;
        }

        // 5. Sleep until next tick
        if settings.realtime {
            let (next, sleep) = schedule_next(next_tick_time, Instant::now(), tick_duration);
            if sleep.is_none() && next != next_tick_time + tick_duration {
                debug!(ticks_run, "game loop fell behind, resetting clock");
            }
            next_tick_time = next;
            if let Some(sleep) = sleep {
                std::thread::sleep(sleep);
            }
        }
    }
}

/// Wall-clock duration of one tick at `time_scale`, or `None` when the
/// clock is stopped.
pub fn tick_duration(time_scale: f64) -> Option<Duration> {
    (time_scale > IDLE_TIME_SCALE).then(|| TICK_DURATION.div_f64(time_scale))
}

/// Next deadline and how long to sleep for it.
///
/// A loop more than two ticks behind resets its deadline to `now` rather than
/// running a burst of catch-up ticks.
pub fn schedule_next(
    deadline: Instant,
    now: Instant,
    tick_duration: Duration,
) -> (Instant, Option<Duration>) {
    let next = deadline + tick_duration;
    if next > now {
        (next, Some(next - now))
    } else if now - next > tick_duration * 2 {
        (now, None)
    } else {
        (next, None)
    }
}
