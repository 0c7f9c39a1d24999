//! Headless tankfront host: loads configuration, runs one match on a game
//! loop thread, and prints the result.

mod autopilot;
mod config;
mod game_loop;
mod render;
mod state;

use std::process::ExitCode;

use crate::autopilot::Autopilot;
use crate::config::AppConfig;
use crate::game_loop::{spawn_game_loop, LoopSettings};
use crate::render::LogSink;
use crate::state::GameLoopCommand;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            return ExitCode::FAILURE;
        }
    };
    let engine = match config.build_engine() {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "failed to build match");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        map = ?config.map_path,
        time_scale = config.time_scale,
        realtime = config.realtime,
        autopilot_seed = ?config.autopilot_seed,
        "starting match"
    );

    let settings = LoopSettings {
        realtime: config.realtime,
        max_ticks: config.max_ticks,
    };
    let (cmd_tx, handle) = spawn_game_loop(
        engine,
        settings,
        config.autopilot_seed.map(Autopilot::new),
        Box::new(LogSink::new(config.snapshot_log_interval)),
    );

    let result = handle.join();
    // The loop has already stopped; this only matters if it is still draining.
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);

    match result {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => {
            tracing::info!("match stopped without a result");
            ExitCode::SUCCESS
        }
        Err(_) => {
            tracing::error!("game loop thread panicked");
            ExitCode::FAILURE
        }
    }
}
