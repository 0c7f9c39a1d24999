//! Simulation constants and tuning parameters.
//!
//! Distances are arena pixels, speeds are pixels per tick, angles are radians.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Playable arena width. The tile grid may extend past it; nothing is clamped
/// or culled against the grid, only against these bounds.
pub const ARENA_WIDTH: f64 = 800.0;

/// Playable arena height.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Side length of one map tile (walls and flags are one tile each).
pub const TILE_SIZE: f64 = 32.0;

/// Inset applied to the player clamp on every edge, beyond the one-tile margin.
pub const PLAYER_CLAMP_SLACK: f64 = 1.0;

// --- Tanks ---

/// Side length of a tank's square hit box.
pub const TANK_SIZE: f64 = 32.0;

/// Tank movement per tick when driving.
pub const TANK_SPEED: f64 = 3.0;

/// Rotation per tick while a rotate intent is held (~5.6 degrees).
pub const ROTATION_STEP: f64 = std::f64::consts::PI / 32.0;

/// Starting (and maximum) tank health.
pub const TANK_MAX_HEALTH: u32 = 100;

/// Initial player orientation (facing up the screen).
pub const PLAYER_START_FACING: f64 = -std::f64::consts::FRAC_PI_2;

/// Initial enemy orientation (facing left).
pub const ENEMY_START_FACING: f64 = std::f64::consts::PI;

/// Player spawn, in tiles (top-left corner of the hit box).
pub const PLAYER_START_TILE: (f64, f64) = (20.5, 9.5);

/// Enemy squad spawns, in tiles, one per lane along the top corridor.
pub const ENEMY_START_TILES: [(f64, f64); 4] = [(2.5, 1.5), (11.5, 1.5), (19.5, 1.5), (27.5, 1.5)];

/// Number of enemies spawned at match start.
pub const ENEMY_SQUAD_SIZE: usize = ENEMY_START_TILES.len();

// --- Projectiles ---

/// Side length of a projectile's square hit box.
pub const PROJECTILE_SIZE: f64 = 6.0;

/// Projectile movement per tick.
pub const PROJECTILE_SPEED: f64 = 5.0;

/// Spawn offset from the shooter's center, as a fraction of tank size (cannon tip).
pub const CANNON_LENGTH_FACTOR: f64 = 0.8;

// --- Damage and scoring ---

/// Damage dealt to a flag by any projectile.
pub const FLAG_HIT_DAMAGE: u32 = 10;

/// Damage dealt to the player by an enemy projectile.
pub const PLAYER_HIT_DAMAGE: u32 = 10;

/// Damage dealt to an enemy by a player projectile.
pub const ENEMY_HIT_DAMAGE: u32 = 25;

/// Score awarded per destroyed enemy.
pub const KILL_REWARD: u32 = 100;

/// Starting flag health.
pub const FLAG_MAX_HEALTH: u32 = 100;

// --- Enemy AI ---

/// Distance below which an enemy strafes instead of closing in.
pub const ENEMY_NEAR_RANGE: f64 = 200.0;

/// Ticks that must elapse (strictly) between shots in near mode. 1 s at 60 Hz.
pub const NEAR_FIRE_INTERVAL_TICKS: u64 = 60;

/// Ticks that must elapse (strictly) between shots in far mode. 2 s at 60 Hz.
pub const FAR_FIRE_INTERVAL_TICKS: u64 = 120;

// --- Host ---

/// Time scale bounds accepted by `SetTimeScale`.
pub const MIN_TIME_SCALE: f64 = 0.0;
pub const MAX_TIME_SCALE: f64 = 4.0;
