//! Simulation constants and tuning parameters.
//!
//! Values that players may want to retune live in `GameSettings`; these are
//! the fixed rules of the combat model.

// --- Frame timing ---

/// Nominal presentation frame rate (Hz). The simulation itself runs on the
/// measured wall-clock delta.
pub const TARGET_FPS: u32 = 60;

/// Upper bound on a single frame's delta (ms) so a stalled host cannot
/// teleport entities through each other.
pub const MAX_FRAME_DELTA_MS: f64 = 100.0;

// --- Play field ---

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

/// Projectiles farther than this outside the field are culled.
pub const PROJECTILE_CULL_MARGIN: f64 = 50.0;

/// Enemies this far below the bottom edge have escaped.
pub const ENEMY_ESCAPE_MARGIN: f64 = 100.0;

// --- Player ---

pub const PLAYER_SPAWN_X: f64 = FIELD_WIDTH / 2.0;
pub const PLAYER_SPAWN_Y: f64 = FIELD_HEIGHT - 80.0;
pub const PLAYER_HALF_EXTENT: f64 = 19.2;

/// Invulnerability granted after surviving a hit (ms).
pub const INVULNERABILITY_MS: f64 = 2000.0;

// --- Projectiles ---

/// Default projectile lifespan (ms).
pub const PROJECTILE_TTL_MS: f64 = 5000.0;

/// Player shots spawn this far ahead of the ship.
pub const MUZZLE_OFFSET: f64 = 20.0;

/// Enemy shots spawn this far below the enemy.
pub const ENEMY_MUZZLE_OFFSET: f64 = 20.0;

pub const BULLET_HALF_WIDTH: f64 = 4.0;
pub const BULLET_HALF_HEIGHT: f64 = 8.0;

/// Visual and hitbox scale of plasma shots.
pub const PLASMA_SCALE: f64 = 1.5;

/// Damage carried by every enemy projectile. The player loses one life per hit.
pub const ENEMY_PROJECTILE_DAMAGE: f64 = 1.0;

// --- Weapons ---

/// Lateral offset of each twin missile from the ship.
pub const MISSILE_LATERAL_OFFSET: f64 = 15.0;

/// Initial outward drift of twin missiles (u/s).
pub const MISSILE_OUTWARD_SPEED: f64 = 20.0;

/// Missile target search radius.
pub const MISSILE_SEEK_RADIUS: f64 = 300.0;

/// Missile heading change per update (rad).
pub const MISSILE_TURN_RATE: f64 = 0.05;

/// Continuous beam lateral hit tolerance.
pub const BEAM_HALF_WIDTH: f64 = 20.0;

// --- Special attacks ---

/// Shared special-attack recharge (ms). Not reset by switching weapons.
pub const SPECIAL_COOLDOWN_MS: f64 = 5000.0;

/// Basic fan: -60..=60 degrees in 15 degree steps.
pub const SPREAD_FAN_HALF_ANGLE_DEG: i32 = 60;
pub const SPREAD_FAN_STEP_DEG: i32 = 15;

/// Plasma blast centre sits this far ahead of the ship.
pub const PLASMA_BLAST_FORWARD_OFFSET: f64 = 50.0;
pub const PLASMA_BLAST_RADIUS: f64 = 200.0;
pub const PLASMA_BLAST_DAMAGE: f64 = 5.0;
pub const PLASMA_BLAST_IMPULSE_FACTOR: f64 = 2.0;

pub const MISSILE_SWARM_MAX_TARGETS: usize = 5;
pub const MISSILE_SWARM_SPEED: f64 = 300.0;
pub const MISSILE_SWARM_TURN_RATE: f64 = 0.1;

pub const BEAM_STRIKE_HALF_WIDTH: f64 = 30.0;
pub const BEAM_STRIKE_DAMAGE: f64 = 10.0;
pub const BEAM_STRIKE_LENGTH: f64 = 600.0;

// --- Enemies ---

/// Hitbox half-extent of an enemy at scale 1.0.
pub const ENEMY_BASE_HALF_EXTENT: f64 = 16.0;

/// Random spread applied once to an enemy's base fire interval (ms).
pub const ENEMY_FIRE_JITTER_MS: f64 = 1000.0;

/// Per-frame chance (1 in N) that an Active enemy starts wandering.
pub const WANDER_CHANCE_DENOM: u32 = 1000;
pub const WANDER_DURATION_MS: f64 = 2000.0;
pub const WANDER_MARGIN_X: f64 = 100.0;
pub const WANDER_MIN_Y: f64 = 100.0;
pub const WANDER_MAX_Y: f64 = 300.0;

/// Bomber side-shot chance (1 in N).
pub const BOMBER_SPREAD_CHANCE_DENOM: u32 = 3;
pub const BOMBER_SPREAD_DEG: f64 = 30.0;
pub const BOMBER_SIDE_OFFSET: f64 = 10.0;

pub const BOSS_BURST_COUNT: usize = 8;
pub const BOSS_BULLET_SCALE: f64 = 1.5;
pub const ELITE_BULLET_SCALE: f64 = 1.3;

/// Enemy shot sound chance (1 in N).
pub const ENEMY_SHOT_SOUND_CHANCE_DENOM: u32 = 3;

// --- Waves ---

pub const WAVE_INTERVAL_MS: f64 = 8000.0;
pub const FORMATION_ROWS: usize = 3;
pub const FORMATION_COLS: usize = 8;
pub const FORMATION_MARGIN_X: f64 = 100.0;
pub const FORMATION_START_Y: f64 = -100.0;
pub const FORMATION_ROW_SPACING: f64 = 60.0;

pub const SWOOP_DURATION_MS: f64 = 3000.0;
pub const SWOOP_LATERAL_RANGE: f64 = 200.0;
pub const SWOOP_MIN_Y: f64 = 100.0;
pub const SWOOP_MAX_Y: f64 = 200.0;

pub const DROP_DURATION_MS: f64 = 2500.0;
pub const DROP_BASE_Y: f64 = 100.0;
pub const DROP_ROW_SPACING: f64 = 70.0;
pub const DROP_STAGGER_MS: f64 = 200.0;

// --- Match ---

/// Fade length handed to the camera collaborator on player death.
pub const DEATH_FADE_MS: f64 = 1500.0;
