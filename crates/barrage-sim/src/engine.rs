//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems once per frame on the measured wall-clock delta, and
//! produces `MatchSnapshot`s. Completely headless, so the whole match can be
//! driven from tests.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use barrage_core::commands::PlayerCommand;
use barrage_core::constants::MAX_FRAME_DELTA_MS;
use barrage_core::enums::{GamePhase, WeaponType};
use barrage_core::error::CommandError;
use barrage_core::events::PresentationEvent;
use barrage_core::settings::GameSettings;
use barrage_core::state::MatchSnapshot;
use barrage_core::types::SimTime;

use crate::match_state::MatchState;
use crate::scheduler::Scheduler;
use crate::systems;
use crate::systems::player_control::{player_position, PlayerInput};
use crate::systems::wave_spawner::WaveSchedule;
use crate::weapon_system::WeaponSystem;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for the random rolls (entry offsets, wandering, fire jitter,
    /// bomber spreads).
    pub seed: u64,
    pub settings: GameSettings,
    /// When false, no formation waves spawn. Used for scripted setups.
    pub spawn_waves: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            settings: GameSettings::default(),
            spawn_waves: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    settings: GameSettings,
    spawn_waves: bool,
    rng: ChaCha8Rng,
    match_state: MatchState,
    input: PlayerInput,
    weapon_system: WeaponSystem,
    scheduler: Scheduler,
    wave_schedule: WaveSchedule,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<PresentationEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            settings: config.settings,
            spawn_waves: config.spawn_waves,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            match_state: MatchState::default(),
            input: PlayerInput::default(),
            weapon_system: WeaponSystem::new(),
            scheduler: Scheduler::new(),
            wave_schedule: WaveSchedule::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one frame of `delta_ms` wall-clock milliseconds
    /// and return the resulting snapshot. The delta is clamped to
    /// [0, MAX_FRAME_DELTA_MS]; outside `Playing` the clock does not move.
    pub fn tick(&mut self, delta_ms: f64) -> MatchSnapshot {
        self.process_commands();

        if self.match_state.is_playing() {
            let delta = if delta_ms.is_finite() {
                delta_ms.clamp(0.0, MAX_FRAME_DELTA_MS)
            } else {
                0.0
            };
            self.time.advance(delta);
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.match_state,
            &self.settings.weapons,
            self.wave_schedule.waves_spawned,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.match_state.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Read-only view of the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an already-Active enemy (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        variant: barrage_core::enums::EnemyVariant,
        position: barrage_core::types::Position,
    ) -> hecs::Entity {
        world_setup::spawn_enemy(&mut self.world, variant, position, None)
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// Process all queued commands. Rejections are logged and reported as
    /// presentation events; they never change state.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                debug!(%err, "command rejected");
                self.events.push(PresentationEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::StartMatch => {
                if !matches!(self.match_state.phase, GamePhase::Menu | GamePhase::GameOver) {
                    return Err(CommandError::WrongPhase(self.match_state.phase));
                }
                self.start_match();
            }
            PlayerCommand::ReturnToMenu => {
                if self.match_state.phase != GamePhase::GameOver {
                    return Err(CommandError::WrongPhase(self.match_state.phase));
                }
                self.reset_world();
                self.match_state = MatchState::default();
            }
            PlayerCommand::SetMovement { x, y } => {
                self.input.set_movement(x, y);
            }
            PlayerCommand::SetFiring { firing } => {
                self.input.firing = firing;
            }
            PlayerCommand::SwitchWeapon { weapon } => {
                self.require_playing()?;
                let weapon: WeaponType = weapon.parse()?;
                self.match_state
                    .switch_weapon(weapon, &self.settings.weapons)?;
            }
            PlayerCommand::TriggerSpecial => {
                self.require_playing()?;
                let source = player_position(&self.world).ok_or(CommandError::PlayerInactive)?;
                let now_ms = self.time.now_ms;
                self.match_state.begin_special(now_ms)?;
                systems::special::run(
                    &mut self.world,
                    self.match_state.current_weapon,
                    source,
                    &self.settings,
                    &mut self.match_state,
                    now_ms,
                    &mut self.events,
                );
            }
        }
        Ok(())
    }

    fn require_playing(&self) -> Result<(), CommandError> {
        if self.match_state.is_playing() {
            Ok(())
        } else {
            Err(CommandError::WrongPhase(self.match_state.phase))
        }
    }

    fn start_match(&mut self) {
        self.reset_world();
        self.match_state = MatchState::start(&self.settings);
        self.wave_schedule = if self.spawn_waves {
            WaveSchedule::default()
        } else {
            WaveSchedule::disabled()
        };
        world_setup::spawn_player(
            &mut self.world,
            self.settings.field_width,
            self.settings.field_height,
            self.settings.initial_lives,
        );
        info!(
            lives = self.settings.initial_lives,
            weapon = %self.match_state.current_weapon,
            "match started"
        );
    }

    fn reset_world(&mut self) {
        self.world.clear();
        self.scheduler.clear();
        self.weapon_system.reset();
        self.input = PlayerInput::default();
        self.time = SimTime::default();
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.now_ms;
        let (width, height) = (self.settings.field_width, self.settings.field_height);

        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave_schedule,
            &self.settings,
            now_ms,
        );
        // 2. Player input -> velocity
        systems::player_control::run(&mut self.world, &self.input, self.settings.player_speed);
        // 3. Enemy FSM (entry, wandering)
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            &mut self.scheduler,
            now_ms,
            width,
        );
        // 4. Due timers (enemy fire, invulnerability expiry)
        systems::timers::run(
            &mut self.world,
            &mut self.scheduler,
            &mut self.rng,
            now_ms,
            &mut self.events,
        );
        // 5. Held-trigger firing
        systems::weapons::run(
            &mut self.world,
            &mut self.weapon_system,
            &mut self.match_state,
            &self.settings.weapons,
            self.input.firing,
            now_ms,
            &mut self.events,
        );
        // 6. Homing steering and trails
        systems::projectiles::run(&mut self.world, &mut self.events);
        // 7. Movement integration
        systems::movement::run(&mut self.world, self.time.dt_secs());
        // 8. Field bounds and escapes
        systems::bounds::run(&mut self.world, width, height);
        // 9. Collision
        systems::collision::run(
            &mut self.world,
            &mut self.match_state,
            &mut self.scheduler,
            &self.settings,
            now_ms,
            &mut self.events,
        );
        // 10. Cleanup (inactive, expired, out of bounds)
        systems::cleanup::run(
            &mut self.world,
            &mut self.scheduler,
            &mut self.despawn_buffer,
            now_ms,
            width,
            height,
        );

        self.match_state.special_attack_ready =
            self.match_state.special_remaining_ms(now_ms) <= 0.0;
    }
}
