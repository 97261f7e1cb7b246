//! Match state machine and scoreboard.
//!
//! `Menu -> Playing -> GameOver`, with restart from GameOver. Score only
//! grows during a match; lives never go below zero, and `game_over` is set
//! exactly once when they reach zero.

use barrage_core::constants::SPECIAL_COOLDOWN_MS;
use barrage_core::enums::{GamePhase, WeaponType};
use barrage_core::error::CommandError;
use barrage_core::settings::GameSettings;
use barrage_core::weapons::WeaponTable;

/// Result of the player taking one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerHit {
    /// A life was lost and some remain.
    Survived { lives: u32 },
    /// The last life was lost; the match is over.
    Fatal { final_score: u32 },
    /// The match had already ended. Nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct MatchState {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub current_weapon: WeaponType,
    pub fire_cooldown_ready: bool,
    pub special_attack_ready: bool,
    pub game_over: bool,
    /// Match time at which the special attack recharges.
    pub special_ready_at_ms: f64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: 0,
            level: 1,
            current_weapon: WeaponType::Basic,
            fire_cooldown_ready: true,
            special_attack_ready: true,
            game_over: false,
            special_ready_at_ms: 0.0,
        }
    }
}

impl MatchState {
    /// Fresh state for a new match.
    pub fn start(settings: &GameSettings) -> Self {
        Self {
            phase: GamePhase::Playing,
            lives: settings.initial_lives,
            current_weapon: starting_weapon(&settings.weapons),
            ..Self::default()
        }
    }

    /// Add points to the score. Ignored once the match is over.
    pub fn credit(&mut self, points: u32) {
        if self.phase == GamePhase::Playing {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Select the current weapon. Does not touch the special cooldown.
    pub fn switch_weapon(
        &mut self,
        weapon: WeaponType,
        catalog: &WeaponTable,
    ) -> Result<(), CommandError> {
        if !catalog.contains(weapon) {
            return Err(CommandError::WeaponUnavailable(weapon));
        }
        self.current_weapon = weapon;
        Ok(())
    }

    /// Milliseconds until the special attack recharges (0 when ready).
    pub fn special_remaining_ms(&self, now_ms: f64) -> f64 {
        (self.special_ready_at_ms - now_ms).max(0.0)
    }

    /// Claim the special attack, starting its cooldown.
    pub fn begin_special(&mut self, now_ms: f64) -> Result<(), CommandError> {
        let remaining_ms = self.special_remaining_ms(now_ms);
        if remaining_ms > 0.0 {
            return Err(CommandError::SpecialNotReady { remaining_ms });
        }
        self.special_ready_at_ms = now_ms + SPECIAL_COOLDOWN_MS;
        self.special_attack_ready = false;
        Ok(())
    }

    /// Recharge progress of the special attack in [0, 1].
    pub fn special_charge(&self, now_ms: f64) -> f64 {
        1.0 - (self.special_remaining_ms(now_ms) / SPECIAL_COOLDOWN_MS).clamp(0.0, 1.0)
    }

    /// Take one life. Reaching zero ends the match exactly once.
    pub fn register_player_hit(&mut self) -> PlayerHit {
        if self.game_over || self.phase != GamePhase::Playing {
            return PlayerHit::Ignored;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            self.phase = GamePhase::GameOver;
            PlayerHit::Fatal {
                final_score: self.score,
            }
        } else {
            PlayerHit::Survived { lives: self.lives }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

/// Basic when the catalog has it, otherwise the first catalog entry.
fn starting_weapon(catalog: &WeaponTable) -> WeaponType {
    if catalog.contains(WeaponType::Basic) {
        return WeaponType::Basic;
    }
    catalog
        .iter()
        .next()
        .map(|(weapon, _)| *weapon)
        .unwrap_or_default()
}
