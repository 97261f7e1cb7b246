//! Collision resolution: three axis-aligned overlap passes per frame.
//!
//! 1. player projectiles vs enemies (each projectile hits at most one enemy)
//! 2. enemy projectiles vs player
//! 3. enemies vs player (ram)
//!
//! An invulnerable player ignores hits entirely: the projectile or enemy
//! passes through untouched. Every check re-reads live state, so a second
//! overlap in the same frame sees the first one's effect (an inactive
//! projectile, a destroyed enemy, an invulnerable or dead player).

use hecs::{Entity, World};
use tracing::info;

use barrage_core::components::{Active, Enemy, Hitbox, PlayerShip, Projectile};
use barrage_core::constants::{DEATH_FADE_MS, INVULNERABILITY_MS};
use barrage_core::enums::{EffectKind, EnemyPhase, Owner, WeaponType};
use barrage_core::events::PresentationEvent;
use barrage_core::settings::GameSettings;
use barrage_core::types::{Color, Position};

use crate::damage::{self, damage_enemy, DamageOutcome, EXPLOSION_SOUND};
use crate::match_state::{MatchState, PlayerHit};
use crate::scheduler::{Scheduler, TimerKind};

type Body = (Entity, Position, Hitbox);

/// Whether two axis-aligned boxes overlap.
pub fn overlaps(a_pos: &Position, a_box: &Hitbox, b_pos: &Position, b_box: &Hitbox) -> bool {
    (a_pos.x - b_pos.x).abs() < a_box.half_width + b_box.half_width
        && (a_pos.y - b_pos.y).abs() < a_box.half_height + b_box.half_height
}

pub fn run(
    world: &mut World,
    match_state: &mut MatchState,
    scheduler: &mut Scheduler,
    settings: &GameSettings,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    player_shots_vs_enemies(world, match_state, settings, now_ms, events);
    enemy_shots_vs_player(world, match_state, scheduler, now_ms, events);
    rams_vs_player(world, match_state, scheduler, now_ms, events);
}

fn player_shots_vs_enemies(
    world: &mut World,
    match_state: &mut MatchState,
    settings: &GameSettings,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    let shots: Vec<(Body, Option<WeaponType>, f64)> =
        projectiles_of(world, Owner::Player, now_ms)
            .into_iter()
            .filter(|(_, weapon, _)| *weapon != Some(WeaponType::Beam))
            .collect();
    let enemies = live_enemies(world);

    for ((shot, shot_pos, shot_box), weapon, shot_damage) in shots {
        for &(enemy, enemy_pos, enemy_box) in &enemies {
            if !overlaps(&shot_pos, &shot_box, &enemy_pos, &enemy_box) || !is_live_enemy(world, enemy)
            {
                continue;
            }

            deactivate(world, shot);
            let color = weapon
                .and_then(|w| settings.weapons.get(w))
                .map(|config| config.particle_color)
                .unwrap_or(Color::WHITE);
            events.push(PresentationEvent::effect(
                EffectKind::Impact,
                shot_pos,
                color,
                1.0,
            ));

            if damage_enemy(world, enemy, shot_damage, events, match_state)
                == DamageOutcome::Destroyed
            {
                match_state.credit(settings.score_per_kill);
            }
            break;
        }
    }
}

fn enemy_shots_vs_player(
    world: &mut World,
    match_state: &mut MatchState,
    scheduler: &mut Scheduler,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    let Some((player, player_pos, player_box)) = player_body(world) else {
        return;
    };

    for ((shot, shot_pos, shot_box), _, _) in projectiles_of(world, Owner::Enemy, now_ms) {
        if !overlaps(&shot_pos, &shot_box, &player_pos, &player_box) {
            continue;
        }
        match player_vulnerability(world, player) {
            Vulnerability::Dead => break,
            Vulnerability::Invulnerable => continue,
            Vulnerability::Vulnerable => {}
        }

        deactivate(world, shot);
        events.push(PresentationEvent::effect(
            EffectKind::Impact,
            shot_pos,
            Color::RED,
            1.0,
        ));
        events.push(PresentationEvent::Shake {
            duration_ms: 200.0,
            intensity: 0.01,
        });
        hit_player(world, player, match_state, scheduler, now_ms, events);
    }
}

fn rams_vs_player(
    world: &mut World,
    match_state: &mut MatchState,
    scheduler: &mut Scheduler,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    let Some((player, player_pos, player_box)) = player_body(world) else {
        return;
    };

    for (enemy, enemy_pos, enemy_box) in live_enemies(world) {
        if !overlaps(&enemy_pos, &enemy_box, &player_pos, &player_box) {
            continue;
        }
        match player_vulnerability(world, player) {
            Vulnerability::Dead => break,
            Vulnerability::Invulnerable => continue,
            Vulnerability::Vulnerable => {}
        }

        let Some(pos) = damage::retire_enemy(world, enemy) else {
            continue;
        };
        events.push(damage::ram_explosion(pos));
        events.push(PresentationEvent::Shake {
            duration_ms: 400.0,
            intensity: 0.02,
        });
        hit_player(world, player, match_state, scheduler, now_ms, events);
    }
}

/// Take a life from the player. Survivors get an invulnerability window;
/// losing the last life ends the match.
fn hit_player(
    world: &mut World,
    player: Entity,
    match_state: &mut MatchState,
    scheduler: &mut Scheduler,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    let Ok((ship, pos, active)) =
        world.query_one_mut::<(&mut PlayerShip, &Position, &mut Active)>(player)
    else {
        return;
    };

    match match_state.register_player_hit() {
        PlayerHit::Ignored => {}
        PlayerHit::Survived { lives } => {
            ship.lives = lives;
            ship.invulnerable = true;
            ship.invulnerable_until_ms = now_ms + INVULNERABILITY_MS;
            events.push(PresentationEvent::effect(
                EffectKind::PlayerFlash,
                *pos,
                Color::WHITE,
                1.0,
            ));
            scheduler.once(
                Some(player),
                TimerKind::InvulnerabilityExpiry,
                ship.invulnerable_until_ms,
            );
        }
        PlayerHit::Fatal { final_score } => {
            ship.lives = 0;
            active.0 = false;
            events.push(PresentationEvent::effect(
                EffectKind::Explosion,
                *pos,
                Color::EXPLOSION,
                1.5,
            ));
            events.push(PresentationEvent::sound(EXPLOSION_SOUND, 0.7, 0.0));
            events.push(PresentationEvent::Fade {
                duration_ms: DEATH_FADE_MS,
            });
            events.push(PresentationEvent::MatchEnded { final_score });
            scheduler.cancel_owner(player);
            info!(final_score, "game over");
        }
    }
}

enum Vulnerability {
    Vulnerable,
    Invulnerable,
    Dead,
}

fn player_vulnerability(world: &mut World, player: Entity) -> Vulnerability {
    match world.query_one_mut::<(&PlayerShip, &Active)>(player) {
        Ok((_, active)) if !active.0 => Vulnerability::Dead,
        Ok((ship, _)) if ship.invulnerable => Vulnerability::Invulnerable,
        Ok(_) => Vulnerability::Vulnerable,
        Err(_) => Vulnerability::Dead,
    }
}

fn player_body(world: &World) -> Option<Body> {
    world
        .query::<(&PlayerShip, &Position, &Hitbox, &Active)>()
        .iter()
        .find(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, hitbox, _))| (entity, *pos, *hitbox))
}

fn live_enemies(world: &World) -> Vec<Body> {
    world
        .query::<(&Enemy, &Position, &Hitbox, &Active)>()
        .iter()
        .filter(|(_, (enemy, _, _, active))| active.0 && enemy.phase != EnemyPhase::Destroyed)
        .map(|(entity, (_, pos, hitbox, _))| (entity, *pos, *hitbox))
        .collect()
}

/// Live projectiles of one side. Expired shots are skipped here, since
/// cleanup only removes them after this pass.
fn projectiles_of(
    world: &World,
    owner: Owner,
    now_ms: f64,
) -> Vec<(Body, Option<WeaponType>, f64)> {
    world
        .query::<(&Projectile, &Position, &Hitbox, &Active)>()
        .iter()
        .filter(|(_, (projectile, _, _, active))| {
            active.0 && projectile.owner == owner && !projectile.is_expired(now_ms)
        })
        .map(|(entity, (projectile, pos, hitbox, _))| {
            ((entity, *pos, *hitbox), projectile.weapon, projectile.damage)
        })
        .collect()
}

fn is_live_enemy(world: &World, entity: Entity) -> bool {
    world
        .get::<&Enemy>(entity)
        .map(|enemy| enemy.phase != EnemyPhase::Destroyed)
        .unwrap_or(false)
        && world.get::<&Active>(entity).map(|a| a.0).unwrap_or(false)
}

fn deactivate(world: &mut World, entity: Entity) {
    if let Ok(mut active) = world.get::<&mut Active>(entity) {
        active.0 = false;
    }
}
