//! Enemy AI system: runs the lifecycle FSM for each live enemy and applies
//! the resulting phase, position and tween changes.
//!
//! When an enemy finishes its entry it gets a repeating fire timer with a
//! per-enemy jittered interval.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use barrage_core::components::{Active, Enemy, Tween};
use barrage_core::enums::EnemyPhase;
use barrage_core::types::Position;

use barrage_enemy_ai::fsm::{evaluate, EnemyContext, TweenChange};
use barrage_enemy_ai::patterns::roll_fire_interval;

use crate::scheduler::{Scheduler, TimerKind};

struct PendingUpdate {
    entity: Entity,
    previous: EnemyPhase,
    phase: EnemyPhase,
    position: Option<Position>,
    tween: TweenChange,
    fire_interval_ms: f64,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scheduler: &mut Scheduler,
    now_ms: f64,
    field_width: f64,
) {
    let mut updates: Vec<PendingUpdate> = Vec::new();

    {
        let mut query = world.query::<(&Enemy, &Position, &Active, Option<&Tween>)>();
        for (entity, (enemy, pos, active, tween)) in query.iter() {
            if !active.0 || enemy.phase == EnemyPhase::Destroyed {
                continue;
            }

            let ctx = EnemyContext {
                phase: enemy.phase,
                position: *pos,
                tween: tween.copied(),
                now_ms,
                field_width,
            };
            let update = evaluate(&ctx, rng);

            // Only a tween moves the enemy here; otherwise velocity integration does.
            let position = tween.is_some().then_some(update.position);
            if update.phase_changed || position.is_some() {
                updates.push(PendingUpdate {
                    entity,
                    previous: enemy.phase,
                    phase: update.new_phase,
                    position,
                    tween: update.tween,
                    fire_interval_ms: enemy.fire_interval_ms,
                });
            }
        }
    }

    for update in updates {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(update.entity) {
            enemy.phase = update.phase;
        }
        if let Some(position) = update.position {
            if let Ok(mut pos) = world.get::<&mut Position>(update.entity) {
                *pos = position;
            }
        }
        match update.tween {
            TweenChange::Keep => {}
            TweenChange::Clear => {
                let _ = world.remove_one::<Tween>(update.entity);
            }
            TweenChange::Start(tween) => {
                let _ = world.insert_one(update.entity, tween);
            }
        }

        if update.previous == EnemyPhase::Entering && update.phase == EnemyPhase::Active {
            let interval = roll_fire_interval(update.fire_interval_ms, rng);
            scheduler.repeating(
                Some(update.entity),
                TimerKind::EnemyFire,
                now_ms + interval,
                interval,
            );
        }
    }
}
