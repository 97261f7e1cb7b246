//! Enemy lifecycle finite state machine.
//!
//! `Entering -> Active <-> Wandering`, with `Destroyed` terminal. Damage and
//! destruction are applied by the simulation; this module only decides
//! movement-driven transitions. Plain data in, plain data out.

use rand::Rng;

use barrage_core::components::Tween;
use barrage_core::constants::WANDER_CHANCE_DENOM;
use barrage_core::enums::EnemyPhase;
use barrage_core::types::Position;

use crate::trajectory::{sample, wander_tween};

/// Input to the FSM for a single enemy.
pub struct EnemyContext {
    pub phase: EnemyPhase,
    pub position: Position,
    pub tween: Option<Tween>,
    pub now_ms: f64,
    pub field_width: f64,
}

/// What to do with the enemy's tween component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenChange {
    Keep,
    Clear,
    Start(Tween),
}

/// Output from the FSM.
pub struct EnemyUpdate {
    pub new_phase: EnemyPhase,
    /// Position to write back; unchanged when no tween is driving the enemy.
    pub position: Position,
    pub tween: TweenChange,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext, rng: &mut impl Rng) -> EnemyUpdate {
    match ctx.phase {
        EnemyPhase::Entering => follow_tween(ctx, EnemyPhase::Entering),
        EnemyPhase::Wandering => follow_tween(ctx, EnemyPhase::Wandering),
        EnemyPhase::Active => evaluate_active(ctx, rng),
        EnemyPhase::Destroyed => no_change(ctx),
    }
}

/// Advance along the current tween; on completion settle into Active.
fn follow_tween(ctx: &EnemyContext, phase: EnemyPhase) -> EnemyUpdate {
    let Some(tween) = ctx.tween else {
        return EnemyUpdate {
            new_phase: EnemyPhase::Active,
            position: ctx.position,
            tween: TweenChange::Keep,
            phase_changed: true,
        };
    };

    let (position, finished) = sample(&tween, ctx.now_ms);
    if finished {
        EnemyUpdate {
            new_phase: EnemyPhase::Active,
            position,
            tween: TweenChange::Clear,
            phase_changed: true,
        }
    } else {
        EnemyUpdate {
            new_phase: phase,
            position,
            tween: TweenChange::Keep,
            phase_changed: false,
        }
    }
}

fn evaluate_active(ctx: &EnemyContext, rng: &mut impl Rng) -> EnemyUpdate {
    if rng.gen_range(0..WANDER_CHANCE_DENOM) == 0 {
        let tween = wander_tween(rng, ctx.position, ctx.now_ms, ctx.field_width);
        return EnemyUpdate {
            new_phase: EnemyPhase::Wandering,
            position: ctx.position,
            tween: TweenChange::Start(tween),
            phase_changed: true,
        };
    }
    no_change(ctx)
}

fn no_change(ctx: &EnemyContext) -> EnemyUpdate {
    EnemyUpdate {
        new_phase: ctx.phase,
        position: ctx.position,
        tween: TweenChange::Keep,
        phase_changed: false,
    }
}
