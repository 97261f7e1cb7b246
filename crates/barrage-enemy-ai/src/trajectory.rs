//! Scripted trajectories: easing curves, tween sampling, and the entry and
//! wander paths handed out by the wave spawner and the enemy FSM.

use std::f64::consts::PI;

use rand::Rng;

use barrage_core::components::Tween;
use barrage_core::constants::*;
use barrage_core::enums::Easing;
use barrage_core::types::Position;

/// Overshoot constant for back easing.
const BACK_OVERSHOOT: f64 = 1.70158;

/// Map linear progress `t` in [0, 1] through an easing curve.
pub fn ease(easing: Easing, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        Easing::BackOut => {
            let c3 = BACK_OVERSHOOT + 1.0;
            let u = t - 1.0;
            1.0 + c3 * u * u * u + BACK_OVERSHOOT * u * u
        }
    }
}

/// Sample a tween at `now_ms`. Returns the position and whether the tween has finished.
pub fn sample(tween: &Tween, now_ms: f64) -> (Position, bool) {
    let local = now_ms - tween.start_ms - tween.delay_ms;
    if local <= 0.0 {
        return (tween.from, false);
    }
    if tween.duration_ms <= 0.0 || local >= tween.duration_ms {
        return (tween.to, true);
    }

    let k = ease(tween.easing, local / tween.duration_ms);
    let pos = Position::new(
        tween.from.x + (tween.to.x - tween.from.x) * k,
        tween.from.y + (tween.to.y - tween.from.y) * k,
    );
    (pos, false)
}

/// Formation slot position before entry: columns spread evenly between the
/// side margins, rows stacked above the top edge.
pub fn formation_slot(row: usize, col: usize, cols: usize, field_width: f64) -> Position {
    let span = field_width - 2.0 * FORMATION_MARGIN_X;
    let frac = if cols > 1 {
        col as f64 / (cols - 1) as f64
    } else {
        0.5
    };
    Position::new(
        FORMATION_MARGIN_X + span * frac,
        FORMATION_START_Y - row as f64 * FORMATION_ROW_SPACING,
    )
}

/// Front-row entry: eased swoop to a randomized point near the top of the field.
pub fn swoop_entry(rng: &mut impl Rng, from: Position, now_ms: f64) -> Tween {
    let lateral = rng.gen_range(-SWOOP_LATERAL_RANGE..=SWOOP_LATERAL_RANGE);
    let y = rng.gen_range(SWOOP_MIN_Y..=SWOOP_MAX_Y);
    Tween {
        from,
        to: Position::new(from.x + lateral, y),
        start_ms: now_ms,
        delay_ms: 0.0,
        duration_ms: SWOOP_DURATION_MS,
        easing: Easing::SineInOut,
    }
}

/// Back-row entry: straight drop to a row-dependent resting height,
/// staggered by row.
pub fn drop_entry(from: Position, row: usize, now_ms: f64) -> Tween {
    Tween {
        from,
        to: Position::new(from.x, DROP_BASE_Y + row as f64 * DROP_ROW_SPACING),
        start_ms: now_ms,
        delay_ms: row as f64 * DROP_STAGGER_MS,
        duration_ms: DROP_DURATION_MS,
        easing: Easing::BackOut,
    }
}

/// Relocation to a random point in the upper band of the field.
pub fn wander_tween(rng: &mut impl Rng, from: Position, now_ms: f64, field_width: f64) -> Tween {
    let max_x = (field_width - WANDER_MARGIN_X).max(WANDER_MARGIN_X);
    let to = Position::new(
        rng.gen_range(WANDER_MARGIN_X..=max_x),
        rng.gen_range(WANDER_MIN_Y..=WANDER_MAX_Y),
    );
    Tween {
        from,
        to,
        start_ms: now_ms,
        delay_ms: 0.0,
        duration_ms: WANDER_DURATION_MS,
        easing: Easing::SineInOut,
    }
}
