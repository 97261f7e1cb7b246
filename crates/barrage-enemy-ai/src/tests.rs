#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use barrage_core::components::Tween;
    use barrage_core::constants::*;
    use barrage_core::enums::{Easing, EnemyPhase, EnemyVariant};
    use barrage_core::types::Position;

    use crate::fsm::{evaluate, EnemyContext, TweenChange};
    use crate::patterns::{plan_shots, roll_fire_interval};
    use crate::profiles::get_profile;
    use crate::trajectory::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn linear_tween(delay_ms: f64) -> Tween {
        Tween {
            from: Position::new(0.0, 0.0),
            to: Position::new(100.0, 200.0),
            start_ms: 1000.0,
            delay_ms,
            duration_ms: 1000.0,
            easing: Easing::Linear,
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_variant_profiles_escalate() {
        let basic = get_profile(EnemyVariant::Basic);
        let bomber = get_profile(EnemyVariant::Bomber);
        let elite = get_profile(EnemyVariant::Elite);
        let boss = get_profile(EnemyVariant::Boss);

        assert!(basic.health < bomber.health && bomber.health < elite.health);
        assert!(elite.health < boss.health);
        assert!(basic.fire_interval_ms > boss.fire_interval_ms);
        assert_eq!(boss.score_value, 1000);
        assert_relative_eq!(boss.half_extent(), 32.0);
        assert_relative_eq!(basic.half_extent(), 12.8);
    }

    // ---- Easing / tweens ----

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::SineInOut, Easing::BackOut] {
            assert_relative_eq!(ease(easing, 0.0), 0.0, epsilon = 1e-12);
            assert_relative_eq!(ease(easing, 1.0), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(ease(Easing::SineInOut, 0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_back_out_overshoots() {
        assert!(ease(Easing::BackOut, 0.7) > 1.0, "Back easing should overshoot");
    }

    #[test]
    fn test_tween_waits_for_delay() {
        let tween = linear_tween(500.0);
        let (pos, done) = sample(&tween, 1400.0);
        assert_eq!(pos, tween.from);
        assert!(!done);
    }

    #[test]
    fn test_tween_midpoint_and_completion() {
        let tween = linear_tween(0.0);
        let (mid, done) = sample(&tween, 1500.0);
        assert!(!done);
        assert_relative_eq!(mid.x, 50.0);
        assert_relative_eq!(mid.y, 100.0);

        let (end, done) = sample(&tween, 2500.0);
        assert!(done);
        assert_eq!(end, tween.to);
    }

    // ---- Formation / entries ----

    #[test]
    fn test_formation_slots_span_field() {
        let first = formation_slot(0, 0, FORMATION_COLS, FIELD_WIDTH);
        let last = formation_slot(0, FORMATION_COLS - 1, FORMATION_COLS, FIELD_WIDTH);
        assert_relative_eq!(first.x, 100.0);
        assert_relative_eq!(last.x, 700.0);
        assert_relative_eq!(first.y, -100.0);

        let back = formation_slot(2, 3, FORMATION_COLS, FIELD_WIDTH);
        assert_relative_eq!(back.y, -220.0);
    }

    #[test]
    fn test_swoop_entry_stays_in_range() {
        let mut rng = rng();
        let from = Position::new(400.0, -100.0);
        for _ in 0..200 {
            let tween = swoop_entry(&mut rng, from, 0.0);
            assert!((tween.to.x - from.x).abs() <= SWOOP_LATERAL_RANGE);
            assert!(tween.to.y >= SWOOP_MIN_Y && tween.to.y <= SWOOP_MAX_Y);
            assert_relative_eq!(tween.duration_ms, 3000.0);
            assert_eq!(tween.easing, Easing::SineInOut);
        }
    }

    #[test]
    fn test_drop_entry_staggers_by_row() {
        let tween = drop_entry(Position::new(250.0, -220.0), 2, 8000.0);
        assert_relative_eq!(tween.to.x, 250.0);
        assert_relative_eq!(tween.to.y, 240.0);
        assert_relative_eq!(tween.delay_ms, 400.0);
        assert_relative_eq!(tween.start_ms, 8000.0);
    }

    // ---- FSM ----

    fn context(phase: EnemyPhase, tween: Option<Tween>, now_ms: f64) -> EnemyContext {
        EnemyContext {
            phase,
            position: Position::new(300.0, 150.0),
            tween,
            now_ms,
            field_width: FIELD_WIDTH,
        }
    }

    #[test]
    fn test_entering_holds_until_tween_completes() {
        let mut rng = rng();
        let update = evaluate(&context(EnemyPhase::Entering, Some(linear_tween(0.0)), 1500.0), &mut rng);
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, EnemyPhase::Entering);
        assert_eq!(update.tween, TweenChange::Keep);
        assert_relative_eq!(update.position.x, 50.0);
    }

    #[test]
    fn test_entering_completes_to_active() {
        let mut rng = rng();
        let update = evaluate(&context(EnemyPhase::Entering, Some(linear_tween(0.0)), 2000.0), &mut rng);
        assert!(update.phase_changed);
        assert_eq!(update.new_phase, EnemyPhase::Active);
        assert_eq!(update.tween, TweenChange::Clear);
        assert_eq!(update.position, Position::new(100.0, 200.0));
    }

    #[test]
    fn test_active_occasionally_wanders() {
        let mut rng = rng();
        let ctx = context(EnemyPhase::Active, None, 0.0);
        let mut wanders = 0;
        for _ in 0..20_000 {
            let update = evaluate(&ctx, &mut rng);
            if update.phase_changed {
                assert_eq!(update.new_phase, EnemyPhase::Wandering);
                let TweenChange::Start(tween) = update.tween else {
                    panic!("Wandering must start a tween");
                };
                assert!(tween.to.x >= WANDER_MARGIN_X && tween.to.x <= FIELD_WIDTH - WANDER_MARGIN_X);
                assert!(tween.to.y >= WANDER_MIN_Y && tween.to.y <= WANDER_MAX_Y);
                wanders += 1;
            }
        }
        // Expect ~20 at 1-in-1000; a wide band keeps the test robust.
        assert!((5..=60).contains(&wanders), "Unexpected wander count {wanders}");
    }

    #[test]
    fn test_wandering_returns_to_active() {
        let mut rng = rng();
        let update = evaluate(&context(EnemyPhase::Wandering, Some(linear_tween(0.0)), 9000.0), &mut rng);
        assert_eq!(update.new_phase, EnemyPhase::Active);
        assert_eq!(update.tween, TweenChange::Clear);
    }

    #[test]
    fn test_destroyed_is_terminal() {
        let mut rng = rng();
        let update = evaluate(&context(EnemyPhase::Destroyed, None, 0.0), &mut rng);
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, EnemyPhase::Destroyed);
    }

    // ---- Shot patterns ----

    #[test]
    fn test_basic_shoots_straight_down() {
        let mut rng = rng();
        let shots = plan_shots(
            EnemyVariant::Basic,
            Position::new(200.0, 100.0),
            Position::new(400.0, 520.0),
            200.0,
            &mut rng,
        );
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].origin, Position::new(200.0, 120.0));
        assert_relative_eq!(shots[0].velocity.x, 0.0);
        assert_relative_eq!(shots[0].velocity.y, 200.0);
    }

    #[test]
    fn test_bomber_spread_is_occasional_and_symmetric() {
        let mut rng = rng();
        let mut singles = 0;
        let mut spreads = 0;
        for _ in 0..300 {
            let shots = plan_shots(
                EnemyVariant::Bomber,
                Position::new(200.0, 100.0),
                Position::new(400.0, 520.0),
                220.0,
                &mut rng,
            );
            match shots.len() {
                1 => singles += 1,
                3 => {
                    spreads += 1;
                    let (left, right) = (shots[0], shots[1]);
                    assert_relative_eq!(left.velocity.x, -right.velocity.x, epsilon = 1e-9);
                    assert_relative_eq!(left.velocity.y, right.velocity.y, epsilon = 1e-9);
                    assert!(left.velocity.y > 0.0);
                    assert_relative_eq!(left.velocity.speed(), 220.0, epsilon = 1e-9);
                }
                n => panic!("Bomber fired {n} shots"),
            }
        }
        assert!(singles > spreads, "Spread should be the minority outcome");
        assert!(spreads > 50, "Spread should occur roughly 1 in 3 times");
    }

    #[test]
    fn test_elite_aims_at_target() {
        let mut rng = rng();
        let origin = Position::new(100.0, 100.0);
        let target = Position::new(400.0, 500.0);
        let shots = plan_shots(EnemyVariant::Elite, origin, target, 250.0, &mut rng);
        assert_eq!(shots.len(), 1);
        let v = shots[0].velocity;
        assert_relative_eq!(v.x / v.speed(), 0.6, epsilon = 1e-9);
        assert_relative_eq!(v.y / v.speed(), 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_boss_radial_burst_plus_aimed_shot() {
        let mut rng = rng();
        let origin = Position::new(400.0, 150.0);
        let target = Position::new(400.0, 520.0);
        let shots = plan_shots(EnemyVariant::Boss, origin, target, 300.0, &mut rng);
        assert_eq!(shots.len(), 9);

        let burst: Vec<_> = shots.iter().filter(|s| s.trail.is_some()).collect();
        assert_eq!(burst.len(), 8);
        // First burst shot is centred on the target bearing (straight down).
        assert_relative_eq!(burst[0].velocity.heading(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        for s in &shots {
            assert_relative_eq!(s.velocity.speed(), 300.0, epsilon = 1e-9);
        }

        let aimed = shots.last().unwrap();
        assert!(aimed.trail.is_none());
        assert_relative_eq!(aimed.velocity.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fire_interval_jitter_bounds() {
        let mut rng = rng();
        for _ in 0..500 {
            let interval = roll_fire_interval(3000.0, &mut rng);
            assert!((2000.0..=4000.0).contains(&interval));
        }
    }
}
