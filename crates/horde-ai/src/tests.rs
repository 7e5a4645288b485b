#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use horde_core::components::VariantState;
    use horde_core::constants::*;
    use horde_core::enums::EnemyVariant;
    use horde_core::types::{Position, Velocity};

    use crate::policy::{evaluate, BehaviorAction, BehaviorContext};
    use crate::profiles::{get_profile, initial_state};

    fn make_context(
        variant: EnemyVariant,
        position: Position,
        state: VariantState,
        frame_ms: f64,
    ) -> BehaviorContext {
        BehaviorContext {
            variant,
            position,
            velocity: Velocity::zero(),
            target: Position::new(0.0, 0.0),
            state,
            frame_ms,
            frame_scale: frame_ms / REFERENCE_FRAME_MS,
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_basic_chases_at_profile_speed() {
        let ctx = make_context(
            EnemyVariant::Basic,
            Position::new(100.0, 0.0),
            VariantState::Chase,
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        assert!((update.velocity.x + 1.5).abs() < 1e-12);
        assert!(update.velocity.y.abs() < 1e-12);
        assert!(update.action.is_none());
        assert_eq!(update.position, ctx.position);
    }

    #[test]
    fn test_chase_on_top_of_player_is_still() {
        let ctx = make_context(
            EnemyVariant::Tank,
            Position::new(0.0, 0.0),
            VariantState::Chase,
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.velocity, Velocity::zero());
    }

    #[test]
    fn test_circler_advances_orbit_angle() {
        let state = VariantState::Circler {
            orbit_angle: 0.0,
            orbit_radius: CIRCLER_ORBIT_RADIUS,
        };
        let ctx = make_context(
            EnemyVariant::Circler,
            Position::new(500.0, 0.0),
            state,
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        match update.state {
            VariantState::Circler { orbit_angle, .. } => {
                assert!((orbit_angle - CIRCLER_ANGLE_STEP).abs() < 1e-12);
            }
            other => panic!("unexpected state {other:?}"),
        }
        // Twice the chase speed toward the orbit point.
        assert!((update.velocity.speed() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_dasher_bursts_when_timer_expires() {
        let ctx = make_context(
            EnemyVariant::Dasher,
            Position::new(0.0, 300.0),
            VariantState::Dasher { dash_timer_ms: 10.0 },
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.action, Some(BehaviorAction::Dash));
        assert!((update.velocity.y + DASHER_BURST_SPEED).abs() < 1e-9);
        match update.state {
            VariantState::Dasher { dash_timer_ms } => {
                assert!(dash_timer_ms >= DASHER_REARM_MS);
                assert!(dash_timer_ms < DASHER_REARM_MS + DASHER_REARM_JITTER_MS);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_dasher_decays_between_bursts() {
        let mut ctx = make_context(
            EnemyVariant::Dasher,
            Position::new(0.0, 300.0),
            VariantState::Dasher {
                dash_timer_ms: 1000.0,
            },
            REFERENCE_FRAME_MS,
        );
        ctx.velocity = Velocity::new(0.0, -10.0);
        let update = evaluate(&ctx, &mut rng());
        assert!(update.action.is_none());
        assert!((update.velocity.y + 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_teleporter_relocates_near_player() {
        let ctx = make_context(
            EnemyVariant::Teleporter,
            Position::new(1000.0, 0.0),
            VariantState::Teleporter {
                teleport_timer_ms: 5.0,
            },
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        match update.action {
            Some(BehaviorAction::Teleport { from, to }) => {
                assert_eq!(from, ctx.position);
                assert_eq!(to, update.position);
                assert!((to.distance_to(&ctx.target) - TELEPORTER_LANDING_RADIUS).abs() < 1e-9);
            }
            other => panic!("expected teleport, got {other:?}"),
        }
    }

    #[test]
    fn test_teleporter_waits_when_close() {
        let ctx = make_context(
            EnemyVariant::Teleporter,
            Position::new(150.0, 0.0),
            VariantState::Teleporter {
                teleport_timer_ms: 5.0,
            },
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.action.is_none());
        assert_eq!(update.position, ctx.position);
        // Chases instead.
        assert!(update.velocity.x < 0.0);
    }

    #[test]
    fn test_necromancer_summons_three() {
        let ctx = make_context(
            EnemyVariant::Necromancer,
            Position::new(100.0, 0.0),
            VariantState::Necromancer {
                summon_timer_ms: 1.0,
            },
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        match update.action {
            Some(BehaviorAction::Summon { positions }) => {
                assert_eq!(positions.len(), SUMMON_COUNT);
                for p in positions {
                    let d = p.distance_to(&ctx.position);
                    assert!((d - NECROMANCER_SUMMON_RADIUS).abs() < 1e-9);
                }
            }
            other => panic!("expected summon, got {other:?}"),
        }
        // Inside its comfort radius it backs away.
        assert!(update.velocity.x > 0.0);
    }

    #[test]
    fn test_healer_aura_scales_with_frame() {
        let ctx = make_context(
            EnemyVariant::Healer,
            Position::new(500.0, 0.0),
            VariantState::Healer,
            100.0,
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(
            update.action,
            Some(BehaviorAction::HealAura {
                radius: HEALER_AURA_RADIUS,
                amount: 1.0,
            })
        );
        assert!(update.velocity.x < 0.0);
    }

    #[test]
    fn test_shooter_keeps_standoff_and_fires() {
        let ctx = make_context(
            EnemyVariant::Shooter,
            Position::new(100.0, 0.0),
            VariantState::Shooter { shot_timer_ms: 0.0 },
            REFERENCE_FRAME_MS,
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.velocity.x > 0.0, "shooter should back off");
        match update.action {
            Some(BehaviorAction::Fire { velocity }) => {
                assert!((velocity.x + ENEMY_SHOT_SPEED).abs() < 1e-9);
            }
            other => panic!("expected fire, got {other:?}"),
        }
    }

    #[test]
    fn test_shield_regenerates_to_cap() {
        let ctx = make_context(
            EnemyVariant::Shield,
            Position::new(100.0, 0.0),
            VariantState::Shield {
                shield: 29.9,
                max_shield: SHIELD_CAPACITY,
            },
            100.0,
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(
            update.state,
            VariantState::Shield {
                shield: SHIELD_CAPACITY,
                max_shield: SHIELD_CAPACITY,
            }
        );
    }

    #[test]
    fn test_initial_states_match_variants() {
        let mut rng = rng();
        for variant in EnemyVariant::ALL {
            let state = initial_state(variant, &mut rng);
            match variant {
                EnemyVariant::Shooter => match state {
                    VariantState::Shooter { shot_timer_ms } => {
                        assert!((0.0..SHOOTER_INITIAL_TIMER_MAX_MS).contains(&shot_timer_ms))
                    }
                    other => panic!("unexpected {other:?}"),
                },
                EnemyVariant::Dasher => assert_eq!(
                    state,
                    VariantState::Dasher {
                        dash_timer_ms: DASHER_INITIAL_TIMER_MS
                    }
                ),
                EnemyVariant::Shield => assert_eq!(
                    state,
                    VariantState::Shield {
                        shield: SHIELD_CAPACITY,
                        max_shield: SHIELD_CAPACITY
                    }
                ),
                EnemyVariant::Healer => assert_eq!(state, VariantState::Healer),
                EnemyVariant::Circler
                | EnemyVariant::Teleporter
                | EnemyVariant::Necromancer => assert_ne!(state, VariantState::Chase),
                _ => assert_eq!(state, VariantState::Chase),
            }
        }
    }

    #[test]
    fn test_profiles_are_positive() {
        for variant in EnemyVariant::ALL {
            let p = get_profile(variant);
            assert!(p.max_hp > 0.0, "{variant:?}");
            assert!(p.radius > 0.0, "{variant:?}");
            assert!(p.speed > 0.0, "{variant:?}");
            assert!(p.xp_value > 0, "{variant:?}");
        }
        assert_eq!(get_profile(EnemyVariant::Boss).max_hp, 1000.0);
    }
}
