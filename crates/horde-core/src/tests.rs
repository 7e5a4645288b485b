#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::commands::PlayerCommand;
    use crate::components::Player;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::CommandError;
    use crate::events::FeedbackEvent;
    use crate::state::RenderSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    #[test]
    fn test_direction_to_unit_vector() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(30.0, 40.0);
        let (dir, dist) = a.direction_to(&b);
        assert!((dist - 50.0).abs() < 1e-12);
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_degenerate_is_zero() {
        let a = Position::new(10.0, 10.0);
        let (dir, dist) = a.direction_to(&a);
        assert_eq!(dist, 0.0);
        assert_eq!(dir.x, 0.0);
        assert_eq!(dir.y, 0.0);
        assert!(!dir.x.is_nan() && !dir.y.is_nan());
    }

    #[test]
    fn test_polar_offset_and_angle_round_trip() {
        let origin = Position::new(5.0, -5.0);
        let p = origin.polar_offset(150.0, 1.2);
        assert!((origin.distance_to(&p) - 150.0).abs() < 1e-9);
        assert!((origin.angle_to(&p) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_segment() {
        let start = Position::new(0.0, 0.0);
        let end = Position::new(100.0, 0.0);
        assert!((Position::new(50.0, 7.0).distance_to_segment(&start, &end) - 7.0).abs() < 1e-12);
        // Beyond either end the nearest point is the endpoint.
        assert!((Position::new(103.0, 4.0).distance_to_segment(&start, &end) - 5.0).abs() < 1e-12);
        assert!((Position::new(-6.0, 0.0).distance_to_segment(&start, &end) - 6.0).abs() < 1e-12);
        // A zero-length segment is a point.
        assert!((Position::new(3.0, 4.0).distance_to_segment(&start, &start) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_integrate_scales_with_frame() {
        let mut p = Position::new(0.0, 0.0);
        p.integrate(&Velocity::new(4.0, -2.0), 0.5);
        assert_eq!(p, Position::new(2.0, -1.0));
    }

    #[test]
    fn test_velocity_decay_one_reference_frame() {
        let mut v = Velocity::new(10.0, -10.0);
        v.decay(0.95, 1.0);
        assert!((v.x - 9.5).abs() < 1e-12);
        assert!((v.y + 9.5).abs() < 1e-12);

        // Two half frames equal one full frame.
        let mut halves = Velocity::new(10.0, 0.0);
        halves.decay(0.95, 0.5);
        halves.decay(0.95, 0.5);
        assert!((halves.x - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(REFERENCE_FRAME_MS);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_ms - 1000.0).abs() < 1e-9);
        assert!((time.frame_scale() - 1.0).abs() < 1e-12);

        time.advance(REFERENCE_FRAME_MS * 2.0);
        assert!((time.frame_scale() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::default();
        assert_eq!(player.hp, 100.0);
        assert_eq!(player.max_hp, 100.0);
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 0);
        assert_eq!(player.xp_to_next, 10);
        assert_eq!(player.radius, 20.0);
    }

    #[test]
    fn test_upgrade_catalog_is_unique() {
        let unique: HashSet<UpgradeId> = UpgradeId::CATALOG.iter().copied().collect();
        assert_eq!(unique.len(), UpgradeId::CATALOG.len());
        // The default weapon is never offered as a new weapon.
        assert!(!unique.contains(&UpgradeId::NewWeapon {
            weapon: WeaponId::MagicBolt
        }));
    }

    #[test]
    fn test_upgrade_labels() {
        assert_eq!(UpgradeId::FireRateUp.label(), "Fire Rate Up");
        assert_eq!(
            UpgradeId::NewWeapon {
                weapon: WeaponId::CherryBomb
            }
            .label(),
            "New Weapon: Cherry Bomb"
        );
    }

    #[test]
    fn test_command_json_shape() {
        let cmd = PlayerCommand::SelectUpgrade {
            upgrade: UpgradeId::NewWeapon {
                weapon: WeaponId::Knife,
            },
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "SelectUpgrade");
        assert_eq!(json["upgrade"]["type"], "NewWeapon");
        assert_eq!(json["upgrade"]["weapon"], "Knife");

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetMovementIntent","dx":1.0,"dy":0.0}"#).unwrap();
        assert!(matches!(
            parsed,
            PlayerCommand::SetMovementIntent { dx, dy } if dx == 1.0 && dy == 0.0
        ));
    }

    #[test]
    fn test_feedback_event_json_shape() {
        let ev = FeedbackEvent::Kill {
            variant: EnemyVariant::Splitter,
            x: 1.0,
            y: 2.0,
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "Kill");
        assert_eq!(json["variant"], "Splitter");
    }

    #[test]
    fn test_command_error_messages() {
        let err = CommandError::UpgradeNotOffered(UpgradeId::Heal);
        assert!(err.to_string().contains("Heal"));
        assert_eq!(
            CommandError::NotLevelingUp.to_string(),
            "no level-up is pending"
        );
    }

    #[test]
    fn test_default_snapshot_is_menu() {
        let snapshot = RenderSnapshot::default();
        assert_eq!(snapshot.phase, GamePhase::Menu);
        assert!(snapshot.enemies.is_empty());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: RenderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Menu);
    }
}
