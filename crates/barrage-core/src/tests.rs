#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::error::{CommandError, SettingsError};
    use crate::events::PresentationEvent;
    use crate::settings::GameSettings;
    use crate::types::{Position, SimTime, Velocity};
    use crate::weapons::WeaponTable;

    #[test]
    fn test_weapon_type_parses_catalog_keys() {
        for weapon in WeaponType::ALL {
            let parsed: WeaponType = weapon.key().parse().unwrap();
            assert_eq!(parsed, weapon);
        }
    }

    #[test]
    fn test_unknown_weapon_key_rejected() {
        let err = "railgun".parse::<WeaponType>().unwrap_err();
        assert_eq!(err, CommandError::UnknownWeapon("railgun".into()));
        assert!(err.to_string().contains("railgun"));
    }

    #[test]
    fn test_stock_catalog_values() {
        let table = WeaponTable::stock();

        let basic = table.get(WeaponType::Basic).unwrap();
        assert_eq!(basic.name, "Basic Laser");
        assert_relative_eq!(basic.fire_rate_ms, 250.0);
        assert_relative_eq!(basic.projectile_speed, 500.0);

        let beam = table.get(WeaponType::Beam).unwrap();
        assert_relative_eq!(beam.fire_rate_ms, 0.0);
        assert_relative_eq!(beam.damage, 0.1);

        let missile = table.get(WeaponType::Missile).unwrap();
        assert_relative_eq!(missile.damage, 3.0);
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let settings = GameSettings::from_json(r#"{ "initial_lives": 5 }"#).unwrap();
        assert_eq!(settings.initial_lives, 5);
        assert_eq!(settings.score_per_kill, 100);
        assert_relative_eq!(settings.field_width, 800.0);
        assert!(settings.weapons.contains(WeaponType::Plasma));
    }

    #[test]
    fn test_settings_can_drop_weapons() {
        let json = r#"{
            "weapons": {
                "basic": {
                    "name": "Pea Shooter", "damage": 1.0, "fire_rate_ms": 100.0,
                    "projectile_speed": 600.0, "color": 65535, "particle_color": 65535,
                    "sound": "laser-sound", "volume": 0.3
                }
            }
        }"#;
        let settings = GameSettings::from_json(json).unwrap();
        assert!(settings.weapons.contains(WeaponType::Basic));
        assert!(!settings.weapons.contains(WeaponType::Beam));
    }

    #[test]
    fn test_settings_rejects_zero_lives() {
        let err = GameSettings::from_json(r#"{ "initial_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_settings_rejects_malformed_json() {
        let err = GameSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_variant_for_row_clamps_to_last() {
        let settings = GameSettings::default();
        assert_eq!(settings.variant_for_row(0), EnemyVariant::Basic);
        assert_eq!(settings.variant_for_row(1), EnemyVariant::Bomber);
        assert_eq!(settings.variant_for_row(2), EnemyVariant::Elite);
        assert_eq!(settings.variant_for_row(7), EnemyVariant::Elite);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(17.0);
        assert_eq!(time.frame, 2);
        assert_relative_eq!(time.now_ms, 33.0);
        assert_relative_eq!(time.dt_secs(), 0.017);

        // Negative deltas (clock skew) never run time backwards.
        time.advance(-5.0);
        assert_relative_eq!(time.now_ms, 33.0);
    }

    #[test]
    fn test_position_geometry() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);

        // Straight down the screen is +PI/2.
        let below = Position::new(0.0, 10.0);
        assert_relative_eq!(a.angle_to(&below), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_velocity_from_angle() {
        let v = Velocity::from_angle(-std::f64::consts::FRAC_PI_2, 500.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(v.y, -500.0);
        assert_relative_eq!(v.speed(), 500.0);
    }

    #[test]
    fn test_command_wire_format() {
        let json = r#"{ "type": "SwitchWeapon", "weapon": "missile" }"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, PlayerCommand::SwitchWeapon { ref weapon } if weapon == "missile"));

        let json = serde_json::to_string(&PlayerCommand::TriggerSpecial).unwrap();
        assert_eq!(json, r#"{"type":"TriggerSpecial"}"#);
    }

    #[test]
    fn test_match_ended_event_serializes_score() {
        let event = PresentationEvent::MatchEnded { final_score: 4200 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"MatchEnded\""));
        assert!(json.contains("4200"));
    }
}
