//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session state. `Paused` is an orthogonal flag, not a phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    /// Waiting for the player to pick one of the offered upgrades.
    LevelUp,
    /// Terminal. Final statistics stay readable.
    Dead,
}

/// Fixed behavioral/statistical category of an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyVariant {
    #[default]
    Basic,
    Fast,
    Tank,
    Boss,
    Swarm,
    Elite,
    Shooter,
    Splitter,
    Circler,
    Dasher,
    Teleporter,
    MiniBoss,
    Necromancer,
    Healer,
    Shield,
    Kamikaze,
}

impl EnemyVariant {
    pub const ALL: [EnemyVariant; 16] = [
        EnemyVariant::Basic,
        EnemyVariant::Fast,
        EnemyVariant::Tank,
        EnemyVariant::Boss,
        EnemyVariant::Swarm,
        EnemyVariant::Elite,
        EnemyVariant::Shooter,
        EnemyVariant::Splitter,
        EnemyVariant::Circler,
        EnemyVariant::Dasher,
        EnemyVariant::Teleporter,
        EnemyVariant::MiniBoss,
        EnemyVariant::Necromancer,
        EnemyVariant::Healer,
        EnemyVariant::Shield,
        EnemyVariant::Kamikaze,
    ];
}

/// Named weapon identity. A loadout holds each identity at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponId {
    MagicBolt,
    Fireball,
    Knife,
    Axe,
    Garlic,
    HolyWater,
    Bible,
    Bone,
    CherryBomb,
}

impl WeaponId {
    pub fn label(self) -> &'static str {
        match self {
            WeaponId::MagicBolt => "Magic Bolt",
            WeaponId::Fireball => "Fireball",
            WeaponId::Knife => "Knife",
            WeaponId::Axe => "Axe",
            WeaponId::Garlic => "Garlic",
            WeaponId::HolyWater => "Holy Water",
            WeaponId::Bible => "Bible",
            WeaponId::Bone => "Bone",
            WeaponId::CherryBomb => "Cherry Bomb",
        }
    }
}

/// How a weapon delivers damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Fires free-flying projectiles.
    Projectile,
    /// Keeps a standing ring of projectiles around the player.
    Orbit,
    /// Instant damage pulse around the player, no projectile entity.
    Area,
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Upgrade catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpgradeId {
    IncreaseDamage,
    FireRateUp,
    ExtraProjectile,
    MaxHpUp,
    Heal,
    NewWeapon { weapon: WeaponId },
    SpeedBoost,
}

impl UpgradeId {
    /// The fixed catalog options are drawn from.
    pub const CATALOG: [UpgradeId; 14] = [
        UpgradeId::IncreaseDamage,
        UpgradeId::FireRateUp,
        UpgradeId::ExtraProjectile,
        UpgradeId::MaxHpUp,
        UpgradeId::Heal,
        UpgradeId::NewWeapon { weapon: WeaponId::Fireball },
        UpgradeId::NewWeapon { weapon: WeaponId::Knife },
        UpgradeId::NewWeapon { weapon: WeaponId::Axe },
        UpgradeId::NewWeapon { weapon: WeaponId::Garlic },
        UpgradeId::NewWeapon { weapon: WeaponId::HolyWater },
        UpgradeId::NewWeapon { weapon: WeaponId::Bible },
        UpgradeId::NewWeapon { weapon: WeaponId::Bone },
        UpgradeId::NewWeapon { weapon: WeaponId::CherryBomb },
        UpgradeId::SpeedBoost,
    ];

    /// Display label for the upgrade card.
    pub fn label(self) -> String {
        match self {
            UpgradeId::IncreaseDamage => "Increase Damage".to_string(),
            UpgradeId::FireRateUp => "Fire Rate Up".to_string(),
            UpgradeId::ExtraProjectile => "Extra Projectile".to_string(),
            UpgradeId::MaxHpUp => "Max HP Up".to_string(),
            UpgradeId::Heal => "Heal".to_string(),
            UpgradeId::NewWeapon { weapon } => format!("New Weapon: {}", weapon.label()),
            UpgradeId::SpeedBoost => "Speed Boost".to_string(),
        }
    }
}

/// Outcome drawn when a reward container opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardKind {
    XpScatter,
    Heal,
    InstantLevelUp,
}

/// Semantic palette key for cosmetic particles. The renderer maps it to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Enemy(EnemyVariant),
    Weapon(WeaponId),
    EnemyShot,
    Shield,
    Heal,
    Xp,
    PlayerHit,
    Reward,
}
