//! Progression state machine: xp, level-ups, upgrade offers and effects.
//!
//! `Menu -> Playing <-> LevelUp`, `Playing -> Dead`. Pausing is a flag on
//! top of the phase and never appears here.

use rand::Rng;
use tracing::{debug, info};

use horde_core::constants::*;
use horde_core::enums::{GamePhase, UpgradeId, WeaponKind};
use horde_core::error::CommandError;
use horde_core::events::FeedbackEvent;

use crate::arsenal;
use crate::state::SimulationState;

/// Fire a level-up if the player's xp reached the threshold. Returns whether it fired.
///
/// Overflow xp carries into the next level. At most one level is gained per
/// call; `select_upgrade` calls back in, so a large surplus is consumed one
/// choice at a time.
pub fn check_level_up(state: &mut SimulationState) -> bool {
    if state.player.xp < state.player.xp_to_next {
        return false;
    }
    state.player.xp -= state.player.xp_to_next;
    advance_level(state);
    true
}

/// Level up regardless of xp, discarding what was accumulated.
pub fn grant_instant_level(state: &mut SimulationState) {
    state.player.xp = 0;
    advance_level(state);
}

fn advance_level(state: &mut SimulationState) {
    let player = &mut state.player;
    player.level += 1;
    player.xp_to_next = (f64::from(player.xp_to_next) * XP_THRESHOLD_MULTIPLIER).floor() as u32;
    let level = player.level;

    state.offered_upgrades = draw_offers(&mut state.rng);
    state.phase = GamePhase::LevelUp;
    state.emit(FeedbackEvent::LevelUp { level });
    debug!(level, offers = ?state.offered_upgrades, "level up");
}

/// Draw the offered options, with replacement, from the fixed catalog.
pub fn draw_offers<R: Rng + ?Sized>(rng: &mut R) -> Vec<UpgradeId> {
    (0..UPGRADE_OFFER_COUNT)
        .map(|_| UpgradeId::CATALOG[rng.gen_range(0..UpgradeId::CATALOG.len())])
        .collect()
}

/// Resolve a pending level-up with one of the offered upgrades.
pub fn select_upgrade(state: &mut SimulationState, upgrade: UpgradeId) -> Result<(), CommandError> {
    if state.phase != GamePhase::LevelUp {
        return Err(CommandError::NotLevelingUp);
    }
    if !state.offered_upgrades.contains(&upgrade) {
        return Err(CommandError::UpgradeNotOffered(upgrade));
    }

    apply_upgrade(state, upgrade);
    state.offered_upgrades.clear();
    state.phase = GamePhase::Playing;
    debug!(upgrade = %upgrade.label(), "upgrade selected");

    check_level_up(state);
    Ok(())
}

/// Apply an upgrade's effect to the loadout or the player.
pub fn apply_upgrade(state: &mut SimulationState, upgrade: UpgradeId) {
    match upgrade {
        UpgradeId::IncreaseDamage => {
            for weapon in &mut state.loadout {
                weapon.damage += UPGRADE_DAMAGE_BONUS;
                weapon.level += 1;
            }
        }
        UpgradeId::FireRateUp => {
            for weapon in &mut state.loadout {
                weapon.cooldown_ms *= UPGRADE_COOLDOWN_FACTOR;
                weapon.level += 1;
            }
        }
        UpgradeId::ExtraProjectile => {
            for weapon in state
                .loadout
                .iter_mut()
                .filter(|w| w.kind == WeaponKind::Projectile)
            {
                weapon.projectile_count += 1;
                weapon.level += 1;
            }
        }
        UpgradeId::MaxHpUp => {
            let player = &mut state.player;
            player.max_hp += UPGRADE_MAX_HP_BONUS;
            player.hp = (player.hp + UPGRADE_MAX_HP_BONUS).min(player.max_hp);
        }
        UpgradeId::Heal => {
            state.player.hp = state.player.max_hp;
        }
        UpgradeId::NewWeapon { weapon } => {
            // Owning a weapon twice is not possible; re-picking it does nothing.
            if !state.loadout.iter().any(|w| w.id == weapon) {
                state.loadout.push(arsenal::build_weapon(weapon));
            }
        }
        UpgradeId::SpeedBoost => {
            state.player.move_speed *= UPGRADE_SPEED_FACTOR;
        }
    }
}

/// Enter the terminal phase. Final stats stay readable.
pub fn enter_dead(state: &mut SimulationState) {
    if state.phase == GamePhase::Dead {
        return;
    }
    state.phase = GamePhase::Dead;
    state.emit(FeedbackEvent::Death);
    info!(
        level = state.player.level,
        kills = state.stats.kills,
        elapsed_ms = state.time.elapsed_ms,
        "player died"
    );
}
