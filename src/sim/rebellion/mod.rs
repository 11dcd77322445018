//! The weekly rebellion pass: evaluate every faction for an internal
//! fracture, and — when one triggers — drive the genesis pipeline and set
//! the new army to besiege a settlement of its parent hierarchy.

mod genesis;

use rand::{Rng, RngCore};
use tracing::{debug, info, warn};

use crate::config::RebellionConfig;
use crate::model::{FortificationKind, World, WorldError};
use crate::sim::context::TickContext;
use crate::sim::helpers;
use crate::sim::signal::{Signal, SignalKind};
use crate::sim::system::{SimSystem, TickFrequency};

pub use genesis::{
    BASIC_TROOP_SEED, FOOD_STOCK, REBEL_CLAN_RENOWN, create_rebel_army, create_rebel_clan,
    create_rebel_kingdom, create_rebel_leader, leader_template_eligible, rebel_title,
};

/// Personal relation hit the new leader takes with the old hierarchy.
pub const RELATION_PENALTY: i32 = -20;

/// Weekly scheduler. Holds the immutable rebellion tuning for the session.
pub struct RebellionSystem {
    config: RebellionConfig,
}

impl RebellionSystem {
    pub fn new(config: RebellionConfig) -> Self {
        Self { config }
    }

    fn evaluate_faction(
        &self,
        ctx: &mut TickContext,
        faction_id: u64,
    ) -> Result<(), WorldError> {
        let Some(faction) = ctx.world.factions.get(&faction_id) else {
            return Ok(());
        };
        let faction_culture = faction.culture_id;

        // Player factions are immune; rebellions there are just annoying.
        let player_led = helpers::faction_leader(ctx.world, faction_id)
            .and_then(|id| ctx.world.characters.get(&id))
            .is_some_and(|c| c.is_player);
        if player_led {
            return Ok(());
        }

        let fort_count = helpers::faction_fortification_count(ctx.world, faction_id);
        if fort_count < self.config.fortification_rebellion_limit as usize {
            return Ok(());
        }

        let chance = rebel_chance(fort_count, &self.config);
        let roll = ctx.rng.random_range(0..100u32);
        if !rebellion_triggered(roll, chance) {
            debug!(faction_id, roll, chance, "rebellion roll failed");
            return Ok(());
        }

        for clan_id in helpers::faction_clans(ctx.world, faction_id) {
            let Some(clan) = ctx.world.clans.get(&clan_id) else {
                continue;
            };
            if clan.leader.is_none() || clan.kingdom.is_none() {
                continue;
            }
            let forts = helpers::clan_fortifications(ctx.world, clan_id);
            if forts.is_empty() {
                continue;
            }

            let target_id = pick_target(ctx.world, ctx.rng, &forts, faction_culture);
            let target = ctx.world.settlement(target_id)?;

            if self.config.only_rebel_in_different_culture_forts
                && target.culture_id == faction_culture
            {
                continue;
            }
            if self.config.only_siege_castles
                && target.fortification != FortificationKind::Castle
            {
                continue;
            }
            if target.is_under_siege() {
                continue;
            }

            spawn_rebellion(ctx, faction_id, clan_id, target_id)?;
            // One rebellion per faction per tick, so a kingdom is never
            // overwhelmed in a single pass.
            break;
        }
        Ok(())
    }
}

impl SimSystem for RebellionSystem {
    fn name(&self) -> &str {
        "rebellion"
    }

    fn frequency(&self) -> TickFrequency {
        TickFrequency::Weekly
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let faction_ids: Vec<u64> = ctx.world.factions.keys().copied().collect();
        for faction_id in faction_ids {
            if let Err(err) = self.evaluate_faction(ctx, faction_id) {
                warn!(faction_id, error = %err, "rebellion pass failed for faction");
            }
        }
    }

    fn handle_signals(&mut self, ctx: &mut TickContext) {
        for signal in ctx.inbox {
            if let SignalKind::SiegeEnded { involved_armies } = &signal.kind {
                release_siege_participants(ctx.world, involved_armies);
            }
        }
    }
}

/// Chance of rebellion for a faction holding `fortification_count` forts.
/// Quadratic in the excess past the limit, floored at the minimum modifier.
pub fn rebel_chance(fortification_count: usize, config: &RebellionConfig) -> f64 {
    let x = fortification_count as f64;
    let limit = f64::from(config.fortification_rebellion_limit);
    (x - limit) * (x - limit) / f64::from(config.rebellion_chance_modifier)
        + f64::from(config.minimum_chance_modifier)
}

/// The chance is a ceiling the percentile draw must fall under.
pub fn rebellion_triggered(roll: u32, chance: f64) -> bool {
    f64::from(roll) < chance
}

/// Choose the settlement the rebellion will besiege: a uniformly random
/// clan fortification, overridden by the *last* fortification in iteration
/// order whose culture differs from the faction's.
fn pick_target(
    world: &World,
    rng: &mut dyn RngCore,
    forts: &[u64],
    faction_culture: u64,
) -> u64 {
    let mut target = forts[rng.random_range(0..forts.len())];
    for &fort in forts {
        if world
            .settlements
            .get(&fort)
            .is_some_and(|s| s.culture_id != faction_culture)
        {
            target = fort;
        }
    }
    target
}

/// Run the full genesis pipeline against a chosen target. Each step assumes
/// the previous step's entity is registered and valid; a failure abandons
/// the remaining steps without rolling back the earlier ones.
fn spawn_rebellion(
    ctx: &mut TickContext,
    faction_id: u64,
    clan_id: u64,
    target_id: u64,
) -> Result<(), WorldError> {
    let leader_id = create_rebel_leader(ctx.world, ctx.rng, clan_id, target_id)?;
    let army_id = create_rebel_army(ctx.world, leader_id, target_id)?;
    create_rebel_clan(ctx.world, leader_id, target_id)?;
    let rebel_faction_id = create_rebel_kingdom(ctx.world, leader_id, target_id)?;
    initiate_siege(ctx.world, leader_id, clan_id, target_id, army_id)?;

    info!(
        faction_id,
        rebel_faction_id, target_id, leader_id, "rebellion spawned"
    );
    let day = ctx.world.current_day;
    ctx.signals.push(Signal {
        day,
        kind: SignalKind::RebellionStarted {
            faction_id,
            rebel_faction_id,
            settlement_id: target_id,
        },
    });
    ctx.signals.push(Signal {
        day,
        kind: SignalKind::SiegeStarted {
            settlement_id: target_id,
            attacker_army_id: army_id,
        },
    });
    Ok(())
}

/// Declare hostilities, sour the new leader's old relationships, lock the
/// army's AI and issue the besiege order.
fn initiate_siege(
    world: &mut World,
    leader_id: u64,
    old_clan_id: u64,
    target_id: u64,
    army_id: u64,
) -> Result<(), WorldError> {
    let rebel_faction =
        helpers::character_map_faction(world, leader_id).ok_or(WorldError::Unaffiliated(leader_id))?;
    let target_faction =
        helpers::settlement_faction(world, target_id).ok_or(WorldError::Missing {
            kind: "faction",
            id: target_id,
        })?;
    world.declare_war(rebel_faction, target_faction)?;
    world.register_war(rebel_faction, target_faction)?;

    let old_clan_leader = world.clan(old_clan_id)?.leader.ok_or(WorldError::Leaderless {
        kind: "clan",
        id: old_clan_id,
    })?;
    world.change_relation(leader_id, old_clan_leader, RELATION_PENALTY)?;

    let old_kingdom = world.clan(old_clan_id)?.kingdom.ok_or(WorldError::Missing {
        kind: "faction",
        id: old_clan_id,
    })?;
    let old_faction_leader =
        helpers::faction_leader(world, old_kingdom).ok_or(WorldError::Leaderless {
            kind: "faction",
            id: old_kingdom,
        })?;
    world.change_relation(leader_id, old_faction_leader, RELATION_PENALTY)?;

    world.set_ai_lock(army_id, true)?;
    world.begin_siege(army_id, target_id)?;
    Ok(())
}

/// Restore normal AI control for every siege participant whose lock is set.
/// Clearing an already-clear lock is a no-op.
fn release_siege_participants(world: &mut World, involved_armies: &[u64]) {
    for &army_id in involved_armies {
        if let Some(army) = world.armies.get_mut(&army_id) {
            if army.ai_locked {
                army.ai_locked = false;
                debug!(army_id, "released autonomous-decision lock after siege");
            }
        }
    }
}
