//! The daily cleanup pass: once an entire faction has gone landless, each
//! of its clans is either folded into the weakest viable faction or
//! dissolved outright.

use rand::Rng;
use tracing::{info, warn};

use crate::model::{World, WorldError};
use crate::sim::context::TickContext;
use crate::sim::helpers;
use crate::sim::signal::{Signal, SignalKind};
use crate::sim::system::{SimSystem, TickFrequency};

/// Percentile a landless clan's survival draw must fall under.
pub const SURVIVAL_THRESHOLD: u32 = 50;
/// A destination faction with more member clans than this never absorbs.
pub const MAX_MERGE_DESTINATION_CLANS: usize = 3;

/// What happens to an eligible landless clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Forced join into the destination faction.
    Merge { faction_id: u64 },
    /// Sever, remove the leader, destroy the clan.
    Dissolve,
}

/// Decide a landless clan's fate from its survival draw and the candidate
/// destination (faction ID and member-clan count at selection time).
pub fn cleanup_outcome(roll: u32, destination: Option<(u64, usize)>) -> CleanupOutcome {
    match destination {
        Some((faction_id, members))
            if roll < SURVIVAL_THRESHOLD && members <= MAX_MERGE_DESTINATION_CLANS =>
        {
            CleanupOutcome::Merge { faction_id }
        }
        _ => CleanupOutcome::Dissolve,
    }
}

/// The faction with the fewest member clans among those with at least one
/// member and at least one fortification, excluding `exclude`. First found
/// in scan order wins ties.
fn weakest_destination(world: &World, exclude: u64) -> Option<(u64, usize)> {
    let mut best: Option<(u64, usize)> = None;
    for &faction_id in world.factions.keys() {
        if faction_id == exclude {
            continue;
        }
        let members = helpers::faction_clans(world, faction_id).len();
        if members == 0 {
            continue;
        }
        if helpers::faction_fortification_count(world, faction_id) == 0 {
            continue;
        }
        if best.is_none_or(|(_, fewest)| members < fewest) {
            best = Some((faction_id, members));
        }
    }
    best
}

/// Daily scheduler evaluating landless clans for rehoming or dissolution.
pub struct CleanupSystem;

impl CleanupSystem {
    fn evaluate_clan(&self, ctx: &mut TickContext, clan_id: u64) -> Result<(), WorldError> {
        let Some(clan) = ctx.world.clans.get(&clan_id) else {
            return Ok(());
        };
        let Some(leader_id) = clan.leader else {
            return Ok(());
        };
        let Some(kingdom_id) = clan.kingdom else {
            return Ok(());
        };
        if clan.is_minor || clan.is_mercenary || clan.is_outlaw {
            return Ok(());
        }
        if ctx.world.character(leader_id)?.is_player {
            return Ok(());
        }
        let kingdom = ctx.world.faction(kingdom_id)?;
        if kingdom.is_minor || kingdom.is_outlaw {
            return Ok(());
        }
        if !helpers::clan_fortifications(ctx.world, clan_id).is_empty() {
            return Ok(());
        }
        // Leave clans alone while their leader is mid-siege.
        let leader_besieging = helpers::army_of(ctx.world, leader_id)
            .and_then(|a| ctx.world.armies.get(&a))
            .is_some_and(|a| a.besieging.is_some());
        if leader_besieging {
            return Ok(());
        }
        // Cleanup only once the whole faction has gone landless.
        let sibling_holds_fort = helpers::faction_clans(ctx.world, kingdom_id)
            .into_iter()
            .any(|c| c != clan_id && !helpers::clan_fortifications(ctx.world, c).is_empty());
        if sibling_holds_fort {
            return Ok(());
        }

        let destination = weakest_destination(ctx.world, kingdom_id);
        let roll = ctx.rng.random_range(0..100u32);
        let day = ctx.world.current_day;
        match cleanup_outcome(roll, destination) {
            CleanupOutcome::Merge { faction_id } => {
                ctx.world.join_kingdom(clan_id, faction_id, true)?;
                info!(clan_id, faction_id, "landless clan merged into new kingdom");
                ctx.signals.push(Signal {
                    day,
                    kind: SignalKind::ClanMerged {
                        clan_id,
                        faction_id,
                    },
                });
            }
            CleanupOutcome::Dissolve => {
                ctx.world.leave_kingdom(clan_id)?;
                ctx.world.remove_character(leader_id)?;
                ctx.world.destroy_clan(clan_id)?;
                info!(clan_id, kingdom_id, "landless clan dissolved");
                ctx.signals.push(Signal {
                    day,
                    kind: SignalKind::ClanDestroyed {
                        clan_id,
                        faction_id: kingdom_id,
                    },
                });
            }
        }
        Ok(())
    }
}

impl SimSystem for CleanupSystem {
    fn name(&self) -> &str {
        "cleanup"
    }

    fn frequency(&self) -> TickFrequency {
        TickFrequency::Daily
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let clan_ids: Vec<u64> = ctx.world.clans.keys().copied().collect();
        for clan_id in clan_ids {
            if let Err(err) = self.evaluate_clan(ctx, clan_id) {
                warn!(clan_id, error = %err, "cleanup pass failed for clan");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Clan, Faction, FortificationKind, Settlement};

    #[test]
    fn low_roll_and_small_destination_merges() {
        assert_eq!(
            cleanup_outcome(10, Some((7, 3))),
            CleanupOutcome::Merge { faction_id: 7 }
        );
    }

    #[test]
    fn low_roll_but_crowded_destination_dissolves() {
        assert_eq!(cleanup_outcome(10, Some((7, 4))), CleanupOutcome::Dissolve);
    }

    #[test]
    fn high_roll_dissolves_even_with_room() {
        assert_eq!(cleanup_outcome(50, Some((7, 1))), CleanupOutcome::Dissolve);
        assert_eq!(cleanup_outcome(99, Some((7, 1))), CleanupOutcome::Dissolve);
    }

    #[test]
    fn no_destination_dissolves() {
        assert_eq!(cleanup_outcome(0, None), CleanupOutcome::Dissolve);
    }

    #[test]
    fn weakest_destination_wants_members_and_forts() {
        let mut world = World::new();
        // Faction 1: two clans, one fort. Faction 2: one clan, no forts.
        // Faction 3: one clan, one fort — the right answer.
        for id in [1, 2, 3] {
            world.factions.insert(id, Faction::new(id, format!("f{id}"), 1));
        }
        let mut clan_id = 10;
        for (faction, clans) in [(1u64, 2), (2, 1), (3, 1)] {
            for _ in 0..clans {
                let mut clan = Clan::new(clan_id, format!("c{clan_id}"), 1);
                clan.kingdom = Some(faction);
                world.clans.insert(clan_id, clan);
                clan_id += 1;
            }
        }
        for (settlement, owner) in [(100u64, 10u64), (101, 13)] {
            let mut s = Settlement::new(settlement, format!("s{settlement}"), 1);
            s.fortification = FortificationKind::Castle;
            s.owner_clan = Some(owner);
            world.settlements.insert(settlement, s);
        }

        assert_eq!(weakest_destination(&world, 99), Some((3, 1)));
        // The evaluating clan's own faction is excluded.
        assert_eq!(weakest_destination(&world, 3), Some((1, 2)));
    }

    #[test]
    fn ties_keep_the_first_faction_in_scan_order() {
        let mut world = World::new();
        for id in [1, 2] {
            world.factions.insert(id, Faction::new(id, format!("f{id}"), 1));
            let clan_id = 10 + id;
            let mut clan = Clan::new(clan_id, format!("c{clan_id}"), 1);
            clan.kingdom = Some(id);
            world.clans.insert(clan_id, clan);
            let settlement_id = 100 + id;
            let mut s = Settlement::new(settlement_id, format!("s{settlement_id}"), 1);
            s.fortification = FortificationKind::Town;
            s.owner_clan = Some(clan_id);
            world.settlements.insert(settlement_id, s);
        }

        assert_eq!(weakest_destination(&world, 99), Some((1, 1)));
    }
}
