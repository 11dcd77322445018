use crate::model::World;

/// Fortifications owned by a clan, in settlement ID order.
pub fn clan_fortifications(world: &World, clan_id: u64) -> Vec<u64> {
    world
        .settlements
        .values()
        .filter(|s| s.owner_clan == Some(clan_id) && s.is_fortification())
        .map(|s| s.id)
        .collect()
}

/// Member clans of a faction, in clan ID order.
pub fn faction_clans(world: &World, faction_id: u64) -> Vec<u64> {
    world
        .clans
        .values()
        .filter(|c| c.kingdom == Some(faction_id))
        .map(|c| c.id)
        .collect()
}

/// Count of fortifications held across all of a faction's clans.
pub fn faction_fortification_count(world: &World, faction_id: u64) -> usize {
    world
        .settlements
        .values()
        .filter(|s| {
            s.is_fortification()
                && s.owner_clan
                    .and_then(|c| world.clans.get(&c))
                    .is_some_and(|c| c.kingdom == Some(faction_id))
        })
        .count()
}

/// The faction's leader: its ruling clan's leader.
pub fn faction_leader(world: &World, faction_id: u64) -> Option<u64> {
    world
        .factions
        .get(&faction_id)?
        .ruling_clan
        .and_then(|c| world.clans.get(&c))
        .and_then(|c| c.leader)
}

/// The faction a character ultimately answers to, via clan membership.
pub fn character_map_faction(world: &World, character_id: u64) -> Option<u64> {
    world
        .characters
        .get(&character_id)?
        .clan
        .and_then(|c| world.clans.get(&c))
        .and_then(|c| c.kingdom)
}

/// The faction that owns a settlement, via the owning clan.
pub fn settlement_faction(world: &World, settlement_id: u64) -> Option<u64> {
    world
        .settlements
        .get(&settlement_id)?
        .owner_clan
        .and_then(|c| world.clans.get(&c))
        .and_then(|c| c.kingdom)
}

/// A character's army: their main party if any, else the first they own.
pub fn army_of(world: &World, character_id: u64) -> Option<u64> {
    world
        .armies
        .values()
        .find(|a| a.owner == character_id && a.is_main)
        .or_else(|| world.armies.values().find(|a| a.owner == character_id))
        .map(|a| a.id)
}
