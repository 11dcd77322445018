//! Entity genesis for a triggered rebellion: leader, army, clan, kingdom.
//!
//! Each step registers its entity with the world before the next step runs.
//! A fault mid-pipeline leaves the already-registered entities in place as
//! orphans; there is no compensating rollback.

use rand::{Rng, RngCore};

use crate::model::{
    Army, Character, CharacterState, CharacterTemplate, Clan, Faction, Policy, Skill,
    TemplateRole, World, WorldError, expand_cohort,
};
use crate::sim::names;

/// Seed count for the basic troop cohort; the elite cohort gets half.
pub const BASIC_TROOP_SEED: u32 = 128;
/// Quantity of the first qualifying food item stocked on a new army.
pub const FOOD_STOCK: u32 = 150;
/// Renown granted to a freshly spawned rebel clan.
pub const REBEL_CLAN_RENOWN: u32 = 900;

const LEADER_XP_MIN: u64 = 80_000;
const LEADER_XP_MAX: u64 = 500_000;
const LEADER_GOLD_GRANT: u64 = 100_000;

/// Template filter for new rebel leaders.
///
/// `&&` binds tighter than `||`, so this matches target-culture lords plus
/// ladies of *any* culture. Kept deliberately: narrowing the lady clause to
/// the target culture is a product decision, not a refactor.
pub fn leader_template_eligible(template: &CharacterTemplate, target_culture: u64) -> bool {
    template.culture_id == target_culture && template.role == TemplateRole::Lord
        || template.role == TemplateRole::Lady
}

/// "{leader} of {origin}", with the " Castle" suffix stripped from the
/// origin settlement's name.
pub fn rebel_title(leader_name: &str, origin: &str) -> String {
    let origin = origin.strip_suffix(" Castle").unwrap_or(origin);
    format!("{leader_name} of {origin}")
}

/// Synthesize and register the character who will lead the breakaway.
pub fn create_rebel_leader(
    world: &mut World,
    rng: &mut dyn RngCore,
    clan_id: u64,
    target_id: u64,
) -> Result<u64, WorldError> {
    let clan = world.clan(clan_id)?;
    let old_leader_id = clan.leader.ok_or(WorldError::Leaderless {
        kind: "clan",
        id: clan_id,
    })?;
    let target_culture = world.settlement(target_id)?.culture_id;
    let equipment = world.character(old_leader_id)?.equipment.clone();

    let template_culture = {
        let candidates: Vec<&CharacterTemplate> = world
            .templates
            .iter()
            .filter(|t| leader_template_eligible(t, target_culture))
            .collect();
        if candidates.is_empty() {
            return Err(WorldError::NoTemplate {
                culture_id: target_culture,
            });
        }
        candidates[rng.random_range(0..candidates.len())].culture_id
    };

    let id = world.next_id();
    let mut leader = Character::new(id, names::generate_first_name(rng), template_culture);
    leader.equipment = equipment;
    leader.is_minor_faction_hero = false;
    leader.is_noble = true;
    leader.home_settlement = Some(target_id);
    for skill in Skill::ALL {
        leader.add_skill_xp(skill, rng.random_range(LEADER_XP_MIN..LEADER_XP_MAX));
    }
    leader.state = CharacterState::Active;
    leader.gold += LEADER_GOLD_GRANT;
    world.register_character(leader)
}

/// Raise and register the rebel army at the target's gate.
pub fn create_rebel_army(
    world: &mut World,
    leader_id: u64,
    target_id: u64,
) -> Result<u64, WorldError> {
    let leader = world.character(leader_id)?;
    let leader_name = leader.name.clone();
    let culture = world.culture(leader.culture_id)?;
    let (basic_troop, elite_troop) = (culture.basic_troop, culture.elite_troop);

    let mut roster = expand_cohort(&world.troops, basic_troop, BASIC_TROOP_SEED);
    for (unit, count) in expand_cohort(&world.troops, elite_troop, BASIC_TROOP_SEED / 2) {
        *roster.entry(unit).or_insert(0) += count;
    }

    let target = world.settlement(target_id)?;
    let home = target
        .bound_villages
        .first()
        .copied()
        .ok_or(WorldError::NoBoundVillage(target_id))?;
    let gate = target.gate_position;

    let id = world.next_id();
    let mut army = Army::new(id, leader_name, leader_id);
    army.roster = roster;
    // The leader rides in the roster alongside the troops.
    army.add_to_roster(leader_id, 1);
    army.is_main = true;
    army.position = gate;
    army.home_settlement = Some(home);
    army.quartermaster = Some(leader_id);
    if let Some(food) = world.items.values().find(|i| i.is_food) {
        army.items.insert(food.id, FOOD_STOCK);
    }
    world.register_army(army)
}

/// Create and register the breakaway clan, binding the leader to it.
pub fn create_rebel_clan(
    world: &mut World,
    leader_id: u64,
    target_id: u64,
) -> Result<u64, WorldError> {
    let leader = world.character(leader_id)?;
    let (leader_name, culture_id) = (leader.name.clone(), leader.culture_id);
    let origin = world.settlement(target_id)?.name.clone();

    let id = world.next_id();
    let mut clan = Clan::new(id, rebel_title(&leader_name, &origin), culture_id);
    clan.add_renown(REBEL_CLAN_RENOWN);
    clan.leader = Some(leader_id);
    let clan_id = world.register_clan(clan)?;
    if let Some(character) = world.characters.get_mut(&leader_id) {
        character.clan = Some(clan_id);
    }
    Ok(clan_id)
}

/// Create and register the breakaway kingdom around the leader's clan.
///
/// Independent of clan genesis: if this fails, the clan stays behind with
/// no parent faction (the daily cleanup pass will eventually deal with it).
pub fn create_rebel_kingdom(
    world: &mut World,
    leader_id: u64,
    target_id: u64,
) -> Result<u64, WorldError> {
    let leader = world.character(leader_id)?;
    let (leader_name, culture_id) = (leader.name.clone(), leader.culture_id);
    let clan_id = leader.clan.ok_or(WorldError::Unaffiliated(leader_id))?;
    let target = world.settlement(target_id)?;
    let name = rebel_title(&leader_name, &target.name);
    let position = target.gate_position;

    let id = world.next_id();
    let mut faction = Faction::new(id, name, culture_id);
    faction.position = position;
    faction.policies.insert(Policy::NobleRetinues);
    let faction_id = world.register_faction(faction)?;
    world.join_kingdom(clan_id, faction_id, false)?;
    if let Some(faction) = world.factions.get_mut(&faction_id) {
        faction.ruling_clan = Some(clan_id);
    }
    Ok(faction_id)
}
