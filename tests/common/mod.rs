#![allow(dead_code)]

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use unrest::model::*;
use unrest::sim::{Signal, SimSystem, TickContext};

// ---------------------------------------------------------------------------
// Tick execution helpers
// ---------------------------------------------------------------------------

/// Run a single system tick on the given day. Returns emitted signals.
pub fn tick_system(
    world: &mut World,
    system: &mut dyn SimSystem,
    day: u64,
    seed: u64,
) -> Vec<Signal> {
    let mut rng = SmallRng::seed_from_u64(seed);
    tick_system_with(world, system, day, &mut rng)
}

/// Run a single system tick with a caller-supplied RNG.
pub fn tick_system_with(
    world: &mut World,
    system: &mut dyn SimSystem,
    day: u64,
    rng: &mut dyn RngCore,
) -> Vec<Signal> {
    world.current_day = day;
    let mut signals = Vec::new();
    let mut ctx = TickContext {
        world,
        rng,
        signals: &mut signals,
        inbox: &[],
    };
    system.tick(&mut ctx);
    signals
}

/// Run a system's handle_signals with the given inbox.
pub fn deliver(world: &mut World, system: &mut dyn SimSystem, inbox: &[Signal]) {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut signals = Vec::new();
    let mut ctx = TickContext {
        world,
        rng: &mut rng,
        signals: &mut signals,
        inbox,
    };
    system.handle_signals(&mut ctx);
}

/// RNG that answers every `next_u32` with the same word, for pinning
/// percentile draws. The offsets keep Lemire rejection from ever firing.
pub struct FixedRng {
    word: u32,
}

impl FixedRng {
    /// Draws in `0..100` come out around 25.
    pub fn low() -> Self {
        Self {
            word: (1 << 30) + 12_345,
        }
    }

    /// Draws in `0..100` come out around 75.
    pub fn high() -> Self {
        Self {
            word: (3 << 30) + 12_345,
        }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.word
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.word) << 32) | u64::from(self.word)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.word.to_le_bytes();
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = bytes[i % 4];
        }
    }
}

// ---------------------------------------------------------------------------
// World builders
// ---------------------------------------------------------------------------

/// Create a linear troop upgrade chain; returns the root troop type ID.
pub fn add_troop_line(world: &mut World, prefix: &str, tiers: usize) -> u64 {
    let ids: Vec<u64> = (0..tiers).map(|_| world.next_id()).collect();
    for (i, &id) in ids.iter().enumerate() {
        let mut troop = TroopType::new(id, format!("{prefix} t{i}"));
        if let Some(&next) = ids.get(i + 1) {
            troop.upgrade_targets.push(next);
        }
        world.troops.insert(id, troop);
    }
    ids[0]
}

/// Create a culture with five-tier basic and elite troop lines plus one
/// lord template.
pub fn add_culture(world: &mut World, name: &str) -> u64 {
    let basic = add_troop_line(world, &format!("{name} levy"), 5);
    let elite = add_troop_line(world, &format!("{name} noble"), 5);
    let id = world.next_id();
    world.cultures.insert(id, Culture::new(id, name, basic, elite));
    let template_id = world.next_id();
    world.templates.push(CharacterTemplate {
        id: template_id,
        culture_id: id,
        role: TemplateRole::Lord,
        equipment: Vec::new(),
    });
    id
}

pub fn add_food_item(world: &mut World) -> u64 {
    let id = world.next_id();
    world.items.insert(
        id,
        Item {
            id,
            name: "grain".to_string(),
            is_food: true,
        },
    );
    id
}

pub fn add_character(world: &mut World, name: &str, culture: u64) -> u64 {
    let id = world.next_id();
    let mut character = Character::new(id, name, culture);
    character.state = CharacterState::Active;
    world.register_character(character).expect("register character")
}

pub fn add_clan(
    world: &mut World,
    name: &str,
    culture: u64,
    leader: u64,
    kingdom: Option<u64>,
) -> u64 {
    let id = world.next_id();
    let mut clan = Clan::new(id, name, culture);
    clan.leader = Some(leader);
    clan.kingdom = kingdom;
    world.register_clan(clan).expect("register clan");
    if let Some(character) = world.characters.get_mut(&leader) {
        character.clan = Some(id);
    }
    id
}

pub fn add_kingdom(world: &mut World, name: &str, culture: u64, ruling_clan: u64) -> u64 {
    let id = world.next_id();
    let mut faction = Faction::new(id, name, culture);
    faction.ruling_clan = Some(ruling_clan);
    world.register_faction(faction).expect("register faction");
    world
        .join_kingdom(ruling_clan, id, false)
        .expect("join kingdom");
    id
}

/// Create a fortification with a gate position and one bound village.
pub fn add_fort(
    world: &mut World,
    name: &str,
    culture: u64,
    kind: FortificationKind,
    owner: u64,
) -> u64 {
    let id = world.next_id();
    let mut settlement = Settlement::new(id, name, culture);
    settlement.fortification = kind;
    settlement.owner_clan = Some(owner);
    settlement.gate_position = Vec2::new(id as f64, 0.0);

    let village_id = world.next_id();
    let mut village = Settlement::new(village_id, format!("{name} village"), culture);
    village.fortification = FortificationKind::Village;
    village.owner_clan = Some(owner);
    world.settlements.insert(village_id, village);

    settlement.bound_villages.push(village_id);
    world.settlements.insert(id, settlement);
    id
}

/// A ready-made kingdom: a ruling clan with no land and one vassal clan
/// holding castles.
pub struct Realm {
    pub faction: u64,
    pub ruler: u64,
    pub ruling_clan: u64,
    pub vassal_clan: u64,
    pub vassal_leader: u64,
    pub forts: Vec<u64>,
}

pub fn standard_realm(world: &mut World, name: &str, culture: u64, num_forts: usize) -> Realm {
    let ruler = add_character(world, &format!("{name} ruler"), culture);
    let ruling_clan = add_clan(world, &format!("{name} crown"), culture, ruler, None);
    let faction = add_kingdom(world, name, culture, ruling_clan);
    let vassal_leader = add_character(world, &format!("{name} vassal"), culture);
    let vassal_clan = add_clan(
        world,
        &format!("{name} vassals"),
        culture,
        vassal_leader,
        Some(faction),
    );
    let forts = (0..num_forts)
        .map(|i| {
            add_fort(
                world,
                &format!("{name} fort {i}"),
                culture,
                FortificationKind::Castle,
                vassal_clan,
            )
        })
        .collect();
    Realm {
        faction,
        ruler,
        ruling_clan,
        vassal_clan,
        vassal_leader,
        forts,
    }
}
