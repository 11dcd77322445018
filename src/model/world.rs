use std::collections::{BTreeMap, BTreeSet};

use crate::id::IdGenerator;

use super::army::Army;
use super::character::{Character, CharacterState, CharacterTemplate};
use super::clan::Clan;
use super::culture::{Culture, Item};
use super::error::WorldError;
use super::faction::{Faction, War};
use super::settlement::Settlement;
use super::troops::TroopType;

/// The world graph and its gateway. Sole owner of all entity storage;
/// schedulers hold no references across ticks and commit every mutation
/// through the methods here.
///
/// Creation is two-phase: callers build an entity value (taking an ID from
/// [`World::next_id`]), configure it, then commit it with a `register_*`
/// call. Until registration succeeds the entity is not part of the world.
#[derive(Debug, Default)]
pub struct World {
    pub factions: BTreeMap<u64, Faction>,
    pub clans: BTreeMap<u64, Clan>,
    pub settlements: BTreeMap<u64, Settlement>,
    pub characters: BTreeMap<u64, Character>,
    pub armies: BTreeMap<u64, Army>,
    pub cultures: BTreeMap<u64, Culture>,
    pub troops: BTreeMap<u64, TroopType>,
    pub items: BTreeMap<u64, Item>,
    pub templates: Vec<CharacterTemplate>,
    /// Personal relations, keyed on the ordered character-id pair.
    pub relations: BTreeMap<(u64, u64), i32>,
    /// War stances set by `declare_war`.
    pub stances: BTreeSet<(u64, u64)>,
    /// Wars recorded with the diplomacy registry by `register_war`.
    pub wars: Vec<War>,
    pub id_gen: IdGenerator,
    pub current_day: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        self.id_gen.next_id()
    }

    // -- Lookups ------------------------------------------------------------

    pub fn faction(&self, id: u64) -> Result<&Faction, WorldError> {
        self.factions.get(&id).ok_or(WorldError::Missing {
            kind: "faction",
            id,
        })
    }

    pub fn clan(&self, id: u64) -> Result<&Clan, WorldError> {
        self.clans
            .get(&id)
            .ok_or(WorldError::Missing { kind: "clan", id })
    }

    pub fn settlement(&self, id: u64) -> Result<&Settlement, WorldError> {
        self.settlements.get(&id).ok_or(WorldError::Missing {
            kind: "settlement",
            id,
        })
    }

    pub fn character(&self, id: u64) -> Result<&Character, WorldError> {
        self.characters.get(&id).ok_or(WorldError::Missing {
            kind: "character",
            id,
        })
    }

    pub fn army(&self, id: u64) -> Result<&Army, WorldError> {
        self.armies
            .get(&id)
            .ok_or(WorldError::Missing { kind: "army", id })
    }

    pub fn culture(&self, id: u64) -> Result<&Culture, WorldError> {
        self.cultures.get(&id).ok_or(WorldError::Missing {
            kind: "culture",
            id,
        })
    }

    /// Current personal relation between two characters (0 if never touched).
    pub fn relation(&self, a: u64, b: u64) -> i32 {
        self.relations.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    /// Whether a war stance exists between two factions.
    pub fn at_war(&self, a: u64, b: u64) -> bool {
        self.stances.contains(&pair_key(a, b))
    }

    // -- Registration -------------------------------------------------------

    pub fn register_character(&mut self, character: Character) -> Result<u64, WorldError> {
        if self.characters.contains_key(&character.id) {
            return Err(WorldError::Duplicate {
                kind: "character",
                id: character.id,
            });
        }
        if let Some(home) = character.home_settlement {
            self.settlement(home)?;
        }
        let id = character.id;
        self.characters.insert(id, character);
        Ok(id)
    }

    pub fn register_army(&mut self, army: Army) -> Result<u64, WorldError> {
        if self.armies.contains_key(&army.id) {
            return Err(WorldError::Duplicate {
                kind: "army",
                id: army.id,
            });
        }
        self.character(army.owner)?;
        let id = army.id;
        self.armies.insert(id, army);
        Ok(id)
    }

    pub fn register_clan(&mut self, clan: Clan) -> Result<u64, WorldError> {
        if self.clans.contains_key(&clan.id) {
            return Err(WorldError::Duplicate {
                kind: "clan",
                id: clan.id,
            });
        }
        if let Some(leader) = clan.leader {
            self.character(leader)?;
        }
        let id = clan.id;
        self.clans.insert(id, clan);
        Ok(id)
    }

    pub fn register_faction(&mut self, faction: Faction) -> Result<u64, WorldError> {
        if self.factions.contains_key(&faction.id) {
            return Err(WorldError::Duplicate {
                kind: "faction",
                id: faction.id,
            });
        }
        let id = faction.id;
        self.factions.insert(id, faction);
        Ok(id)
    }

    // -- Membership ---------------------------------------------------------

    /// Move a clan under a faction. `forced` distinguishes cleanup merges
    /// from voluntary joins; both set the same edge today, but the flag is
    /// part of the gateway contract.
    pub fn join_kingdom(
        &mut self,
        clan_id: u64,
        faction_id: u64,
        _forced: bool,
    ) -> Result<(), WorldError> {
        self.faction(faction_id)?;
        let clan = self.clans.get_mut(&clan_id).ok_or(WorldError::Missing {
            kind: "clan",
            id: clan_id,
        })?;
        clan.kingdom = Some(faction_id);
        Ok(())
    }

    /// Sever a clan from its faction, leaving it landless and parentless.
    pub fn leave_kingdom(&mut self, clan_id: u64) -> Result<(), WorldError> {
        let clan = self.clans.get_mut(&clan_id).ok_or(WorldError::Missing {
            kind: "clan",
            id: clan_id,
        })?;
        clan.kingdom = None;
        Ok(())
    }

    /// Destroy a clan entity. Its settlements become unowned and its members
    /// clanless; characters themselves survive unless removed separately.
    pub fn destroy_clan(&mut self, clan_id: u64) -> Result<(), WorldError> {
        if self.clans.remove(&clan_id).is_none() {
            return Err(WorldError::Missing {
                kind: "clan",
                id: clan_id,
            });
        }
        for settlement in self.settlements.values_mut() {
            if settlement.owner_clan == Some(clan_id) {
                settlement.owner_clan = None;
            }
        }
        for character in self.characters.values_mut() {
            if character.clan == Some(clan_id) {
                character.clan = None;
            }
        }
        for faction in self.factions.values_mut() {
            if faction.ruling_clan == Some(clan_id) {
                faction.ruling_clan = None;
            }
        }
        Ok(())
    }

    /// Remove a character from play. The entity stays in storage as `Dead`
    /// so old references keep resolving.
    pub fn remove_character(&mut self, character_id: u64) -> Result<(), WorldError> {
        let character = self
            .characters
            .get_mut(&character_id)
            .ok_or(WorldError::Missing {
                kind: "character",
                id: character_id,
            })?;
        character.state = CharacterState::Dead;
        character.clan = None;
        Ok(())
    }

    // -- Diplomacy ----------------------------------------------------------

    /// Set a war stance between two factions. Idempotent.
    pub fn declare_war(&mut self, a: u64, b: u64) -> Result<(), WorldError> {
        self.faction(a)?;
        self.faction(b)?;
        self.stances.insert(pair_key(a, b));
        Ok(())
    }

    /// Record the war with the diplomacy registry. A separate act from
    /// declaring the stance; siege initiation performs both.
    pub fn register_war(&mut self, attacker: u64, defender: u64) -> Result<(), WorldError> {
        self.faction(attacker)?;
        self.faction(defender)?;
        self.wars.push(War {
            attacker,
            defender,
            day: self.current_day,
        });
        Ok(())
    }

    /// Adjust the personal relation between two characters.
    pub fn change_relation(&mut self, a: u64, b: u64, delta: i32) -> Result<(), WorldError> {
        self.character(a)?;
        self.character(b)?;
        *self.relations.entry(pair_key(a, b)).or_insert(0) += delta;
        Ok(())
    }

    // -- Army orders --------------------------------------------------------

    /// Set or clear an army's autonomous-decision lock.
    pub fn set_ai_lock(&mut self, army_id: u64, locked: bool) -> Result<(), WorldError> {
        let army = self.armies.get_mut(&army_id).ok_or(WorldError::Missing {
            kind: "army",
            id: army_id,
        })?;
        army.ai_locked = locked;
        Ok(())
    }

    /// Order an army to besiege a settlement, marking both ends of the edge.
    pub fn begin_siege(&mut self, army_id: u64, settlement_id: u64) -> Result<(), WorldError> {
        self.army(army_id)?;
        let settlement = self
            .settlements
            .get_mut(&settlement_id)
            .ok_or(WorldError::Missing {
                kind: "settlement",
                id: settlement_id,
            })?;
        settlement.besieger = Some(army_id);
        if let Some(army) = self.armies.get_mut(&army_id) {
            army.besieging = Some(settlement_id);
        }
        Ok(())
    }
}

/// Order-independent key for symmetric pair registries.
fn pair_key(a: u64, b: u64) -> (u64, u64) {
    if a <= b { (a, b) } else { (b, a) }
}
