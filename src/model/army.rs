use std::collections::BTreeMap;

use super::settlement::Vec2;

/// A mobile military unit. The roster maps troop type IDs to counts; the
/// owning character rides in the roster too (IDs are globally unique, so
/// the two key spaces cannot collide).
#[derive(Debug, Clone, PartialEq)]
pub struct Army {
    pub id: u64,
    pub name: String,
    /// Owning character.
    pub owner: u64,
    pub roster: BTreeMap<u64, u32>,
    pub prisoners: BTreeMap<u64, u32>,
    /// Item stock, item ID -> quantity.
    pub items: BTreeMap<u64, u32>,
    pub position: Vec2,
    pub home_settlement: Option<u64>,
    pub quartermaster: Option<u64>,
    /// Whether this is the owner's primary army.
    pub is_main: bool,
    /// Suppresses the host AI's own decisions while a scripted order runs.
    pub ai_locked: bool,
    /// Settlement this army has been ordered to besiege, if any.
    pub besieging: Option<u64>,
}

impl Army {
    pub fn new(id: u64, name: impl Into<String>, owner: u64) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            roster: BTreeMap::new(),
            prisoners: BTreeMap::new(),
            items: BTreeMap::new(),
            position: Vec2::default(),
            home_settlement: None,
            quartermaster: None,
            is_main: false,
            ai_locked: false,
            besieging: None,
        }
    }

    pub fn add_to_roster(&mut self, unit: u64, count: u32) {
        *self.roster.entry(unit).or_insert(0) += count;
    }

    /// Total headcount including the leader.
    pub fn strength(&self) -> u32 {
        self.roster.values().sum()
    }
}
