use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a character. New leaders are built `NotSpawned`,
/// flipped `Active` once fully configured, and `Dead` once removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterState {
    NotSpawned,
    Active,
    Dead,
}

/// The skills a rebel leader is granted experience in at genesis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    OneHanded,
    Polearm,
    Riding,
    Athletics,
    Tactics,
    Leadership,
    Steward,
    Engineering,
}

impl Skill {
    pub const ALL: [Skill; 8] = [
        Skill::OneHanded,
        Skill::Polearm,
        Skill::Riding,
        Skill::Athletics,
        Skill::Tactics,
        Skill::Leadership,
        Skill::Steward,
        Skill::Engineering,
    ];
}

/// A person. Clan membership and home settlement are plain references into
/// the world graph; everything else is local state.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub culture_id: u64,
    /// Accumulated experience per skill.
    pub skills: BTreeMap<Skill, u64>,
    pub gold: u64,
    pub is_noble: bool,
    pub is_minor_faction_hero: bool,
    pub is_player: bool,
    pub state: CharacterState,
    pub home_settlement: Option<u64>,
    pub clan: Option<u64>,
    /// Equipment set item IDs, copied wholesale at leader genesis.
    pub equipment: Vec<u64>,
}

impl Character {
    pub fn new(id: u64, name: impl Into<String>, culture_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            culture_id,
            skills: BTreeMap::new(),
            gold: 0,
            is_noble: false,
            is_minor_faction_hero: false,
            is_player: false,
            state: CharacterState::NotSpawned,
            home_settlement: None,
            clan: None,
            equipment: Vec::new(),
        }
    }

    pub fn add_skill_xp(&mut self, skill: Skill, xp: u64) {
        *self.skills.entry(skill).or_insert(0) += xp;
    }

    pub fn is_alive(&self) -> bool {
        self.state == CharacterState::Active
    }
}

/// Template role. The leader-template predicate distinguishes lords and
/// ladies; everything else is never eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateRole {
    Lord,
    Lady,
    Commoner,
}

/// A character template new leaders are stamped from.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterTemplate {
    pub id: u64,
    pub culture_id: u64,
    pub role: TemplateRole,
    pub equipment: Vec<u64>,
}
