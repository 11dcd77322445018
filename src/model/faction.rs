use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::settlement::Vec2;

/// A faction-wide policy. Spawned rebel kingdoms always carry
/// `NobleRetinues` so their ruling clan can field a full retinue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    NobleRetinues,
    RoyalGuard,
}

/// A top-level polity. Member clans point at it via `Clan::kingdom`; the
/// faction leader is the ruling clan's leader.
#[derive(Debug, Clone, PartialEq)]
pub struct Faction {
    pub id: u64,
    pub name: String,
    pub culture_id: u64,
    pub ruling_clan: Option<u64>,
    pub policies: BTreeSet<Policy>,
    /// Where the faction was founded, on the campaign map.
    pub position: Vec2,
    pub is_minor: bool,
    pub is_outlaw: bool,
}

impl Faction {
    pub fn new(id: u64, name: impl Into<String>, culture_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            culture_id,
            ruling_clan: None,
            policies: BTreeSet::new(),
            position: Vec2::default(),
            is_minor: false,
            is_outlaw: false,
        }
    }
}

/// A war recorded with the diplomacy registry. Distinct from the war
/// *stance* set by `World::declare_war`; siege initiation performs both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct War {
    pub attacker: u64,
    pub defender: u64,
    pub day: u64,
}
