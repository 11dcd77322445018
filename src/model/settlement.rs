use serde::{Deserialize, Serialize};

/// A point on the campaign map, in abstract map units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What kind of walls (if any) a settlement has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortificationKind {
    Castle,
    Town,
    Village,
    None,
}

/// A fixed location on the map. Ownership goes through a clan, never a
/// faction directly; the owning faction is derived via the clan's kingdom.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub id: u64,
    pub name: String,
    pub culture_id: u64,
    pub fortification: FortificationKind,
    pub owner_clan: Option<u64>,
    /// Army currently besieging this settlement, if any.
    pub besieger: Option<u64>,
    /// Spawn anchor for armies raised here.
    pub gate_position: Vec2,
    /// Minor settlements economically bound to this fortification.
    pub bound_villages: Vec<u64>,
}

impl Settlement {
    pub fn new(id: u64, name: impl Into<String>, culture_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            culture_id,
            fortification: FortificationKind::None,
            owner_clan: None,
            besieger: None,
            gate_position: Vec2::default(),
            bound_villages: Vec::new(),
        }
    }

    /// Castles and towns can be besieged; villages and camps cannot.
    pub fn is_fortification(&self) -> bool {
        matches!(
            self.fortification,
            FortificationKind::Castle | FortificationKind::Town
        )
    }

    pub fn is_under_siege(&self) -> bool {
        self.besieger.is_some()
    }
}
