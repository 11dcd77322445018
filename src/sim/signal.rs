use serde::{Deserialize, Serialize};

/// A notification emitted by one system (or the host) and consumed by
/// others during signal delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Campaign day the signal was raised on.
    pub day: u64,
    pub kind: SignalKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalKind {
    /// A faction fractured and spawned a breakaway.
    RebellionStarted {
        faction_id: u64,
        rebel_faction_id: u64,
        settlement_id: u64,
    },

    /// A scripted siege order was issued against a settlement.
    SiegeStarted {
        settlement_id: u64,
        attacker_army_id: u64,
    },

    /// The host's combat resolution concluded a siege-class engagement.
    /// Carries every army that took part, on either side.
    SiegeEnded { involved_armies: Vec<u64> },

    /// A landless clan was folded into another faction.
    ClanMerged { clan_id: u64, faction_id: u64 },

    /// A landless clan was dissolved and its leader removed.
    ClanDestroyed { clan_id: u64, faction_id: u64 },
}
