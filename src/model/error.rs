use thiserror::Error;

/// Failures raised by world gateway operations.
///
/// Schedulers treat every variant the same way: log it with the offending
/// entity and move on to the next entity in the pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("{kind} {id} not found")]
    Missing { kind: &'static str, id: u64 },

    #[error("{kind} {id} is already registered")]
    Duplicate { kind: &'static str, id: u64 },

    #[error("{kind} {id} has no leader")]
    Leaderless { kind: &'static str, id: u64 },

    #[error("character {0} belongs to no clan")]
    Unaffiliated(u64),

    #[error("no leader template available for culture {culture_id}")]
    NoTemplate { culture_id: u64 },

    #[error("settlement {0} has no bound villages")]
    NoBoundVillage(u64),
}
