use rand::RngCore;

use super::signal::Signal;
use crate::model::World;

/// Context passed to each system on every tick.
///
/// The RNG is threaded through explicitly so tests can seed it (or pin it)
/// instead of fighting a process-wide source.
pub struct TickContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut dyn RngCore,
    /// Systems push signals here during tick/handle_signals.
    pub signals: &'a mut Vec<Signal>,
    /// Signals emitted by other systems or delivered by the host (read-only).
    pub inbox: &'a [Signal],
}
