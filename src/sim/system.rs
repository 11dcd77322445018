use super::context::TickContext;

/// How often a campaign system should tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TickFrequency {
    Weekly,
    Daily,
}

/// A pluggable campaign system invoked by the host's tick clock.
///
/// Object-safe so systems can be stored as `Box<dyn SimSystem>`.
pub trait SimSystem {
    fn name(&self) -> &str;
    fn frequency(&self) -> TickFrequency;
    fn tick(&mut self, ctx: &mut TickContext);

    /// React to signals in `ctx.inbox` — either signals emitted by other
    /// systems during this tick, or events delivered by the host (siege
    /// conclusions arrive this way). Signals pushed here are not
    /// re-delivered. Default: no-op.
    fn handle_signals(&mut self, ctx: &mut TickContext) {
        let _ = ctx;
    }
}
