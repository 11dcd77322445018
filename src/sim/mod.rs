pub mod cleanup;
mod context;
pub mod helpers;
pub mod names;
pub mod rebellion;
mod runner;
mod signal;
mod system;

pub use cleanup::{CleanupOutcome, CleanupSystem, cleanup_outcome};
pub use context::TickContext;
pub use rebellion::{RebellionSystem, rebel_chance, rebellion_triggered};
pub use runner::{SimConfig, deliver_signals, dispatch_systems, run, should_fire};
pub use signal::{Signal, SignalKind};
pub use system::{SimSystem, TickFrequency};
