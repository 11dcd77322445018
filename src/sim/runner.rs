use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::context::TickContext;
use super::signal::Signal;
use super::system::{SimSystem, TickFrequency};
use crate::model::World;

pub const DAYS_PER_WEEK: u64 = 7;

/// Configuration for a campaign run driven by this crate's own loop.
/// When embedded in a host, the host clock calls [`dispatch_systems`] and
/// [`deliver_signals`] directly instead.
pub struct SimConfig {
    pub start_day: u64,
    pub num_days: u64,
    pub seed: u64,
}

impl SimConfig {
    pub fn new(start_day: u64, num_days: u64, seed: u64) -> Self {
        Self {
            start_day,
            num_days,
            seed,
        }
    }
}

/// Returns true if a system with the given frequency should fire on this day.
pub fn should_fire(freq: TickFrequency, day: u64) -> bool {
    match freq {
        TickFrequency::Daily => true,
        TickFrequency::Weekly => day % DAYS_PER_WEEK == 0,
    }
}

/// Set `world.current_day` and run one dispatch cycle.
///
/// Signal delivery is single-pass and non-cascading: Phase 1 ticks each due
/// system in registration order, collecting signals; Phase 2 hands the
/// collected buffer to each due system's `handle_signals`. Signals pushed
/// during Phase 2 are discarded — a reaction that needs to propagate should
/// mutate world state a later tick will observe.
pub fn dispatch_systems(
    world: &mut World,
    systems: &mut [Box<dyn SimSystem>],
    rng: &mut dyn RngCore,
    day: u64,
) {
    world.current_day = day;

    let mut signals = Vec::new();
    for system in systems.iter_mut() {
        if should_fire(system.frequency(), day) {
            let mut ctx = TickContext {
                world,
                rng,
                signals: &mut signals,
                inbox: &[],
            };
            system.tick(&mut ctx);
        }
    }

    if !signals.is_empty() {
        for system in systems.iter_mut() {
            if should_fire(system.frequency(), day) {
                let mut discarded = Vec::new();
                let mut ctx = TickContext {
                    world,
                    rng,
                    signals: &mut discarded,
                    inbox: &signals,
                };
                system.handle_signals(&mut ctx);
            }
        }
    }
}

/// Deliver host-originated signals to every system, regardless of tick
/// frequency. This is the entry point the combat-resolution subsystem uses
/// to announce a concluded siege.
pub fn deliver_signals(
    world: &mut World,
    systems: &mut [Box<dyn SimSystem>],
    rng: &mut dyn RngCore,
    inbox: &[Signal],
) {
    for system in systems.iter_mut() {
        let mut discarded = Vec::new();
        let mut ctx = TickContext {
            world,
            rng,
            signals: &mut discarded,
            inbox,
        };
        system.handle_signals(&mut ctx);
    }
}

/// Drive the systems for the configured number of consecutive days.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed always
/// produces the same campaign.
pub fn run(world: &mut World, systems: &mut [Box<dyn SimSystem>], config: SimConfig) {
    if systems.is_empty() || config.num_days == 0 {
        return;
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    for offset in 0..config.num_days {
        dispatch_systems(world, systems, &mut rng, config.start_day + offset);
    }
}
