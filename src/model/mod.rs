pub mod army;
pub mod character;
pub mod clan;
pub mod culture;
pub mod error;
pub mod faction;
pub mod settlement;
pub mod troops;
pub mod world;

pub use army::Army;
pub use character::{Character, CharacterState, CharacterTemplate, Skill, TemplateRole};
pub use clan::Clan;
pub use culture::{Culture, Item};
pub use error::WorldError;
pub use faction::{Faction, Policy, War};
pub use settlement::{FortificationKind, Settlement, Vec2};
pub use troops::{TroopType, expand_cohort};
pub use world::World;
