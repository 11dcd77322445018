pub mod config;
pub mod id;
pub mod model;
pub mod sim;

pub use config::RebellionConfig;
pub use id::IdGenerator;
pub use model::{World, WorldError};
