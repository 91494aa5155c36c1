pub mod data;
pub mod error;
pub mod io;
pub mod keys;
pub mod orchestrator;
pub mod printing;
pub mod sources;

pub use data::{ChatConfiguration, ChatSettings};
pub use error::ConfigError;
pub use keys::SettingKey;
