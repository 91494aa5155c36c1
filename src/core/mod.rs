pub mod config;
pub mod keyring;
pub mod region;
pub mod session;
