//! Configuration for contact-center chat clients.
//!
//! A chat client needs four provider values to start a chat (the start-chat
//! endpoint, instance ID, contact flow ID and region) plus two display
//! names. This crate loads them from the environment, the system keyring
//! and a TOML file, validates them once, and hands out an immutable
//! [`core::config::ChatConfiguration`].
//!
//! - [`core`] owns the configuration value, its sources and the region list.
//! - [`cli`] implements the `connect-chat-config` binary.
//! - [`utils`] holds diagnostic logging setup.
//!
//! ```
//! use connect_chat_config::core::config::ChatConfiguration;
//! use connect_chat_config::core::session::StartChatParams;
//!
//! let config = ChatConfiguration::new(
//!     "https://example.com/start",
//!     "abc-123",
//!     "flow-456",
//!     "us-east-1",
//!     "Agent",
//!     "Customer",
//! )
//! .unwrap();
//!
//! let params = StartChatParams::new(&config);
//! assert_eq!(params.endpoint(), "https://example.com/start");
//! ```

pub mod cli;
pub mod core;
pub mod utils;
