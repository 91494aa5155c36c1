use crate::core::config::data::path_display;
use crate::core::config::keys::SettingKey;
use crate::core::keyring::KeyringAccessError;
use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or validating the chat configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        /// Path to the configuration file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid TOML.
    Parse {
        /// Path to the configuration file with invalid TOML.
        path: PathBuf,
        /// The TOML deserialization error.
        source: toml::de::Error,
    },

    /// A required value was absent or blank.
    MissingConfigValue { key: SettingKey },

    /// The region is not one of the known region codes.
    InvalidRegion { value: String },

    /// The start-chat endpoint is not an absolute HTTPS URL.
    InvalidEndpoint { value: String, reason: String },

    /// The platform has no config directory to look in.
    NoConfigDir,

    /// The keyring backend failed in a way that is not a temporary outage.
    Keyring(KeyringAccessError),
}

impl ConfigError {
    fn display_path(path: &Path) -> String {
        path_display(path)
    }

    /// The setting the error refers to, when there is one.
    pub fn key(&self) -> Option<SettingKey> {
        match self {
            ConfigError::MissingConfigValue { key } => Some(*key),
            ConfigError::InvalidRegion { .. } => Some(SettingKey::Region),
            ConfigError::InvalidEndpoint { .. } => Some(SettingKey::StartChatEndpoint),
            ConfigError::Keyring(err) => Some(err.key()),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(
                    f,
                    "Failed to read config at {}: {}",
                    Self::display_path(path),
                    source
                )
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse config at {}: {}",
                    Self::display_path(path),
                    source
                )
            }
            ConfigError::MissingConfigValue { key } => {
                write!(
                    f,
                    "Missing required config value '{}' (set it with 'connect-chat-config set {} <value>' or the {} environment variable)",
                    key.config_key(),
                    key.cli_name(),
                    key.env_var()
                )
            }
            ConfigError::InvalidRegion { value } => {
                write!(
                    f,
                    "Invalid region '{value}'. Run 'connect-chat-config regions' to list supported region codes."
                )
            }
            ConfigError::InvalidEndpoint { value, reason } => {
                write!(f, "Invalid start-chat endpoint '{value}': {reason}")
            }
            ConfigError::NoConfigDir => {
                write!(f, "Failed to determine config directory")
            }
            ConfigError::Keyring(err) => write!(f, "Keyring access failed: {err}"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Keyring(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KeyringAccessError> for ConfigError {
    fn from(err: KeyringAccessError) -> Self {
        ConfigError::Keyring(err)
    }
}
