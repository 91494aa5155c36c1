//! Layering of configuration sources
//!
//! Values are resolved per key, highest precedence first: environment
//! variables, the system keyring, the settings file, then the built-in
//! defaults for the display names. The keyring is only asked for keys the
//! environment did not supply.

use crate::core::config::data::{
    ChatConfiguration, ChatSettings, DEFAULT_AGENT_NAME, DEFAULT_CUSTOMER_NAME,
};
use crate::core::config::error::ConfigError;
use crate::core::config::keys::SettingKey;
use crate::core::keyring::SecretLookup;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Environment,
    Keyring,
    File,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueSource::Environment => "env",
            ValueSource::Keyring => "keyring",
            ValueSource::File => "file",
            ValueSource::Default => "default",
        };
        f.write_str(label)
    }
}

/// Merged settings together with where each value came from.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSettings {
    pub settings: ChatSettings,
    pub sources: BTreeMap<SettingKey, ValueSource>,
}

impl ResolvedSettings {
    pub fn source(&self, key: SettingKey) -> Option<ValueSource> {
        self.sources.get(&key).copied()
    }

    /// Validate the merged values into a configuration.
    pub fn build(&self) -> Result<ChatConfiguration, ConfigError> {
        ChatConfiguration::try_from(self.settings.clone())
    }
}

/// Reads an environment variable; `None` for unset variables.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Merge `file` with the keyring and environment.
///
/// `env` is called with each key's variable name. Empty values from the
/// environment or keyring count as unset. Recoverable keyring outages are
/// logged and skipped; other keyring failures abort the resolution.
pub fn resolve_settings<S, E>(
    file: &ChatSettings,
    secrets: &S,
    env: E,
) -> Result<ResolvedSettings, ConfigError>
where
    S: SecretLookup + ?Sized,
    E: Fn(&str) -> Option<String>,
{
    let mut resolved = ResolvedSettings::default();

    for key in SettingKey::ALL {
        let (value, source) = match resolve_key(key, file, secrets, &env)? {
            Some(found) => found,
            None => continue,
        };
        debug!(key = %key, source = %source, "resolved config value");
        resolved.settings.set(key, Some(value));
        resolved.sources.insert(key, source);
    }

    Ok(resolved)
}

fn resolve_key<S, E>(
    key: SettingKey,
    file: &ChatSettings,
    secrets: &S,
    env: &E,
) -> Result<Option<(String, ValueSource)>, ConfigError>
where
    S: SecretLookup + ?Sized,
    E: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(key.env_var()).filter(|v| !v.is_empty()) {
        return Ok(Some((value, ValueSource::Environment)));
    }

    match secrets.lookup(key) {
        Ok(Some(value)) if !value.is_empty() => {
            return Ok(Some((value, ValueSource::Keyring)));
        }
        Ok(_) => {}
        Err(err) if err.is_recoverable() => {
            warn!(key = %key, error = %err, "keyring unavailable, skipping");
        }
        Err(err) => return Err(err.into()),
    }

    if let Some(value) = file.get(key) {
        return Ok(Some((value.to_string(), ValueSource::File)));
    }

    let default = match key {
        SettingKey::AgentName => Some(DEFAULT_AGENT_NAME),
        SettingKey::CustomerName => Some(DEFAULT_CUSTOMER_NAME),
        _ => None,
    };
    Ok(default.map(|value| (value.to_string(), ValueSource::Default)))
}
