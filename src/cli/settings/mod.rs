//! Settings management for CLI set/unset commands.
//!
//! Every key holds a single string, so the only thing that varies between
//! commands is where the value lives: the settings file or the keyring.
//! [`ValueStore`] is that seam.

pub mod error;

pub use error::SettingError;

use crate::core::config::data::validate_value;
use crate::core::config::orchestrator::ConfigOrchestrator;
use crate::core::config::SettingKey;
use crate::core::keyring::SecretStore;

/// A place configuration values can be written to.
pub trait ValueStore {
    /// Short label used in success messages.
    fn label(&self) -> &'static str;

    fn store(&self, key: SettingKey, value: &str) -> Result<(), SettingError>;

    /// Remove a value; returns whether one was present.
    fn clear(&self, key: SettingKey) -> Result<bool, SettingError>;
}

/// Values kept in `config.toml`.
pub struct FileStore<'a> {
    orchestrator: &'a ConfigOrchestrator,
}

impl<'a> FileStore<'a> {
    pub fn new(orchestrator: &'a ConfigOrchestrator) -> Self {
        Self { orchestrator }
    }
}

impl ValueStore for FileStore<'_> {
    fn label(&self) -> &'static str {
        "config file"
    }

    fn store(&self, key: SettingKey, value: &str) -> Result<(), SettingError> {
        let value = value.to_string();
        self.orchestrator
            .mutate(move |settings| {
                settings.set(key, Some(value));
                Ok(())
            })
            .map_err(|e| SettingError::ConfigError(e.to_string()))
    }

    fn clear(&self, key: SettingKey) -> Result<bool, SettingError> {
        self.orchestrator
            .mutate(|settings| {
                let present = settings.get(key).is_some();
                settings.set(key, None);
                Ok(present)
            })
            .map_err(|e| SettingError::ConfigError(e.to_string()))
    }
}

impl ValueStore for SecretStore {
    fn label(&self) -> &'static str {
        "keyring"
    }

    fn store(&self, key: SettingKey, value: &str) -> Result<(), SettingError> {
        if !self.is_enabled() {
            return Err(SettingError::KeyringDisabled);
        }
        self.set(key, value)
            .map_err(|e| SettingError::ConfigError(e.to_string()))
    }

    fn clear(&self, key: SettingKey) -> Result<bool, SettingError> {
        if !self.is_enabled() {
            return Err(SettingError::KeyringDisabled);
        }
        self.remove(key)
            .map_err(|e| SettingError::ConfigError(e.to_string()))
    }
}

pub fn parse_key(input: &str) -> Result<SettingKey, SettingError> {
    input
        .parse()
        .map_err(|_| SettingError::UnknownKey(input.to_string()))
}

/// Validate and store `value` under `key`, returning the success message.
pub fn set_value(
    store: &dyn ValueStore,
    key: &str,
    value: &[String],
) -> Result<String, SettingError> {
    let key = parse_key(key)?;
    if value.is_empty() {
        return Err(SettingError::MissingArgs {
            hint: "To set a value, specify the key and the value:",
            example: "connect-chat-config set region us-east-1",
        });
    }

    if value.iter().any(|word| word == "--keyring") {
        return Err(SettingError::MissingArgs {
            hint: "'--keyring' must be passed as a flag, not as part of the value:",
            example: "connect-chat-config set --keyring instance-id abc-123",
        });
    }

    let value = value.join(" ");
    validate_value(key, &value).map_err(|err| SettingError::InvalidValue {
        key: key.cli_name(),
        message: err.to_string(),
    })?;

    store.store(key, &value)?;
    Ok(format!(
        "✅ Set {} to: {} ({})",
        key.cli_name(),
        value,
        store.label()
    ))
}

pub fn unset_value(store: &dyn ValueStore, key: &str) -> Result<String, SettingError> {
    let key = parse_key(key)?;
    if store.clear(key)? {
        Ok(format!("✅ Unset {} ({})", key.cli_name(), store.label()))
    } else {
        Ok(format!(
            "ℹ️  {} was not set in the {}",
            key.cli_name(),
            store.label()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ChatSettings;
    use tempfile::TempDir;

    fn words(value: &str) -> Vec<String> {
        value.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn set_writes_validated_value_to_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.toml");
        let orchestrator = ConfigOrchestrator::new(path.clone());
        let store = FileStore::new(&orchestrator);

        let message = set_value(&store, "region", &words("eu-west-2")).expect("set region");
        assert_eq!(message, "✅ Set region to: eu-west-2 (config file)");

        set_value(&store, "agentName", &words("Support Bot")).expect("set agent name");

        let saved = ChatSettings::load_from_path(&path).expect("load");
        assert_eq!(saved.region.as_deref(), Some("eu-west-2"));
        assert_eq!(saved.agent_name.as_deref(), Some("Support Bot"));
    }

    #[test]
    fn set_rejects_invalid_values_without_writing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.toml");
        let orchestrator = ConfigOrchestrator::new(path.clone());
        let store = FileStore::new(&orchestrator);

        let err = set_value(&store, "region", &words("mars-west-1")).unwrap_err();
        assert!(matches!(err, SettingError::InvalidValue { key: "region", .. }));

        let err =
            set_value(&store, "start-chat-endpoint", &words("http://example.com")).unwrap_err();
        assert!(matches!(
            err,
            SettingError::InvalidValue {
                key: "start-chat-endpoint",
                ..
            }
        ));

        assert!(!path.exists());
    }

    #[test]
    fn set_requires_known_key_and_value() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let orchestrator = ConfigOrchestrator::new(temp_dir.path().join("config.toml"));
        let store = FileStore::new(&orchestrator);

        assert!(matches!(
            set_value(&store, "theme", &words("dark")),
            Err(SettingError::UnknownKey(key)) if key == "theme"
        ));
        let err = set_value(&store, "region", &[]).unwrap_err();
        assert!(matches!(err, SettingError::MissingArgs { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn set_rejects_keyring_flag_inside_value() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.toml");
        let orchestrator = ConfigOrchestrator::new(path.clone());
        let store = FileStore::new(&orchestrator);

        let err = set_value(&store, "instance-id", &words("abc-123 --keyring")).unwrap_err();
        assert!(matches!(err, SettingError::MissingArgs { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(!path.exists());
    }

    #[test]
    fn unset_reports_whether_value_existed() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.toml");
        let orchestrator = ConfigOrchestrator::new(path.clone());
        let store = FileStore::new(&orchestrator);

        set_value(&store, "instance-id", &words("abc-123")).expect("set");
        let message = unset_value(&store, "instance-id").expect("unset");
        assert_eq!(message, "✅ Unset instance-id (config file)");

        let message = unset_value(&store, "instance-id").expect("unset again");
        assert!(message.contains("was not set"));

        let saved = ChatSettings::load_from_path(&path).expect("load");
        assert_eq!(saved.instance_id, None);
    }

    #[test]
    fn disabled_keyring_refuses_writes() {
        let store = SecretStore::new_with_keyring(false);
        assert!(matches!(
            set_value(&store, "instance-id", &words("abc-123")),
            Err(SettingError::KeyringDisabled)
        ));
        assert!(matches!(
            unset_value(&store, "instance-id"),
            Err(SettingError::KeyringDisabled)
        ));
    }
}
