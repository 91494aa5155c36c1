use crate::core::config::keys::SettingKey;
use keyring::Entry;
use std::error::Error;
use std::fmt;

pub const KEYRING_SERVICE: &str = "connect-chat-config";

/// A keyring failure for one configuration entry.
///
/// `Unavailable` covers a locked or unreachable credential backend; the
/// loader skips the keyring and falls back to the file. `Rejected` covers
/// entries the backend refused or could not decode, which abort the load.
#[derive(Debug)]
pub enum KeyringAccessError {
    Unavailable {
        key: SettingKey,
        source: keyring::Error,
    },
    Rejected {
        key: SettingKey,
        source: keyring::Error,
    },
}

impl KeyringAccessError {
    pub fn new(key: SettingKey, source: keyring::Error) -> Self {
        match source {
            keyring::Error::PlatformFailure(_) | keyring::Error::NoStorageAccess(_) => {
                KeyringAccessError::Unavailable { key, source }
            }
            source => KeyringAccessError::Rejected { key, source },
        }
    }

    pub fn key(&self) -> SettingKey {
        match self {
            KeyringAccessError::Unavailable { key, .. } | KeyringAccessError::Rejected { key, .. } => {
                *key
            }
        }
    }

    /// Returns true when the backend was temporarily unreachable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, KeyringAccessError::Unavailable { .. })
    }
}

impl fmt::Display for KeyringAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyringAccessError::Unavailable { key, source } => write!(
                f,
                "keyring unavailable while reading '{}': {}",
                key.config_key(),
                source
            ),
            KeyringAccessError::Rejected {
                key,
                source: keyring::Error::BadEncoding(_),
            } => write!(
                f,
                "keyring entry '{}/{}' is not valid UTF-8; store it again with 'connect-chat-config set --keyring {} <value>'",
                KEYRING_SERVICE,
                key.config_key(),
                key.cli_name()
            ),
            KeyringAccessError::Rejected { key, source } => write!(
                f,
                "keyring entry '{}/{}' could not be used: {}",
                KEYRING_SERVICE,
                key.config_key(),
                source
            ),
        }
    }
}

impl Error for KeyringAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            KeyringAccessError::Unavailable { source, .. }
            | KeyringAccessError::Rejected { source, .. } => Some(source),
        }
    }
}

/// Read access to configuration values kept in a keyring.
pub trait SecretLookup {
    fn lookup(&self, key: SettingKey) -> Result<Option<String>, KeyringAccessError>;
}

/// Configuration values kept in the platform keyring, one entry per key.
#[derive(Debug, Clone, Copy)]
pub struct SecretStore {
    use_keyring: bool,
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore {
    pub fn new() -> Self {
        Self { use_keyring: true }
    }

    pub fn new_with_keyring(use_keyring: bool) -> Self {
        Self { use_keyring }
    }

    pub fn is_enabled(&self) -> bool {
        self.use_keyring
    }

    fn entry(key: SettingKey) -> Result<Entry, KeyringAccessError> {
        Entry::new(KEYRING_SERVICE, key.config_key())
            .map_err(|err| KeyringAccessError::new(key, err))
    }

    pub fn get(&self, key: SettingKey) -> Result<Option<String>, KeyringAccessError> {
        if !self.use_keyring {
            return Ok(None);
        }

        match Self::entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(KeyringAccessError::new(key, err)),
        }
    }

    pub fn set(&self, key: SettingKey, value: &str) -> Result<(), Box<dyn Error>> {
        if !self.use_keyring {
            return Err("keyring access is disabled".into());
        }

        Self::entry(key)?
            .set_password(value)
            .map_err(|err| Box::new(KeyringAccessError::new(key, err)) as Box<dyn Error>)
    }

    pub fn remove(&self, key: SettingKey) -> Result<bool, Box<dyn Error>> {
        if !self.use_keyring {
            return Ok(false);
        }

        match Self::entry(key)?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(Box::new(KeyringAccessError::new(key, err))),
        }
    }
}

impl SecretLookup for SecretStore {
    fn lookup(&self, key: SettingKey) -> Result<Option<String>, KeyringAccessError> {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_store_reports_nothing() {
        let store = SecretStore::new_with_keyring(false);
        assert!(!store.is_enabled());
        assert_eq!(store.lookup(SettingKey::InstanceId).expect("lookup"), None);
        assert!(!store.remove(SettingKey::InstanceId).expect("remove"));
        assert!(store.set(SettingKey::InstanceId, "abc").is_err());
    }

    #[test]
    fn backend_outages_are_recoverable() {
        let err = KeyringAccessError::new(
            SettingKey::InstanceId,
            keyring::Error::NoStorageAccess(Box::new(std::io::Error::other("locked"))),
        );
        assert!(err.is_recoverable());
        assert_eq!(err.key(), SettingKey::InstanceId);
        assert!(err.to_string().contains("instance_id"), "{err}");

        let err = KeyringAccessError::new(
            SettingKey::Region,
            keyring::Error::TooLong("user".to_string(), 1),
        );
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("connect-chat-config/region"), "{err}");
    }

    #[test]
    fn undecodable_entries_suggest_rewriting() {
        let err = KeyringAccessError::new(
            SettingKey::ContactFlowId,
            keyring::Error::BadEncoding(vec![0xff, 0xfe]),
        );
        assert!(!err.is_recoverable());
        let message = err.to_string();
        assert!(
            message.contains("set --keyring contact-flow-id"),
            "{message}"
        );
    }
}
