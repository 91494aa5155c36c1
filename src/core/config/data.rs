use crate::core::config::error::ConfigError;
use crate::core::config::keys::SettingKey;
use crate::core::region::Region;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_AGENT_NAME: &str = "Agent";
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

/// Raw settings as stored in `config.toml`, before validation.
///
/// Keys are snake_case on disk; the camelCase names used by the mobile
/// samples are accepted as aliases.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    #[serde(alias = "startChatEndPoint", skip_serializing_if = "Option::is_none")]
    pub start_chat_endpoint: Option<String>,
    #[serde(alias = "instanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(alias = "contactFlowId", skip_serializing_if = "Option::is_none")]
    pub contact_flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(alias = "agentName", skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(alias = "customerName", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl ChatSettings {
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    pub fn set(&mut self, key: SettingKey, value: Option<String>) {
        *self.slot_mut(key) = value;
    }

    fn slot(&self, key: SettingKey) -> &Option<String> {
        match key {
            SettingKey::StartChatEndpoint => &self.start_chat_endpoint,
            SettingKey::InstanceId => &self.instance_id,
            SettingKey::ContactFlowId => &self.contact_flow_id,
            SettingKey::Region => &self.region,
            SettingKey::AgentName => &self.agent_name,
            SettingKey::CustomerName => &self.customer_name,
        }
    }

    fn slot_mut(&mut self, key: SettingKey) -> &mut Option<String> {
        match key {
            SettingKey::StartChatEndpoint => &mut self.start_chat_endpoint,
            SettingKey::InstanceId => &mut self.instance_id,
            SettingKey::ContactFlowId => &mut self.contact_flow_id,
            SettingKey::Region => &mut self.region,
            SettingKey::AgentName => &mut self.agent_name,
            SettingKey::CustomerName => &mut self.customer_name,
        }
    }
}

/// Validated chat configuration handed to the chat client at startup.
///
/// All fields are set once in the constructor and only exposed through
/// accessors, so a value can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatConfiguration {
    start_chat_endpoint: String,
    instance_id: String,
    contact_flow_id: String,
    region: Region,
    agent_name: String,
    customer_name: String,
}

impl ChatConfiguration {
    /// Validate and build a configuration from six supplied values.
    ///
    /// Values are kept exactly as given; blank values are rejected rather
    /// than trimmed.
    pub fn new(
        start_chat_endpoint: impl Into<String>,
        instance_id: impl Into<String>,
        contact_flow_id: impl Into<String>,
        region: &str,
        agent_name: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let start_chat_endpoint = required(SettingKey::StartChatEndpoint, start_chat_endpoint)?;
        validate_endpoint(&start_chat_endpoint)?;
        let instance_id = required(SettingKey::InstanceId, instance_id)?;
        let contact_flow_id = required(SettingKey::ContactFlowId, contact_flow_id)?;
        let region = parse_region(region)?;
        let agent_name = required(SettingKey::AgentName, agent_name)?;
        let customer_name = required(SettingKey::CustomerName, customer_name)?;

        Ok(Self {
            start_chat_endpoint,
            instance_id,
            contact_flow_id,
            region,
            agent_name,
            customer_name,
        })
    }

    pub fn start_chat_endpoint(&self) -> &str {
        &self.start_chat_endpoint
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn contact_flow_id(&self) -> &str {
        &self.contact_flow_id
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }
}

impl TryFrom<ChatSettings> for ChatConfiguration {
    type Error = ConfigError;

    /// Absent display names take their defaults; absent required values fail.
    fn try_from(settings: ChatSettings) -> Result<Self, Self::Error> {
        let ChatSettings {
            start_chat_endpoint,
            instance_id,
            contact_flow_id,
            region,
            agent_name,
            customer_name,
        } = settings;

        ChatConfiguration::new(
            start_chat_endpoint.unwrap_or_default(),
            instance_id.unwrap_or_default(),
            contact_flow_id.unwrap_or_default(),
            region.as_deref().unwrap_or_default(),
            agent_name.unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string()),
            customer_name.unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string()),
        )
    }
}

fn required(key: SettingKey, value: impl Into<String>) -> Result<String, ConfigError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ConfigError::MissingConfigValue { key });
    }
    Ok(value)
}

fn parse_region(value: &str) -> Result<Region, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingConfigValue {
            key: SettingKey::Region,
        });
    }
    value.parse().map_err(|_| ConfigError::InvalidRegion {
        value: value.to_string(),
    })
}

/// Check a single value the way the constructor would.
pub(crate) fn validate_value(key: SettingKey, value: &str) -> Result<(), ConfigError> {
    match key {
        SettingKey::StartChatEndpoint => {
            required(key, value)?;
            validate_endpoint(value)
        }
        SettingKey::Region => parse_region(value).map(|_| ()),
        _ => required(key, value).map(|_| ()),
    }
}

/// The start-chat endpoint must be an absolute `https` URL with a host.
fn validate_endpoint(value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason,
    };

    if value.trim() != value {
        return Err(invalid("leading or trailing whitespace".to_string()));
    }
    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if url.scheme() != "https" {
        return Err(invalid(format!(
            "scheme must be https, got {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/connect-chat-config/config.toml` → `~/.config/connect-chat-config/config.toml`
/// - macOS: `/Users/user/Library/Application Support/...` → `~/Library/Application Support/...`
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
