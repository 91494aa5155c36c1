use std::fmt;
use std::str::FromStr;

/// One of the six configuration fields.
///
/// Each key has a snake_case name used in `config.toml` and as the keyring
/// account, a camelCase alias, a kebab-case name for the CLI and an
/// environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    StartChatEndpoint,
    InstanceId,
    ContactFlowId,
    Region,
    AgentName,
    CustomerName,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::StartChatEndpoint,
        SettingKey::InstanceId,
        SettingKey::ContactFlowId,
        SettingKey::Region,
        SettingKey::AgentName,
        SettingKey::CustomerName,
    ];

    pub fn config_key(&self) -> &'static str {
        match self {
            SettingKey::StartChatEndpoint => "start_chat_endpoint",
            SettingKey::InstanceId => "instance_id",
            SettingKey::ContactFlowId => "contact_flow_id",
            SettingKey::Region => "region",
            SettingKey::AgentName => "agent_name",
            SettingKey::CustomerName => "customer_name",
        }
    }

    pub fn camel_case(&self) -> &'static str {
        match self {
            SettingKey::StartChatEndpoint => "startChatEndPoint",
            SettingKey::InstanceId => "instanceId",
            SettingKey::ContactFlowId => "contactFlowId",
            SettingKey::Region => "region",
            SettingKey::AgentName => "agentName",
            SettingKey::CustomerName => "customerName",
        }
    }

    pub fn cli_name(&self) -> &'static str {
        match self {
            SettingKey::StartChatEndpoint => "start-chat-endpoint",
            SettingKey::InstanceId => "instance-id",
            SettingKey::ContactFlowId => "contact-flow-id",
            SettingKey::Region => "region",
            SettingKey::AgentName => "agent-name",
            SettingKey::CustomerName => "customer-name",
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            SettingKey::StartChatEndpoint => "CONNECT_CHAT_START_ENDPOINT",
            SettingKey::InstanceId => "CONNECT_CHAT_INSTANCE_ID",
            SettingKey::ContactFlowId => "CONNECT_CHAT_CONTACT_FLOW_ID",
            SettingKey::Region => "CONNECT_CHAT_REGION",
            SettingKey::AgentName => "CONNECT_CHAT_AGENT_NAME",
            SettingKey::CustomerName => "CONNECT_CHAT_CUSTOMER_NAME",
        }
    }

    /// Required keys fail the load when absent; the display names fall back
    /// to defaults.
    pub fn is_required(&self) -> bool {
        !matches!(self, SettingKey::AgentName | SettingKey::CustomerName)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SettingKey::ALL
            .iter()
            .copied()
            .find(|key| {
                key.cli_name().eq_ignore_ascii_case(needle)
                    || key.config_key().eq_ignore_ascii_case(needle)
                    || key.camel_case().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_spelling() {
        for input in [
            "start-chat-endpoint",
            "start_chat_endpoint",
            "startChatEndPoint",
            "STARTCHATENDPOINT",
        ] {
            assert_eq!(
                input.parse::<SettingKey>(),
                Ok(SettingKey::StartChatEndpoint),
                "input={input}"
            );
        }
        assert_eq!(
            "contactFlowId".parse::<SettingKey>(),
            Ok(SettingKey::ContactFlowId)
        );
        assert!("endpoint".parse::<SettingKey>().is_err());
    }

    #[test]
    fn env_vars_are_prefixed_config_keys() {
        for key in SettingKey::ALL {
            let name = key.env_var();
            assert!(name.starts_with("CONNECT_CHAT_"), "{key}");
            assert_eq!(name, name.to_ascii_uppercase(), "{key}");
        }
    }

    #[test]
    fn only_display_names_are_optional() {
        let optional: Vec<_> = SettingKey::ALL
            .iter()
            .filter(|key| !key.is_required())
            .collect();
        assert_eq!(
            optional,
            vec![&SettingKey::AgentName, &SettingKey::CustomerName]
        );
    }
}
