//! Parameters handed to the chat client when it starts a session
//!
//! The chat client never owns the configuration; it borrows it through
//! [`StartChatParams`] and reads what it needs to call the start-chat
//! endpoint.

use crate::core::config::ChatConfiguration;
use crate::core::region::Region;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParticipantDetails<'a> {
    #[serde(rename = "DisplayName")]
    pub display_name: &'a str,
}

/// JSON body accepted by the sample start-chat backends.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StartChatRequest<'a> {
    #[serde(rename = "InstanceId")]
    pub instance_id: &'a str,
    #[serde(rename = "ContactFlowId")]
    pub contact_flow_id: &'a str,
    #[serde(rename = "ParticipantDetails")]
    pub participant_details: ParticipantDetails<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct StartChatParams<'a> {
    config: &'a ChatConfiguration,
}

impl<'a> StartChatParams<'a> {
    pub fn new(config: &'a ChatConfiguration) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &'a str {
        self.config.start_chat_endpoint()
    }

    pub fn region(&self) -> Region {
        self.config.region()
    }

    /// Name shown for the remote side of the conversation.
    pub fn agent_display_name(&self) -> &'a str {
        self.config.agent_name()
    }

    pub fn request_body(&self) -> StartChatRequest<'a> {
        StartChatRequest {
            instance_id: self.config.instance_id(),
            contact_flow_id: self.config.contact_flow_id(),
            participant_details: ParticipantDetails {
                display_name: self.config.customer_name(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.request_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_config() -> ChatConfiguration {
        ChatConfiguration::new(
            "https://example.com/start",
            "abc-123",
            "flow-456",
            "us-east-1",
            "Agent",
            "Customer",
        )
        .expect("valid config")
    }

    #[test]
    fn request_body_uses_customer_as_participant() {
        let config = sample_config();
        let params = StartChatParams::new(&config);

        let value = serde_json::to_value(params.request_body()).expect("serialize body");
        assert_eq!(
            value,
            json!({
                "InstanceId": "abc-123",
                "ContactFlowId": "flow-456",
                "ParticipantDetails": { "DisplayName": "Customer" }
            })
        );
    }

    #[test]
    fn exposes_endpoint_and_region() {
        let config = sample_config();
        let params = StartChatParams::new(&config);

        assert_eq!(params.endpoint(), "https://example.com/start");
        assert_eq!(params.region(), Region::UsEast1);
        assert_eq!(params.agent_display_name(), "Agent");
        assert!(params.to_json().expect("json").contains("\"InstanceId\""));
    }
}
