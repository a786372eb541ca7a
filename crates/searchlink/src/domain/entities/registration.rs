//! ServiceRegistration - Announcement of this service to the host registry
//!
//! A registration is rebuilt from configuration on every attempt so the
//! registry always sees the currently configured endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name this deployment registers under
pub const SERVICE_NAME: &str = "searchlink";

/// The single action exposed to the registry
pub const SEARCH_OPERATION: &str = "simpleSearch";

/// Framework identifier reported to the registry
pub const FRAMEWORK: &str = "axum";

/// Free-form metadata attached to a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub provider: String,
    pub instance_id: Uuid,
}

/// Service registration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRegistration {
    pub service_name: String,
    pub operations: Vec<String>,
    pub endpoint: String,
    pub health_check: String,
    pub metadata: RegistrationMetadata,
}

impl ServiceRegistration {
    /// Build the registration for `http://{host}:{port}`
    pub fn for_endpoint(host: &str, port: u16, version: &str, instance_id: Uuid) -> Self {
        let endpoint = format!("http://{host}:{port}");
        Self {
            service_name: SERVICE_NAME.to_string(),
            operations: vec![SEARCH_OPERATION.to_string()],
            health_check: format!("{endpoint}/api/health"),
            endpoint,
            metadata: RegistrationMetadata {
                kind: "rust".to_string(),
                version: version.to_string(),
                provider: "google".to_string(),
                instance_id,
            },
        }
    }

    /// Wire form posted to `{registry}/register`
    pub fn into_payload(self, port: u16) -> RegistrationPayload {
        RegistrationPayload {
            version: self.metadata.version.clone(),
            registration: self,
            framework: FRAMEWORK.to_string(),
            port,
        }
    }
}

/// Registration body as the registry expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    #[serde(flatten)]
    pub registration: ServiceRegistration,
    pub framework: String,
    pub version: String,
    pub port: u16,
}

/// Registry acknowledgment for register and heartbeat calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryAck {
    #[serde(default)]
    pub message: Option<String>,
}

impl RegistryAck {
    /// Lenient parse: a non-JSON body still counts as an acknowledgment
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn message_or_ok(&self) -> &str {
        self.message.as_deref().unwrap_or("OK")
    }
}
