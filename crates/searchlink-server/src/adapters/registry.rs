//! HTTP Registry Client
//!
//! Talks to the host registry's REST API using reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use searchlink::{DomainError, RegistryAck, RegistryClient, ServiceRegistration};

use crate::config::RegistrationConfig;

/// HTTP implementation of RegistryClient
pub struct HttpRegistryClient {
    client: Client,
    registry_url: String,
    register_timeout: Duration,
    heartbeat_timeout: Duration,
}

impl HttpRegistryClient {
    pub fn new(registry_url: impl Into<String>) -> Self {
        let defaults = RegistrationConfig::default();
        Self {
            client: Client::new(),
            registry_url: registry_url.into().trim_end_matches('/').to_string(),
            register_timeout: defaults.register_timeout,
            heartbeat_timeout: defaults.heartbeat_timeout,
        }
    }

    pub fn from_config(config: &RegistrationConfig) -> Self {
        Self {
            register_timeout: config.register_timeout,
            heartbeat_timeout: config.heartbeat_timeout,
            ..Self::new(config.registry_url.clone())
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: String,
        body: &T,
        timeout: Duration,
    ) -> Result<RegistryAck, DomainError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(DomainError::registry)?;

        read_ack(response).await
    }
}

async fn read_ack(response: Response) -> Result<RegistryAck, DomainError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = if body.is_empty() {
            "No response body".to_string()
        } else {
            body
        };
        return Err(DomainError::RegistryUnavailable(format!(
            "status {}: {}",
            status.as_u16(),
            detail
        )));
    }

    let body = response.text().await.map_err(DomainError::registry)?;
    Ok(RegistryAck::from_body(&body))
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn register(
        &self,
        registration: &ServiceRegistration,
        port: u16,
    ) -> Result<RegistryAck, DomainError> {
        let payload = registration.clone().into_payload(port);
        let url = format!("{}/register", self.registry_url);
        self.post_json(url, &payload, self.register_timeout).await
    }

    async fn heartbeat(&self, service_name: &str) -> Result<RegistryAck, DomainError> {
        let url = format!("{}/heartbeat/{}", self.registry_url, service_name);
        self.post_json(url, &serde_json::json!({}), self.heartbeat_timeout)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use uuid::Uuid;

    fn registration() -> ServiceRegistration {
        ServiceRegistration::for_endpoint("localhost", 4050, "0.1.0", Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_register_posts_payload() {
        let registration = registration();
        let expected = serde_json::to_value(registration.clone().into_payload(4050)).unwrap();
        assert_eq!(expected["healthCheck"], "http://localhost:4050/api/health");

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/registry/register")
                .header("content-type", "application/json")
                .json_body(expected);
            then.status(200).json_body(json!({ "message": "Service registered" }));
        });

        let client = HttpRegistryClient::new(server.url("/api/registry"));
        let ack = client.register(&registration, 4050).await.unwrap();

        mock.assert();
        assert_eq!(ack.message_or_ok(), "Service registered");
    }

    #[tokio::test]
    async fn test_heartbeat_posts_empty_object() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/registry/heartbeat/searchlink")
                .json_body(json!({}));
            then.status(200).body("alive");
        });

        let client = HttpRegistryClient::new(server.url("/api/registry/"));
        let ack = client.heartbeat("searchlink").await.unwrap();

        mock.assert();
        assert_eq!(ack.message_or_ok(), "OK");
    }

    #[tokio::test]
    async fn test_error_status_is_registry_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/registry/register");
            then.status(503);
        });

        let client = HttpRegistryClient::new(server.url("/api/registry"));
        let err = client.register(&registration(), 4050).await.unwrap_err();

        match err {
            DomainError::RegistryUnavailable(msg) => assert!(msg.contains("503")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_truncated_success_body_is_registry_unavailable() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"mess")
                .await
                .unwrap();
        });

        let client = HttpRegistryClient::new(format!("http://{addr}/api/registry"));
        let err = client.heartbeat("searchlink").await.unwrap_err();

        assert!(matches!(err, DomainError::RegistryUnavailable(_)));
    }

    #[tokio::test]
    async fn test_heartbeat_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/registry/heartbeat/searchlink");
            then.status(200).delay(Duration::from_millis(500));
        });

        let client = HttpRegistryClient {
            heartbeat_timeout: Duration::from_millis(50),
            ..HttpRegistryClient::new(server.url("/api/registry"))
        };

        let err = client.heartbeat("searchlink").await.unwrap_err();
        assert!(matches!(err, DomainError::RegistryUnavailable(_)));
    }
}
