//! Registry Port
//!
//! Abstract interface for announcing this service to the host registry.

use async_trait::async_trait;

use crate::domain::entities::{RegistryAck, ServiceRegistration};
use crate::domain::errors::DomainError;

/// Host registry interface
///
/// Implementations perform exactly one bounded HTTP call per method and
/// report every failure as `DomainError::RegistryUnavailable`. Retrying
/// is the caller's concern.
///
/// # Example
///
/// ```rust,ignore
/// use searchlink::ports::RegistryClient;
///
/// struct HttpRegistryClient { /* reqwest client */ }
///
/// #[async_trait]
/// impl RegistryClient for HttpRegistryClient {
///     async fn register(&self, registration: &ServiceRegistration, port: u16)
///         -> Result<RegistryAck, DomainError>
///     {
///         // POST {registry}/register
///     }
/// }
/// ```
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Register (or re-register) the service
    ///
    /// # Arguments
    /// * `registration` - Freshly built registration record
    /// * `port` - Port reported alongside the registration
    async fn register(
        &self,
        registration: &ServiceRegistration,
        port: u16,
    ) -> Result<RegistryAck, DomainError>;

    /// Send a liveness heartbeat for `service_name`
    async fn heartbeat(&self, service_name: &str) -> Result<RegistryAck, DomainError>;
}
