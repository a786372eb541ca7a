//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Provider credentials are missing; the service runs degraded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The search provider failed, timed out, or returned unusable data.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// A registry call failed. Never surfaced to HTTP callers.
    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(String),
}

impl DomainError {
    pub fn upstream<T: std::fmt::Display>(err: T) -> Self {
        Self::Upstream(format!("Failed to perform search: {err}"))
    }

    pub fn registry<T: std::fmt::Display>(err: T) -> Self {
        Self::RegistryUnavailable(err.to_string())
    }
}
