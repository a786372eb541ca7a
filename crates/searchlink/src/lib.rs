//! Searchlink Domain Library
//!
//! Core domain types and interfaces for the Searchlink search service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types with no infrastructure dependencies
//!   - `entities/`: Search queries/results and service registrations
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External search provider interface
//!   - `registry`: Host registry interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use searchlink::{SearchProvider, SearchResponse};
//! use searchlink::{RegistryClient, ServiceRegistration};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, RegistrationMetadata, RegistrationPayload, RegistryAck, SearchInformation,
    SearchQuery, SearchResponse, SearchResultItem, ServiceRegistration, SEARCH_OPERATION,
    SERVICE_NAME,
};
pub use ports::{RegistryClient, SearchProvider};
