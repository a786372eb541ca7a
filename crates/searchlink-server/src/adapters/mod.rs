//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod google_search;
pub mod registry;

// Re-exports
pub use google_search::GoogleSearchClient;
pub use registry::HttpRegistryClient;
