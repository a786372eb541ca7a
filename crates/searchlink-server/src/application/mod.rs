//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the provider port.

mod search_service;

pub use search_service::SearchService;
