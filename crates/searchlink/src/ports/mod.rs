//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the service talks to the outside
//! world. Implementations live in the server crate's adapters.

pub mod registry;
pub mod services;

// Re-exports
pub use registry::*;
pub use services::*;
