//! Domain Entities
//!
//! - Search: query, normalized result items, provider statistics
//! - Registration: the announcement sent to the host registry

mod registration;
mod search;

pub use registration::*;
pub use search::*;
