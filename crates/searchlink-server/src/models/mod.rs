//! Searchlink API Models
//!
//! - Search: simple search request and normalized result
//! - Health: liveness payload

mod health;
mod search;

pub use health::*;
pub use search::*;
