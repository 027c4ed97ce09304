//! Pattern catalog module
//!
//! Provides the reference-architecture catalog schema and the YAML
//! loader that validates it before the engine runs.

mod loader;
mod schema;

pub use loader::*;
pub use schema::*;
