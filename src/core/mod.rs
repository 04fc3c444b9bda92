/*!
 * Core Module
 * Fundamental harness types, configuration and error handling
 */

pub mod config;
pub mod errors;
pub mod sync;
pub mod types;

// Re-export for convenience
pub use config::{RunConfig, RunMode};
pub use errors::*;
pub use types::*;
