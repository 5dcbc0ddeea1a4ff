//! Configuration model and environment lookups
//!
//! Holds the resolved [`Options`] record, its static defaults and the
//! environment snapshot the resolver reads from (CLI > Env > Defaults).

pub mod env;
pub mod options;

pub use env::EnvSnapshot;
pub use options::{ConfigError, Options};
