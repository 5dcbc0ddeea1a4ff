//! sidecar: configuration front-end for the chain indexing sidecar
//!
//! Resolves service options from command-line flags, an environment snapshot
//! and static defaults, and validates the required ones.

pub mod cli;
pub mod config;

pub use cli::{parse_args, ParseError};
pub use config::{EnvSnapshot, Options};
