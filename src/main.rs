//! sidecar: resolve options for the chain indexing sidecar
//!
//! Reads `run` flags with environment fallbacks, prints the resolved options
//! and exits non-zero when a required option is missing.

use anyhow::Result;

fn main() -> Result<()> {
    sidecar::cli::run()
}
