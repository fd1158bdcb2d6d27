//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: pure, synchronous graph and instance types
//! - usecase: orchestration + progress events
//! - infrastructure: algorithm implementations, file formats, NDJSON
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    scc_two_sat::interface::cli::run().await
}
