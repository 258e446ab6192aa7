//! Process entry point. The ledger is a library; the binary only sets up logging.

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    rentledger_observability::init().context("failed to configure logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rentledger started");
    Ok(())
}
