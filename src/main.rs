#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Result;
use float_clock::ClockConfig;
use tracing::error;

// The ticker needs a tokio runtime alive next to the event loop.
#[tokio::main]
async fn main() -> Result<()> {
    float_clock::logging::enable_logging()?;

    float_clock::run(ClockConfig::default()).inspect_err(|e| {
        error!("clock exited with error {e:?}");
    })?;
    Ok(())
}
