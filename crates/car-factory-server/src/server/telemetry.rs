//! # Logging
//!
//! Log output goes through `tracing` and is rendered by a
//! `tracing_subscriber::fmt` layer in human-readable form. The level filter is
//! read from `RUST_LOG` and defaults to `info`.
//!
//! ## Example usage
//!
//! Show per-call debug events:
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin car-factory-server
//! ```

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true)
                .pretty(),
        )
        .try_init()?;

    Ok(())
}
