//! The `atelier` command-line front end.
//!
//! Thin wrappers over [`atelier_theme`] and [`atelier_inventory`]: argument
//! parsing, configuration lookup and logging setup live here, everything else
//! in the libraries.

pub mod cli;
pub mod commands;
pub mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
