//! Tracing initialization for the embedding application shell.
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the shell's job. This helper wires up the standard fmt subscriber with an
//! env-filter so log verbosity can be controlled via `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, defaulting to `info` level when
/// `RUST_LOG` is unset. Call once, as early as possible.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
