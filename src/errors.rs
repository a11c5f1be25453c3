//! Unified error types and result handling.
//!
//! The error taxonomy is deliberately small: configuration and storage
//! failures, snapshot serialization failures, and remote-call failures.
//! Lookup misses (dangling doctor/location/pet ids) are represented as
//! `Option` at the call site and never surface here.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog or configuration data could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// The snapshot store rejected a read or write.
    #[error("storage error: {message}")]
    Storage {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A remote operation reported failure. The built-in simulated backend
    /// never produces this; real backends substituted behind
    /// [`crate::remote::RemoteCall`] may.
    #[error("remote call failed: {message}")]
    Remote {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A snapshot could not be encoded to or decoded from JSON.
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem I/O failure from the file-backed snapshot store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
