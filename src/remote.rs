//! Injectable remote-operation capability.
//!
//! Every store mutation performs exactly one remote round trip before
//! touching state. In this crate the round trip is simulated: a fixed
//! artificial latency and an unconditional success. The trait exists so a
//! real network backend can later substitute genuine calls - including
//! failures, surfaced as [`crate::errors::Error::Remote`] - without any
//! change to store logic. No timeout or retry policy exists at this layer.

use crate::errors::Result;
use async_trait::async_trait;
use std::time::Duration;

/// One remote round trip, named by operation for diagnostics.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// Performs the round trip for `operation`, resolving once the backend
    /// has (or pretends to have) processed it.
    async fn perform(&self, operation: &str) -> Result<()>;
}

/// The stand-in backend: sleeps a fixed latency and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    latency: Duration,
}

impl SimulatedRemote {
    /// Creates a simulated backend with the given per-call latency.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// A backend that resolves immediately. Intended for tests.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for SimulatedRemote {
    /// The default latency sits in the 500-1000ms band a slow API would show.
    fn default() -> Self {
        Self::new(Duration::from_millis(750))
    }
}

#[async_trait]
impl RemoteCall for SimulatedRemote {
    async fn perform(&self, operation: &str) -> Result<()> {
        tracing::debug!(operation, latency_ms = self.latency.as_millis() as u64, "simulated remote call");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(())
    }
}
