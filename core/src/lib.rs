//! # wolctl core operations
//!
//! The three power-control actions against the one configured target host:
//! wake it ([`wake`]), ask it to shut down ([`shutdown`]), check whether it
//! is up ([`probe`]). Each is a single synchronous transaction over its own
//! socket — no retries, no shared mutable state, every network wait under
//! an explicit time bound. Callers hold a [`PowerControl`] and invoke the
//! operations concurrently as they please.

pub mod error;
mod net;
pub mod probe;
pub mod shutdown;
pub mod wake;

use std::sync::Arc;

use wolctl_common::config::AgentConfig;

pub use error::ControlError;

/// Entry point for callers: binds the immutable [`AgentConfig`] to the
/// three operations so the HTTP endpoint and the CLI one-shots dispatch
/// the same way.
#[derive(Clone)]
pub struct PowerControl {
    config: Arc<AgentConfig>,
}

impl PowerControl {
    pub fn new(config: Arc<AgentConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Broadcasts the magic packet for the configured MAC.
    pub async fn wake(&self) -> Result<(), ControlError> {
        wake::send_broadcast(&self.config.mac).await
    }

    /// Sends the shutdown command to the configured target, UDP and TCP.
    pub async fn shutdown(&self) -> Result<(), ControlError> {
        shutdown::send_command(&self.config.target_addr, self.config.shutdown_port).await
    }

    /// Probes the configured target's liveness port.
    pub async fn is_online(&self) -> bool {
        probe::is_reachable(&self.config.target_addr, self.config.probe_port).await
    }
}
