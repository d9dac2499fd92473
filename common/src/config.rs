//! # Agent Configuration
//!
//! Process-lifetime settings for the control agent: which host to manage,
//! its MAC address, and the ports the three operations talk to.
//!
//! Built once at startup from environment variables (each overridable by a
//! CLI flag), then shared read-only behind an `Arc`. Nothing mutates it
//! afterwards, so concurrent request handlers need no locking.

use thiserror::Error;

use crate::network::mac::{self, MacParseError};

pub const ENV_TARGET_ADDR: &str = "WOLCTL_TARGET_ADDR";
pub const ENV_TARGET_MAC: &str = "WOLCTL_TARGET_MAC";
pub const ENV_SHUTDOWN_PORT: &str = "WOLCTL_SHUTDOWN_PORT";
pub const ENV_PROBE_PORT: &str = "WOLCTL_PROBE_PORT";
pub const ENV_HTTP_PORT: &str = "WOLCTL_HTTP_PORT";

pub const DEFAULT_TARGET_ADDR: &str = "127.0.0.1";
pub const DEFAULT_TARGET_MAC: &str = "00:00:00:00:00:00";
/// Port the shutdown listener on the target is expected to sit on.
pub const DEFAULT_SHUTDOWN_PORT: u16 = 10675;
/// RDP. Not a protocol requirement, just a service that answers exactly
/// when the target's OS is up.
pub const DEFAULT_PROBE_PORT: u16 = 3389;
pub const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: invalid port number '{value}'")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var}: {source}")]
    InvalidMac {
        var: &'static str,
        source: MacParseError,
    },
}

/// Immutable per-process configuration, one target host.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Target host, literal IPv4 or a resolvable name.
    pub target_addr: String,
    /// Target MAC in colon-separated text form, validated at build time.
    pub mac: String,
    pub shutdown_port: u16,
    pub probe_port: u16,
    /// Port the control endpoint itself listens on.
    pub http_port: u16,
}

impl AgentConfig {
    /// Builds the configuration from process environment variables,
    /// falling back to the defaults above for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`AgentConfig::from_env`], but with an injectable variable
    /// source so construction is testable without touching the real
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_addr: String =
            lookup(ENV_TARGET_ADDR).unwrap_or_else(|| DEFAULT_TARGET_ADDR.to_string());
        let mac: String =
            lookup(ENV_TARGET_MAC).unwrap_or_else(|| DEFAULT_TARGET_MAC.to_string());

        // A bad MAC should fail the process at startup, not the first
        // wake request hours later.
        mac::parse_mac(&mac).map_err(|source| ConfigError::InvalidMac {
            var: ENV_TARGET_MAC,
            source,
        })?;

        Ok(Self {
            target_addr,
            mac,
            shutdown_port: parse_port(ENV_SHUTDOWN_PORT, lookup(ENV_SHUTDOWN_PORT), DEFAULT_SHUTDOWN_PORT)?,
            probe_port: parse_port(ENV_PROBE_PORT, lookup(ENV_PROBE_PORT), DEFAULT_PROBE_PORT)?,
            http_port: parse_port(ENV_HTTP_PORT, lookup(ENV_HTTP_PORT), DEFAULT_HTTP_PORT)?,
        })
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            target_addr: DEFAULT_TARGET_ADDR.to_string(),
            mac: DEFAULT_TARGET_MAC.to_string(),
            shutdown_port: DEFAULT_SHUTDOWN_PORT,
            probe_port: DEFAULT_PROBE_PORT,
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

fn parse_port(
    var: &'static str,
    value: Option<String>,
    default: u16,
) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AgentConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.target_addr, DEFAULT_TARGET_ADDR);
        assert_eq!(cfg.mac, DEFAULT_TARGET_MAC);
        assert_eq!(cfg.shutdown_port, 10675);
        assert_eq!(cfg.probe_port, 3389);
        assert_eq!(cfg.http_port, 8080);
    }

    #[test]
    fn environment_overrides_are_applied() {
        let cfg = AgentConfig::from_lookup(|var| match var {
            ENV_TARGET_ADDR => Some("192.168.1.50".to_string()),
            ENV_TARGET_MAC => Some("aa:bb:cc:dd:ee:ff".to_string()),
            ENV_SHUTDOWN_PORT => Some("20000".to_string()),
            ENV_PROBE_PORT => Some("22".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(cfg.target_addr, "192.168.1.50");
        assert_eq!(cfg.mac, "aa:bb:cc:dd:ee:ff");
        assert_eq!(cfg.shutdown_port, 20000);
        assert_eq!(cfg.probe_port, 22);
        assert_eq!(cfg.http_port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn malformed_port_is_a_startup_error() {
        let result = AgentConfig::from_lookup(|var| match var {
            ENV_PROBE_PORT => Some("not-a-port".to_string()),
            _ => None,
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPort { var: ENV_PROBE_PORT, .. })
        ));
    }

    #[test]
    fn malformed_mac_is_a_startup_error() {
        let result = AgentConfig::from_lookup(|var| match var {
            ENV_TARGET_MAC => Some("AA:BB:CC".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(ConfigError::InvalidMac { .. })));
    }
}
