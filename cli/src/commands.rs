use clap::{Parser, Subcommand};
use wolctl_common::config::{self, AgentConfig, ConfigError};

#[derive(Parser)]
#[command(name = "wolctl")]
#[command(about = "Remote power control for a single target host.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Target host address (overrides WOLCTL_TARGET_ADDR)
    #[arg(long, global = true)]
    pub target: Option<String>,

    /// Target MAC address (overrides WOLCTL_TARGET_MAC)
    #[arg(long, global = true)]
    pub mac: Option<String>,

    /// Shutdown command port (overrides WOLCTL_SHUTDOWN_PORT)
    #[arg(long, global = true)]
    pub shutdown_port: Option<u16>,

    /// Liveness probe port (overrides WOLCTL_PROBE_PORT)
    #[arg(long, global = true)]
    pub probe_port: Option<u16>,

    /// Listen port for the control endpoint (overrides WOLCTL_HTTP_PORT)
    #[arg(long, global = true)]
    pub http_port: Option<u16>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP control endpoint
    #[command(alias = "s")]
    Serve,
    /// Send the wake broadcast for the configured MAC
    #[command(alias = "w")]
    Wake,
    /// Send the shutdown command to the target
    #[command(alias = "d")]
    Shutdown,
    /// Print whether the target is currently online
    #[command(alias = "q")]
    Status,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the agent configuration, flags taking precedence over the
    /// environment. Flag values go through the same validation as env
    /// values, so a bad `--mac` fails here, not at wake time.
    pub fn build_config(&self) -> Result<AgentConfig, ConfigError> {
        AgentConfig::from_lookup(|var| {
            let flag: Option<String> = match var {
                config::ENV_TARGET_ADDR => self.target.clone(),
                config::ENV_TARGET_MAC => self.mac.clone(),
                config::ENV_SHUTDOWN_PORT => self.shutdown_port.map(|p| p.to_string()),
                config::ENV_PROBE_PORT => self.probe_port.map(|p| p.to_string()),
                config::ENV_HTTP_PORT => self.http_port.map(|p| p.to_string()),
                _ => None,
            };
            flag.or_else(|| std::env::var(var).ok())
        })
    }
}
