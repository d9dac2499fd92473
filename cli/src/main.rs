mod commands;
mod server;
mod terminal;

use std::sync::Arc;

use anyhow::Context;
use commands::{CommandLine, Commands};
use tracing::info;
use wolctl_common::config::AgentConfig;
use wolctl_core::PowerControl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    terminal::logging::init();

    let cfg: AgentConfig = args.build_config().context("invalid configuration")?;
    let control = PowerControl::new(Arc::new(cfg));

    match args.command {
        Commands::Serve => server::serve(control).await,
        Commands::Wake => {
            control.wake().await.context("wake failed")?;
            info!("magic packet sent for {}", control.config().mac);
            Ok(())
        }
        Commands::Shutdown => {
            control.shutdown().await.context("shutdown command failed")?;
            let cfg = control.config();
            info!(
                "shutdown command sent to {}:{}",
                cfg.target_addr, cfg.shutdown_port
            );
            Ok(())
        }
        Commands::Status => {
            // Scriptable: bare boolean on stdout, always exit zero.
            let online: bool = control.is_online().await;
            println!("{online}");
            Ok(())
        }
    }
}
