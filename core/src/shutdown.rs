//! # Redundant Shutdown Delivery
//!
//! Sends the fixed command token to the target over two independent
//! transports. Both are attempted unconditionally — a UDP failure never
//! short-circuits the TCP attempt — and the outcomes combine with logical
//! OR: the operation fails only when both paths do, and then the error
//! carries both causes.
//!
//! The receiving listener treats the command as idempotent, so duplicate
//! delivery (both paths landing) is harmless by design.

use std::io;
use std::net::Ipv4Addr;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, UdpSocket};
use tracing::{debug, warn};
use wolctl_protocols::shutdown::command_payload;

use crate::error::ControlError;
use crate::net;

/// One delivery path for the command token.
///
/// The abstraction exists so the OR-combination rule is testable with
/// controllable successes and failures, independent of real sockets.
#[async_trait]
pub trait CommandTransport: Send + Sync {
    fn name(&self) -> &'static str;
    async fn deliver(&self, payload: &[u8]) -> io::Result<()>;
}

/// Single unconnected datagram to `target`.
pub struct UdpTransport {
    target: String,
}

/// Bounded connect, stream write, close.
pub struct TcpTransport {
    target: String,
}

#[async_trait]
impl CommandTransport for UdpTransport {
    fn name(&self) -> &'static str {
        "udp"
    }

    async fn deliver(&self, payload: &[u8]) -> io::Result<()> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
        let sent: usize = net::bounded(socket.send_to(payload, self.target.as_str())).await?;
        if sent != payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "command datagram was truncated",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CommandTransport for TcpTransport {
    fn name(&self) -> &'static str {
        "tcp"
    }

    async fn deliver(&self, payload: &[u8]) -> io::Result<()> {
        let mut stream = net::bounded(TcpStream::connect(self.target.as_str())).await?;
        net::bounded(stream.write_all(payload)).await?;
        net::bounded(stream.shutdown()).await?;
        Ok(())
    }
}

/// Sends the shutdown command token to `target_addr:port` over both
/// transports.
pub async fn send_command(target_addr: &str, port: u16) -> Result<(), ControlError> {
    let target: String = format!("{target_addr}:{port}");
    let udp = UdpTransport {
        target: target.clone(),
    };
    let tcp = TcpTransport { target };

    deliver_redundant(&udp, &tcp, command_payload()).await
}

/// Attempts both paths unconditionally and OR-combines the outcomes.
///
/// Careful here: this must never regress into AND semantics or an
/// early exit after the first failure.
pub async fn deliver_redundant(
    udp: &dyn CommandTransport,
    tcp: &dyn CommandTransport,
    payload: &[u8],
) -> Result<(), ControlError> {
    let udp_result = attempt(udp, payload).await;
    let tcp_result = attempt(tcp, payload).await;

    match (udp_result, tcp_result) {
        (Err(udp), Err(tcp)) => Err(ControlError::AllPathsFailed { udp, tcp }),
        _ => Ok(()),
    }
}

async fn attempt(transport: &dyn CommandTransport, payload: &[u8]) -> io::Result<()> {
    match transport.deliver(payload).await {
        Ok(()) => {
            debug!("shutdown command delivered via {}", transport.name());
            Ok(())
        }
        Err(e) => {
            // A partial failure is swallowed into overall success, but it
            // still deserves a trace.
            warn!("{} delivery path failed: {e}", transport.name());
            Err(e)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
