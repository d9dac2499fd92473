//! # Liveness Probe
//!
//! A bounded TCP connect to the target's probe port, used as a heuristic
//! "is the OS up" signal. The answer is a plain bool: refusal, timeout and
//! resolution failure are all just "not reachable". Note the asymmetry
//! with a port scanner — an RST proves a host exists, but for this probe
//! only a completed connection counts as online.

use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::net::IO_TIMEOUT;

/// Returns whether a TCP connection to `target_addr:port` completes within
/// one second. The socket is dropped immediately on every path; nothing is
/// sent or read.
pub async fn is_reachable(target_addr: &str, port: u16) -> bool {
    let target: String = format!("{target_addr}:{port}");

    match timeout(IO_TIMEOUT, TcpStream::connect(target.as_str())).await {
        Ok(Ok(_stream)) => true,
        // Refused, unresolvable, or out of time: all just "not reachable".
        Ok(Err(_)) | Err(_) => false,
    }
}
