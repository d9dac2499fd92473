use std::io;

use thiserror::Error;
use wolctl_common::network::mac::MacParseError;

/// Failure modes of the wake and shutdown operations. The liveness probe
/// has none — unreachable and undeterminable both collapse to `false`.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Malformed hardware-address text, caught before any socket is opened.
    #[error("invalid hardware address: {0}")]
    InvalidAddress(#[from] MacParseError),

    /// An OS-level socket, option, connect, or send failure.
    #[error("transport failure: {0}")]
    Transport(#[from] io::Error),

    /// Both redundant shutdown delivery paths failed; carries both causes
    /// so a single diagnostic names everything that went wrong.
    #[error("all delivery paths failed (udp: {udp}, tcp: {tcp})")]
    AllPathsFailed { udp: io::Error, tcp: io::Error },
}
