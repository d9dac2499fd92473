//! # Wake Operation
//!
//! Parse → frame → one broadcast datagram. Success means the frame was
//! handed to the network; whether the target NIC actually wakes is not
//! observable from here, and no retry is attempted.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use tokio::net::UdpSocket;
use tracing::debug;
use wolctl_common::network::mac;
use wolctl_protocols::wol;

use crate::error::ControlError;
use crate::net;

const BROADCAST_ADDR: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::BROADCAST, wol::WAKE_PORT);

/// Builds and broadcasts the magic packet for `mac_text`.
///
/// Validation happens first: malformed address text is
/// [`ControlError::InvalidAddress`] and nothing touches the wire.
pub async fn send_broadcast(mac_text: &str) -> Result<(), ControlError> {
    let mac = mac::parse_mac(mac_text)?;
    let frame = wol::magic_packet(mac);

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.set_broadcast(true)?;
    net::bounded(socket.send_to(&frame, SocketAddr::V4(BROADCAST_ADDR))).await?;

    debug!("magic packet for {mac} handed to the network");
    Ok(())
}
