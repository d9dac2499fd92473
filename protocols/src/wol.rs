//! # Wake-on-LAN Frame
//!
//! Builds the magic packet: a 6-byte synchronization stream of `0xFF`
//! followed by the target MAC repeated 16 times, 102 bytes total. That is
//! the whole payload — this protocol variant has no SecureOn password or
//! other trailer. The frame travels as a single broadcast UDP datagram on
//! the discard port.

use pnet::util::MacAddr;

pub const SYNC_STREAM_LEN: usize = 6;
pub const MAC_LEN: usize = 6;
pub const MAC_REPETITIONS: usize = 16;
pub const MAGIC_PACKET_LEN: usize = SYNC_STREAM_LEN + MAC_REPETITIONS * MAC_LEN;

/// Destination UDP port for the wake broadcast. Fixed by convention,
/// not configurable.
pub const WAKE_PORT: u16 = 9;

/// Builds the 102-byte magic packet for `mac`.
pub fn magic_packet(mac: MacAddr) -> [u8; MAGIC_PACKET_LEN] {
    let octets: [u8; MAC_LEN] = [mac.0, mac.1, mac.2, mac.3, mac.4, mac.5];

    let mut frame: [u8; MAGIC_PACKET_LEN] = [0u8; MAGIC_PACKET_LEN];
    frame[..SYNC_STREAM_LEN].fill(0xFF);

    for repetition in frame[SYNC_STREAM_LEN..].chunks_exact_mut(MAC_LEN) {
        repetition.copy_from_slice(&octets);
    }

    frame
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
