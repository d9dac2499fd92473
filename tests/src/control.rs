#![cfg(test)]
//! End-to-end checks of the control operations against real loopback
//! sockets. Transport failure combinations that need scripted outcomes
//! live next to the OR-combination logic in `wolctl-core`.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, UdpSocket};
use tokio::time::timeout;
use wolctl_common::config::AgentConfig;
use wolctl_core::{shutdown, ControlError, PowerControl};
use wolctl_protocols::shutdown::SHUTDOWN_COMMAND;

const RECV_DEADLINE: Duration = Duration::from_secs(2);

/// The command token must land on a UDP socket and a TCP listener sharing
/// one port number (the port spaces are independent, as on the real
/// target).
#[tokio::test]
async fn shutdown_command_arrives_on_both_transports() {
    let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = tcp.local_addr().unwrap().port();
    let udp = UdpSocket::bind(("127.0.0.1", port)).await.unwrap();

    shutdown::send_command("127.0.0.1", port).await.unwrap();

    let mut datagram = [0u8; 64];
    let (len, _peer) = timeout(RECV_DEADLINE, udp.recv_from(&mut datagram))
        .await
        .expect("no datagram within deadline")
        .unwrap();
    assert_eq!(&datagram[..len], SHUTDOWN_COMMAND.as_bytes());

    let (mut stream, _peer) = timeout(RECV_DEADLINE, tcp.accept())
        .await
        .expect("no connection within deadline")
        .unwrap();
    let mut received = Vec::new();
    timeout(RECV_DEADLINE, stream.read_to_end(&mut received))
        .await
        .expect("stream not closed within deadline")
        .unwrap();
    assert_eq!(received, SHUTDOWN_COMMAND.as_bytes());
}

/// A refused TCP side must not drag the outcome down while UDP delivery
/// lands.
#[tokio::test]
async fn refused_tcp_path_still_yields_success() {
    let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = udp.local_addr().unwrap().port();

    shutdown::send_command("127.0.0.1", port).await.unwrap();

    let mut datagram = [0u8; 64];
    let (len, _peer) = timeout(RECV_DEADLINE, udp.recv_from(&mut datagram))
        .await
        .expect("no datagram within deadline")
        .unwrap();
    assert_eq!(&datagram[..len], SHUTDOWN_COMMAND.as_bytes());
}

/// With an unresolvable target both paths fail, and the single error
/// names both causes.
#[tokio::test]
async fn unresolvable_target_fails_with_both_causes() {
    let err = shutdown::send_command("host.invalid", 10675)
        .await
        .unwrap_err();

    assert!(matches!(err, ControlError::AllPathsFailed { .. }));
    let rendered = err.to_string();
    assert!(rendered.contains("udp:"), "missing udp cause: {rendered}");
    assert!(rendered.contains("tcp:"), "missing tcp cause: {rendered}");
}

#[tokio::test]
async fn power_control_probes_the_configured_port() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let live_port = listener.local_addr().unwrap().port();

    let parked = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_port = parked.local_addr().unwrap().port();
    drop(parked);

    let online = PowerControl::new(Arc::new(AgentConfig {
        probe_port: live_port,
        ..AgentConfig::default()
    }));
    let offline = PowerControl::new(Arc::new(AgentConfig {
        probe_port: dead_port,
        ..AgentConfig::default()
    }));

    assert!(online.is_online().await);
    assert!(!offline.is_online().await);
}

/// Several PowerControl clones working the same config concurrently must
/// not interfere — the config is a read-only snapshot and every probe
/// owns its socket.
#[tokio::test]
async fn concurrent_operations_share_config_without_interference() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let control = PowerControl::new(Arc::new(AgentConfig {
        probe_port: listener.local_addr().unwrap().port(),
        ..AgentConfig::default()
    }));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let control = control.clone();
        handles.push(tokio::spawn(async move { control.is_online().await }));
    }

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}
