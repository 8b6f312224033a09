//! UDP telemetry link
//!
//! Opens the single send-only datagram socket at startup and pushes one
//! encoded message per iteration to the fixed remote endpoint. There is no
//! receive path and no acknowledgment; delivery is best-effort.

use crate::{BoardError, config, endpoint};
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::{IpAddress, IpEndpoint, Stack};
use esp_println::println;

/// Send-only UDP link to the telemetry receiver.
///
/// Created once after WiFi bring-up; every iteration reuses the same socket
/// and resolved endpoint.
pub struct UdpLink<'a> {
    socket: UdpSocket<'a>,
    remote: IpEndpoint,
}

impl<'a> UdpLink<'a> {
    /// Parse the remote address, allocate the socket and bind it.
    ///
    /// A malformed address is `AddressParse`; a bind failure is
    /// `SocketAllocation`. Both are fatal to startup.
    pub fn open(
        stack: Stack<'a>,
        rx_meta: &'a mut [PacketMetadata],
        rx_buffer: &'a mut [u8],
        tx_meta: &'a mut [PacketMetadata],
        tx_buffer: &'a mut [u8],
        remote_text: &str,
        remote_port: u16,
    ) -> Result<Self, BoardError> {
        let remote_addr = endpoint::parse_remote_addr(remote_text)?;

        let mut socket = UdpSocket::new(stack, rx_meta, rx_buffer, tx_meta, tx_buffer);
        socket
            .bind(config::LOCAL_PORT)
            .map_err(|_| BoardError::SocketAllocation)?;

        let remote = IpEndpoint::new(IpAddress::Ipv4(remote_addr), remote_port);
        println!(
            "[UDP] Sending telemetry to {}:{}",
            remote_addr, remote_port
        );

        Ok(Self { socket, remote })
    }

    /// Fire-and-forget send of one encoded message.
    pub async fn send(&mut self, message: &str) -> Result<(), BoardError> {
        self.socket
            .send_to(message.as_bytes(), self.remote)
            .await
            .map_err(|_| BoardError::Send)
    }

    /// Resolved remote endpoint (for diagnostics).
    pub fn remote(&self) -> IpEndpoint {
        self.remote
    }
}
