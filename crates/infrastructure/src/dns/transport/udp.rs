//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One socket per address family, bound once and reused for every exchange.
//! A lost datagram gets exactly one retransmission of the same bytes.

use async_trait::async_trait;
use dnslookup_application::ports::{AttemptObserver, DnsTransport};
use dnslookup_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::OnceCell;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Largest datagram accepted; anything longer is truncated by the kernel.
const MAX_UDP_RESPONSE_SIZE: usize = 1024;

/// First transmission plus one retry.
const MAX_ATTEMPTS: u32 = 2;

/// DNS over UDP with a per-attempt receive timeout.
///
/// A reply is accepted only when its ID matches the query's; late or
/// duplicated datagrams from earlier exchanges are read and dropped until the
/// attempt's deadline. One exchange is in flight per transport at a time.
pub struct UdpTransport {
    socket_v4: UdpSocket,
    socket_v6: OnceCell<UdpSocket>,
    port: u16,
    timeout: Duration,
}

impl UdpTransport {
    /// Binds the IPv4 socket on an ephemeral port. The IPv6 socket is bound
    /// lazily on first use.
    pub async fn bind(port: u16, timeout: Duration) -> Result<Self, DomainError> {
        let socket_v4 = UdpSocket::bind(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0))
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        debug!(
            local_addr = ?socket_v4.local_addr().ok(),
            port,
            timeout_ms = timeout.as_millis() as u64,
            "UDP transport ready"
        );

        Ok(Self {
            socket_v4,
            socket_v6: OnceCell::new(),
            port,
            timeout,
        })
    }

    async fn socket_for(&self, server: &SocketAddr) -> Result<&UdpSocket, DomainError> {
        if server.is_ipv4() {
            return Ok(&self.socket_v4);
        }
        self.socket_v6
            .get_or_try_init(|| async {
                UdpSocket::bind(SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0))
                    .await
                    .map_err(|e| {
                        DomainError::IoError(format!("Failed to bind IPv6 UDP socket: {}", e))
                    })
            })
            .await
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(
        &self,
        query: &[u8],
        server: IpAddr,
        on_attempt: AttemptObserver<'_>,
    ) -> Result<Vec<u8>, DomainError> {
        let server_addr = SocketAddr::new(server, self.port);
        let socket = self.socket_for(&server_addr).await?;
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        for attempt in 1..=MAX_ATTEMPTS {
            on_attempt(attempt);

            let bytes_sent = socket.send_to(query, server_addr).await.map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to send UDP query to {}: {}",
                    server_addr, e
                ))
            })?;

            debug!(
                server = %server_addr,
                bytes_sent,
                attempt,
                "UDP query sent"
            );

            let deadline = Instant::now() + self.timeout;
            loop {
                match tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf)).await {
                    Ok(Ok((bytes_received, from_addr))) => {
                        if from_addr != server_addr {
                            warn!(
                                expected = %server_addr,
                                received_from = %from_addr,
                                "UDP response from unexpected source"
                            );
                        }

                        if !same_query_id(query, &recv_buf[..bytes_received]) {
                            warn!(
                                server = %server_addr,
                                bytes_received,
                                "Dropping UDP response with mismatched ID"
                            );
                            continue;
                        }

                        debug!(
                            server = %server_addr,
                            bytes_received,
                            "UDP response received"
                        );
                        recv_buf.truncate(bytes_received);
                        return Ok(recv_buf);
                    }
                    Ok(Err(e)) => {
                        return Err(DomainError::IoError(format!(
                            "Failed to receive UDP response from {}: {}",
                            server_addr, e
                        )));
                    }
                    Err(_) => {
                        debug!(server = %server_addr, attempt, "UDP query timed out");
                        break;
                    }
                }
            }
        }

        Err(DomainError::QueryTimeout {
            server: server_addr.to_string(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

/// Query and reply carry the ID in their first two bytes.
fn same_query_id(query: &[u8], reply: &[u8]) -> bool {
    query.len() >= 2 && reply.len() >= 2 && query[..2] == reply[..2]
}
