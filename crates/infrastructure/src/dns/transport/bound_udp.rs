//! Device-bound UDP transport.
//!
//! Builds the raw socket path for DNS queries that must leave on a specific
//! network interface: create an IPv4 datagram socket, hand the raw fd to the
//! device-binding capability, then datagram-connect it to the configured
//! resolver on port 53. The socket is owned by exactly one query exchange
//! and closed on drop, on every exit path.

use super::DnsTransport;
use bound_dns_application::DialConfig;
use bound_dns_domain::{ResolveError, DNS_PORT};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};
use std::os::unix::io::AsRawFd;
use tracing::{debug, warn};

/// Maximum UDP DNS response size accepted.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// UDP socket bound to a network device and connected to the resolver.
#[derive(Debug)]
pub struct BoundUdpTransport {
    socket: UdpSocket,
    resolver_addr: SocketAddr,
}

impl BoundUdpTransport {
    /// Create the socket, apply the device-binding capability, and connect
    /// to `(config.dns_server, 53)`.
    ///
    /// A failed device bind does not abort the lookup: the outcome is logged
    /// and otherwise ignored, so the query may then leave on the default
    /// route. `host` is carried for error context only.
    pub fn connect(host: &str, config: &DialConfig) -> Result<Self, ResolveError> {
        let socket =
            Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP)).map_err(|e| {
                ResolveError::SocketCreate {
                    host: host.to_string(),
                    source: e,
                }
            })?;

        if let Some(binder) = &config.device_binder {
            if let Err(e) = binder.bind_to_device(socket.as_raw_fd()) {
                warn!(host, error = %e, "bind_to_device failed; query may use the default route");
            }
        }

        // The resolver must be a literal IPv4 address; a hostname here
        // would itself need resolving.
        let resolver_ip: Ipv4Addr =
            config
                .dns_server
                .parse()
                .map_err(|_| ResolveError::InvalidResolverAddress {
                    host: host.to_string(),
                    addr: config.dns_server.clone(),
                })?;
        let resolver_addr = SocketAddr::V4(SocketAddrV4::new(resolver_ip, DNS_PORT));

        // Datagram connect only fixes the default peer; there is no
        // handshake, so no connect timeout applies.
        socket
            .connect(&resolver_addr.into())
            .map_err(|e| ResolveError::Connect {
                host: host.to_string(),
                source: e,
            })?;

        let socket: UdpSocket = socket.into();

        if !config.query_timeout.is_zero() {
            socket
                .set_read_timeout(Some(config.query_timeout))
                .and_then(|_| socket.set_write_timeout(Some(config.query_timeout)))
                .map_err(|e| ResolveError::Connect {
                    host: host.to_string(),
                    source: e,
                })?;
        }

        debug!(host, resolver = %resolver_addr, timeout = ?config.query_timeout, "bound UDP transport connected");

        Ok(Self {
            socket,
            resolver_addr,
        })
    }
}

impl DnsTransport for BoundUdpTransport {
    fn send(&mut self, message_bytes: &[u8]) -> io::Result<()> {
        let bytes_sent = self.socket.send(message_bytes)?;
        debug!(resolver = %self.resolver_addr, bytes_sent, "DNS query sent");
        Ok(())
    }

    fn recv(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = self.socket.recv(&mut buf)?;
        buf.truncate(bytes_received);
        debug!(resolver = %self.resolver_addr, bytes_received, "DNS response received");
        Ok(buf)
    }
}
