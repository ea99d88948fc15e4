pub mod bound_udp;

pub use bound_udp::BoundUdpTransport;

use std::io;

/// Datagram transport for a single DNS query/response exchange.
///
/// One implementor instance carries exactly one exchange; it is never pooled
/// or reused across queries.
pub trait DnsTransport {
    /// Send one serialized DNS message.
    fn send(&mut self, message_bytes: &[u8]) -> io::Result<()>;

    /// Receive one datagram holding one DNS message.
    fn recv(&mut self) -> io::Result<Vec<u8>>;
}
