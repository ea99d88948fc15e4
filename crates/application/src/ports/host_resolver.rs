use bound_dns_domain::ResolveError;
use std::net::IpAddr;

pub trait HostResolver: Send + Sync {
    /// Resolve a hostname to its IP addresses, in response order. A literal
    /// IP address resolves to itself without network I/O.
    fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}
