//! Hostname resolution entry point.
//!
//! Without a device binder the platform resolver is used unchanged. With
//! one, a raw A query is sent over a UDP socket bound to the device so that
//! no DNS traffic leaves on the default route.

use super::query;
use super::transport::BoundUdpTransport;
use bound_dns_application::{DialConfig, HostResolver};
use bound_dns_domain::ResolveError;
use std::net::{IpAddr, ToSocketAddrs};
use tracing::debug;

/// Resolve `host` to its IP addresses.
///
/// A literal IP address is echoed back as a one-element list with no socket
/// or network I/O, on either path.
pub fn lookup_host(host: &str, config: &DialConfig) -> Result<Vec<IpAddr>, ResolveError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(vec![ip]);
    }

    if config.device_binder.is_none() {
        return system_lookup(host);
    }

    bound_lookup(host, config)
}

/// Delegate to the platform resolver, result returned unchanged.
fn system_lookup(host: &str) -> Result<Vec<IpAddr>, ResolveError> {
    let addrs = (host, 0u16)
        .to_socket_addrs()
        .map_err(|e| ResolveError::SystemLookup {
            host: host.to_string(),
            source: e,
        })?
        .map(|addr| addr.ip())
        .collect();
    Ok(addrs)
}

/// Drive the device-bound path: one socket, one query, one response. The
/// socket is released when the transport drops, on success and on every
/// error path.
fn bound_lookup(host: &str, config: &DialConfig) -> Result<Vec<IpAddr>, ResolveError> {
    let mut transport = BoundUdpTransport::connect(host, config)?;
    let addrs = query::exchange(&mut transport, host)?;

    debug!(host, addresses = addrs.len(), "device-bound lookup finished");
    Ok(addrs)
}

/// [`HostResolver`] implementation carrying its own dial configuration.
pub struct Resolver {
    config: DialConfig,
}

impl Resolver {
    pub fn new(config: DialConfig) -> Self {
        Self { config }
    }
}

impl HostResolver for Resolver {
    fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        lookup_host(host, &self.config)
    }
}
