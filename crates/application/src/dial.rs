use crate::ports::DeviceBinder;
use bound_dns_domain::ResolverConfig;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Dial settings consumed read-only by a single lookup.
///
/// A present `device_binder` activates the device-bound resolution path;
/// without one, lookups delegate to the platform resolver.
#[derive(Clone)]
pub struct DialConfig {
    pub device_binder: Option<Arc<dyn DeviceBinder>>,

    /// Resolver the bound path queries directly; literal IPv4 address.
    pub dns_server: String,

    /// Applied as both read and write deadline on the query socket.
    /// Zero means no deadline.
    pub query_timeout: Duration,
}

impl DialConfig {
    pub fn new(config: &ResolverConfig, device_binder: Option<Arc<dyn DeviceBinder>>) -> Self {
        Self {
            device_binder,
            dns_server: config.dns_server.clone(),
            query_timeout: config.query_timeout(),
        }
    }
}

impl fmt::Debug for DialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialConfig")
            .field("device_binder", &self.device_binder.is_some())
            .field("dns_server", &self.dns_server)
            .field("query_timeout", &self.query_timeout)
            .finish()
    }
}
