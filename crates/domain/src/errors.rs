use thiserror::Error;

/// Failure kinds for a single host lookup.
///
/// Every variant carries the hostname that was being resolved. All variants
/// are terminal: a failed step aborts the lookup and nothing is retried.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to create UDP socket resolving '{host}': {source}")]
    SocketCreate {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("resolver address '{addr}' is not a literal IPv4 address (resolving '{host}')")]
    InvalidResolverAddress { host: String, addr: String },

    #[error("failed to connect socket to resolver for '{host}': {source}")]
    Connect {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build DNS query for '{host}': {reason}")]
    QueryBuild { host: String, reason: String },

    #[error("failed to write DNS query for '{host}': {source}")]
    QueryWrite {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read DNS response for '{host}': {source}")]
    QueryRead {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed DNS response for '{host}': {reason}")]
    MalformedResponse { host: String, reason: String },

    #[error("system resolver failed for '{host}': {source}")]
    SystemLookup {
        host: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// Hostname the failed lookup was attempting to resolve.
    pub fn host(&self) -> &str {
        match self {
            Self::SocketCreate { host, .. }
            | Self::InvalidResolverAddress { host, .. }
            | Self::Connect { host, .. }
            | Self::QueryBuild { host, .. }
            | Self::QueryWrite { host, .. }
            | Self::QueryRead { host, .. }
            | Self::MalformedResponse { host, .. }
            | Self::SystemLookup { host, .. } => host,
        }
    }
}
