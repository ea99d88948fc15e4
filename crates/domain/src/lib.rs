//! Bound DNS Domain Layer
pub mod config;
pub mod errors;

pub use config::{ConfigError, ResolverConfig, DNS_PORT};
pub use errors::ResolveError;
