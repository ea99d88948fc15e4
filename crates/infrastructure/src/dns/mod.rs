pub mod query;
pub mod resolver;
pub mod transport;

pub use resolver::{lookup_host, Resolver};
