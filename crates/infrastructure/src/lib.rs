//! Bound DNS Infrastructure Layer
//!
//! Device-bound UDP transport, DNS wire handling, and the resolver entry
//! point.
pub mod dns;

pub use dns::{lookup_host, Resolver};
