//! Bound DNS Application Layer
pub mod dial;
pub mod ports;

pub use dial::DialConfig;
pub use ports::{DeviceBinder, HostResolver};
