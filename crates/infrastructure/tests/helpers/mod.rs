#![allow(dead_code)]
pub mod dns_server_mock;

pub use binders::{FailingBinder, NoopBinder, RecordingBinder};
pub use dns_server_mock::{MockBehavior, MockDnsServer};

use bound_dns_application::{DeviceBinder, DialConfig};
use std::sync::Arc;
use std::time::Duration;

pub fn dial_config(dns_server: &str, binder: Option<Arc<dyn DeviceBinder>>) -> DialConfig {
    DialConfig {
        device_binder: binder,
        dns_server: dns_server.to_string(),
        query_timeout: Duration::from_millis(500),
    }
}
