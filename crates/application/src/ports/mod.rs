mod device_binder;
mod host_resolver;

pub use device_binder::DeviceBinder;
pub use host_resolver::HostResolver;
