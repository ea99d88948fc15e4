use std::io;
use std::os::unix::io::RawFd;

/// Capability that forces a socket's traffic through a specific network
/// interface (e.g. `SO_BINDTODEVICE` or a VPN protect callback), bypassing
/// normal routing. Supplied by the embedding application; implementations
/// are outside this crate.
pub trait DeviceBinder: Send + Sync {
    /// Bind the raw socket handle to the device. The handle stays owned by
    /// the caller; implementations must not close it.
    fn bind_to_device(&self, fd: RawFd) -> io::Result<()>;
}
