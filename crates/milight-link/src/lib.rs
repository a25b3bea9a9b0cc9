//! Transports for the milight bridge: the two UDP endpoints, the serial
//! sink feeding the RF transmitter, and startup resolution of the bridge's
//! own interface identity.

#[cfg(unix)]
pub mod netif;
pub mod serial;
pub mod traits;
pub mod udp;

pub use serial::TtySink;
pub use traits::{LinkError, SerialSink};
pub use udp::UdpEndpoint;
