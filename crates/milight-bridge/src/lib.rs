//! The milight bridge: a dispatch loop that services two UDP endpoints and
//! relays command datagrams onto a serial sink.
//!
//! [`Bridge`] owns both bound sockets, the serial sink, and the identity
//! reported to discovery probes. [`Bridge::run`] multiplexes readiness
//! across the two sockets and routes each datagram to the discovery
//! responder or the serial forwarder; per-datagram failures are logged and
//! never stop the loop.

pub mod bridge;

pub use bridge::Bridge;
