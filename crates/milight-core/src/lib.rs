//! Protocol logic for the milight network-to-serial bridge.
//!
//! `milight-core` holds the pure, transport-free pieces of the bridge: the
//! identity types reported to the vendor app and the two-case discovery
//! reply protocol. It has no dependencies and can be exercised entirely with
//! in-memory byte slices, which is how its tests work.

/// The fixed discovery/registration reply protocol.
pub mod discovery;
/// Bridge identity: local IPv4 address and hardware address.
pub mod identity;

pub use discovery::{admin_reply, is_discovery_probe, ACK_REPLY, DISCOVERY_MARKER, MAX_DATAGRAM_LEN};
pub use identity::{BridgeIdentity, MacAddr, MacParseError};
