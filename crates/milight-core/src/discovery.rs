use crate::identity::BridgeIdentity;

/// Marker the vendor app embeds somewhere in its discovery probes. The
/// protocol matches it as a substring anywhere in the datagram, not as an
/// exact token; clients depend on that, so the looser match is kept.
pub const DISCOVERY_MARKER: &[u8] = b"Link_Wi-Fi";

/// Reply sent for any admin datagram that is not a discovery probe.
pub const ACK_REPLY: &[u8] = b"+ok";

/// Largest datagram either endpoint reads in one receive call. Anything
/// longer is truncated by the receive, not rejected.
pub const MAX_DATAGRAM_LEN: usize = 64;

/// Returns true if `payload` contains the discovery marker anywhere.
pub fn is_discovery_probe(payload: &[u8]) -> bool {
    payload
        .windows(DISCOVERY_MARKER.len())
        .any(|w| w == DISCOVERY_MARKER)
}

/// Builds the reply for one admin datagram.
///
/// A probe containing [`DISCOVERY_MARKER`] gets `"<ip>,<mac>,"` with the
/// hardware address as 12 lowercase hex digits; everything else, including
/// an empty payload, gets [`ACK_REPLY`]. Pure: the same payload always
/// produces the same reply.
pub fn admin_reply(payload: &[u8], identity: &BridgeIdentity) -> Vec<u8> {
    if is_discovery_probe(payload) {
        format!("{},{},", identity.ip, identity.mac.plain_hex()).into_bytes()
    } else {
        ACK_REPLY.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::MacAddr;
    use proptest::prelude::*;
    use std::net::Ipv4Addr;

    fn test_identity() -> BridgeIdentity {
        BridgeIdentity {
            ip: Ipv4Addr::new(192, 168, 1, 50),
            mac: MacAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
        }
    }

    #[test]
    fn probe_from_app_gets_identity_reply() {
        let reply = admin_reply(b"HF-A11ASSISTHREAD Link_Wi-Fi", &test_identity());
        assert_eq!(reply, b"192.168.1.50,aabbccddeeff,");
    }

    #[test]
    fn bare_marker_is_enough() {
        let reply = admin_reply(b"Link_Wi-Fi", &test_identity());
        assert_eq!(reply, b"192.168.1.50,aabbccddeeff,");
    }

    #[test]
    fn anything_else_gets_ok() {
        assert_eq!(admin_reply(b"anything", &test_identity()), b"+ok");
        assert_eq!(admin_reply(b"link_wi-fi", &test_identity()), b"+ok");
        assert_eq!(admin_reply(&[0x00, 0xff, 0x31], &test_identity()), b"+ok");
    }

    #[test]
    fn empty_payload_gets_ok() {
        assert_eq!(admin_reply(b"", &test_identity()), b"+ok");
    }

    #[test]
    fn truncated_marker_does_not_match() {
        assert_eq!(admin_reply(b"Link_Wi-F", &test_identity()), b"+ok");
    }

    #[test]
    fn replies_are_stateless() {
        let first = admin_reply(b"Link_Wi-Fi", &test_identity());
        let second = admin_reply(b"Link_Wi-Fi", &test_identity());
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn marker_anywhere_yields_identity_reply(
            prefix in proptest::collection::vec(any::<u8>(), 0..27),
            suffix in proptest::collection::vec(any::<u8>(), 0..27),
        ) {
            let mut payload = prefix;
            payload.extend_from_slice(DISCOVERY_MARKER);
            payload.extend_from_slice(&suffix);
            prop_assert_eq!(
                admin_reply(&payload, &test_identity()),
                b"192.168.1.50,aabbccddeeff,".to_vec()
            );
        }

        #[test]
        fn no_marker_yields_ok(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assume!(!is_discovery_probe(&payload));
            prop_assert_eq!(admin_reply(&payload, &test_identity()), ACK_REPLY.to_vec());
        }
    }
}
