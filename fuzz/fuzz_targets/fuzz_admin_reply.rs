#![no_main]

use libfuzzer_sys::fuzz_target;
use milight_core::{admin_reply, BridgeIdentity, MacAddr};
use std::net::Ipv4Addr;

fuzz_target!(|data: &[u8]| {
    let identity = BridgeIdentity {
        ip: Ipv4Addr::new(192, 168, 1, 50),
        mac: MacAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
    };
    let reply = admin_reply(data, &identity);
    // Any input maps to exactly one of the two legal reply shapes.
    assert!(reply == b"+ok" || reply == b"192.168.1.50,aabbccddeeff,");
});
