//! Startup lookup of the bridge's own interface addresses.
//!
//! The discovery reply carries the bridge's IPv4 and hardware address, both
//! resolved once from a configured interface name. The IPv4 address comes
//! from a getifaddrs walk; the hardware address is read from
//! `/sys/class/net/<interface>/address` on Linux.

use crate::LinkError;
use milight_core::{BridgeIdentity, MacAddr};
use std::ffi::CStr;
use std::net::Ipv4Addr;

/// Resolves the IPv4 and hardware address of `interface`.
pub fn resolve_identity(interface: &str) -> Result<BridgeIdentity, LinkError> {
    let ip = interface_ipv4(interface)?;
    let mac = interface_mac(interface)?;
    Ok(BridgeIdentity { ip, mac })
}

fn interface_ipv4(interface: &str) -> Result<Ipv4Addr, LinkError> {
    let mut ifaddrs: *mut libc::ifaddrs = std::ptr::null_mut();
    // SAFETY: getifaddrs populates the pointer on success; the list is
    // released with freeifaddrs below.
    if unsafe { libc::getifaddrs(&mut ifaddrs) } != 0 {
        return Err(LinkError::Io(std::io::Error::last_os_error()));
    }

    let mut interface_seen = false;
    let mut found = None;
    let mut cursor = ifaddrs;
    while !cursor.is_null() {
        // SAFETY: cursor walks the linked list returned by getifaddrs;
        // every entry carries a NUL-terminated ifa_name.
        let entry = unsafe { &*cursor };
        let name = unsafe { CStr::from_ptr(entry.ifa_name) }.to_string_lossy();
        if name == interface {
            interface_seen = true;
            if !entry.ifa_addr.is_null() {
                // SAFETY: ifa_addr stays valid until freeifaddrs; AF_INET
                // entries are sockaddr_in.
                let family = unsafe { (*entry.ifa_addr).sa_family };
                if i32::from(family) == libc::AF_INET {
                    let sin = unsafe { &*(entry.ifa_addr as *const libc::sockaddr_in) };
                    found = Some(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr)));
                    break;
                }
            }
        }
        cursor = entry.ifa_next;
    }
    // SAFETY: ifaddrs came from a successful getifaddrs call above.
    unsafe { libc::freeifaddrs(ifaddrs) };

    match found {
        Some(ip) => Ok(ip),
        None if interface_seen => Err(LinkError::NoIpv4Address(interface.to_string())),
        None => Err(LinkError::InterfaceNotFound(interface.to_string())),
    }
}

#[cfg(target_os = "linux")]
fn interface_mac(interface: &str) -> Result<MacAddr, LinkError> {
    let path = format!("/sys/class/net/{interface}/address");
    let text = std::fs::read_to_string(path)
        .map_err(|_| LinkError::InterfaceNotFound(interface.to_string()))?;
    text.trim()
        .parse()
        .map_err(|_| LinkError::NoHardwareAddress(interface.to_string()))
}

/// Sysfs is Linux-only; elsewhere the identity must be supplied explicitly.
#[cfg(not(target_os = "linux"))]
fn interface_mac(interface: &str) -> Result<MacAddr, LinkError> {
    Err(LinkError::NoHardwareAddress(interface.to_string()))
}
