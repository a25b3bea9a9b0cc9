use core::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A 6-byte IEEE 802 hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    pub const fn octets(self) -> [u8; 6] {
        self.0
    }

    /// Formats the address as 12 lowercase hex digits with no separators,
    /// the form the discovery reply carries on the wire.
    pub fn plain_hex(self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Error returned when a string is not a parseable hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacParseError;

impl fmt::Display for MacParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid hardware address")
    }
}

impl std::error::Error for MacParseError {}

impl FromStr for MacAddr {
    type Err = MacParseError;

    /// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff`, or 12 bare hex
    /// digits; case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| *c != ':' && *c != '-').collect();
        // from_str_radix tolerates a leading `+`, so every character must be
        // checked as a hex digit, not just parsed in pairs.
        if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MacParseError);
        }
        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet =
                u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|_| MacParseError)?;
        }
        Ok(MacAddr(octets))
    }
}

/// The bridge's own addresses, resolved once at startup and immutable for
/// the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeIdentity {
    pub ip: Ipv4Addr,
    pub mac: MacAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colon_separated() {
        let mac: MacAddr = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert_eq!(mac.octets(), [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn parses_bare_and_uppercase() {
        let mac: MacAddr = "AABBCCDDEEFF".parse().unwrap();
        assert_eq!(mac.octets(), [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn parses_dash_separated() {
        let mac: MacAddr = "00-11-22-33-44-55".parse().unwrap();
        assert_eq!(mac.octets(), [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        assert!("aa:bb:cc:dd:ee".parse::<MacAddr>().is_err());
        assert!("aa:bb:cc:dd:ee:ff:00".parse::<MacAddr>().is_err());
        assert!("gg:bb:cc:dd:ee:ff".parse::<MacAddr>().is_err());
        assert!("".parse::<MacAddr>().is_err());
        // Signs are not hex digits even though from_str_radix takes them.
        assert!("+a+b+c+d+e+f".parse::<MacAddr>().is_err());
    }

    #[test]
    fn plain_hex_is_lowercase_without_separators() {
        let mac = MacAddr([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(mac.plain_hex(), "aabbccddeeff");
    }

    #[test]
    fn display_is_colon_separated() {
        let mac = MacAddr([0x00, 0x1f, 0x02, 0xab, 0xcd, 0xef]);
        assert_eq!(mac.to_string(), "00:1f:02:ab:cd:ef");
    }
}
