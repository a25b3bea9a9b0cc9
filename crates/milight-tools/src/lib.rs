/// Parses a command payload written as hex digits.
///
/// Whitespace and `:` separators are ignored, so `"3100000000080400"`,
/// `"31 00 00 00 00 08 04 00"`, and `"31:00:00"` are all accepted.
pub fn parse_hex_payload(s: &str) -> Result<Vec<u8>, String> {
    let digits: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    // from_str_radix tolerates a leading `+`; require plain hex digits.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("payload must be hex digits".into());
    }
    if digits.len() % 2 != 0 {
        return Err("hex payload must have an even number of digits".into());
    }
    let mut out = Vec::with_capacity(digits.len() / 2);
    for i in (0..digits.len()).step_by(2) {
        let byte = u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| format!("invalid hex byte {:?}", &digits[i..i + 2]))?;
        out.push(byte);
    }
    Ok(out)
}
