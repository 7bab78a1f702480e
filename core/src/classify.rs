//! RFC1918 membership for generator-produced dotted quads.

/// Returns true when `addr` falls in one of the three private IPv4 blocks.
///
/// Checks run in order: `10.0.0.0/8`, `192.168.0.0/16`, then
/// `172.16.0.0/12` by parsing the second octet. Inputs are produced by the
/// generator, so malformed strings are out of contract and classify public.
pub fn is_private(addr: &str) -> bool {
    if addr.starts_with("10.") || addr.starts_with("192.168.") {
        return true;
    }

    // 172.16.0.0 - 172.31.255.255
    let mut octets = addr.split('.');
    if octets.next() == Some("172") {
        if let Some(second) = octets.next().and_then(|o| o.parse::<u8>().ok()) {
            return (16..=31).contains(&second);
        }
    }

    false
}
