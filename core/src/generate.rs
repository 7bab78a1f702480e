//! Random IPv4 address synthesis.
//!
//! Both generators take the random source as an explicit value so tests can
//! seed them deterministically; the binary seeds from the OS once at startup.

use rand::Rng;

use crate::classify;

/// Addresses generated per classification on every run.
pub const ADDRESSES_PER_CLASS: usize = 5;

/// Returns a random RFC1918 private address as a dotted quad.
///
/// Picks one of the three private blocks uniformly, then fills the free
/// octets uniformly. Always succeeds.
pub fn random_private<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.random_range(0..3u8) {
        // 10.0.0.0/8
        0 => format!(
            "10.{}.{}.{}",
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8)
        ),
        // 172.16.0.0/12
        1 => format!(
            "172.{}.{}.{}",
            rng.random_range(16..=31u8),
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8)
        ),
        // 192.168.0.0/16
        _ => format!(
            "192.168.{}.{}",
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8)
        ),
    }
}

/// Returns a random public address as a dotted quad.
///
/// Samples the full IPv4 space and rejects private candidates. The retry is
/// unbounded on purpose: the private blocks cover a small fraction of the
/// space, so the loop terminates with probability 1.
pub fn random_public<R: Rng + ?Sized>(rng: &mut R) -> String {
    loop {
        let candidate = format!(
            "{}.{}.{}.{}",
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8)
        );

        if !classify::is_private(&candidate) {
            return candidate;
        }
    }
}
