//! Marvel request signing.
//!
//! Every call carries `ts`, `apikey`, and `hash` query parameters, where
//! `hash = md5(ts + private_key + public_key)` in lowercase hex. The hash
//! is time-dependent, so it is recomputed per call from the injected
//! clock.

use md5::{Digest, Md5};

/// Compute the MD5 hex digest Marvel expects for a given timestamp and
/// key pair.
pub fn sign(ts: &str, private_key: &str, public_key: &str) -> String {
    let hash = Md5::digest(format!("{ts}{private_key}{public_key}").as_bytes());
    format!("{hash:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_documented_example() {
        // The example from Marvel's API docs: ts=1, private "abcd",
        // public "1234".
        assert_eq!(
            sign("1", "abcd", "1234"),
            "ffd275c5130566a2916217b101f26150"
        );
    }

    #[test]
    fn changes_with_timestamp() {
        assert_ne!(sign("1", "abcd", "1234"), sign("2", "abcd", "1234"));
    }
}
