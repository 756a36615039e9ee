//! Printable stand-ins for secret values.

use sha2::{Digest, Sha256};

const FINGERPRINT_HEX_LEN: usize = 12;

/// `sha256:` followed by the first 12 hex chars of the value's SHA-256.
pub fn fingerprint(value: &str) -> String {
    let digest = {
        let mut h = Sha256::new();
        h.update(value.as_bytes());
        hex::encode(h.finalize())
    };
    format!("sha256:{}", &digest[..FINGERPRINT_HEX_LEN])
}
