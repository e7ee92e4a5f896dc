//! Mock transaction identifiers.
//!
//! A display placeholder, not a real ledger reference: 32 bytes from the
//! driver's injected (non-cryptographic) RNG, hex-encoded behind an `0x`
//! prefix.  Uniqueness is not guaranteed and nothing may depend on it;
//! tests assert format only.

use std::fmt;

use fl_core::DemoRng;

/// Number of hex characters after the `0x` prefix.
pub const TX_HEX_LEN: usize = 64;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// An opaque, display-only transaction identifier.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh identifier from `rng`.
    pub fn generate(rng: &mut DemoRng) -> Self {
        let mut bytes = [0u8; TX_HEX_LEN / 2];
        rng.fill_bytes(&mut bytes);

        let mut s = String::with_capacity(2 + TX_HEX_LEN);
        s.push_str("0x");
        for b in bytes {
            s.push(HEX_DIGITS[(b >> 4) as usize] as char);
            s.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
        }
        TransactionId(s)
    }

    /// `true` if `s` has the generated shape: `0x` followed by exactly
    /// [`TX_HEX_LEN`] lowercase hex characters.
    pub fn is_well_formed(s: &str) -> bool {
        let Some(hex) = s.strip_prefix("0x") else {
            return false;
        };
        hex.len() == TX_HEX_LEN
            && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
