//! Validated chain account addresses and the codec that produces them.
//!
//! Forwarding decisions run during ledger-state transitions, so an address
//! that reaches the orchestrator must already be valid. `ChainAddress` can
//! only be built through an [`AddressCodec`], which keeps that invariant
//! structural rather than conventional.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Maximum accepted address payload length in bytes.
pub const MAX_ADDRESS_BYTES: usize = 32;

/// A validated account address on the current chain.
///
/// Holds the canonical (lowercase) bech32 string form. There is no public
/// constructor from a raw string: every `ChainAddress` has passed codec
/// validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChainAddress(String);

impl ChainAddress {
    pub(crate) fn new(canonical: String) -> Self {
        Self(canonical)
    }

    /// Return the canonical address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address validation failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Checksum or character-set failure from the bech32 layer.
    /// The inner text is the bech32 library's own diagnostic.
    #[error("decoding bech32 failed: {0}")]
    Decode(String),

    #[error("invalid address prefix: expected {expected}, got {got}")]
    Prefix { expected: String, got: String },

    #[error("invalid address length: {0} bytes, at most {MAX_ADDRESS_BYTES} allowed")]
    Length(usize),
}

/// Decodes an opaque string into a validated [`ChainAddress`].
pub trait AddressCodec {
    fn decode(&self, raw: &str) -> Result<ChainAddress, AddressError>;
}

/// Bech32 codec bound to one chain's human-readable part.
#[derive(Clone, Debug)]
pub struct Bech32Codec {
    hrp: String,
}

impl Bech32Codec {
    pub fn new(hrp: impl Into<String>) -> Self {
        Self { hrp: hrp.into() }
    }

    /// The human-readable part this codec accepts.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }
}

impl AddressCodec for Bech32Codec {
    fn decode(&self, raw: &str) -> Result<ChainAddress, AddressError> {
        let (hrp, data) = bech32::decode(raw).map_err(|e| AddressError::Decode(e.to_string()))?;
        if hrp.as_str() != self.hrp {
            return Err(AddressError::Prefix {
                expected: self.hrp.clone(),
                got: hrp.as_str().to_owned(),
            });
        }
        if data.is_empty() || data.len() > MAX_ADDRESS_BYTES {
            return Err(AddressError::Length(data.len()));
        }
        Ok(ChainAddress::new(raw.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "cosmos1vzxkv3lxccnttr9rs0002s93sgw72h7ghukuhs";
    const BOB: &str = "cosmos16plylpsgxechajltx9yeseqexzdzut9g8vla4k";

    #[test]
    fn decodes_valid_address() {
        let codec = Bech32Codec::new("cosmos");
        let addr = codec.decode(ALICE).unwrap();
        assert_eq!(addr.as_str(), ALICE);
        assert_eq!(addr.to_string(), ALICE);
    }

    #[test]
    fn canonicalizes_uppercase_input() {
        let codec = Bech32Codec::new("cosmos");
        let addr = codec.decode(&BOB.to_uppercase()).unwrap();
        assert_eq!(addr.as_str(), BOB);
    }

    #[test]
    fn rejects_bad_checksum() {
        // Valid payload, wrong hrp: the checksum covers the hrp, so this
        // fails at the bech32 layer.
        let codec = Bech32Codec::new("cosmos");
        let err = codec
            .decode("somm16plylpsgxechajltx9yeseqexzdzut9g8vla4k")
            .unwrap_err();
        assert!(err.to_string().starts_with("decoding bech32 failed"));
    }

    #[test]
    fn rejects_foreign_prefix() {
        let codec = Bech32Codec::new("waypoint");
        let err = codec.decode(ALICE).unwrap_err();
        assert!(matches!(err, AddressError::Prefix { .. }));
    }

    #[test]
    fn rejects_garbage() {
        let codec = Bech32Codec::new("cosmos");
        assert!(codec.decode("").is_err());
        assert!(codec.decode("not an address").is_err());
        assert!(codec.decode("cosmos1").is_err());
    }
}
