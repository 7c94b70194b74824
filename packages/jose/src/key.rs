//! Symmetric key material
//!
//! Keys are opaque byte buffers owned by a [`Factory`](crate::Factory). The
//! bytes are wiped when the last owner drops them.

use crate::algorithm::Algorithm;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// JWK `kty` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// Octet sequence, used for HMAC secrets.
    #[serde(rename = "oct")]
    Oct,
}

/// Raw key bytes plus their type tag.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    #[zeroize(skip)]
    key_type: KeyType,
    bytes: Vec<u8>,
}

impl Key {
    /// Octet key for the HMAC family.
    #[must_use]
    pub fn hmac(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key_type: KeyType::Oct,
            bytes: secret.as_ref().to_vec(),
        }
    }

    /// Key type tag.
    #[must_use]
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Length of the secret in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-length secret.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("key_type", &self.key_type)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

/// Digest size of an HMAC algorithm, the minimum key length RFC 7518 §3.2 asks for.
#[must_use]
pub fn recommended_len(algorithm: Algorithm) -> Option<usize> {
    match algorithm {
        Algorithm::HS256 => Some(32),
        Algorithm::HS384 => Some(48),
        Algorithm::HS512 => Some(64),
        Algorithm::None | Algorithm::RS256 => None,
    }
}
