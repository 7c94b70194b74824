//! Algorithm registry
//!
//! The fixed set of `alg` values this crate recognises, and the HMAC subset
//! the signer can actually produce.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// JWS `alg` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Unsecured token, no signature segment.
    #[serde(rename = "none")]
    None,
    /// HMAC using SHA-256.
    HS256,
    /// HMAC using SHA-384.
    HS384,
    /// HMAC using SHA-512.
    HS512,
    /// RSASSA-PKCS1-v1_5 using SHA-256. Recognised, but the signer has no
    /// implementation for it.
    RS256,
}

impl Algorithm {
    /// Every algorithm the registry accepts.
    pub const SUPPORTED: [Algorithm; 5] = [
        Algorithm::None,
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
    ];

    /// The HMAC family.
    pub const HMAC: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Registry name, as it appears in the `alg` header field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::None => "none",
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
        }
    }

    /// Membership test for the HMAC family.
    #[must_use]
    pub const fn is_hmac(self) -> bool {
        matches!(self, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)
    }

    /// Whether tokens minted with this algorithm carry no signature.
    #[must_use]
    pub const fn is_unsecured(self) -> bool {
        matches!(self, Algorithm::None)
    }
}

/// Look up an algorithm by its registry name.
///
/// # Errors
/// Returns [`JwtError::AlgorithmNotSupported`] for any name outside
/// [`Algorithm::SUPPORTED`]. Matching is case-sensitive.
pub fn validate(name: &str) -> JwtResult<Algorithm> {
    Algorithm::SUPPORTED
        .into_iter()
        .find(|alg| alg.as_str() == name)
        .ok_or_else(|| JwtError::not_supported(name))
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
