//! Error taxonomy for token minting and verification.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type JwtResult<T> = Result<T, JwtError>;

/// Compact-serialization segment an encoding or decoding failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// JOSE header (first segment).
    Header,
    /// Claim set (second segment).
    Claims,
}

impl Segment {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Segment::Header => "header",
            Segment::Claims => "claims",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a key was refused for the bound algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyRejection {
    /// A key was supplied together with algorithm `none`.
    #[error("providing key with algorithm 'none' is not possible")]
    KeyForbidden,
    /// An HMAC algorithm was asked to sign without a key.
    #[error("algorithm requires secret or key")]
    KeyRequired,
    /// The MAC implementation refused the key bytes.
    #[error("key cannot be used with this algorithm")]
    KeyUnusable,
}

/// Malformed compact serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartsError {
    /// Fewer than two dot-separated segments.
    #[error("not enough encoded parts")]
    NotEnoughParts,
    /// More than three dot-separated segments.
    #[error("too many encoded parts")]
    TooManyParts,
}

/// Underlying cause of a [`JwtError::Decoding`] failure.
#[derive(Debug, Error)]
pub enum DecodeCause {
    /// Segment is not unpadded base64url.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    /// Segment bytes are not the expected JSON document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Every failure the token engine can report.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Algorithm is unknown to the registry, or known but not wired into the signer.
    #[error("algorithm '{algorithm}' is not supported")]
    AlgorithmNotSupported {
        /// Offending algorithm name.
        algorithm: String,
    },

    /// Key presence does not fit the algorithm.
    #[error(transparent)]
    ConstructionRejected(#[from] KeyRejection),

    /// JSON serialization of a segment failed.
    #[error("failed encoding {segment} ({source})")]
    Encoding {
        /// Segment being encoded.
        segment: Segment,
        /// Serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Base64 or JSON decoding of a segment failed.
    #[error("failed decoding {segment} ({source})")]
    Decoding {
        /// Segment being decoded.
        segment: Segment,
        /// Decoder error.
        #[source]
        source: DecodeCause,
    },

    /// Segment count outside `[2, 3]`.
    #[error("failed decoding encoded token ({0})")]
    MalformedToken(#[from] PartsError),

    /// Re-encoded token does not match the input.
    #[error("token verification failed")]
    VerifyFail,
}

impl JwtError {
    #[inline]
    pub(crate) fn not_supported(algorithm: impl Into<String>) -> Self {
        JwtError::AlgorithmNotSupported {
            algorithm: algorithm.into(),
        }
    }

    #[inline]
    pub(crate) fn encoding(segment: Segment, source: serde_json::Error) -> Self {
        JwtError::Encoding { segment, source }
    }

    #[inline]
    pub(crate) fn decoding(segment: Segment, source: impl Into<DecodeCause>) -> Self {
        JwtError::Decoding {
            segment,
            source: source.into(),
        }
    }

    /// True for the undifferentiated verification failure.
    #[must_use]
    pub fn is_verify_fail(&self) -> bool {
        matches!(self, JwtError::VerifyFail)
    }

    /// Segment involved in an encoding or decoding failure.
    #[must_use]
    pub fn segment(&self) -> Option<Segment> {
        match self {
            JwtError::Encoding { segment, .. } | JwtError::Decoding { segment, .. } => {
                Some(*segment)
            }
            _ => None,
        }
    }
}
