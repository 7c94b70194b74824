//! JOSE header codec (RFC 7515 §4).

use crate::{
    algorithm::Algorithm,
    encoding::{decode_part, encode_part},
    error::{JwtError, JwtResult, Segment},
};
use serde::{Deserialize, Serialize};

/// `typ` value for JSON Web Tokens.
pub const JOSE_TYPE_JWT: &str = "JWT";

/// JOSE header. Only `alg` is mandatory; the optional fields are omitted
/// from the encoded form when unset rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoseHeader {
    /// `alg`
    #[serde(rename = "alg")]
    pub algorithm: Algorithm,
    /// `typ`
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// `cty`
    #[serde(rename = "cty", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// `kid`
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl JoseHeader {
    /// Minimal header carrying only `alg`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            token_type: None,
            content_type: None,
            key_id: None,
        }
    }

    /// Encode to the first compact-serialization segment.
    ///
    /// # Errors
    /// [`JwtError::Encoding`] tagged `header`.
    pub fn encode(&self) -> JwtResult<String> {
        let json = serde_json::to_vec(self).map_err(|e| JwtError::encoding(Segment::Header, e))?;
        Ok(encode_part(&json))
    }

    /// Decode a header segment.
    ///
    /// # Errors
    /// [`JwtError::Decoding`] tagged `header` when the segment is not
    /// unpadded base64url or not a header object with a registered `alg`.
    pub fn decode(segment: &str) -> JwtResult<Self> {
        let json = decode_part(segment).map_err(|e| JwtError::decoding(Segment::Header, e))?;
        serde_json::from_slice(&json).map_err(|e| JwtError::decoding(Segment::Header, e))
    }
}

/// Header of an incoming token before verification.
///
/// `alg` is kept as received, so an absent or unregistered name reaches the
/// re-encode comparison and fails there like any other mismatch.
#[derive(Debug, Deserialize)]
pub(crate) struct ReceivedHeader {
    #[serde(default)]
    alg: Option<String>,
    #[serde(default)]
    typ: Option<String>,
    #[serde(default)]
    cty: Option<String>,
    #[serde(default)]
    kid: Option<String>,
}

impl ReceivedHeader {
    pub(crate) fn decode(segment: &str) -> JwtResult<Self> {
        let json = decode_part(segment).map_err(|e| JwtError::decoding(Segment::Header, e))?;
        serde_json::from_slice(&json).map_err(|e| JwtError::decoding(Segment::Header, e))
    }

    /// `None` unless `alg` names a registered algorithm.
    pub(crate) fn into_header(self) -> Option<JoseHeader> {
        let algorithm = self.alg?.parse::<Algorithm>().ok()?;
        Some(JoseHeader {
            algorithm,
            token_type: self.typ,
            content_type: self.cty,
            key_id: self.kid,
        })
    }
}
