//! Claim model
//!
//! A claim set is any serde type implementing [`Claimer`]. The trait's only
//! job is producing the canonical payload segment; the default method does
//! that with [`encode_claims`], so most implementations are empty.

mod numeric_date;
mod registered;
mod string_or_slice;

pub use numeric_date::NumericDate;
pub use registered::RegisteredClaims;
pub use string_or_slice::StringOrSlice;

use crate::{
    encoding::encode_part,
    error::{JwtError, JwtResult, Segment},
};
use serde::{Serialize, de::DeserializeOwned};

/// A claim set that can produce its own encoded payload segment.
///
/// Verification re-encodes the decoded claims and compares the result with
/// the received token, so the serialized form must be stable: fields in a
/// fixed order and no hash-ordered maps.
pub trait Claimer: Serialize + DeserializeOwned {
    /// JSON-serialize and base64url-encode (unpadded) this claim set.
    ///
    /// # Errors
    /// [`JwtError::Encoding`] tagged `claims` if serialization fails.
    fn encode(&self) -> JwtResult<String> {
        encode_claims(self)
    }
}

/// Shared encode routine for [`Claimer`] implementations.
///
/// # Errors
/// [`JwtError::Encoding`] tagged `claims` if serialization fails.
pub fn encode_claims<T: Serialize + ?Sized>(claims: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(claims).map_err(|e| JwtError::encoding(Segment::Claims, e))?;
    Ok(encode_part(&json))
}
