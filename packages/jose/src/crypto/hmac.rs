//! HMAC-SHA2 signer for HS256, HS384 and HS512.

use crate::{
    algorithm::Algorithm,
    error::{JwtError, JwtResult, KeyRejection},
    key::Key,
};
use hmac::{Hmac, Mac, digest::KeyInit};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// MAC `signing_input` with the digest selected by `algorithm`.
pub(crate) fn sign(algorithm: Algorithm, key: &Key, signing_input: &[u8]) -> JwtResult<Vec<u8>> {
    match algorithm {
        Algorithm::HS256 => mac::<HmacSha256>(key, signing_input),
        Algorithm::HS384 => mac::<HmacSha384>(key, signing_input),
        Algorithm::HS512 => mac::<HmacSha512>(key, signing_input),
        Algorithm::None | Algorithm::RS256 => Err(JwtError::not_supported(algorithm.as_str())),
    }
}

#[inline]
fn mac<M: Mac + KeyInit>(key: &Key, signing_input: &[u8]) -> JwtResult<Vec<u8>> {
    let mut hasher =
        <M as KeyInit>::new_from_slice(key.as_bytes()).map_err(|_| KeyRejection::KeyUnusable)?;
    hasher.update(signing_input);
    Ok(hasher.finalize().into_bytes().to_vec())
}
