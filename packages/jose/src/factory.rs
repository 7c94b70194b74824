//! Token factory
//!
//! A [`Factory`] binds an algorithm, an optional key and a claim type, and is
//! the only way to mint or verify tokens. It is immutable once built and can
//! be shared between threads freely.
//!
//! Verification decodes the token, re-encodes the decoded claims with the
//! factory's own algorithm and key, and compares the result with the input
//! byte for byte. The `alg` named in the incoming header never selects the
//! verification algorithm.

use crate::{
    algorithm::Algorithm,
    claims::{Claimer, RegisteredClaims},
    config::HeaderOptions,
    error::{JwtError, JwtResult, KeyRejection},
    header::JoseHeader,
    key::{self, Key},
    token::{Compact, Parts, Token, encode_compact},
};
use std::{fmt, marker::PhantomData, sync::Arc};
use subtle::ConstantTimeEq;

/// Mints and verifies tokens for claim type `C`.
pub struct Factory<C = RegisteredClaims> {
    algorithm: Algorithm,
    key: Option<Arc<Key>>,
    header: HeaderOptions,
    claims: PhantomData<fn() -> C>,
}

impl Factory<RegisteredClaims> {
    /// Factory for plain [`RegisteredClaims`].
    ///
    /// # Errors
    /// [`JwtError::ConstructionRejected`] when `algorithm` is `none` and a key
    /// is supplied.
    pub fn new(algorithm: Algorithm, key: Option<Key>) -> JwtResult<Self> {
        Self::with_claims(algorithm, key)
    }
}

impl<C: Claimer> Factory<C> {
    /// Factory whose decoded tokens carry claims of type `C`.
    ///
    /// An HMAC algorithm without a key is accepted here; minting or verifying
    /// with it fails later with [`KeyRejection::KeyRequired`].
    ///
    /// # Errors
    /// [`JwtError::ConstructionRejected`] when `algorithm` is `none` and a key
    /// is supplied.
    pub fn with_claims(algorithm: Algorithm, key: Option<Key>) -> JwtResult<Self> {
        if algorithm.is_unsecured() && key.is_some() {
            return Err(KeyRejection::KeyForbidden.into());
        }

        if let (Some(key), Some(min)) = (key.as_ref(), key::recommended_len(algorithm)) {
            if key.len() < min {
                tracing::warn!(
                    %algorithm,
                    key_len = key.len(),
                    recommended = min,
                    "HMAC key is shorter than the digest output"
                );
            }
        }

        Ok(Self {
            algorithm,
            key: key.map(Arc::new),
            header: HeaderOptions::default(),
            claims: PhantomData,
        })
    }

    /// Replace the optional header fields stamped on minted tokens.
    #[must_use]
    pub fn with_header(mut self, header: HeaderOptions) -> Self {
        self.header = header;
        self
    }

    /// Bound algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Optional header fields.
    #[must_use]
    pub fn header_options(&self) -> &HeaderOptions {
        &self.header
    }

    /// Bind `claims` to this factory. Nothing is serialized until
    /// [`Token::encode`].
    #[must_use]
    pub fn new_token(&self, claims: C) -> Token<'_, C> {
        Token::new(self, claims)
    }

    /// Decode and verify a compact token.
    ///
    /// Succeeds only if re-encoding the decoded claims with this factory
    /// reproduces `token` exactly.
    ///
    /// # Errors
    /// - [`JwtError::MalformedToken`] for fewer than two or more than three segments.
    /// - [`JwtError::Decoding`] when the header or claims segment is not a
    ///   base64url JSON object.
    /// - [`JwtError::ConstructionRejected`] for an HMAC factory without a key.
    /// - [`JwtError::VerifyFail`] for any mismatch with the re-encoded token,
    ///   including an absent, unregistered or foreign `alg`.
    pub fn decode<'f>(&'f self, token: &str) -> JwtResult<Token<'f, C>> {
        let parts = Parts::split(token)?;
        let received = parts.decode_header()?;
        let claims: C = parts.decode_claims()?;

        let expected = self.encode_claims(&claims)?;
        if !bool::from(expected.text.as_bytes().ct_eq(token.as_bytes())) {
            tracing::debug!(algorithm = %self.algorithm, "token verification failed");
            return Err(JwtError::VerifyFail);
        }

        let header = received.into_header().ok_or(JwtError::VerifyFail)?;
        tracing::debug!(algorithm = %self.algorithm, "token verified");
        Ok(Token::decoded(self, header, claims, expected.mac))
    }

    /// Same as [`Factory::decode`]; decoding always verifies.
    ///
    /// # Errors
    /// See [`Factory::decode`].
    pub fn verify<'f>(&'f self, token: &str) -> JwtResult<Token<'f, C>> {
        self.decode(token)
    }

    pub(crate) fn header(&self) -> JoseHeader {
        self.header.header(self.algorithm)
    }

    pub(crate) fn encode_claims(&self, claims: &C) -> JwtResult<Compact> {
        encode_compact(&self.header(), claims, self.key.as_deref())
    }
}

impl<C> Clone for Factory<C> {
    fn clone(&self) -> Self {
        Self {
            algorithm: self.algorithm,
            key: self.key.clone(),
            header: self.header.clone(),
            claims: PhantomData,
        }
    }
}

impl<C> fmt::Debug for Factory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("algorithm", &self.algorithm)
            .field("key", &self.key)
            .field("header", &self.header)
            .field("claims", &std::any::type_name::<C>())
            .finish()
    }
}
