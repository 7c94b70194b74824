//! Factory configuration.

use crate::{
    algorithm::{self, Algorithm},
    claims::Claimer,
    error::JwtResult,
    factory::Factory,
    header::{JOSE_TYPE_JWT, JoseHeader},
    key::Key,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional header fields stamped on every token a factory mints.
///
/// Empty strings count as unset, so they never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderOptions {
    /// `typ`
    pub token_type: Option<String>,
    /// `cty`
    pub content_type: Option<String>,
    /// `kid`
    pub key_id: Option<String>,
}

impl HeaderOptions {
    /// No optional fields; the header carries `alg` alone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `typ` set to `JWT`.
    #[must_use]
    pub fn jwt() -> Self {
        Self::new().with_type(JOSE_TYPE_JWT)
    }

    /// Set `typ`.
    #[must_use]
    pub fn with_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = non_empty(token_type.into());
        self
    }

    /// Set `cty`.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = non_empty(content_type.into());
        self
    }

    /// Set `kid`.
    #[must_use]
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = non_empty(key_id.into());
        self
    }

    pub(crate) fn header(&self, algorithm: Algorithm) -> JoseHeader {
        JoseHeader {
            algorithm,
            token_type: self.token_type.clone().and_then(non_empty),
            content_type: self.content_type.clone().and_then(non_empty),
            key_id: self.key_id.clone().and_then(non_empty),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Serializable description of a [`Factory`], e.g. one section of a config file:
///
/// ```toml
/// algorithm = "HS256"
/// secret = "mysupersecret"
///
/// [header]
/// token_type = "JWT"
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Registry name of the algorithm.
    pub algorithm: String,
    /// HMAC secret; must be absent for `none`.
    pub secret: Option<String>,
    /// Optional header fields.
    pub header: HeaderOptions,
}

impl FactoryConfig {
    /// Validate the configuration and build a factory for claim type `C`.
    ///
    /// # Errors
    /// The same failures as [`Factory::with_claims`], plus
    /// [`JwtError::AlgorithmNotSupported`](crate::JwtError::AlgorithmNotSupported)
    /// for an unknown algorithm name.
    pub fn build<C: Claimer>(&self) -> JwtResult<Factory<C>> {
        let algorithm = algorithm::validate(&self.algorithm)?;
        let key = self.secret.as_deref().map(Key::hmac);
        Ok(Factory::with_claims(algorithm, key)?.with_header(self.header.clone()))
    }
}

impl fmt::Debug for FactoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryConfig")
            .field("algorithm", &self.algorithm)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("header", &self.header)
            .finish()
    }
}
