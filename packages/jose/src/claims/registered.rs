use super::{Claimer, NumericDate, StringOrSlice};
use serde::{Deserialize, Serialize};

/// Registered claim names from RFC 7519 §4.1.
///
/// Every field is optional and left out of the payload when unset. Custom
/// claim sets embed this struct with `#[serde(flatten)]` and add their own
/// fields after it:
///
/// ```
/// use cryypt_jose::{Claimer, RegisteredClaims};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct SessionClaims {
///     #[serde(flatten)]
///     registered: RegisteredClaims,
///     #[serde(default, skip_serializing_if = "Vec::is_empty")]
///     roles: Vec<String>,
/// }
///
/// impl Claimer for SessionClaims {}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredClaims {
    /// `iss`
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// `sub`
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// `aud`
    #[serde(rename = "aud", default, skip_serializing_if = "StringOrSlice::is_empty")]
    pub audience: StringOrSlice,
    /// `exp`
    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NumericDate>,
    /// `nbf`
    #[serde(rename = "nbf", default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<NumericDate>,
    /// `iat`
    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<NumericDate>,
    /// `jti`
    #[serde(rename = "jti", default, skip_serializing_if = "Option::is_none")]
    pub jwt_id: Option<String>,
}

impl RegisteredClaims {
    /// Claim set with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `iss`.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set `sub`.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set `aud`.
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<StringOrSlice>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Set `exp`.
    #[must_use]
    pub fn with_expires_at(mut self, at: NumericDate) -> Self {
        self.expires_at = Some(at);
        self
    }

    /// Set `nbf`.
    #[must_use]
    pub fn with_not_before(mut self, at: NumericDate) -> Self {
        self.not_before = Some(at);
        self
    }

    /// Set `iat`.
    #[must_use]
    pub fn with_issued_at(mut self, at: NumericDate) -> Self {
        self.issued_at = Some(at);
        self
    }

    /// Set `jti`.
    #[must_use]
    pub fn with_jwt_id(mut self, id: impl Into<String>) -> Self {
        self.jwt_id = Some(id.into());
        self
    }
}

impl Claimer for RegisteredClaims {}
