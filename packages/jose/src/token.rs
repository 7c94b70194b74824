//! Token engine: compact serialization and its inverse.

use crate::{
    algorithm::Algorithm,
    claims::Claimer,
    crypto::hmac,
    encoding::{decode_part, encode_part},
    error::{JwtError, JwtResult, KeyRejection, PartsError, Segment},
    factory::Factory,
    header::{JoseHeader, ReceivedHeader},
    key::Key,
};

/// A token bound to the factory that minted or verified it.
///
/// Tokens are produced fresh by [`Factory::new_token`] and
/// [`Factory::decode`] and never change afterwards.
#[derive(Debug)]
pub struct Token<'f, C> {
    factory: &'f Factory<C>,
    header: JoseHeader,
    claims: C,
    signature: Option<Vec<u8>>,
}

impl<'f, C: Claimer> Token<'f, C> {
    pub(crate) fn new(factory: &'f Factory<C>, claims: C) -> Self {
        Self {
            header: factory.header(),
            factory,
            claims,
            signature: None,
        }
    }

    pub(crate) fn decoded(
        factory: &'f Factory<C>,
        header: JoseHeader,
        claims: C,
        signature: Option<Vec<u8>>,
    ) -> Self {
        Self {
            factory,
            header,
            claims,
            signature,
        }
    }

    /// Compact serialization using the factory's algorithm and key.
    ///
    /// # Errors
    /// - [`JwtError::Encoding`] if the header or claims fail to serialize.
    /// - [`JwtError::ConstructionRejected`] for an HMAC algorithm without a key.
    /// - [`JwtError::AlgorithmNotSupported`] for an algorithm the signer lacks.
    pub fn encode(&self) -> JwtResult<String> {
        let compact = self.factory.encode_claims(&self.claims)?;
        tracing::debug!(algorithm = %self.factory.algorithm(), "token encoded");
        Ok(compact.text)
    }

    /// Header as minted, or as received when decoded.
    #[must_use]
    pub fn header(&self) -> &JoseHeader {
        &self.header
    }

    /// `alg` from the header.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.header.algorithm
    }

    /// The claim set.
    #[must_use]
    pub fn claims(&self) -> &C {
        &self.claims
    }

    /// Take ownership of the claim set.
    #[must_use]
    pub fn into_claims(self) -> C {
        self.claims
    }

    /// Raw MAC bytes of a decoded signed token. `None` for unsecured tokens
    /// and for tokens that have not been through [`Factory::decode`].
    #[must_use]
    pub fn signature(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }
}

/// A compact serialization together with the MAC it carries.
#[derive(Debug)]
pub(crate) struct Compact {
    pub text: String,
    pub mac: Option<Vec<u8>>,
}

/// Assemble `header.payload[.signature]`.
pub(crate) fn encode_compact<C: Claimer>(
    header: &JoseHeader,
    claims: &C,
    key: Option<&Key>,
) -> JwtResult<Compact> {
    let mut text = header.encode()?;
    text.push('.');
    text.push_str(&claims.encode()?);

    match header.algorithm {
        Algorithm::None => Ok(Compact { text, mac: None }),
        algorithm if algorithm.is_hmac() => {
            let key = key.ok_or(KeyRejection::KeyRequired)?;
            let mac = hmac::sign(algorithm, key, text.as_bytes())?;
            text.push('.');
            text.push_str(&encode_part(&mac));
            Ok(Compact {
                text,
                mac: Some(mac),
            })
        }
        algorithm => Err(JwtError::not_supported(algorithm.as_str())),
    }
}

/// The dot-separated segments of a compact token. The signature segment is
/// never decoded; verification compares it as text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Parts<'t> {
    pub header: &'t str,
    pub claims: &'t str,
}

impl<'t> Parts<'t> {
    pub(crate) fn split(token: &'t str) -> JwtResult<Self> {
        let mut segments = token.split('.');
        let header = segments.next().unwrap_or_default();
        let claims = segments.next().ok_or(PartsError::NotEnoughParts)?;
        // skip the signature, if any
        if segments.nth(1).is_some() {
            return Err(PartsError::TooManyParts.into());
        }
        Ok(Self { header, claims })
    }

    pub(crate) fn decode_header(&self) -> JwtResult<ReceivedHeader> {
        ReceivedHeader::decode(self.header)
    }

    /// Deserializes into a new `C`; nothing is shared with earlier decodes.
    pub(crate) fn decode_claims<C: Claimer>(&self) -> JwtResult<C> {
        let json = decode_part(self.claims).map_err(|e| JwtError::decoding(Segment::Claims, e))?;
        serde_json::from_slice(&json).map_err(|e| JwtError::decoding(Segment::Claims, e))
    }
}
