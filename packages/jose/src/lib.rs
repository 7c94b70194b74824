//! Compact JSON Web Tokens (RFC 7515 / RFC 7519 subset)
//!
//! This crate provides:
//! - Unsecured tokens (`alg: none`)
//! - HMAC-signed tokens (HS256, HS384, HS512)
//! - Registered claims with `NumericDate` and string-or-array codecs
//! - Custom claim sets through the [`Claimer`] trait
//!
//! ```
//! use cryypt_jose::{Algorithm, Factory, Key, RegisteredClaims};
//!
//! # fn main() -> cryypt_jose::JwtResult<()> {
//! let factory = Factory::new(Algorithm::HS256, Some(Key::hmac("mysupersecret")))?;
//!
//! let token = factory
//!     .new_token(RegisteredClaims::new().with_issuer("alice"))
//!     .encode()?;
//!
//! let verified = factory.verify(&token)?;
//! assert_eq!(verified.claims().issuer.as_deref(), Some("alice"));
//! # Ok(())
//! # }
//! ```

pub mod algorithm;
pub mod claims;
mod config;
pub(crate) mod crypto;
mod encoding;
mod error;
mod factory;
mod header;
mod key;
mod token;

pub use algorithm::Algorithm;
pub use claims::{Claimer, NumericDate, RegisteredClaims, StringOrSlice, encode_claims};
pub use config::{FactoryConfig, HeaderOptions};
pub use error::*;
pub use factory::Factory;
pub use header::{JOSE_TYPE_JWT, JoseHeader};
pub use key::{Key, KeyType, recommended_len};
pub use token::Token;
