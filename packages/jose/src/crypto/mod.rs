//! Signature primitives behind the token engine.

pub(crate) mod hmac;
