//! Claim types and fixtures shared by the integration tests.

#![allow(dead_code)]

use cryypt_jose::{Claimer, NumericDate, RegisteredClaims};
use serde::{Deserialize, Serialize};

pub const SECRET: &str = "mysupersecret";

/// Registered claims plus two application fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyClaims {
    #[serde(flatten)]
    pub registered: RegisteredClaims,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl Claimer for MyClaims {}

/// `iss: alice` with two labels, the payload behind the fixed vectors.
pub fn alice_with_labels() -> MyClaims {
    MyClaims {
        registered: RegisteredClaims::new().with_issuer("alice"),
        ok: false,
        labels: vec!["label1".to_string(), "label2".to_string()],
    }
}

pub fn issued_at() -> NumericDate {
    NumericDate::new(2022, 1, 9, 13, 44, 27).unwrap()
}

pub fn not_before() -> NumericDate {
    NumericDate::new(2022, 1, 9, 14, 44, 27).unwrap()
}

pub fn expiration_time() -> NumericDate {
    NumericDate::new(2022, 1, 9, 16, 44, 27).unwrap()
}
