//! Property tests for the round-trip and tamper-resistance guarantees

mod common;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::DateTime;
use common::{MyClaims, SECRET};
use cryypt_jose::{
    Algorithm, Factory, Key, NumericDate, RegisteredClaims, Segment, StringOrSlice,
};
use proptest::prelude::*;

const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn hmac_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::HMAC.to_vec())
}

fn numeric_date() -> impl Strategy<Value = NumericDate> {
    (0i64..4_102_444_800).prop_map(|secs| NumericDate::from_unix(secs).unwrap())
}

fn claims() -> impl Strategy<Value = MyClaims> {
    (
        proptest::option::of("[a-z]{1,12}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,16}"),
        prop::collection::vec("[a-z:/.]{1,20}", 0..4),
        proptest::option::of(numeric_date()),
        proptest::option::of(numeric_date()),
        proptest::option::of("[A-Za-z0-9_-]{1,24}"),
        any::<bool>(),
        prop::collection::vec("\\PC{0,10}", 0..4),
    )
        .prop_map(
            |(issuer, subject, audience, expires_at, issued_at, jwt_id, ok, labels)| MyClaims {
                registered: RegisteredClaims {
                    issuer,
                    subject,
                    audience: StringOrSlice::from(audience),
                    expires_at,
                    not_before: None,
                    issued_at,
                    jwt_id,
                },
                ok,
                labels,
            },
        )
}

proptest! {
    #[test]
    fn prop_hmac_round_trip(algorithm in hmac_algorithm(), claims in claims()) {
        let factory = Factory::with_claims(algorithm, Some(Key::hmac(SECRET))).unwrap();
        let token = factory.new_token(claims.clone()).encode().unwrap();

        prop_assert_eq!(token.split('.').count(), 3);
        let decoded = factory.decode(&token).unwrap();
        prop_assert_eq!(decoded.claims(), &claims);
    }

    /// A replacement that leaves the payload decodable must yield `VerifyFail`.
    /// One that breaks the base64 or the JSON is rejected earlier as
    /// `Decoding` tagged `claims`, which is equally a refusal to verify.
    #[test]
    fn prop_single_char_tamper_never_verifies(
        algorithm in hmac_algorithm(),
        claims in claims(),
        position in any::<prop::sample::Index>(),
        replacement in prop::sample::select(BASE64URL.to_vec()),
    ) {
        let factory = Factory::with_claims(algorithm, Some(Key::hmac(SECRET))).unwrap();
        let token = factory.new_token(claims).encode().unwrap();

        let payload_start = token.find('.').unwrap() + 1;
        let payload_end = token.rfind('.').unwrap();
        let target = payload_start + position.index(payload_end - payload_start);
        prop_assume!(token.as_bytes()[target] != replacement);

        let mut bytes = token.into_bytes();
        bytes[target] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();

        // Either the segment no longer decodes, or it decodes and fails verification
        let err = factory.decode(&tampered).unwrap_err();
        prop_assert!(
            err.is_verify_fail() || err.segment() == Some(Segment::Claims),
            "{}", err
        );
    }

    #[test]
    fn prop_decodable_tamper_is_verify_fail(
        algorithm in hmac_algorithm(),
        claims in claims(),
        forged_issuer in "[a-z]{1,12}",
    ) {
        prop_assume!(claims.registered.issuer.as_deref() != Some(forged_issuer.as_str()));

        let factory = Factory::with_claims(algorithm, Some(Key::hmac(SECRET))).unwrap();
        let token = factory.new_token(claims.clone()).encode().unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let mut forged = claims;
        forged.registered.issuer = Some(forged_issuer);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());

        let err = factory
            .decode(&format!("{}.{}.{}", parts[0], payload, parts[2]))
            .unwrap_err();
        prop_assert!(err.is_verify_fail());
    }

    #[test]
    fn prop_foreign_algorithm_fails(
        signer in hmac_algorithm(),
        verifier in hmac_algorithm(),
        claims in claims(),
    ) {
        prop_assume!(signer != verifier);

        let minting = Factory::with_claims(signer, Some(Key::hmac(SECRET))).unwrap();
        let verifying = Factory::<MyClaims>::with_claims(verifier, Some(Key::hmac(SECRET))).unwrap();
        let token = minting.new_token(claims).encode().unwrap();

        prop_assert!(verifying.decode(&token).unwrap_err().is_verify_fail());
    }

    #[test]
    fn prop_string_or_slice_wire_form(values in prop::collection::vec("\\PC{0,12}", 0..5)) {
        let original = StringOrSlice::from(values.clone());
        let wire = serde_json::to_value(&original).unwrap();

        if values.len() == 1 {
            prop_assert!(wire.is_string());
        } else {
            prop_assert_eq!(wire.as_array().map(Vec::len), Some(values.len()));
        }

        let decoded: StringOrSlice = serde_json::from_value(wire).unwrap();
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn prop_numeric_date_second_resolution(
        secs in -62_135_596_800i64..253_402_300_799,
        nanos in 0u32..1_000_000_000,
    ) {
        let precise = DateTime::from_timestamp(secs, nanos).unwrap();
        let json = serde_json::to_string(&NumericDate::from(precise)).unwrap();
        prop_assert_eq!(&json, &secs.to_string());

        let decoded: NumericDate = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, NumericDate::from_unix(secs).unwrap());
        prop_assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
    }
}
