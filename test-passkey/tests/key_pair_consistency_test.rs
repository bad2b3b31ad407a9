//! Key pair consistency tests
//!
//! A generated private key must sign data that the COSE public key verifies,
//! both through the crate helpers and through p256 directly.

mod common;

use common::{RP_ID, b64_decode, cose_bytes, cose_entries};
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::DecodePrivateKey;
use p256::{EncodedPoint, FieldBytes};
use test_passkey::{CreateTestPasskeyOptions, Error, create_test_passkey};

const MESSAGE: &[u8] = b"authenticatorData || SHA-256(clientDataJSON)";

fn verifying_key_from_cose(public_key: &[u8]) -> VerifyingKey {
    let entries = cose_entries(public_key);
    let x: [u8; 32] = cose_bytes(&entries, -2).try_into().unwrap();
    let y: [u8; 32] = cose_bytes(&entries, -3).try_into().unwrap();

    let point =
        EncodedPoint::from_affine_coordinates(&FieldBytes::from(x), &FieldBytes::from(y), false);
    VerifyingKey::from_encoded_point(&point).expect("COSE coordinates are on P-256")
}

#[test]
fn test_sign_with_pkcs8_verify_with_cose() {
    let passkey = create_test_passkey(&CreateTestPasskeyOptions::new(RP_ID)).unwrap();

    let signing_key =
        SigningKey::from_pkcs8_der(&b64_decode(&passkey.credential.private_key)).unwrap();
    let signature: Signature = signing_key.sign(MESSAGE);

    let verifying_key = verifying_key_from_cose(&passkey.public_key);
    assert!(verifying_key.verify(MESSAGE, &signature).is_ok());
}

#[test]
fn test_crate_helpers_round_trip() {
    let passkey = create_test_passkey(&CreateTestPasskeyOptions::new(RP_ID)).unwrap();

    let signature = passkey.credential.sign(MESSAGE).unwrap();

    assert!(passkey.verify(MESSAGE, &signature).is_ok());
    assert_eq!(
        passkey.verify(b"tampered", &signature),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn test_helper_signature_verifies_with_p256() {
    let passkey = create_test_passkey(&CreateTestPasskeyOptions::new(RP_ID)).unwrap();

    let der = passkey.credential.sign(MESSAGE).unwrap();
    let signature = Signature::from_der(&der).unwrap();

    let verifying_key = verifying_key_from_cose(&passkey.public_key);
    assert!(verifying_key.verify(MESSAGE, &signature).is_ok());
}

#[test]
fn test_signature_from_other_passkey_is_rejected() {
    let options = CreateTestPasskeyOptions::new(RP_ID);
    let a = create_test_passkey(&options).unwrap();
    let b = create_test_passkey(&options).unwrap();

    let signature = a.credential.sign(MESSAGE).unwrap();

    assert_eq!(b.verify(MESSAGE, &signature), Err(Error::InvalidSignature));
}

#[test]
fn test_cose_key_helper_matches_ciborium() {
    let passkey = create_test_passkey(&CreateTestPasskeyOptions::new(RP_ID)).unwrap();
    let key = passkey.cose_key().unwrap();

    let entries = cose_entries(&passkey.public_key);
    assert_eq!(key.x.to_vec(), cose_bytes(&entries, -2));
    assert_eq!(key.y.to_vec(), cose_bytes(&entries, -3));
}
