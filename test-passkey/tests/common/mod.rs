//! Common test utilities for test-passkey integration tests
//!
//! Decodes generated artifacts with ciborium and base64 so the assertions do
//! not depend on the encoders under test.

#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ciborium::value::Value;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub const RP_ID: &str = "example.com";

/// Decode a COSE_Key into its (label, value) entries in encoded order
pub fn cose_entries(public_key: &[u8]) -> Vec<(i128, Value)> {
    let value: Value = ciborium::from_reader(public_key).expect("public key is CBOR");

    match value {
        Value::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| match k {
                Value::Integer(i) => (i128::from(i), v),
                other => panic!("expected integer label, got {:?}", other),
            })
            .collect(),
        other => panic!("expected CBOR map, got {:?}", other),
    }
}

/// Look up one COSE label
pub fn cose_get(entries: &[(i128, Value)], label: i128) -> &Value {
    entries
        .iter()
        .find(|(k, _)| *k == label)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("label {} missing", label))
}

/// Integer value of one COSE label
pub fn cose_int(entries: &[(i128, Value)], label: i128) -> i128 {
    match cose_get(entries, label) {
        Value::Integer(i) => i128::from(*i),
        other => panic!("label {} is not an integer: {:?}", label, other),
    }
}

/// Byte string value of one COSE label
pub fn cose_bytes(entries: &[(i128, Value)], label: i128) -> Vec<u8> {
    match cose_get(entries, label) {
        Value::Bytes(b) => b.clone(),
        other => panic!("label {} is not a byte string: {:?}", label, other),
    }
}

pub fn b64_decode(value: &str) -> Vec<u8> {
    STANDARD.decode(value).expect("valid Base64")
}

pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
