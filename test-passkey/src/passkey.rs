//! Passkey assembly
//!
//! Generates a P-256 key pair, encodes the public half as a COSE_Key and
//! fills in the credential metadata from the options or fresh defaults.

use crate::error::Result;
use crate::options::{AaguidPolicy, CreateTestPasskeyOptions};
use crate::types::{TestPasskey, TestPasskeyCredential};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use test_passkey_crypto::{CoseKey, ecdsa};
use uuid::Uuid;

/// AAGUID length in bytes
pub const AAGUID_LEN: usize = 16;

/// Create a synthetic passkey using the operating system RNG
///
/// # Examples
///
/// ```
/// use test_passkey::{CreateTestPasskeyOptions, create_test_passkey};
///
/// let passkey = create_test_passkey(&CreateTestPasskeyOptions::new("example.com")).unwrap();
/// assert_eq!(passkey.credential.rp_id, "example.com");
/// assert_eq!(passkey.credential.sign_count, 0);
/// assert_eq!(passkey.public_key.len(), 77);
/// ```
pub fn create_test_passkey(options: &CreateTestPasskeyOptions) -> Result<TestPasskey> {
    create_test_passkey_with_rng(options, &mut OsRng)
}

/// Create a synthetic passkey drawing all randomness from `rng`
///
/// The key pair, the default credential ID and a random AAGUID all come from
/// `rng`, so a seeded RNG yields the same passkey every time.
pub fn create_test_passkey_with_rng<R>(
    options: &CreateTestPasskeyOptions,
    rng: &mut R,
) -> Result<TestPasskey>
where
    R: RngCore + CryptoRng,
{
    let keypair = ecdsa::generate_keypair(rng)?;
    let public_key = CoseKey::from_spki(keypair.spki_der())?.to_cbor()?;

    let credential_id = match options.credential_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => random_credential_id(rng),
    };

    let aaguid = match (&options.aaguid, options.aaguid_policy) {
        (Some(aaguid), _) => Some(aaguid.clone()),
        (None, AaguidPolicy::Random) => Some(random_aaguid(rng)),
        (None, AaguidPolicy::Omit) => None,
    };

    let credential = TestPasskeyCredential {
        credential_id,
        rp_id: options.rp_id.clone(),
        sign_count: options.sign_count.unwrap_or(0),
        private_key: STANDARD.encode(keypair.pkcs8_der()),
        aaguid,
    };

    tracing::debug!(
        rp_id = %credential.rp_id,
        credential_id = %credential.credential_id,
        sign_count = credential.sign_count,
        has_aaguid = credential.aaguid.is_some(),
        "Created test passkey"
    );

    Ok(TestPasskey {
        credential,
        public_key,
    })
}

/// Base64 of the hyphenated text form of a random v4 UUID
fn random_credential_id<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);

    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    STANDARD.encode(uuid.hyphenated().to_string())
}

/// Base64 of 16 random bytes
fn random_aaguid<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; AAGUID_LEN];
    rng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

/// Parse a credential ID produced by the default generator back into its UUID
pub fn credential_id_uuid(credential_id: &str) -> Option<Uuid> {
    let text = STANDARD.decode(credential_id).ok()?;
    Uuid::try_parse_ascii(&text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_random_credential_id_is_uuid_text() {
        let id = random_credential_id(&mut OsRng);
        let text = STANDARD.decode(&id).unwrap();

        assert_eq!(text.len(), 36);
        assert_eq!(id.len(), 48);

        let uuid = credential_id_uuid(&id).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
    }

    #[test]
    fn test_random_aaguid_length() {
        let aaguid = random_aaguid(&mut OsRng);

        assert_eq!(aaguid.len(), 24);
        assert_eq!(STANDARD.decode(aaguid).unwrap().len(), AAGUID_LEN);
    }

    #[test]
    fn test_empty_credential_id_is_replaced() {
        let options = CreateTestPasskeyOptions::new("example.com").with_credential_id("");
        let passkey = create_test_passkey(&options).unwrap();

        assert!(credential_id_uuid(&passkey.credential.credential_id).is_some());
    }

    #[test]
    fn test_explicit_aaguid_beats_random_policy() {
        let options = CreateTestPasskeyOptions::new("example.com")
            .with_aaguid("fixed")
            .with_aaguid_policy(AaguidPolicy::Random);
        let passkey = create_test_passkey(&options).unwrap();

        assert_eq!(passkey.credential.aaguid.as_deref(), Some("fixed"));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let options =
            CreateTestPasskeyOptions::new("example.com").with_aaguid_policy(AaguidPolicy::Random);

        let a = create_test_passkey_with_rng(&options, &mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        let b = create_test_passkey_with_rng(&options, &mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        let c = create_test_passkey_with_rng(&options, &mut ChaCha20Rng::seed_from_u64(2)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.credential.credential_id, c.credential.credential_id);
        assert_ne!(a.public_key, c.public_key);
    }

    #[test]
    fn test_credential_id_uuid_rejects_other_ids() {
        assert_eq!(credential_id_uuid("Y3JlZC0x"), None);
        assert_eq!(credential_id_uuid("***"), None);
    }
}
