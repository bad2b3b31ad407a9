//! P-256 key pairs and ES256 signatures for synthetic passkeys
//!
//! COSE algorithm identifier: -7 (ES256)
//! Spec: <https://www.rfc-editor.org/rfc/rfc9053.html#section-2.1>
//!
//! Keys leave this module as DER:
//! - public key: SubjectPublicKeyInfo (SPKI)
//! - private key: PKCS#8 `PrivateKeyInfo`

extern crate alloc;
use alloc::vec::Vec;

use crate::error::{CryptoError, Result};

use p256::ecdsa::{Signature, SigningKey, VerifyingKey, signature::Signer, signature::Verifier};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePrivateKey, EncodePrivateKey, EncodePublicKey};
use p256::{PublicKey, SecretKey};
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

/// Freshly generated P-256 key pair in its exported DER forms
pub struct KeyPair {
    public: PublicKey,
    spki_der: Vec<u8>,
    pkcs8_der: Zeroizing<Vec<u8>>,
}

impl KeyPair {
    /// SubjectPublicKeyInfo DER encoding of the public key (91 bytes for P-256)
    pub fn spki_der(&self) -> &[u8] {
        &self.spki_der
    }

    /// PKCS#8 DER encoding of the private key
    ///
    /// The buffer is zeroed when the key pair is dropped.
    pub fn pkcs8_der(&self) -> &[u8] {
        &self.pkcs8_der
    }

    /// Public key in uncompressed SEC1 format (0x04 || x || y)
    pub fn public_key_sec1(&self) -> Vec<u8> {
        self.public.to_encoded_point(false).as_bytes().to_vec()
    }
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("spki_der", &self.spki_der.len())
            .field("pkcs8_der", &"<redacted>")
            .finish()
    }
}

/// Generate a new P-256 key pair and export it as SPKI and PKCS#8 DER
///
/// All entropy is drawn from `rng`. Pass `OsRng` for real keys or a seeded
/// RNG for reproducible fixtures.
///
/// # Examples
///
/// ```
/// use rand::rngs::OsRng;
/// use test_passkey_crypto::ecdsa;
///
/// let keypair = ecdsa::generate_keypair(&mut OsRng).unwrap();
/// assert_eq!(keypair.spki_der().len(), 91);
/// assert_eq!(keypair.public_key_sec1()[0], 0x04);
/// ```
pub fn generate_keypair<R: CryptoRngCore>(rng: &mut R) -> Result<KeyPair> {
    let secret = SecretKey::random(rng);
    let public = secret.public_key();

    let spki_der = public
        .to_public_key_der()
        .map_err(|_| CryptoError::KeyGenerationFailed)?
        .as_bytes()
        .to_vec();

    let pkcs8 = secret
        .to_pkcs8_der()
        .map_err(|_| CryptoError::KeyGenerationFailed)?;

    Ok(KeyPair {
        public,
        spki_der,
        pkcs8_der: Zeroizing::new(pkcs8.as_bytes().to_vec()),
    })
}

/// Parse a PKCS#8 DER private key into an ES256 signing key
pub fn signing_key_from_pkcs8(pkcs8_der: &[u8]) -> Result<SigningKey> {
    SigningKey::from_pkcs8_der(pkcs8_der).map_err(|_| CryptoError::InvalidPrivateKey)
}

/// Sign data with ES256 (P-256 + SHA-256) using a PKCS#8 DER private key
///
/// The data is hashed with SHA-256 internally by the signing operation.
/// Returns a DER-encoded signature (typically 70-72 bytes).
///
/// # Examples
///
/// ```
/// use rand::rngs::OsRng;
/// use test_passkey_crypto::ecdsa;
///
/// let keypair = ecdsa::generate_keypair(&mut OsRng).unwrap();
/// let signature = ecdsa::sign_pkcs8(keypair.pkcs8_der(), b"authenticator data").unwrap();
/// assert!(signature.len() >= 68 && signature.len() <= 73);
/// ```
pub fn sign_pkcs8(pkcs8_der: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let signing_key = signing_key_from_pkcs8(pkcs8_der)?;
    let signature: Signature = signing_key.sign(data);

    Ok(signature.to_der().to_bytes().to_vec())
}

/// Verify an ES256 DER signature
///
/// Returns `Ok(())` if the signature is valid.
pub fn verify(verifying_key: &VerifyingKey, data: &[u8], signature: &[u8]) -> Result<()> {
    let sig = Signature::from_der(signature).map_err(|_| CryptoError::InvalidSignature)?;

    verifying_key
        .verify(data, &sig)
        .map_err(|_| CryptoError::InvalidSignature)
}
