//! Generated passkey values

use std::fmt;

use crate::error::{Error, Result};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use test_passkey_crypto::{CoseKey, ecdsa};
use zeroize::{Zeroize, Zeroizing};

/// One synthetic authenticator credential
///
/// Serializes to the camelCase record stored by test fixtures:
/// `credentialId`, `rpId`, `signCount`, `privateKey` and an optional `aaguid`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPasskeyCredential {
    /// Base64-encoded unique ID of the passkey
    ///
    /// WebAuthn layers look credentials up by this encoded value, so it is
    /// stored encoded rather than as raw bytes.
    pub credential_id: String,
    /// Relying party ID
    pub rp_id: String,
    /// Signature counter
    pub sign_count: u32,
    /// Base64 of the PKCS#8 DER P-256 private key
    pub private_key: String,
    /// Base64 authenticator attestation GUID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaguid: Option<String>,
}

impl TestPasskeyCredential {
    /// Raw credential ID bytes
    pub fn credential_id_bytes(&self) -> Result<Vec<u8>> {
        decode_field("credentialId", &self.credential_id)
    }

    /// Raw AAGUID bytes, if one is set
    pub fn aaguid_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.aaguid
            .as_deref()
            .map(|aaguid| decode_field("aaguid", aaguid))
            .transpose()
    }

    /// PKCS#8 DER private key
    pub fn private_key_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        decode_field("privateKey", &self.private_key).map(Zeroizing::new)
    }

    /// Sign data with the credential's private key (ES256, DER signature)
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let der = self.private_key_der()?;
        Ok(ecdsa::sign_pkcs8(&der, data)?)
    }
}

impl fmt::Debug for TestPasskeyCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestPasskeyCredential")
            .field("credential_id", &self.credential_id)
            .field("rp_id", &self.rp_id)
            .field("sign_count", &self.sign_count)
            .field("private_key", &"<redacted>")
            .field("aaguid", &self.aaguid)
            .finish()
    }
}

impl Drop for TestPasskeyCredential {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Result of passkey generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestPasskey {
    /// Credential record to hand to the virtual authenticator or store
    pub credential: TestPasskeyCredential,
    /// COSE_Key CBOR encoding of the ES256 public key
    pub public_key: Vec<u8>,
}

impl TestPasskey {
    /// Decode the public key coordinates
    pub fn cose_key(&self) -> Result<CoseKey> {
        Ok(CoseKey::from_cbor(&self.public_key)?)
    }

    /// Verify an ES256 DER signature against the embedded public key
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        let verifying_key = self.cose_key()?.to_verifying_key()?;
        Ok(ecdsa::verify(&verifying_key, data, signature)?)
    }
}

fn decode_field(field: &str, value: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|_| Error::InvalidBase64(field.to_string()))
}
