#![warn(unused_extern_crates)]

//! # test-passkey
//!
//! Synthetic WebAuthn passkey credentials for automated test suites.
//!
//! A passkey is generated without any real authenticator or browser
//! ceremony. The result carries everything a virtual authenticator needs:
//!
//! - a credential record (Base64 credential ID, relying party ID, signature
//!   counter, Base64 PKCS#8 private key, optional AAGUID)
//! - the ES256 public key as a COSE_Key CBOR encoding
//!
//! ## Architecture
//!
//! - **Key generation / COSE encoding**: `test-passkey-crypto`
//! - **Assembly**: [`create_test_passkey`] merges the key material with
//!   caller overrides and generated defaults
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), test_passkey::Error> {
//! use test_passkey::{CreateTestPasskeyOptions, create_test_passkey};
//!
//! let options = CreateTestPasskeyOptions::new("example.com").with_sign_count(5);
//! let passkey = create_test_passkey(&options)?;
//!
//! let signature = passkey.credential.sign(b"authenticator data || client data hash")?;
//! passkey.verify(b"authenticator data || client data hash", &signature)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod options;
pub mod passkey;
pub mod types;

// Re-export main types at root level for convenience
pub use error::{Error, Result};
pub use options::{AaguidPolicy, CreateTestPasskeyOptions};
pub use passkey::{create_test_passkey, create_test_passkey_with_rng, credential_id_uuid};
pub use types::{TestPasskey, TestPasskeyCredential};

pub use test_passkey_crypto::CoseKey;
