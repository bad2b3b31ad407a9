//! Pure Rust key material for synthetic WebAuthn passkeys
//!
//! This crate manufactures the byte artifacts a virtual authenticator needs:
//!
//! - **ECDSA**: P-256 key generation with SPKI/PKCS#8 DER export, ES256 sign/verify
//! - **COSE**: EC2 COSE_Key encoding of the public key
//!
//! COSE_Key layout follows RFC 9053:
//! <https://www.rfc-editor.org/rfc/rfc9053.html#section-7.1.1>

#![cfg_attr(not(feature = "std"), no_std)]

pub mod cose;
pub mod ecdsa;
pub mod error;

// Re-export commonly used types
pub use cose::{CoseKey, encode_es256_public_key};
pub use ecdsa::{KeyPair, generate_keypair};
pub use error::{CryptoError, Result};
