//! Error types for passkey generation

use std::fmt;

use test_passkey_crypto::CryptoError;

/// Error type for passkey generation and the helpers on generated passkeys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The P-256 key pair could not be generated or exported
    KeyGenerationFailure,
    /// The generated public key is not a 65-byte uncompressed P-256 point
    MalformedInputKey(String),
    /// The stored private key is not a valid PKCS#8 P-256 key
    InvalidPrivateKey,
    /// The public key is not a point on P-256
    InvalidPublicKey,
    /// Signature verification failed or the signature is not valid DER
    InvalidSignature,
    /// The public key bytes are not an ES256 COSE_Key
    InvalidCoseKey,
    /// A field that must be Base64 could not be decoded
    InvalidBase64(String),
    /// CBOR encoding failed
    Encoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyGenerationFailure => write!(f, "Failed to generate P-256 key pair"),
            Error::MalformedInputKey(msg) => write!(f, "Malformed public key: {}", msg),
            Error::InvalidPrivateKey => write!(f, "Invalid PKCS#8 private key"),
            Error::InvalidPublicKey => write!(f, "Invalid public key"),
            Error::InvalidSignature => write!(f, "Invalid signature"),
            Error::InvalidCoseKey => write!(f, "Invalid COSE key"),
            Error::InvalidBase64(field) => write!(f, "Field {} is not valid Base64", field),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<CryptoError> for Error {
    fn from(error: CryptoError) -> Self {
        match error {
            CryptoError::KeyGenerationFailed => Error::KeyGenerationFailure,
            CryptoError::InvalidKeyLength { .. } | CryptoError::MalformedSpki => {
                Error::MalformedInputKey(error.to_string())
            }
            CryptoError::InvalidPrivateKey => Error::InvalidPrivateKey,
            CryptoError::InvalidPublicKey => Error::InvalidPublicKey,
            CryptoError::InvalidSignature => Error::InvalidSignature,
            CryptoError::InvalidCoseKey => Error::InvalidCoseKey,
            CryptoError::EncodingFailed => Error::Encoding(error.to_string()),
        }
    }
}

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, Error>;
