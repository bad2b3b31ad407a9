//! Error types for key generation and COSE encoding

#[cfg(feature = "std")]
use thiserror::Error;

#[cfg(not(feature = "std"))]
use core::fmt;

/// Key generation and encoding errors
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// P-256 key pair could not be generated or exported as DER
    #[error("P-256 key generation failed")]
    KeyGenerationFailed,

    /// Input has the wrong length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// SPKI blob is not an uncompressed P-256 public key
    #[error("SPKI is not an uncompressed P-256 public key")]
    MalformedSpki,

    /// Invalid private key provided
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Invalid public key provided
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid signature format
    #[error("Invalid signature")]
    InvalidSignature,

    /// Invalid COSE key format
    #[error("Invalid COSE key format")]
    InvalidCoseKey,

    /// CBOR encoding failed
    #[error("CBOR encoding failed")]
    EncodingFailed,
}

/// Key generation and encoding errors (no_std version)
#[cfg(not(feature = "std"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// P-256 key pair could not be generated or exported as DER
    KeyGenerationFailed,

    /// Input has the wrong length
    InvalidKeyLength { expected: usize, actual: usize },

    /// SPKI blob is not an uncompressed P-256 public key
    MalformedSpki,

    /// Invalid private key provided
    InvalidPrivateKey,

    /// Invalid public key provided
    InvalidPublicKey,

    /// Invalid signature format
    InvalidSignature,

    /// Invalid COSE key format
    InvalidCoseKey,

    /// CBOR encoding failed
    EncodingFailed,
}

#[cfg(not(feature = "std"))]
impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyGenerationFailed => write!(f, "P-256 key generation failed"),
            Self::InvalidKeyLength { expected, actual } => {
                write!(
                    f,
                    "Invalid key length: expected {}, got {}",
                    expected, actual
                )
            }
            Self::MalformedSpki => write!(f, "SPKI is not an uncompressed P-256 public key"),
            Self::InvalidPrivateKey => write!(f, "Invalid private key"),
            Self::InvalidPublicKey => write!(f, "Invalid public key"),
            Self::InvalidSignature => write!(f, "Invalid signature"),
            Self::InvalidCoseKey => write!(f, "Invalid COSE key format"),
            Self::EncodingFailed => write!(f, "CBOR encoding failed"),
        }
    }
}

/// Result type alias for cryptographic operations
pub type Result<T> = core::result::Result<T, CryptoError>;
