//! COSE_Key encoding for ES256 public keys
//!
//! Spec: <https://www.rfc-editor.org/rfc/rfc9053.html#section-7.1.1>
//!
//! An EC2 public key is a CBOR map with five integer labels:
//!
//! ```text
//! { 1: 2, 3: -7, -1: 1, -2: x, -3: y }
//! ```
//!
//! Keys are written in exactly that order, which is also the CTAP2 canonical
//! order (positive labels ascending, then negative labels by absolute value).

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::{CryptoError, Result};

use p256::ecdsa::VerifyingKey;
use p256::{EncodedPoint, FieldBytes};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Length of a SEC1 uncompressed P-256 point (0x04 || x || y)
pub const UNCOMPRESSED_POINT_LEN: usize = 65;

/// Length of one affine coordinate on P-256
pub const COORDINATE_LEN: usize = 32;

/// SEC1 tag for an uncompressed point
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Total length of a P-256 SubjectPublicKeyInfo with an uncompressed point
pub const P256_SPKI_LEN: usize = 91;

/// DER prefix shared by every uncompressed P-256 SubjectPublicKeyInfo
///
/// SEQUENCE { SEQUENCE { id-ecPublicKey, prime256v1 }, BIT STRING (0 unused bits) }
pub const P256_SPKI_HEADER: [u8; P256_SPKI_LEN - UNCOMPRESSED_POINT_LEN] = [
    0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a,
    0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00,
];

/// COSE key common parameter: key type
pub const LABEL_KTY: i32 = 1;
/// COSE key common parameter: algorithm
pub const LABEL_ALG: i32 = 3;
/// EC2 key parameter: curve
pub const LABEL_CRV: i32 = -1;
/// EC2 key parameter: x-coordinate
pub const LABEL_X: i32 = -2;
/// EC2 key parameter: y-coordinate
pub const LABEL_Y: i32 = -3;

/// Key type EC2
pub const KTY_EC2: i32 = 2;
/// Algorithm ES256 (ECDSA w/ SHA-256)
pub const ALG_ES256: i32 = -7;
/// Curve P-256
pub const CRV_P256: i32 = 1;

/// Length of the encoded COSE_Key produced by [`CoseKey::to_cbor`]
pub const ENCODED_LEN: usize = 77;

/// Locate the uncompressed EC point inside a P-256 SPKI blob
///
/// The point is the final 65 bytes of the structure. The length, the DER
/// header and the 0x04 tag are all checked before slicing, so a key on a
/// different curve or in compressed form is rejected instead of silently
/// truncated.
pub fn uncompressed_point_from_spki(spki_der: &[u8]) -> Result<&[u8; UNCOMPRESSED_POINT_LEN]> {
    if spki_der.len() != P256_SPKI_LEN {
        return Err(CryptoError::InvalidKeyLength {
            expected: P256_SPKI_LEN,
            actual: spki_der.len(),
        });
    }

    let (header, point) = spki_der.split_at(P256_SPKI_LEN - UNCOMPRESSED_POINT_LEN);
    if header != P256_SPKI_HEADER {
        return Err(CryptoError::MalformedSpki);
    }

    let point: &[u8; UNCOMPRESSED_POINT_LEN] =
        point.try_into().map_err(|_| CryptoError::MalformedSpki)?;
    if point[0] != UNCOMPRESSED_POINT_TAG {
        return Err(CryptoError::MalformedSpki);
    }

    Ok(point)
}

/// ES256 public key as carried in a COSE_Key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoseKey {
    /// Affine x-coordinate, big-endian
    pub x: [u8; COORDINATE_LEN],
    /// Affine y-coordinate, big-endian
    pub y: [u8; COORDINATE_LEN],
}

impl CoseKey {
    /// Build from raw coordinates
    pub fn new(x: [u8; COORDINATE_LEN], y: [u8; COORDINATE_LEN]) -> Self {
        Self { x, y }
    }

    /// Extract the coordinates from a SPKI DER P-256 public key
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::OsRng;
    /// use test_passkey_crypto::{cose::CoseKey, ecdsa};
    ///
    /// let keypair = ecdsa::generate_keypair(&mut OsRng).unwrap();
    /// let key = CoseKey::from_spki(keypair.spki_der()).unwrap();
    /// assert_eq!(&keypair.public_key_sec1()[1..33], &key.x);
    /// ```
    pub fn from_spki(spki_der: &[u8]) -> Result<Self> {
        Self::from_sec1(uncompressed_point_from_spki(spki_der)?)
    }

    /// Extract the coordinates from an uncompressed SEC1 point (0x04 || x || y)
    pub fn from_sec1(point: &[u8]) -> Result<Self> {
        if point.len() != UNCOMPRESSED_POINT_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: UNCOMPRESSED_POINT_LEN,
                actual: point.len(),
            });
        }
        if point[0] != UNCOMPRESSED_POINT_TAG {
            return Err(CryptoError::InvalidPublicKey);
        }

        let mut x = [0u8; COORDINATE_LEN];
        let mut y = [0u8; COORDINATE_LEN];
        x.copy_from_slice(&point[1..1 + COORDINATE_LEN]);
        y.copy_from_slice(&point[1 + COORDINATE_LEN..]);

        Ok(Self { x, y })
    }

    /// Encode as a COSE_Key CBOR map
    ///
    /// The output is always [`ENCODED_LEN`] bytes:
    /// `a5 01 02 03 26 20 01 21 58 20 <x> 22 58 20 <y>`
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        cbor4ii::serde::to_vec(Vec::with_capacity(ENCODED_LEN), self)
            .map_err(|_| CryptoError::EncodingFailed)
    }

    /// Decode a COSE_Key CBOR map produced for an ES256 key
    ///
    /// The map must contain exactly the five EC2 labels with kty EC2,
    /// alg ES256, crv P-256 and 32-byte coordinates.
    pub fn from_cbor(data: &[u8]) -> Result<Self> {
        use cbor4ii::core::Value;

        let map: BTreeMap<i32, Value> =
            cbor4ii::serde::from_slice(data).map_err(|_| CryptoError::InvalidCoseKey)?;

        if map.len() != 5 {
            return Err(CryptoError::InvalidCoseKey);
        }

        let int = |label: i32| match map.get(&label) {
            Some(Value::Integer(v)) => Ok(*v),
            _ => Err(CryptoError::InvalidCoseKey),
        };
        let coordinate = |label: i32| match map.get(&label) {
            Some(Value::Bytes(b)) => {
                <[u8; COORDINATE_LEN]>::try_from(b.as_slice()).map_err(|_| CryptoError::InvalidCoseKey)
            }
            _ => Err(CryptoError::InvalidCoseKey),
        };

        if int(LABEL_KTY)? != KTY_EC2.into()
            || int(LABEL_ALG)? != ALG_ES256.into()
            || int(LABEL_CRV)? != CRV_P256.into()
        {
            return Err(CryptoError::InvalidCoseKey);
        }

        Ok(Self {
            x: coordinate(LABEL_X)?,
            y: coordinate(LABEL_Y)?,
        })
    }

    /// Uncompressed SEC1 encoding (0x04 || x || y)
    pub fn to_sec1(&self) -> [u8; UNCOMPRESSED_POINT_LEN] {
        let mut point = [0u8; UNCOMPRESSED_POINT_LEN];
        point[0] = UNCOMPRESSED_POINT_TAG;
        point[1..1 + COORDINATE_LEN].copy_from_slice(&self.x);
        point[1 + COORDINATE_LEN..].copy_from_slice(&self.y);
        point
    }

    /// Reconstruct the ES256 verifying key
    ///
    /// Fails if the coordinates are not a point on P-256.
    pub fn to_verifying_key(&self) -> Result<VerifyingKey> {
        let x = FieldBytes::from(self.x);
        let y = FieldBytes::from(self.y);
        let point = EncodedPoint::from_affine_coordinates(&x, &y, false);

        VerifyingKey::from_encoded_point(&point).map_err(|_| CryptoError::InvalidPublicKey)
    }
}

impl Serialize for CoseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry(&LABEL_KTY, &KTY_EC2)?;
        map.serialize_entry(&LABEL_ALG, &ALG_ES256)?;
        map.serialize_entry(&LABEL_CRV, &CRV_P256)?;
        map.serialize_entry(&LABEL_X, serde_bytes::Bytes::new(&self.x))?;
        map.serialize_entry(&LABEL_Y, serde_bytes::Bytes::new(&self.y))?;
        map.end()
    }
}

/// Encode a SPKI DER P-256 public key as an ES256 COSE_Key
///
/// # Examples
///
/// ```
/// use rand::rngs::OsRng;
/// use test_passkey_crypto::{cose, ecdsa};
///
/// let keypair = ecdsa::generate_keypair(&mut OsRng).unwrap();
/// let cose_key = cose::encode_es256_public_key(keypair.spki_der()).unwrap();
/// assert_eq!(cose_key.len(), cose::ENCODED_LEN);
/// assert_eq!(&cose_key[..10], &[0xa5, 0x01, 0x02, 0x03, 0x26, 0x20, 0x01, 0x21, 0x58, 0x20]);
/// ```
pub fn encode_es256_public_key(spki_der: &[u8]) -> Result<Vec<u8>> {
    CoseKey::from_spki(spki_der)?.to_cbor()
}
