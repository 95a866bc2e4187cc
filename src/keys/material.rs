//! Key material types: clamped private scalars, public points and PSKs.

use std::fmt;

use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KeygenError;
use super::encoding;

/// Length in bytes of every Curve25519 buffer handled here.
pub const KEY_LEN: usize = 32;

/// Common access to the raw bytes and display encoding of a key buffer.
pub trait KeyMaterial {
    /// The raw bytes. These are the source of truth; encodings are derived.
    fn as_bytes(&self) -> &[u8; KEY_LEN];

    /// Standard base64 (padded) text of the raw bytes.
    fn to_base64(&self) -> String {
        encoding::encode(self.as_bytes())
    }
}

/// A clamped Curve25519 private scalar.
///
/// Clamping clears the three low bits of byte 0 and sets bit pattern `01`
/// in the top two bits of byte 31, so the scalar is a multiple of the
/// cofactor with a fixed highest bit. The bytes are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar([u8; KEY_LEN]);

impl PrivateScalar {
    /// Clamp `bytes` into a valid scalar.
    pub fn clamped(mut bytes: [u8; KEY_LEN]) -> Self {
        clamp(&mut bytes);
        let scalar = Self(bytes);
        bytes.zeroize();
        scalar
    }

    /// Decode a base64 private key and clamp it.
    ///
    /// Keys produced by other tools are normally clamped already; an
    /// unclamped input is accepted and normalised the same way `wg pubkey`
    /// does.
    pub fn from_base64(text: &str) -> Result<Self, KeygenError> {
        let mut bytes = encoding::decode_key(text)?;
        if !is_clamped(&bytes) {
            tracing::debug!("private key input was not clamped; clamping before use");
        }
        let scalar = Self::clamped(bytes);
        bytes.zeroize();
        Ok(scalar)
    }

    /// Whether the clamp bits are in place.
    pub fn is_clamped(&self) -> bool {
        is_clamped(&self.0)
    }

    /// Derive the public point by fixed-base scalar multiplication.
    pub fn public_point(&self) -> PublicPoint {
        let secret = StaticSecret::from(self.0);
        PublicPoint(*PublicKey::from(&secret).as_bytes())
    }
}

impl KeyMaterial for PrivateScalar {
    fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar([REDACTED])")
    }
}

/// A Curve25519 public key (Montgomery u-coordinate).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicPoint([u8; KEY_LEN]);

impl PublicPoint {
    /// Wrap raw public key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode a base64 public key.
    pub fn from_base64(text: &str) -> Result<Self, KeygenError> {
        encoding::decode_key(text).map(Self)
    }
}

impl KeyMaterial for PublicPoint {
    fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for PublicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicPoint").field(&self.to_base64()).finish()
    }
}

impl fmt::Display for PublicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

/// A 32-byte symmetric secret mixed into the tunnel handshake.
///
/// Uniformly random, never clamped, unrelated to any key pair.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PresharedSecret([u8; KEY_LEN]);

impl PresharedSecret {
    /// Wrap raw secret bytes as-is.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_base64(text: &str) -> Result<Self, KeygenError> {
        encoding::decode_key(text).map(Self)
    }
}

impl KeyMaterial for PresharedSecret {
    fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for PresharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PresharedSecret([REDACTED])")
    }
}

/// A private scalar together with the public point derived from it.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub(crate) private: PrivateScalar,
    pub(crate) public: PublicPoint,
}

impl KeyPair {
    /// Build a pair by deriving the public point from `private`.
    pub fn from_private(private: PrivateScalar) -> Self {
        let public = private.public_point();
        Self { private, public }
    }

    pub fn private(&self) -> &PrivateScalar {
        &self.private
    }

    pub fn public(&self) -> &PublicPoint {
        &self.public
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public.to_base64())
            .finish_non_exhaustive()
    }
}

/// Everything two peers need for one tunnel: a key pair each and a PSK.
#[derive(Debug, Clone)]
pub struct Session {
    pub alice: KeyPair,
    pub bob: KeyPair,
    pub psk: PresharedSecret,
}

fn clamp(bytes: &mut [u8; KEY_LEN]) {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
}

fn is_clamped(bytes: &[u8; KEY_LEN]) -> bool {
    bytes[0] & 0b0000_0111 == 0 && bytes[31] & 0b1100_0000 == 0b0100_0000
}
