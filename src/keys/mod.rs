//! Curve25519 key material generation.
//!
//! Produces WireGuard private/public key pairs and pre-shared keys.
//! Everything here is stateless: each call draws fresh entropy and hands
//! the buffers to the caller, who owns them from then on.

pub mod encoding;
pub mod generator;
pub mod material;

use thiserror::Error;

pub use encoding::{EncodedKeyPair, EncodedSession};
pub use generator::{KeyMaterialGenerator, verify_keypair};
pub use material::{
    KEY_LEN, KeyMaterial, KeyPair, PresharedSecret, PrivateScalar, PublicPoint, Session,
};

/// Errors raised while generating or decoding key material.
#[derive(Error, Debug)]
pub enum KeygenError {
    /// The secure random source could not supply entropy.
    #[error("secure random source unavailable: {0}")]
    RandomSourceUnavailable(#[source] rand::Error),

    /// A derived public key did not match its recomputation from the
    /// private scalar, or the scalar lost its clamp bits.
    #[error("internal consistency failure: {0}")]
    InternalConsistencyFailure(&'static str),

    #[error("invalid base64 key: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),
}

/// Generate a key pair from the operating system's random source.
pub fn generate_keypair() -> Result<KeyPair, KeygenError> {
    KeyMaterialGenerator::new().generate_keypair()
}

/// Generate a pre-shared key from the operating system's random source.
pub fn generate_preshared_secret() -> Result<PresharedSecret, KeygenError> {
    KeyMaterialGenerator::new().generate_preshared_secret()
}

/// Generate two independent key pairs and a shared PSK.
pub fn generate_session() -> Result<Session, KeygenError> {
    KeyMaterialGenerator::new().generate_session()
}
