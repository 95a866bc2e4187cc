//! The key material generator.
//!
//! Draws entropy from a cryptographically secure source, clamps private
//! scalars and derives public points. Every pair is checked against an
//! independent recomputation before it leaves this module.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use x25519_dalek::{X25519_BASEPOINT_BYTES, x25519};
use zeroize::Zeroizing;

use super::KeygenError;
use super::material::{KEY_LEN, KeyMaterial, KeyPair, PresharedSecret, PrivateScalar, Session};

/// Generates key pairs and pre-shared keys from a secure random source.
///
/// Holds nothing but the entropy source. Calls are independent of each
/// other and every result is owned by the caller.
pub struct KeyMaterialGenerator<R = OsRng> {
    rng: R,
}

impl KeyMaterialGenerator<OsRng> {
    /// A generator backed by the operating system's random source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for KeyMaterialGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> KeyMaterialGenerator<R> {
    /// A generator backed by a caller-supplied secure random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a clamped private scalar and its public point.
    pub fn generate_keypair(&mut self) -> Result<KeyPair, KeygenError> {
        let mut raw = Zeroizing::new([0u8; KEY_LEN]);
        self.fill(&mut raw)?;

        let pair = KeyPair::from_private(PrivateScalar::clamped(*raw));
        verify_keypair(&pair)?;

        tracing::debug!(public_key = %pair.public(), "generated key pair");
        Ok(pair)
    }

    /// Generate 32 uniformly random bytes for use as a pre-shared key.
    pub fn generate_preshared_secret(&mut self) -> Result<PresharedSecret, KeygenError> {
        let mut raw = Zeroizing::new([0u8; KEY_LEN]);
        self.fill(&mut raw)?;

        tracing::debug!("generated pre-shared key");
        Ok(PresharedSecret::from_bytes(*raw))
    }

    /// Generate two independent key pairs and one pre-shared key.
    pub fn generate_session(&mut self) -> Result<Session, KeygenError> {
        let alice = self.generate_keypair()?;
        let bob = self.generate_keypair()?;
        let psk = self.generate_preshared_secret()?;
        Ok(Session { alice, bob, psk })
    }

    fn fill(&mut self, buf: &mut [u8; KEY_LEN]) -> Result<(), KeygenError> {
        self.rng
            .try_fill_bytes(buf)
            .map_err(KeygenError::RandomSourceUnavailable)
    }
}

/// Check that a pair is internally consistent.
///
/// The stored public point is produced by fixed-base multiplication on the
/// Edwards form; the check recomputes it with the X25519 Montgomery ladder
/// on the base point `u = 9`. Both must agree byte for byte.
pub fn verify_keypair(pair: &KeyPair) -> Result<(), KeygenError> {
    if !pair.private().is_clamped() {
        return Err(KeygenError::InternalConsistencyFailure(
            "private scalar is not clamped",
        ));
    }

    let recomputed = Zeroizing::new(x25519(*pair.private().as_bytes(), X25519_BASEPOINT_BYTES));
    if *recomputed != *pair.public().as_bytes() {
        tracing::error!(
            public_key = %pair.public(),
            "public key does not match recomputation from private scalar"
        );
        return Err(KeygenError::InternalConsistencyFailure(
            "public key does not match recomputation from private scalar",
        ));
    }

    Ok(())
}
