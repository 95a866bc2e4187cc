//! Base64 encoding of key material for display.
//!
//! The raw byte buffers stay authoritative. The encoded forms here are
//! derived views handed to renderers and JSON output.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::KeygenError;
use super::material::{KEY_LEN, KeyMaterial, KeyPair, Session};

/// Encode bytes with the standard, padded base64 alphabet.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    BASE64.encode(bytes)
}

/// Decode a base64 key and require exactly [`KEY_LEN`] bytes.
///
/// Surrounding whitespace is ignored so keys can be piped in with a
/// trailing newline. The intermediate decode buffer is wiped on drop.
pub fn decode_key(text: &str) -> Result<[u8; KEY_LEN], KeygenError> {
    let bytes = Zeroizing::new(BASE64.decode(text.trim())?);
    if bytes.len() != KEY_LEN {
        return Err(KeygenError::InvalidKeyLength(bytes.len()));
    }

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&bytes);
    Ok(key)
}

/// Display form of a key pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedKeyPair {
    pub private_key: String,
    pub public_key: String,
}

impl From<&KeyPair> for EncodedKeyPair {
    fn from(pair: &KeyPair) -> Self {
        Self {
            private_key: pair.private().to_base64(),
            public_key: pair.public().to_base64(),
        }
    }
}

/// Display form of a full two-peer session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSession {
    pub alice: EncodedKeyPair,
    pub bob: EncodedKeyPair,
    pub psk: String,
}

impl From<&Session> for EncodedSession {
    fn from(session: &Session) -> Self {
        Self {
            alice: EncodedKeyPair::from(&session.alice),
            bob: EncodedKeyPair::from(&session.bob),
            psk: session.psk.to_base64(),
        }
    }
}
