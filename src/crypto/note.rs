//! Passphrase-based encryption of a journal reflection.
//!
//! Produces an [`EncryptedNote`] holding the IV, salt, and ciphertext as
//! standard base64, ready to embed in a JSON document. Salt and IV are
//! drawn fresh from OS entropy on every call; a `(key, iv)` pair is
//! never reused. Decryption is intentionally not implemented here. The
//! fixed parameters ([`kdf::PBKDF2_ITERATIONS`], SHA-256, AES-256-GCM,
//! 12-byte nonce, 16-byte salt) let a companion decryptor invert the
//! transform.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{aead, kdf};
use crate::error::{Result, ZenfieldError};

pub const SALT_LENGTH: usize = 16;

/// Encrypted reflection. Each field is standard base64 with padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedNote {
    pub iv: String,
    pub salt: String,
    pub cipher: String,
}

impl EncryptedNote {
    /// Pretty-printed JSON payload, as shown to the user and copied to
    /// the clipboard.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ZenfieldError::Encoding(e.to_string()))
    }
}

/// A reflection and its passphrase, zeroized on drop so plaintext does
/// not linger in memory after the encryption worker finishes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct NoteDraft {
    pub text: String,
    pub passphrase: String,
}

/// Encrypt a reflection with a key derived from `passphrase`.
///
/// Generates a fresh 16-byte salt and 12-byte IV, derives a 256-bit key
/// via PBKDF2-HMAC-SHA256, and seals the UTF-8 text with AES-256-GCM.
/// Either yields a complete result or fails; no partial output. Safe to
/// re-invoke with the same inputs after a failure since salt and IV are
/// regenerated each call.
pub fn encrypt_note(plaintext: &str, passphrase: &str) -> Result<EncryptedNote> {
    let mut salt = [0u8; SALT_LENGTH];
    kdf::fill_random(&mut salt)?;
    let mut iv = [0u8; aead::NONCE_LENGTH];
    kdf::fill_random(&mut iv)?;

    let key = kdf::derive_key(passphrase, &salt);
    let ciphertext = aead::seal(&key, &iv, plaintext.as_bytes())?;

    Ok(EncryptedNote {
        iv: STANDARD.encode(iv),
        salt: STANDARD.encode(salt),
        cipher: STANDARD.encode(ciphertext),
    })
}
