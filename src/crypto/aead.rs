use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use secrecy::{ExposeSecret, SecretBox};

use crate::error::{Result, ZenfieldError};

pub const NONCE_LENGTH: usize = 12;
pub const TAG_LENGTH: usize = 16;

/// Encrypt `plaintext` with AES-256-GCM under a caller-supplied nonce.
///
/// Returns the ciphertext with the 16-byte authentication tag appended.
/// The nonce must be unique per key; callers draw it fresh from the OS
/// entropy source for every encryption. Given a fixed `(key, nonce)` the
/// output is deterministic.
pub fn seal(key: &SecretBox<Vec<u8>>, nonce: &[u8; NONCE_LENGTH], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.expose_secret())
        .map_err(|e| ZenfieldError::CryptoUnavailable(e.to_string()))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| ZenfieldError::CryptoUnavailable(format!("AES-GCM encryption failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> SecretBox<Vec<u8>> {
        SecretBox::new(Box::new(vec![0x42u8; 32]))
    }

    #[test]
    fn test_tag_overhead() {
        let key = test_key();
        let plaintext = b"a quiet moment";
        let ciphertext = seal(&key, &[0u8; NONCE_LENGTH], plaintext).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_LENGTH);
    }

    #[test]
    fn test_empty_plaintext_is_tag_only() {
        let key = test_key();
        let ciphertext = seal(&key, &[0u8; NONCE_LENGTH], b"").unwrap();
        assert_eq!(ciphertext.len(), TAG_LENGTH);
    }

    #[test]
    fn test_deterministic_for_fixed_nonce() {
        let key = test_key();
        let nonce = [7u8; NONCE_LENGTH];
        let c1 = seal(&key, &nonce, b"reflection").unwrap();
        let c2 = seal(&key, &nonce, b"reflection").unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_different_nonces_differ() {
        let key = test_key();
        let c1 = seal(&key, &[1u8; NONCE_LENGTH], b"reflection").unwrap();
        let c2 = seal(&key, &[2u8; NONCE_LENGTH], b"reflection").unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_different_keys_differ() {
        let key = test_key();
        let other = SecretBox::new(Box::new(vec![0x99u8; 32]));
        let nonce = [7u8; NONCE_LENGTH];
        let c1 = seal(&key, &nonce, b"reflection").unwrap();
        let c2 = seal(&other, &nonce, b"reflection").unwrap();
        assert_ne!(c1, c2);
    }
}
