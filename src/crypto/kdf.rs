use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::SecretBox;
use sha2::Sha256;

use crate::error::{Result, ZenfieldError};

pub const KEY_LENGTH: usize = 32;

/// Fixed so a companion decryptor can re-derive the same key.
pub const PBKDF2_ITERATIONS: u32 = 120_000;

/// Fill `buf` from the OS entropy source.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| ZenfieldError::CryptoUnavailable(format!("OS entropy source failed: {e}")))
}

/// Derive a 256-bit key from a passphrase and salt using
/// PBKDF2-HMAC-SHA256 with [`PBKDF2_ITERATIONS`] rounds.
///
/// Deterministic for a fixed `(passphrase, salt)` pair.
pub fn derive_key(passphrase: &str, salt: &[u8]) -> SecretBox<Vec<u8>> {
    let mut key = vec![0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    SecretBox::new(Box::new(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_fill_random_uniqueness() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        fill_random(&mut a).unwrap();
        fill_random(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_derive_key_deterministic() {
        let salt = [0u8; 16];
        let key1 = derive_key("passphrase", &salt);
        let key2 = derive_key("passphrase", &salt);
        assert_eq!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_derive_key_different_passphrases() {
        let salt = [0u8; 16];
        let key1 = derive_key("passphrase1", &salt);
        let key2 = derive_key("passphrase2", &salt);
        assert_ne!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_derive_key_different_salts() {
        let salt1 = [0u8; 16];
        let salt2 = [1u8; 16];
        let key1 = derive_key("passphrase", &salt1);
        let key2 = derive_key("passphrase", &salt2);
        assert_ne!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_derive_key_length() {
        let mut salt = [0u8; 16];
        fill_random(&mut salt).unwrap();
        let key = derive_key("passphrase", &salt);
        assert_eq!(key.expose_secret().len(), KEY_LENGTH);
    }
}
