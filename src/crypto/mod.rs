pub mod aead;
pub mod kdf;
pub mod note;

pub use note::{encrypt_note, EncryptedNote, NoteDraft};
