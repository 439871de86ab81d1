use crate::encrypt::{NONCE_SIZE, Password, SALT_SIZE};
use crate::error::Error;
use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, Key as AesKey, KeyInit},
};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AES-256 key size. PBKDF2 output length is pinned to this.
pub const KEY_SIZE: usize = 256 / 8;

/// PBKDF2 round count, shared implicitly between seal and open. Changing
/// this orphans every existing container, so don't.
pub const ITERATIONS: u32 = 100_000;

/// A symmetric key derived from a password and salt, used to seal and open
/// payloads with privacy and integrity.
///
/// Keys are never serialized anywhere. Opening a container re-derives the
/// key from the password and the salt stored in the container itself; the
/// derivation is deterministic, so the same `(password, salt)` pair always
/// lands on the same key.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Derive a key with PBKDF2-HMAC-SHA-256.
    ///
    /// Accepts any password, including an empty one; policy checks against
    /// blank passwords belong to the workflow, not the primitive.
    pub fn from_password(password: Password, salt: &[u8; SALT_SIZE]) -> Self {
        let mut output_key_material = [0u8; KEY_SIZE];
        pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            salt,
            ITERATIONS,
            &mut output_key_material,
        );

        let key = Key(output_key_material);
        output_key_material.zeroize();
        key
    }

    /// Returns this key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encrypt `plaintext` under this key, returning ciphertext with the
    /// authentication tag appended. The caller must never reuse a nonce
    /// with the same key.
    pub fn seal(&self, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        let cipher = Aes256Gcm::new(AesKey::<Aes256Gcm>::from_slice(&self.0));
        cipher
            .encrypt(Nonce::from_slice(nonce), plaintext)
            .map_err(|e| Error::Unexpected(format!("encryption: {}", e)))
    }

    /// Decrypt and authenticate `ciphertext_and_tag`.
    ///
    /// Any modification of the ciphertext, tag, or nonce, or a key derived
    /// from the wrong password or salt, fails with
    /// [`Error::AuthenticationFailure`]. The error carries no hint about
    /// which of those happened.
    pub fn open(
        &self,
        nonce: &[u8; NONCE_SIZE],
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let cipher = Aes256Gcm::new(AesKey::<Aes256Gcm>::from_slice(&self.0));
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext_and_tag)
            .map_err(|_| Error::AuthenticationFailure)
    }
}
