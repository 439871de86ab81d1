//! The sealed container format.
//!
//! A container is a flat buffer with a fixed field order:
//!
//! ```text
//! offset 0..16   salt
//! offset 16..28  nonce
//! offset 28..    ciphertext || authentication tag
//! ```
//!
//! There are no length prefixes; the salt and nonce have fixed widths and
//! the ciphertext consumes the remainder. There is also no magic or version
//! byte, so the KDF and cipher parameters are an implicit contract between
//! whoever sealed the container and whoever opens it.
//!
//! The codec never touches the cipher. It splits and joins slices, and the
//! only validation it performs is structural: anything shorter than
//! [`MIN_LEN`] can't hold a salt and nonce and is rejected as malformed.

use crate::encrypt::{NONCE_SIZE, SALT_SIZE};
use crate::error::Error;
use base64::{Engine, engine::general_purpose::STANDARD};

/// The smallest structurally valid container: a salt and nonce with an
/// empty ciphertext region.
pub const MIN_LEN: usize = SALT_SIZE + NONCE_SIZE;

/// A parsed (or about to be encoded) sealed payload.
///
/// The ciphertext field is opaque here beyond its length; whether it
/// authenticates under some key is the cipher's business during open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub salt: [u8; SALT_SIZE],
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Serialize as `salt || nonce || ciphertext_and_tag`.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(MIN_LEN + self.ciphertext.len());
        bytes.extend_from_slice(&self.salt);
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Parse a container out of `bytes`.
    ///
    /// Fails with [`Error::MalformedContainer`] when the buffer is shorter
    /// than [`MIN_LEN`]. An exactly-[`MIN_LEN`] buffer parses to an empty
    /// ciphertext region, which is degenerate but structurally valid.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < MIN_LEN {
            return Err(Error::MalformedContainer);
        }

        let mut salt = [0; SALT_SIZE];
        salt.copy_from_slice(&bytes[..SALT_SIZE]);
        let mut nonce = [0; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[SALT_SIZE..MIN_LEN]);

        Ok(Container {
            salt,
            nonce,
            ciphertext: bytes[MIN_LEN..].to_vec(),
        })
    }

    /// Encode for carriage inside a text field.
    pub fn encode_base64(&self) -> String {
        STANDARD.encode(self.encode())
    }

    /// Parse a base64-carried container. Invalid base64 is just another
    /// malformed container.
    pub fn decode_base64(text: &str) -> Result<Self, Error> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|_| Error::MalformedContainer)?;
        Self::decode(&bytes)
    }
}
