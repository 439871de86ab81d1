use crate::error::Error;
use rand_core::{OsRng, RngCore};

// This value can be anything really, but is generally recommended to be about
// 128-bits. The idea is that it just needs to contain more entropy than the
// user's password.
pub const SALT_SIZE: usize = 128 / 8;

// 96-bit nonces are the standard recommendation for GCM; anything else gets
// hashed down internally before use.
pub const NONCE_SIZE: usize = 96 / 8;

/// Length of the authentication tag appended to every ciphertext.
pub const TAG_SIZE: usize = 128 / 8;

pub(crate) fn generate_salt() -> Result<[u8; SALT_SIZE], Error> {
    let mut salt = [0; SALT_SIZE];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| Error::Unexpected(format!("salt generation: {}", e)))?;
    Ok(salt)
}

pub(crate) fn generate_nonce() -> Result<[u8; NONCE_SIZE], Error> {
    let mut nonce = [0; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| Error::Unexpected(format!("nonce generation: {}", e)))?;
    Ok(nonce)
}

mod key;
pub use self::key::{ITERATIONS, KEY_SIZE, Key};
mod password;
pub use self::password::{Password, PasswordBuf};
