//! **Sealbox** password-based authenticated encryption containers.
//!
//! Sealing a payload derives an AES-256 key from a password with
//! PBKDF2-HMAC-SHA-256, encrypts under AES-256-GCM with a fresh salt and
//! nonce, and packs everything into one flat buffer:
//! `salt(16) || nonce(12) || ciphertext+tag`. Opening reverses the trip
//! with the same password; a wrong password and a tampered container are
//! deliberately indistinguishable.
//!
//! ```
//! use sealbox::pw;
//! # use sealbox::Error;
//!
//! # fn main() -> Result<(), Error> {
//! let container = sealbox::seal(pw!(String::from("correct-horse")), b"hello")?;
//! let plaintext = sealbox::open(pw!(String::from("correct-horse")), &container)?;
//! assert_eq!(b"hello", &plaintext[..]);
//! # Ok(())
//! # }
//! ```
//!
//! The [`workflow`] module wraps these paths in a small state machine for
//! callers driving them from interactive frontends.

pub mod container;
pub mod encrypt;
mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod prelude;
pub mod workflow;

pub use self::error::Error;

use crate::container::Container;
use crate::encrypt::{Key, Password};
use tracing::debug;

/// Seal `plaintext` under `password`, returning the container bytes.
///
/// Every call draws a fresh salt and nonce, so sealing the same payload
/// with the same password twice yields two different containers. Nothing
/// about the derived key or password outlives the call.
pub fn seal(password: Password, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let salt = encrypt::generate_salt()?;
    let nonce = encrypt::generate_nonce()?;
    let key = Key::from_password(password, &salt);
    let ciphertext = key.seal(&nonce, plaintext)?;

    let container = Container {
        salt,
        nonce,
        ciphertext,
    };
    debug!(plaintext_len = plaintext.len(), "sealed payload");
    Ok(container.encode())
}

/// Open `container` with `password`, returning the payload bytes.
///
/// The key is re-derived from the salt stored in the container; there is
/// no cache of derived keys. Structural problems surface as
/// [`Error::MalformedContainer`] before any cryptography runs; everything
/// the cipher rejects surfaces as [`Error::AuthenticationFailure`].
pub fn open(password: Password, container: &[u8]) -> Result<Vec<u8>, Error> {
    let container = Container::decode(container)?;
    let key = Key::from_password(password, &container.salt);
    let plaintext = key.open(&container.nonce, &container.ciphertext)?;
    debug!(plaintext_len = plaintext.len(), "opened container");
    Ok(plaintext)
}
