use std::fmt;

/// Everything that can go wrong while sealing or opening a container.
///
/// `AuthenticationFailure` deliberately covers both "wrong password" and
/// "corrupted or tampered container"; the cipher cannot tell them apart and
/// neither should callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The password was empty (after trimming whitespace). Rejected before
    /// any cryptography runs.
    EmptyPassword,
    /// No payload was selected for the requested operation.
    NoPayloadSelected,
    /// The buffer is too short to hold a salt and nonce.
    MalformedContainer,
    /// The cipher rejected the ciphertext/tag under the derived key.
    AuthenticationFailure,
    /// Another request is already running on this workflow.
    Busy,
    /// A lower-level fault (RNG, cipher primitive). The detail string is
    /// for internal logs only and never shown through `Display`.
    Unexpected(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyPassword => write!(f, "password must not be empty"),
            Error::NoPayloadSelected => write!(f, "no payload selected"),
            Error::MalformedContainer => write!(f, "container is malformed"),
            Error::AuthenticationFailure => {
                write!(f, "could not open container: wrong password or damaged data")
            }
            Error::Busy => write!(f, "an operation is already running"),
            Error::Unexpected(_) => write!(f, "an internal error occurred"),
        }
    }
}

impl std::error::Error for Error {}
