pub use crate::container::{Container, MIN_LEN};
pub use crate::encrypt::{
    ITERATIONS, KEY_SIZE, Key, NONCE_SIZE, Password, PasswordBuf, SALT_SIZE, TAG_SIZE,
};
pub use crate::error::Error;
pub use crate::workflow::{Direction, Job, State, Workflow};
pub use crate::{open, seal};
