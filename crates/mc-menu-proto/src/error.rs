use thiserror::Error;

use crate::types::VarIntError;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("{needed} bytes required, {remaining} left in buffer")]
    BufferTooShort { needed: usize, remaining: usize },

    #[error(transparent)]
    VarInt(#[from] VarIntError),

    #[error("string is not valid UTF-8")]
    InvalidUtf8,
}
