use mc_menu_proto::error::ProtoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NbtError {
    #[error("NBT ended early")]
    UnexpectedEof,

    #[error("root tag must be a compound (10), found type {got}")]
    ExpectedCompound { got: u8 },

    #[error("tag type {0} does not exist")]
    UnknownTagType(u8),

    #[error("tags nested deeper than {limit}")]
    NestingTooDeep { limit: usize },

    #[error("array or list length {0} is negative")]
    NegativeLength(i32),

    #[error("NBT value: {0}")]
    Proto(#[from] ProtoError),
}
