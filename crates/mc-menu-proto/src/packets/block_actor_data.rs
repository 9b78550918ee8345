//! BlockActorData (0x38) — Server → Client.
//!
//! Carries block entity NBT for a position. A menu sends one so the client
//! treats the fake block as a named container.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::BlockPos;

/// Block entity data packet carrying raw network NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockActorData {
    /// Position of the block entity.
    pub position: BlockPos,
    /// Network NBT bytes, already encoded.
    pub nbt_data: Vec<u8>,
}

impl ProtoEncode for BlockActorData {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        self.position.proto_encode(buf);
        buf.put_slice(&self.nbt_data);
    }
}
