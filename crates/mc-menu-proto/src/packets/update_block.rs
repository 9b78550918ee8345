//! UpdateBlock (0x15) — Server → Client.
//!
//! Changes a single block as seen by one client. Menus use it to dress the
//! fake container position and to clear the block above it.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{BlockPos, VarUInt32};

/// UpdateBlock packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBlock {
    pub position: BlockPos,
    pub runtime_id: u32,
    pub flags: u32,
    pub layer: u32,
}

/// Flags: Neighbours (0x01) + Network (0x02).
pub const UPDATE_BLOCK_FLAGS_DEFAULT: u32 = 0x03;

impl UpdateBlock {
    /// Create an UpdateBlock for the default layer with standard flags.
    pub fn new(position: BlockPos, runtime_id: u32) -> Self {
        Self {
            position,
            runtime_id,
            flags: UPDATE_BLOCK_FLAGS_DEFAULT,
            layer: 0,
        }
    }
}

impl ProtoEncode for UpdateBlock {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        self.position.proto_encode(buf);
        VarUInt32(self.runtime_id).proto_encode(buf);
        VarUInt32(self.flags).proto_encode(buf);
        VarUInt32(self.layer).proto_encode(buf);
    }
}
