//! ContainerOpen (0x2E) — Server → Client.
//!
//! Opens a container window on the client.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{BlockPos, VarLong};

/// Container type codes understood by the client.
pub struct ContainerType;

impl ContainerType {
    /// Generic container: chests, barrels, shulker boxes.
    pub const CONTAINER: u8 = 0;
    pub const DROPPER: u8 = 7;
    pub const HOPPER: u8 = 8;
}

/// Opens a container window for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOpen {
    /// Window ID for this container session.
    pub window_id: u8,
    /// One of the [`ContainerType`] codes.
    pub container_type: u8,
    /// Position of the container block.
    pub position: BlockPos,
    /// Entity unique ID, -1 for block containers.
    pub entity_unique_id: i64,
}

impl ProtoEncode for ContainerOpen {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.window_id);
        buf.put_u8(self.container_type);
        self.position.proto_encode(buf);
        VarLong(self.entity_unique_id).proto_encode(buf);
    }
}
