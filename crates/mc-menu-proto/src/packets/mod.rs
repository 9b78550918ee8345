//! Clientbound game packets used to simulate a container window.

pub mod block_actor_data;
pub mod container_close;
pub mod container_open;
pub mod inventory_content;
pub mod inventory_slot;
pub mod update_block;

pub use block_actor_data::BlockActorData;
pub use container_close::ContainerClose;
pub use container_open::{ContainerOpen, ContainerType};
pub use inventory_content::InventoryContent;
pub use inventory_slot::InventorySlot;
pub use update_block::UpdateBlock;

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::ProtoEncode;
use crate::types::VarUInt32;

/// Game packet IDs.
pub mod id {
    pub const UPDATE_BLOCK: u32 = 0x15;
    pub const CONTAINER_OPEN: u32 = 0x2E;
    pub const CONTAINER_CLOSE: u32 = 0x2F;
    pub const INVENTORY_CONTENT: u32 = 0x31;
    pub const INVENTORY_SLOT: u32 = 0x32;
    pub const BLOCK_ACTOR_DATA: u32 = 0x38;
}

/// Any packet a menu session can put on the wire.
///
/// Sessions receive packets through this enum so that the transport can be
/// a trait object while encoding stays static.
#[derive(Debug, Clone, PartialEq)]
pub enum GamePacket {
    UpdateBlock(UpdateBlock),
    BlockActorData(BlockActorData),
    ContainerOpen(ContainerOpen),
    ContainerClose(ContainerClose),
    InventoryContent(InventoryContent),
    InventorySlot(InventorySlot),
}

impl GamePacket {
    pub fn id(&self) -> u32 {
        match self {
            GamePacket::UpdateBlock(_) => id::UPDATE_BLOCK,
            GamePacket::BlockActorData(_) => id::BLOCK_ACTOR_DATA,
            GamePacket::ContainerOpen(_) => id::CONTAINER_OPEN,
            GamePacket::ContainerClose(_) => id::CONTAINER_CLOSE,
            GamePacket::InventoryContent(_) => id::INVENTORY_CONTENT,
            GamePacket::InventorySlot(_) => id::INVENTORY_SLOT,
        }
    }

    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            GamePacket::UpdateBlock(_) => "UpdateBlock",
            GamePacket::BlockActorData(_) => "BlockActorData",
            GamePacket::ContainerOpen(_) => "ContainerOpen",
            GamePacket::ContainerClose(_) => "ContainerClose",
            GamePacket::InventoryContent(_) => "InventoryContent",
            GamePacket::InventorySlot(_) => "InventorySlot",
        }
    }

    /// Encode as a batch sub-packet: VarUInt32(id) followed by the body.
    pub fn encode_sub_packet(&self) -> Bytes {
        let mut buf = BytesMut::new();
        VarUInt32(self.id()).proto_encode(&mut buf);
        self.proto_encode(&mut buf);
        buf.freeze()
    }
}

impl ProtoEncode for GamePacket {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        match self {
            GamePacket::UpdateBlock(p) => p.proto_encode(buf),
            GamePacket::BlockActorData(p) => p.proto_encode(buf),
            GamePacket::ContainerOpen(p) => p.proto_encode(buf),
            GamePacket::ContainerClose(p) => p.proto_encode(buf),
            GamePacket::InventoryContent(p) => p.proto_encode(buf),
            GamePacket::InventorySlot(p) => p.proto_encode(buf),
        }
    }
}

macro_rules! impl_from_packet {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for GamePacket {
                fn from(p: $variant) -> Self {
                    GamePacket::$variant(p)
                }
            }
        )*
    };
}

impl_from_packet!(
    UpdateBlock,
    BlockActorData,
    ContainerOpen,
    ContainerClose,
    InventoryContent,
    InventorySlot,
);
