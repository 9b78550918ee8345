//! ItemStack type and its `NetworkItemStackDescriptor` encoding.
//!
//! Menus only ever send items to the client, so the stack is encode-only.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::{VarInt, VarUInt32};

/// A single item stack in the Bedrock protocol.
///
/// `runtime_id == 0` means the slot is empty (air).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStack {
    /// Item runtime ID from the StartGame item table. 0 = air/empty.
    pub runtime_id: i32,
    /// Number of items in this stack.
    pub count: u16,
    /// Item damage/variant metadata.
    pub metadata: u16,
    /// Block runtime ID if this item represents a placeable block.
    pub block_runtime_id: i32,
    /// Raw NBT data in network format (custom names, lore, enchantments).
    pub nbt_data: Vec<u8>,
    /// Server-assigned unique ID for inventory tracking. 0 = no ID.
    pub stack_network_id: i32,
}

impl ItemStack {
    /// An empty slot (air).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a simple item stack with no NBT or special data.
    pub fn new(runtime_id: i32, count: u16) -> Self {
        Self {
            runtime_id,
            count,
            ..Self::default()
        }
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.runtime_id == 0 || self.count == 0
    }
}

/// Encode as `NetworkItemStackDescriptor`.
///
/// ```text
/// VarInt(runtime_id)  — 0 = empty, return early
/// u16_le(count)
/// VarUInt32(metadata)
/// u8(has_stack_id) + optional VarInt(stack_network_id)
/// VarInt(block_runtime_id)
/// VarUInt32(user_data_marker) + optional NBT
/// VarInt(0) can_place_on, VarInt(0) can_destroy
/// ```
impl ProtoEncode for ItemStack {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        if self.is_empty() {
            VarInt(0).proto_encode(buf);
            return;
        }
        VarInt(self.runtime_id).proto_encode(buf);
        buf.put_u16_le(self.count);
        VarUInt32(self.metadata as u32).proto_encode(buf);

        if self.stack_network_id != 0 {
            buf.put_u8(1);
            VarInt(self.stack_network_id).proto_encode(buf);
        } else {
            buf.put_u8(0);
        }

        VarInt(self.block_runtime_id).proto_encode(buf);

        if self.nbt_data.is_empty() {
            VarUInt32(0).proto_encode(buf);
        } else {
            // 0xFFFFFFFF marker, then NBT version 1 (network format)
            VarUInt32(0xFFFF_FFFF).proto_encode(buf);
            buf.put_u8(1);
            buf.put_slice(&self.nbt_data);
        }

        VarInt(0).proto_encode(buf);
        VarInt(0).proto_encode(buf);
    }
}
