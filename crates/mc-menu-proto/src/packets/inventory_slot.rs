//! InventorySlot (0x32) — Server → Client.
//!
//! Updates a single slot in a window. Used to undo a client-side prediction
//! after a menu swallowed the change.

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::item_stack::ItemStack;
use crate::types::VarUInt32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySlot {
    pub window_id: u32,
    pub slot: u32,
    pub item: ItemStack,
}

impl ProtoEncode for InventorySlot {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt32(self.window_id).proto_encode(buf);
        VarUInt32(self.slot).proto_encode(buf);
        // FullContainerName
        buf.put_u8(0);
        VarUInt32(0).proto_encode(buf);
        // Storage item
        ItemStack::empty().proto_encode(buf);
        self.item.proto_encode(buf);
    }
}
