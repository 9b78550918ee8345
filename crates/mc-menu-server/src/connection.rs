//! A player connection that can host menus.

use bytes::{Buf, Bytes};
use mc_menu::{FakeContainer, MenuDriver, MenuSession, MenuViewer, SessionId, WindowIdAllocator};
use mc_menu_proto::codec::ProtoDecode;
use mc_menu_proto::error::ProtoError;
use mc_menu_proto::item_stack::ItemStack;
use mc_menu_proto::packets::{ContainerClose, GamePacket, InventorySlot, UpdateBlock};
use mc_menu_proto::types::{BlockPos, Rotation, Vec3};
use mc_menu_world::block::air_state;
use mc_menu_world::InventoryError;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{trace, warn};

/// Per-player connection state.
pub struct PlayerConnection {
    session_id: SessionId,
    name: String,
    /// Server-accepted player position.
    pub position: Vec3,
    pub rotation: Rotation,
    window_ids: WindowIdAllocator,
    fake_container: Option<FakeContainer>,
    /// Encoded sub-packets waiting for the batch writer.
    outbound: UnboundedSender<Bytes>,
    /// What the (empty) world holds wherever a fake block is removed.
    world_block: u32,
}

impl PlayerConnection {
    pub fn new(
        session_id: SessionId,
        name: impl Into<String>,
        position: Vec3,
        rotation: Rotation,
        outbound: UnboundedSender<Bytes>,
    ) -> Self {
        Self {
            session_id,
            name: name.into(),
            position,
            rotation,
            window_ids: WindowIdAllocator::new(),
            fake_container: None,
            outbound,
            world_block: air_state().runtime_id(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Movement update from the client.
    pub fn set_transform(&mut self, position: Vec3, rotation: Rotation) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Handle a ContainerClose body sent by the client.
    pub fn handle_container_close(
        &mut self,
        driver: &MenuDriver,
        buf: &mut impl Buf,
    ) -> Result<(), ProtoError> {
        let packet = ContainerClose::proto_decode(buf)?;
        if !driver.handle_client_close(self, packet.window_id) {
            trace!(
                "{} closed window {} with no menu behind it",
                self.name,
                packet.window_id
            );
        }
        // The client waits for the server to acknowledge the close.
        self.write_packet(
            ContainerClose {
                window_id: packet.window_id,
                server_initiated: false,
            }
            .into(),
        );
        Ok(())
    }

    /// The client put `stack` into `slot` of window `window_id`.
    ///
    /// Changes the window's inventory refuses are undone on the client.
    pub fn handle_slot_change(
        &mut self,
        window_id: u8,
        slot: usize,
        stack: ItemStack,
    ) -> Result<(), InventoryError> {
        let Some(container) = self
            .fake_container
            .as_ref()
            .filter(|c| c.window_id == window_id)
        else {
            warn!("{} changed slot {slot} of unknown window {window_id}", self.name);
            return Ok(());
        };
        let inventory = container.inventory.clone();
        if !inventory.apply_client_change(slot, stack)? {
            let item = inventory.item(slot)?;
            self.write_packet(
                InventorySlot {
                    window_id: u32::from(window_id),
                    slot: slot as u32,
                    item,
                }
                .into(),
            );
        }
        Ok(())
    }
}

impl MenuSession for PlayerConnection {
    fn id(&self) -> SessionId {
        self.session_id
    }

    fn viewer(&self) -> MenuViewer {
        MenuViewer::new(self.session_id, self.name.clone())
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn next_window_id(&mut self) -> u8 {
        self.window_ids.next()
    }

    fn write_packet(&mut self, packet: GamePacket) {
        trace!("-> {} {}", self.name, packet.name());
        if self.outbound.send(packet.encode_sub_packet()).is_err() {
            // Transport gone; the disconnect path cleans up.
            warn!("Dropped {} for {}: connection closed", packet.name(), self.name);
        }
    }

    fn open_fake_container(&mut self, container: FakeContainer) {
        self.fake_container = Some(container);
    }

    fn close_fake_container(&mut self) -> Option<FakeContainer> {
        self.fake_container.take()
    }

    fn fake_container(&self) -> Option<&FakeContainer> {
        self.fake_container.as_ref()
    }

    fn refresh_block(&mut self, pos: BlockPos) {
        self.write_packet(UpdateBlock::new(pos, self.world_block).into());
    }
}
