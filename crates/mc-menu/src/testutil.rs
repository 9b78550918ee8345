//! Recording doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use mc_menu_proto::item_stack::ItemStack;
use mc_menu_proto::packets::GamePacket;
use mc_menu_proto::types::{BlockPos, Rotation, Vec3};

use crate::menu::{Closer, Submittable};
use crate::session::{FakeContainer, MenuSession, MenuViewer, SessionId, WindowIdAllocator};

/// Ordered record of packets and callbacks shared between doubles.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct RecordingSubmittable {
    closable: bool,
    log: Option<EventLog>,
    submits: Mutex<Vec<(MenuViewer, ItemStack)>>,
    closes: Mutex<Vec<MenuViewer>>,
}

impl RecordingSubmittable {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A submittable that also wants close notifications.
    pub fn closable() -> Arc<Self> {
        Arc::new(Self {
            closable: true,
            ..Self::default()
        })
    }

    /// A closable submittable that also writes `Close` into `log`.
    pub fn logged(log: EventLog) -> Arc<Self> {
        Arc::new(Self {
            closable: true,
            log: Some(log),
            ..Self::default()
        })
    }

    pub fn submits(&self) -> Vec<(MenuViewer, ItemStack)> {
        self.submits.lock().unwrap().clone()
    }

    pub fn closes(&self) -> Vec<MenuViewer> {
        self.closes.lock().unwrap().clone()
    }
}

impl Submittable for RecordingSubmittable {
    fn submit(&self, player: &MenuViewer, item: ItemStack) {
        self.submits.lock().unwrap().push((player.clone(), item));
    }

    fn closer(&self) -> Option<&dyn Closer> {
        if self.closable {
            Some(self)
        } else {
            None
        }
    }
}

impl Closer for RecordingSubmittable {
    fn close(&self, player: &MenuViewer) {
        self.closes.lock().unwrap().push(player.clone());
        if let Some(log) = &self.log {
            log.push("Close");
        }
    }
}

/// A session that records every packet written to it.
pub struct RecordingSession {
    pub id: SessionId,
    pub name: String,
    pub position: Vec3,
    pub rotation: Rotation,
    pub packets: Vec<GamePacket>,
    pub refreshed: Vec<BlockPos>,
    /// When set, packet names are also written here.
    pub log: Option<EventLog>,
    container: Option<FakeContainer>,
    window_ids: WindowIdAllocator,
}

impl RecordingSession {
    pub fn new(id: u64, name: &str, position: Vec3, rotation: Rotation) -> Self {
        Self {
            id: SessionId(id),
            name: name.to_string(),
            position,
            rotation,
            packets: Vec::new(),
            refreshed: Vec::new(),
            log: None,
            container: None,
            window_ids: WindowIdAllocator::new(),
        }
    }

    pub fn take_packets(&mut self) -> Vec<GamePacket> {
        std::mem::take(&mut self.packets)
    }

    pub fn packet_names(&self) -> Vec<&'static str> {
        self.packets.iter().map(GamePacket::name).collect()
    }
}

impl MenuSession for RecordingSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn viewer(&self) -> MenuViewer {
        MenuViewer::new(self.id, self.name.clone())
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
        if let Some(log) = &self.log {
            log.push(packet.name());
        }
        self.packets.push(packet);
    }

    fn open_fake_container(&mut self, container: FakeContainer) {
        self.container = Some(container);
    }

    fn close_fake_container(&mut self) -> Option<FakeContainer> {
        self.container.take()
    }

    fn fake_container(&self) -> Option<&FakeContainer> {
        self.container.as_ref()
    }

    fn refresh_block(&mut self, pos: BlockPos) {
        self.refreshed.push(pos);
    }
}
