//! What a menu needs from a player's connection.

use std::fmt;
use std::sync::Arc;

use mc_menu_proto::packets::{GamePacket, InventoryContent, UpdateBlock};
use mc_menu_proto::types::{BlockPos, Rotation, Vec3};
use mc_menu_world::Inventory;

/// Identity of a player session. Menus are tracked per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// The player a submission or close is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuViewer {
    pub session: SessionId,
    pub name: String,
}

impl MenuViewer {
    pub fn new(session: SessionId, name: impl Into<String>) -> Self {
        Self {
            session,
            name: name.into(),
        }
    }
}

/// The container window a session currently shows for a menu.
#[derive(Debug, Clone)]
pub struct FakeContainer {
    pub position: BlockPos,
    pub window_id: u8,
    pub inventory: Arc<Inventory>,
}

/// Connection state the menu driver reads and writes.
///
/// The driver takes `&mut` to a session for the whole of an open, update or
/// close, so operations on one session never interleave.
pub trait MenuSession {
    fn id(&self) -> SessionId;

    fn viewer(&self) -> MenuViewer;

    /// Player position, eye level not applied.
    fn position(&self) -> Vec3;

    fn rotation(&self) -> Rotation;

    /// Allocate the id for a newly opened window.
    fn next_window_id(&mut self) -> u8;

    fn write_packet(&mut self, packet: GamePacket);

    /// Show `runtime_id` at `pos` to this player only.
    fn view_block_update(&mut self, pos: BlockPos, runtime_id: u32) {
        self.write_packet(UpdateBlock::new(pos, runtime_id).into());
    }

    /// Make `container` the window client slot changes are routed to.
    fn open_fake_container(&mut self, container: FakeContainer);

    /// Drop the current fake container, returning it.
    fn close_fake_container(&mut self) -> Option<FakeContainer>;

    fn fake_container(&self) -> Option<&FakeContainer>;

    /// Send the full contents of `inventory` as window `window_id`.
    fn push_inventory(&mut self, inventory: &Inventory, window_id: u8) {
        self.write_packet(
            InventoryContent {
                window_id: u32::from(window_id),
                items: inventory.items(),
            }
            .into(),
        );
    }

    /// Resend whatever the world really has at `pos` after a fake block is
    /// abandoned. Sessions without a world view leave the fake block shown.
    fn refresh_block(&mut self, _pos: BlockPos) {}
}

/// Hands out window ids in `1..=99`, wrapping back to 1.
#[derive(Debug, Clone, Default)]
pub struct WindowIdAllocator {
    last: u8,
}

impl WindowIdAllocator {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 99;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u8 {
        self.last = if self.last >= Self::LAST {
            Self::FIRST
        } else {
            self.last + 1
        };
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_ids_start_at_one() {
        let mut ids = WindowIdAllocator::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
    }

    #[test]
    fn window_ids_wrap_after_99() {
        let mut ids = WindowIdAllocator::new();
        let first: Vec<u8> = (0..99).map(|_| ids.next()).collect();
        assert_eq!(first.first(), Some(&1));
        assert_eq!(first.last(), Some(&99));
        assert_eq!(ids.next(), 1);
    }

    #[test]
    fn session_id_display() {
        assert_eq!(SessionId(7).to_string(), "session#7");
    }
}
