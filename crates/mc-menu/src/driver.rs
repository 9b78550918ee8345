//! Drives the packet sequences that show, refresh and close a menu.
//!
//! Opening a menu writes, in order:
//!
//! ```text
//! UpdateBlock      fake position -> container block
//! UpdateBlock      one block above -> air
//! BlockActorData   {CustomName, id, x, y, z}
//! ContainerOpen    window id, container type, fake position
//! InventoryContent menu stacks
//! ```
//!
//! with the session's fake container switched over between the block entity
//! and the ContainerOpen. An update of a menu that is still open skips the
//! first three packets and reuses the window.

use std::sync::{Arc, OnceLock};

use mc_menu_nbt::to_network_bytes;
use mc_menu_proto::packets::{BlockActorData, ContainerClose, ContainerOpen};
use mc_menu_proto::types::BlockPos;
use mc_menu_world::block::air_state;
use mc_menu_world::Inventory;
use tracing::{debug, trace};

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::handler::MenuInterceptor;
use crate::menu::Menu;
use crate::session::{FakeContainer, MenuSession, MenuViewer, SessionId};
use crate::tracker::MenuTracker;

/// Entity id ContainerOpen carries for block-backed windows.
const NO_ENTITY: i64 = -1;

pub struct MenuDriver {
    tracker: Arc<MenuTracker>,
    config: MenuConfig,
    air_runtime_id: u32,
}

impl MenuDriver {
    pub fn new(tracker: Arc<MenuTracker>, config: MenuConfig) -> Self {
        Self {
            tracker,
            config,
            air_runtime_id: air_state().runtime_id(),
        }
    }

    /// The driver behind [`send_menu`], [`update_menu`] and [`close_menu`]:
    /// the global tracker with default settings.
    pub fn global() -> &'static MenuDriver {
        static GLOBAL: OnceLock<MenuDriver> = OnceLock::new();
        GLOBAL.get_or_init(|| MenuDriver::new(MenuTracker::global(), MenuConfig::default()))
    }

    pub fn tracker(&self) -> &Arc<MenuTracker> {
        &self.tracker
    }

    /// Show `menu` in a new window behind the player.
    ///
    /// A menu still open at another position is closed first. Returns the
    /// menu with its position and window id filled in.
    pub fn send_menu<S>(&self, session: &mut S, menu: Menu) -> Result<Menu, MenuError>
    where
        S: MenuSession + ?Sized,
    {
        self.show(session, menu, false)
    }

    /// Replace the contents of the open menu without moving it.
    ///
    /// Falls back to [`send_menu`](Self::send_menu) when the session has no
    /// open menu or the open one is a different container kind.
    pub fn update_menu<S>(&self, session: &mut S, menu: Menu) -> Result<Menu, MenuError>
    where
        S: MenuSession + ?Sized,
    {
        self.show(session, menu, true)
    }

    /// Close the session's open menu from the server side.
    ///
    /// Returns false if nothing was open.
    pub fn close_menu<S>(&self, session: &mut S) -> bool
    where
        S: MenuSession + ?Sized,
    {
        let Some(menu) = self.tracker.mark_closed(session.id()) else {
            return false;
        };
        let viewer = session.viewer();
        session.close_fake_container();
        if let Some(window_id) = menu.window_id() {
            session.write_packet(
                ContainerClose {
                    window_id,
                    server_initiated: true,
                }
                .into(),
            );
        }
        self.abandon_block(session, &menu);
        debug!("Closed menu {:?} for {}", menu.name(), viewer.name);
        menu.notify_close(&viewer);
        true
    }

    /// The client closed window `window_id`.
    ///
    /// Returns whether that window was the session's open menu.
    pub fn handle_client_close<S>(&self, session: &mut S, window_id: u8) -> bool
    where
        S: MenuSession + ?Sized,
    {
        let id = session.id();
        let is_menu_window = self
            .tracker
            .get(id)
            .is_some_and(|t| t.open && t.menu.window_id() == Some(window_id));
        if !is_menu_window {
            trace!("{id} closed window {window_id}, not a menu");
            return false;
        }
        let Some(menu) = self.tracker.mark_closed(id) else {
            return false;
        };
        let viewer = session.viewer();
        session.close_fake_container();
        self.abandon_block(session, &menu);
        debug!("{} closed menu {:?}", viewer.name, menu.name());
        menu.notify_close(&viewer);
        true
    }

    /// Drop whatever is tracked for a disconnected session.
    pub fn forget_session(&self, id: SessionId) -> bool {
        let removed = self.tracker.remove(id).is_some();
        if removed {
            trace!("Forgot menu state of {id}");
        }
        removed
    }

    /// Where a new fake container goes: `distance` blocks behind the player.
    pub fn fake_position<S>(&self, session: &S) -> BlockPos
    where
        S: MenuSession + ?Sized,
    {
        let offset = session.rotation().direction() * -self.config.distance;
        BlockPos::from_vec3(&(session.position() + offset))
    }

    fn show<S>(&self, session: &mut S, menu: Menu, update: bool) -> Result<Menu, MenuError>
    where
        S: MenuSession + ?Sized,
    {
        menu.check_capacity()?;
        let viewer = session.viewer();
        let previous = self
            .tracker
            .get(session.id())
            .filter(|t| t.open)
            .map(|t| t.menu);

        let reused = if update {
            previous
                .as_ref()
                .filter(|p| p.kind() == menu.kind())
                .and_then(|p| p.position().zip(p.window_id()))
        } else {
            None
        };

        let (position, window_id) = match reused {
            Some((position, window_id)) => {
                debug!(
                    "Updating menu {:?} for {} in window {window_id}",
                    menu.name(),
                    viewer.name
                );
                (position, window_id)
            }
            None => {
                let position = self.fake_position(session);
                if let Some(previous) = &previous {
                    if previous.position() != Some(position) {
                        self.supersede(session, previous, &viewer);
                    }
                }
                let window_id = session.next_window_id();
                debug!(
                    "Opening {} menu {:?} for {} at {position} in window {window_id}",
                    menu.kind(),
                    menu.name(),
                    viewer.name
                );
                self.place_block(session, &menu, position);
                (position, window_id)
            }
        };

        let inventory = Arc::new(self.build_inventory(&menu, viewer)?);
        session.open_fake_container(FakeContainer {
            position,
            window_id,
            inventory: inventory.clone(),
        });
        session.write_packet(
            ContainerOpen {
                window_id,
                container_type: menu.kind().protocol_type(),
                position,
                entity_unique_id: NO_ENTITY,
            }
            .into(),
        );
        session.push_inventory(&inventory, window_id);

        let menu = menu.opened_at(position, window_id);
        self.tracker.set(session.id(), menu.clone());
        Ok(menu)
    }

    fn supersede<S>(&self, session: &mut S, previous: &Menu, viewer: &MenuViewer)
    where
        S: MenuSession + ?Sized,
    {
        debug!("Menu {:?} superseded for {}", previous.name(), viewer.name);
        previous.notify_close(viewer);
        if self.config.send_close_packet {
            if let Some(window_id) = previous.window_id() {
                session.write_packet(
                    ContainerClose {
                        window_id,
                        server_initiated: true,
                    }
                    .into(),
                );
            }
        }
        self.abandon_block(session, previous);
    }

    fn place_block<S>(&self, session: &mut S, menu: &Menu, position: BlockPos)
    where
        S: MenuSession + ?Sized,
    {
        session.view_block_update(position, menu.kind().visual_runtime_id());
        session.view_block_update(position.up(1), self.air_runtime_id);
        session.write_packet(
            BlockActorData {
                position,
                nbt_data: to_network_bytes(menu.block_entity_nbt(position)),
            }
            .into(),
        );
    }

    fn abandon_block<S>(&self, session: &mut S, menu: &Menu)
    where
        S: MenuSession + ?Sized,
    {
        if let Some(position) = menu.position() {
            session.refresh_block(position);
            session.refresh_block(position.up(1));
        }
    }

    /// A fresh inventory holding the menu's stacks. Client changes to it are
    /// cancelled and submitted.
    fn build_inventory(&self, menu: &Menu, viewer: MenuViewer) -> Result<Inventory, MenuError> {
        let inventory = Inventory::nop(menu.items().len());
        inventory.set_handler(Arc::new(MenuInterceptor::new(
            viewer,
            menu.submittable().clone(),
        )));
        for (slot, stack) in menu.items().iter().enumerate() {
            inventory.set_item(slot, stack.clone())?;
        }
        Ok(inventory)
    }
}

/// Open `menu` for `session` through the global driver.
pub fn send_menu<S>(session: &mut S, menu: Menu) -> Result<Menu, MenuError>
where
    S: MenuSession + ?Sized,
{
    MenuDriver::global().send_menu(session, menu)
}

/// Update the open menu of `session` through the global driver.
pub fn update_menu<S>(session: &mut S, menu: Menu) -> Result<Menu, MenuError>
where
    S: MenuSession + ?Sized,
{
    MenuDriver::global().update_menu(session, menu)
}

/// Close the open menu of `session` through the global driver.
pub fn close_menu<S>(session: &mut S) -> bool
where
    S: MenuSession + ?Sized,
{
    MenuDriver::global().close_menu(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ContainerKind;
    use crate::testutil::{EventLog, RecordingSession, RecordingSubmittable};
    use mc_menu_nbt::read_nbt_network;
    use mc_menu_proto::item_stack::ItemStack;
    use mc_menu_proto::packets::{GamePacket, InventoryContent, UpdateBlock};
    use mc_menu_proto::types::{Rotation, Vec3};

    fn driver() -> MenuDriver {
        MenuDriver::new(Arc::new(MenuTracker::new()), MenuConfig::default())
    }

    /// Player standing at (10.5, 5, 12.5) looking along +Z.
    fn player() -> RecordingSession {
        RecordingSession::new(
            1,
            "P",
            Vec3::new(10.5, 5.0, 12.5),
            Rotation::new(0.0, 0.0),
        )
    }

    const OPEN_SEQUENCE: [&str; 5] = [
        "UpdateBlock",
        "UpdateBlock",
        "BlockActorData",
        "ContainerOpen",
        "InventoryContent",
    ];

    #[test]
    fn fake_position_is_behind_the_player() {
        let d = driver();
        let mut p = player();
        assert_eq!(d.fake_position(&p), BlockPos::new(10, 5, 10));
        p.rotation = Rotation::new(180.0, 0.0);
        assert_eq!(d.fake_position(&p), BlockPos::new(10, 5, 14));
        p.rotation = Rotation::new(0.0, 90.0);
        assert_eq!(d.fake_position(&p), BlockPos::new(10, 7, 12));
    }

    #[test]
    fn fake_position_honours_distance() {
        let d = MenuDriver::new(
            Arc::new(MenuTracker::new()),
            MenuConfig {
                distance: 4.0,
                ..MenuConfig::default()
            },
        );
        assert_eq!(d.fake_position(&player()), BlockPos::new(10, 5, 8));
    }

    #[test]
    fn open_writes_five_packets_in_order() {
        let d = driver();
        let mut p = player();
        let submittable = RecordingSubmittable::new();
        let menu = Menu::new(submittable, "Loot", ContainerKind::Chest);

        let opened = d.send_menu(&mut p, menu).unwrap();
        assert_eq!(p.packet_names(), OPEN_SEQUENCE);

        let pos = BlockPos::new(10, 5, 10);
        assert_eq!(opened.position(), Some(pos));
        assert_eq!(opened.window_id(), Some(1));

        let packets = p.take_packets();
        assert_eq!(
            packets[0],
            GamePacket::UpdateBlock(UpdateBlock::new(
                pos,
                ContainerKind::Chest.visual_runtime_id()
            ))
        );
        assert_eq!(
            packets[1],
            GamePacket::UpdateBlock(UpdateBlock::new(pos.up(1), air_state().runtime_id()))
        );
        let GamePacket::BlockActorData(actor) = &packets[2] else {
            panic!("expected BlockActorData, got {:?}", packets[2]);
        };
        assert_eq!(actor.position, pos);
        let root = read_nbt_network(&mut actor.nbt_data.as_slice()).unwrap();
        assert_eq!(root.compound["CustomName"].as_string(), Some("Loot"));
        assert_eq!(root.compound["id"].as_string(), Some("Chest"));
        assert_eq!(root.compound["x"].as_int(), Some(10));
        assert_eq!(root.compound["y"].as_int(), Some(5));
        assert_eq!(root.compound["z"].as_int(), Some(10));
        assert_eq!(
            packets[3],
            GamePacket::ContainerOpen(ContainerOpen {
                window_id: 1,
                container_type: 0,
                position: pos,
                entity_unique_id: -1,
            })
        );
        assert_eq!(
            packets[4],
            GamePacket::InventoryContent(InventoryContent {
                window_id: 1,
                items: Vec::new(),
            })
        );
    }

    #[test]
    fn open_points_session_at_new_container() {
        let d = driver();
        let mut p = player();
        let menu = Menu::new(RecordingSubmittable::new(), "Loot", ContainerKind::Hopper)
            .with_stacks(vec![ItemStack::new(3, 1), ItemStack::new(4, 2)]);
        d.send_menu(&mut p, menu).unwrap();

        let container = p.fake_container().unwrap();
        assert_eq!(container.position, BlockPos::new(10, 5, 10));
        assert_eq!(container.window_id, 1);
        assert_eq!(container.inventory.size(), 2);
        assert_eq!(container.inventory.item(1).unwrap(), ItemStack::new(4, 2));
        assert!(container.inventory.has_handler());
    }

    #[test]
    fn open_tracks_the_positioned_menu() {
        let d = driver();
        let mut p = player();
        let menu = Menu::new(RecordingSubmittable::new(), "Loot", ContainerKind::Chest);
        d.send_menu(&mut p, menu).unwrap();
        let tracked = d.tracker().get(p.id).unwrap();
        assert!(tracked.open);
        assert_eq!(tracked.menu.position(), Some(BlockPos::new(10, 5, 10)));
        assert_eq!(tracked.menu.window_id(), Some(1));
    }

    #[test]
    fn container_type_follows_kind() {
        for kind in ContainerKind::ALL {
            let d = driver();
            let mut p = player();
            d.send_menu(&mut p, Menu::new(RecordingSubmittable::new(), "K", kind))
                .unwrap();
            let open = p
                .packets
                .iter()
                .find_map(|pk| match pk {
                    GamePacket::ContainerOpen(o) => Some(o.clone()),
                    _ => None,
                })
                .unwrap();
            assert_eq!(open.container_type, kind.protocol_type());
        }
    }

    #[test]
    fn update_reuses_window_and_skips_visuals() {
        let d = driver();
        let mut p = player();
        let submittable = RecordingSubmittable::closable();
        let m1 = Menu::new(submittable.clone(), "Loot", ContainerKind::Chest);
        let opened = d.send_menu(&mut p, m1.clone()).unwrap();
        p.take_packets();

        // The player may have moved; the menu stays where it was.
        p.rotation = Rotation::new(90.0, 0.0);
        let stacks = vec![ItemStack::new(7, 1), ItemStack::new(8, 16)];
        let updated = d
            .update_menu(&mut p, m1.with_stacks(stacks.clone()))
            .unwrap();

        assert_eq!(p.packet_names(), ["ContainerOpen", "InventoryContent"]);
        assert_eq!(updated.position(), opened.position());
        assert_eq!(updated.window_id(), opened.window_id());
        assert_eq!(
            p.packets[1],
            GamePacket::InventoryContent(InventoryContent {
                window_id: 1,
                items: stacks,
            })
        );
        assert!(submittable.closes().is_empty());
        assert_eq!(p.fake_container().unwrap().inventory.size(), 2);
    }

    #[test]
    fn update_without_open_menu_opens() {
        let d = driver();
        let mut p = player();
        let menu = Menu::new(RecordingSubmittable::new(), "Loot", ContainerKind::Chest);
        let opened = d.update_menu(&mut p, menu).unwrap();
        assert_eq!(p.packet_names(), OPEN_SEQUENCE);
        assert_eq!(opened.window_id(), Some(1));
    }

    #[test]
    fn update_after_client_close_opens_again() {
        let d = driver();
        let mut p = player();
        let menu = Menu::new(RecordingSubmittable::new(), "Loot", ContainerKind::Chest);
        d.send_menu(&mut p, menu.clone()).unwrap();
        assert!(d.handle_client_close(&mut p, 1));
        p.take_packets();

        let reopened = d.update_menu(&mut p, menu).unwrap();
        assert_eq!(p.packet_names(), OPEN_SEQUENCE);
        assert_eq!(reopened.window_id(), Some(2));
    }

    #[test]
    fn update_with_other_kind_opens() {
        let d = driver();
        let mut p = player();
        d.send_menu(
            &mut p,
            Menu::new(RecordingSubmittable::new(), "A", ContainerKind::Chest),
        )
        .unwrap();
        p.take_packets();
        let updated = d
            .update_menu(
                &mut p,
                Menu::new(RecordingSubmittable::new(), "B", ContainerKind::Hopper),
            )
            .unwrap();
        assert_eq!(p.packet_names(), OPEN_SEQUENCE);
        assert_eq!(updated.window_id(), Some(2));
    }

    #[test]
    fn reopening_elsewhere_closes_previous_once() {
        let d = driver();
        let mut p = player();
        let log = EventLog::default();
        let handler_a = RecordingSubmittable::logged(log.clone());
        let handler_b = RecordingSubmittable::closable();
        let stack_x = ItemStack::new(1, 1);
        let m1 = Menu::new(handler_a.clone(), "Loot", ContainerKind::Chest)
            .with_stacks(vec![stack_x.clone()]);
        let m1 = d.send_menu(&mut p, m1).unwrap();
        assert_eq!(
            p.packets[4],
            GamePacket::InventoryContent(InventoryContent {
                window_id: 1,
                items: vec![stack_x],
            })
        );
        p.take_packets();

        p.log = Some(log.clone());
        p.rotation = Rotation::new(180.0, 0.0);
        let m2 = Menu::new(handler_b.clone(), "Output", ContainerKind::Hopper);
        let m2 = d.send_menu(&mut p, m2).unwrap();

        // The close lands before the first packet of the new menu.
        let mut expected = vec!["Close".to_string()];
        expected.extend(OPEN_SEQUENCE.iter().map(|name| name.to_string()));
        assert_eq!(log.events(), expected);

        assert_eq!(handler_a.closes(), vec![p.viewer()]);
        assert!(handler_b.closes().is_empty());
        assert_eq!(p.packet_names(), OPEN_SEQUENCE);
        assert_eq!(m2.position(), Some(BlockPos::new(10, 5, 14)));
        assert_ne!(m2.window_id(), m1.window_id());
        assert_eq!(m2.window_id(), Some(2));
        assert_eq!(
            p.refreshed,
            vec![BlockPos::new(10, 5, 10), BlockPos::new(10, 6, 10)]
        );
        let GamePacket::ContainerOpen(open) = &p.packets[3] else {
            panic!("expected ContainerOpen");
        };
        assert_eq!(open.container_type, 8);
    }

    #[test]
    fn reopening_at_same_position_does_not_close() {
        let d = driver();
        let mut p = player();
        let handler_a = RecordingSubmittable::closable();
        d.send_menu(&mut p, Menu::new(handler_a.clone(), "A", ContainerKind::Chest))
            .unwrap();
        p.take_packets();
        let again = d
            .send_menu(&mut p, Menu::new(handler_a.clone(), "A", ContainerKind::Chest))
            .unwrap();
        assert!(handler_a.closes().is_empty());
        assert_eq!(p.packet_names(), OPEN_SEQUENCE);
        assert_eq!(again.window_id(), Some(2));
    }

    #[test]
    fn supersede_without_closer_is_silent() {
        let d = driver();
        let mut p = player();
        d.send_menu(
            &mut p,
            Menu::new(RecordingSubmittable::new(), "A", ContainerKind::Chest),
        )
        .unwrap();
        p.rotation = Rotation::new(180.0, 0.0);
        p.take_packets();
        d.send_menu(
            &mut p,
            Menu::new(RecordingSubmittable::new(), "B", ContainerKind::Chest),
        )
        .unwrap();
        assert_eq!(p.packet_names(), OPEN_SEQUENCE);
    }

    #[test]
    fn supersede_can_send_close_packet() {
        let d = MenuDriver::new(
            Arc::new(MenuTracker::new()),
            MenuConfig {
                send_close_packet: true,
                ..MenuConfig::default()
            },
        );
        let mut p = player();
        d.send_menu(
            &mut p,
            Menu::new(RecordingSubmittable::new(), "A", ContainerKind::Chest),
        )
        .unwrap();
        p.rotation = Rotation::new(180.0, 0.0);
        p.take_packets();
        d.send_menu(
            &mut p,
            Menu::new(RecordingSubmittable::new(), "B", ContainerKind::Chest),
        )
        .unwrap();
        assert_eq!(p.packet_names()[0], "ContainerClose");
        assert_eq!(
            p.packets[0],
            GamePacket::ContainerClose(ContainerClose {
                window_id: 1,
                server_initiated: true,
            })
        );
        assert_eq!(&p.packet_names()[1..], OPEN_SEQUENCE);
    }

    #[test]
    fn taking_from_menu_submits_displayed_stack() {
        let d = driver();
        let mut p = player();
        let handler = RecordingSubmittable::new();
        let menu = Menu::new(handler.clone(), "Loot", ContainerKind::Chest)
            .with_stacks(vec![ItemStack::new(5, 1)]);
        d.send_menu(&mut p, menu).unwrap();
        assert!(handler.submits().is_empty());

        let inventory = p.fake_container().unwrap().inventory.clone();
        let stored = inventory.apply_client_change(0, ItemStack::empty()).unwrap();
        assert!(!stored);
        assert_eq!(inventory.item(0).unwrap(), ItemStack::new(5, 1));
        assert_eq!(handler.submits(), vec![(p.viewer(), ItemStack::new(5, 1))]);
    }

    #[test]
    fn too_many_items_writes_nothing() {
        let d = driver();
        let mut p = player();
        let menu = Menu::new(RecordingSubmittable::new(), "H", ContainerKind::Hopper)
            .with_stacks(vec![ItemStack::new(1, 1); 6]);
        let err = d.send_menu(&mut p, menu).unwrap_err();
        assert!(matches!(
            err,
            MenuError::TooManyItems {
                kind: ContainerKind::Hopper,
                count: 6,
                capacity: 5
            }
        ));
        assert!(p.packets.is_empty());
        assert!(p.fake_container().is_none());
        assert!(d.tracker().get(p.id).is_none());
    }

    #[test]
    fn client_close_of_menu_window() {
        let d = driver();
        let mut p = player();
        let handler = RecordingSubmittable::closable();
        d.send_menu(&mut p, Menu::new(handler.clone(), "Loot", ContainerKind::Chest))
            .unwrap();
        p.take_packets();

        assert!(!d.handle_client_close(&mut p, 42));
        assert!(p.fake_container().is_some());

        assert!(d.handle_client_close(&mut p, 1));
        assert!(p.fake_container().is_none());
        assert!(!d.tracker().get(p.id).unwrap().open);
        assert_eq!(handler.closes(), vec![p.viewer()]);
        assert!(p.packets.is_empty());

        // A second close, or a supersede, does not notify again.
        assert!(!d.handle_client_close(&mut p, 1));
        p.rotation = Rotation::new(180.0, 0.0);
        d.send_menu(&mut p, Menu::new(handler.clone(), "B", ContainerKind::Chest))
            .unwrap();
        assert_eq!(handler.closes().len(), 1);
    }

    #[test]
    fn server_close() {
        let d = driver();
        let mut p = player();
        let handler = RecordingSubmittable::closable();
        assert!(!d.close_menu(&mut p));

        d.send_menu(&mut p, Menu::new(handler.clone(), "Loot", ContainerKind::Chest))
            .unwrap();
        p.take_packets();
        assert!(d.close_menu(&mut p));
        assert_eq!(
            p.packets,
            vec![GamePacket::ContainerClose(ContainerClose {
                window_id: 1,
                server_initiated: true,
            })]
        );
        assert!(p.fake_container().is_none());
        assert_eq!(handler.closes().len(), 1);
        assert!(!d.close_menu(&mut p));
        assert_eq!(handler.closes().len(), 1);
    }

    #[test]
    fn forget_session_drops_tracking() {
        let d = driver();
        let mut p = player();
        d.send_menu(
            &mut p,
            Menu::new(RecordingSubmittable::new(), "Loot", ContainerKind::Chest),
        )
        .unwrap();
        assert!(d.forget_session(p.id));
        assert!(d.tracker().is_empty());
        assert!(!d.forget_session(p.id));
    }

    #[test]
    fn sessions_are_independent() {
        let d = driver();
        let mut p = player();
        let mut q = RecordingSession::new(2, "Q", Vec3::new(0.5, 64.0, 0.5), Rotation::default());
        let handler = RecordingSubmittable::closable();
        d.send_menu(&mut p, Menu::new(handler.clone(), "A", ContainerKind::Chest))
            .unwrap();
        let opened_q = d
            .send_menu(&mut q, Menu::new(handler.clone(), "B", ContainerKind::Dropper))
            .unwrap();
        assert!(handler.closes().is_empty());
        assert_eq!(opened_q.window_id(), Some(1));
        assert_eq!(opened_q.position(), Some(BlockPos::new(0, 64, -2)));
        assert_eq!(d.tracker().len(), 2);
    }

    #[test]
    fn free_functions_use_global_tracker() {
        let mut p = RecordingSession::new(
            u64::MAX - 7,
            "Global",
            Vec3::new(0.5, 0.0, 0.5),
            Rotation::default(),
        );
        let handler = RecordingSubmittable::closable();
        send_menu(&mut p, Menu::new(handler.clone(), "G", ContainerKind::Chest)).unwrap();
        assert!(MenuTracker::global().get(p.id).is_some());
        update_menu(&mut p, Menu::new(handler.clone(), "G", ContainerKind::Chest)).unwrap();
        assert!(close_menu(&mut p));
        assert_eq!(handler.closes().len(), 1);
        assert!(MenuDriver::global().forget_session(p.id));
    }
}
