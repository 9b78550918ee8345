//! Container implementations for the hopper and dropper states.
//!
//! A fake container can only be opened on a block the registry treats as a
//! container. Chests already are one; hoppers and dropper states usually
//! arrive as bare placeholders, so menus install inert implementations for
//! them at startup.

use std::sync::Arc;

use mc_menu_proto::types::BlockPos;
use mc_menu_world::block::{dropper_state, hopper_state};
use mc_menu_world::{Block, BlockRegistry, BlockState, Container, Inventory};
use tracing::{debug, info};

/// Implementation hash of [`MenuHopper`].
pub const MENU_HOPPER_HASH: u64 = 932_473;
/// Implementation hash of [`MenuDropper`].
pub const MENU_DROPPER_HASH: u64 = 932_472;

/// Slot count of the inventory a menu block reports. Never read by menus.
const INERT_INVENTORY_SIZE: usize = 69;

/// Container behaviour that tracks nothing and stores nothing.
#[derive(Debug, Default)]
struct InertContainer;

impl Container for InertContainer {
    fn add_viewer(&self, _viewer: u64, _pos: BlockPos) {}

    fn remove_viewer(&self, _viewer: u64, _pos: BlockPos) {}

    fn inventory(&self) -> Arc<Inventory> {
        Arc::new(Inventory::nop(INERT_INVENTORY_SIZE))
    }
}

#[derive(Debug, Default)]
pub struct MenuHopper {
    container: InertContainer,
}

impl Block for MenuHopper {
    fn encode_block(&self) -> BlockState {
        hopper_state()
    }

    fn hash(&self) -> u64 {
        MENU_HOPPER_HASH
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(&self.container)
    }
}

#[derive(Debug, Default)]
pub struct MenuDropper {
    container: InertContainer,
}

impl Block for MenuDropper {
    fn encode_block(&self) -> BlockState {
        dropper_state()
    }

    fn hash(&self) -> u64 {
        MENU_DROPPER_HASH
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(&self.container)
    }
}

/// Install [`MenuHopper`] and [`MenuDropper`] where no real implementation
/// exists yet. Returns how many were installed.
///
/// Safe to call more than once; later calls install nothing.
pub fn register_menu_blocks(registry: &mut BlockRegistry) -> usize {
    let blocks: [Arc<dyn Block>; 2] = [
        Arc::new(MenuHopper::default()),
        Arc::new(MenuDropper::default()),
    ];
    let mut installed = 0;
    for block in blocks {
        let state = block.encode_block();
        if registry.register_if_absent(block) {
            debug!("Installed menu block for {state}");
            installed += 1;
        }
    }
    if installed > 0 {
        info!("Registered {installed} menu container block(s)");
    }
    installed
}
