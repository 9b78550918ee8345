use mc_menu_world::InventoryError;
use thiserror::Error;

use crate::kind::ContainerKind;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("{kind} menu holds at most {capacity} stacks, got {count}")]
    TooManyItems {
        kind: ContainerKind,
        count: usize,
        capacity: usize,
    },

    #[error("menu inventory: {0}")]
    Inventory(#[from] InventoryError),
}
