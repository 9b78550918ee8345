//! The slice of the world model a menu needs: block identities and their
//! runtime IDs, the block registry, and item inventories.

pub mod block;
pub mod block_hash;
pub mod block_registry;
pub mod inventory;

pub use block::{Block, BlockModel, Container};
pub use block_hash::BlockState;
pub use block_registry::BlockRegistry;
pub use inventory::{ChangeContext, Inventory, InventoryError, InventoryHandler};
