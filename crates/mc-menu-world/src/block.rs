//! Block definitions as seen by the registry.

use std::fmt;
use std::sync::Arc;

use mc_menu_proto::types::BlockPos;

use crate::block_hash::BlockState;
use crate::inventory::Inventory;

/// Collision/render model of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockModel {
    /// Nothing to collide with (air).
    Empty,
    /// A full cube.
    Solid,
}

/// A block implementation that can occupy a position.
pub trait Block: Send + Sync + fmt::Debug {
    /// The state this block encodes to on the wire.
    fn encode_block(&self) -> BlockState;

    /// Implementation hash. `0` marks a placeholder with no behaviour of its
    /// own, which other implementations may replace.
    fn hash(&self) -> u64;

    fn model(&self) -> BlockModel {
        BlockModel::Solid
    }

    /// Container behaviour, if any.
    fn as_container(&self) -> Option<&dyn Container> {
        None
    }
}

/// Blocks that hold an inventory and track who has them open.
pub trait Container: Send + Sync {
    fn add_viewer(&self, viewer: u64, pos: BlockPos);
    fn remove_viewer(&self, viewer: u64, pos: BlockPos);
    fn inventory(&self) -> Arc<Inventory>;
}

/// A vanilla block the environment already implements.
#[derive(Debug, Clone)]
pub struct VanillaBlock {
    state: BlockState,
    hash: u64,
    model: BlockModel,
}

impl VanillaBlock {
    pub fn new(state: BlockState, hash: u64, model: BlockModel) -> Self {
        Self { state, hash, model }
    }
}

impl Block for VanillaBlock {
    fn encode_block(&self) -> BlockState {
        self.state.clone()
    }

    fn hash(&self) -> u64 {
        self.hash
    }

    fn model(&self) -> BlockModel {
        self.model
    }
}

/// A known state with no implementation behind it.
#[derive(Debug, Clone)]
pub struct UnknownBlock {
    state: BlockState,
}

impl UnknownBlock {
    pub fn new(state: BlockState) -> Self {
        Self { state }
    }
}

impl Block for UnknownBlock {
    fn encode_block(&self) -> BlockState {
        self.state.clone()
    }

    fn hash(&self) -> u64 {
        0
    }
}

// -----------------------------------------------------------------------
// Vanilla states used by fake containers
// -----------------------------------------------------------------------

pub fn air_state() -> BlockState {
    BlockState::new("minecraft:air")
}

pub fn chest_state() -> BlockState {
    BlockState::new("minecraft:chest").with("minecraft:cardinal_direction", "north")
}

pub fn hopper_state() -> BlockState {
    BlockState::new("minecraft:hopper")
        .with("facing_direction", 0)
        .with("toggle_bit", false)
}

pub fn dropper_state() -> BlockState {
    BlockState::new("minecraft:dropper")
        .with("facing_direction", 0)
        .with("triggered_bit", false)
}
