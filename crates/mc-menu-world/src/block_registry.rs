//! Registry of block implementations keyed by runtime ID.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::block::{
    air_state, chest_state, dropper_state, hopper_state, Block, BlockModel, UnknownBlock,
    VanillaBlock,
};

/// Implementation hashes of the built-in vanilla blocks.
const AIR_HASH: u64 = 1;
const CHEST_HASH: u64 = 2;

/// Maps block runtime IDs to the implementation registered for that state.
#[derive(Default)]
pub struct BlockRegistry {
    blocks: HashMap<u32, Arc<dyn Block>>,
}

impl BlockRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The base block set: air and chest implemented, hopper and dropper
    /// known by state only.
    pub fn vanilla() -> Self {
        let mut reg = Self::new();
        reg.register(Arc::new(VanillaBlock::new(
            air_state(),
            AIR_HASH,
            BlockModel::Empty,
        )));
        reg.register(Arc::new(VanillaBlock::new(
            chest_state(),
            CHEST_HASH,
            BlockModel::Solid,
        )));
        reg.register(Arc::new(UnknownBlock::new(hopper_state())));
        reg.register(Arc::new(UnknownBlock::new(dropper_state())));
        reg
    }

    /// Look up the block registered for a runtime ID.
    pub fn lookup(&self, runtime_id: u32) -> Option<Arc<dyn Block>> {
        self.blocks.get(&runtime_id).cloned()
    }

    /// Register a block, replacing whatever was registered for its state.
    pub fn register(&mut self, block: Arc<dyn Block>) -> Option<Arc<dyn Block>> {
        let runtime_id = block.encode_block().runtime_id();
        self.blocks.insert(runtime_id, block)
    }

    /// Register a block unless a real implementation already owns its state.
    ///
    /// Placeholders (hash 0) count as absent. Returns whether the block was
    /// installed.
    pub fn register_if_absent(&mut self, block: Arc<dyn Block>) -> bool {
        let state = block.encode_block();
        let runtime_id = state.runtime_id();
        if let Some(existing) = self.blocks.get(&runtime_id) {
            if existing.hash() != 0 {
                debug!("Block {state} already implemented (hash {}), skipping", existing.hash());
                return false;
            }
        }
        self.blocks.insert(runtime_id, block);
        true
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
