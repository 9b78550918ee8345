//! Block states and their FNV-1a runtime IDs.
//!
//! When `block_network_ids_are_hashes = true` in StartGame, the client computes
//! block runtime IDs as FNV-1a hashes of the network-serialized block state
//! NBT `{name, states, version}`. The server must produce identical hashes.

use std::fmt;

use mc_menu_nbt::{to_network_bytes, NbtCompound, NbtTag};

/// FNV-1a 32-bit offset basis.
const FNV1_32_INIT: u32 = 0x811c_9dc5;
/// FNV-1a 32-bit prime.
const FNV1_32_PRIME: u32 = 0x0100_0193;

/// Block state version for 1.21.50 protocol.
pub const BLOCK_STATE_VERSION: i32 = 18_100_737;

/// Compute FNV-1a 32-bit hash of a byte slice.
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut hash = FNV1_32_INIT;
    for &byte in data {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(FNV1_32_PRIME);
    }
    hash
}

/// Encoded identity of a block: its name plus state properties.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockState {
    pub name: String,
    pub states: NbtCompound,
}

impl BlockState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: NbtCompound::new(),
        }
    }

    /// Add a state property.
    pub fn with(mut self, key: &str, value: impl Into<NbtTag>) -> Self {
        self.states.insert(key.to_string(), value.into());
        self
    }

    /// Network NBT of `{name, states, version}`.
    ///
    /// The compound is ordered, so keys come out sorted, which is also the
    /// order BDS hashes them in.
    pub fn to_network_nbt(&self) -> Vec<u8> {
        let mut root = NbtCompound::new();
        root.insert("name".into(), NbtTag::String(self.name.clone()));
        root.insert("states".into(), NbtTag::Compound(self.states.clone()));
        root.insert("version".into(), NbtTag::Int(BLOCK_STATE_VERSION));
        to_network_bytes(root)
    }

    /// Runtime ID the client will use for this state.
    pub fn runtime_id(&self) -> u32 {
        fnv1a_32(&self.to_network_nbt())
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.states.is_empty() {
            let props: Vec<String> = self
                .states
                .iter()
                .map(|(k, v)| format!("{k}={v:?}"))
                .collect();
            write!(f, "[{}]", props.join(","))?;
        }
        Ok(())
    }
}
