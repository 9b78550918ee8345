//! Network NBT (Named Binary Tag) for Minecraft Bedrock Edition.
//!
//! Only the network variant is implemented: it is the format carried by
//! BlockActorData packets and the format block state hashes are computed
//! over. Ints are ZigZag VarInts and string lengths are VarUInt32.

pub mod error;
mod io;
pub mod tag;

pub use error::NbtError;
pub use tag::{NbtCompound, NbtRoot, NbtTag};

use bytes::{Buf, BufMut};

/// Read network NBT from a buffer.
pub fn read_nbt_network(buf: &mut impl Buf) -> Result<NbtRoot, NbtError> {
    io::read_root(buf)
}

/// Write network NBT to a buffer.
pub fn write_nbt_network(buf: &mut impl BufMut, root: &NbtRoot) {
    io::write_root(buf, root)
}

/// Encode an unnamed root compound to a fresh byte vector.
pub fn to_network_bytes(compound: NbtCompound) -> Vec<u8> {
    let mut buf = Vec::new();
    write_nbt_network(&mut buf, &NbtRoot::new("", compound));
    buf
}
