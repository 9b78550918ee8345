//! Network NBT reader/writer.
//!
//! Network NBT differs from the on-disk little-endian variant in its
//! integers: ints and longs are ZigZag VarInts, array lengths are VarInts and
//! string lengths are VarUInt32.

use bytes::{Buf, BufMut};
use mc_menu_proto::codec::{read_string, write_string, ProtoDecode, ProtoEncode};
use mc_menu_proto::types::{VarInt, VarLong};

use crate::error::NbtError;
use crate::tag::{NbtCompound, NbtRoot, NbtTag};

/// Deepest list/compound nesting accepted from a peer.
const MAX_DEPTH: usize = 512;

const TAG_END: u8 = 0;
const TAG_COMPOUND: u8 = 10;

// -----------------------------------------------------------------------
// Writing
// -----------------------------------------------------------------------

pub(crate) fn write_root(buf: &mut impl BufMut, root: &NbtRoot) {
    buf.put_u8(TAG_COMPOUND);
    write_string(buf, &root.name);
    write_compound(buf, &root.compound);
}

fn write_tag(buf: &mut impl BufMut, tag: &NbtTag) {
    match tag {
        NbtTag::Byte(v) => buf.put_i8(*v),
        NbtTag::Short(v) => buf.put_i16_le(*v),
        NbtTag::Int(v) => VarInt(*v).proto_encode(buf),
        NbtTag::Long(v) => VarLong(*v).proto_encode(buf),
        NbtTag::Float(v) => buf.put_f32_le(*v),
        NbtTag::Double(v) => buf.put_f64_le(*v),
        NbtTag::ByteArray(arr) => {
            VarInt(arr.len() as i32).proto_encode(buf);
            for &b in arr {
                buf.put_i8(b);
            }
        }
        NbtTag::String(s) => write_string(buf, s),
        NbtTag::List(list) => {
            let element_type = list.first().map_or(TAG_END, NbtTag::tag_type_id);
            buf.put_u8(element_type);
            VarInt(list.len() as i32).proto_encode(buf);
            for item in list {
                write_tag(buf, item);
            }
        }
        NbtTag::Compound(map) => write_compound(buf, map),
        NbtTag::IntArray(arr) => {
            VarInt(arr.len() as i32).proto_encode(buf);
            for &v in arr {
                VarInt(v).proto_encode(buf);
            }
        }
        NbtTag::LongArray(arr) => {
            VarInt(arr.len() as i32).proto_encode(buf);
            for &v in arr {
                VarLong(v).proto_encode(buf);
            }
        }
    }
}

fn write_compound(buf: &mut impl BufMut, map: &NbtCompound) {
    for (name, tag) in map {
        buf.put_u8(tag.tag_type_id());
        write_string(buf, name);
        write_tag(buf, tag);
    }
    buf.put_u8(TAG_END);
}

// -----------------------------------------------------------------------
// Reading
// -----------------------------------------------------------------------

pub(crate) fn read_root(buf: &mut impl Buf) -> Result<NbtRoot, NbtError> {
    ensure_remaining(buf, 1)?;
    let tag_type = buf.get_u8();
    if tag_type != TAG_COMPOUND {
        return Err(NbtError::ExpectedCompound { got: tag_type });
    }
    let name = read_string(buf)?;
    let compound = read_compound(buf, 0)?;
    Ok(NbtRoot { name, compound })
}

fn read_tag(buf: &mut impl Buf, tag_type: u8, depth: usize) -> Result<NbtTag, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }

    let tag = match tag_type {
        1 => {
            ensure_remaining(buf, 1)?;
            NbtTag::Byte(buf.get_i8())
        }
        2 => {
            ensure_remaining(buf, 2)?;
            NbtTag::Short(buf.get_i16_le())
        }
        3 => NbtTag::Int(read_varint(buf)?),
        4 => NbtTag::Long(VarLong::proto_decode(buf)?.0),
        5 => {
            ensure_remaining(buf, 4)?;
            NbtTag::Float(buf.get_f32_le())
        }
        6 => {
            ensure_remaining(buf, 8)?;
            NbtTag::Double(buf.get_f64_le())
        }
        7 => {
            let len = read_len(buf)?;
            ensure_remaining(buf, len)?;
            NbtTag::ByteArray((0..len).map(|_| buf.get_i8()).collect())
        }
        8 => NbtTag::String(read_string(buf)?),
        9 => {
            ensure_remaining(buf, 1)?;
            let element_type = buf.get_u8();
            let len = read_len(buf)?;
            let mut list = Vec::with_capacity(len.min(1024));
            for _ in 0..len {
                list.push(read_tag(buf, element_type, depth + 1)?);
            }
            NbtTag::List(list)
        }
        10 => NbtTag::Compound(read_compound(buf, depth + 1)?),
        11 => {
            let len = read_len(buf)?;
            let mut arr = Vec::with_capacity(len.min(1024));
            for _ in 0..len {
                arr.push(read_varint(buf)?);
            }
            NbtTag::IntArray(arr)
        }
        12 => {
            let len = read_len(buf)?;
            let mut arr = Vec::with_capacity(len.min(1024));
            for _ in 0..len {
                arr.push(VarLong::proto_decode(buf)?.0);
            }
            NbtTag::LongArray(arr)
        }
        _ => return Err(NbtError::UnknownTagType(tag_type)),
    };
    Ok(tag)
}

fn read_compound(buf: &mut impl Buf, depth: usize) -> Result<NbtCompound, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }
    let mut map = NbtCompound::new();
    loop {
        ensure_remaining(buf, 1)?;
        let tag_type = buf.get_u8();
        if tag_type == TAG_END {
            break;
        }
        let name = read_string(buf)?;
        let tag = read_tag(buf, tag_type, depth)?;
        map.insert(name, tag);
    }
    Ok(map)
}

fn read_varint(buf: &mut impl Buf) -> Result<i32, NbtError> {
    Ok(VarInt::proto_decode(buf)?.0)
}

fn read_len(buf: &mut impl Buf) -> Result<usize, NbtError> {
    let len = read_varint(buf)?;
    if len < 0 {
        return Err(NbtError::NegativeLength(len));
    }
    Ok(len as usize)
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<(), NbtError> {
    if buf.remaining() < needed {
        Err(NbtError::UnexpectedEof)
    } else {
        Ok(())
    }
}
