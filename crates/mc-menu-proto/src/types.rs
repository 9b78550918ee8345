//! Base data types used throughout the Bedrock protocol.

use std::fmt;
use std::ops::{Add, Mul};

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{ProtoDecode, ProtoEncode};
use crate::error::ProtoError;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum VarIntError {
    #[error("buffer too short")]
    BufferTooShort,
    #[error("VarInt is too long (more than {max_bytes} bytes)")]
    TooManyBytes { max_bytes: usize },
}

// ---------------------------------------------------------------------------
// LEB128 core shared by every variable-length integer
// ---------------------------------------------------------------------------

fn put_leb128(buf: &mut impl BufMut, mut value: u64) {
    loop {
        if value & !0x7F == 0 {
            buf.put_u8(value as u8);
            return;
        }
        buf.put_u8((value & 0x7F | 0x80) as u8);
        value >>= 7;
    }
}

fn get_leb128(buf: &mut impl Buf, max_bytes: usize) -> Result<u64, VarIntError> {
    let mut result: u64 = 0;
    for i in 0..max_bytes {
        if !buf.has_remaining() {
            return Err(VarIntError::BufferTooShort);
        }
        let byte = buf.get_u8();
        result |= ((byte & 0x7F) as u64) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(result);
        }
    }
    Err(VarIntError::TooManyBytes { max_bytes })
}

#[inline]
fn zigzag_encode_32(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

#[inline]
fn zigzag_decode_32(v: u32) -> i32 {
    (v >> 1) as i32 ^ -((v & 1) as i32)
}

#[inline]
fn zigzag_encode_64(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

#[inline]
fn zigzag_decode_64(v: u64) -> i64 {
    (v >> 1) as i64 ^ -((v & 1) as i64)
}

// ---------------------------------------------------------------------------
// VarInt (i32 — ZigZag + LEB128)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarInt(pub i32);

impl VarInt {
    pub const MAX_BYTES: usize = 5;
}

impl ProtoEncode for VarInt {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        put_leb128(buf, zigzag_encode_32(self.0) as u64);
    }
}

impl ProtoDecode for VarInt {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let raw = get_leb128(buf, Self::MAX_BYTES)?;
        Ok(VarInt(zigzag_decode_32(raw as u32)))
    }
}

// ---------------------------------------------------------------------------
// VarLong (i64 — ZigZag + LEB128)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarLong(pub i64);

impl VarLong {
    pub const MAX_BYTES: usize = 10;
}

impl ProtoEncode for VarLong {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        put_leb128(buf, zigzag_encode_64(self.0));
    }
}

impl ProtoDecode for VarLong {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let raw = get_leb128(buf, Self::MAX_BYTES)?;
        Ok(VarLong(zigzag_decode_64(raw)))
    }
}

// ---------------------------------------------------------------------------
// VarUInt32 (unsigned LEB128, NO ZigZag)
// ---------------------------------------------------------------------------

/// Unsigned variable-length integer (plain LEB128, NO ZigZag).
/// Used for packet IDs, string lengths and window IDs in inventory packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarUInt32(pub u32);

impl VarUInt32 {
    pub const MAX_BYTES: usize = 5;
}

impl ProtoEncode for VarUInt32 {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        put_leb128(buf, self.0 as u64);
    }
}

impl ProtoDecode for VarUInt32 {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let raw = get_leb128(buf, Self::MAX_BYTES)?;
        Ok(VarUInt32(raw as u32))
    }
}

// ---------------------------------------------------------------------------
// Vec3 (f32 x, y, z)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Rotation (yaw, pitch in degrees)
// ---------------------------------------------------------------------------

/// Player look rotation in degrees, as carried by movement packets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Rotation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Unit vector the player is looking along.
    ///
    /// Yaw 0 faces +Z, yaw 90 faces -X; positive pitch looks down.
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let m = pitch.cos();
        Vec3::new(-m * yaw.sin(), -pitch.sin(), m * yaw.cos())
    }
}

// ---------------------------------------------------------------------------
// BlockPos (i32 x, y, z)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Convert a floating-point position to a block position (floor).
    pub fn from_vec3(v: &Vec3) -> Self {
        Self {
            x: v.x.floor() as i32,
            y: v.y.floor() as i32,
            z: v.z.floor() as i32,
        }
    }

    /// The position `n` blocks above this one.
    pub fn up(&self, n: i32) -> Self {
        Self::new(self.x, self.y + n, self.z)
    }
}

/// Wire format: VarInt32(x, zigzag) + VarUInt32(y) + VarInt32(z, zigzag).
impl ProtoEncode for BlockPos {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.x).proto_encode(buf);
        VarUInt32(self.y as u32).proto_encode(buf);
        VarInt(self.z).proto_encode(buf);
    }
}

impl ProtoDecode for BlockPos {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let x = VarInt::proto_decode(buf)?.0;
        let y = VarUInt32::proto_decode(buf)?.0 as i32;
        let z = VarInt::proto_decode(buf)?.0;
        Ok(Self { x, y, z })
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
