//! ContainerClose (0x2F) — Bidirectional.
//!
//! Sent by the client when the player closes a window, or by the server to
//! force one closed.

use bytes::{Buf, BufMut};

use crate::codec::{ensure_remaining, ProtoDecode, ProtoEncode};
use crate::error::ProtoError;

/// Closes a container window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerClose {
    pub window_id: u8,
    /// Whether the server initiated this close.
    pub server_initiated: bool,
}

impl ProtoEncode for ContainerClose {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.window_id);
        buf.put_u8(self.server_initiated as u8);
    }
}

impl ProtoDecode for ContainerClose {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        ensure_remaining(buf, 2)?;
        let window_id = buf.get_u8();
        let server_initiated = buf.get_u8() != 0;
        Ok(Self {
            window_id,
            server_initiated,
        })
    }
}
