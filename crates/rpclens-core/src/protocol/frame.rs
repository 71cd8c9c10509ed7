//! HTTP/2 frame-header decoding (panic-free).
//!
//! The classifier never interprets frame payloads other than header blocks;
//! it only needs the fixed 9-byte header to know each frame's type and how
//! far to skip. The decoder is injected as a trait so hosts can swap in an
//! instrumented or mock implementation.

use bytes::Buf;

use crate::error::{Result, RpcLensError};

/// Wire size of one HTTP/2 frame header (RFC 7540 §4.1).
pub const FRAME_HEADER_SIZE: usize = 9;

/// HTTP/2 frame types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Data,
    /// The frame kind that carries a header block.
    Headers,
    Priority,
    RstStream,
    Settings,
    PushPromise,
    Ping,
    GoAway,
    WindowUpdate,
    Continuation,
    /// Any type tag this classifier does not need to distinguish.
    Other(u8),
}

impl FrameType {
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            0x0 => FrameType::Data,
            0x1 => FrameType::Headers,
            0x2 => FrameType::Priority,
            0x3 => FrameType::RstStream,
            0x4 => FrameType::Settings,
            0x5 => FrameType::PushPromise,
            0x6 => FrameType::Ping,
            0x7 => FrameType::GoAway,
            0x8 => FrameType::WindowUpdate,
            0x9 => FrameType::Continuation,
            other => FrameType::Other(other),
        }
    }
}

/// One decoded frame header. Ephemeral: consumed immediately by the frame
/// scanner, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct FrameHeader {
    /// Declared payload length (24-bit on the wire).
    pub length: u32,
    pub frame_type: FrameType,
    pub flags: u8,
    /// Stream identifier (31-bit; reserved top bit masked off).
    pub stream_id: u32,
}

/// Collaborator contract: decode one frame header from the start of a
/// buffer, or fail. Implementations must not read past the given slice and
/// must consume a fixed number of bytes reported by `header_size`.
pub trait FrameHeaderDecoder {
    /// Fixed number of bytes one frame-header encoding occupies.
    fn header_size(&self) -> usize;

    /// Decode the header at the start of `buf`.
    fn decode(&self, buf: &[u8]) -> Result<FrameHeader>;
}

/// Standard RFC 7540 frame-header decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Http2FrameDecoder;

impl FrameHeaderDecoder for Http2FrameDecoder {
    fn header_size(&self) -> usize {
        FRAME_HEADER_SIZE
    }

    fn decode(&self, mut buf: &[u8]) -> Result<FrameHeader> {
        if buf.remaining() < FRAME_HEADER_SIZE {
            return Err(RpcLensError::Truncated {
                needed: FRAME_HEADER_SIZE,
                available: buf.remaining(),
            });
        }

        let length = buf.get_uint(3) as u32;
        let frame_type = FrameType::from_u8(buf.get_u8());
        let flags = buf.get_u8();
        let stream_id = buf.get_u32() & 0x7fff_ffff;

        Ok(FrameHeader {
            length,
            frame_type,
            flags,
            stream_id,
        })
    }
}
