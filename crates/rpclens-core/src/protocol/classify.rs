//! Bounded scanners that classify one snapshot as gRPC or not.
//!
//! Control flow: frame scanner → header-block scanner → literal-field
//! check → signature match. Every loop carries a compile-time iteration
//! bound so the classifier terminates in fixed work on any input, and every
//! advance is validated against the cursor before it happens.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::protocol::frame::{FrameHeaderDecoder, FrameType, Http2FrameDecoder};
use crate::protocol::hpack::{FieldIndexPrefix, LengthPrefix};
use crate::protocol::signature::{matches_signature, GRPC_CONTENT_TYPE_HUFFMAN};

/// Maximum header fields examined in one header block.
pub const MAX_HEADER_FIELDS: usize = 20;

/// Maximum frames walked while looking for a HEADERS frame.
pub const MAX_FRAMES: usize = 5;

/// Result of classifying one snapshot.
///
/// `Unknown` is the neutral value: truncated input, malformed lengths, and
/// the absence of a header-bearing frame all land here rather than on a
/// misleading definite answer. `NotGrpc` is a true negative, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrpcStatus {
    #[default]
    Unknown,
    NotGrpc,
    Grpc,
}

impl GrpcStatus {
    /// String representation used in logs and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            GrpcStatus::Unknown => "unknown",
            GrpcStatus::NotGrpc => "not_grpc",
            GrpcStatus::Grpc => "grpc",
        }
    }

    pub fn is_determinate(self) -> bool {
        self != GrpcStatus::Unknown
    }
}

/// Classify one literal-representation field whose prefix byte has already
/// been consumed. `name_index` is the 6-bit name reference from the prefix.
fn check_literal(cursor: &mut ByteCursor<'_>, name_index: u8) -> GrpcStatus {
    if cursor.is_empty() {
        return GrpcStatus::Unknown;
    }

    if name_index == 0 {
        // A literal name follows. Recognising fields by literal name is
        // reserved for a future extension; only name-by-index is handled.
        return GrpcStatus::Unknown;
    }

    let prefix = match cursor.peek() {
        Some(byte) => LengthPrefix::from_byte(byte),
        None => return GrpcStatus::Unknown,
    };
    let value_len = prefix.length as usize;

    if value_len > cursor.remaining() - 1 {
        // Truncated or malformed length. Discard the rest of the block
        // rather than trying to resynchronise without a dynamic table.
        cursor.consume_all();
        return GrpcStatus::Unknown;
    }

    // A value shorter than the signature can never match. Only the
    // Huffman-encoded form of the content-type value is recognised; see
    // `LengthPrefix::huffman` for the flag a literal-form extension would
    // branch on.
    let is_match = value_len >= GRPC_CONTENT_TYPE_HUFFMAN.len()
        && cursor
            .rest()
            .get(1..1 + value_len)
            .is_some_and(matches_signature);

    // Prefix byte plus the full value, matched or not, as one atomic
    // advance: the value must be fully consumed so the cursor stays aligned
    // for any subsequent field.
    if cursor.advance(1 + value_len).is_err() {
        return GrpcStatus::Unknown;
    }

    if is_match {
        GrpcStatus::Grpc
    } else {
        GrpcStatus::NotGrpc
    }
}

/// Scan one header block for a field that yields a definite verdict.
///
/// The first determinate field wins; later fields are not inspected.
pub fn scan_header_block(cursor: &mut ByteCursor<'_>) -> GrpcStatus {
    if cursor.is_empty() {
        return GrpcStatus::Unknown;
    }

    for _ in 0..MAX_HEADER_FIELDS {
        let Some(prefix) = FieldIndexPrefix::read(cursor) else {
            return GrpcStatus::Unknown;
        };

        match prefix {
            FieldIndexPrefix::Indexed { .. } => {
                // Fully indexed field: one byte on the wire, nothing more
                // to consume.
                // TODO: recognise :method POST/GET via the static table.
            }
            FieldIndexPrefix::Literal { name_index } => {
                let status = check_literal(cursor, name_index);
                if status.is_determinate() {
                    return status;
                }
            }
            FieldIndexPrefix::Unsupported { .. } => {
                // Known limitation: forms such as dynamic-table-size
                // updates carry bytes beyond the prefix that are not
                // consumed here, so later fields in the same block may be
                // misparsed.
            }
        }
    }

    GrpcStatus::Unknown
}

/// The classifier entry point: walks frames looking for the header block,
/// then delegates to the header-block scanner.
///
/// The frame-header decoder is injected so hosts can substitute an
/// instrumented or mock implementation.
#[derive(Debug, Default, Clone)]
pub struct GrpcClassifier<D = Http2FrameDecoder> {
    decoder: D,
}

impl GrpcClassifier<Http2FrameDecoder> {
    /// Classifier over standard HTTP/2 framing.
    pub fn new() -> Self {
        Self {
            decoder: Http2FrameDecoder,
        }
    }
}

impl<D: FrameHeaderDecoder> GrpcClassifier<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Classify one captured snapshot of connection bytes.
    ///
    /// Stateless: the verdict depends only on `buf`, and the same snapshot
    /// always yields the same verdict.
    pub fn classify(&self, buf: &[u8]) -> GrpcStatus {
        if buf.is_empty() {
            return GrpcStatus::Unknown;
        }

        let mut cursor = ByteCursor::new(buf);
        let mut found_headers = false;

        for _ in 0..MAX_FRAMES {
            let header = match self.decoder.decode(cursor.rest()) {
                Ok(header) => header,
                Err(err) => {
                    tracing::debug!(%err, "unable to decode frame header");
                    return GrpcStatus::Unknown;
                }
            };

            if cursor.advance(self.decoder.header_size()).is_err() {
                return GrpcStatus::Unknown;
            }

            if header.frame_type == FrameType::Headers {
                found_headers = true;
                break;
            }

            let payload_len = header.length as usize;
            if payload_len >= cursor.remaining() {
                // The buffer ends inside this frame's payload.
                return GrpcStatus::Unknown;
            }
            if cursor.advance(payload_len).is_err() {
                return GrpcStatus::Unknown;
            }
        }

        if !found_headers {
            return GrpcStatus::Unknown;
        }

        // Known limitation: the scan runs over the whole remaining cursor
        // rather than being clamped to the HEADERS frame's declared payload
        // length, so it may read into bytes of a following frame.
        let status = scan_header_block(&mut cursor);
        tracing::debug!(
            verdict = status.as_str(),
            consumed = cursor.consumed(),
            "snapshot classified"
        );
        status
    }
}
