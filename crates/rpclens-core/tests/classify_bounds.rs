//! Classifier boundary and resource-bound behaviour built programmatically,
//! where a static vector would obscure the construction.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rpclens_core::cursor::ByteCursor;
use rpclens_core::protocol::classify::{scan_header_block, MAX_FRAMES, MAX_HEADER_FIELDS};
use rpclens_core::protocol::frame::{FrameHeader, FrameHeaderDecoder, FRAME_HEADER_SIZE};
use rpclens_core::protocol::hpack::CONTENT_TYPE_STATIC_INDEX;
use rpclens_core::protocol::signature::GRPC_CONTENT_TYPE_HUFFMAN;
use rpclens_core::{GrpcClassifier, GrpcStatus, Result, RpcLensError};

fn frame(frame_type: u8, flags: u8, stream_id: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_HEADER_SIZE + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes()[1..]);
    out.push(frame_type);
    out.push(flags);
    out.extend_from_slice(&stream_id.to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// Literal content-type field carrying the Huffman-encoded signature value.
fn grpc_field() -> Vec<u8> {
    let mut field = vec![0x40 | CONTENT_TYPE_STATIC_INDEX, 0x8b];
    field.extend_from_slice(&GRPC_CONTENT_TYPE_HUFFMAN);
    field
}

#[test]
fn truncated_value_at_exact_buffer_boundary() {
    // Declared value length 127 with only two value bytes present. The
    // buffer is allocated at exactly the bytes written, so any read past
    // the end would fault the test.
    let mut block = vec![0x5f, 0xff];
    block.extend_from_slice(&[0xaa, 0xbb]);
    let snapshot = frame(0x1, 0x04, 1, &block);

    let classifier = GrpcClassifier::new();
    assert_eq!(classifier.classify(&snapshot), GrpcStatus::Unknown);
}

#[test]
fn headers_frame_found_at_the_frame_bound() {
    // MAX_FRAMES - 1 skippable frames, then the HEADERS frame on the last
    // permitted iteration.
    let mut snapshot = Vec::new();
    for _ in 0..MAX_FRAMES - 1 {
        snapshot.extend_from_slice(&frame(0x0, 0x00, 1, &[0xaa]));
    }
    snapshot.extend_from_slice(&frame(0x1, 0x04, 1, &grpc_field()));

    let classifier = GrpcClassifier::new();
    assert_eq!(classifier.classify(&snapshot), GrpcStatus::Grpc);
}

#[test]
fn field_bound_exhausted_before_literal_field() {
    // MAX_HEADER_FIELDS indexed fields fill the field budget; the matching
    // literal field behind them is never inspected.
    let mut block = vec![0x82; MAX_HEADER_FIELDS];
    block.extend_from_slice(&grpc_field());
    let snapshot = frame(0x1, 0x04, 1, &block);

    let classifier = GrpcClassifier::new();
    assert_eq!(classifier.classify(&snapshot), GrpcStatus::Unknown);
}

#[test]
fn payload_reaching_buffer_end_yields_unknown() {
    // DATA frame whose declared payload is exactly the rest of the buffer:
    // the scan cannot continue past it.
    let snapshot = frame(0x0, 0x00, 1, &[0xaa, 0xbb, 0xcc]);

    let classifier = GrpcClassifier::new();
    assert_eq!(classifier.classify(&snapshot), GrpcStatus::Unknown);
}

#[test]
fn classification_is_idempotent() {
    let snapshot = frame(0x1, 0x04, 1, &grpc_field());
    let classifier = GrpcClassifier::new();

    let first = classifier.classify(&snapshot);
    let second = classifier.classify(&snapshot);
    assert_eq!(first, GrpcStatus::Grpc);
    assert_eq!(first, second);
}

#[test]
fn scan_header_block_on_empty_cursor() {
    let mut cursor = ByteCursor::new(&[]);
    assert_eq!(scan_header_block(&mut cursor), GrpcStatus::Unknown);
}

struct FailingDecoder;

impl FrameHeaderDecoder for FailingDecoder {
    fn header_size(&self) -> usize {
        FRAME_HEADER_SIZE
    }

    fn decode(&self, buf: &[u8]) -> Result<FrameHeader> {
        Err(RpcLensError::Truncated {
            needed: FRAME_HEADER_SIZE,
            available: buf.len(),
        })
    }
}

#[test]
fn injected_decoder_failure_fails_closed() {
    let snapshot = frame(0x1, 0x04, 1, &grpc_field());
    let classifier = GrpcClassifier::with_decoder(FailingDecoder);
    assert_eq!(classifier.classify(&snapshot), GrpcStatus::Unknown);
}
