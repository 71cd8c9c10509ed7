//! The pre-encoded content-type value that identifies gRPC.

/// Huffman-encoded `application/grpc`, as produced by standard HPACK
/// encoders. Immutable reference value; used only for equality comparison.
pub const GRPC_CONTENT_TYPE_HUFFMAN: [u8; 11] = [
    0x1d, 0x75, 0xd0, 0x62, 0x0d, 0x26, 0x3d, 0x4c, 0x4d, 0x65, 0x64,
];

/// True iff `value` starts with the reference signature. Bounded linear
/// compare over the signature length; never reads past `value`.
pub fn matches_signature(value: &[u8]) -> bool {
    match value.get(..GRPC_CONTENT_TYPE_HUFFMAN.len()) {
        Some(head) => head == GRPC_CONTENT_TYPE_HUFFMAN,
        None => false,
    }
}
