//! Wire-format modules for the classification pipeline.
//!
//! This module hosts the decoding layers the classifier walks through:
//! - `frame`: HTTP/2 frame headers and the injectable header decoder.
//! - `hpack`: the two one-byte HPACK prefix forms this classifier reads.
//! - `signature`: the pre-encoded content-type value that identifies gRPC.
//! - `classify`: the bounded scanners that tie the layers together.
//!
//! All decoders are panic-free: malformed input is reported as
//! `GrpcStatus::Unknown` or `RpcLensError` instead of panicking or indexing
//! raw buffers, keeping hosts resilient to hostile traffic.

pub mod classify;
pub mod frame;
pub mod hpack;
pub mod signature;
