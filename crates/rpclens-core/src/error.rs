//! Shared error type across rpcLens crates.
//!
//! Classification itself never errors: uncertainty is expressed as
//! `GrpcStatus::Unknown`. This type covers the infrastructure around it
//! (frame-header decoding internals, configuration, scratch storage).

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RpcLensError>;

/// Unified error type used by core and probe.
#[derive(Debug, Error)]
pub enum RpcLensError {
    #[error("truncated input: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },
    #[error("bad config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("snapshot of {len} bytes exceeds scratch capacity of {capacity}")]
    SnapshotTooLarge { len: usize, capacity: usize },
}
