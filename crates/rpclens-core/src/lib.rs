//! rpcLens core: bounded gRPC-over-HTTP/2 classification primitives.
//!
//! This crate decides, from a single captured byte snapshot of one connection
//! direction, whether the traffic is gRPC layered over HTTP/2. Every
//! operation is bounded by construction: fixed maximum loop iterations, no
//! recursion, no allocation, and every buffer access is checked against the
//! remaining cursor capacity before it is performed. Truncated or adversarial
//! input degrades to [`GrpcStatus::Unknown`], never to an out-of-range read.
//!
//! The crate carries no capture or export machinery so it can be embedded in
//! any host that can hand it a `&[u8]` snapshot.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `RpcLensError`/`Result` or fail closed to
//! `GrpcStatus::Unknown` so hosts do not crash on hostile traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cursor;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, RpcLensError};

pub use protocol::classify::{GrpcClassifier, GrpcStatus};
