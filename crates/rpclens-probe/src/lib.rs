//! rpcLens probe library entry.
//!
//! This crate wires the classifier core into a host-side probe: strict
//! config loading, per-context scratch storage, verdict counters, and the
//! `ProbeService` that ties them together. It is intended to be consumed by
//! the replay binary (`main.rs`) and by integration tests.

pub mod config;
pub mod obs;
pub mod scratch;
pub mod service;
