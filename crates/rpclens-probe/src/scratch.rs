//! Per-context scratch storage.
//!
//! Snapshots are copied into a fixed-capacity slot keyed by an
//! execution-context identifier before classification, so the host never
//! hands the classifier a buffer it does not control the lifetime of.

use bytes::BytesMut;
use dashmap::DashMap;

use rpclens_core::error::{Result, RpcLensError};

/// Fixed-capacity scratch slots keyed by execution-context id.
///
/// Contract: a slot is acquired exclusively for the duration of one
/// classification and cleared before release. Each context id belongs to one
/// caller at a time; no ordering is guaranteed or needed across contexts.
pub struct ScratchPool {
    slots: DashMap<u32, BytesMut>,
    capacity: usize,
}

impl ScratchPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: DashMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy `snapshot` into the context's slot and run `f` over the copy.
    /// The slot is cleared again before this returns.
    pub fn with_slot<T>(
        &self,
        ctx_id: u32,
        snapshot: &[u8],
        f: impl FnOnce(&[u8]) -> T,
    ) -> Result<T> {
        if snapshot.len() > self.capacity {
            return Err(RpcLensError::SnapshotTooLarge {
                len: snapshot.len(),
                capacity: self.capacity,
            });
        }

        let mut slot = self
            .slots
            .entry(ctx_id)
            .or_insert_with(|| BytesMut::with_capacity(self.capacity));
        slot.clear();
        slot.extend_from_slice(snapshot);

        let bytes: &[u8] = &slot;
        let out = f(bytes);

        slot.clear();
        Ok(out)
    }
}
