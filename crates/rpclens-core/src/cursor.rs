//! Bounds-tracked view over the unconsumed portion of a snapshot.
//!
//! Parsing rules:
//! - Never index (`buf[0]`) — always go through `remaining()`-checked methods.
//! - Advancing past the end is rejected, not saturated: the caller sees an
//!   error and fails closed.

use crate::error::{Result, RpcLensError};

/// Exclusively-owned view over the remaining bytes of one input buffer.
///
/// The view only ever shrinks; `remaining() <= original_len()` holds at all
/// times and the cursor can never be advanced past the original end.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    rest: &'a [u8],
    original_len: usize,
}

impl<'a> ByteCursor<'a> {
    /// Wrap a snapshot. The caller retains ownership of the bytes.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            rest: buf,
            original_len: buf.len(),
        }
    }

    /// Unconsumed byte count.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.original_len - self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// The unconsumed bytes, without advancing.
    pub fn rest(&self) -> &'a [u8] {
        self.rest
    }

    /// Read the byte at the current position without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.rest.first().copied()
    }

    /// Consume and return one byte, or `None` if the cursor is empty.
    pub fn take_u8(&mut self) -> Option<u8> {
        let (&first, rest) = self.rest.split_first()?;
        self.rest = rest;
        Some(first)
    }

    /// Advance by exactly `n` bytes. Rejected (cursor unchanged) if fewer
    /// than `n` bytes remain.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        match self.rest.get(n..) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(RpcLensError::Truncated {
                needed: n,
                available: self.rest.len(),
            }),
        }
    }

    /// Consume everything that remains, leaving the cursor empty.
    pub fn consume_all(&mut self) {
        self.rest = &[];
    }
}
