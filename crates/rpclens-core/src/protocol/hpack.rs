//! The two one-byte HPACK prefix forms this classifier reads.
//!
//! Full HPACK decoding (dynamic table, arbitrary field handling) is out of
//! scope; the classifier only needs to tell indexed fields from
//! literal-with-incremental-indexing fields and to read the one-byte string
//! length that precedes a literal value.

use crate::cursor::ByteCursor;

/// HPACK static-table index of the `content-type` header name (RFC 7541
/// Appendix A). Useful for building realistic header blocks in tests and
/// callers; the classifier itself accepts any nonzero name index.
pub const CONTENT_TYPE_STATIC_INDEX: u8 = 31;

/// First byte of a header field, interpreted by its high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIndexPrefix {
    /// Fully indexed field (`1xxxxxxx`): the 7-bit table index identifies
    /// both name and value; no further bytes belong to the field.
    Indexed { index: u8 },
    /// Literal with incremental indexing (`01xxxxxx`): the 6-bit name index
    /// is zero when a literal name follows, nonzero when the name is looked
    /// up and only a literal value follows.
    Literal { name_index: u8 },
    /// Any other prefix form (without-indexing, never-indexed,
    /// dynamic-table-size update). Not interpreted by this classifier.
    Unsupported { raw: u8 },
}

impl FieldIndexPrefix {
    pub fn from_byte(raw: u8) -> Self {
        if raw & 0x80 != 0 {
            FieldIndexPrefix::Indexed { index: raw & 0x7f }
        } else if raw & 0x40 != 0 {
            FieldIndexPrefix::Literal {
                name_index: raw & 0x3f,
            }
        } else {
            FieldIndexPrefix::Unsupported { raw }
        }
    }

    /// Consume exactly one byte from the cursor and decode it, or `None` if
    /// the cursor is empty.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Option<Self> {
        cursor.take_u8().map(Self::from_byte)
    }
}

/// One-byte string-length prefix: low 7 bits are the value length (0-127),
/// the top bit marks a Huffman-encoded value.
///
/// Decoded without consuming; the caller advances past prefix and value as
/// one atomic step so consumption never desynchronises between fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPrefix {
    pub length: u8,
    pub huffman: bool,
}

impl LengthPrefix {
    pub fn from_byte(raw: u8) -> Self {
        Self {
            length: raw & 0x7f,
            huffman: raw & 0x80 != 0,
        }
    }
}
