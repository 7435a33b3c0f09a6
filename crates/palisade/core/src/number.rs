// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The fixed-width unsigned integer codec.
//!
//! All four widths encode little-endian. The set is closed on purpose: count
//! and length prefixes on the wire only ever use these widths, and the
//! production API cannot be talked into emitting any other. (An arbitrary
//! width variant for diagnostics lives in `support::test_utils`, behind the
//! `test-utils` feature.)

use std::io::Read;

use crate::error::{DecodeError, EncodeError};
use crate::traits::{PaeSink, PaeType};

/// Unsigned integer widths used for values, count prefixes and length
/// prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaeNumberType {
    /// One byte.
    U8,
    /// Two bytes, little-endian.
    U16,
    /// Four bytes, little-endian.
    U32,
    /// Eight bytes, little-endian.
    U64,
}

impl PaeNumberType {
    /// Encoded width in bytes.
    #[inline(always)]
    pub const fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
        }
    }

    /// Largest value this width can represent.
    #[inline(always)]
    pub const fn max_value(self) -> u64 {
        match self {
            Self::U64 => u64::MAX,
            _ => (1u64 << (self.width() * 8)) - 1,
        }
    }

    /// Packs `value` into its little-endian encoding.
    pub fn pack(self, value: u64) -> Result<Vec<u8>, EncodeError> {
        if value > self.max_value() {
            return Err(EncodeError::NumberOutOfRange {
                value,
                max: self.max_value(),
            });
        }

        Ok(value.to_le_bytes()[..self.width()].to_vec())
    }

    /// Unpacks a little-endian encoding of exactly [`width`](Self::width)
    /// bytes.
    pub fn unpack(self, packed: &[u8]) -> Result<u64, DecodeError> {
        if packed.len() != self.width() {
            return Err(DecodeError::ValueUnreadable {
                codec: format!("{self:?}"),
            });
        }

        let mut le_bytes = [0u8; 8];
        le_bytes[..self.width()].copy_from_slice(packed);

        Ok(u64::from_le_bytes(le_bytes))
    }
}

impl PaeType for PaeNumberType {
    type Value = u64;

    fn constant_length(&self) -> Option<usize> {
        Some(self.width())
    }

    fn write(&self, value: &u64, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        let packed = self.pack(*value)?;
        sink.write_all(&packed)?;

        Ok(packed.len())
    }

    fn read(&self, source: &mut dyn Read, _length: usize) -> Result<u64, DecodeError> {
        // The declared width is authoritative; `_length` matches it for any
        // well-formed caller.
        let mut buf = [0u8; 8];
        source
            .read_exact(&mut buf[..self.width()])
            .map_err(|_| DecodeError::ValueUnreadable {
                codec: format!("{self:?}"),
            })?;

        self.unpack(&buf[..self.width()])
    }
}
