// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Read;

use crate::error::{DecodeError, EncodeError};
use crate::traits::{PaeSink, PaeType};

/// Little-endian unsigned integer codec of any byte width up to 16.
///
/// Diagnostics and test tooling only. The production wire format is limited
/// to the four [`PaeNumberType`](crate::PaeNumberType) widths; keeping this
/// type out of the main enum means the production encoder cannot be talked
/// into emitting a non-standard prefix width. Values stay in the `u64`
/// domain; widths beyond 8 bytes zero-pad on write and reject nonzero high
/// bytes on read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WideNumber {
    width: usize,
}

impl WideNumber {
    /// # Panics
    ///
    /// Panics when `width` is 0 or exceeds 16 bytes.
    pub fn new(width: usize) -> Self {
        assert!(
            (1..=16).contains(&width),
            "WideNumber width must be 1..=16 bytes"
        );

        Self { width }
    }

    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        self.width
    }

    fn max_value(self) -> u64 {
        if self.width >= 8 {
            u64::MAX
        } else {
            (1u64 << (self.width * 8)) - 1
        }
    }
}

impl PaeType for WideNumber {
    type Value = u64;

    fn constant_length(&self) -> Option<usize> {
        Some(self.width)
    }

    fn write(&self, value: &u64, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        if *value > self.max_value() {
            return Err(EncodeError::NumberOutOfRange {
                value: *value,
                max: self.max_value(),
            });
        }

        let le_bytes = value.to_le_bytes();
        sink.write_all(&le_bytes[..self.width.min(8)])?;
        for _ in 8..self.width {
            sink.write_all(&[0u8])?;
        }

        Ok(self.width)
    }

    fn read(&self, source: &mut dyn Read, _length: usize) -> Result<u64, DecodeError> {
        let mut buf = [0u8; 16];
        source
            .read_exact(&mut buf[..self.width])
            .map_err(|_| DecodeError::ValueUnreadable {
                codec: format!("{self:?}"),
            })?;

        if buf[8..self.width.max(8)].iter().any(|&b| b != 0) {
            return Err(DecodeError::ValueUnreadable {
                codec: format!("{self:?}"),
            });
        }

        let mut le_bytes = [0u8; 8];
        let head = self.width.min(8);
        le_bytes[..head].copy_from_slice(&buf[..head]);

        Ok(u64::from_le_bytes(le_bytes))
    }
}
