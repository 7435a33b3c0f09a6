// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variable-length primitive codecs: raw bytes and UTF-8 text.
//!
//! Neither declares a constant length; the item length always comes from the
//! surrounding list's prefix (or, at the top level, from the caller).

use std::io::Read;

use crate::error::{DecodeError, EncodeError};
use crate::traits::{PaeSink, PaeType};

/// Raw byte strings, written verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaeBytes;

impl PaeType for PaeBytes {
    type Value = Vec<u8>;

    fn write(&self, value: &Vec<u8>, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        sink.write_all(value)?;

        Ok(value.len())
    }

    fn read(&self, source: &mut dyn Read, length: usize) -> Result<Vec<u8>, DecodeError> {
        read_exactly(source, length, "PaeBytes")
    }
}

/// UTF-8 text, written as its byte encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaeString;

impl PaeType for PaeString {
    type Value = String;

    fn write(&self, value: &String, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        sink.write_all(value.as_bytes())?;

        Ok(value.len())
    }

    fn read(&self, source: &mut dyn Read, length: usize) -> Result<String, DecodeError> {
        let bytes = read_exactly(source, length, "PaeString")?;

        // Invalid UTF-8 is a payload parse failure, same family as a short
        // read.
        String::from_utf8(bytes).map_err(|_| DecodeError::ValueUnreadable {
            codec: "PaeString".into(),
        })
    }
}

fn read_exactly(
    source: &mut dyn Read,
    length: usize,
    codec: &str,
) -> Result<Vec<u8>, DecodeError> {
    let mut buf = vec![0u8; length];
    source
        .read_exact(&mut buf)
        .map_err(|_| DecodeError::ValueUnreadable {
            codec: codec.into(),
        })?;

    Ok(buf)
}
