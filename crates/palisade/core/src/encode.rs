// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The length-prefixed write primitive and the top-level marshal helpers.
//!
//! A list codec cannot know an item's encoded length without performing the
//! encode, so the prefix is backpatched: placeholder bytes go out first, the
//! value is written, and the sink then seeks back to overwrite the
//! placeholder with the actual length. One pass, linear in the output size;
//! no nested re-measuring.

use std::io::{Cursor, Read, SeekFrom};

use crate::error::{DecodeError, EncodeError};
use crate::number::PaeNumberType;
use crate::traits::{PaeSink, PaeType};

/// Writes one value, preceded by a length prefix when one is called for.
///
/// Items of a codec with a constant length skip the prefix unless
/// `prefix_if_constant` forces one. Returns the total number of bytes
/// written, prefix included.
///
/// On return the sink's position is immediately after the value, exactly as
/// if the prefix had been known in advance.
pub fn write_prefixed<T: PaeType + ?Sized>(
    value: &T::Value,
    pae_type: &T,
    sink: &mut dyn PaeSink,
    length_type: PaeNumberType,
    prefix_if_constant: bool,
) -> Result<usize, EncodeError> {
    if let Some(constant) = pae_type.constant_length() {
        if !prefix_if_constant {
            return write_constant(value, pae_type, sink, constant);
        }
    }

    let prefix_width = length_type.width();
    let placeholder = [0u8; 8];
    sink.write_all(&placeholder[..prefix_width])?;

    let written = pae_type.write(value, sink)?;

    // Backtrack to fill in the length prefix, then restore the position to
    // just past the value.
    sink.seek(SeekFrom::Current(-((written + prefix_width) as i64)))?;
    sink.write_all(&length_type.pack(written as u64)?)?;
    sink.seek(SeekFrom::Current(written as i64))?;

    Ok(written + prefix_width)
}

/// Unprefixed write of a constant-length item.
///
/// The value is encoded into a scratch buffer first: a codec that
/// misreports its constant length must not leave partial bytes on the sink,
/// since without a prefix nothing on the wire would demarcate them.
fn write_constant<T: PaeType + ?Sized>(
    value: &T::Value,
    pae_type: &T,
    sink: &mut dyn PaeSink,
    constant: usize,
) -> Result<usize, EncodeError> {
    let mut scratch = Cursor::new(Vec::with_capacity(constant));
    pae_type.write(value, &mut scratch)?;

    let written = scratch.get_ref().len();
    if written != constant {
        return Err(EncodeError::ConstantLengthMismatch {
            expected: constant,
            written,
        });
    }

    sink.write_all(scratch.get_ref())?;

    Ok(written)
}

/// Encodes a single value into a fresh byte vector.
pub fn marshal<T: PaeType + ?Sized>(
    value: &T::Value,
    pae_type: &T,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = Cursor::new(Vec::new());
    pae_type.write(value, &mut out)?;

    Ok(out.into_inner())
}

/// Decodes a single value from `packed`, which must hold exactly the value's
/// encoding.
pub fn unmarshal<T: PaeType + ?Sized>(
    packed: &[u8],
    pae_type: &T,
) -> Result<T::Value, DecodeError> {
    let mut source: &[u8] = packed;
    pae_type.read(&mut source as &mut dyn Read, packed.len())
}
