// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Blanket [`PaeType`] impls for pointer-like wrappers.
//!
//! Boxed (erased) codecs must compose everywhere a concrete codec does,
//! e.g. as the child of a homogeneous list nested inside a heterogeneous
//! schema.

use std::io::Read;

use crate::error::{DecodeError, EncodeError};
use crate::traits::{PaeSink, PaeType};

impl<T: PaeType + ?Sized> PaeType for Box<T> {
    type Value = T::Value;

    fn constant_length(&self) -> Option<usize> {
        (**self).constant_length()
    }

    fn write(&self, value: &Self::Value, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        (**self).write(value, sink)
    }

    fn read(&self, source: &mut dyn Read, length: usize) -> Result<Self::Value, DecodeError> {
        (**self).read(source, length)
    }
}

impl<T: PaeType + ?Sized> PaeType for &T {
    type Value = T::Value;

    fn constant_length(&self) -> Option<usize> {
        (**self).constant_length()
    }

    fn write(&self, value: &Self::Value, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        (**self).write(value, sink)
    }

    fn read(&self, source: &mut dyn Read, length: usize) -> Result<Self::Value, DecodeError> {
        (**self).read(source, length)
    }
}
