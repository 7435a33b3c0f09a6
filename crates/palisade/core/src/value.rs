// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Dynamically-typed values and codec erasure.
//!
//! Heterogeneous schemas mix codecs with different value types, so their
//! components operate on a common dynamic representation: [`PaeValue`]. Any
//! typed codec whose value converts becomes a schema component through
//! [`erase`].

use std::io::Read;

use crate::error::{DecodeError, EncodeError};
use crate::traits::{PaeSink, PaeType};

/// Dynamically-typed value for heterogeneous schemas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaeValue {
    /// Fixed-width unsigned integer, any production width.
    Number(u64),
    /// Raw byte string.
    Bytes(Vec<u8>),
    /// UTF-8 text.
    Text(String),
    /// Nested list of dynamic values.
    List(Vec<PaeValue>),
}

/// Boxed, erased codec usable as a heterogeneous schema component.
pub type BoxedPaeType = Box<dyn PaeType<Value = PaeValue> + Send + Sync>;

/// Bridges a typed codec's value into the dynamic [`PaeValue`]
/// representation.
pub trait PaeValueConvert: Sized {
    /// Wraps the typed value in its [`PaeValue`] variant.
    fn into_pae_value(self) -> PaeValue;

    /// Borrows the typed value back out of a dynamic one.
    ///
    /// `None` when the variant does not match.
    fn try_borrow(value: &PaeValue) -> Option<&Self>;
}

impl PaeValueConvert for u64 {
    fn into_pae_value(self) -> PaeValue {
        PaeValue::Number(self)
    }

    fn try_borrow(value: &PaeValue) -> Option<&Self> {
        match value {
            PaeValue::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl PaeValueConvert for Vec<u8> {
    fn into_pae_value(self) -> PaeValue {
        PaeValue::Bytes(self)
    }

    fn try_borrow(value: &PaeValue) -> Option<&Self> {
        match value {
            PaeValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl PaeValueConvert for String {
    fn into_pae_value(self) -> PaeValue {
        PaeValue::Text(self)
    }

    fn try_borrow(value: &PaeValue) -> Option<&Self> {
        match value {
            PaeValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl PaeValueConvert for Vec<PaeValue> {
    fn into_pae_value(self) -> PaeValue {
        PaeValue::List(self)
    }

    fn try_borrow(value: &PaeValue) -> Option<&Self> {
        match value {
            PaeValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Adapter running a typed codec over [`PaeValue`]s.
///
/// Length semantics pass straight through, so an erased codec frames
/// identically to its typed original.
#[derive(Clone, Copy, Debug)]
pub struct ErasedPaeType<T>(pub T);

impl<T> PaeType for ErasedPaeType<T>
where
    T: PaeType,
    T::Value: PaeValueConvert,
{
    type Value = PaeValue;

    fn constant_length(&self) -> Option<usize> {
        self.0.constant_length()
    }

    fn write(&self, value: &PaeValue, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        let typed =
            T::Value::try_borrow(value).ok_or_else(|| EncodeError::ComponentTypeMismatch {
                codec: format!("{:?}", self.0),
            })?;

        self.0.write(typed, sink)
    }

    fn read(&self, source: &mut dyn Read, length: usize) -> Result<PaeValue, DecodeError> {
        Ok(self.0.read(source, length)?.into_pae_value())
    }
}

/// Boxes a typed codec for use in a heterogeneous schema.
pub fn erase<T>(codec: T) -> BoxedPaeType
where
    T: PaeType + Send + Sync + 'static,
    T::Value: PaeValueConvert,
{
    Box::new(ErasedPaeType(codec))
}
