// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Read;

use crate::decode::PaeListReader;
use crate::encode::write_prefixed;
use crate::error::{DecodeError, EncodeError};
use crate::settings::PaeListSettings;
use crate::traits::{PaeSink, PaeType};

/// Sequence of values all encoded by the same child codec.
///
/// No arity bound beyond what the count-prefix width can represent;
/// encoding a longer list fails with
/// [`EncodeError::NumberOutOfRange`] before anything reaches the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaeHomogeneousList<T> {
    child: T,
    settings: PaeListSettings,
}

impl<T> PaeHomogeneousList<T> {
    pub const fn new(child: T, settings: PaeListSettings) -> Self {
        Self { child, settings }
    }
}

impl<T: PaeType> PaeType for PaeHomogeneousList<T> {
    type Value = Vec<T::Value>;

    fn write(&self, value: &Vec<T::Value>, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        let mut written = self.settings.size_type.write(&(value.len() as u64), sink)?;

        let length_type = self.settings.resolved_length_type();
        for item in value {
            written += write_prefixed(
                item,
                &self.child,
                sink,
                length_type,
                self.settings.prefix_if_constant,
            )?;
        }

        Ok(written)
    }

    fn read(&self, source: &mut dyn Read, length: usize) -> Result<Vec<T::Value>, DecodeError> {
        let mut reader = PaeListReader::new(source, self.settings, Some(length))?;

        let mut result = Vec::new();
        for _ in 0..reader.part_count() {
            reader.next_item_length(&self.child)?;
            result.push(reader.next_item_value(&self.child)?);
        }
        reader.finish()?;

        Ok(result)
    }
}
