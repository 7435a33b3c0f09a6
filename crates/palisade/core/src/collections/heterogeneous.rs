// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Read;

use crate::decode::PaeListReader;
use crate::encode::write_prefixed;
use crate::error::{DecodeError, EncodeError};
use crate::settings::PaeListSettings;
use crate::traits::{PaeSink, PaeType};
use crate::value::{BoxedPaeType, PaeValue};

/// Fixed-arity tuple of values, each with its own component codec.
///
/// The schema commits to both the order and the number of components.
/// Arity mismatches are rejected on write before anything reaches the sink,
/// and on read before any item is decoded.
#[derive(Debug)]
pub struct PaeHeterogeneousList {
    components: Vec<BoxedPaeType>,
    settings: PaeListSettings,
}

impl PaeHeterogeneousList {
    pub fn new(components: Vec<BoxedPaeType>, settings: PaeListSettings) -> Self {
        Self {
            components,
            settings,
        }
    }

    /// The list's required arity.
    pub fn arity(&self) -> usize {
        self.components.len()
    }
}

impl PaeType for PaeHeterogeneousList {
    type Value = Vec<PaeValue>;

    fn write(&self, value: &Vec<PaeValue>, sink: &mut dyn PaeSink) -> Result<usize, EncodeError> {
        if value.len() != self.components.len() {
            return Err(EncodeError::WrongComponentCount {
                expected: self.components.len(),
                got: value.len(),
            });
        }

        let mut written = self.settings.size_type.write(&(value.len() as u64), sink)?;

        let length_type = self.settings.resolved_length_type();
        for (item, component) in value.iter().zip(&self.components) {
            written += write_prefixed(
                item,
                component.as_ref(),
                sink,
                length_type,
                self.settings.prefix_if_constant,
            )?;
        }

        Ok(written)
    }

    fn read(&self, source: &mut dyn Read, length: usize) -> Result<Vec<PaeValue>, DecodeError> {
        let mut reader = PaeListReader::new(source, self.settings, Some(length))?;

        if reader.part_count() != self.components.len() {
            return Err(DecodeError::WrongComponentCount {
                expected: self.components.len(),
                got: reader.part_count(),
            });
        }

        let mut result = Vec::with_capacity(self.components.len());
        for component in &self.components {
            reader.next_item_length(component.as_ref())?;
            result.push(reader.next_item_value(component.as_ref())?);
        }
        reader.finish()?;

        Ok(result)
    }
}
