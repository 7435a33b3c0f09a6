// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The incremental, bounds-checked read primitive.
//!
//! Both list codecs decode through [`PaeListReader`]. The cursor couples the
//! running byte count to each item's consumption, so an oversized or
//! undersized payload is rejected at the innermost nesting level where it
//! becomes detectable, before any wasted value decoding.

use std::io::Read;

use crate::error::DecodeError;
use crate::settings::PaeListSettings;
use crate::traits::PaeType;

/// Stateful decode cursor over one list payload.
///
/// Construction reads the count prefix. Each item is then consumed with a
/// strictly alternating pair of calls: [`next_item_length`] reads (or
/// infers) the item's length prefix and runs the bounds checks, and
/// [`next_item_value`] decodes the item with the same child codec. The split
/// exists so a heterogeneous list can pick the next component codec between
/// the two phases.
///
/// [`next_item_length`]: Self::next_item_length
/// [`next_item_value`]: Self::next_item_value
pub struct PaeListReader<'a> {
    source: &'a mut dyn Read,
    settings: PaeListSettings,
    expected_length: Option<usize>,
    part_count: usize,
    parts_consumed: usize,
    bytes_read: usize,
    pending_length: Option<usize>,
}

impl<'a> PaeListReader<'a> {
    /// Reads the count prefix and positions the cursor before the first
    /// item.
    ///
    /// `expected_length` is the total payload length the surrounding context
    /// knows (always known for nested lists, whose own length prefix bounds
    /// them); `None` disables the exact-consumption checks.
    pub fn new(
        source: &'a mut dyn Read,
        settings: PaeListSettings,
        expected_length: Option<usize>,
    ) -> Result<Self, DecodeError> {
        let size_type = settings.size_type;
        let raw_count = size_type.read(&mut *source, size_type.width())?;

        // Saturate on 32-bit targets; the bounds checks below reject any
        // payload that could not actually hold this many items.
        let part_count = usize::try_from(raw_count).unwrap_or(usize::MAX);

        Ok(Self {
            source,
            settings,
            expected_length,
            part_count,
            parts_consumed: 0,
            bytes_read: size_type.width(),
            pending_length: None,
        })
    }

    /// Number of items the count prefix declared.
    #[inline(always)]
    pub fn part_count(&self) -> usize {
        self.part_count
    }

    /// Reads the next item's length prefix, or infers the length from the
    /// child's declared constant.
    ///
    /// Runs the bounds checks *before* any value bytes are touched: an item
    /// overrunning the expected payload fails with
    /// [`DecodeError::NextItemTooLong`], and a final item that leaves bytes
    /// unaccounted for fails with [`DecodeError::TrailingData`]. Returns the
    /// item's total consumed length (prefix included).
    ///
    /// # Panics
    ///
    /// Panics when called twice without an intervening
    /// [`next_item_value`](Self::next_item_value), or past the declared item
    /// count. Both are caller bugs, not data errors.
    pub fn next_item_length<T: PaeType + ?Sized>(
        &mut self,
        child: &T,
    ) -> Result<usize, DecodeError> {
        assert!(
            self.pending_length.is_none(),
            "next_item_value must consume the pending item first"
        );
        assert!(
            self.parts_consumed < self.part_count,
            "all declared items have been consumed"
        );

        let (prefix_width, item_length) = match child.constant_length() {
            Some(constant) if !self.settings.prefix_if_constant => (0, constant),
            _ => {
                let length_type = self.settings.resolved_length_type();
                let mut prefix = [0u8; 8];
                self.source
                    .read_exact(&mut prefix[..length_type.width()])
                    .map_err(|_| DecodeError::LengthPrefixUnreadable {
                        codec: format!("{child:?}"),
                    })?;

                let length = length_type.unpack(&prefix[..length_type.width()])?;
                (
                    length_type.width(),
                    usize::try_from(length).unwrap_or(usize::MAX),
                )
            }
        };

        // Saturating: an overflowing total exceeds any representable
        // expected length and is rejected just below.
        let consumed = prefix_width.saturating_add(item_length);
        self.bytes_read = self.bytes_read.saturating_add(consumed);
        self.parts_consumed += 1;

        if let Some(expected) = self.expected_length {
            if self.bytes_read > expected {
                return Err(DecodeError::NextItemTooLong {
                    expected,
                    required: self.bytes_read,
                });
            }

            // The last item must land exactly on the expected total;
            // leftover bytes are detected before its value is decoded.
            if self.parts_consumed == self.part_count && self.bytes_read != expected {
                return Err(DecodeError::TrailingData {
                    expected,
                    accounted: self.bytes_read,
                });
            }
        }

        self.pending_length = Some(item_length);

        Ok(consumed)
    }

    /// Decodes the pending item with `child`.
    ///
    /// Child errors are already decode errors and propagate unchanged; no
    /// re-wrapping happens at this level.
    ///
    /// # Panics
    ///
    /// Panics when no [`next_item_length`](Self::next_item_length) call is
    /// pending.
    pub fn next_item_value<T: PaeType + ?Sized>(
        &mut self,
        child: &T,
    ) -> Result<T::Value, DecodeError> {
        let length = self
            .pending_length
            .take()
            .expect("next_item_length must run before next_item_value");

        child.read(&mut *self.source, length)
    }

    /// Verifies the whole expected payload has been accounted for.
    ///
    /// The per-item checks already guarantee this for non-empty lists; an
    /// empty list followed by trailing bytes is only caught here.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if let Some(expected) = self.expected_length {
            if self.bytes_read != expected {
                return Err(DecodeError::TrailingData {
                    expected,
                    accounted: self.bytes_read,
                });
            }
        }

        Ok(())
    }
}
