// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::number::PaeNumberType;

/// Immutable list-framing configuration.
///
/// Bundles the count-prefix width, the per-item length-prefix width and the
/// treatment of constant-length items. Compared and passed by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaeListSettings {
    /// Width of the leading item-count prefix.
    pub size_type: PaeNumberType,
    /// Width of per-item length prefixes; `None` falls back to `size_type`.
    pub length_type: Option<PaeNumberType>,
    /// Whether items whose codec declares a constant length still receive a
    /// length prefix.
    pub prefix_if_constant: bool,
}

impl PaeListSettings {
    /// Preset for homogeneous lists.
    ///
    /// Constant-length items are not prefixed; their length is inferable
    /// from the (single, shared) child codec.
    pub const fn homogeneous(size_type: PaeNumberType) -> Self {
        Self {
            size_type,
            length_type: None,
            prefix_if_constant: false,
        }
    }

    /// Preset for heterogeneous lists.
    ///
    /// Constant-length components stay prefixed: the components may have
    /// vastly different individually-constant lengths, and decoding symmetry
    /// wants them demarcated.
    pub const fn heterogeneous(size_type: PaeNumberType) -> Self {
        Self {
            size_type,
            length_type: None,
            prefix_if_constant: true,
        }
    }

    /// Overrides the per-item length-prefix width.
    pub const fn with_length_type(mut self, length_type: PaeNumberType) -> Self {
        self.length_type = Some(length_type);
        self
    }

    /// The per-item length-prefix width in effect.
    #[inline(always)]
    pub fn resolved_length_type(&self) -> PaeNumberType {
        self.length_type.unwrap_or(self.size_type)
    }
}
