// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pre-Authentication Encoding: unambiguous, length-delimited binary lists.
//!
//! Every encodable unit carries an explicit length, so concatenated values
//! can never be re-segmented into a different sequence. The output is meant
//! to be fed to a MAC or signature primitive; this crate only guarantees the
//! injective byte mapping, not any cryptography.

#[cfg(test)]
mod tests;

mod blankets;
mod decode;
mod encode;
mod error;
mod number;
mod primitives;
mod settings;
mod traits;
mod value;

pub mod collections;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use collections::{PaeHeterogeneousList, PaeHomogeneousList};
pub use decode::PaeListReader;
pub use encode::{marshal, unmarshal, write_prefixed};
pub use error::{DecodeError, EncodeError};
pub use number::PaeNumberType;
pub use primitives::{PaeBytes, PaeString};
pub use settings::PaeListSettings;
pub use traits::{PaeSink, PaeType};
pub use value::{BoxedPaeType, ErasedPaeType, PaeValue, PaeValueConvert, erase};
