// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade
//!
//! Pre-Authentication Encoding (PAE): a deterministic, unambiguous scheme
//! for serializing an ordered sequence of values into one byte string, and
//! recovering the exact sequence on decode. Every encodable unit is
//! explicitly length-delimited, so no concatenation of sub-values can ever
//! be re-segmented into a different valid sequence — the property that makes
//! PAE output safe to feed into a MAC or signature primitive.
//!
//! This crate re-exports [`palisade-core`] and adds the two package-level
//! convenience encoders.
//!
//! ## Quick Start
//!
//! ```rust
//! use palisade::{PaeNumberType, pae_encode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let encoded = pae_encode(
//!     vec![b"12".to_vec(), b"345".to_vec()],
//!     PaeNumberType::U16,
//! )?;
//!
//! assert_eq!(encoded, b"\x02\x00\x02\x0012\x03\x00345");
//! # Ok(())
//! # }
//! ```
//!
//! Composite structures go through the codec types directly:
//!
//! ```rust
//! use palisade::{
//!     PaeBytes, PaeListSettings, PaeNumberType, PaeValue, erase,
//!     pae_encode_multiple,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let encoded = pae_encode_multiple(
//!     vec![
//!         (PaeValue::Number(1), erase(PaeNumberType::U32)),
//!         (PaeValue::Bytes(b"1234".to_vec()), erase(PaeBytes)),
//!     ],
//!     PaeNumberType::U16,
//! )?;
//!
//! assert_eq!(encoded, b"\x02\x00\x04\x00\x01\x00\x00\x00\x04\x001234");
//! # Ok(())
//! # }
//! ```
//!
//! ## Documentation
//!
//! See [`palisade-core`] for the codec types, the wire format and the error
//! contract.
//!
//! [`palisade-core`]: https://docs.rs/palisade-core

pub use palisade_core::*;

/// Encodes a list of byte strings as a homogeneous PAE list.
///
/// Uses [`PaeListSettings::homogeneous`] framing with `size_type` for both
/// the count prefix and the per-item length prefixes.
pub fn pae_encode(
    items: Vec<Vec<u8>>,
    size_type: PaeNumberType,
) -> Result<Vec<u8>, EncodeError> {
    let list_type = PaeHomogeneousList::new(PaeBytes, PaeListSettings::homogeneous(size_type));

    marshal(&items, &list_type)
}

/// Encodes (value, codec) pairs as a single heterogeneous PAE blob.
///
/// Uses [`PaeListSettings::heterogeneous`] framing, so constant-length
/// components keep their length prefixes.
pub fn pae_encode_multiple(
    pairs: Vec<(PaeValue, BoxedPaeType)>,
    size_type: PaeNumberType,
) -> Result<Vec<u8>, EncodeError> {
    let (values, components): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
    let list_type =
        PaeHeterogeneousList::new(components, PaeListSettings::heterogeneous(size_type));

    marshal(&values, &list_type)
}
