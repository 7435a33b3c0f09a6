// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for encoding and decoding operations.

use std::io;

use thiserror::Error;

/// Errors produced on the write path.
///
/// Every variant is either a caller-contract violation caught before (or
/// while) bytes reach the sink, or a fault of the sink itself. Malformed
/// input data never surfaces here; that is [`DecodeError`] territory.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The sink failed while bytes were written or backpatched.
    #[error("Io[{0}]")]
    Io(#[from] io::Error),

    /// A codec declared a constant encoded length but produced a different
    /// number of bytes.
    ///
    /// Only reachable through a custom [`PaeType`](crate::PaeType)
    /// implementation; the shipped codecs uphold their declarations. The
    /// sink is guaranteed untouched when this is reported.
    #[error("ConstantLengthMismatch[expected {expected}, wrote {written}]")]
    ConstantLengthMismatch {
        /// The codec's declared constant length.
        expected: usize,
        /// Bytes the codec actually produced.
        written: usize,
    },

    /// A heterogeneous value sequence does not match its schema's arity.
    ///
    /// Checked before the count prefix is written; nothing reaches the sink.
    #[error("WrongComponentCount[expected {expected}, got {got}]")]
    WrongComponentCount {
        /// Schema length.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// A dynamic value's variant does not match the schema component it was
    /// paired with.
    #[error("ComponentTypeMismatch[{codec}]")]
    ComponentTypeMismatch {
        /// The component codec the value was written against.
        codec: String,
    },

    /// A count or length does not fit the prefix width chosen for it.
    #[error("NumberOutOfRange[value {value}, max {max}]")]
    NumberOutOfRange {
        /// The value that was to be encoded.
        value: u64,
        /// Largest value the chosen width can represent.
        max: u64,
    },
}

/// Errors produced on the read path.
///
/// A single umbrella family: lower-level I/O and parsing faults are
/// translated into one of these variants at the point of occurrence and then
/// propagate unchanged through every nesting level, so the innermost, most
/// specific failure is what the caller observes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The length prefix for the next item could not be read.
    #[error("LengthPrefixUnreadable[{codec}]")]
    LengthPrefixUnreadable {
        /// The codec whose item the prefix belonged to.
        codec: String,
    },

    /// An item's payload could not be parsed by its codec.
    ///
    /// Covers short reads, truncated fixed-width integers and malformed
    /// UTF-8.
    #[error("ValueUnreadable[{codec}]")]
    ValueUnreadable {
        /// The codec that failed to parse its payload.
        codec: String,
    },

    /// The next item's declared size would overrun the expected payload.
    ///
    /// Reported before any of the item's value bytes are read.
    #[error("NextItemTooLong[expected {expected}, required {required}]")]
    NextItemTooLong {
        /// Expected total payload length.
        expected: usize,
        /// Running total after accounting for the offending item.
        required: usize,
    },

    /// The list's items leave part of the expected payload unaccounted for.
    #[error("TrailingData[expected {expected}, accounted {accounted}]")]
    TrailingData {
        /// Expected total payload length.
        expected: usize,
        /// Bytes the list actually accounts for.
        accounted: usize,
    },

    /// The count prefix disagrees with the schema's arity.
    ///
    /// Reported before any item is read.
    #[error("WrongComponentCount[expected {expected}, got {got}]")]
    WrongComponentCount {
        /// Schema length.
        expected: usize,
        /// Item count the payload declared.
        got: usize,
    },
}
