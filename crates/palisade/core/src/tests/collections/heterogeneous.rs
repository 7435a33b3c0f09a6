// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Cursor;

use crate::collections::PaeHeterogeneousList;
use crate::encode::{marshal, unmarshal};
use crate::error::EncodeError;
use crate::number::PaeNumberType;
use crate::primitives::PaeBytes;
use crate::settings::PaeListSettings;
use crate::traits::PaeType;
use crate::value::{PaeValue, erase};

fn with_const_prefix() -> PaeListSettings {
    PaeListSettings::heterogeneous(PaeNumberType::U16)
}

fn no_const_prefix() -> PaeListSettings {
    // Heterogeneous framing with suppressed constant-length prefixes.
    PaeListSettings {
        prefix_if_constant: false,
        ..PaeListSettings::heterogeneous(PaeNumberType::U16)
    }
}

#[test]
fn test_encode_with_const_prefix() {
    let lst = PaeHeterogeneousList::new(
        vec![erase(PaeNumberType::U32), erase(PaeBytes)],
        with_const_prefix(),
    );
    let value = vec![PaeValue::Number(1), PaeValue::Bytes(b"1234".to_vec())];

    assert_eq!(
        marshal(&value, &lst).expect("Failed to marshal"),
        b"\x02\x00\x04\x00\x01\x00\x00\x00\x04\x001234"
    );
}

#[test]
fn test_encode_no_const_prefix() {
    let lst = PaeHeterogeneousList::new(
        vec![erase(PaeNumberType::U32), erase(PaeBytes)],
        no_const_prefix(),
    );
    let value = vec![PaeValue::Number(1), PaeValue::Bytes(b"1234".to_vec())];

    assert_eq!(
        marshal(&value, &lst).expect("Failed to marshal"),
        b"\x02\x00\x01\x00\x00\x00\x04\x001234"
    );
}

#[test]
fn test_encode_three_components_empty_bytes() {
    let lst = PaeHeterogeneousList::new(
        vec![erase(PaeNumberType::U32), erase(PaeBytes), erase(PaeBytes)],
        no_const_prefix(),
    );
    let value = vec![
        PaeValue::Number(1),
        PaeValue::Bytes(Vec::new()),
        PaeValue::Bytes(b"1234".to_vec()),
    ];

    assert_eq!(
        marshal(&value, &lst).expect("Failed to marshal"),
        b"\x03\x00\x01\x00\x00\x00\x00\x00\x04\x001234"
    );
}

#[test]
fn test_encode_empty_schema() {
    let lst = PaeHeterogeneousList::new(Vec::new(), with_const_prefix());

    assert_eq!(marshal(&Vec::new(), &lst).expect("Failed to marshal"), b"\x00\x00");
}

#[test]
fn test_decode_with_const_prefix() {
    let lst = PaeHeterogeneousList::new(
        vec![erase(PaeNumberType::U32), erase(PaeBytes), erase(PaeBytes)],
        with_const_prefix(),
    );

    let decoded = unmarshal(
        b"\x03\x00\x04\x00\x01\x00\x00\x00\x00\x00\x04\x001234",
        &lst,
    )
    .expect("Failed to unmarshal");

    assert_eq!(
        decoded,
        vec![
            PaeValue::Number(1),
            PaeValue::Bytes(Vec::new()),
            PaeValue::Bytes(b"1234".to_vec()),
        ]
    );
}

#[test]
fn test_decode_no_const_prefix() {
    let lst = PaeHeterogeneousList::new(
        vec![erase(PaeNumberType::U32), erase(PaeBytes)],
        no_const_prefix(),
    );

    let decoded =
        unmarshal(b"\x02\x00\x01\x00\x00\x00\x04\x001234", &lst).expect("Failed to unmarshal");

    assert_eq!(
        decoded,
        vec![PaeValue::Number(1), PaeValue::Bytes(b"1234".to_vec())]
    );
}

#[test]
fn test_decode_empty_schema() {
    let lst = PaeHeterogeneousList::new(Vec::new(), with_const_prefix());

    let decoded = unmarshal(b"\x00\x00", &lst).expect("Failed to unmarshal");

    assert!(decoded.is_empty());
}

#[test]
fn test_encode_wrong_component_count_writes_nothing() {
    let lst = PaeHeterogeneousList::new(
        vec![erase(PaeNumberType::U32), erase(PaeBytes)],
        no_const_prefix(),
    );
    let value = vec![
        PaeValue::Number(1),
        PaeValue::Bytes(b"2".to_vec()),
        PaeValue::Number(3),
    ];

    let mut sink = Cursor::new(Vec::new());
    let result = lst.write(&value, &mut sink);

    assert!(matches!(
        result,
        Err(EncodeError::WrongComponentCount {
            expected: 2,
            got: 3
        })
    ));
    assert!(sink.get_ref().is_empty());
}

#[test]
fn test_encode_component_type_mismatch() {
    let lst = PaeHeterogeneousList::new(vec![erase(PaeNumberType::U32)], no_const_prefix());
    let value = vec![PaeValue::Bytes(b"1".to_vec())];

    let result = marshal(&value, &lst);

    assert!(matches!(
        result,
        Err(EncodeError::ComponentTypeMismatch { .. })
    ));
}

#[test]
fn test_arity_accessor() {
    let lst = PaeHeterogeneousList::new(
        vec![erase(PaeNumberType::U32), erase(PaeBytes)],
        with_const_prefix(),
    );

    assert_eq!(lst.arity(), 2);
}
