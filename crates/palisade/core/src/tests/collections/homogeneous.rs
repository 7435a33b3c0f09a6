// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::collections::PaeHomogeneousList;
use crate::encode::{marshal, unmarshal};
use crate::error::EncodeError;
use crate::number::PaeNumberType;
use crate::primitives::PaeBytes;
use crate::settings::PaeListSettings;

fn bytes_list(settings: PaeListSettings) -> PaeHomogeneousList<PaeBytes> {
    PaeHomogeneousList::new(PaeBytes, settings)
}

fn byte_vecs(items: &[&[u8]]) -> Vec<Vec<u8>> {
    items.iter().map(|item| item.to_vec()).collect()
}

#[test]
fn test_encode_bytes_ushort() {
    let lst = bytes_list(PaeListSettings::homogeneous(PaeNumberType::U16));

    for (input, expected) in [
        (
            byte_vecs(&[b"12", b"345"]),
            b"\x02\x00\x02\x0012\x03\x00345".as_slice(),
        ),
        (byte_vecs(&[]), b"\x00\x00".as_slice()),
        (
            byte_vecs(&[b"123", b"45", b"67", b"89"]),
            b"\x04\x00\x03\x00123\x02\x0045\x02\x0067\x02\x0089".as_slice(),
        ),
    ] {
        assert_eq!(marshal(&input, &lst).expect("Failed to marshal"), expected);
    }
}

#[test]
fn test_encode_bytes_uint() {
    let lst = bytes_list(PaeListSettings::homogeneous(PaeNumberType::U32));

    for (input, expected) in [
        (
            byte_vecs(&[b"12", b"345"]),
            b"\x02\x00\x00\x00\x02\x00\x00\x0012\x03\x00\x00\x00345".as_slice(),
        ),
        (byte_vecs(&[]), b"\x00\x00\x00\x00".as_slice()),
    ] {
        assert_eq!(marshal(&input, &lst).expect("Failed to marshal"), expected);
    }
}

#[test]
fn test_encode_bytes_mixed_widths() {
    // u32 count prefix, u16 per-item length prefixes.
    let lst = bytes_list(
        PaeListSettings::homogeneous(PaeNumberType::U32).with_length_type(PaeNumberType::U16),
    );

    assert_eq!(
        marshal(&byte_vecs(&[b"12", b"345"]), &lst).expect("Failed to marshal"),
        b"\x02\x00\x00\x00\x02\x0012\x03\x00345"
    );
    assert_eq!(
        marshal(&byte_vecs(&[b"123", b"45", b"67", b"89"]), &lst).expect("Failed to marshal"),
        b"\x04\x00\x00\x00\x03\x00123\x02\x0045\x02\x0067\x02\x0089"
    );
}

#[test]
fn test_decode_bytes_ushort() {
    let lst = bytes_list(PaeListSettings::homogeneous(PaeNumberType::U16));

    for (packed, expected) in [
        (
            b"\x02\x00\x02\x0012\x03\x00345".as_slice(),
            byte_vecs(&[b"12", b"345"]),
        ),
        (b"\x00\x00".as_slice(), byte_vecs(&[])),
        (
            b"\x04\x00\x03\x00123\x02\x0045\x02\x0067\x02\x0089".as_slice(),
            byte_vecs(&[b"123", b"45", b"67", b"89"]),
        ),
    ] {
        assert_eq!(unmarshal(packed, &lst).expect("Failed to unmarshal"), expected);
    }
}

#[test]
fn test_decode_bytes_mixed_widths() {
    let lst = bytes_list(
        PaeListSettings::homogeneous(PaeNumberType::U32).with_length_type(PaeNumberType::U16),
    );

    assert_eq!(
        unmarshal(b"\x02\x00\x00\x00\x02\x0012\x03\x00345", &lst)
            .expect("Failed to unmarshal"),
        byte_vecs(&[b"12", b"345"])
    );
}

#[test]
fn test_constant_length_items_unprefixed() {
    // u8 items with suppressed prefixes: size_width + n * item_width.
    let lst = PaeHomogeneousList::new(
        PaeNumberType::U8,
        PaeListSettings::homogeneous(PaeNumberType::U16),
    );
    let value = vec![1u64, 2, 3];

    let encoded = marshal(&value, &lst).expect("Failed to marshal");
    assert_eq!(encoded, b"\x03\x00\x01\x02\x03");
    assert_eq!(encoded.len(), 2 + 3);

    assert_eq!(unmarshal(&encoded, &lst).expect("Failed to unmarshal"), value);
}

#[test]
fn test_constant_length_items_forced_prefix() {
    // Same list with forced prefixes adds length_width bytes per item.
    let lst = PaeHomogeneousList::new(
        PaeNumberType::U8,
        PaeListSettings {
            size_type: PaeNumberType::U16,
            length_type: None,
            prefix_if_constant: true,
        },
    );
    let value = vec![1u64, 2, 3];

    let encoded = marshal(&value, &lst).expect("Failed to marshal");
    assert_eq!(encoded, b"\x03\x00\x01\x00\x01\x01\x00\x02\x01\x00\x03");
    assert_eq!(encoded.len(), 2 + 3 * (2 + 1));

    assert_eq!(unmarshal(&encoded, &lst).expect("Failed to unmarshal"), value);
}

#[test]
fn test_u64_items_size_equation() {
    let lst = PaeHomogeneousList::new(
        PaeNumberType::U64,
        PaeListSettings::homogeneous(PaeNumberType::U16),
    );
    let value = vec![1u64, u64::MAX];

    let encoded = marshal(&value, &lst).expect("Failed to marshal");
    assert_eq!(encoded.len(), 2 + 2 * 8);
    assert_eq!(
        encoded,
        b"\x02\x00\x01\x00\x00\x00\x00\x00\x00\x00\xff\xff\xff\xff\xff\xff\xff\xff"
    );

    assert_eq!(unmarshal(&encoded, &lst).expect("Failed to unmarshal"), value);
}

#[test]
fn test_count_exceeding_prefix_width() {
    let lst = bytes_list(PaeListSettings::homogeneous(PaeNumberType::U8));
    let value = vec![Vec::new(); 256];

    let result = marshal(&value, &lst);

    assert!(matches!(
        result,
        Err(EncodeError::NumberOutOfRange {
            value: 256,
            max: 255
        })
    ));
}

#[test]
fn test_borrowed_child_codec() {
    // One codec instance can back any number of lists.
    let child = PaeBytes;
    let lst = PaeHomogeneousList::new(&child, PaeListSettings::homogeneous(PaeNumberType::U16));
    let value = byte_vecs(&[b"12"]);

    let encoded = marshal(&value, &lst).expect("Failed to marshal");
    assert_eq!(encoded, b"\x01\x00\x02\x0012");

    assert_eq!(unmarshal(&encoded, &lst).expect("Failed to unmarshal"), value);
}

#[test]
fn test_count_prefix_states_item_count() {
    let lst = bytes_list(PaeListSettings::homogeneous(PaeNumberType::U16));
    let value = byte_vecs(&[b"a", b"b", b"c", b"d", b"e"]);

    let encoded = marshal(&value, &lst).expect("Failed to marshal");

    assert_eq!(
        PaeNumberType::U16.unpack(&encoded[..2]).expect("Failed to unpack"),
        5
    );
}
