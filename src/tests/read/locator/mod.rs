// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::read::io::locator::{eocdr, reverse_search_buffer};
use crate::error::ZipError;
use crate::tests::read::with_comment;
use crate::{build_archive, ArchiveEntry};

#[test]
fn search_one_byte_test() {
    let buffer: &[u8] = &[0x0, 0x0, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert!(matched.is_none());

    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert_eq!(Some(1), matched);
}

#[test]
fn search_two_byte_test() {
    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert_eq!(Some(1), matched);
}

#[test]
fn search_partial_match_at_start_test() {
    let buffer: &[u8] = &[0x1, 0x0, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    assert!(reverse_search_buffer(buffer, signature).is_none());
}

#[test]
fn locator_empty_test() {
    let blob = build_archive(&[]).expect("failed to build archive");
    assert_eq!(eocdr(blob.as_bytes()).expect("failed to locate EOCDR"), 4);
}

#[test]
fn locator_after_entries_test() {
    let blob = build_archive(&[ArchiveEntry::text("a.txt", "hello")]).expect("failed to build archive");
    let expected = blob.len() - 18;

    assert_eq!(eocdr(blob.as_bytes()).expect("failed to locate EOCDR"), expected);
}

#[test]
fn locator_empty_max_comment_test() {
    let blob = build_archive(&[]).expect("failed to build archive");
    let data = with_comment(blob.into_bytes(), &vec![b'c'; u16::MAX as usize]);

    assert_eq!(eocdr(&data).expect("failed to locate EOCDR"), 4);
}

#[test]
fn locator_too_short_test() {
    assert!(matches!(eocdr(&[]), Err(ZipError::UnableToLocateEOCDR)));
    assert!(matches!(eocdr(&[0x50, 0x4B, 0x05, 0x06]), Err(ZipError::UnableToLocateEOCDR)));
}

#[test]
fn locator_missing_signature_test() {
    let data = vec![0; 1024];
    assert!(matches!(eocdr(&data), Err(ZipError::UnableToLocateEOCDR)));
}
