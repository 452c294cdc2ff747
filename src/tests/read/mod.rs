// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod locator;

use crate::base::read::mem::ZipFileReader;
use crate::error::ZipError;
use crate::spec::Compression;
use crate::{build_archive, ArchiveEntry};

/// Rewrites the comment length of an archive written without a comment and appends the given comment.
pub(crate) fn with_comment(mut data: Vec<u8>, comment: &[u8]) -> Vec<u8> {
    let length = data.len();
    let comment_length = u16::try_from(comment.len()).expect("comment too long");

    data[length - 2..].copy_from_slice(&comment_length.to_le_bytes());
    data.extend_from_slice(comment);
    data
}

fn scenario_bytes() -> Vec<u8> {
    let entries = vec![ArchiveEntry::text("a.txt", "hello"), ArchiveEntry::text("dir/b.json", r#"{"x":1}"#)];
    build_archive(&entries).expect("failed to build archive").into_bytes()
}

#[test]
fn entries() {
    let data = scenario_bytes();
    let zip_reader = ZipFileReader::new(&data).expect("failed to open reader");

    let names: Vec<_> = zip_reader
        .entries()
        .iter()
        .map(|entry| entry.filename().as_str().expect("filename is not UTF-8").to_owned())
        .collect();
    assert_eq!(names, vec!["a.txt", "dir/b.json"]);

    let entry = &zip_reader.entries()[1];
    assert_eq!(entry.compression().expect("unsupported compression"), Compression::Stored);
    assert_eq!(entry.uncompressed_size(), 7);
    assert_eq!(entry.compressed_size(), 7);
    assert_eq!(entry.header_offset(), 40);
    assert!(zip_reader.comment().as_bytes().is_empty());
}

#[test]
fn entry_with_comment() {
    let data = with_comment(scenario_bytes(), b"packaged for radio submission");
    let zip_reader = ZipFileReader::new(&data).expect("failed to open reader");

    assert_eq!(zip_reader.comment().as_str().expect("comment is not UTF-8"), "packaged for radio submission");
    assert_eq!(zip_reader.read_entry(0).expect("failed to read entry"), b"hello");
}

#[test]
fn missing_entry() {
    let data = scenario_bytes();
    let zip_reader = ZipFileReader::new(&data).expect("failed to open reader");

    assert!(zip_reader.entry("c.txt").is_none());
    assert!(matches!(zip_reader.read_entry(2), Err(ZipError::EntryIndexOutOfBounds)));
}

#[test]
fn zero_length_zip() {
    assert!(ZipFileReader::new(&[]).is_err());
}

#[test]
fn corrupted_data_fails_crc() {
    let mut data = scenario_bytes();
    // The first byte of "hello".
    data[35] = b'j';

    let zip_reader = ZipFileReader::new(&data).expect("failed to open reader");
    assert!(matches!(zip_reader.read_entry(0), Err(ZipError::CRC32CheckError)));
    assert_eq!(zip_reader.read_entry(1).expect("failed to read entry"), br#"{"x":1}"#);
}

#[test]
fn corrupted_local_header_signature() {
    let mut data = scenario_bytes();
    data[0] = 0;

    let zip_reader = ZipFileReader::new(&data).expect("failed to open reader");
    assert!(matches!(zip_reader.read_entry(0), Err(ZipError::UnexpectedHeaderError(0x4034b00, 0x4034b50))));
}

#[test]
fn unsupported_compression() {
    let mut data = scenario_bytes();
    // The compression field of the first central directory record.
    data[87 + 10] = 8;

    let zip_reader = ZipFileReader::new(&data).expect("failed to open reader");
    assert!(matches!(zip_reader.read_entry(0), Err(ZipError::CompressionNotSupported(8))));
}

#[test]
fn spanned_archive() {
    let mut data = scenario_bytes();
    let length = data.len();
    // The disk number of the end of central directory record.
    data[length - 18] = 1;

    assert!(matches!(ZipFileReader::new(&data), Err(ZipError::FeatureNotSupported(_))));
}

#[test]
fn truncated_central_directory() {
    let data = scenario_bytes();
    let eocdr = data[data.len() - 22..].to_vec();

    assert!(matches!(ZipFileReader::new(&eocdr), Err(ZipError::UpstreamIoError(_))));
}
