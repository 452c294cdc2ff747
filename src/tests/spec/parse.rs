// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader};

#[test]
fn general_purpose_flag() {
    assert_eq!(u16::from(GeneralPurposeFlag::default()), 0);

    let unicode = GeneralPurposeFlag { filename_unicode: true, ..Default::default() };
    assert_eq!(unicode.as_slice(), [0x00, 0x08]);
    assert_eq!(
        GeneralPurposeFlag::from(0x0809),
        GeneralPurposeFlag { encrypted: true, data_descriptor: true, filename_unicode: true }
    );
}

#[test]
fn local_file_header_layout() {
    let header = LocalFileHeader {
        version: 20,
        flags: GeneralPurposeFlag::default(),
        compression: 0,
        mod_time: 0x1122,
        mod_date: 0x3344,
        crc: 0xDEADBEEF,
        compressed_size: 0x01020304,
        uncompressed_size: 0x01020304,
        file_name_length: 5,
        extra_field_length: 0,
    };

    let bytes = header.as_slice();
    assert_eq!(
        bytes,
        [
            0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x22, 0x11, 0x44, 0x33, 0xEF, 0xBE, 0xAD, 0xDE, 0x04, 0x03, 0x02, 0x01,
            0x04, 0x03, 0x02, 0x01, 0x05, 0x00, 0x00, 0x00
        ]
    );
    assert_eq!(LocalFileHeader::from(bytes), header);
}

#[test]
fn central_directory_record_layout() {
    let record = CentralDirectoryRecord {
        v_made_by: 20,
        v_needed: 20,
        flags: GeneralPurposeFlag { filename_unicode: true, ..Default::default() },
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 1,
        compressed_size: 2,
        uncompressed_size: 2,
        file_name_length: 3,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: 0x0A0B0C0D,
    };

    let bytes = record.as_slice();
    assert_eq!(&bytes[4..6], &[0x00, 0x08]);
    assert_eq!(&bytes[38..42], &[0x0D, 0x0C, 0x0B, 0x0A]);
    assert_eq!(CentralDirectoryRecord::from(bytes), record);
}

#[test]
fn end_of_central_directory_layout() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 2,
        num_of_entries: 2,
        size_cent_dir: 107,
        cent_dir_offset: 87,
        file_comm_length: 0,
    };

    assert_eq!(header.as_slice(), [0, 0, 0, 0, 2, 0, 2, 0, 107, 0, 0, 0, 87, 0, 0, 0, 0, 0]);
    assert_eq!(EndOfCentralDirectoryHeader::from(header.as_slice()), header);
}
