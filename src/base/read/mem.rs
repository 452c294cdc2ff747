// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A ZIP reader which acts over a borrowed slice of bytes.
//!
//! ### Example
//! ```
//! # use stored_zip::{build_archive, ArchiveEntry};
//! # use stored_zip::base::read::mem::ZipFileReader;
//! # use stored_zip::error::Result;
//! #
//! # fn run() -> Result<()> {
//! let blob = build_archive(&[ArchiveEntry::text("a.txt", "hello")])?;
//! let reader = ZipFileReader::new(blob.as_bytes())?;
//!
//! assert_eq!(reader.read_entry(0)?, b"hello");
//! #   Ok(())
//! # }
//! ```

use crate::base::read::io::{self, locator};
use crate::base::read::StoredEntry;
use crate::base::write::entry_whole::compute_crc;
use crate::error::{Result, ZipError};
use crate::spec::consts::{LFH_RECORD_LENGTH, LFH_SIGNATURE};
use crate::spec::header::{EndOfCentralDirectoryHeader, LocalFileHeader};
use crate::string::{StringEncoding, ZipString};

use std::io::{Cursor, ErrorKind};

/// A ZIP reader which acts over a borrowed slice of bytes.
#[derive(Debug, Clone)]
pub struct ZipFileReader<'a> {
    data: &'a [u8],
    entries: Vec<StoredEntry>,
    comment: ZipString,
}

impl<'a> ZipFileReader<'a> {
    /// Constructs a new ZIP reader, parsing the end of central directory record and the central directory.
    pub fn new(data: &'a [u8]) -> Result<ZipFileReader<'a>> {
        let eocdr_offset = locator::eocdr(data)?;

        let mut cursor = Cursor::new(data);
        cursor.set_position(eocdr_offset as u64);

        let eocdr = EndOfCentralDirectoryHeader::from_reader(&mut cursor)?;
        let comment = io::read_bytes(&mut cursor, eocdr.file_comm_length.into())?;

        // Outdated feature so unlikely to ever make it into this crate.
        if eocdr.disk_num != eocdr.start_cent_dir_disk || eocdr.num_of_entries != eocdr.num_of_entries_disk {
            return Err(ZipError::FeatureNotSupported("Spanned/split files"));
        }
        tracing::debug!(?eocdr, offset = eocdr_offset, "located end of central directory record");

        cursor.set_position(eocdr.cent_dir_offset.into());
        let entries = crate::base::read::cd(&mut cursor, eocdr.num_of_entries)?;

        Ok(ZipFileReader { data, entries, comment: ZipString::new(comment, StringEncoding::Utf8) })
    }

    /// Returns the entries described by the central directory, in order.
    pub fn entries(&self) -> &[StoredEntry] {
        &self.entries
    }

    /// Returns the first entry with the given filename, alongside its index.
    pub fn entry(&self, filename: &str) -> Option<(usize, &StoredEntry)> {
        self.entries.iter().enumerate().find(|(_, entry)| entry.filename().as_bytes() == filename.as_bytes())
    }

    /// Returns the archive comment.
    pub fn comment(&self) -> &ZipString {
        &self.comment
    }

    /// Returns the data of the entry at the given index, verifying its local file header and CRC32 value.
    pub fn read_entry(&self, index: usize) -> Result<&'a [u8]> {
        let entry = self.entries.get(index).ok_or(ZipError::EntryIndexOutOfBounds)?;
        entry.compression()?;

        let mut cursor = Cursor::new(self.data);
        cursor.set_position(entry.header_offset().into());

        io::assert_signature(&mut cursor, LFH_SIGNATURE)?;
        let header = LocalFileHeader::from_reader(&mut cursor)?;

        let start = entry.header_offset() as usize
            + LFH_RECORD_LENGTH
            + header.file_name_length as usize
            + header.extra_field_length as usize;
        let end = start + entry.compressed_size() as usize;
        let data = self.data.get(start..end).ok_or_else(|| std::io::Error::from(ErrorKind::UnexpectedEof))?;

        if compute_crc(data) != entry.crc32() {
            return Err(ZipError::CRC32CheckError);
        }

        Ok(data)
    }
}
