// Copyright (c) 2022-2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports reading stored ZIP files held in memory.
//!
//! This exists to check archives produced by this crate; it understands stored entries only and rejects ZIP64 and
//! spanned archives.

pub mod mem;

pub(crate) mod io;

use crate::error::Result;
use crate::spec::consts::CDH_SIGNATURE;
use crate::spec::date::ZipDateTime;
use crate::spec::header::CentralDirectoryRecord;
use crate::spec::Compression;
use crate::string::{StringEncoding, ZipString};

use std::io::{Read, Seek, SeekFrom};

/// An entry as described by its central directory record.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    filename: ZipString,
    compression: u16,
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    header_offset: u32,
    last_modification_date: ZipDateTime,
}

impl StoredEntry {
    /// Returns the entry's filename.
    ///
    /// # Note
    /// Filenames read from untrusted archives should be sanitised before being used as a path.
    pub fn filename(&self) -> &ZipString {
        &self.filename
    }

    /// Returns the entry's compression method, erroring if it isn't one this crate supports.
    pub fn compression(&self) -> Result<Compression> {
        Compression::try_from(self.compression)
    }

    /// Returns the entry's CRC32 value.
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Returns the entry's compressed size.
    pub fn compressed_size(&self) -> u32 {
        self.compressed_size
    }

    /// Returns the entry's uncompressed size.
    pub fn uncompressed_size(&self) -> u32 {
        self.uncompressed_size
    }

    /// Returns the offset of the entry's local file header from the start of the archive.
    pub fn header_offset(&self) -> u32 {
        self.header_offset
    }

    /// Returns the entry's last modification date.
    pub fn last_modification_date(&self) -> ZipDateTime {
        self.last_modification_date
    }
}

pub(crate) fn cd<R>(reader: &mut R, num_of_entries: u16) -> Result<Vec<StoredEntry>>
where
    R: Read + Seek,
{
    let mut entries = Vec::with_capacity(num_of_entries.into());

    for _ in 0..num_of_entries {
        entries.push(cd_record(reader)?);
    }

    Ok(entries)
}

pub(crate) fn cd_record<R>(reader: &mut R) -> Result<StoredEntry>
where
    R: Read + Seek,
{
    io::assert_signature(reader, CDH_SIGNATURE)?;

    let header = CentralDirectoryRecord::from_reader(reader)?;
    let filename = io::read_bytes(reader, header.file_name_length.into())?;

    // Extra fields and comments are skipped.
    let trailing = i64::from(header.extra_field_length) + i64::from(header.file_comment_length);
    reader.seek(SeekFrom::Current(trailing))?;

    // Names without the language encoding flag are only trusted as UTF-8 when they're plain ASCII.
    let encoding = match header.flags.filename_unicode || filename.is_ascii() {
        true => StringEncoding::Utf8,
        false => StringEncoding::Raw,
    };

    Ok(StoredEntry {
        filename: ZipString::new(filename, encoding),
        compression: header.compression,
        crc32: header.crc,
        compressed_size: header.compressed_size,
        uncompressed_size: header.uncompressed_size,
        header_offset: header.lh_offset,
        last_modification_date: ZipDateTime::from_raw(header.mod_date, header.mod_time),
    })
}
