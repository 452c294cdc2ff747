// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing stored (uncompressed) ZIP files.
//!
//! Every entry's content is held in memory and its length is known up front, so each local file header carries its
//! final sizes and CRC and no data descriptors are ever written.
//!
//! # Example
//! ```
//! # use stored_zip::{ArchiveEntry, base::write::ZipFileWriter};
//! # use stored_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipFileWriter::new(Vec::<u8>::new());
//!
//! writer.write_entry_whole(&ArchiveEntry::text("foo.txt", "This is an example file."))?;
//! let bytes = writer.close()?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod entry_whole;
pub(crate) mod io;

use crate::entry::ArchiveEntry;
use crate::error::{Result, SizeLimitCase, ZipError};
use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, MAX_SIZE};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader};

use entry_whole::EntryWholeWriter;
use io::offset::OffsetWriter;

use std::io::Write;

pub(crate) struct CentralDirectoryEntry {
    pub header: CentralDirectoryRecord,
    pub filename: Vec<u8>,
}

/// A ZIP file writer which acts over [`Write`] implementers.
///
/// Entries are written in the order they are provided. Byte offsets are tracked as data passes through, so the
/// writer never seeks and works equally well over a `Vec<u8>` or a file.
///
/// # Note
/// - [`ZipFileWriter::close()`] must be called once all entries are written, otherwise the output lacks its central
///   directory and is not a valid archive.
pub struct ZipFileWriter<W> {
    pub(crate) writer: OffsetWriter<W>,
    pub(crate) cd_entries: Vec<CentralDirectoryEntry>,
}

impl<W: Write> ZipFileWriter<W> {
    /// Construct a new ZIP file writer from a writer.
    pub fn new(writer: W) -> Self {
        Self { writer: OffsetWriter::new(writer), cd_entries: Vec::new() }
    }

    /// Write a new stored ZIP entry.
    ///
    /// If this returns an [`ZipError::InvalidEntry`] or [`ZipError::UnsupportedSize`] error, nothing was written for
    /// the entry and the writer may continue to be used.
    pub fn write_entry_whole(&mut self, entry: &ArchiveEntry) -> Result<()> {
        EntryWholeWriter::from_raw(self, entry).write()
    }

    /// Returns the number of bytes written so far.
    pub fn offset(&self) -> u64 {
        self.writer.offset()
    }

    /// Returns the number of entries written so far.
    pub fn entry_count(&self) -> usize {
        self.cd_entries.len()
    }

    /// Returns a mutable reference to the inner writer.
    ///
    /// Care should be taken when using this inner writer as doing so may invalidate internal state of this writer.
    pub fn inner_mut(&mut self) -> &mut W {
        self.writer.inner_mut()
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory headers.
    /// - Writing the end of central directory header.
    ///
    /// Failure to call this function would result in a corrupted ZIP file.
    pub fn close(mut self) -> Result<W> {
        let cd_offset = self.writer.offset();

        for entry in &self.cd_entries {
            self.writer.write_all(&CDH_SIGNATURE.to_le_bytes())?;
            self.writer.write_all(&entry.header.as_slice())?;
            self.writer.write_all(&entry.filename)?;
        }

        let central_directory_size = self.writer.offset() - cd_offset;
        let size_cent_dir = to_u32(central_directory_size)?;
        let cent_dir_offset = to_u32(cd_offset)?;

        // The entry count was bounded by `write_entry_whole()`.
        let num_of_entries = self.cd_entries.len() as u16;

        let header = EndOfCentralDirectoryHeader {
            disk_num: 0,
            start_cent_dir_disk: 0,
            num_of_entries_disk: num_of_entries,
            num_of_entries,
            size_cent_dir,
            cent_dir_offset,
            file_comm_length: 0,
        };

        self.writer.write_all(&EOCDR_SIGNATURE.to_le_bytes())?;
        self.writer.write_all(&header.as_slice())?;
        self.writer.flush()?;

        tracing::debug!(
            entries = num_of_entries,
            cd_offset = cent_dir_offset,
            cd_size = size_cent_dir,
            total = self.writer.offset(),
            "wrote central directory"
        );

        Ok(self.writer.into_inner())
    }
}

fn to_u32(value: u64) -> Result<u32> {
    match value {
        value if value <= MAX_SIZE as u64 => Ok(value as u32),
        _ => Err(ZipError::UnsupportedSize(SizeLimitCase::ArchiveTooLarge)),
    }
}
