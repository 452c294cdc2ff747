// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::write::{CentralDirectoryEntry, ZipFileWriter};
use crate::entry::ArchiveEntry;
use crate::error::{Result, SizeLimitCase, ZipError};
use crate::spec::consts::{LFH_SIGNATURE, MAX_NUM_FILES, MAX_SIZE};
use crate::spec::date::ZipDateTime;
use crate::spec::header::{CentralDirectoryRecord, GeneralPurposeFlag, LocalFileHeader};
use crate::spec::Compression;

use crc32fast::Hasher;
use std::io::Write;

pub struct EntryWholeWriter<'b, 'c, W: Write> {
    writer: &'b mut ZipFileWriter<W>,
    entry: &'c ArchiveEntry,
}

impl<'b, 'c, W: Write> EntryWholeWriter<'b, 'c, W> {
    pub fn from_raw(writer: &'b mut ZipFileWriter<W>, entry: &'c ArchiveEntry) -> Self {
        Self { writer, entry }
    }

    pub fn write(self) -> Result<()> {
        let filename = self.entry.name().as_bytes();
        let data = self.entry.data();

        if filename.is_empty() {
            return Err(ZipError::InvalidEntry("entry name is empty"));
        }
        // All limits are checked before any byte of this entry reaches the writer.
        if self.writer.cd_entries.len() >= MAX_NUM_FILES as usize {
            return Err(ZipError::UnsupportedSize(SizeLimitCase::TooManyEntries));
        }

        let file_name_length: u16 =
            filename.len().try_into().map_err(|_| ZipError::UnsupportedSize(SizeLimitCase::FileNameTooLarge))?;
        let size: u32 = data.len().try_into().map_err(|_| ZipError::UnsupportedSize(SizeLimitCase::EntryTooLarge))?;
        let lh_offset = self.writer.writer.offset();
        if lh_offset > MAX_SIZE as u64 {
            return Err(ZipError::UnsupportedSize(SizeLimitCase::ArchiveTooLarge));
        }

        let date = ZipDateTime::FIXED;
        let lf_header = LocalFileHeader {
            version: crate::spec::version::as_needed_to_extract(),
            flags: GeneralPurposeFlag {
                encrypted: false,
                data_descriptor: false,
                filename_unicode: !self.entry.name().is_ascii(),
            },
            compression: Compression::Stored.into(),
            mod_time: date.time(),
            mod_date: date.date(),
            crc: compute_crc(data),
            compressed_size: size,
            uncompressed_size: size,
            file_name_length,
            extra_field_length: 0,
        };

        let header = CentralDirectoryRecord {
            v_made_by: crate::spec::version::as_made_by(),
            v_needed: lf_header.version,
            flags: lf_header.flags,
            compression: lf_header.compression,
            mod_time: lf_header.mod_time,
            mod_date: lf_header.mod_date,
            crc: lf_header.crc,
            compressed_size: lf_header.compressed_size,
            uncompressed_size: lf_header.uncompressed_size,
            file_name_length: lf_header.file_name_length,
            extra_field_length: 0,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: 0,
            lh_offset: lh_offset as u32,
        };

        self.writer.writer.write_all(&LFH_SIGNATURE.to_le_bytes())?;
        self.writer.writer.write_all(&lf_header.as_slice())?;
        self.writer.writer.write_all(filename)?;
        self.writer.writer.write_all(data)?;

        tracing::trace!(
            name = self.entry.name(),
            offset = lh_offset,
            size = data.len(),
            crc = lf_header.crc,
            "wrote local file record"
        );

        self.writer.cd_entries.push(CentralDirectoryEntry { header, filename: filename.to_vec() });

        Ok(())
    }
}

pub(crate) fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
