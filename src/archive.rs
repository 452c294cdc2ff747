// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Single-shot archive building from an ordered list of entries.

use crate::base::write::ZipFileWriter;
use crate::blob::ZipBlob;
use crate::entry::ArchiveEntry;
use crate::error::Result;
use crate::spec::consts::{CDH_RECORD_LENGTH, EOCDR_RECORD_LENGTH, LFH_RECORD_LENGTH, MAX_SIZE};

/// Builds a stored ZIP archive from an ordered list of entries.
///
/// This is a pure function of its input: the same entries always produce the same bytes.
///
/// # Example
/// ```
/// # use stored_zip::{build_archive, ArchiveEntry};
/// # use stored_zip::error::Result;
/// #
/// # fn run() -> Result<()> {
/// let blob = build_archive(&[ArchiveEntry::text("a.txt", "hello"), ArchiveEntry::text("dir/b.json", r#"{"x":1}"#)])?;
/// assert_eq!(blob.mime_type(), "application/zip");
/// #   Ok(())
/// # }
/// ```
#[tracing::instrument(skip_all, fields(entries = entries.len()))]
pub fn build_archive(entries: &[ArchiveEntry]) -> Result<ZipBlob> {
    let mut writer = ZipFileWriter::new(Vec::with_capacity(archive_length(entries).min(MAX_SIZE as usize)));

    for entry in entries {
        writer.write_entry_whole(entry)?;
    }

    Ok(ZipBlob::new(writer.close()?))
}

// Exact for any input which fits the format; used only as a capacity hint.
fn archive_length(entries: &[ArchiveEntry]) -> usize {
    entries.iter().fold(EOCDR_RECORD_LENGTH, |length, entry| {
        let name = entry.name().len();
        length
            .saturating_add(LFH_RECORD_LENGTH + CDH_RECORD_LENGTH)
            .saturating_add(name.saturating_mul(2))
            .saturating_add(entry.data().len())
    })
}

/// An explicitly constructed holder of the entries which make up one archive.
///
/// The builder holds no state beyond its entry list; [`ArchiveBuilder::build()`] may be called any number of times and
/// always yields identical bytes for identical entries.
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    entries: Vec<ArchiveEntry>,
}

impl ArchiveBuilder {
    /// Constructs a new builder with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new builder from an ordered list of entries.
    pub fn with_entries(entries: Vec<ArchiveEntry>) -> Self {
        Self { entries }
    }

    /// Appends an entry, consuming and returning the builder.
    pub fn entry(mut self, entry: ArchiveEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ArchiveEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in the order they will be written.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the archive.
    pub fn build(&self) -> Result<ZipBlob> {
        build_archive(&self.entries)
    }
}

impl FromIterator<ArchiveEntry> for ArchiveBuilder {
    fn from_iter<I: IntoIterator<Item = ArchiveEntry>>(iter: I) -> Self {
        Self::with_entries(iter.into_iter().collect())
    }
}
