// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Resolution of entry content which must be awaited before an archive can be built.
//!
//! Building is a synchronous pass over in-memory bytes, so every entry's content has to be available first. Entries
//! are independent of each other and are resolved concurrently; the resolved list keeps the order it was given in.
//!
//! No timeouts or cancellation are applied here. Callers which need them should wrap the returned future.
//!
//! ### Example
//! ```no_run
//! # use stored_zip::source::{resolve_entries, PendingEntry};
//! # use stored_zip::build_archive;
//! # use stored_zip::error::Result;
//! # use futures_lite::io::Cursor;
//! #
//! async fn run() -> Result<()> {
//!     let pending = vec![
//!         PendingEntry::reader("audio/track.mp3", Cursor::new(vec![0xFF, 0xFB])),
//!         PendingEntry::ready("LICENSE.txt", "All rights reserved."),
//!     ];
//!
//!     let entries = resolve_entries(pending).await?;
//!     let blob = build_archive(&entries)?;
//!     Ok(())
//! }
//! ```

use crate::archive::build_archive;
use crate::blob::ZipBlob;
use crate::entry::{ArchiveEntry, EntryContent};
use crate::error::Result;

#[cfg(feature = "tokio-fs")]
use std::path::PathBuf;

use futures_lite::io::{AsyncRead, AsyncReadExt};
use futures_util::future::try_join_all;

/// Content which may still need to be read.
pub enum PendingContent {
    /// Content already held in memory.
    Ready(EntryContent),
    /// A file-like reader, read to its end as binary content.
    Reader(Box<dyn AsyncRead + Send + Unpin>),
    /// A file on the local filesystem, read as binary content.
    #[cfg(feature = "tokio-fs")]
    Path(PathBuf),
}

impl std::fmt::Debug for PendingContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PendingContent::Ready(content) => f.debug_tuple("Ready").field(content).finish(),
            PendingContent::Reader(_) => f.write_str("Reader(..)"),
            #[cfg(feature = "tokio-fs")]
            PendingContent::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

/// A named entry whose content has yet to be resolved.
#[derive(Debug)]
pub struct PendingEntry {
    name: String,
    content: PendingContent,
}

impl PendingEntry {
    /// Constructs a pending entry from arbitrary pending content.
    pub fn new(name: impl Into<String>, content: PendingContent) -> Self {
        Self { name: name.into(), content }
    }

    /// Constructs a pending entry whose content is already in memory.
    pub fn ready(name: impl Into<String>, content: impl Into<EntryContent>) -> Self {
        Self::new(name, PendingContent::Ready(content.into()))
    }

    /// Constructs a pending entry which reads its content from a file-like reader.
    pub fn reader<R>(name: impl Into<String>, reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        Self::new(name, PendingContent::Reader(Box::new(reader)))
    }

    /// Constructs a pending entry which reads its content from a file on the local filesystem.
    #[cfg(feature = "tokio-fs")]
    pub fn path(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(name, PendingContent::Path(path.into()))
    }

    /// Returns the name the entry will be written under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the entry's content fully into memory.
    pub async fn resolve(self) -> Result<ArchiveEntry> {
        let content = match self.content {
            PendingContent::Ready(content) => content,
            PendingContent::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).await?;
                EntryContent::Binary(buffer)
            }
            #[cfg(feature = "tokio-fs")]
            PendingContent::Path(path) => EntryContent::Binary(tokio::fs::read(path).await?),
        };

        tracing::trace!(name = %self.name, size = content.len(), "resolved entry content");
        Ok(ArchiveEntry::new(self.name, content))
    }
}

/// Resolves every pending entry concurrently, preserving their order.
///
/// The first upstream failure is returned and the remaining reads are dropped.
#[tracing::instrument(skip_all, fields(entries = pending.len()))]
pub async fn resolve_entries(pending: Vec<PendingEntry>) -> Result<Vec<ArchiveEntry>> {
    let entries = try_join_all(pending.into_iter().map(PendingEntry::resolve)).await?;
    tracing::debug!("resolved all entry content");

    Ok(entries)
}

/// Resolves every pending entry and builds an archive from them.
pub async fn build_archive_from(pending: Vec<PendingEntry>) -> Result<ZipBlob> {
    let entries = resolve_entries(pending).await?;
    build_archive(&entries)
}
