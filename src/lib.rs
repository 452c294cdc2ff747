// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # stored_zip
//!
//! A deterministic, in-memory ZIP archive builder used to package audio releases (audio, artwork, license and
//! metadata) into a single downloadable file.
//!
//! ## Features
//! - Byte-exact stored (uncompressed) archives, with no compression library involved.
//! - Deterministic output: building the same entries twice yields identical bytes.
//! - CRC32 values computed for every entry, so strict readers accept the output.
//! - Concurrent resolution of entry content from file-like readers (and the filesystem with `tokio-fs`).
//! - Aims for resonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Limitations
//! ZIP64 is not supported. More than 65,535 entries, an entry name longer than 65,535 bytes, or any size or offset
//! beyond 4 GiB is rejected with [`ZipError::UnsupportedSize`] rather than written incorrectly.
//!
//! ## Example
//! ```
//! # use stored_zip::{ArchiveBuilder, ArchiveEntry, ZipBlob};
//! # use stored_zip::error::Result;
//! #
//! # fn run() -> Result<()> {
//! let blob = ArchiveBuilder::new()
//!     .entry(ArchiveEntry::text("a.txt", "hello"))
//!     .entry(ArchiveEntry::binary("audio/track.wav", vec![0x52, 0x49, 0x46, 0x46]))
//!     .build()?;
//!
//! std::fs::write(ZipBlob::download_name("My Release"), blob.as_bytes())?;
//! #   Ok(())
//! # }
//! ```

pub mod archive;
pub mod base;
pub mod blob;
pub mod entry;
pub mod error;
pub mod package;
pub mod source;
pub mod spec;

pub(crate) mod string;

pub use crate::archive::{build_archive, ArchiveBuilder};
pub use crate::base::write::ZipFileWriter;
pub use crate::blob::ZipBlob;
pub use crate::entry::{ArchiveEntry, EntryContent};
pub use crate::error::ZipError;
pub use crate::spec::{date::ZipDateTime, Compression};
pub use crate::string::{StringEncoding, ZipString};
