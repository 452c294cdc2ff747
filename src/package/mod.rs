// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Packaging of an audio release into a single archive.
//!
//! A package always has the same layout, written in this order:
//! - `audio/<file name>`
//! - `artwork/<file name>`, when artwork is provided
//! - `LICENSE.txt`, the provided license text or [`license::render_template()`]
//! - `metadata.json`
//! - `splits.json`, for [`PackageKind::RadioSubmission`] only
//!
//! Asset file names are sanitised before use, so names from uploads cannot escape their directory.

pub mod license;
pub mod metadata;

pub use metadata::{ChainRecord, Contributor, TrackMetadata};

use crate::archive::build_archive;
use crate::blob::ZipBlob;
use crate::entry::ArchiveEntry;
use crate::error::Result;

use sanitize_filename::sanitize;

pub const LICENSE_FILENAME: &str = "LICENSE.txt";
pub const METADATA_FILENAME: &str = "metadata.json";
pub const SPLITS_FILENAME: &str = "splits.json";

/// What a package is being assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// The payload of a minted record.
    Mint,
    /// A radio rights registration, carrying contributor royalty splits.
    RadioSubmission,
}

/// An uploaded file, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AssetFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { file_name: file_name.into(), bytes: bytes.into() }
    }
}

/// Everything which goes into one release archive.
#[derive(Debug, Clone)]
pub struct ReleasePackage {
    pub kind: PackageKind,
    pub audio: AssetFile,
    pub artwork: Option<AssetFile>,
    pub metadata: TrackMetadata,
}

impl ReleasePackage {
    pub fn new(kind: PackageKind, audio: AssetFile, metadata: TrackMetadata) -> Self {
        Self { kind, audio, artwork: None, metadata }
    }

    /// Adds artwork to the package.
    pub fn with_artwork(mut self, artwork: AssetFile) -> Self {
        self.artwork = Some(artwork);
        self
    }

    /// Returns the package's entries in archive order.
    pub fn entries(&self) -> Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(5);

        let audio = asset_path("audio", &self.audio.file_name, "track");
        entries.push(ArchiveEntry::binary(audio, self.audio.bytes.clone()));

        if let Some(artwork) = &self.artwork {
            let name = asset_path("artwork", &artwork.file_name, "cover");
            entries.push(ArchiveEntry::binary(name, artwork.bytes.clone()));
        }

        let license = match self.metadata.license.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_owned(),
            _ => license::render_template(&self.metadata),
        };
        entries.push(ArchiveEntry::text(LICENSE_FILENAME, license));
        entries.push(ArchiveEntry::text(METADATA_FILENAME, serde_json::to_string_pretty(&self.metadata)?));

        if self.kind == PackageKind::RadioSubmission {
            let splits = serde_json::to_string_pretty(&self.metadata.contributors)?;
            entries.push(ArchiveEntry::text(SPLITS_FILENAME, splits));
        }

        tracing::debug!(kind = ?self.kind, entries = entries.len(), "assembled release package");
        Ok(entries)
    }

    /// Builds the package's archive.
    pub fn build(&self) -> Result<ZipBlob> {
        build_archive(&self.entries()?)
    }

    /// Returns a file name to offer the built archive under, derived from the artist and title.
    pub fn download_name(&self) -> String {
        let stem = match (self.metadata.artist.trim(), self.metadata.title.trim()) {
            ("", title) => title.to_owned(),
            (artist, "") => artist.to_owned(),
            (artist, title) => format!("{artist} - {title}"),
        };

        ZipBlob::download_name(&stem)
    }
}

fn asset_path(directory: &str, file_name: &str, fallback: &str) -> String {
    match sanitize(file_name.trim()) {
        name if name.trim_matches('.').is_empty() => format!("{directory}/{fallback}"),
        name => format!("{directory}/{name}"),
    }
}
