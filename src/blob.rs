// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use sanitize_filename::{sanitize_with_options, Options};

/// The MIME type of every archive produced by this crate.
pub const MIME_TYPE: &str = "application/zip";

const FALLBACK_STEM: &str = "archive";

/// A complete ZIP archive held in memory, ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipBlob {
    bytes: Vec<u8>,
}

impl ZipBlob {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the archive's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the blob, returning the archive's bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the MIME type to offer the blob under.
    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    /// Returns a file name suitable for saving the blob, derived from a user-provided stem.
    ///
    /// The stem is sanitised for use on any common platform, whitespace is collapsed to underscores and a `.zip`
    /// extension is added unless already present. An unusable stem falls back to `archive.zip`.
    pub fn download_name(stem: &str) -> String {
        let options = Options { windows: true, truncate: true, replacement: "" };
        let sanitized = sanitize_with_options(stem.trim(), options);
        let sanitized = sanitized.split_whitespace().collect::<Vec<_>>().join("_");
        let sanitized = sanitized.trim_matches('.');

        let stem = match sanitized.is_empty() {
            true => FALLBACK_STEM,
            false => sanitized,
        };

        match stem.to_ascii_lowercase().ends_with(".zip") {
            true => stem.to_owned(),
            false => format!("{stem}.zip"),
        }
    }
}

impl AsRef<[u8]> for ZipBlob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<ZipBlob> for Vec<u8> {
    fn from(blob: ZipBlob) -> Self {
        blob.bytes
    }
}
