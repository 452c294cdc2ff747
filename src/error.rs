// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// The fixed-width field a build would have overflowed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SizeLimitCase {
    TooManyEntries,
    FileNameTooLarge,
    EntryTooLarge,
    ArchiveTooLarge,
}

impl Display for SizeLimitCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyEntries => write!(f, "more than {} entries", u16::MAX),
            Self::FileNameTooLarge => write!(f, "an entry name longer than {} bytes", u16::MAX),
            Self::EntryTooLarge => write!(f, "an entry larger than {} bytes", u32::MAX),
            Self::ArchiveTooLarge => write!(f, "an archive offset beyond {} bytes", u32::MAX),
        }
    }
}

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("invalid entry: {0}")]
    InvalidEntry(&'static str),
    #[error("unsupported size: the archive would require {0}")]
    UnsupportedSize(SizeLimitCase),

    #[error("feature not supported: '{0}'")]
    FeatureNotSupported(&'static str),
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),

    #[error("unable to locate the end of central directory record")]
    UnableToLocateEOCDR,
    #[error("an upstream reader or writer returned an error: {0}")]
    UpstreamIoError(#[from] std::io::Error),
    #[error("a computed CRC32 value did not match the expected value")]
    CRC32CheckError,
    #[error("entry index was out of bounds")]
    EntryIndexOutOfBounds,
    #[error("Encountered an unexpected header (actual: {0:#x}, expected: {1:#x}).")]
    UnexpectedHeaderError(u32, u32),
    #[error("attempted to convert non-UTF8 bytes to a string/str")]
    StringNotUtf8,

    #[error("unable to serialise release metadata: {0}")]
    MetadataSerialization(#[from] serde_json::Error),
}
