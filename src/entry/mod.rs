// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The input model for archive building.
//!
//! Callers decide once, at the boundary, whether an entry holds text or raw bytes by picking an [`EntryContent`]
//! variant. Past that point the writer only ever sees byte slices with a known length.

/// The content of an [`ArchiveEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    /// Raw bytes, written as-is.
    Binary(Vec<u8>),
    /// Text, written as its UTF-8 encoding.
    Text(String),
}

impl EntryContent {
    /// Returns the bytes which will be written for this content.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EntryContent::Binary(bytes) => bytes,
            EntryContent::Text(text) => text.as_bytes(),
        }
    }

    /// Returns the length of this content in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns whether this content is zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for EntryContent {
    fn from(value: Vec<u8>) -> Self {
        EntryContent::Binary(value)
    }
}

impl From<&[u8]> for EntryContent {
    fn from(value: &[u8]) -> Self {
        EntryContent::Binary(value.to_vec())
    }
}

impl From<String> for EntryContent {
    fn from(value: String) -> Self {
        EntryContent::Text(value)
    }
}

impl From<&str> for EntryContent {
    fn from(value: &str) -> Self {
        EntryContent::Text(value.to_owned())
    }
}

/// A named unit of content to be placed into an archive.
///
/// # Note
/// The name is written verbatim as UTF-8. No checks are made for duplicate names, leading slashes or `..`
/// components; callers which accept names from untrusted sources should sanitise them beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub(crate) name: String,
    pub(crate) content: EntryContent,
}

impl ArchiveEntry {
    /// Constructs a new entry from a name and its content.
    pub fn new(name: impl Into<String>, content: impl Into<EntryContent>) -> Self {
        Self { name: name.into(), content: content.into() }
    }

    /// Constructs a new entry holding raw bytes.
    pub fn binary(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(name, EntryContent::Binary(bytes.into()))
    }

    /// Constructs a new entry holding text.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, EntryContent::Text(text.into()))
    }

    /// Returns the entry's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry's content.
    pub fn content(&self) -> &EntryContent {
        &self.content
    }

    /// Returns the bytes which will be written for this entry.
    pub fn data(&self) -> &[u8] {
        self.content.as_bytes()
    }
}
