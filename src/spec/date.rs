// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446

/// A date and time stored as per the MS-DOS representation used by ZIP files.
///
/// Written archives always carry [`ZipDateTime::FIXED`] so that building the same entries twice yields the same bytes.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// The all-zero timestamp written by this crate.
    pub const FIXED: ZipDateTime = ZipDateTime { date: 0, time: 0 };

    pub(crate) fn from_raw(date: u16, time: u16) -> Self {
        Self { date, time }
    }

    /// Returns the raw MS-DOS date field.
    pub fn date(&self) -> u16 {
        self.date
    }

    /// Returns the raw MS-DOS time field.
    pub fn time(&self) -> u16 {
        self.time
    }

    pub fn years(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    pub fn months(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    pub fn days(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    pub fn hours(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    pub fn minutes(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    pub fn seconds(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }
}
