// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

const STORED_VERSION: u16 = 20;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
//
// Version 2.0 covers stored entries and directory entries alike.
pub fn as_needed_to_extract() -> u16 {
    STORED_VERSION
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
//
// The upper byte (host compatibility) is left as MS-DOS since no external attributes are written.
pub fn as_made_by() -> u16 {
    STORED_VERSION
}
