// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod locator;

use crate::error::{Result, ZipError};

use std::io::Read;

/// Read and return a dynamic length vector of bytes from a reader which impls Read.
pub(crate) fn read_bytes<R: Read>(reader: &mut R, length: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0; length];
    reader.read_exact(&mut buffer)?;

    Ok(buffer)
}

/// Assert that the next four-byte signature read by a reader which impls Read matches the expected signature.
pub(crate) fn assert_signature<R: Read>(reader: &mut R, expected: u32) -> Result<()> {
    let mut buffer = [0; 4];
    reader.read_exact(&mut buffer)?;

    match u32::from_le_bytes(buffer) {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}
