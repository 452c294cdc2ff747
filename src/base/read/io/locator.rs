// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316>
//!
//! The end of central directory record may be followed by a variable-length file comment, so its start cannot be
//! assumed to sit 22 bytes from the end of the data. Since the whole archive is already in memory, we search the
//! tail of the data in reverse for the record's signature, bounded by the maximum comment length.

use crate::error::{Result, ZipError};
use crate::spec::consts::{EOCDR_LENGTH, EOCDR_SIGNATURE, SIGNATURE_LENGTH};

/// The lower bound of where the EOCDR signature cannot be located, relative to the end of the data.
const EOCDR_LOWER_BOUND: usize = EOCDR_LENGTH + SIGNATURE_LENGTH + u16::MAX as usize;

/// Locate the `end of central directory record` offset, if one exists.
/// The returned offset excludes the signature (4 bytes).
pub fn eocdr(data: &[u8]) -> Result<usize> {
    let upper = data.len().checked_sub(EOCDR_LENGTH).ok_or(ZipError::UnableToLocateEOCDR)?;
    let lower = data.len().saturating_sub(EOCDR_LOWER_BOUND);
    let signature = &EOCDR_SIGNATURE.to_le_bytes();

    match reverse_search_buffer(&data[lower..upper], signature) {
        Some(match_index) => Ok(lower + match_index + 1),
        None => Err(ZipError::UnableToLocateEOCDR),
    }
}

/// A naive reverse linear search along the buffer for the specified signature bytes.
///
/// Returns the index of the last byte of the match.
pub(crate) fn reverse_search_buffer(buffer: &[u8], signature: &[u8]) -> Option<usize> {
    'outer: for index in (0..buffer.len()).rev() {
        for (signature_index, signature_byte) in signature.iter().rev().enumerate() {
            if let Some(next_index) = index.checked_sub(signature_index) {
                if buffer[next_index] != *signature_byte {
                    continue 'outer;
                }
            } else {
                break 'outer;
            }
        }
        return Some(index);
    }
    None
}
