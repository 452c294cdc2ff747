// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

/// The full on-disk size of each record, signature included.
pub const LFH_RECORD_LENGTH: usize = SIGNATURE_LENGTH + LFH_LENGTH;
pub const CDH_RECORD_LENGTH: usize = SIGNATURE_LENGTH + CDH_LENGTH;
pub const EOCDR_RECORD_LENGTH: usize = SIGNATURE_LENGTH + EOCDR_LENGTH;

/// The largest value which fits the non-ZIP64 16-bit count and length fields.
pub const MAX_NUM_FILES: u16 = u16::MAX;

/// The largest value which fits the non-ZIP64 32-bit size and offset fields.
pub const MAX_SIZE: u32 = u32::MAX;
