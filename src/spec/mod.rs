// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod compression;
pub(crate) mod consts;
pub mod date;
pub(crate) mod header;
pub(crate) mod parse;
pub(crate) mod version;

pub use compression::Compression;
