// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::package::metadata::{ChainRecord, TrackMetadata};

/// Renders the fallback license used when no license text was produced upstream.
///
/// The output depends only on the metadata, so packages built from the same metadata stay byte-identical.
pub fn render_template(metadata: &TrackMetadata) -> String {
    let title = non_empty(&metadata.title, "Untitled");
    let artist = non_empty(&metadata.artist, "Unknown Artist");

    let mut lines = vec![String::from("LICENSE AGREEMENT"), String::new(), format!("Work: \"{title}\" by {artist}")];

    if let Some(chain) = &metadata.chain {
        let ChainRecord { chain, contract_address, token_id } = chain;
        lines.push(format!("Record: token {token_id} of contract {contract_address} on {chain}"));
    }

    lines.push(String::new());
    lines.push(format!(
        "The licensee is granted a non-exclusive, non-transferable license to reproduce and publicly perform the \
         work, including broadcast, provided that {artist} is credited as the author."
    ));
    lines.push(String::from(
        "Resale, sublicensing or modification of the work requires the written consent of the rights holders.",
    ));

    if !metadata.contributors.is_empty() {
        lines.push(String::new());
        lines.push(String::from("Rights holders:"));
        for contributor in &metadata.contributors {
            lines.push(format!("- {} ({}): {}%", contributor.name, contributor.role, contributor.split_percent));
        }
    }

    let mut license = lines.join("\n");
    license.push('\n');
    license
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    match value.trim() {
        "" => fallback,
        trimmed => trimmed,
    }
}
