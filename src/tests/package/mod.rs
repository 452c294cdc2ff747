// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::read::mem::ZipFileReader;
use crate::package::license::render_template;
use crate::package::{
    AssetFile, ChainRecord, Contributor, PackageKind, ReleasePackage, TrackMetadata, LICENSE_FILENAME,
    METADATA_FILENAME, SPLITS_FILENAME,
};

fn metadata() -> TrackMetadata {
    TrackMetadata {
        title: String::from("Night Drive"),
        artist: String::from("The Examples"),
        duration_secs: Some(183.5),
        format: Some(String::from("mp3")),
        sample_rate: Some(44100),
        bpm: Some(120),
        key: Some(String::from("A minor")),
        license: None,
        chain: Some(ChainRecord {
            chain: String::from("testnet"),
            contract_address: String::from("0x0000000000000000000000000000000000000001"),
            token_id: String::from("42"),
        }),
        contributors: vec![
            Contributor { name: String::from("Ada"), role: String::from("composer"), split_percent: 60.0 },
            Contributor { name: String::from("Grace"), role: String::from("producer"), split_percent: 40.0 },
        ],
    }
}

fn names(package: &ReleasePackage) -> Vec<String> {
    package.entries().expect("failed to assemble entries").iter().map(|entry| entry.name().to_owned()).collect()
}

#[test]
fn mint_layout() {
    let audio = AssetFile::new("night drive.mp3", vec![0xFF, 0xFB]);
    let package = ReleasePackage::new(PackageKind::Mint, audio, metadata())
        .with_artwork(AssetFile::new("cover.png", vec![0x89, 0x50, 0x4E, 0x47]));

    assert_eq!(
        names(&package),
        vec!["audio/night drive.mp3", "artwork/cover.png", LICENSE_FILENAME, METADATA_FILENAME]
    );
}

#[test]
fn radio_submission_layout() {
    let audio = AssetFile::new("track.wav", vec![0; 16]);
    let package = ReleasePackage::new(PackageKind::RadioSubmission, audio, metadata());
    let entries = package.entries().expect("failed to assemble entries");

    assert_eq!(names(&package), vec!["audio/track.wav", LICENSE_FILENAME, METADATA_FILENAME, SPLITS_FILENAME]);

    let splits: Vec<Contributor> = serde_json::from_slice(entries[3].data()).expect("splits are not valid JSON");
    assert_eq!(splits, metadata().contributors);
}

#[test]
fn asset_names_are_sanitised() {
    let package = ReleasePackage::new(PackageKind::Mint, AssetFile::new("../../evil.mp3", vec![1]), metadata())
        .with_artwork(AssetFile::new("..", vec![2]));

    let names = names(&package);
    assert_eq!(names[0], "audio/....evil.mp3");
    assert_eq!(names[1], "artwork/cover");
}

#[test]
fn metadata_round_trip() {
    let package = ReleasePackage::new(PackageKind::Mint, AssetFile::new("a.mp3", vec![1]), metadata());
    let entries = package.entries().expect("failed to assemble entries");

    let parsed: TrackMetadata = serde_json::from_slice(entries[2].data()).expect("metadata is not valid JSON");
    assert_eq!(parsed, metadata());

    let json: serde_json::Value = serde_json::from_slice(entries[2].data()).expect("metadata is not valid JSON");
    assert_eq!(json["durationSecs"], 183.5);
    assert_eq!(json["chain"]["tokenId"], "42");
    assert!(json.get("license").is_none());
}

#[test]
fn provided_license_is_used() {
    let mut metadata = metadata();
    metadata.license = Some(String::from("Generated license text."));

    let package = ReleasePackage::new(PackageKind::Mint, AssetFile::new("a.mp3", vec![1]), metadata);
    let entries = package.entries().expect("failed to assemble entries");

    assert_eq!(entries[1].data(), b"Generated license text.");
}

#[test]
fn template_license_fallback() {
    let mut metadata = metadata();
    metadata.license = Some(String::from("   "));

    let package = ReleasePackage::new(PackageKind::Mint, AssetFile::new("a.mp3", vec![1]), metadata.clone());
    let entries = package.entries().expect("failed to assemble entries");
    let license = std::str::from_utf8(entries[1].data()).expect("license is not UTF-8");

    assert_eq!(license, render_template(&metadata));
    assert!(license.starts_with("LICENSE AGREEMENT\n"));
    assert!(license.contains("Work: \"Night Drive\" by The Examples"));
    assert!(license.contains("token 42 of contract 0x0000000000000000000000000000000000000001 on testnet"));
    assert!(license.contains("- Ada (composer): 60%"));
}

#[test]
fn template_license_defaults() {
    let license = render_template(&TrackMetadata::default());

    assert!(license.contains("Work: \"Untitled\" by Unknown Artist"));
    assert!(!license.contains("Record:"));
    assert!(!license.contains("Rights holders:"));
}

#[test]
fn build_is_deterministic() {
    let audio = AssetFile::new("a.mp3", vec![1, 2, 3]);
    let package = ReleasePackage::new(PackageKind::RadioSubmission, audio, metadata());

    let first = package.build().expect("failed to build package");
    let second = package.build().expect("failed to build package");
    assert_eq!(first, second);

    let zip_reader = ZipFileReader::new(first.as_bytes()).expect("failed to open reader");
    assert_eq!(zip_reader.entries().len(), 4);
    assert_eq!(zip_reader.read_entry(0).expect("failed to read audio"), &[1, 2, 3]);
}

#[test]
fn download_name() {
    let package = ReleasePackage::new(PackageKind::Mint, AssetFile::new("a.mp3", vec![1]), metadata());
    assert_eq!(package.download_name(), "The_Examples_-_Night_Drive.zip");

    let untitled = ReleasePackage::new(PackageKind::Mint, AssetFile::new("a.mp3", vec![1]), TrackMetadata::default());
    assert_eq!(untitled.download_name(), "archive.zip");
}
