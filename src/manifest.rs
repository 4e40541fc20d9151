//! Contents.json - Xcode App Icon Set Manifest
//!
//! The entries are a fixed table, authored independently of the sizes that get
//! rendered. Several entries share one file (e.g. `icon_32.png` is both 16pt@2x
//! and 32pt@1x); that many-to-one mapping is part of the format.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::IconsetError;

pub const MANIFEST_FILENAME: &str = "Contents.json";
pub const MANIFEST_AUTHOR: &str = "xcode";
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub filename: &'static str,
    pub idiom: &'static str,
    pub scale: &'static str,
    pub size: &'static str,
}

const fn mac(filename: &'static str, scale: &'static str, size: &'static str) -> ManifestEntry {
    ManifestEntry { filename, idiom: "mac", scale, size }
}

pub const MANIFEST_ENTRIES: [ManifestEntry; 10] = [
    mac("icon_16.png", "1x", "16x16"),
    mac("icon_32.png", "2x", "16x16"),
    mac("icon_32.png", "1x", "32x32"),
    mac("icon_64.png", "2x", "32x32"),
    mac("icon_128.png", "1x", "128x128"),
    mac("icon_256.png", "2x", "128x128"),
    mac("icon_256.png", "1x", "256x256"),
    mac("icon_512.png", "2x", "256x256"),
    mac("icon_512.png", "1x", "512x512"),
    mac("icon_1024.png", "2x", "512x512"),
];

/// Parsed form of Contents.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ContentsImage>,
    pub info: ContentsInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentsImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentsInfo {
    pub author: String,
    pub version: u32,
}

/// Render the manifest text. Column alignment matches the file Xcode checks in.
pub fn render_manifest() -> String {
    let rows: Vec<String> = MANIFEST_ENTRIES.iter()
        .map(|e| {
            format!(
                r#"    {{ "filename" : {:<17}"idiom" : "{}", "scale" : "{}", "size" : {:<10}}}"#,
                format!("\"{}\",", e.filename),
                e.idiom,
                e.scale,
                format!("\"{}\"", e.size),
            )
        })
        .collect();

    format!(
        "{{\n  \"images\" : [\n{}\n  ],\n  \"info\" : {{ \"author\" : \"{}\", \"version\" : {} }}\n}}\n",
        rows.join(",\n"),
        MANIFEST_AUTHOR,
        MANIFEST_VERSION,
    )
}

/// Write Contents.json into `directory`, replacing any existing one
pub fn write_manifest(directory: &Path) -> Result<PathBuf, IconsetError> {
    fs::create_dir_all(directory).map_err(|source| IconsetError::Io {
        path: directory.to_path_buf(),
        source,
    })?;
    let path = directory.join(MANIFEST_FILENAME);
    fs::write(&path, render_manifest()).map_err(|source| IconsetError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Read back a manifest written by `write_manifest`
pub fn read_manifest(path: &Path) -> Result<Contents, IconsetError> {
    let content = fs::read_to_string(path).map_err(|source| IconsetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
