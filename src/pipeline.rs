//! Generation Pipeline - Single Entry Point
//!
//! Renders every size in order, saves each PNG, then writes Contents.json.
//! No rollback: a failure leaves earlier files on disk.

use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::hashing::{fingerprint, sha256_file};
use crate::manifest::write_manifest;
use crate::raster::render;
use crate::style::StripeStyle;
use crate::validation::Validator;
use crate::ICON_SIZES;

#[derive(Debug, Error)]
pub enum IconsetError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid style file {path}: {source}")]
    StyleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Style rejected: {0}")]
    InvalidStyle(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub filename: String,
    /// Edge length in pixels, absent for the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub files: Vec<GeneratedFile>,
    /// Hash over `files`; equal across runs with the same style
    pub fingerprint: String,
}

/// Deterministic filename for one rendered size
pub fn icon_filename(size: u32) -> String {
    format!("icon_{}.png", size)
}

/// Write `image` as PNG into `directory`, creating it if needed
pub fn save_png(image: &RgbaImage, directory: &Path, filename: &str) -> Result<PathBuf, IconsetError> {
    fs::create_dir_all(directory).map_err(|source| IconsetError::Io {
        path: directory.to_path_buf(),
        source,
    })?;
    let path = directory.join(filename);
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconsetError::Image { path: path.clone(), source })?;
    Ok(path)
}

pub struct IconsetGenerator {
    style: StripeStyle,
    output_dir: PathBuf,
}

impl IconsetGenerator {
    /// Create a generator. Styles with validation errors are rejected here,
    /// before anything touches the filesystem.
    pub fn new(style: StripeStyle, output_dir: impl Into<PathBuf>) -> Result<Self, IconsetError> {
        let result = Validator::new().validate(&style);
        for warning in result.warnings() {
            log::warn!("style {}: {}", warning.rule, warning.message);
        }
        if !result.valid {
            return Err(IconsetError::InvalidStyle(result.error_summary()));
        }
        Ok(Self { style, output_dir: output_dir.into() })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate every icon and the manifest
    pub fn run(&self) -> Result<GenerationReport, IconsetError> {
        let mut files = Vec::with_capacity(ICON_SIZES.len() + 1);

        for &size in ICON_SIZES.iter() {
            let image = render(size, &self.style);
            let filename = icon_filename(size);
            let path = save_png(&image, &self.output_dir, &filename)?;
            log::info!("wrote {}", path.display());
            files.push(GeneratedFile {
                filename,
                size: Some(size),
                sha256: self.digest(&path)?,
            });
        }

        let path = write_manifest(&self.output_dir)?;
        log::info!("wrote {}", path.display());
        files.push(GeneratedFile {
            filename: crate::manifest::MANIFEST_FILENAME.to_string(),
            size: None,
            sha256: self.digest(&path)?,
        });

        let fingerprint = fingerprint(&files)?;
        log::info!("icon set complete in {} ({})", self.output_dir.display(), &fingerprint[..12]);

        Ok(GenerationReport {
            output_dir: self.output_dir.clone(),
            files,
            fingerprint,
        })
    }

    fn digest(&self, path: &Path) -> Result<String, IconsetError> {
        sha256_file(path).map_err(|source| IconsetError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
