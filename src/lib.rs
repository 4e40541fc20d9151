//! Doksen Iconset - App Icon Set Generator
//!
//! Renders the Doksen document icon (grey text stripes on cream, one orange
//! highlighted line) at every macOS icon size and writes the matching
//! `Contents.json` for `AppIcon.appiconset`.

pub mod style;
pub mod validation;
pub mod raster;
pub mod manifest;
pub mod hashing;
pub mod pipeline;

pub use style::{Color, StripeStyle};
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity, Validator};
pub use raster::{render, render_default, StripeGeometry, StripeRect};
pub use manifest::{render_manifest, write_manifest, Contents, ManifestEntry, MANIFEST_ENTRIES};
pub use hashing::{sha256_hex, fingerprint};
pub use pipeline::{save_png, icon_filename, IconsetGenerator, IconsetError, GenerationReport, GeneratedFile};

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output sizes, in generation order
pub const ICON_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

pub const DEFAULT_OUTPUT_DIR: &str = "Resources/Assets.xcassets/AppIcon.appiconset";
