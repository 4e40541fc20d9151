//! Stripe Style - Reference-Size Constants
//!
//! Every dimension here is expressed at `reference_size` pixels and scaled
//! per output size by the rasterizer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::pipeline::IconsetError;

/// RGBA colour, 8 bits per channel
pub type Color = [u8; 4];

pub const CREAM: Color = [255, 248, 240, 255];
pub const ORANGE: Color = [220, 100, 60, 255];
pub const GRAY: Color = [200, 195, 190, 255];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StripeStyle {
    pub reference_size: u32,
    pub line_height: u32,
    pub corner_radius: u32,
    pub spacing: u32,
    pub line_width: u32,
    pub start_y: u32,
    pub line_count: u32,
    pub highlight_index: u32,
    /// Width of the last stripe relative to `line_width`
    pub last_line_fraction: f64,
    pub background: Color,
    pub accent: Color,
    pub neutral: Color,
}

impl Default for StripeStyle {
    fn default() -> Self {
        Self {
            reference_size: 1024,
            line_height: 28,
            corner_radius: 10,
            spacing: 72,
            line_width: 680,
            start_y: 160,
            line_count: 10,
            highlight_index: 5,
            last_line_fraction: 0.55,
            background: CREAM,
            accent: ORANGE,
            neutral: GRAY,
        }
    }
}

impl StripeStyle {
    /// Load a style from a JSON file. Missing keys keep their default value.
    pub fn load_from_file(path: &Path) -> Result<Self, IconsetError> {
        let content = fs::read_to_string(path).map_err(|source| IconsetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| IconsetError::StyleParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Colour of the stripe at `index`
    pub fn stripe_color(&self, index: u32) -> Color {
        if index == self.highlight_index {
            self.accent
        } else {
            self.neutral
        }
    }
}
