//! Icon Rasterizer
//!
//! Draws the stripe stack onto a flat background. Geometry is defined at the
//! style's reference size and scaled linearly to the requested edge length.

use image::{Rgba, RgbaImage};

use crate::style::{Color, StripeStyle};

/// Scale-dependent geometry for one edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeGeometry {
    pub line_height: u32,
    pub corner_radius: u32,
    pub spacing: u32,
    pub line_width: u32,
    pub start_x: u32,
    pub start_y: u32,
    pub last_line_width: u32,
    pub line_count: u32,
    pub highlight_index: u32,
}

/// A single stripe, in pixel coordinates. Covers `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub radius: u32,
    pub color: Color,
}

impl StripeGeometry {
    pub fn for_size(edge_length: u32, style: &StripeStyle) -> Self {
        let reference = style.reference_size.max(1) as u64;
        // floor(v * edge / reference), never below one pixel
        let scale = |v: u32| -> u32 {
            let scaled = v as u64 * edge_length as u64 / reference;
            (scaled as u32).max(1)
        };

        let line_width = scale(style.line_width);
        let last_line_width = (line_width as f64 * style.last_line_fraction).floor() as u32;

        Self {
            line_height: scale(style.line_height),
            corner_radius: scale(style.corner_radius),
            spacing: scale(style.spacing),
            line_width,
            start_x: edge_length.saturating_sub(line_width) / 2,
            start_y: scale(style.start_y),
            last_line_width,
            line_count: style.line_count,
            highlight_index: style.highlight_index,
        }
    }

    /// Stripes from top to bottom, with their fill colour
    pub fn stripes(&self, style: &StripeStyle) -> Vec<StripeRect> {
        (0..self.line_count)
            .map(|i| {
                let is_last = i + 1 == self.line_count;
                StripeRect {
                    x: self.start_x,
                    y: self.start_y + i * self.spacing,
                    width: if is_last { self.last_line_width } else { self.line_width },
                    height: self.line_height,
                    radius: self.corner_radius,
                    color: style.stripe_color(i),
                }
            })
            .collect()
    }
}

/// Render one square icon of `edge_length` pixels
pub fn render(edge_length: u32, style: &StripeStyle) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(edge_length, edge_length, Rgba(style.background));
    let geometry = StripeGeometry::for_size(edge_length, style);
    log::debug!("geometry for {}px: {:?}", edge_length, geometry);

    for stripe in geometry.stripes(style) {
        fill_rounded_rect(&mut canvas, &stripe);
    }
    canvas
}

/// Render with the built-in Doksen style
pub fn render_default(edge_length: u32) -> RgbaImage {
    render(edge_length, &StripeStyle::default())
}

/// Fill every pixel whose centre lies inside the rounded rectangle.
/// No anti-aliasing: colours stay exact.
fn fill_rounded_rect(canvas: &mut RgbaImage, rect: &StripeRect) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let left = rect.x as f64;
    let top = rect.y as f64;
    let right = left + rect.width as f64;
    let bottom = top + rect.height as f64;
    let r = (rect.radius as f64)
        .min(rect.width as f64 / 2.0)
        .min(rect.height as f64 / 2.0);

    // Corner circle centres bound the "inner" rectangle
    let (inner_left, inner_right) = (left + r, right - r);
    let (inner_top, inner_bottom) = (top + r, bottom - r);

    let x_end = (rect.x + rect.width).min(canvas.width());
    let y_end = (rect.y + rect.height).min(canvas.height());
    let color = Rgba(rect.color);

    for py in rect.y..y_end {
        let cy = py as f64 + 0.5;
        let dy = distance_outside(cy, inner_top, inner_bottom);
        for px in rect.x..x_end {
            let cx = px as f64 + 0.5;
            let dx = distance_outside(cx, inner_left, inner_right);
            if dx * dx + dy * dy <= r * r {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

#[inline]
fn distance_outside(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo - v
    } else if v > hi {
        v - hi
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{CREAM, GRAY, ORANGE};
    use crate::ICON_SIZES;

    #[test]
    fn test_reference_geometry() {
        let g = StripeGeometry::for_size(1024, &StripeStyle::default());
        assert_eq!(g.line_height, 28);
        assert_eq!(g.corner_radius, 10);
        assert_eq!(g.spacing, 72);
        assert_eq!(g.line_width, 680);
        assert_eq!(g.start_x, 172);
        assert_eq!(g.start_y, 160);
        assert_eq!(g.last_line_width, 374);
    }

    #[test]
    fn test_smallest_geometry_is_clamped() {
        let g = StripeGeometry::for_size(16, &StripeStyle::default());
        assert_eq!(g.line_height, 1);
        assert_eq!(g.corner_radius, 1);
        assert_eq!(g.spacing, 1);
        assert_eq!(g.line_width, 10);
        assert_eq!(g.start_x, 3);
        assert_eq!(g.start_y, 2);
        assert_eq!(g.last_line_width, 5);
    }

    #[test]
    fn test_geometry_never_below_one_pixel() {
        let style = StripeStyle::default();
        for &size in ICON_SIZES.iter() {
            let g = StripeGeometry::for_size(size, &style);
            for v in [g.line_height, g.corner_radius, g.spacing, g.line_width, g.start_x, g.start_y] {
                assert!(v >= 1, "size {} produced {:?}", size, g);
            }
        }
    }

    #[test]
    fn test_stripes_fit_canvas() {
        let style = StripeStyle::default();
        for &size in ICON_SIZES.iter() {
            let stripes = StripeGeometry::for_size(size, &style).stripes(&style);
            assert_eq!(stripes.len(), 10);
            for s in &stripes {
                assert!(s.x + s.width <= size);
                assert!(s.y + s.height <= size);
            }
        }
    }

    #[test]
    fn test_canvas_corners_are_background() {
        let img = render_default(1024);
        for (x, y) in [(0, 0), (1023, 0), (0, 1023), (1023, 1023)] {
            assert_eq!(img.get_pixel(x, y).0, CREAM);
        }
    }

    #[test]
    fn test_highlight_stripe_bounding_box() {
        let img = render_default(1024);
        let accent: Vec<(u32, u32)> = img.enumerate_pixels()
            .filter(|(_, _, p)| p.0 == ORANGE)
            .map(|(x, y, _)| (x, y))
            .collect();
        let min_x = accent.iter().map(|p| p.0).min().unwrap();
        let max_x = accent.iter().map(|p| p.0).max().unwrap();
        let min_y = accent.iter().map(|p| p.1).min().unwrap();
        let max_y = accent.iter().map(|p| p.1).max().unwrap();
        assert_eq!((min_x, min_y), (172, 520));
        assert_eq!((max_x, max_y), (172 + 680 - 1, 520 + 28 - 1));
    }

    #[test]
    fn test_corners_are_rounded() {
        let img = render_default(1024);
        // Outer corner pixel of stripe 0 stays background, its middle row is filled
        assert_eq!(img.get_pixel(172, 160).0, CREAM);
        assert_eq!(img.get_pixel(172, 174).0, GRAY);
    }

    #[test]
    fn test_zero_width_stripe_is_skipped() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba(CREAM));
        let rect = StripeRect { x: 1, y: 1, width: 0, height: 2, radius: 1, color: GRAY };
        fill_rounded_rect(&mut img, &rect);
        assert!(img.pixels().all(|p| p.0 == CREAM));
    }
}
